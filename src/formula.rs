//! Small formula-string utilities shared by the engine and the closure check.

/// Syntactic negation: strips a leading `~` if present, otherwise prepends
/// one. Operates purely on the surface string.
pub fn negation(formula: &str) -> String {
    match formula.strip_prefix('~') {
        Some(rest) => rest.to_string(),
        None => format!("~{formula}"),
    }
}
