//! Top-level entry point: decide whether a formula is satisfiable.

use crate::engine;
use crate::tableau::{Tableau, Verdict};

/// Build a fresh tableau for `formula`, run the expansion engine to
/// completion, and return the resulting verdict.
pub fn decide(formula: &str) -> Verdict {
    let mut tableau = Tableau::new(formula);
    engine::run(&mut tableau);
    tableau
        .verdict()
        .expect("engine::run always sets a verdict before returning")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_bare_proposition_is_satisfiable() {
        assert_eq!(decide("p"), Verdict::Open);
    }

    #[test]
    fn a_propositional_contradiction_is_closed() {
        assert_eq!(decide("(p/\\~p)"), Verdict::Closed);
    }

    #[test]
    fn an_unsatisfiable_quantified_formula_closes() {
        assert_eq!(decide("(AxP(x,x)/\\~P(a,a))"), Verdict::Closed);
    }

    #[test]
    fn a_formula_requiring_more_witnesses_than_the_budget_is_exhausted() {
        let formula = format!("{}P(x,x)", "Ex".repeat(11));
        assert_eq!(decide(&formula), Verdict::Exhausted);
    }
}
