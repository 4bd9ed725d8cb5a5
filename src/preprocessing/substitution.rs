//! Capture-aware substitution: `expand(phi, v, c)` strips the outermost
//! quantifier binding `v` and replaces free occurrences of `v` by `c` within
//! its scope.

use std::collections::HashSet;

use crate::preprocessing::category::Category;
use crate::preprocessing::classifier::{classify, split_top_level};

/// Eliminate the outermost quantifier over `var` in `formula` and replace its
/// now-free occurrences by `constant`, refusing to substitute inside the
/// scope of an inner quantifier that rebinds the same variable name.
///
/// This operates directly on the surface string rather than a parsed tree;
/// it never fails, since the expansion engine only ever calls it on
/// formulas `classify` has already accepted.
pub fn expand(formula: &str, var: char, constant: char) -> String {
    expand_rec(formula, var, constant, &HashSet::new(), false)
}

fn expand_rec(
    formula: &str,
    var: char,
    constant: char,
    bound: &HashSet<char>,
    quantifier_removed: bool,
) -> String {
    match classify(formula) {
        Category::Atom => {
            if bound.contains(&var) {
                formula.to_string()
            } else {
                formula
                    .chars()
                    .map(|c| if c == var { constant } else { c })
                    .collect()
            }
        }
        Category::NegFirstOrder | Category::NegPropositional => {
            let inner: String = formula.chars().skip(1).collect();
            let new_inner = expand_rec(&inner, var, constant, bound, quantifier_removed);
            format!("~{new_inner}")
        }
        Category::Universal | Category::Existential => {
            let chars: Vec<char> = formula.chars().collect();
            let quantifier = chars[0];
            let bound_var = chars[1];
            let scope: String = chars[2..].iter().collect();

            if bound_var == var && !quantifier_removed {
                expand_rec(&scope, var, constant, bound, true)
            } else {
                let mut shadowed = bound.clone();
                shadowed.insert(bound_var);
                let new_scope = expand_rec(&scope, var, constant, &shadowed, quantifier_removed);
                format!("{quantifier}{bound_var}{new_scope}")
            }
        }
        Category::BinaryFirstOrder | Category::BinaryPropositional => {
            let (lhs, conn, rhs) =
                split_top_level(formula).expect("a well-classified binary formula always splits");
            let new_lhs = expand_rec(&lhs, var, constant, bound, quantifier_removed);
            let new_rhs = expand_rec(&rhs, var, constant, bound, quantifier_removed);
            format!("({new_lhs}{conn}{new_rhs})")
        }
        // Propositions carry no variables; ill-formed input is returned unchanged.
        Category::Proposition | Category::NotAFormula => formula.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_matching_outer_quantifier() {
        assert_eq!(expand("AxP(x,x)", 'x', 'a'), "P(a,a)");
        assert_eq!(expand("ExP(x,a)", 'x', 'b'), "P(b,a)");
    }

    #[test]
    fn leaves_outer_negation_in_place_on_negated_universal() {
        // The engine deliberately expands the whole `~Av psi` node, keeping
        // the leading `~` in place.
        assert_eq!(expand("~AxP(x,a)", 'x', 'c'), "~P(c,a)");
    }

    #[test]
    fn refuses_to_substitute_across_a_rebinding_quantifier() {
        let formula = "Ax(P(x,x)/\\AxP(x,x))";
        assert_eq!(expand(formula, 'x', 'a'), "(P(a,a)/\\AxP(x,x))");
    }

    #[test]
    fn does_not_touch_unrelated_variables() {
        assert_eq!(expand("P(x,y)", 'x', 'a'), "P(a,y)");
        assert_eq!(expand("P(x,y)", 'y', 'b'), "P(x,b)");
    }

    #[test]
    fn propositions_and_garbage_pass_through_unchanged() {
        assert_eq!(expand("p", 'x', 'a'), "p");
        assert_eq!(expand("not a formula", 'x', 'a'), "not a formula");
    }
}
