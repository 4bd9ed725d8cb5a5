//! The expansion engine: drains the general queue of pending occurrences,
//! classifies each, and applies the matching tableau rule.

use std::collections::VecDeque;

use log::{debug, trace, warn};

use crate::formula::negation;
use crate::lexicon::CONSTANTS;
use crate::preprocessing::{classify, expand, split_top_level, Category};
use crate::tableau::{Tableau, Verdict};

/// Run the expansion engine to completion on `tableau`, starting from its
/// root. Sets `tableau`'s verdict before returning.
pub fn run(tableau: &mut Tableau) {
    let mut queue: VecDeque<usize> = VecDeque::new();
    queue.push_back(tableau.root());

    while let Some(idx) = queue.pop_front() {
        tableau.normalise(idx);
        let formula = tableau.node(idx).formula.clone();
        let category = classify(&formula);
        debug!(
            "expanding node {idx} ({formula}) as category {}",
            u8::from(category)
        );

        match category {
            Category::Universal => expand_universal(tableau, idx, &formula),
            Category::Existential => {
                if !expand_existential(tableau, idx, &formula) {
                    return;
                }
            }
            Category::NegFirstOrder | Category::NegPropositional => {
                if !expand_negation(tableau, idx, &formula) {
                    return;
                }
            }
            Category::BinaryFirstOrder | Category::BinaryPropositional => {
                expand_binary(tableau, idx, &formula);
            }
            Category::Atom | Category::Proposition => {
                // Literal: no expansion, left for the closure check.
            }
            Category::NotAFormula => {
                // classify is total; nothing sensible to expand.
            }
        }

        let node = tableau.node(idx);
        if let Some(l) = node.left {
            queue.push_back(l);
        }
        if let Some(r) = node.right {
            queue.push_back(r);
        }
    }

    if tableau.verdict().is_none() {
        let verdict = if crate::closure::closed(tableau) {
            Verdict::Closed
        } else {
            Verdict::Open
        };
        tableau.set_verdict(verdict);
    }
}

/// gamma rule: `Av psi`, reusable over the whole fixed constant universe.
fn expand_universal(tableau: &mut Tableau, idx: usize, formula: &str) {
    let var = bound_variable(formula);
    for &c in CONSTANTS.iter() {
        let instance = expand(formula, var, c);
        trace!("extend_linear at node {idx} with {instance}");
        tableau.extend_linear(idx, &instance);
    }
}

/// delta rule: `Ev psi`, consumes one fresh witness from the budget.
/// Returns `false` if the budget was exhausted (engine must stop).
fn expand_existential(tableau: &mut Tableau, idx: usize, formula: &str) -> bool {
    if tableau.budget_exhausted() {
        warn!("witness budget exhausted at node {idx}; marking tableau exhausted");
        tableau.set_verdict(Verdict::Exhausted);
        return false;
    }
    let var = bound_variable(formula);
    let c = tableau.take_fresh_constant();
    let instance = expand(formula, var, c);
    trace!("extend_linear at node {idx} with {instance}");
    tableau.extend_linear(idx, &instance);
    true
}

/// Dispatch on a negated formula's inner category (`~(phi)` where the node
/// itself classified as 2 or 7). Returns `false` if the budget was exhausted.
fn expand_negation(tableau: &mut Tableau, idx: usize, formula: &str) -> bool {
    let inner: String = formula.chars().skip(1).collect();
    match classify(&inner) {
        Category::BinaryFirstOrder | Category::BinaryPropositional => {
            let (lhs, conn, rhs) =
                split_top_level(&inner).expect("negated binary formula splits");
            match conn {
                "/\\" => tableau.extend_beta(idx, &negation(&lhs), &negation(&rhs)),
                "\\/" => tableau.extend_alpha(idx, &negation(&lhs), &negation(&rhs)),
                "=>" => tableau.extend_alpha(idx, &lhs, &negation(&rhs)),
                other => unreachable!("connective set is fixed, got {other}"),
            }
        }
        Category::Universal => {
            // delta: negated universal. Budget-checked like a plain existential.
            if tableau.budget_exhausted() {
                warn!("witness budget exhausted at node {idx}; marking tableau exhausted");
                tableau.set_verdict(Verdict::Exhausted);
                return false;
            }
            let var = bound_variable(&inner);
            let c = tableau.take_fresh_constant();
            // Expand the whole negated formula: this keeps the leading `~`
            // in place (so the outer negation survives the instantiation).
            let instance = expand(formula, var, c);
            tableau.extend_linear(idx, &instance);
        }
        Category::Existential => {
            // gamma: negated existential, reusable over the whole universe.
            let var = bound_variable(&inner);
            for &c in CONSTANTS.iter() {
                let instance = expand(formula, var, c);
                tableau.extend_linear(idx, &negation(&instance));
            }
        }
        _ => {
            // Negated literal: nothing to expand, left for the closure check.
        }
    }
    true
}

/// alpha/beta rule over a (non-negated) binary formula.
fn expand_binary(tableau: &mut Tableau, idx: usize, formula: &str) {
    let (lhs, conn, rhs) = split_top_level(formula).expect("well-classified binary formula splits");
    match conn {
        "/\\" => tableau.extend_alpha(idx, &lhs, &rhs),
        "\\/" => tableau.extend_beta(idx, &lhs, &rhs),
        "=>" => tableau.extend_beta(idx, &negation(&lhs), &rhs),
        other => unreachable!("connective set is fixed, got {other}"),
    }
}

/// The variable bound by a quantifier formula `Qv psi` (`Q` in `{A, E}`).
fn bound_variable(formula: &str) -> char {
    formula
        .chars()
        .nth(1)
        .expect("a quantified formula always has a bound variable in position 1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decide::decide;

    #[test]
    fn a_handful_of_propositional_and_quantified_formulas_decide_correctly() {
        assert_eq!(decide("p"), Verdict::Open);
        assert_eq!(decide("(p/\\~p)"), Verdict::Closed);
        assert_eq!(decide("(p\\/~p)"), Verdict::Open);
        assert_eq!(decide("~(p=>p)"), Verdict::Closed);
        assert_eq!(decide("AxP(x,x)"), Verdict::Open);
        assert_eq!(decide("(AxP(x,x)/\\~P(a,a))"), Verdict::Closed);
    }

    /// `ExAyP(x,y)` only ever consumes a single witness: the outer delta
    /// fires once, and the inner gamma substitutes over the fixed constant
    /// table without touching the budget at all.
    #[test]
    fn a_single_existential_wrapping_a_universal_stays_open() {
        let mut tableau = Tableau::new("ExAyP(x,y)");
        run(&mut tableau);
        assert_eq!(tableau.verdict(), Some(Verdict::Open));
        assert_eq!(tableau.used_constants(), 1);
    }

    /// Eleven nested existentials over the same bound variable need eleven
    /// fresh witnesses, one past the ten-constant budget.
    #[test]
    fn eleven_nested_existentials_exhaust_the_budget() {
        let formula = format!("{}P(x,x)", "Ex".repeat(11));
        let mut tableau = Tableau::new(formula);
        run(&mut tableau);
        assert_eq!(tableau.verdict(), Some(Verdict::Exhausted));
        assert_eq!(tableau.used_constants(), crate::lexicon::MAX_CONSTANTS);
    }

    #[test]
    fn budget_never_exceeds_max_constants_during_expansion() {
        let formula = format!("{}P(x,x)", "Ex".repeat(11));
        let mut tableau = Tableau::new(formula);
        run(&mut tableau);
        assert!(tableau.used_constants() <= crate::lexicon::MAX_CONSTANTS);
    }
}
