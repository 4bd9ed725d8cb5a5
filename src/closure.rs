//! Closure check: a branch closes when it contains a formula and its
//! syntactic negation; the tableau closes when every branch does.

use std::collections::HashSet;

use crate::formula::negation;
use crate::tableau::Tableau;

/// True iff every root-to-leaf branch of `tableau` contains a clashing pair.
pub fn closed(tableau: &Tableau) -> bool {
    tableau
        .branches()
        .iter()
        .all(|branch| branch_is_closed(tableau, branch))
}

fn branch_is_closed(tableau: &Tableau, branch: &[usize]) -> bool {
    let formulas: HashSet<&str> = branch
        .iter()
        .map(|&idx| tableau.node(idx).formula.as_str())
        .collect();
    formulas
        .iter()
        .any(|formula| formulas.contains(negation(formula).as_str()))
}
