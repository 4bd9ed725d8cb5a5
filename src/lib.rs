//! A small library for deciding satisfiability of formulae in a fixed
//! propositional/first-order language via the analytic tableau method.
//! As of now, the library supports:
//!  - Classifying a formula string into one of nine syntactic categories.
//!  - Capture-aware substitution during quantifier instantiation.
//!  - Building and expanding a tableau tree under the alpha/beta/gamma/delta
//!    rules, bounded by a fixed witness budget.
//!  - Checking a tableau for closure and rendering a three-valued verdict.
//!  - A driver that reads a mode-tagged input file and renders PARSE/SAT
//!    output lines.

pub mod closure;
pub mod decide;
pub mod driver;
pub mod engine;
pub mod formula;
pub mod lexicon;
pub mod preprocessing;
pub mod tableau;
