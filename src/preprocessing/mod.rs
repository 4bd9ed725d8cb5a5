//! Formula classification and capture-aware substitution.

pub mod category;
pub mod classifier;
pub mod substitution;

pub use category::Category;
pub use classifier::{classify, connective, lhs, rhs, split_top_level};
pub use substitution::expand;
