//! The tableau tree: nodes, leaf-extension primitives, and verdict/budget
//! bookkeeping.

pub mod node;
pub mod tree;

pub use node::TableauNode;
pub use tree::{Tableau, Verdict};
