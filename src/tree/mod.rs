//! Search trees built from indexed nodes.

pub mod lmr;
pub mod order;

pub use lmr::LmrTree;
pub use order::{Branch, TraversalOrder, LEFT, MIDDLE, RIGHT};
