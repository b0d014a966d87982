//! Core data types: indexed nodes, edges, slot configuration and errors.

pub mod config;
pub mod edge;
pub mod error;
pub mod node;

pub use config::{GrowthPolicy, SlotConfig};
pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use node::IndexedNode;

/// Slots allocated for a new graph vertex.
pub const DEFAULT_SLOT_CAPACITY: usize = 4;

/// Upper bound on the slots a single node may allocate.
pub const MAX_SLOT_CAPACITY: usize = 1 << 20;

/// Slots allocated for a new LMR tree node (LEFT, MIDDLE, RIGHT).
pub const TREE_SLOT_CAPACITY: usize = 3;

/// Weight of an edge created without an explicit one.
pub const DEFAULT_EDGE_WEIGHT: i64 = 0;
