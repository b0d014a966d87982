//! grasple: graph primitives with indexed adjacency.
//!
//! Nodes hold their neighbors in numbered slots that grow on demand. On top
//! of that sit an undirected graph with depth-first traversal and connected
//! components, and a three-branch (less / equal / greater) search tree that
//! tolerates duplicates.

pub mod cli;
pub mod graph;
pub mod tree;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    connected_components, DepthFirstTraverser, GraphBuilder, HasNeighbors, IndexedGraph,
    NodeArena, TraverserState,
};
pub use tree::{Branch, LmrTree, TraversalOrder, LEFT, MIDDLE, RIGHT};
pub use types::{
    Edge, GraphError, GraphResult, GrowthPolicy, IndexedNode, SlotConfig, DEFAULT_EDGE_WEIGHT,
    DEFAULT_SLOT_CAPACITY, MAX_SLOT_CAPACITY, TREE_SLOT_CAPACITY,
};
