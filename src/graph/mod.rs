//! In-memory graph operations: node arena, undirected graph, traversal.

pub mod arena;
pub mod builder;
pub mod indexed_graph;
pub mod neighbors;
pub mod traversal;

pub use arena::NodeArena;
pub use builder::GraphBuilder;
pub use indexed_graph::IndexedGraph;
pub use neighbors::HasNeighbors;
pub use traversal::{connected_components, DepthFirstTraverser, TraverserState};
