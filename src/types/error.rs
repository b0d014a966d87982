//! Error types for the grasple library.

use thiserror::Error;

/// All errors that can occur in the grasple library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A node was asked to hold itself as a neighbor.
    #[error("Self-connection not allowed on node {0}")]
    SelfConnection(u64),

    /// The slot already holds a neighbor.
    #[error("Index {index} of node {node} is already occupied")]
    IndexOccupied { node: u64, index: usize },

    /// The slot holds no neighbor.
    #[error("No neighbor at index {index} of node {node}")]
    IndexEmpty { node: u64, index: usize },

    /// The slot lies past what the node is allowed to allocate.
    #[error("Index {index} of node {node} exceeds the slot limit of {limit}")]
    SlotLimit {
        node: u64,
        index: usize,
        limit: usize,
    },

    /// The node is neither endpoint of the edge.
    #[error("Node {0} is not an endpoint of this edge")]
    NotAnEndpoint(u64),

    /// A mandatory value is missing or out of range.
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Node not found by ID.
    #[error("Node ID {0} not found")]
    NodeNotFound(u64),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON input.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for grasple operations.
pub type GraphResult<T> = Result<T, GraphError>;
