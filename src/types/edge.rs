//! Undirected, weighted edge between two nodes.

use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::{GraphError, GraphResult, DEFAULT_EDGE_WEIGHT};

/// An undirected relationship between two nodes.
///
/// `(start, end)` and `(end, start)` describe the same edge: equality and
/// hashing only look at the unordered pair of endpoints, never the weight.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Edge {
    start: u64,
    end: u64,
    weight: i64,
}

impl Edge {
    /// Create a zero-weight edge.
    pub fn new(start: u64, end: u64) -> Self {
        Self::weighted(DEFAULT_EDGE_WEIGHT, start, end)
    }

    /// Create an edge with an explicit weight.
    pub fn weighted(weight: i64, start: u64, end: u64) -> Self {
        Self { start, end, weight }
    }

    pub fn weight(&self) -> i64 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: i64) {
        self.weight = weight;
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    /// Both endpoints, in stored order.
    pub fn endpoints(&self) -> (u64, u64) {
        (self.start, self.end)
    }

    /// Whether this edge joins `a` and `b`, in either order.
    pub fn connects(&self, a: u64, b: u64) -> bool {
        (self.start == a && self.end == b) || (self.start == b && self.end == a)
    }

    /// Given one endpoint, return the other.
    pub fn divert(&self, endpoint: u64) -> GraphResult<u64> {
        if endpoint == self.start {
            Ok(self.end)
        } else if endpoint == self.end {
            Ok(self.start)
        } else {
            Err(GraphError::NotAnEndpoint(endpoint))
        }
    }

    fn ordered(&self) -> (u64, u64) {
        if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.ordered() == other.ordered()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordered().hash(state);
    }
}
