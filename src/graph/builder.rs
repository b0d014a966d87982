//! Fluent API for building IndexedGraph instances.

use crate::types::{GraphResult, SlotConfig, DEFAULT_EDGE_WEIGHT};

use super::IndexedGraph;

/// Fluent builder for constructing an IndexedGraph.
pub struct GraphBuilder<T> {
    config: SlotConfig,
    values: Vec<T>,
    links: Vec<(i64, u64, u64)>,
}

impl<T> GraphBuilder<T> {
    /// Create a new builder with the default slot configuration.
    pub fn new() -> Self {
        Self::with_config(SlotConfig::default())
    }

    /// Create a new builder with a specific slot configuration.
    pub fn with_config(config: SlotConfig) -> Self {
        Self {
            config,
            values: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Add a vertex; the returned ID is the one it will have in the graph.
    pub fn vertex(&mut self, value: T) -> u64 {
        self.values.push(value);
        (self.values.len() - 1) as u64
    }

    /// Add a zero-weight edge between two vertices.
    pub fn link(&mut self, a: u64, b: u64) -> &mut Self {
        self.weighted_link(DEFAULT_EDGE_WEIGHT, a, b)
    }

    /// Add a weighted edge between two vertices.
    pub fn weighted_link(&mut self, weight: i64, a: u64, b: u64) -> &mut Self {
        self.links.push((weight, a, b));
        self
    }

    /// Build the final graph. Fails on the first invalid link.
    pub fn build(self) -> GraphResult<IndexedGraph<T>> {
        let mut graph = IndexedGraph::with_config(self.config)?;
        for value in self.values {
            graph.add_vertex(value);
        }
        for (weight, a, b) in self.links {
            graph.connect_weighted(weight, a, b)?;
        }
        Ok(graph)
    }
}

impl<T> Default for GraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
