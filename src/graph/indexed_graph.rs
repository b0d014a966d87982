//! Undirected graph of indexed vertices.

use std::collections::HashMap;

use crate::types::{Edge, GraphError, GraphResult, IndexedNode, SlotConfig, DEFAULT_EDGE_WEIGHT};

use super::traversal::{connected_components, DepthFirstTraverser};
use super::{HasNeighbors, NodeArena};

/// Vertices live in an arena; every edge is mirrored as one slot on each
/// endpoint so either side can reach the other.
#[derive(Debug, Clone)]
pub struct IndexedGraph<T> {
    vertices: NodeArena<T>,
    edges: Vec<Edge>,
    /// Ordered endpoint pair -> position in `edges`.
    edge_index: HashMap<(u64, u64), usize>,
}

fn pair_key(a: u64, b: u64) -> (u64, u64) {
    (a.min(b), a.max(b))
}

impl<T> IndexedGraph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: NodeArena::new(),
            edges: Vec::new(),
            edge_index: HashMap::new(),
        }
    }

    /// Create an empty graph whose vertices use `config`.
    pub fn with_config(config: SlotConfig) -> GraphResult<Self> {
        Ok(Self {
            vertices: NodeArena::with_config(config)?,
            edges: Vec::new(),
            edge_index: HashMap::new(),
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Add a vertex, returns the assigned ID.
    pub fn add_vertex(&mut self, value: T) -> u64 {
        self.vertices.add_node(value)
    }

    pub fn vertex(&self, id: u64) -> Option<&IndexedNode<T>> {
        self.vertices.get(id)
    }

    /// Mutable access to a vertex's value. Slots stay managed by the graph.
    pub fn value_mut(&mut self, id: u64) -> Option<&mut T> {
        self.vertices.get_mut(id).map(IndexedNode::get_mut)
    }

    pub fn vertices(&self) -> &NodeArena<T> {
        &self.vertices
    }

    /// Edges in insertion order, except that a removal moves the last edge
    /// into the freed position.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The edge joining `a` and `b`, in either direction.
    pub fn edge(&self, a: u64, b: u64) -> Option<&Edge> {
        let pos = *self.edge_index.get(&pair_key(a, b))?;
        self.edges.get(pos)
    }

    pub fn edge_mut(&mut self, a: u64, b: u64) -> Option<&mut Edge> {
        let pos = *self.edge_index.get(&pair_key(a, b))?;
        self.edges.get_mut(pos)
    }

    pub fn adjacent(&self, a: u64, b: u64) -> bool {
        self.vertices.get(a).is_some_and(|n| n.adjacent(b))
    }

    /// Connect two vertices with a zero-weight edge.
    pub fn connect(&mut self, a: u64, b: u64) -> GraphResult<Edge> {
        self.connect_weighted(DEFAULT_EDGE_WEIGHT, a, b)
    }

    /// Connect two vertices. An already connected pair keeps its edge.
    pub fn connect_weighted(&mut self, weight: i64, a: u64, b: u64) -> GraphResult<Edge> {
        if a == b {
            return Err(GraphError::SelfConnection(a));
        }
        if !self.vertices.contains(a) {
            return Err(GraphError::NodeNotFound(a));
        }
        if !self.vertices.contains(b) {
            return Err(GraphError::NodeNotFound(b));
        }
        if let Some(existing) = self.edge(a, b) {
            return Ok(*existing);
        }

        let slot = self.vertices.attach(a, b)?;
        if let Err(e) = self.vertices.attach(b, a) {
            self.vertices.node_mut(a)?.disconnect(slot);
            return Err(e);
        }

        let edge = Edge::weighted(weight, a, b);
        self.edge_index.insert(pair_key(a, b), self.edges.len());
        self.edges.push(edge);
        log::debug!("connected {} <-> {} (weight {})", a, b, weight);
        Ok(edge)
    }

    /// Remove the edge between `a` and `b`. Returns false if there was none.
    pub fn disconnect(&mut self, a: u64, b: u64) -> bool {
        let Some(pos) = self.edge_index.remove(&pair_key(a, b)) else {
            return false;
        };
        self.edges.swap_remove(pos);
        if let Some(moved) = self.edges.get(pos) {
            let (start, end) = moved.endpoints();
            self.edge_index.insert(pair_key(start, end), pos);
        }
        if let Some(node) = self.vertices.get_mut(a) {
            node.disconnect_node(b);
        }
        if let Some(node) = self.vertices.get_mut(b) {
            node.disconnect_node(a);
        }
        log::debug!("disconnected {} <-> {}", a, b);
        true
    }

    /// Depth-first walk from `start`, applying `action` to each value.
    /// Returns the visit order.
    pub fn traverse<F>(&self, start: u64, action: F) -> GraphResult<Vec<u64>>
    where
        F: FnMut(&T),
    {
        let mut traverser = DepthFirstTraverser::new(self, start);
        traverser.run_with(action)?;
        Ok(traverser.visit_order().to_vec())
    }

    /// One representative vertex per connected component, in ID order.
    pub fn find_connected_components(&self) -> GraphResult<Vec<u64>> {
        connected_components(self, self.vertices.ids())
    }
}

impl<T> Default for IndexedGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HasNeighbors for IndexedGraph<T> {
    type Value = T;

    fn value(&self, id: u64) -> Option<&T> {
        self.vertices.value(id)
    }

    fn neighbors(&self, id: u64) -> Vec<u64> {
        self.vertices.neighbors(id)
    }
}
