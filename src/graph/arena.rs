//! Node table: owns every indexed node and hands out `u64` handles.

use std::ops::Index;

use crate::types::{GraphError, GraphResult, IndexedNode, SlotConfig};

use super::HasNeighbors;

/// Owns a set of indexed nodes. IDs are assigned sequentially and double as
/// positions in the table.
#[derive(Debug, Clone)]
pub struct NodeArena<T> {
    nodes: Vec<IndexedNode<T>>,
    config: SlotConfig,
}

impl<T> NodeArena<T> {
    /// Create an empty arena with the default slot configuration.
    pub fn new() -> Self {
        Self::from_config(SlotConfig::default())
    }

    /// Create an empty arena whose nodes use `config`.
    pub fn with_config(config: SlotConfig) -> GraphResult<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    /// Caller guarantees `config` is valid.
    pub(crate) fn from_config(config: SlotConfig) -> Self {
        Self {
            nodes: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> SlotConfig {
        self.config
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a node, returns the assigned ID.
    pub fn add_node(&mut self, value: T) -> u64 {
        let id = self.nodes.len() as u64;
        self.nodes
            .push(IndexedNode::with_config(id, value, self.config));
        id
    }

    pub fn get(&self, id: u64) -> Option<&IndexedNode<T>> {
        self.nodes.get(id as usize)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut IndexedNode<T>> {
        self.nodes.get_mut(id as usize)
    }

    /// Get a node or fail with `NodeNotFound`.
    pub fn node(&self, id: u64) -> GraphResult<&IndexedNode<T>> {
        self.get(id).ok_or(GraphError::NodeNotFound(id))
    }

    /// Get a node mutably or fail with `NodeNotFound`.
    pub fn node_mut(&mut self, id: u64) -> GraphResult<&mut IndexedNode<T>> {
        self.get_mut(id).ok_or(GraphError::NodeNotFound(id))
    }

    pub fn contains(&self, id: u64) -> bool {
        (id as usize) < self.nodes.len()
    }

    /// All IDs in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.nodes.iter().map(IndexedNode::id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndexedNode<T>> {
        self.nodes.iter()
    }

    /// Connect `other` at slot `index` of `id`.
    pub fn connect(&mut self, id: u64, index: usize, other: u64) -> GraphResult<()> {
        if !self.contains(other) {
            return Err(GraphError::NodeNotFound(other));
        }
        self.node_mut(id)?.connect(index, other)
    }

    /// Connect `other` at the lowest free slot of `id`.
    pub fn attach(&mut self, id: u64, other: u64) -> GraphResult<usize> {
        if !self.contains(other) {
            return Err(GraphError::NodeNotFound(other));
        }
        self.node_mut(id)?.attach(other)
    }

    pub fn disconnect(&mut self, id: u64, index: usize) -> GraphResult<bool> {
        Ok(self.node_mut(id)?.disconnect(index))
    }

    pub fn jump_to(&self, id: u64, index: usize) -> GraphResult<u64> {
        self.node(id)?.jump_to(index)
    }

    pub fn occupied(&self, id: u64, index: usize) -> bool {
        self.get(id).is_some_and(|n| n.occupied(index))
    }

    pub fn is_saturated(&self, id: u64) -> GraphResult<bool> {
        Ok(self.node(id)?.is_saturated())
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<u64> for NodeArena<T> {
    type Output = IndexedNode<T>;

    fn index(&self, id: u64) -> &IndexedNode<T> {
        &self.nodes[id as usize]
    }
}

impl<T> HasNeighbors for NodeArena<T> {
    type Value = T;

    fn value(&self, id: u64) -> Option<&T> {
        self.get(id).map(IndexedNode::get)
    }

    fn neighbors(&self, id: u64) -> Vec<u64> {
        self.get(id).map(IndexedNode::neighbors).unwrap_or_default()
    }
}
