//! Indexed node: a value plus numbered neighbor slots.

use super::{GraphError, GraphResult, GrowthPolicy, SlotConfig};

/// A value holder whose neighbors live at explicit integer indices.
///
/// Each slot is either empty or holds the ID of exactly one neighbor. Slot
/// IDs are non-owning handles into the arena that owns every node.
#[derive(Debug, Clone)]
pub struct IndexedNode<T> {
    id: u64,
    value: T,
    slots: Vec<Option<u64>>,
    growth: GrowthPolicy,
    max_capacity: usize,
}

impl<T> IndexedNode<T> {
    /// Create a node with the default slot configuration.
    pub fn new(id: u64, value: T) -> Self {
        Self::with_config(id, value, SlotConfig::default())
    }

    /// Create a node with `config.initial_capacity` empty slots.
    pub fn with_config(id: u64, value: T, config: SlotConfig) -> Self {
        Self {
            id,
            value,
            slots: vec![None; config.initial_capacity.max(1)],
            growth: config.growth,
            max_capacity: config.max_capacity.max(1),
        }
    }

    /// The node's own ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Replace the value, returning the previous one. Slots are untouched.
    pub fn set(&mut self, value: T) -> T {
        std::mem::replace(&mut self.value, value)
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// Number of currently allocated slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn degree(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn occupied(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(Some(_)))
    }

    /// True when every allocated slot holds a neighbor.
    pub fn is_saturated(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Store `other` at `index`, growing the slot vector if `index` lies
    /// past the current capacity. Indices at or beyond the node's slot
    /// limit fail with `SlotLimit`.
    pub fn connect(&mut self, index: usize, other: u64) -> GraphResult<()> {
        if other == self.id {
            return Err(GraphError::SelfConnection(self.id));
        }
        if self.occupied(index) {
            return Err(GraphError::IndexOccupied {
                node: self.id,
                index,
            });
        }
        if index >= self.slots.len() {
            if index >= self.max_capacity {
                return Err(self.slot_limit(index));
            }
            let capacity = self
                .growth
                .capacity_for(self.slots.len(), index)
                .min(self.max_capacity);
            self.grow_to(capacity, index)?;
        }
        self.slots[index] = Some(other);
        Ok(())
    }

    /// Store `other` in the lowest empty slot and return that index.
    pub fn attach(&mut self, other: u64) -> GraphResult<usize> {
        if other == self.id {
            return Err(GraphError::SelfConnection(self.id));
        }
        if self.is_saturated() {
            let len = self.slots.len();
            if len >= self.max_capacity {
                return Err(self.slot_limit(len));
            }
            let capacity = self.growth.next_capacity(len).min(self.max_capacity);
            self.grow_to(capacity, len)?;
        }
        let index = self
            .slots
            .iter()
            .position(Option::is_none)
            .unwrap_or(self.slots.len());
        self.connect(index, other)?;
        Ok(index)
    }

    /// The neighbor at `index`.
    pub fn jump_to(&self, index: usize) -> GraphResult<u64> {
        match self.slots.get(index) {
            Some(Some(id)) => Ok(*id),
            _ => Err(GraphError::IndexEmpty {
                node: self.id,
                index,
            }),
        }
    }

    /// Clear slot `index`. Returns false if it was already empty.
    pub fn disconnect(&mut self, index: usize) -> bool {
        match self.slots.get_mut(index) {
            Some(slot @ Some(_)) => {
                *slot = None;
                true
            }
            _ => false,
        }
    }

    /// Clear every slot that refers to `other`.
    pub fn disconnect_node(&mut self, other: u64) -> bool {
        let mut removed = false;
        for slot in self.slots.iter_mut() {
            if *slot == Some(other) {
                *slot = None;
                removed = true;
            }
        }
        removed
    }

    /// Whether `other` sits in any slot.
    pub fn adjacent(&self, other: u64) -> bool {
        self.slots.contains(&Some(other))
    }

    /// Index of the first slot holding `other`.
    pub fn index_of(&self, other: u64) -> Option<usize> {
        self.slots.iter().position(|s| *s == Some(other))
    }

    /// Neighbor IDs in slot order.
    pub fn neighbors(&self) -> Vec<u64> {
        self.slots.iter().flatten().copied().collect()
    }

    /// Occupied `(index, neighbor)` pairs in slot order.
    pub fn slots(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.map(|id| (i, id)))
    }

    /// Slot limit of this node.
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    fn slot_limit(&self, index: usize) -> GraphError {
        GraphError::SlotLimit {
            node: self.id,
            index,
            limit: self.max_capacity,
        }
    }

    fn grow_to(&mut self, capacity: usize, index: usize) -> GraphResult<()> {
        log::trace!(
            "node {} slots grow {} -> {}",
            self.id,
            self.slots.len(),
            capacity
        );
        let additional = capacity.saturating_sub(self.slots.len());
        if self.slots.try_reserve_exact(additional).is_err() {
            log::warn!("node {} could not allocate {} slots", self.id, capacity);
            return Err(self.slot_limit(index));
        }
        self.slots.resize(capacity, None);
        Ok(())
    }
}
