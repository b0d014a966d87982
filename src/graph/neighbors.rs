//! The one capability every traversable structure shares.

/// A structure whose nodes, addressed by `u64` IDs, expose their neighbors.
pub trait HasNeighbors {
    type Value;

    /// The value held by `id`, or `None` if no such node exists.
    fn value(&self, id: u64) -> Option<&Self::Value>;

    /// Neighbors of `id` in slot order. Unknown IDs have none.
    fn neighbors(&self, id: u64) -> Vec<u64>;

    fn has_node(&self, id: u64) -> bool {
        self.value(id).is_some()
    }
}
