//! Slot allocation settings shared by every indexed node of a structure.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{GraphError, GraphResult, DEFAULT_SLOT_CAPACITY, MAX_SLOT_CAPACITY};

/// How a node's slot vector grows once an insertion needs more room.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthPolicy {
    /// Multiply the capacity by two.
    #[default]
    Double,
    /// Add a fixed number of slots.
    Linear { step: usize },
}

impl GrowthPolicy {
    /// The capacity that follows `current` under this policy.
    pub fn next_capacity(&self, current: usize) -> usize {
        match *self {
            Self::Double => current.max(1).saturating_mul(2),
            Self::Linear { step } => current.saturating_add(step.max(1)),
        }
    }

    /// Smallest capacity reachable from `current` that can address `index`.
    pub fn capacity_for(&self, current: usize, index: usize) -> usize {
        let mut capacity = current;
        while capacity <= index {
            let next = self.next_capacity(capacity);
            if next <= capacity {
                return index.saturating_add(1);
            }
            capacity = next;
        }
        capacity
    }
}

/// Slot settings for the nodes of an arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotConfig {
    /// Number of slots allocated when a node is created.
    pub initial_capacity: usize,
    /// Growth applied when a node runs out of slots.
    pub growth: GrowthPolicy,
    /// Slots a node may never grow beyond.
    pub max_capacity: usize,
}

impl SlotConfig {
    /// Config with a given initial capacity and the default growth policy.
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            growth: GrowthPolicy::default(),
            max_capacity: MAX_SLOT_CAPACITY,
        }
    }

    /// Reject settings that could never hold a neighbor.
    pub fn validate(&self) -> GraphResult<()> {
        if self.initial_capacity == 0 {
            return Err(GraphError::InvalidValue(
                "initial_capacity must be at least 1".to_string(),
            ));
        }
        if self.max_capacity < self.initial_capacity {
            return Err(GraphError::InvalidValue(format!(
                "max_capacity {} is below initial_capacity {}",
                self.max_capacity, self.initial_capacity
            )));
        }
        if let GrowthPolicy::Linear { step: 0 } = self.growth {
            return Err(GraphError::InvalidValue(
                "linear growth step must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> GraphResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file.
    pub fn load(path: &Path) -> GraphResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_SLOT_CAPACITY)
    }
}
