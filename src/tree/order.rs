//! Branch indices and traversal orders for the LMR tree.

use std::cmp::Ordering;

use serde::Serialize;

/// Slot index of the "strictly less" branch.
pub const LEFT: usize = 0;
/// Slot index of the "equal" branch (the duplicate chain).
pub const MIDDLE: usize = 1;
/// Slot index of the "strictly greater" branch.
pub const RIGHT: usize = 2;

/// One of the three branches of an LMR tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Left,
    Middle,
    Right,
}

impl Branch {
    /// The slot index backing this branch.
    pub const fn index(self) -> usize {
        match self {
            Self::Left => LEFT,
            Self::Middle => MIDDLE,
            Self::Right => RIGHT,
        }
    }

    /// Branch to follow for a value comparing `ordering` against a node.
    pub fn toward(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Left,
            Ordering::Equal => Self::Middle,
            Ordering::Greater => Self::Right,
        }
    }
}

/// Order in which tree traversals emit nodes.
///
/// Every order keeps a node's MIDDLE chain right after the node itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalOrder {
    /// Node, middle chain, left subtree, right subtree.
    Preorder,
    /// Left subtree, node, middle chain, right subtree.
    Inorder,
    /// Left subtree, right subtree, node, middle chain.
    Postorder,
}

impl TraversalOrder {
    /// Return a human-readable name for this order.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Preorder => "preorder",
            Self::Inorder => "inorder",
            Self::Postorder => "postorder",
        }
    }

    /// Parse an order from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "preorder" | "pre" => Some(Self::Preorder),
            "inorder" | "in" => Some(Self::Inorder),
            "postorder" | "post" => Some(Self::Postorder),
            _ => None,
        }
    }
}

impl std::fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
