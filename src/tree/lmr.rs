//! Three-branch binary search tree with a duplicate chain.

use std::ops::{Bound, RangeBounds};

use crate::graph::{HasNeighbors, NodeArena};
use crate::types::{GraphError, GraphResult, IndexedNode, SlotConfig, TREE_SLOT_CAPACITY};

use super::order::{Branch, TraversalOrder};

/// Binary search tree whose nodes have LEFT (less), MIDDLE (equal) and
/// RIGHT (greater) branches.
///
/// Duplicates hang off the MIDDLE slot of the first node holding an equal
/// value and form a chain in insertion order; they never add to the height.
/// The tree owns its nodes through an arena and links hold arena IDs.
#[derive(Debug, Clone)]
pub struct LmrTree<T> {
    nodes: NodeArena<T>,
    root: u64,
}

/// Work item of the explicit-stack walk.
enum Step {
    Expand(u64),
    Emit(u64),
}

impl<T: Ord> LmrTree<T> {
    /// Create a tree holding a single root value.
    pub fn new(root: T) -> Self {
        let mut nodes = NodeArena::from_config(SlotConfig::with_capacity(TREE_SLOT_CAPACITY));
        let root = nodes.add_node(root);
        Self { nodes, root }
    }

    /// Build a tree from a sequence; the first value becomes the root.
    pub fn from_values<I>(values: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut values = values.into_iter();
        let root = values.next().ok_or_else(|| {
            GraphError::InvalidValue("an LMR tree needs a root value".to_string())
        })?;
        let mut tree = Self::new(root);
        tree.add_all(values);
        Ok(tree)
    }

    pub fn root(&self) -> u64 {
        self.root
    }

    /// Number of values stored, duplicates included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, id: u64) -> Option<&IndexedNode<T>> {
        self.nodes.get(id)
    }

    pub fn value(&self, id: u64) -> Option<&T> {
        self.nodes.get(id).map(IndexedNode::get)
    }

    /// Child of `id` on `branch`, if any.
    pub fn child(&self, id: u64, branch: Branch) -> Option<u64> {
        self.nodes.get(id)?.jump_to(branch.index()).ok()
    }

    /// Insert a value and return the ID of its new node.
    pub fn add(&mut self, value: T) -> u64 {
        let id = self.nodes.add_node(value);
        let mut current = self.root;
        loop {
            let branch = Branch::toward(self.nodes[id].get().cmp(self.nodes[current].get()));
            match self.child(current, branch) {
                Some(next) => current = next,
                None => {
                    let linked = self.nodes.connect(current, branch.index(), id);
                    debug_assert!(linked.is_ok(), "free {:?} slot on node {}", branch, current);
                    log::trace!("lmr add {} under {} ({:?})", id, current, branch);
                    return id;
                }
            }
        }
    }

    /// Insert every value in order.
    pub fn add_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.add(value);
        }
    }

    /// First node on the search path whose value equals `value`.
    fn find_first(&self, value: &T) -> Option<u64> {
        let mut current = self.root;
        loop {
            let branch = Branch::toward(value.cmp(self.nodes[current].get()));
            if branch == Branch::Middle {
                return Some(current);
            }
            current = self.child(current, branch)?;
        }
    }

    /// Whether any node holds a value equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.find_first(value).is_some()
    }

    /// Whether this exact node is reachable by searching for its value.
    pub fn contains_node(&self, id: u64) -> bool {
        let Some(target) = self.value(id) else {
            return false;
        };
        let mut current = self.root;
        loop {
            if current == id {
                return true;
            }
            let branch = Branch::toward(target.cmp(self.nodes[current].get()));
            match self.child(current, branch) {
                Some(next) => current = next,
                None => return false,
            }
        }
    }

    /// Every node equal to `value`, first-inserted first.
    ///
    /// Once a match is found only its MIDDLE chain is followed.
    pub fn find_all(&self, value: &T) -> Vec<u64> {
        let mut found = Vec::new();
        let mut next = self.find_first(value);
        while let Some(id) = next {
            found.push(id);
            next = self.child(id, Branch::Middle);
        }
        found
    }

    /// Nodes whose values fall inside `bounds`, in ascending order.
    pub fn range<R>(&self, bounds: R) -> Vec<u64>
    where
        R: RangeBounds<T>,
    {
        let mut found = Vec::new();
        self.walk(
            TraversalOrder::Inorder,
            |v| {
                let left = match bounds.start_bound() {
                    Bound::Included(s) | Bound::Excluded(s) => s < v,
                    Bound::Unbounded => true,
                };
                let right = match bounds.end_bound() {
                    Bound::Included(e) | Bound::Excluded(e) => e > v,
                    Bound::Unbounded => true,
                };
                (left, right)
            },
            |id| {
                if bounds.contains(self.nodes[id].get()) {
                    found.push(id);
                }
            },
        );
        found
    }

    /// Longest LEFT/RIGHT path counted in nodes. MIDDLE links do not count.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self.root, 1usize)];
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            for branch in [Branch::Left, Branch::Right] {
                if let Some(child) = self.child(id, branch) {
                    stack.push((child, depth + 1));
                }
            }
        }
        height
    }

    /// Smallest value in the tree.
    pub fn min(&self) -> &T {
        let mut current = self.root;
        while let Some(next) = self.child(current, Branch::Left) {
            current = next;
        }
        self.nodes[current].get()
    }

    /// Largest value in the tree.
    pub fn max(&self) -> &T {
        let mut current = self.root;
        while let Some(next) = self.child(current, Branch::Right) {
            current = next;
        }
        self.nodes[current].get()
    }

    /// Apply `action` to every value in the given order.
    pub fn traverse<F>(&self, order: TraversalOrder, mut action: F)
    where
        F: FnMut(&T),
    {
        self.walk(order, |_| (true, true), |id| action(self.nodes[id].get()));
    }

    /// Node IDs in the given order.
    pub fn ids(&self, order: TraversalOrder) -> Vec<u64> {
        let mut ids = Vec::with_capacity(self.nodes.len());
        self.walk(order, |_| (true, true), |id| ids.push(id));
        ids
    }

    /// Values in the given order.
    pub fn values(&self, order: TraversalOrder) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.nodes.len());
        self.walk(order, |_| (true, true), |id| values.push(self.nodes[id].get()));
        values
    }

    /// Explicit-stack walk shared by every ordered traversal. `descend`
    /// decides, per node value, whether its LEFT and RIGHT subtrees are
    /// entered; MIDDLE chains are always followed.
    fn walk<D, E>(&self, order: TraversalOrder, descend: D, mut emit: E)
    where
        D: Fn(&T) -> (bool, bool),
        E: FnMut(u64),
    {
        let mut stack = vec![Step::Expand(self.root)];
        while let Some(step) = stack.pop() {
            let id = match step {
                Step::Emit(id) => {
                    emit(id);
                    continue;
                }
                Step::Expand(id) => id,
            };

            let (go_left, go_right) = descend(self.nodes[id].get());
            let left = go_left
                .then(|| self.child(id, Branch::Left))
                .flatten()
                .map(Step::Expand);
            let right = go_right
                .then(|| self.child(id, Branch::Right))
                .flatten()
                .map(Step::Expand);
            let middle = self.child(id, Branch::Middle).map(Step::Expand);
            let here = Some(Step::Emit(id));

            let sequence = match order {
                TraversalOrder::Preorder => [here, middle, left, right],
                TraversalOrder::Inorder => [left, here, middle, right],
                TraversalOrder::Postorder => [left, right, here, middle],
            };
            stack.extend(sequence.into_iter().rev().flatten());
        }
    }
}

impl<T: Ord> Extend<T> for LmrTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<T> HasNeighbors for LmrTree<T> {
    type Value = T;

    fn value(&self, id: u64) -> Option<&T> {
        self.nodes.value(id)
    }

    fn neighbors(&self, id: u64) -> Vec<u64> {
        self.nodes.neighbors(id)
    }
}
