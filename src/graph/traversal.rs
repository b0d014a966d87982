//! Depth-first traversal and connected components.

use std::collections::HashSet;

use crate::types::{GraphError, GraphResult};

use super::HasNeighbors;

/// Lifecycle of a traverser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraverserState {
    NotStarted,
    Running,
    Done,
}

/// Depth-first visitor over any neighbor-bearing structure.
///
/// Visits happen in the same order as the textbook recursive formulation
/// (a node, then each unvisited neighbor in slot order), but the walk keeps
/// its own stack so depth is not limited by the call stack. The visited set
/// is the only guard against cycles.
pub struct DepthFirstTraverser<'g, G: HasNeighbors> {
    graph: &'g G,
    start: u64,
    state: TraverserState,
    visited: HashSet<u64>,
    order: Vec<u64>,
}

impl<'g, G: HasNeighbors> DepthFirstTraverser<'g, G> {
    pub fn new(graph: &'g G, start: u64) -> Self {
        Self {
            graph,
            start,
            state: TraverserState::NotStarted,
            visited: HashSet::new(),
            order: Vec::new(),
        }
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn state(&self) -> TraverserState {
        self.state
    }

    /// Every node reached so far.
    pub fn visited(&self) -> &HashSet<u64> {
        &self.visited
    }

    /// Nodes in the order they were first visited.
    pub fn visit_order(&self) -> &[u64] {
        &self.order
    }

    pub fn into_visited(self) -> HashSet<u64> {
        self.visited
    }

    /// Run the traversal without an action.
    pub fn run(&mut self) -> GraphResult<()> {
        self.run_with(|_| {})
    }

    /// Run the traversal, calling `action` once per node on first visit.
    /// A traverser that already finished does nothing.
    pub fn run_with<F>(&mut self, mut action: F) -> GraphResult<()>
    where
        F: FnMut(&G::Value),
    {
        if self.state == TraverserState::Done {
            return Ok(());
        }
        if !self.graph.has_node(self.start) {
            return Err(GraphError::NodeNotFound(self.start));
        }

        self.state = TraverserState::Running;
        let mut stack = vec![self.start];

        while let Some(current) = stack.pop() {
            if !self.visited.insert(current) {
                continue;
            }
            self.order.push(current);
            log::trace!("dfs visit {}", current);
            if let Some(value) = self.graph.value(current) {
                action(value);
            }

            // Reversed so the first slot is explored first.
            for neighbor in self.graph.neighbors(current).into_iter().rev() {
                if !self.visited.contains(&neighbor) {
                    stack.push(neighbor);
                }
            }
        }

        self.state = TraverserState::Done;
        log::debug!(
            "dfs from {} visited {} nodes",
            self.start,
            self.visited.len()
        );
        Ok(())
    }
}

/// One representative per connected component among `vertices`.
///
/// Each vertex not yet seen starts a full traversal whose visited set is
/// merged into the seen set; that vertex becomes the representative.
pub fn connected_components<G, I>(graph: &G, vertices: I) -> GraphResult<Vec<u64>>
where
    G: HasNeighbors,
    I: IntoIterator<Item = u64>,
{
    let mut seen: HashSet<u64> = HashSet::new();
    let mut representatives = Vec::new();

    for candidate in vertices {
        if seen.contains(&candidate) {
            continue;
        }
        let mut traverser = DepthFirstTraverser::new(graph, candidate);
        traverser.run()?;
        seen.extend(traverser.into_visited());
        representatives.push(candidate);
    }

    log::debug!("found {} connected components", representatives.len());
    Ok(representatives)
}
