//! Lazy traversal orders
//!
//! Both traversals yield each reachable node exactly once, borrowing ids from
//! the view. They are finite and not restartable.

use super::common::GraphView;
use std::collections::{HashSet, VecDeque};

/// Breadth-first traversal from a single start node.
///
/// Nodes are marked seen when enqueued, so the yield order is by increasing
/// distance from the start, ties broken by successor order.
pub struct Bfs<'a, G: GraphView + 'a> {
    view: &'a G,
    queue: VecDeque<&'a G::NodeId>,
    seen: HashSet<&'a G::NodeId>,
}

impl<'a, G: GraphView + 'a> Bfs<'a, G> {
    /// Start a traversal. An unknown start yields nothing.
    pub fn new(view: &'a G, start: &G::NodeId) -> Self {
        let mut queue = VecDeque::new();
        let mut seen = HashSet::new();
        if let Some(start) = view.resolve(start) {
            queue.push_back(start);
            seen.insert(start);
        }
        Bfs { view, queue, seen }
    }
}

impl<'a, G: GraphView + 'a> Iterator for Bfs<'a, G> {
    type Item = &'a G::NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let view = self.view;
        let current = self.queue.pop_front()?;
        for next in view.successors(current) {
            if self.seen.insert(next) {
                self.queue.push_back(next);
            }
        }
        Some(current)
    }
}

/// Pre-order depth-first traversal using an explicit stack of successor iterators.
///
/// Produces the same order as the textbook recursive formulation (visit, then
/// recurse into each unvisited successor in order) without consuming call
/// stack proportional to path length.
pub struct Dfs<'a, G: GraphView + 'a> {
    view: &'a G,
    stack: Vec<G::Successors<'a>>,
    seen: HashSet<&'a G::NodeId>,
    pending: Option<&'a G::NodeId>,
}

impl<'a, G: GraphView + 'a> Dfs<'a, G> {
    /// Start a traversal. An unknown start yields nothing.
    pub fn new(view: &'a G, start: &G::NodeId) -> Self {
        Self::resume(view, start, HashSet::new())
    }

    /// Continue a traversal that shares its seen-set with earlier runs.
    ///
    /// A start that is already in `seen` yields nothing.
    pub(crate) fn resume(view: &'a G, start: &G::NodeId, mut seen: HashSet<&'a G::NodeId>) -> Self {
        let pending = view.resolve(start).filter(|start| seen.insert(*start));
        Dfs {
            view,
            stack: Vec::new(),
            seen,
            pending,
        }
    }

    /// Hand the seen-set back once the traversal is drained.
    pub(crate) fn into_seen(self) -> HashSet<&'a G::NodeId> {
        self.seen
    }
}

impl<'a, G: GraphView + 'a> Iterator for Dfs<'a, G> {
    type Item = &'a G::NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let view = self.view;
        if let Some(start) = self.pending.take() {
            self.stack.push(view.successors(start));
            return Some(start);
        }

        while let Some(frontier) = self.stack.last_mut() {
            let seen = &self.seen;
            match frontier.find(|n| !seen.contains(n)) {
                Some(next) => {
                    self.seen.insert(next);
                    self.stack.push(view.successors(next));
                    return Some(next);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}
