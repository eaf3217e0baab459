//! Graph topology analysis algorithms
//!
//! Directed cycle detection and topological ordering. Both walk the view with
//! an explicit stack of successor iterators instead of recursion.

use super::common::GraphView;
use std::collections::HashSet;

/// Find one directed cycle.
///
/// Keeps the active DFS path separately from the set of fully explored nodes:
/// reaching a node on the active path is a back-edge. Every root is tried, and
/// the first cycle found from any root is returned as the nodes along it,
/// starting and ending just before the repeated node.
///
/// An undirected edge is stored as two opposite links, so on an undirected view
/// any edge forms a cycle of length two.
pub fn find_cycle<G: GraphView>(view: &G) -> Option<Vec<&G::NodeId>> {
    let mut done = HashSet::with_capacity(view.node_count());

    for root in view.nodes() {
        if done.contains(root) {
            continue;
        }

        let mut path = vec![root];
        let mut on_path = HashSet::from([root]);
        let mut stack = vec![view.successors(root)];

        while let Some(frontier) = stack.last_mut() {
            match frontier.next() {
                Some(next) if on_path.contains(next) => {
                    let start = path.iter().position(|n| *n == next).unwrap_or(0);
                    return Some(path.split_off(start));
                }
                Some(next) => {
                    if done.contains(next) {
                        continue;
                    }
                    on_path.insert(next);
                    path.push(next);
                    stack.push(view.successors(next));
                }
                None => {
                    stack.pop();
                    if let Some(finished) = path.pop() {
                        on_path.remove(finished);
                        done.insert(finished);
                    }
                }
            }
        }
    }

    None
}

/// Whether the view contains at least one directed cycle, from any root
pub fn has_cycle<G: GraphView>(view: &G) -> bool {
    find_cycle(view).is_some()
}

/// Topological Sort
///
/// Post-order DFS from every unvisited node in node order, reversed. For every
/// edge `u -> v`, `u` precedes `v`. Returns `None` if the view has a cycle.
pub fn topological_sort<G: GraphView>(view: &G) -> Option<Vec<&G::NodeId>> {
    if has_cycle(view) {
        return None;
    }

    let mut seen = HashSet::with_capacity(view.node_count());
    let mut order = Vec::with_capacity(view.node_count());

    for root in view.nodes() {
        if !seen.insert(root) {
            continue;
        }

        let mut stack = vec![(root, view.successors(root))];
        while let Some((node, frontier)) = stack.last_mut() {
            let node = *node;
            match frontier.find(|n| !seen.contains(n)) {
                Some(next) => {
                    seen.insert(next);
                    stack.push((next, view.successors(next)));
                }
                None => {
                    stack.pop();
                    order.push(node);
                }
            }
        }
    }

    order.reverse();
    Some(order)
}
