//! Component and partition algorithms
//!
//! Connected components (DFS) and bipartiteness (BFS two-colouring).

use super::common::GraphView;
use super::traversal::Dfs;
use std::collections::{HashMap, HashSet, VecDeque};

/// Connected components
///
/// Runs a DFS from every node not reached by an earlier DFS. Components are
/// returned in node order of their first member and list their nodes in DFS
/// visit order.
///
/// Only outgoing edges are followed. On an undirected view this is exact; on a
/// directed view a node that is reachable only "backwards" starts its own
/// component, so connectivity is understated.
pub fn connected_components<G: GraphView>(view: &G) -> Vec<Vec<&G::NodeId>> {
    let mut components = Vec::new();
    let mut seen = HashSet::new();

    for node in view.nodes() {
        if seen.contains(node) {
            continue;
        }
        let mut dfs = Dfs::resume(view, node, seen);
        let component: Vec<_> = dfs.by_ref().collect();
        seen = dfs.into_seen();
        components.push(component);
    }

    components
}

/// The two sides of a bipartition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Result of a successful two-colouring
#[derive(Debug, Clone)]
pub struct Bipartition<'a, N> {
    pub left: Vec<&'a N>,
    pub right: Vec<&'a N>,
}

/// Incoming links of every node, in node order of the source
fn predecessors<G: GraphView>(view: &G) -> HashMap<&G::NodeId, Vec<&G::NodeId>> {
    let mut incoming: HashMap<_, Vec<_>> = HashMap::with_capacity(view.node_count());
    for node in view.nodes() {
        for next in view.successors(node) {
            incoming.entry(next).or_default().push(node);
        }
    }
    incoming
}

/// Two-colour the view with a BFS per weakly connected component.
///
/// Edge direction is ignored: the BFS follows successors first, then
/// predecessors, so a node is always coloured against every node it touches.
/// Every node not yet coloured seeds a new BFS on the left side, so a
/// conflicting component is found even if it comes after a clean one. Returns
/// `None` on the first edge joining two nodes of the same side, i.e. an odd
/// cycle in the underlying undirected graph.
pub fn bipartition<G: GraphView>(view: &G) -> Option<Bipartition<'_, G::NodeId>> {
    let incoming = predecessors(view);
    let mut side = HashMap::with_capacity(view.node_count());
    let mut result = Bipartition {
        left: Vec::new(),
        right: Vec::new(),
    };

    for root in view.nodes() {
        if side.contains_key(root) {
            continue;
        }
        side.insert(root, Side::Left);
        result.left.push(root);

        let mut queue = VecDeque::from([root]);
        while let Some(current) = queue.pop_front() {
            let current_side = side[current];
            let back = incoming.get(current).into_iter().flatten().copied();
            for next in view.successors(current).chain(back) {
                match side.get(next) {
                    Some(&s) if s == current_side => return None,
                    Some(_) => {}
                    None => {
                        let next_side = current_side.opposite();
                        side.insert(next, next_side);
                        match next_side {
                            Side::Left => result.left.push(next),
                            Side::Right => result.right.push(next),
                        }
                        queue.push_back(next);
                    }
                }
            }
        }
    }

    Some(result)
}

/// Whether every component of the view can be two-coloured
pub fn is_bipartite<G: GraphView>(view: &G) -> bool {
    bipartition(view).is_some()
}
