//! Pathfinding algorithms
//!
//! Unweighted shortest path (BFS), distance-bounded neighbourhoods and
//! depth-first path search.

use super::common::GraphView;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// Result of a pathfinding algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult<N> {
    pub source: N,
    pub target: N,
    /// Every node from source to target, both inclusive
    pub path: Vec<N>,
    /// Number of edges on `path`
    pub hops: usize,
}

impl<N> PathResult<N> {
    fn from_path(path: Vec<N>) -> Option<Self>
    where
        N: Copy,
    {
        let source = *path.first()?;
        let target = *path.last()?;
        Some(PathResult {
            source,
            target,
            hops: path.len() - 1,
            path,
        })
    }
}

/// Walk parent links back from `target` and return the path in source→target order.
fn reconstruct<'a, N: Eq + Hash>(
    parents: &HashMap<&'a N, Option<&'a N>>,
    target: &'a N,
) -> Vec<&'a N> {
    let mut path = Vec::new();
    let mut curr = Some(target);
    while let Some(node) = curr {
        path.push(node);
        curr = parents.get(node).copied().flatten();
    }
    path.reverse();
    path
}

/// Breadth-First Search (Unweighted Shortest Path)
///
/// Among several shortest paths the first one discovered wins, which is fixed
/// by successor order. Returns `None` when either id is unknown or the target
/// is unreachable.
pub fn bfs<'a, G: GraphView>(
    view: &'a G,
    source: &G::NodeId,
    target: &G::NodeId,
) -> Option<PathResult<&'a G::NodeId>> {
    let source = view.resolve(source)?;
    let target = view.resolve(target)?;

    let mut queue = VecDeque::new();
    let mut parents = HashMap::new(); // node -> parent

    queue.push_back(source);
    parents.insert(source, None);

    while let Some(current) = queue.pop_front() {
        if current == target {
            return PathResult::from_path(reconstruct(&parents, target));
        }

        for next in view.successors(current) {
            if !parents.contains_key(next) {
                parents.insert(next, Some(current));
                queue.push_back(next);
            }
        }
    }

    None
}

/// All nodes exactly `distance` edges away from `source`, in BFS discovery order.
///
/// `distance == 0` yields just the source; a distance beyond the source's
/// eccentricity yields nothing.
pub fn nodes_at_distance<'a, G: GraphView>(
    view: &'a G,
    source: &G::NodeId,
    distance: usize,
) -> Vec<&'a G::NodeId> {
    let Some(source) = view.resolve(source) else {
        return Vec::new();
    };

    let mut queue = VecDeque::new();
    let mut distances = HashMap::new();
    let mut found = Vec::new();

    queue.push_back(source);
    distances.insert(source, 0usize);

    while let Some(current) = queue.pop_front() {
        let current_distance = distances[current];
        if current_distance == distance {
            found.push(current);
            // Anything discovered from here would be farther than requested
            continue;
        }

        for next in view.successors(current) {
            if !distances.contains_key(next) {
                distances.insert(next, current_distance + 1);
                queue.push_back(next);
            }
        }
    }

    found
}

/// Depth-First path search with an explicit LIFO stack.
///
/// Successors are marked seen when pushed and remember who pushed them, so the
/// returned path is a real chain of edges rather than a visitation trace. It is
/// not necessarily the shortest one.
pub fn dfs_path<'a, G: GraphView>(
    view: &'a G,
    source: &G::NodeId,
    target: &G::NodeId,
) -> Option<PathResult<&'a G::NodeId>> {
    let source = view.resolve(source)?;
    let target = view.resolve(target)?;

    let mut stack = vec![source];
    let mut parents = HashMap::new();
    parents.insert(source, None);

    while let Some(current) = stack.pop() {
        if current == target {
            return PathResult::from_path(reconstruct(&parents, target));
        }

        for next in view.successors(current) {
            if !parents.contains_key(next) {
                parents.insert(next, Some(current));
                stack.push(next);
            }
        }
    }

    None
}
