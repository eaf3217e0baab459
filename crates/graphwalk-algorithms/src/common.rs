//! Shared utilities for graph algorithms
//!
//! Provides the read-only view of the graph topology that every algorithm runs
//! against, plus a small adjacency-list implementation of it.

use indexmap::IndexMap;
use std::hash::Hash;

/// Read-only adjacency contract consumed by the algorithms.
///
/// Node iteration and successor iteration must both follow insertion order:
/// every tie-break in this crate (which root is explored first, which neighbour
/// is visited first) is derived from these two orders.
pub trait GraphView {
    /// Identifier handed out to callers in every result.
    type NodeId: Eq + Hash;

    /// Iterator over all node ids, in insertion order.
    type Nodes<'a>: Iterator<Item = &'a Self::NodeId>
    where
        Self: 'a;

    /// Iterator over the outgoing neighbours of one node, in insertion order.
    type Successors<'a>: Iterator<Item = &'a Self::NodeId>
    where
        Self: 'a;

    /// Number of nodes
    fn node_count(&self) -> usize;

    /// All node ids
    fn nodes(&self) -> Self::Nodes<'_>;

    /// Outgoing neighbours of `id`; empty when `id` is unknown.
    fn successors<'a>(&'a self, id: &Self::NodeId) -> Self::Successors<'a>;

    /// Resolve `id` to the copy owned by the view, so results can borrow from it.
    fn resolve<'a>(&'a self, id: &Self::NodeId) -> Option<&'a Self::NodeId> {
        self.nodes().find(|n| *n == id)
    }
}

/// A plain insertion-ordered adjacency list.
///
/// Mainly used to exercise algorithms without a full graph store; a directed
/// edge is recorded once, an undirected edge is mirrored.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdjacencyList<N: Eq + Hash> {
    adjacency: IndexMap<N, Vec<N>>,
}

impl<N: Eq + Hash + Clone> AdjacencyList<N> {
    pub fn new() -> Self {
        AdjacencyList {
            adjacency: IndexMap::new(),
        }
    }

    /// Helper to build a directed view from edge pairs; endpoints are added on first sight.
    pub fn from_edges(
        nodes: impl IntoIterator<Item = N>,
        edges: impl IntoIterator<Item = (N, N)>,
    ) -> Self {
        let mut list = Self::new();
        for node in nodes {
            list.add_node(node);
        }
        for (from, to) in edges {
            list.add_directed_edge(from, to);
        }
        list
    }

    /// Same as [`AdjacencyList::from_edges`] but every edge is mirrored.
    pub fn from_undirected_edges(
        nodes: impl IntoIterator<Item = N>,
        edges: impl IntoIterator<Item = (N, N)>,
    ) -> Self {
        let mut list = Self::new();
        for node in nodes {
            list.add_node(node);
        }
        for (a, b) in edges {
            list.add_directed_edge(a.clone(), b.clone());
            list.add_directed_edge(b, a);
        }
        list
    }

    pub fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    /// Parallel edges collapse into one.
    pub fn add_directed_edge(&mut self, from: N, to: N) {
        self.add_node(to.clone());
        let targets = self.adjacency.entry(from).or_default();
        if !targets.contains(&to) {
            targets.push(to);
        }
    }
}

impl<N: Eq + Hash + Clone> Default for AdjacencyList<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Eq + Hash> GraphView for AdjacencyList<N> {
    type NodeId = N;
    type Nodes<'a> = indexmap::map::Keys<'a, N, Vec<N>> where Self: 'a;
    type Successors<'a> = std::iter::Flatten<std::option::IntoIter<std::slice::Iter<'a, N>>>
    where
        Self: 'a;

    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn nodes(&self) -> Self::Nodes<'_> {
        self.adjacency.keys()
    }

    fn successors<'a>(&'a self, id: &N) -> Self::Successors<'a> {
        self.adjacency.get(id).map(|targets| targets.iter()).into_iter().flatten()
    }

    fn resolve<'a>(&'a self, id: &N) -> Option<&'a N> {
        self.adjacency.get_key_value(id).map(|(k, _)| k)
    }
}
