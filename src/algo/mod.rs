//! Graph algorithms module
//!
//! Algorithms are implemented in the `graphwalk-algorithms` crate against its
//! `GraphView` trait. This module implements that trait for [`Graph`] and
//! exposes each algorithm as a `Graph` method that validates vertex ids and
//! returns owned results.
//!
//! [`Graph`]: crate::graph::Graph

mod common;
mod community;
mod pathfinding;
mod topology;

// Re-export algorithms
pub use graphwalk_algorithms::{
    bfs, bipartition, connected_components, dfs_path, find_cycle, has_cycle, is_bipartite,
    nodes_at_distance, topological_sort, AdjacencyList, Bfs, Bipartition, Dfs, GraphView,
    PathResult, Side,
};
