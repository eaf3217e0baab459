//! Graphwalk
//!
//! An in-memory graph toolkit: build a directed or undirected graph by adding
//! vertices and edges (directly or from a simple adjacency file), then query
//! its structure.
//!
//! # Features
//!
//! - Insertion-ordered vertex and adjacency storage; every traversal tie-break
//!   follows the order vertices and edges were added
//! - Breadth-first and depth-first traversal as lazy iterators
//! - Unweighted shortest path, distance-bounded neighbourhoods, DFS path search
//! - Bipartiteness, connected components, directed cycle detection and
//!   topological sorting
//! - A loader for the line-based `G`/`D` adjacency format
//!
//! Algorithms live in the `graphwalk-algorithms` crate and run against its
//! `GraphView` trait; [`Graph`] implements that trait and exposes each
//! algorithm as a method that validates ids and returns owned results.
//!
//! ## Example Usage
//!
//! ```rust
//! use graphwalk::Graph;
//!
//! let mut graph: Graph = Graph::undirected();
//! for id in ["a", "b", "c", "d"] {
//!     graph.add_vertex(id);
//! }
//! graph.add_edge("a", "b").unwrap();
//! graph.add_edge("b", "c").unwrap();
//! graph.add_edge("c", "d").unwrap();
//! graph.add_edge("d", "a").unwrap();
//!
//! let order: Vec<&str> = graph.bfs_traversal("a").unwrap().map(|id| id.as_str()).collect();
//! assert_eq!(order, vec!["a", "b", "d", "c"]);
//!
//! let path = graph.find_shortest_path("a", "c").unwrap().unwrap();
//! assert_eq!(path.len(), 3);
//! assert!(graph.is_bipartite());
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod graph;
pub mod loader;

// Re-export main types for convenience
pub use graph::{Graph, GraphError, GraphResult, Vertex, VertexId};

pub use loader::{load_graph, load_graph_with, parse_graph, LoadError, LoadResult, LoaderConfig};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
