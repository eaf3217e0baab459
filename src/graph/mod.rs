//! Core graph implementation
//!
//! This module implements the adjacency graph model:
//! - Vertices identified by caller-chosen string ids
//! - Directed or undirected edges, fixed per graph
//! - Insertion-ordered vertex and neighbour storage, which fixes every
//!   traversal tie-break

pub mod store;
pub mod types;
pub mod vertex;

// Re-export main types
pub use store::{Graph, GraphError, GraphResult};
pub use types::VertexId;
pub use vertex::Vertex;
