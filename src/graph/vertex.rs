//! Vertex implementation
//!
//! A vertex is an identity plus an insertion-ordered adjacency record. The
//! adjacency stores neighbour ids, never vertex objects: the owning
//! [`Graph`](super::Graph) resolves them, so a neighbour reference can not
//! outlive or alias the vertex it names.

use super::types::VertexId;
use indexmap::IndexMap;
use std::fmt;

/// A vertex in the graph
///
/// `E` is per-edge data stored next to each neighbour. The unweighted graph
/// uses `()`; a weighted variant stores its weight here.
#[derive(Debug, Clone)]
pub struct Vertex<E = ()> {
    /// Unique identifier for this vertex
    id: VertexId,

    /// Neighbour id -> edge data, in the order edges were added
    neighbors: IndexMap<VertexId, E>,
}

impl<E> Vertex<E> {
    /// Create a vertex with no neighbours
    pub fn new(id: impl Into<VertexId>) -> Self {
        Vertex {
            id: id.into(),
            neighbors: IndexMap::new(),
        }
    }

    pub fn get_id(&self) -> &VertexId {
        &self.id
    }

    /// Record `neighbor` as adjacent, replacing the edge data if it already was.
    ///
    /// A neighbour that is re-added keeps its original position.
    pub fn add_neighbor(&mut self, neighbor: VertexId, data: E) {
        self.neighbors.insert(neighbor, data);
    }

    /// Neighbour ids in insertion order
    pub fn get_neighbors(&self) -> indexmap::map::Keys<'_, VertexId, E> {
        self.neighbors.keys()
    }

    pub fn has_neighbor(&self, id: &str) -> bool {
        self.neighbors.contains_key(id)
    }

    /// Edge data stored for `neighbor`, if adjacent
    pub fn edge_data(&self, neighbor: &str) -> Option<&E> {
        self.neighbors.get(neighbor)
    }

    /// Number of outgoing links
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Drop the link to `neighbor`, keeping the order of the remaining ones.
    pub(crate) fn remove_neighbor(&mut self, neighbor: &str) -> Option<E> {
        self.neighbors.shift_remove(neighbor)
    }
}

impl<E> fmt::Display for Vertex<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} adjacent to [", self.id)?;
        for (i, neighbor) in self.neighbors.keys().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", neighbor)?;
        }
        write!(f, "]")
    }
}
