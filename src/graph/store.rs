//! In-memory graph storage implementation
//!
//! The graph exclusively owns its vertices in an insertion-ordered map keyed by
//! id. Adjacency is stored on each vertex as neighbour ids, so every link is
//! resolved through the graph and can never dangle.

use super::types::VertexId;
use super::vertex::Vertex;
use indexmap::IndexMap;
use std::fmt;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Vertex {0} is not in the graph")]
    VertexNotFound(VertexId),

    #[error("Graph contains a cycle and can not be topologically sorted")]
    CycleDetected,
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory graph, directed or undirected
///
/// - vertices: VertexId -> Vertex, in the order vertices were first added
/// - directed: fixed at construction; an undirected edge is stored as two links
///
/// Parallel edges between the same ordered pair collapse to one.
#[derive(Debug, Clone)]
pub struct Graph<E = ()> {
    /// Vertex storage
    vertices: IndexMap<VertexId, Vertex<E>>,

    /// Whether `add_edge` links one way only
    directed: bool,
}

impl<E> Graph<E> {
    /// Create a new empty graph
    pub fn new(directed: bool) -> Self {
        Graph {
            vertices: IndexMap::new(),
            directed,
        }
    }

    /// Create a new empty directed graph
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Create a new empty undirected graph
    pub fn undirected() -> Self {
        Self::new(false)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Add a vertex and return it.
    ///
    /// Re-adding an existing id replaces it with a fresh vertex without
    /// neighbours (it keeps its position in vertex order) and removes every link
    /// other vertices held to that id, so traversals never see the old adjacency.
    pub fn add_vertex(&mut self, id: impl Into<VertexId>) -> &Vertex<E> {
        let id = id.into();

        if self.vertices.contains_key(&id) {
            debug!("Replacing vertex {} and dropping its links", id);
            for vertex in self.vertices.values_mut() {
                vertex.remove_neighbor(id.as_str());
            }
        }

        let (index, _) = self.vertices.insert_full(id.clone(), Vertex::new(id));
        &self.vertices[index]
    }

    /// Get a vertex by id
    pub fn get_vertex(&self, id: &str) -> Option<&Vertex<E>> {
        self.vertices.get(id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.vertices.contains_key(id)
    }

    /// Add an edge carrying `data` from `id1` to `id2` (and back when undirected).
    ///
    /// Both endpoints are checked before anything is linked, so a failed call
    /// leaves the graph untouched.
    pub fn add_edge_with(&mut self, id1: &str, id2: &str, data: E) -> GraphResult<()>
    where
        E: Clone,
    {
        let from = self.checked_id(id1)?.clone();
        let to = self.checked_id(id2)?.clone();
        trace!("Linking {} -> {} (directed: {})", from, to, self.directed);

        if !self.directed {
            if let Some(vertex) = self.vertices.get_mut(&to) {
                vertex.add_neighbor(from.clone(), data.clone());
            }
        }
        if let Some(vertex) = self.vertices.get_mut(&from) {
            vertex.add_neighbor(to, data);
        }
        Ok(())
    }

    /// All vertices, in insertion order
    pub fn get_vertices(&self) -> indexmap::map::Values<'_, VertexId, Vertex<E>> {
        self.vertices.values()
    }

    /// All vertex ids, in insertion order
    pub fn vertex_ids(&self) -> indexmap::map::Keys<'_, VertexId, Vertex<E>> {
        self.vertices.keys()
    }

    /// Neighbour vertices of `id` in edge insertion order, or `None` if `id` is absent
    pub fn get_neighbors<'a>(
        &'a self,
        id: &str,
    ) -> Option<impl Iterator<Item = &'a Vertex<E>> + 'a> {
        let vertex = self.vertices.get(id)?;
        Some(
            vertex
                .get_neighbors()
                .filter_map(move |neighbor| self.vertices.get(neighbor)),
        )
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges: links for a directed graph, unordered pairs for an
    /// undirected one (a self-loop counts once).
    pub fn edge_count(&self) -> usize {
        let links: usize = self.vertices.values().map(Vertex::degree).sum();
        if self.directed {
            return links;
        }
        let self_loops = self
            .vertices
            .iter()
            .filter(|(id, vertex)| vertex.has_neighbor(id.as_str()))
            .count();
        (links - self_loops) / 2 + self_loops
    }

    /// Map `id` to the stored key, or fail with `VertexNotFound`
    pub(crate) fn checked_id(&self, id: &str) -> GraphResult<&VertexId> {
        self.vertices
            .get_key_value(id)
            .map(|(key, _)| key)
            .ok_or_else(|| GraphError::VertexNotFound(VertexId::new(id)))
    }
}

impl<E: Default + Clone> Graph<E> {
    /// Add an edge from `id1` to `id2` (and back when undirected) with default edge data.
    pub fn add_edge(&mut self, id1: &str, id2: &str) -> GraphResult<()> {
        self.add_edge_with(id1, id2, E::default())
    }
}

impl<E> Default for Graph<E> {
    fn default() -> Self {
        Self::directed()
    }
}

impl<E> fmt::Display for Graph<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Graph with vertices: [")?;
        for (i, vertex) in self.vertices.values().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", vertex)?;
        }
        write!(f, "]")
    }
}
