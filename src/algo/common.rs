//! Adapter between the graph store and the algorithm crate
//!
//! Algorithms run directly on the store's insertion-ordered maps: no copy of
//! the topology is built per call.

use crate::graph::{Graph, Vertex, VertexId};
use graphwalk_algorithms::GraphView;

impl<E> GraphView for Graph<E> {
    type NodeId = VertexId;
    type Nodes<'a> = indexmap::map::Keys<'a, VertexId, Vertex<E>> where Self: 'a;
    type Successors<'a> =
        std::iter::Flatten<std::option::IntoIter<indexmap::map::Keys<'a, VertexId, E>>>
    where
        Self: 'a;

    fn node_count(&self) -> usize {
        self.vertex_count()
    }

    fn nodes(&self) -> Self::Nodes<'_> {
        self.vertex_ids()
    }

    fn successors<'a>(&'a self, id: &VertexId) -> Self::Successors<'a> {
        self.get_vertex(id.as_str())
            .map(Vertex::get_neighbors)
            .into_iter()
            .flatten()
    }

    fn resolve<'a>(&'a self, id: &VertexId) -> Option<&'a VertexId> {
        self.checked_id(id.as_str()).ok()
    }
}

/// Copy borrowed ids out of the graph for results that outlive the borrow.
pub(crate) fn to_owned_ids<'a>(ids: impl IntoIterator<Item = &'a VertexId>) -> Vec<VertexId> {
    ids.into_iter().cloned().collect()
}
