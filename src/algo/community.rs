//! Component and bipartiteness queries on [`Graph`]

use super::common::to_owned_ids;
use crate::graph::{Graph, VertexId};
use graphwalk_algorithms as algo;

impl<E> Graph<E> {
    /// Whether every component can be two-coloured.
    ///
    /// Each component gets its own BFS root, in vertex insertion order, so an
    /// odd cycle is found wherever it sits. Edge direction does not matter.
    /// An empty graph is bipartite.
    pub fn is_bipartite(&self) -> bool {
        algo::is_bipartite(self)
    }

    /// The two sides of a two-colouring, or `None` if the graph is not bipartite
    pub fn bipartition(&self) -> Option<(Vec<VertexId>, Vec<VertexId>)> {
        algo::bipartition(self).map(|parts| (to_owned_ids(parts.left), to_owned_ids(parts.right)))
    }

    /// Connected components, each listed in DFS visit order.
    ///
    /// Components come in vertex insertion order of their first member. On a
    /// directed graph only outgoing edges are followed, which can split what
    /// would be one weakly connected component.
    pub fn find_connected_components(&self) -> Vec<Vec<VertexId>> {
        algo::connected_components(self)
            .into_iter()
            .map(to_owned_ids)
            .collect()
    }
}
