//! Cycle detection and topological ordering on [`Graph`]

use super::common::to_owned_ids;
use crate::graph::{Graph, GraphError, GraphResult, VertexId};
use graphwalk_algorithms as algo;
use tracing::debug;

impl<E> Graph<E> {
    /// Whether any directed cycle exists, searching from every root.
    ///
    /// Undirected edges are stored as two opposite links, so an undirected
    /// graph with at least one edge always reports a cycle.
    pub fn contains_cycle(&self) -> bool {
        algo::has_cycle(self)
    }

    /// The vertices of one directed cycle, in edge order, if any exists
    pub fn find_cycle(&self) -> Option<Vec<VertexId>> {
        algo::find_cycle(self).map(to_owned_ids)
    }

    /// Order the vertices so that every edge `u -> v` has `u` before `v`.
    ///
    /// Ties follow vertex insertion order and edge insertion order. Fails with
    /// [`GraphError::CycleDetected`] if the graph is not a DAG.
    pub fn topological_sort(&self) -> GraphResult<Vec<VertexId>> {
        match algo::topological_sort(self) {
            Some(order) => Ok(to_owned_ids(order)),
            None => {
                debug!("Topological sort refused: graph has a cycle");
                Err(GraphError::CycleDetected)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{Graph, GraphError, VertexId};

    fn digraph(vertices: &[&str], edges: &[(&str, &str)]) -> Graph {
        let mut graph = Graph::directed();
        for id in vertices {
            graph.add_vertex(*id);
        }
        for (u, v) in edges {
            graph.add_edge(u, v).unwrap();
        }
        graph
    }

    #[test]
    fn test_contains_cycle() {
        let graph = digraph(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]);
        assert!(graph.contains_cycle());

        let cycle = graph.find_cycle().unwrap();
        let cycle: Vec<_> = cycle.iter().map(VertexId::as_str).collect();
        assert_eq!(cycle, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_cycle_from_earlier_root_survives_later_acyclic_root() {
        let graph = digraph(&["a", "b", "c", "d"], &[("a", "b"), ("b", "a"), ("c", "d")]);
        assert!(graph.contains_cycle());
    }

    #[test]
    fn test_dag_has_no_cycle() {
        let graph = digraph(&["a", "b", "c"], &[("a", "b"), ("a", "c"), ("b", "c")]);
        assert!(!graph.contains_cycle());
        assert!(graph.find_cycle().is_none());
    }

    #[test]
    fn test_undirected_edge_counts_as_cycle() {
        let mut graph: Graph = Graph::undirected();
        graph.add_vertex("a");
        graph.add_vertex("b");
        assert!(!graph.contains_cycle());

        graph.add_edge("a", "b").unwrap();
        assert!(graph.contains_cycle());
    }

    #[test]
    fn test_topological_sort() {
        let graph = digraph(
            &["a", "b", "c", "d", "e"],
            &[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d"), ("e", "a")],
        );
        let order = graph.topological_sort().unwrap();
        let order: Vec<_> = order.iter().map(VertexId::as_str).collect();
        assert_eq!(order, vec!["e", "a", "c", "b", "d"]);
    }

    #[test]
    fn test_topological_sort_with_cycle() {
        let graph = digraph(&["a", "b"], &[("a", "b"), ("b", "a")]);
        assert_eq!(graph.topological_sort(), Err(GraphError::CycleDetected));
    }
}
