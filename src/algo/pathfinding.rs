//! Traversals and path queries on [`Graph`]
//!
//! Every entry point validates its vertex ids up front and fails with
//! [`GraphError::VertexNotFound`] before doing any traversal work.

use super::common::to_owned_ids;
use crate::graph::{Graph, GraphResult, VertexId};
use graphwalk_algorithms::{self as algo, Bfs, Dfs};

impl<E> Graph<E> {
    /// Breadth-first traversal from `start_id`.
    ///
    /// Yields every reachable vertex id once, by increasing distance, ties
    /// broken by edge insertion order.
    pub fn bfs_traversal(&self, start_id: &str) -> GraphResult<Bfs<'_, Self>> {
        let start = self.checked_id(start_id)?;
        Ok(Bfs::new(self, start))
    }

    /// Pre-order depth-first traversal from `start_id`.
    ///
    /// Same order as the recursive formulation, computed with an explicit stack.
    pub fn dfs_traversal(&self, start_id: &str) -> GraphResult<Dfs<'_, Self>> {
        let start = self.checked_id(start_id)?;
        Ok(Dfs::new(self, start))
    }

    /// Unweighted shortest path from `start_id` to `target_id`, both inclusive.
    ///
    /// `Ok(None)` when the target is unreachable.
    pub fn find_shortest_path(
        &self,
        start_id: &str,
        target_id: &str,
    ) -> GraphResult<Option<Vec<VertexId>>> {
        let start = self.checked_id(start_id)?;
        let target = self.checked_id(target_id)?;
        Ok(algo::bfs(self, start, target).map(|result| to_owned_ids(result.path)))
    }

    /// Vertices exactly `target_distance` edges from `start_id`, in BFS discovery order.
    pub fn find_vertices_n_away(
        &self,
        start_id: &str,
        target_distance: usize,
    ) -> GraphResult<Vec<VertexId>> {
        let start = self.checked_id(start_id)?;
        Ok(to_owned_ids(algo::nodes_at_distance(self, start, target_distance)))
    }

    /// Some path from `start_id` to `target_id` found with a LIFO-stack DFS.
    ///
    /// The path follows real edges but need not be the shortest. `Ok(None)`
    /// when the target is unreachable.
    pub fn find_path_dfs_iter(
        &self,
        start_id: &str,
        target_id: &str,
    ) -> GraphResult<Option<Vec<VertexId>>> {
        let start = self.checked_id(start_id)?;
        let target = self.checked_id(target_id)?;
        Ok(algo::dfs_path(self, start, target).map(|result| to_owned_ids(result.path)))
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{Graph, GraphError, VertexId};

    fn strs(ids: &[VertexId]) -> Vec<&str> {
        ids.iter().map(VertexId::as_str).collect()
    }

    /// a - b - c - d - a, e - a, f - e, f - a
    fn scenario() -> Graph {
        let mut graph = Graph::undirected();
        for id in ["a", "b", "c", "d", "e", "f"] {
            graph.add_vertex(id);
        }
        let edges = [
            ("a", "b"),
            ("b", "c"),
            ("c", "d"),
            ("d", "a"),
            ("e", "a"),
            ("f", "e"),
            ("f", "a"),
        ];
        for (u, v) in edges {
            graph.add_edge(u, v).unwrap();
        }
        graph
    }

    #[test]
    fn test_bfs_traversal_order() {
        let graph = scenario();
        let order: Vec<_> = graph.bfs_traversal("a").unwrap().map(VertexId::as_str).collect();
        assert_eq!(order, vec!["a", "b", "d", "e", "f", "c"]);
    }

    #[test]
    fn test_dfs_traversal_order() {
        let graph = scenario();
        let order: Vec<_> = graph.dfs_traversal("a").unwrap().map(VertexId::as_str).collect();
        assert_eq!(order, vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn test_shortest_path_uses_direct_edge() {
        let graph = scenario();
        let path = graph.find_shortest_path("a", "d").unwrap().unwrap();
        assert_eq!(strs(&path), vec!["a", "d"]);

        let path = graph.find_shortest_path("b", "f").unwrap().unwrap();
        assert_eq!(strs(&path), vec!["b", "a", "f"]);
    }

    #[test]
    fn test_shortest_path_unreachable() {
        let mut graph: Graph = Graph::directed();
        graph.add_vertex("a");
        graph.add_vertex("b");
        graph.add_edge("b", "a").unwrap();

        assert_eq!(graph.find_shortest_path("a", "b").unwrap(), None);
    }

    #[test]
    fn test_unknown_ids_are_rejected() {
        let graph = scenario();
        let missing = GraphError::VertexNotFound(VertexId::new("z"));

        assert_eq!(graph.bfs_traversal("z").err(), Some(missing.clone()));
        assert_eq!(graph.dfs_traversal("z").err(), Some(missing.clone()));
        assert_eq!(graph.find_shortest_path("a", "z"), Err(missing.clone()));
        assert_eq!(graph.find_shortest_path("z", "a"), Err(missing.clone()));
        assert_eq!(graph.find_vertices_n_away("z", 1), Err(missing.clone()));
        assert_eq!(graph.find_path_dfs_iter("a", "z"), Err(missing));
    }

    #[test]
    fn test_vertices_n_away() {
        let graph = scenario();
        assert_eq!(strs(&graph.find_vertices_n_away("a", 0).unwrap()), vec!["a"]);
        assert_eq!(strs(&graph.find_vertices_n_away("a", 1).unwrap()), vec!["b", "d", "e", "f"]);
        assert_eq!(strs(&graph.find_vertices_n_away("a", 2).unwrap()), vec!["c"]);
        assert!(graph.find_vertices_n_away("a", 3).unwrap().is_empty());
    }

    #[test]
    fn test_path_dfs_iter_is_connected() {
        let graph = scenario();
        let path = graph.find_path_dfs_iter("b", "f").unwrap().unwrap();

        assert_eq!(path.first().map(VertexId::as_str), Some("b"));
        assert_eq!(path.last().map(VertexId::as_str), Some("f"));
        for pair in path.windows(2) {
            assert!(graph.get_vertex(pair[0].as_str()).unwrap().has_neighbor(pair[1].as_str()));
        }
    }
}
