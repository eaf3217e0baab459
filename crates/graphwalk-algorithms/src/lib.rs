//! Traversal and structural-analysis algorithms over a read-only [`GraphView`].
//!
//! Every algorithm is a pure function of the view: working state (queues,
//! stacks, seen-sets, parent maps) lives in the call and is dropped on return.
//! Tie-breaks follow the view's node order and successor order.

pub mod common;
pub mod community;
pub mod pathfinding;
pub mod topology;
pub mod traversal;

pub use common::{AdjacencyList, GraphView};
pub use community::{bipartition, connected_components, is_bipartite, Bipartition, Side};
pub use pathfinding::{bfs, dfs_path, nodes_at_distance, PathResult};
pub use topology::{find_cycle, has_cycle, topological_sort};
pub use traversal::{Bfs, Dfs};
