//! Single-source searches over weighted graphs.
//!
//! Each algorithm is a trait blanket-implemented for every [NamedGraph](crate::graph::NamedGraph),
//! working by vertex name, and a function working on a low-level graph by
//! [VertexId](crate::graph::VertexId).
//! None of them mutates the graph.
mod search_tree;
pub use self::search_tree::*;
mod dijkstra;
pub use self::dijkstra::*;
mod bellman_ford;
pub use self::bellman_ford::*;
mod bfs;
pub use self::bfs::*;
mod dfs;
pub use self::dfs::*;
pub mod report;
