//! Weighted directed graphs.
//!
//! # Low-level graphs and `WeightedGraph`
//!
//! Low-level graphs address vertices by [VertexId], which is essentially a `usize`
//! handed out densely from `0` in insertion order.
//! They store one weight per ordered pair of vertices, [NO_EDGE] meaning absent.
//! Algorithms keep their scratch state in plain vectors indexed by these ids.
//!
//! Two implementations are provided in [directed]:
//! [DenseMatrixGraph](directed::DenseMatrixGraph), an adjacency matrix, and
//! [PetgraphBackedGraph](directed::PetgraphBackedGraph), adjacency lists for larger sparse graphs.
//!
//! [WeightedGraph] puts vertex names on top of either of them.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod graph_debug;
pub use self::graph_debug::*;
mod weighted_graph;
pub use self::weighted_graph::*;

pub mod directed;
pub use self::directed::{DenseMatrixGraph, PetgraphBackedGraph};
