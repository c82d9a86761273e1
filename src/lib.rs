//! A weighted directed graph over a dense adjacency matrix,
//! with Dijkstra, Bellman-Ford, breadth-first and depth-first search.
//!
//! ```rust
//! use densegraph::{algorithm::*, graph::*};
//!
//! let mut g = WeightedGraph::<DenseMatrixGraph>::with_policy(WeightPolicy::Unrestricted);
//! g.add_edge("A", "B", 1.0).unwrap();
//! g.add_edge("B", "A", -3.0).unwrap();
//! assert!(matches!(
//!     g.bellman_ford("A"),
//!     Err(densegraph::GraphError::NegativeCycleDetected { .. })
//! ));
//! assert_eq!(g.dfs("A"), vec!["A", "B"]);
//! ```

pub mod algorithm;
mod error;
pub use self::error::*;
pub mod graph;
