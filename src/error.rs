//! Error types for graph mutation and queries.

use thiserror::Error;

/// Errors raised by [WeightedGraph](crate::graph::WeightedGraph) and its algorithms.
///
/// Unknown vertices are never an error; queries degrade to empty or sentinel results instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A negative weight was inserted into a graph whose policy forbids it.
    #[error("invalid weight {weight} on edge {from} -> {to}: weights must be non-negative")]
    InvalidWeight { from: String, to: String, weight: f64 },

    /// Bellman-Ford found a negative-weight cycle reachable from `origin`.
    #[error("negative-weight cycle reachable from {origin}")]
    NegativeCycleDetected { origin: String },
}

/// Convenience alias used throughout the crate.
pub type GraphResult<T> = Result<T, GraphError>;
