use super::VertexId;

/// Weight of a directed edge.
pub type Weight = f64;

/// The sentinel stored in cells without an edge.
pub const NO_EDGE: Weight = f64::INFINITY;

/// Information about a weighted low-level edge.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct WeightedEdge {
    pub source: VertexId,
    pub sink: VertexId,
    pub weight: Weight,
}

impl WeightedEdge {
    pub fn new(source: VertexId, sink: VertexId, weight: Weight) -> Self {
        Self {
            source,
            sink,
            weight,
        }
    }
}

/// Whether a stored weight denotes an actual edge.
pub fn is_edge(weight: Weight) -> bool {
    weight != NO_EDGE
}
