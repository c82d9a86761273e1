use crate::graph::*;

/// Low-level graphs that can grow.
///
/// Vertex ids are handed out densely, `0, 1, 2, ...`, and are never reused.
/// A fresh vertex carries a self-loop of weight `0`.
pub trait GrowableGraph {
    fn new() -> Self;
    fn add_vertex(&mut self) -> VertexId;
    /// Sets the weight of `source -> sink`, overwriting any previous one.
    /// Setting [NO_EDGE] is equivalent to removing the edge.
    fn set_weight(&mut self, source: VertexId, sink: VertexId, weight: Weight);
}

pub trait EdgeShrinkableGraph {
    /// Removes `source -> sink` and returns it if it was present.
    fn remove_edge(&mut self, source: &VertexId, sink: &VertexId) -> Option<WeightedEdge>;
}

pub trait QueryableGraph {
    fn vertex_size(&self) -> usize;
    /// Iterates over vertices in increasing id order.
    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;
    fn contains_vertex(&self, v: &VertexId) -> bool;
    /// Returns [NO_EDGE] if either endpoint is absent or there is no such edge.
    fn weight(&self, source: &VertexId, sink: &VertexId) -> Weight;
    /// Iterates over out-edges of `v` in increasing sink order.
    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = WeightedEdge> + '_>;

    /// Iterates over all edges, grouped by source, both in increasing id order.
    fn edges(&self) -> Box<dyn Iterator<Item = WeightedEdge> + '_> {
        Box::new(self.vertices().flat_map(move |v| self.out_edges(&v)))
    }

    fn edge_size(&self) -> usize {
        self.edges().count()
    }

    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}

/// Links between a low-level graph and vertex names.
pub trait NamedGraph {
    /// type of underlying low-level graph
    type LowerGraph: QueryableGraph;

    fn lower_graph(&self) -> &Self::LowerGraph;
    fn vertex_id(&self, name: &str) -> Option<VertexId>;
    fn vertex_name(&self, vid: &VertexId) -> Option<&str>;

    fn contains_vertex(&self, name: &str) -> bool {
        self.vertex_id(name).is_some()
    }
}
