use crate::graph::*;
use petgraph::{graph::NodeIndex, stable_graph::StableDiGraph, visit::EdgeRef};

/// A directed graph stored as adjacency lists in a [petgraph::stable_graph::StableDiGraph].
///
/// It behaves exactly like [DenseMatrixGraph](super::DenseMatrixGraph),
/// but costs $O(\|V\| + \|E\|)$ memory instead of $O(\|V\|^2)$.
#[derive(Clone)]
pub struct PetgraphBackedGraph(StableDiGraph<(), Weight, usize>);

impl std::fmt::Debug for PetgraphBackedGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "PetgraphBackedGraph {{")?;
        write!(f, "{:?}", self.debug().indent(2, 2))?;
        writeln!(f, "}}")
    }
}

impl PetgraphBackedGraph {
    fn node(&self, v: &VertexId) -> Option<NodeIndex<usize>> {
        let nidx = NodeIndex::new(v.to_raw());
        if self.0.contains_node(nidx) {
            Some(nidx)
        } else {
            None
        }
    }
}

impl GrowableGraph for PetgraphBackedGraph {
    fn new() -> Self {
        Self(StableDiGraph::<(), Weight, usize>::with_capacity(0, 0))
    }

    fn add_vertex(&mut self) -> VertexId {
        let nidx = self.0.add_node(());
        self.0.add_edge(nidx, nidx, 0.0);
        VertexId::new(nidx.index())
    }

    fn set_weight(&mut self, source: VertexId, sink: VertexId, weight: Weight) {
        debug_assert!(self.contains_vertex(&source));
        debug_assert!(self.contains_vertex(&sink));
        if !is_edge(weight) {
            let _ = self.remove_edge(&source, &sink);
            return;
        }
        if let (Some(a), Some(b)) = (self.node(&source), self.node(&sink)) {
            self.0.update_edge(a, b, weight);
        }
    }
}

impl EdgeShrinkableGraph for PetgraphBackedGraph {
    fn remove_edge(&mut self, source: &VertexId, sink: &VertexId) -> Option<WeightedEdge> {
        let a = self.node(source)?;
        let b = self.node(sink)?;
        let eidx = self.0.find_edge(a, b)?;
        self.0
            .remove_edge(eidx)
            .map(|weight| WeightedEdge::new(*source, *sink, weight))
    }
}

impl QueryableGraph for PetgraphBackedGraph {
    fn vertex_size(&self) -> usize {
        self.0.node_count()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        let it = self.0.node_indices().map(|x| VertexId::new(x.index()));
        Box::new(it)
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        self.node(v).is_some()
    }

    fn weight(&self, source: &VertexId, sink: &VertexId) -> Weight {
        match (self.node(source), self.node(sink)) {
            (Some(a), Some(b)) => self
                .0
                .find_edge(a, b)
                .and_then(|e| self.0.edge_weight(e).copied())
                .unwrap_or(NO_EDGE),
            _ => NO_EDGE,
        }
    }

    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = WeightedEdge> + '_> {
        let source = *v;
        match self.node(v) {
            Some(a) => {
                let mut res: Vec<_> = self
                    .0
                    .edges(a)
                    .map(|e| {
                        let sink = VertexId::new(e.target().index());
                        WeightedEdge::new(source, sink, *e.weight())
                    })
                    .collect();
                res.sort_by_key(|e| e.sink);
                Box::new(res.into_iter())
            }
            None => Box::new(std::iter::empty()),
        }
    }

    fn edge_size(&self) -> usize {
        self.0.edge_count()
    }
}
