use crate::graph::*;

/// A directed graph backed by a dense adjacency matrix.
///
/// `weights[i][j]` holds the weight of `i -> j`, or [NO_EDGE].
/// The matrix is always square and every new vertex starts with a `0` self-loop.
///
/// |                    | Complexity                 |
/// | ------------------ | -------------------------- |
/// | `add_vertex`       | $O(\|V\|)$ amortized       |
/// | `set_weight`       | $O(1)$                     |
/// | `remove_edge`      | $O(1)$                     |
/// | `vertex_size`      | $O(1)$                     |
/// | `weight`           | $O(1)$                     |
/// | `out_edges`        | $O(\|V\|)$ to exhaust      |
/// | `edges`            | $O(\|V\|^2)$ to exhaust    |
#[derive(Clone, Default)]
pub struct DenseMatrixGraph {
    weights: Vec<Vec<Weight>>,
}

impl std::fmt::Debug for DenseMatrixGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "DenseMatrixGraph {{")?;
        for row in self.weights.iter() {
            let cells: Vec<_> = row
                .iter()
                .map(|w| if is_edge(*w) { format!("{w}") } else { "-".to_owned() })
                .collect();
            writeln!(f, "  [{}]", cells.join(", "))?;
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl DenseMatrixGraph {
    fn cell(&self, source: &VertexId, sink: &VertexId) -> Option<&Weight> {
        self.weights
            .get(source.to_raw())
            .and_then(|row| row.get(sink.to_raw()))
    }

    fn cell_mut(&mut self, source: &VertexId, sink: &VertexId) -> Option<&mut Weight> {
        self.weights
            .get_mut(source.to_raw())
            .and_then(|row| row.get_mut(sink.to_raw()))
    }
}

impl GrowableGraph for DenseMatrixGraph {
    fn new() -> Self {
        Self { weights: vec![] }
    }

    fn add_vertex(&mut self) -> VertexId {
        let n = self.weights.len();
        for row in self.weights.iter_mut() {
            row.push(NO_EDGE);
        }
        let mut row = vec![NO_EDGE; n + 1];
        row[n] = 0.0;
        self.weights.push(row);
        VertexId::new(n)
    }

    fn set_weight(&mut self, source: VertexId, sink: VertexId, weight: Weight) {
        debug_assert!(self.contains_vertex(&source));
        debug_assert!(self.contains_vertex(&sink));
        if let Some(cell) = self.cell_mut(&source, &sink) {
            *cell = weight;
        }
    }
}

impl EdgeShrinkableGraph for DenseMatrixGraph {
    fn remove_edge(&mut self, source: &VertexId, sink: &VertexId) -> Option<WeightedEdge> {
        let cell = self.cell_mut(source, sink)?;
        let weight = std::mem::replace(cell, NO_EDGE);
        if is_edge(weight) {
            Some(WeightedEdge::new(*source, *sink, weight))
        } else {
            None
        }
    }
}

impl QueryableGraph for DenseMatrixGraph {
    fn vertex_size(&self) -> usize {
        self.weights.len()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new((0..self.weights.len()).map(VertexId::new))
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        v.to_raw() < self.weights.len()
    }

    fn weight(&self, source: &VertexId, sink: &VertexId) -> Weight {
        self.cell(source, sink).copied().unwrap_or(NO_EDGE)
    }

    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = WeightedEdge> + '_> {
        let source = *v;
        match self.weights.get(v.to_raw()) {
            Some(row) => {
                let it = row
                    .iter()
                    .enumerate()
                    .filter(|(_, w)| is_edge(**w))
                    .map(move |(j, w)| WeightedEdge::new(source, VertexId::new(j), *w));
                Box::new(it)
            }
            None => Box::new(std::iter::empty()),
        }
    }
}
