use crate::{graph::*, GraphError, GraphResult};
use ahash::RandomState;
use bimap::BiHashMap;
use log::trace;

/// Which edge weights a [WeightedGraph] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightPolicy {
    /// Rejects negative weights with [GraphError::InvalidWeight].
    /// Graphs meant for Dijkstra should use this.
    #[default]
    NonNegative,
    /// Accepts any weight but NaN. Needed for Bellman-Ford on negative edges.
    Unrestricted,
}

impl WeightPolicy {
    /// NaN is rejected under every policy.
    fn admits(&self, weight: Weight) -> bool {
        match self {
            WeightPolicy::NonNegative => weight >= 0.0,
            WeightPolicy::Unrestricted => !weight.is_nan(),
        }
    }
}

/// A directed graph with named vertices and weighted edges.
///
/// Names are mapped to the dense [VertexId]s of the lower graph `G`.
/// Once assigned, a name keeps its id for the lifetime of the graph.
/// Vertices are reported in insertion order.
///
/// ```rust
/// use densegraph::{algorithm::*, graph::*};
///
/// let mut g = WeightedGraph::<DenseMatrixGraph>::new();
/// g.add_edge("A", "B", 1.0).unwrap();
/// g.add_edge("B", "C", 2.0).unwrap();
/// g.add_edge("A", "C", 10.0).unwrap();
///
/// let route = g.dijkstra_to("A", "C");
/// assert_eq!(route.distance, 3.0);
/// assert_eq!(route.path, vec!["A", "B", "C"]);
/// ```
#[derive(Clone)]
pub struct WeightedGraph<G = directed::DenseMatrixGraph> {
    lower_graph: G,
    vertex_names: BiHashMap<VertexId, String, RandomState, RandomState>,
    policy: WeightPolicy,
}

impl<G> Default for WeightedGraph<G>
where
    G: GrowableGraph,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<G> WeightedGraph<G>
where
    G: GrowableGraph,
{
    /// Creates an empty graph rejecting negative weights.
    pub fn new() -> Self {
        Self::with_policy(WeightPolicy::default())
    }

    pub fn with_policy(policy: WeightPolicy) -> Self {
        Self {
            lower_graph: G::new(),
            vertex_names: BiHashMap::with_hashers(RandomState::new(), RandomState::new()),
            policy,
        }
    }

    /// Creates a graph pre-seeded with `names`, in order. Duplicates are skipped.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut res = Self::new();
        for name in names {
            res.add_vertex(name.as_ref());
        }
        res
    }

    /// Creates a graph with `count` vertices named `"<prefix>0"`, `"<prefix>1"`, ...
    pub fn with_generated_names(count: usize, prefix: &str) -> Self {
        Self::from_names((0..count).map(|i| format!("{prefix}{i}")))
    }

    /// Switches the policy for edges added from now on. Existing edges are kept.
    pub fn set_policy(&mut self, policy: WeightPolicy) {
        self.policy = policy;
    }

    /// Inserts a vertex unless one with the same name exists.
    pub fn add_vertex(&mut self, name: &str) {
        let _ = self.ensure_vertex(name);
    }

    /// Returns the id of `name`, inserting the vertex first if needed.
    pub fn ensure_vertex(&mut self, name: &str) -> VertexId {
        if let Some(vid) = self.vertex_names.get_by_right(name) {
            *vid
        } else {
            let vid = self.lower_graph.add_vertex();
            self.vertex_names.insert(vid, name.to_owned());
            vid
        }
    }

    /// Sets the weight of `from -> to`, inserting missing endpoints.
    ///
    /// Under [WeightPolicy::NonNegative] a negative weight is rejected
    /// before anything is inserted.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: Weight) -> GraphResult<()> {
        self.check_weight(from, to, weight)?;
        let source = self.ensure_vertex(from);
        let sink = self.ensure_vertex(to);
        self.lower_graph.set_weight(source, sink, weight);
        Ok(())
    }

    /// Adds `a -> b` and `b -> a` with the same weight.
    pub fn add_bidirectional_edge(&mut self, a: &str, b: &str, weight: Weight) -> GraphResult<()> {
        self.add_bidirectional_edge_with(a, b, weight, weight)
    }

    /// Adds `a -> b` weighted `forward` and `b -> a` weighted `backward`.
    /// Either both edges are written or neither is.
    pub fn add_bidirectional_edge_with(
        &mut self,
        a: &str,
        b: &str,
        forward: Weight,
        backward: Weight,
    ) -> GraphResult<()> {
        self.check_weight(a, b, forward)?;
        self.check_weight(b, a, backward)?;
        self.add_edge(a, b, forward)?;
        self.add_edge(b, a, backward)
    }

    fn check_weight(&self, from: &str, to: &str, weight: Weight) -> GraphResult<()> {
        if self.policy.admits(weight) {
            Ok(())
        } else {
            trace!("rejected weight {weight} on {from} -> {to}");
            Err(GraphError::InvalidWeight {
                from: from.to_owned(),
                to: to.to_owned(),
                weight,
            })
        }
    }
}

impl<G> WeightedGraph<G>
where
    G: EdgeShrinkableGraph,
{
    /// Removes `from -> to`. Does nothing if either vertex is unknown.
    pub fn remove_edge(&mut self, from: &str, to: &str) {
        if let (Some(source), Some(sink)) = (
            self.vertex_names.get_by_right(from),
            self.vertex_names.get_by_right(to),
        ) {
            let _ = self.lower_graph.remove_edge(source, sink);
        }
    }
}

impl<G> WeightedGraph<G>
where
    G: QueryableGraph,
{
    pub fn policy(&self) -> WeightPolicy {
        self.policy
    }

    pub fn vertex_size(&self) -> usize {
        self.lower_graph.vertex_size()
    }

    /// Number of edges, counting the implicit zero self-loops that were not removed.
    pub fn edge_size(&self) -> usize {
        self.lower_graph.edge_size()
    }

    /// Iterates over vertex names in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> + '_ {
        self.lower_graph
            .vertices()
            .filter_map(|vid| self.vertex_names.get_by_left(&vid).map(String::as_str))
    }

    /// Returns [NO_EDGE] if either vertex is unknown or there is no such edge.
    pub fn weight(&self, from: &str, to: &str) -> Weight {
        match (
            self.vertex_names.get_by_right(from),
            self.vertex_names.get_by_right(to),
        ) {
            (Some(source), Some(sink)) => self.lower_graph.weight(source, sink),
            _ => NO_EDGE,
        }
    }

    #[cfg(test)]
    pub fn apply(&mut self, ops: &directed::Ops)
    where
        G: GrowableGraph + EdgeShrinkableGraph,
    {
        for op in ops.iter() {
            match op {
                directed::Op::AddVertex(name) => self.add_vertex(name),
                directed::Op::AddEdge((from, to, weight)) => {
                    let _ = self.add_edge(from, to, *weight);
                }
                directed::Op::RemoveEdge((from, to)) => self.remove_edge(from, to),
            }
        }
    }
}

impl<G> NamedGraph for WeightedGraph<G>
where
    G: QueryableGraph,
{
    type LowerGraph = G;

    fn lower_graph(&self) -> &G {
        &self.lower_graph
    }

    fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.vertex_names.get_by_right(name).copied()
    }

    fn vertex_name(&self, vid: &VertexId) -> Option<&str> {
        self.vertex_names.get_by_left(vid).map(String::as_str)
    }
}

impl<G> std::fmt::Debug for WeightedGraph<G>
where
    G: QueryableGraph,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let labels = |v: &VertexId| self.vertex_name(v).unwrap_or("?").to_owned();
        write!(f, "{:?}", self.lower_graph.debug().labels(labels))
    }
}
