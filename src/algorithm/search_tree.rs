use crate::graph::*;
use ahash::RandomState;
use std::collections::HashMap;

/// Distances produced by the searches: `f64` path weights or `i64` hop counts.
pub trait Metric: Copy + PartialOrd + std::fmt::Debug + std::fmt::Display {
    const ZERO: Self;
    /// Reported for vertices that cannot be reached.
    const UNREACHABLE: Self;

    fn is_reachable(&self) -> bool;
}

impl Metric for f64 {
    const ZERO: Self = 0.0;
    const UNREACHABLE: Self = f64::INFINITY;

    fn is_reachable(&self) -> bool {
        *self < f64::INFINITY
    }
}

impl Metric for i64 {
    const ZERO: Self = 0;
    const UNREACHABLE: Self = -1;

    fn is_reachable(&self) -> bool {
        *self >= 0
    }
}

/// Result of a single-source search on a low-level graph, addressed by [VertexId].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTree<D> {
    pub source: VertexId,
    pub distances: Vec<D>,
    pub predecessors: Vec<Option<VertexId>>,
}

impl<D: Metric> SearchTree<D> {
    pub(crate) fn new(source: VertexId, vertex_size: usize) -> Self {
        let mut res = Self {
            source,
            distances: vec![D::UNREACHABLE; vertex_size],
            predecessors: vec![None; vertex_size],
        };
        if let Some(d) = res.distances.get_mut(source.to_raw()) {
            *d = D::ZERO;
        }
        res
    }

    pub fn distance(&self, v: &VertexId) -> D {
        self.distances
            .get(v.to_raw())
            .copied()
            .unwrap_or(D::UNREACHABLE)
    }

    /// Vertices from the source to `target`, or an empty path if `target` is unreachable.
    pub fn path_to(&self, target: &VertexId) -> Vec<VertexId> {
        if !self.distance(target).is_reachable() {
            return vec![];
        }
        let mut res = vec![*target];
        let mut cur = *target;
        // a predecessor chain never revisits a vertex, so it has at most |V| links
        for _ in 0..self.distances.len() {
            if cur == self.source {
                break;
            }
            match self.predecessors[cur.to_raw()] {
                Some(prev) => {
                    res.push(prev);
                    cur = prev;
                }
                None => break,
            }
        }
        res.reverse();
        res
    }

    pub(crate) fn into_path_tree<G: NamedGraph>(self, graph: &G) -> PathTree<D> {
        let name = |v: &VertexId| graph.vertex_name(v).map(str::to_owned);
        let mut res = PathTree::empty();
        res.source = name(&self.source);
        for (i, (dist, pred)) in self
            .distances
            .iter()
            .zip(self.predecessors.iter())
            .enumerate()
        {
            let Some(vname) = name(&VertexId::new(i)) else {
                continue;
            };
            if dist.is_reachable() {
                res.order.push(vname.clone());
                res.distances.insert(vname.clone(), *dist);
            }
            res.predecessors
                .insert(vname, pred.as_ref().and_then(|p| name(p)));
        }
        res
    }

    pub(crate) fn route_to<G: NamedGraph>(&self, graph: &G, target: &VertexId) -> Route<D> {
        let distance = self.distance(target);
        if !distance.is_reachable() {
            return Route::unreachable();
        }
        let path = self
            .path_to(target)
            .iter()
            .filter_map(|v| graph.vertex_name(v).map(str::to_owned))
            .collect();
        Route { distance, path }
    }
}

/// Shortest distances from one source to every reachable vertex, by name.
///
/// Distances cover reachable vertices only; predecessors cover every vertex,
/// `None` for the source and for unreachable ones.
#[derive(Debug, Clone, PartialEq)]
pub struct PathTree<D> {
    source: Option<String>,
    order: Vec<String>,
    distances: HashMap<String, D, RandomState>,
    predecessors: HashMap<String, Option<String>, RandomState>,
}

impl<D: Metric> PathTree<D> {
    /// The result for a source that is not in the graph.
    pub fn empty() -> Self {
        Self {
            source: None,
            order: vec![],
            distances: HashMap::with_hasher(RandomState::new()),
            predecessors: HashMap::with_hasher(RandomState::new()),
        }
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Whether nothing, not even the source, was reached.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of reachable vertices, the source included.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn distance(&self, name: &str) -> Option<D> {
        self.distances.get(name).copied()
    }

    /// The vertex preceding `name` on its shortest path.
    pub fn predecessor(&self, name: &str) -> Option<&str> {
        self.predecessors.get(name).and_then(|p| p.as_deref())
    }

    /// Reachable vertices and their distances, in vertex insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, D)> + '_ {
        self.order
            .iter()
            .filter_map(|name| self.distances.get(name).map(|d| (name.as_str(), *d)))
    }

    /// Every vertex with its predecessor, in no particular order.
    pub fn predecessors(&self) -> impl Iterator<Item = (&str, Option<&str>)> + '_ {
        self.predecessors
            .iter()
            .map(|(name, pred)| (name.as_str(), pred.as_deref()))
    }

    /// Rebuilds the route to `target` by walking predecessors back to the source.
    pub fn route_to(&self, target: &str) -> Route<D> {
        let Some(distance) = self.distance(target) else {
            return Route::unreachable();
        };
        let mut path = vec![target.to_owned()];
        let mut cur = target;
        while Some(cur) != self.source() && path.len() <= self.order.len() {
            match self.predecessor(cur) {
                Some(prev) => {
                    path.push(prev.to_owned());
                    cur = prev;
                }
                None => break,
            }
        }
        path.reverse();
        Route { distance, path }
    }
}

/// Distance and vertex sequence from a source to one target.
#[derive(Debug, Clone, PartialEq)]
pub struct Route<D> {
    pub distance: D,
    /// From source to target, both included. Empty if unreachable.
    pub path: Vec<String>,
}

impl<D: Metric> Route<D> {
    pub fn unreachable() -> Self {
        Self {
            distance: D::UNREACHABLE,
            path: vec![],
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_reachable()
    }
}
