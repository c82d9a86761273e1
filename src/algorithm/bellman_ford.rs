use crate::{algorithm::*, graph::*, GraphError, GraphResult};
use log::{debug, trace};

/// Single-source shortest paths tolerating negative weights.
///
/// Relaxes every edge for up to $\|V\| - 1$ rounds, stopping early once a round
/// changes nothing, then makes one more pass: if any edge still relaxes, a
/// negative cycle is reachable from the source and
/// [GraphError::NegativeCycleDetected] is returned instead of distances.
pub trait BellmanFord
where
    Self: NamedGraph + Sized,
{
    /// Like [Dijkstra::dijkstra](super::Dijkstra::dijkstra), but accepts negative weights.
    fn bellman_ford(&self, source: &str) -> GraphResult<PathTree<f64>> {
        match self.vertex_id(source) {
            Some(s) => {
                let tree = bellman_ford_tree(self.lower_graph(), s).map_err(|_| cycle(source))?;
                Ok(tree.into_path_tree(self))
            }
            None => Ok(PathTree::empty()),
        }
    }

    /// Like [Dijkstra::dijkstra_to](super::Dijkstra::dijkstra_to), but accepts negative weights.
    fn bellman_ford_to(&self, source: &str, target: &str) -> GraphResult<Route<f64>> {
        match (self.vertex_id(source), self.vertex_id(target)) {
            (Some(s), Some(t)) => {
                let tree = bellman_ford_tree(self.lower_graph(), s).map_err(|_| cycle(source))?;
                Ok(tree.route_to(self, &t))
            }
            _ => Ok(Route::unreachable()),
        }
    }
}

impl<G: NamedGraph> BellmanFord for G {}

fn cycle(source: &str) -> GraphError {
    GraphError::NegativeCycleDetected {
        origin: source.to_owned(),
    }
}

/// A negative cycle reachable from the given source vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NegativeCycle(pub VertexId);

/// Runs Bellman-Ford from `source` over every edge of `graph`, self-loops included.
pub fn bellman_ford_tree<G>(graph: &G, source: VertexId) -> Result<SearchTree<f64>, NegativeCycle>
where
    G: QueryableGraph,
{
    let n = graph.vertex_size();
    let mut tree = SearchTree::new(source, n);

    let mut rounds = 0usize;
    for _ in 1..n {
        rounds += 1;
        let mut changed = false;
        for e in graph.edges() {
            if relax(&mut tree, &e) {
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    for e in graph.edges() {
        let du = tree.distances[e.source.to_raw()];
        if du.is_reachable() && du + e.weight < tree.distances[e.sink.to_raw()] {
            debug!(
                "bellman-ford from {source}: negative cycle through {} -> {}",
                e.source, e.sink
            );
            return Err(NegativeCycle(source));
        }
    }

    debug!("bellman-ford from {source}: converged after {rounds} rounds");
    Ok(tree)
}

fn relax(tree: &mut SearchTree<f64>, e: &WeightedEdge) -> bool {
    let du = tree.distances[e.source.to_raw()];
    if !du.is_reachable() {
        return false;
    }
    let candidate = du + e.weight;
    let v = e.sink.to_raw();
    if candidate < tree.distances[v] {
        trace!("relax {} -> {}: {}", e.source, e.sink, candidate);
        tree.distances[v] = candidate;
        tree.predecessors[v] = Some(e.source);
        true
    } else {
        false
    }
}
