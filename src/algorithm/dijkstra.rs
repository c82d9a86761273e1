use crate::{algorithm::*, graph::*};
use log::{debug, trace};

/// Single-source shortest paths over non-negative weights.
///
/// The next vertex to settle is found by scanning all vertices,
/// which costs $O(\|V\|^2)$ in total and suits dense graphs.
/// Ties go to the vertex with the smallest id.
///
/// Negative weights break the algorithm silently.
/// Build graphs with [WeightPolicy::NonNegative] to rule them out.
pub trait Dijkstra
where
    Self: NamedGraph + Sized,
{
    /// Distances to every reachable vertex and the predecessor of every vertex.
    /// Empty if `source` is unknown.
    fn dijkstra(&self, source: &str) -> PathTree<f64> {
        match self.vertex_id(source) {
            Some(s) => dijkstra_tree(self.lower_graph(), s, None).into_path_tree(self),
            None => PathTree::empty(),
        }
    }

    /// The shortest route from `source` to `target`.
    /// `(inf, [])` if either is unknown or `target` is unreachable.
    fn dijkstra_to(&self, source: &str, target: &str) -> Route<f64> {
        match (self.vertex_id(source), self.vertex_id(target)) {
            (Some(s), Some(t)) => dijkstra_tree(self.lower_graph(), s, Some(t)).route_to(self, &t),
            _ => Route::unreachable(),
        }
    }
}

impl<G: NamedGraph> Dijkstra for G {}

/// Runs Dijkstra from `source`, stopping once `target` (if any) is settled.
///
/// When stopped early, only the entries on the route to `target` are final.
pub fn dijkstra_tree<G>(graph: &G, source: VertexId, target: Option<VertexId>) -> SearchTree<f64>
where
    G: QueryableGraph,
{
    let n = graph.vertex_size();
    let mut tree = SearchTree::new(source, n);
    let mut visited = vec![false; n];
    let mut settled = 0usize;

    for _ in 0..n {
        let mut best = f64::INFINITY;
        let mut next = None;
        for (i, dist) in tree.distances.iter().enumerate() {
            if !visited[i] && *dist < best {
                best = *dist;
                next = Some(i);
            }
        }
        let Some(u) = next else {
            break;
        };
        visited[u] = true;
        settled += 1;
        let cur = VertexId::new(u);
        if target == Some(cur) {
            break;
        }

        for e in graph.out_edges(&cur) {
            let v = e.sink.to_raw();
            let candidate = best + e.weight;
            if candidate < tree.distances[v] {
                trace!("relax {} -> {}: {}", cur, e.sink, candidate);
                tree.distances[v] = candidate;
                tree.predecessors[v] = Some(cur);
            }
        }
    }

    debug!("dijkstra from {source}: settled {settled} of {n} vertices");
    tree
}
