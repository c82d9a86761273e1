use crate::{algorithm::*, graph::*};
use log::debug;
use std::collections::VecDeque;

/// Fewest-hops paths, ignoring weights.
///
/// Any stored edge counts as a hop, whatever the sign of its weight.
/// Unreachable vertices report `-1`.
pub trait BreadthFirstSearch
where
    Self: NamedGraph + Sized,
{
    /// Hop counts to every reachable vertex and the predecessor of every vertex.
    fn bfs(&self, source: &str) -> PathTree<i64> {
        match self.vertex_id(source) {
            Some(s) => bfs_tree(self.lower_graph(), s).into_path_tree(self),
            None => PathTree::empty(),
        }
    }

    /// The route with fewest hops from `source` to `target`, or `(-1, [])`.
    fn bfs_to(&self, source: &str, target: &str) -> Route<i64> {
        match (self.vertex_id(source), self.vertex_id(target)) {
            (Some(s), Some(t)) => bfs_tree(self.lower_graph(), s).route_to(self, &t),
            _ => Route::unreachable(),
        }
    }
}

impl<G: NamedGraph> BreadthFirstSearch for G {}

/// Level-by-level search from `source`.
///
/// A vertex gets its hop count and predecessor when it is first discovered,
/// so it enters the queue at most once.
pub fn bfs_tree<G>(graph: &G, source: VertexId) -> SearchTree<i64>
where
    G: QueryableGraph,
{
    let mut tree = SearchTree::new(source, graph.vertex_size());
    if !graph.contains_vertex(&source) {
        return tree;
    }
    let mut queue = VecDeque::new();
    queue.push_back(source);
    let mut discovered = 1usize;

    while let Some(u) = queue.pop_front() {
        let hops = tree.distances[u.to_raw()] + 1;
        for e in graph.out_edges(&u) {
            let v = e.sink.to_raw();
            if tree.distances[v] < 0 {
                tree.distances[v] = hops;
                tree.predecessors[v] = Some(u);
                queue.push_back(e.sink);
                discovered += 1;
            }
        }
    }

    debug!("bfs from {source}: discovered {discovered} vertices");
    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::directed::*;
    use quickcheck_macros::quickcheck;

    fn abc() -> WeightedGraph {
        let mut g = WeightedGraph::new();
        g.add_edge("A", "B", 1.0).unwrap();
        g.add_edge("B", "C", 2.0).unwrap();
        g.add_edge("A", "C", 10.0).unwrap();
        g
    }

    #[test]
    fn direct_edge_is_one_hop() {
        let route = abc().bfs_to("A", "C");
        assert_eq!(route.distance, 1);
        assert_eq!(route.path, vec!["A", "C"]);
    }

    #[test]
    fn two_hops_without_shortcut() {
        let mut g = abc();
        g.remove_edge("A", "C");
        let route = g.bfs_to("A", "C");
        assert_eq!(route.distance, 2);
        assert_eq!(route.path, vec!["A", "B", "C"]);
    }

    #[test]
    fn hops_ignore_weight_sign() {
        let mut g = WeightedGraph::<DenseMatrixGraph>::with_policy(WeightPolicy::Unrestricted);
        g.add_edge("A", "B", -7.0).unwrap();
        assert_eq!(g.bfs_to("A", "B").distance, 1);
    }

    #[test]
    fn unreachable_reports_minus_one() {
        let mut g = abc();
        g.add_vertex("D");
        assert_eq!(g.bfs_to("A", "D"), Route { distance: -1, path: vec![] });
        assert_eq!(g.bfs_to("Z", "A").distance, -1);
        let tree = g.bfs("A");
        assert_eq!(tree.distance("D"), None);
        assert_eq!(tree.distance("A"), Some(0));
        assert!(g.bfs("Z").is_empty());
    }

    #[quickcheck]
    fn source_is_zero_hops(ops: SignedOps) {
        let mut g = WeightedGraph::<DenseMatrixGraph>::with_policy(WeightPolicy::Unrestricted);
        g.apply(&ops.0);
        for name in g.vertices() {
            assert_eq!(g.bfs_to(name, name).distance, 0);
            assert_eq!(g.bfs(name).distance(name), Some(0));
        }
    }

    #[quickcheck]
    fn hop_counts_match_unit_weights(ops: Ops) {
        let mut g = WeightedGraph::<DenseMatrixGraph>::new();
        g.apply(&ops);
        let mut unit = WeightedGraph::<DenseMatrixGraph>::from_names(g.vertices());
        for u in g.vertices() {
            for v in g.vertices() {
                if u != v && is_edge(g.weight(u, v)) {
                    unit.add_edge(u, v, 1.0).unwrap();
                }
            }
        }
        for source in g.vertices() {
            let by_bfs = g.bfs(source);
            let by_dijkstra = unit.dijkstra(source);
            let hops: Vec<_> = by_bfs.iter().map(|(n, d)| (n, d as f64)).collect();
            let weighted: Vec<_> = by_dijkstra.iter().collect();
            assert_eq!(hops, weighted);
        }
    }
}
