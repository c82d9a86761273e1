use crate::graph::*;
use log::debug;

/// Depth-first visiting order.
pub trait DepthFirstSearch
where
    Self: NamedGraph + Sized,
{
    /// Names of all vertices reachable from `source`, in depth-first preorder.
    /// Neighbors are explored in insertion order. Empty if `source` is unknown.
    fn dfs(&self, source: &str) -> Vec<String> {
        match self.vertex_id(source) {
            Some(s) => dfs_order(self.lower_graph(), s)
                .iter()
                .filter_map(|v| self.vertex_name(v).map(str::to_owned))
                .collect(),
            None => vec![],
        }
    }
}

impl<G: NamedGraph> DepthFirstSearch for G {}

/// Preorder of a depth-first traversal from `source`, visiting out-edges in increasing sink order.
///
/// Walks an explicit stack of out-edge iterators, so deep graphs cannot overflow the call stack.
/// The order is the one a recursive traversal would produce.
pub fn dfs_order<G>(graph: &G, source: VertexId) -> Vec<VertexId>
where
    G: QueryableGraph,
{
    if !graph.contains_vertex(&source) {
        return vec![];
    }
    let mut visited = vec![false; graph.vertex_size()];
    let mut res = vec![source];
    visited[source.to_raw()] = true;
    let mut stack = vec![graph.out_edges(&source)];

    while let Some(edges) = stack.last_mut() {
        let next = edges.next();
        match next {
            Some(e) if !visited[e.sink.to_raw()] => {
                visited[e.sink.to_raw()] = true;
                res.push(e.sink);
                stack.push(graph.out_edges(&e.sink));
            }
            Some(_) => {}
            None => {
                stack.pop();
            }
        }
    }

    debug!("dfs from {source}: visited {} vertices", res.len());
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::*;
    use crate::graph::directed::*;
    use quickcheck_macros::quickcheck;
    use std::collections::HashSet;

    fn recursive(
        graph: &DenseMatrixGraph,
        v: VertexId,
        visited: &mut [bool],
        res: &mut Vec<VertexId>,
    ) {
        visited[v.to_raw()] = true;
        res.push(v);
        for e in graph.out_edges(&v) {
            if !visited[e.sink.to_raw()] {
                recursive(graph, e.sink, visited, res);
            }
        }
    }

    #[test]
    fn preorder_by_insertion_order() {
        let mut g = WeightedGraph::<DenseMatrixGraph>::from_names(["A", "B", "C", "D", "E"]);
        g.add_edge("A", "C", 1.0).unwrap();
        g.add_edge("A", "B", 1.0).unwrap();
        g.add_edge("B", "D", 1.0).unwrap();
        g.add_edge("D", "A", 1.0).unwrap();
        g.add_edge("C", "E", 1.0).unwrap();
        assert_eq!(g.dfs("A"), vec!["A", "B", "D", "C", "E"]);
        assert_eq!(g.dfs("C"), vec!["C", "E"]);
    }

    #[test]
    fn unknown_source() {
        let g = WeightedGraph::<DenseMatrixGraph>::with_generated_names(2, "v");
        assert!(g.dfs("Z").is_empty());
        assert_eq!(g.dfs("v1"), vec!["v1"]);
    }

    #[test]
    fn long_chain() {
        let mut g = WeightedGraph::<PetgraphBackedGraph>::with_generated_names(20_000, "v");
        for i in 1..20_000 {
            g.add_edge(&format!("v{}", i - 1), &format!("v{i}"), 1.0).unwrap();
        }
        let order = g.dfs("v0");
        assert_eq!(order.len(), 20_000);
        assert_eq!(order.last().map(String::as_str), Some("v19999"));
    }

    #[quickcheck]
    fn matches_recursive_traversal(ops: Ops) {
        let mut g = WeightedGraph::<DenseMatrixGraph>::new();
        g.apply(&ops);
        let lower = g.lower_graph();
        for v in lower.vertices() {
            let mut visited = vec![false; lower.vertex_size()];
            let mut oracle = vec![];
            recursive(lower, v, &mut visited, &mut oracle);
            assert_eq!(dfs_order(lower, v), oracle);
        }
    }

    #[quickcheck]
    fn visits_reachable_set_once(ops: SignedOps) {
        let mut g = WeightedGraph::<DenseMatrixGraph>::with_policy(WeightPolicy::Unrestricted);
        g.apply(&ops.0);
        for source in g.vertices() {
            let order = g.dfs(source);
            let distinct: HashSet<_> = order.iter().collect();
            assert_eq!(distinct.len(), order.len());
            assert_eq!(order.len(), g.bfs(source).len());
        }
    }
}
