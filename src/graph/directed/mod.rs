mod dense_matrix;
pub use self::dense_matrix::*;
mod petgraph_backed;
pub use self::petgraph_backed::*;

#[cfg(test)]
pub use self::tests::*;

#[cfg(test)]
mod tests {
    use crate::graph::*;
    use quickcheck::Arbitrary;
    use quickcheck_macros::quickcheck;
    use rs_quickcheck_util::*;

    const NAMES: &[u8] = b"abcdef";

    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        AddVertex(String),
        AddEdge((String, String, Weight)),
        RemoveEdge((String, String)),
    }

    /// Random mutations over a handful of vertex names with small non-negative integral weights.
    #[derive(Clone)]
    pub struct Ops {
        pub ops: Vec<Op>,
    }

    /// Like [Ops], but weights may be negative.
    #[derive(Clone, Debug)]
    pub struct SignedOps(pub Ops);

    impl std::fmt::Debug for Ops {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.ops)
        }
    }

    impl Ops {
        pub fn iter(&self) -> impl Iterator<Item = &Op> + '_ {
            self.ops.iter()
        }

        fn generate(g: &mut quickcheck::Gen, lowest_weight: i32) -> Self {
            let ops = gen_bytes(g, b"abcd.", b'.', 0..)
                .iter()
                .map(|_| match u8::arbitrary(g) % 4 {
                    0 => Op::AddVertex(gen_name(g)),
                    1 | 2 => {
                        let weight = lowest_weight + (u8::arbitrary(g) % 10) as i32;
                        Op::AddEdge((gen_name(g), gen_name(g), weight as Weight))
                    }
                    3 => Op::RemoveEdge((gen_name(g), gen_name(g))),
                    _ => unreachable!(),
                })
                .collect();
            Self { ops }
        }

        fn shrink_ops(&self) -> Box<dyn Iterator<Item = Self>> {
            let l = self.ops.len();
            let me = self.clone();
            let it = std::iter::successors(Some(l / 2), move |n| {
                let nxt = (n + l) / 2 + 1;
                if nxt >= l {
                    None
                } else {
                    Some(nxt)
                }
            })
            .map(move |n| Self {
                ops: me.ops[0..n].to_vec(),
            });
            Box::new(it)
        }
    }

    fn gen_name(g: &mut quickcheck::Gen) -> String {
        let idx = usize::arbitrary(g) % NAMES.len();
        (NAMES[idx] as char).to_string()
    }

    impl quickcheck::Arbitrary for Ops {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            Self::generate(g, 0)
        }

        fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
            self.shrink_ops()
        }
    }

    impl quickcheck::Arbitrary for SignedOps {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            Self(Ops::generate(g, -3))
        }

        fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
            Box::new(self.0.shrink_ops().map(SignedOps))
        }
    }

    #[quickcheck]
    fn dense_and_petgraph_backed_agree(ops: SignedOps) {
        let mut dense = WeightedGraph::<DenseMatrixGraph>::with_policy(WeightPolicy::Unrestricted);
        let mut listed =
            WeightedGraph::<super::PetgraphBackedGraph>::with_policy(WeightPolicy::Unrestricted);
        dense.apply(&ops.0);
        listed.apply(&ops.0);

        let names: Vec<_> = dense.vertices().collect();
        assert_eq!(names, listed.vertices().collect::<Vec<_>>());
        assert_eq!(dense.edge_size(), listed.edge_size());
        for u in names.iter() {
            for v in names.iter() {
                assert_eq!(dense.weight(u, v), listed.weight(u, v), "{u} -> {v}");
            }
            let uid = dense.vertex_id(u).unwrap();
            let d: Vec<_> = dense.lower_graph().out_edges(&uid).collect();
            let l: Vec<_> = listed.lower_graph().out_edges(&uid).collect();
            assert_eq!(d, l);
        }
    }

    #[quickcheck]
    fn matrix_stays_square(ops: Ops) {
        let mut g = WeightedGraph::<DenseMatrixGraph>::new();
        g.apply(&ops);
        let n = g.vertex_size();
        let lower = g.lower_graph();
        assert_eq!(lower.vertex_size(), n);
        for v in lower.vertices() {
            assert!(v.to_raw() < n);
            assert!(lower.out_edges(&v).all(|e| e.sink.to_raw() < n));
        }
    }
}
