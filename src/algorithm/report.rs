//! Human-readable rendering of query results.
//!
//! ```rust
//! use densegraph::{algorithm::*, graph::*};
//!
//! let mut g = WeightedGraph::<DenseMatrixGraph>::new();
//! g.add_edge("A", "B", 1.25).unwrap();
//! assert_eq!(
//!     g.dijkstra_to("A", "B").to_string(),
//!     "distance: 1.25\n  0: A\n  1: B\n"
//! );
//! assert_eq!(g.bfs_to("B", "A").to_string(), "unreachable\n");
//! ```
use crate::algorithm::*;
use std::fmt::{self, Display, Formatter};

/// How a distance is printed.
pub trait RenderMetric: Metric {
    fn render(&self) -> String;
}

impl RenderMetric for f64 {
    fn render(&self) -> String {
        format!("{:.2}", self)
    }
}

impl RenderMetric for i64 {
    fn render(&self) -> String {
        match self {
            1 => "1 hop".to_owned(),
            n => format!("{n} hops"),
        }
    }
}

impl<D: RenderMetric> Display for Route<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if !self.is_reachable() {
            return writeln!(f, "unreachable");
        }
        writeln!(f, "distance: {}", self.distance.render())?;
        for (i, name) in self.path.iter().enumerate() {
            writeln!(f, "  {i}: {name}")?;
        }
        Ok(())
    }
}

impl<D: RenderMetric> Display for PathTree<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.source() {
            Some(source) => writeln!(f, "from: {source}")?,
            None => return writeln!(f, "unknown source"),
        }
        for (i, (name, dist)) in self.iter().enumerate() {
            writeln!(f, "  {i}: {name} ({})", dist.render())?;
        }
        Ok(())
    }
}

/// Renders a depth-first order as `A -> B -> C`.
pub fn render_order(order: &[String]) -> String {
    order.join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{directed::*, *};

    #[test]
    fn tree_lists_reachable_vertices() {
        let mut g = WeightedGraph::<DenseMatrixGraph>::new();
        g.add_edge("A", "B", 2.0).unwrap();
        g.add_vertex("C");
        assert_eq!(g.dijkstra("A").to_string(), "from: A\n  0: A (0.00)\n  1: B (2.00)\n");
        assert_eq!(g.bfs("A").to_string(), "from: A\n  0: A (0 hops)\n  1: B (1 hop)\n");
        assert_eq!(g.bfs("Z").to_string(), "unknown source\n");
    }

    #[test]
    fn hop_counts() {
        assert_eq!(1i64.render(), "1 hop");
        assert_eq!(2i64.render(), "2 hops");
        assert_eq!(0i64.render(), "0 hops");
    }

    #[test]
    fn order() {
        assert_eq!(render_order(&[]), "");
        assert_eq!(
            render_order(&["A".to_owned(), "B".to_owned()]),
            "A -> B"
        );
    }
}
