use crate::graph::*;

/// A default implementation of inspecting into a graph with customized indentation.
///
/// Each vertex is printed on its own line followed by its weighted out-edges.
/// Vertices are labelled by their [VertexId] unless [labels](Self::labels) says otherwise.
pub struct GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    init_indent: usize,
    indent_step: usize,
    label: Box<dyn Fn(&VertexId) -> String + 'a>,
}

impl<'a, G> GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            init_indent: 0,
            indent_step: 2,
            label: Box::new(|v: &VertexId| v.to_string()),
        }
    }

    pub fn labels<F>(mut self, label: F) -> Self
    where
        F: Fn(&VertexId) -> String + 'a,
    {
        self.label = Box::new(label);
        self
    }

    pub fn indent(mut self, init: usize, step: usize) -> Self {
        self.init_indent = init;
        self.indent_step = step;
        self
    }

    fn display_indent(&self, f: &mut std::fmt::Formatter<'_>, level: usize) -> std::fmt::Result {
        let indention = self.init_indent + self.indent_step * level;
        for _ in 0..indention {
            write!(f, " ")?;
        }
        Ok(())
    }
}

impl<'a, G> std::fmt::Debug for GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in self.graph.vertices() {
            self.display_indent(f, 0)?;
            writeln!(f, "{}", (self.label)(&v))?;
            for e in self.graph.out_edges(&v) {
                if e.sink == v && e.weight == 0.0 {
                    continue;
                }
                self.display_indent(f, 1)?;
                writeln!(f, "--{}-> {}", e.weight, (self.label)(&e.sink))?;
            }
        }
        Ok(())
    }
}
