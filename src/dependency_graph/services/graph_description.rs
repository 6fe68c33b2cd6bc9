use crate::dependency_graph::domain::DependencyGraph;
use std::fmt;

/// Attributes applied to edges that belong to a recorded cycle
const CYCLE_EDGE_ATTRIBUTES: &str = "color=red, penwidth=2.0";

/// Serializes the graph as a Graphviz `digraph`
///
/// All forward edges are written first, in graph-iteration order. Edges of
/// every recorded cycle are then written a second time with
/// [`CYCLE_EDGE_ATTRIBUTES`], in cycle-detection order.
pub fn to_graph_description(graph: &DependencyGraph) -> String {
    GraphDescription(graph).to_string()
}

struct GraphDescription<'a>(&'a DependencyGraph);

impl fmt::Display for GraphDescription<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let graph = self.0;
        writeln!(f, "digraph dependencies {{")?;
        writeln!(f, "    rankdir=LR;")?;
        writeln!(f, "    node [shape=box, style=rounded];")?;

        // Packages expanded with no dependencies would otherwise not appear
        for (package, dependencies) in graph.edges() {
            if dependencies.is_empty() {
                writeln!(f, "    {};", quote(package))?;
            }
        }

        for (from, to) in graph.edge_pairs() {
            writeln!(f, "    {} -> {};", quote(from), quote(to))?;
        }

        for cycle in graph.cycles() {
            for (from, to) in cycle.edges() {
                writeln!(
                    f,
                    "    {} -> {} [{}];",
                    quote(from),
                    quote(to),
                    CYCLE_EDGE_ATTRIBUTES
                )?;
            }
        }

        writeln!(f, "}}")
    }
}

fn quote(id: &str) -> String {
    format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
}
