//! Graphviz rendering of a search report.
//!
//! The trace is already a directed graph, so the renderer is a small
//! DOT formatter: every expansion edge is drawn, and when the run
//! found a solution its nodes and edges are drawn bold with the pour
//! order as edge labels. Pipe the output through `dot -Tpng` to get
//! the diagram the search tree deserves.

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use pathfind::Report;

/// Format one run report as a Graphviz `digraph`.
pub fn render<S>(name: &str, report: &Report<S>) -> String
where
    S: Display + Eq + Hash,
{
    let mut out = String::new();
    out.push_str(&format!("digraph \"{}\" {{\n", name));
    out.push_str(&format!("    label=\"{}\";\n", name));
    out.push_str("    node [shape=box, style=rounded];\n");

    let path = report.path().unwrap_or(&[]);

    // Solution edges keyed by endpoints, valued by step number.
    let mut steps = HashMap::new();
    for (n, pair) in path.windows(2).enumerate() {
        steps.insert((&pair[0], &pair[1]), n + 1);
    }

    for state in path {
        out.push_str(&format!("    \"{}\" [penwidth=2];\n", state));
    }

    for (parent, child) in report.trace.edges() {
        match steps.get(&(parent, child)) {
            Some(n) => out.push_str(&format!(
                "    \"{}\" -> \"{}\" [penwidth=2, label=\"{}\"];\n",
                parent, child, n
            )),
            None => out.push_str(&format!(
                "    \"{}\" -> \"{}\" [color=gray];\n",
                parent, child
            )),
        }
    }

    out.push_str("}\n");
    out
}

#[cfg(test)]
mod test {
    use super::*;

    use pathfind::{Outcome, Trace};

    #[test]
    fn solution_edges_are_bold_and_numbered() {
        let mut trace = Trace::new();
        trace.record("a", "b");
        trace.record("a", "c");
        trace.record("b", "d");

        let report = Report {
            outcome: Outcome::Solved(vec!["a", "b", "d"]),
            trace,
        };

        let text = render("bfs", &report);
        assert!(text.starts_with("digraph \"bfs\" {"));
        assert!(text.contains("\"a\" -> \"b\" [penwidth=2, label=\"1\"];"));
        assert!(text.contains("\"b\" -> \"d\" [penwidth=2, label=\"2\"];"));
        assert!(text.contains("\"a\" -> \"c\" [color=gray];"));
    }

    #[test]
    fn exhausted_reports_render_plain_edges_only() {
        let mut trace = Trace::new();
        trace.record(1, 2);

        let report = Report {
            outcome: Outcome::Exhausted,
            trace,
        };

        let text = render("greedy", &report);
        assert!(text.contains("\"1\" -> \"2\" [color=gray];"));
        assert!(!text.contains("penwidth"));
    }
}
