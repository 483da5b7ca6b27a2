//! Output formatting for solutions and graph dumps.
//!
//! Results go to stdout; per-line load diagnostics go to stderr so a solved
//! path can still be piped on its own.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use solvemaze_lib::{Diagnostic, Edge, MazeGraph, NodeId, Solution};

/// Output formats supported by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Format a solution as a `Solved path:` line.
///
/// The path string already starts with a space, so the label is followed by
/// two spaces: `Solved path:  1a 2a`.
pub fn format_solution_text(solution: &Solution) -> String {
    format!("Solved path: {}", solution.path_string())
}

/// Format every node that has edges, one line per node in ascending id order.
///
/// Each edge is written as `  {direction}{target};`, with the exit shown as
/// `e`.
pub fn format_dump_text(graph: &MazeGraph) -> String {
    let mut out = String::new();
    for (id, edges) in graph.nodes() {
        out.push_str(&format!("Node {id}"));
        for edge in edges {
            out.push_str(&format!("  {}{};", edge.direction, edge.target));
        }
        out.push('\n');
    }
    out
}

/// Format a skipped line for stderr.
pub fn format_diagnostic(diagnostic: &Diagnostic) -> String {
    format!(
        "Invalid line {}: {} ({})",
        diagnostic.line_number, diagnostic.line, diagnostic.error
    )
}

/// Print load diagnostics to stderr.
pub fn render_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("{}", format_diagnostic(diagnostic));
    }
}

pub fn render_solution_text(solution: &Solution) {
    println!("{}", format_solution_text(solution));
}

pub fn render_dump_text(graph: &MazeGraph) {
    print!("{}", format_dump_text(graph));
}

#[derive(Debug, Serialize)]
struct DumpNode<'a> {
    node: NodeId,
    edges: &'a [Edge],
}

/// Render the graph dump as a JSON array of nodes.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_dump_json(graph: &MazeGraph) -> io::Result<()> {
    let nodes: Vec<DumpNode<'_>> = graph
        .nodes()
        .map(|(node, edges)| DumpNode { node, edges })
        .collect();
    render_json(&nodes)
}

/// Render any serializable value as pretty JSON on stdout.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}
