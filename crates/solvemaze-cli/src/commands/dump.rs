//! Dump command handler for inspecting the parsed graph.

use anyhow::Result;
use tracing::debug;

use solvemaze_cli::output::{render_dump_json, render_dump_text, OutputFormat};

use super::CommandContext;

/// Handle the dump subcommand.
pub fn handle_dump_command(context: &CommandContext) -> Result<()> {
    let maze = context.load()?;
    debug!(
        nodes = maze.graph.node_count(),
        edges = maze.graph.edge_count(),
        "dumping maze graph"
    );

    match context.format {
        OutputFormat::Text => render_dump_text(&maze.graph),
        OutputFormat::Json => render_dump_json(&maze.graph)?,
    }
    Ok(())
}
