//! Solve command handler for finding a path to the exit.

use anyhow::{Context, Result};
use clap::Args;

use solvemaze_cli::output::{render_json, render_solution_text, OutputFormat};
use solvemaze_lib::{
    require_solution, CyclePolicy, NodeId, SolveOptions, DEFAULT_MAX_DEPTH, START_NODE,
};

use super::CommandContext;

/// Arguments for the solve command.
#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    /// Node to start the search from.
    #[arg(long, default_value_t = START_NODE)]
    pub start: NodeId,
    /// Maximum number of steps a path may contain before the search gives up.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,
    /// Follow choices that lead back onto the current path instead of
    /// skipping them.
    #[arg(long)]
    pub follow_cycles: bool,
}

impl Default for SolveArgs {
    fn default() -> Self {
        Self {
            start: START_NODE,
            max_depth: DEFAULT_MAX_DEPTH,
            follow_cycles: false,
        }
    }
}

impl SolveArgs {
    /// Convert CLI args to library search options.
    pub fn to_options(&self) -> SolveOptions {
        SolveOptions {
            start: self.start,
            max_depth: self.max_depth,
            cycles: if self.follow_cycles {
                CyclePolicy::Follow
            } else {
                CyclePolicy::Prune
            },
        }
    }
}

/// Handle the solve subcommand.
///
/// Loads the maze, searches from the start node and prints the first path
/// found. A maze without a path to the exit is reported as an error.
pub fn handle_solve_command(context: &CommandContext, args: &SolveArgs) -> Result<()> {
    let maze = context.load()?;
    let options = args.to_options();

    let solution = require_solution(&maze.graph, &options)
        .with_context(|| format!("failed to solve maze {}", context.maze_path.display()))?;

    match context.format {
        OutputFormat::Text => render_solution_text(&solution),
        OutputFormat::Json => render_json(&solution)?,
    }
    Ok(())
}
