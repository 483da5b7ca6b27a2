// Module exports for CLI subcommands
//
// Each module handles one subcommand. main.rs parses arguments, builds the
// shared context and dispatches to these handlers.

pub mod dump;
pub mod solve;

use std::path::PathBuf;

use anyhow::{Context, Result};

use solvemaze_cli::output::{render_diagnostics, OutputFormat};
use solvemaze_lib::{load_maze, LoadedMaze, NumberMode};

/// Settings shared by every subcommand.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub maze_path: PathBuf,
    pub format: OutputFormat,
    pub number_mode: NumberMode,
}

impl CommandContext {
    /// Load the maze file and report any skipped lines on stderr.
    pub fn load(&self) -> Result<LoadedMaze> {
        let maze = load_maze(&self.maze_path, self.number_mode).with_context(|| {
            format!("failed to load maze from {}", self.maze_path.display())
        })?;
        render_diagnostics(&maze.report.diagnostics);
        Ok(maze)
    }
}
