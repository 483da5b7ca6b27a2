//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use solvemaze_lib::{parse_maze, MazeGraph, NumberMode};

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Build a graph from inline directive lines, asserting none are malformed.
#[allow(dead_code)]
pub fn graph_from(lines: &[&str]) -> MazeGraph {
    let maze = parse_maze(lines, NumberMode::Strict);
    assert!(
        maze.report.is_clean(),
        "unexpected diagnostics: {:?}",
        maze.report.diagnostics
    );
    maze.graph
}
