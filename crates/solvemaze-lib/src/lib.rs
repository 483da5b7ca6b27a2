//! solvemaze library entry points.
//!
//! This crate turns a line-oriented description of a maze's decision points
//! into a directed graph and finds a route from node 1 to the exit by
//! depth-first search. Higher-level consumers (the CLI) should only depend on
//! the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod config;
pub mod error;
pub mod graph;
pub mod loader;
pub mod parser;
pub mod solver;

pub use config::{resolve_maze_path, DEFAULT_MAZE_FILE, MAZE_FILE_ENV};
pub use error::{Error, LineError, Result};
pub use graph::{Edge, MazeGraph, NodeId, Target, START_NODE};
pub use loader::{load_maze, parse_maze, read_maze, Diagnostic, LoadReport, LoadedMaze};
pub use parser::{parse_line, parse_line_with, LineResult, NumberMode, ParsedEdge, SkipReason};
pub use solver::{
    require_solution, solve, solve_path, CyclePolicy, Solution, SolveOptions, Step,
    DEFAULT_MAX_DEPTH,
};
