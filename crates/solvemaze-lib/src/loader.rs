use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Error, LineError, Result};
use crate::graph::MazeGraph;
use crate::parser::{parse_line_with, LineResult, NumberMode, SkipReason};

/// A malformed line that was skipped during loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number within the source.
    pub line_number: usize,
    pub line: String,
    pub error: LineError,
}

/// Tally of what a load pass did with each line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub lines: usize,
    pub edges: usize,
    pub dead_ends: usize,
    /// Blank and comment lines.
    pub skipped: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Graph built from a maze description together with its load report.
#[derive(Debug, Clone, Default)]
pub struct LoadedMaze {
    pub graph: MazeGraph,
    pub report: LoadReport,
}

/// Build a maze graph from an in-memory sequence of lines.
///
/// Malformed lines are logged and recorded in the report; they never stop the
/// pass.
pub fn parse_maze<I, S>(lines: I, mode: NumberMode) -> LoadedMaze
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = MazeBuilder::new(mode);
    for line in lines {
        builder.push_line(line.as_ref());
    }
    builder.finish()
}

/// Build a maze graph from a buffered reader, one directive per line.
pub fn read_maze<R: BufRead>(reader: R, mode: NumberMode) -> Result<LoadedMaze> {
    let mut builder = MazeBuilder::new(mode);
    for line in reader.lines() {
        builder.push_line(&line?);
    }
    Ok(builder.finish())
}

/// Load a maze description file from disk.
pub fn load_maze(path: &Path, mode: NumberMode) -> Result<LoadedMaze> {
    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => Error::MazeFileNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(err),
    })?;
    debug!(path = %path.display(), ?mode, "loading maze");

    let maze = read_maze(BufReader::new(file), mode)?;
    debug!(
        nodes = maze.graph.node_count(),
        edges = maze.report.edges,
        dead_ends = maze.report.dead_ends,
        diagnostics = maze.report.diagnostics.len(),
        "maze loaded"
    );
    Ok(maze)
}

struct MazeBuilder {
    mode: NumberMode,
    maze: LoadedMaze,
}

impl MazeBuilder {
    fn new(mode: NumberMode) -> Self {
        Self {
            mode,
            maze: LoadedMaze::default(),
        }
    }

    fn push_line(&mut self, line: &str) {
        let report = &mut self.maze.report;
        report.lines += 1;

        match parse_line_with(line, self.mode) {
            LineResult::Edge(edge) => {
                self.maze
                    .graph
                    .add_edge(edge.source, edge.direction, edge.target);
                report.edges += 1;
            }
            LineResult::Skip(SkipReason::DeadEnd { .. }) => report.dead_ends += 1,
            LineResult::Skip(_) => report.skipped += 1,
            LineResult::Malformed(error) => {
                warn!(line_number = report.lines, line, %error, "invalid line");
                report.diagnostics.push(Diagnostic {
                    line_number: report.lines,
                    line: line.trim().to_string(),
                    error,
                });
            }
        }
    }

    fn finish(self) -> LoadedMaze {
        self.maze
    }
}
