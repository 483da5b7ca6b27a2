use std::env;
use std::path::{Path, PathBuf};

/// Maze description read when no other file is named.
pub const DEFAULT_MAZE_FILE: &str = "maze20240526.txt";

/// Environment variable that overrides the default maze file.
pub const MAZE_FILE_ENV: &str = "SOLVEMAZE_FILE";

/// Resolve which maze description file to read.
///
/// The resolution order is:
/// 1. Explicit `path` argument when provided.
/// 2. `SOLVEMAZE_FILE` environment variable.
/// 3. [`DEFAULT_MAZE_FILE`] in the current working directory.
pub fn resolve_maze_path(path: Option<&Path>) -> PathBuf {
    if let Some(explicit) = path {
        return explicit.to_path_buf();
    }

    match env::var_os(MAZE_FILE_ENV) {
        Some(env_path) if !env_path.is_empty() => PathBuf::from(env_path),
        _ => PathBuf::from(DEFAULT_MAZE_FILE),
    }
}
