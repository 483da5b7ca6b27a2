//! solvemaze CLI library.
//!
//! This crate provides the output formatting used by the `solvemaze` binary.

pub mod output;
