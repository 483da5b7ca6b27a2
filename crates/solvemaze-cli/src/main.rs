mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use solvemaze_cli::output::OutputFormat;
use solvemaze_lib::{resolve_maze_path, NumberMode};

use commands::dump::handle_dump_command;
use commands::solve::{handle_solve_command, SolveArgs};
use commands::CommandContext;

#[derive(Parser, Debug)]
#[command(author, version, about = "Solve a maze described by its decision points")]
struct Cli {
    /// Maze description file. Defaults to $SOLVEMAZE_FILE, then
    /// maze20240526.txt in the current directory.
    #[arg(long, global = true)]
    maze: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Read unparseable node numbers as 0 instead of rejecting the line.
    #[arg(long, global = true)]
    lenient: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the first path from the start node to the exit (default).
    Solve(SolveArgs),
    /// Print every node and its outgoing choices.
    Dump,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let context = CommandContext {
        maze_path: resolve_maze_path(cli.maze.as_deref()),
        format: cli.format,
        number_mode: if cli.lenient {
            NumberMode::Lenient
        } else {
            NumberMode::Strict
        },
    };

    match cli
        .command
        .unwrap_or_else(|| Command::Solve(SolveArgs::default()))
    {
        Command::Solve(args) => handle_solve_command(&context, &args),
        Command::Dump => handle_dump_command(&context),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
