//! Development tasks for the tactical AI workspace
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod utils;

use anyhow::Result;
use clap::Parser;
use commands::{Area, Decide, Reach};
use tracing_subscriber::EnvFilter;

/// Development tasks for the tactical AI workspace
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Inspect battles, movement and AI decisions", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Show the cells a unit can reach this turn
    Reach(Reach),

    /// Show the cells a skill would affect
    Area(Area),

    /// Run one decision cycle for the AI units of a battle
    Decide(Decide),
}

fn main() -> Result<()> {
    // Library crates only emit events; RUST_LOG=debug shows the scoring trail.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Reach(cmd) => cmd.execute(),
        Command::Area(cmd) => cmd.execute(),
        Command::Decide(cmd) => cmd.execute(),
    }
}
