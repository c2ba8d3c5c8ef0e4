//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tides of Remembrance - a narrated text adventure in a drowned kingdom
#[derive(Parser, Debug)]
#[command(name = "tides")]
#[command(about = "A narrated text adventure in a drowned kingdom", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Read configuration from this file instead of the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the game over HTTP (POST /api/play)
    Serve {
        /// Socket address to bind, overriding the configured one
        #[arg(long)]
        bind: Option<String>,
    },

    /// Play in the terminal
    Play {
        /// Accept narrator replies that break the story format
        #[arg(long)]
        lenient: bool,
    },
}
