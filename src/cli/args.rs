//! CLI argument definitions using clap
//!
//! Commands:
//! - quizdb serve [--host <host>] [--port <port>] [--in-memory]
//! - quizdb check

use clap::{Parser, Subcommand};

/// quizdb - REST service for quiz questions and categories
#[derive(Parser, Debug)]
#[command(name = "quizdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Connect to the document store and serve the HTTP API
    Serve {
        /// Host to bind to (overrides QUIZDB_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides QUIZDB_PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Use a process-local store instead of MongoDB
        #[arg(long)]
        in_memory: bool,
    },

    /// Load configuration, ping the document store, and exit
    Check,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
