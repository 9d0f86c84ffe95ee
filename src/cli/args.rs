//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Load configuration from this file only
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// errview - Resolve and render problem detail presentation
#[derive(Parser, Debug)]
#[command(name = "errview")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Load configuration from this file instead of the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a snapshot and render the problem detail fragments
    Show {
        /// Snapshot file (TOML) describing app, problem, and user
        #[arg(long, short)]
        snapshot: PathBuf,

        /// HTTP referer to use instead of the one in the snapshot
        #[arg(long)]
        referer: Option<String>,

        /// Print the resolved presentation as JSON instead of HTML
        #[arg(long)]
        json: bool,
    },

    /// List registered issue tracker types
    Trackers,

    /// Show the effective configuration
    Config,
}
