//! cli
//!
//! Command-line interface layer for errview.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Install logging
//! - Load configuration and delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. Policy decisions live in [`crate::policy`] and
//! rendering in [`crate::ui`]; handlers only wire inputs to them.

pub mod args;
pub mod commands;

pub use args::{Cli, Command};

use std::path::PathBuf;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::ui::output::Verbosity;

/// Per-invocation settings derived from global flags.
#[derive(Debug, Clone)]
pub struct Context {
    /// Explicit config file, bypassing the default search
    pub config_path: Option<PathBuf>,
    pub verbosity: Verbosity,
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = Context {
        config_path: cli.config.clone(),
        verbosity: Verbosity::from_flags(cli.quiet, cli.debug),
    };

    init_logging(ctx.verbosity);

    commands::dispatch(cli.command, &ctx)
}

/// Install a stderr `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows the verbosity flags.
fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
