//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Loads configuration and any input files
//! 2. Calls the policy resolver or registry
//! 3. Formats and displays output

mod config_cmd;
mod show;
mod trackers;

pub use config_cmd::config;
pub use show::show;
pub use trackers::trackers;

use anyhow::{Context as _, Result};

use super::args::Command;
use super::Context;
use crate::core::config::Config;
use crate::ui::output;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Show {
            snapshot,
            referer,
            json,
        } => show(ctx, &snapshot, referer.as_deref(), json),
        Command::Trackers => trackers(ctx),
        Command::Config => config(ctx),
    }
}

/// Load configuration for a command, reporting load warnings.
pub(crate) fn load_config(ctx: &Context) -> Result<Config> {
    if let Some(path) = &ctx.config_path {
        return Config::load_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()));
    }

    let result = Config::load().context("Failed to load config")?;
    for warning in &result.warnings {
        output::warn(
            format!("{} ({})", warning.message, warning.path.display()),
            ctx.verbosity,
        );
    }
    Ok(result.config)
}
