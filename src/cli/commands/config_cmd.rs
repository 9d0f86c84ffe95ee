//! config command - Show the effective configuration

use anyhow::Result;

use super::load_config;
use crate::cli::Context;
use crate::ui::output;

/// Print effective configuration values and where they came from.
pub fn config(ctx: &Context) -> Result<()> {
    let config = load_config(ctx)?;

    match config.loaded_from() {
        Some(path) => output::print(format!("# loaded from {}", path.display()), ctx.verbosity),
        None => output::print("# no config file found, using defaults", ctx.verbosity),
    }

    let lines = [
        format!("confirm_err_actions = {}", config.confirm_err_actions()),
        format!(
            "allow_comments_with_issue_tracker = {}",
            config.allow_comments_with_issue_tracker()
        ),
        format!("use_gravatar = {}", config.use_gravatar()),
        format!("gravatar_default = \"{}\"", config.gravatar_default()),
    ];
    output::payload(lines.join("\n"));
    Ok(())
}
