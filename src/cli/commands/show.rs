//! show command - Resolve a snapshot and render the detail fragments

use std::path::Path;

use anyhow::{Context as _, Result};

use super::load_config;
use crate::cli::Context;
use crate::core::snapshot::SnapshotFile;
use crate::policy::PresentationResolver;
use crate::tracker::TrackerRegistry;
use crate::ui::action_bar::action_bar;
use crate::ui::comments::comments_region;
use crate::ui::output;

/// Resolve `snapshot_path` and print the action bar and comments region,
/// or the resolved presentation as JSON.
pub fn show(
    ctx: &Context,
    snapshot_path: &Path,
    referer: Option<&str>,
    json: bool,
) -> Result<()> {
    let config = load_config(ctx)?;
    let snapshot = SnapshotFile::load(snapshot_path)
        .with_context(|| format!("Failed to load snapshot {}", snapshot_path.display()))?;

    let registry = TrackerRegistry::with_builtins();
    let render = snapshot.as_render(&config, referer);
    let presentation = PresentationResolver::new(&registry).resolve(&render);

    if json {
        let body = serde_json::to_string_pretty(&presentation)
            .context("Failed to serialize presentation")?;
        output::payload(body);
        return Ok(());
    }

    let bar = action_bar(&snapshot.app, &snapshot.problem, &presentation);
    let region = comments_region(
        &snapshot.app,
        &snapshot.problem,
        presentation.comment_visibility,
        &config,
    );

    output::heading("action_bar", ctx.verbosity);
    output::payload(bar.to_html());

    if !region.is_blank() {
        output::heading("comments", ctx.verbosity);
        output::payload(region.to_html().trim_end());
    }

    Ok(())
}
