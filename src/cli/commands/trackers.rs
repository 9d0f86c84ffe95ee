//! trackers command - List registered issue tracker types

use anyhow::Result;

use crate::cli::Context;
use crate::tracker::TrackerRegistry;
use crate::ui::output;

/// Print the registered tracker type tags, one per line.
pub fn trackers(ctx: &Context) -> Result<()> {
    let registry = TrackerRegistry::with_builtins();
    let types: Vec<&str> = registry.types().collect();

    output::print("Registered issue trackers:", ctx.verbosity);
    output::payload(output::format_list(&types, "  "));
    Ok(())
}
