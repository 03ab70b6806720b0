use anyhow::Result;
use tracing::info;

use stackwright::domain::entities::StackConfig;
use stackwright::error::StackwrightError;
use stackwright::presentation::output::render_resolution;
use stackwright::presentation::StackArgs;

use super::Context;

/// Print the resolved configuration; nothing is written
pub fn run(ctx: &Context, stack: &StackArgs, no_auto_fix: bool) -> Result<()> {
    let initial = stack.apply(ctx.config.defaults.apply(StackConfig::default()));
    let result = ctx
        .services
        .resolve(&initial, no_auto_fix, &stack.pinned())
        .map_err(StackwrightError::from)?;
    info!(fired = result.fired.len(), passes = result.passes, "resolved");

    ctx.print(&render_resolution(ctx.format, &initial, &result));
    Ok(())
}
