use anyhow::Result;

use stackwright::domain::catalog::catalog;
use stackwright::presentation::output::render_catalog;

use super::Context;

pub fn run(ctx: &Context) -> Result<()> {
    ctx.print(&render_catalog(ctx.format, &catalog()));
    Ok(())
}
