use std::path::Path;

use anyhow::Result;

use stackwright::application::AddRequest;
use stackwright::error::StackwrightError;
use stackwright::infrastructure::fs::{LocalFs, OverlayFs, TargetLock};
use stackwright::presentation::output::render_add;

use super::Context;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run(ctx: &Context, dir: &Path, request: &AddRequest, dry_run: bool) -> Result<()> {
    let project_dir = ctx.absolute(dir);
    let local = LocalFs::new();

    let added = if dry_run {
        let overlay = OverlayFs::new(&local);
        ctx.services
            .add_use_case(&overlay)
            .execute(&project_dir, request, VERSION)
    } else {
        let _lock = TargetLock::acquire(&project_dir).map_err(StackwrightError::from)?;
        ctx.services
            .add_use_case(&local)
            .execute(&project_dir, request, VERSION)
    };
    let result = added.map_err(StackwrightError::from)?;

    ctx.print(&render_add(ctx.format, &result, dry_run));
    Ok(())
}
