use std::path::Path;

use anyhow::Result;
use tracing::info;

use stackwright::application::GenerateOptions;
use stackwright::domain::entities::StackConfig;
use stackwright::error::StackwrightError;
use stackwright::infrastructure::fs::{LocalFs, OverlayFs, TargetLock};
use stackwright::presentation::output::render_create;
use stackwright::presentation::StackArgs;

use super::{target, Context};

pub struct CreateArgs<'a> {
    pub dir: &'a Path,
    pub stack: &'a StackArgs,
    pub no_auto_fix: bool,
    pub yes: bool,
    pub dry_run: bool,
}

pub fn run(ctx: &Context, args: CreateArgs<'_>) -> Result<()> {
    let target_dir = ctx.absolute(args.dir);
    let initial = args
        .stack
        .apply(ctx.config.defaults.apply(StackConfig::default()));

    // Incompatible input fails here, before anything touches the target.
    let resolution = ctx
        .services
        .resolve(&initial, args.no_auto_fix, &args.stack.pinned())
        .map_err(StackwrightError::from)?;
    for fired in &resolution.fired {
        info!(rule = fired.rule_id, "{}", fired.explanation);
    }

    let options = GenerateOptions::new(&target_dir);
    let local = LocalFs::new();

    let generated = if args.dry_run {
        let overlay = OverlayFs::new(&local);
        ctx.services
            .generate_use_case(&overlay)
            .execute(&resolution.final_config, &options)
    } else {
        target::ensure_writable(&target_dir, args.yes)?;
        let _lock = TargetLock::acquire(&target_dir).map_err(StackwrightError::from)?;
        ctx.services
            .generate_use_case(&local)
            .execute(&resolution.final_config, &options)
    };
    let project = generated.map_err(StackwrightError::from)?;

    ctx.print(&render_create(
        ctx.format,
        &initial,
        &resolution,
        &project,
        args.dry_run,
    ));
    Ok(())
}
