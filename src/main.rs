//! Stackwright CLI - resolve a full-stack TypeScript stack and scaffold it
//!
//! Usage: stackwright <COMMAND>
//!
//! Commands:
//!   create   Resolve a configuration and generate a new project
//!   resolve  Print the resolved configuration without generating
//!   add      Add addons or deployment targets to an existing project
//!   catalog  List every option category and its legal values

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, warn};

use stackwright::application::AddRequest;
use stackwright::config::Config;
use stackwright::error::StackwrightError;
use stackwright::logging::{self, LoggingConfig};
use stackwright::presentation::{Cli, Commands, OutputFormat, Services};

mod commands;

use commands::create::CreateArgs;
use commands::Context;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            commands::error::print_error(&err, cli.json);
            ExitCode::from(commands::error::exit_code(&err))
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let (config, warnings) = Config::load_layered(&cwd).map_err(StackwrightError::from)?;

    logging::init(&LoggingConfig::resolve(cli.verbose, config.output.verbosity));
    for warning in &warnings {
        warn!("{warning}");
    }
    debug!(?config, "configuration loaded");

    let format = OutputFormat::from_flag(cli.json || config.output.json);
    let services = Services::from_config(&config).map_err(StackwrightError::from)?;
    let ctx = Context {
        cwd,
        config,
        format,
        services,
    };

    match &cli.command {
        Commands::Create {
            dir,
            stack,
            no_auto_fix,
            yes,
            dry_run,
        } => commands::create::run(
            &ctx,
            CreateArgs {
                dir,
                stack,
                no_auto_fix: *no_auto_fix,
                yes: *yes,
                dry_run: *dry_run,
            },
        ),
        Commands::Resolve { stack, no_auto_fix } => {
            commands::resolve::run(&ctx, stack, *no_auto_fix)
        }
        Commands::Add {
            addons,
            web_deploy,
            server_deploy,
            dir,
            dry_run,
        } => {
            let request = AddRequest {
                addons: addons.clone(),
                web_deploy: *web_deploy,
                server_deploy: *server_deploy,
            };
            commands::add::run(&ctx, dir, &request, *dry_run)
        }
        Commands::Catalog => commands::catalog::run(&ctx),
    }
}
