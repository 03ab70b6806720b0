//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose) are inherited by all subcommands
//! - Stack flags are shared by `create` and `resolve`; every flag given on the
//!   command line pins its field when auto-fix is disabled

use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::entities::StackConfig;
use crate::domain::value_objects::{
    Addon, Api, Auth, Backend, Database, DbSetup, Example, Field, Frontend, Orm, PackageManager,
    Runtime, ServerDeploy, WebDeploy,
};

/// Stackwright - resolve a full-stack TypeScript configuration and scaffold it
#[derive(Parser, Debug)]
#[command(name = "stackwright")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Machine-readable JSON on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a configuration and generate a new project
    Create {
        /// Target directory (created if missing)
        #[arg(default_value = ".")]
        dir: PathBuf,

        #[command(flatten)]
        stack: StackArgs,

        /// Reject incompatible flags instead of correcting them
        #[arg(long)]
        no_auto_fix: bool,

        /// Write into a non-empty directory without asking
        #[arg(short, long)]
        yes: bool,

        /// Show what would be written without touching the disk
        #[arg(long)]
        dry_run: bool,
    },

    /// Resolve a configuration and print the result without generating
    Resolve {
        #[command(flatten)]
        stack: StackArgs,

        /// Reject incompatible flags instead of correcting them
        #[arg(long)]
        no_auto_fix: bool,
    },

    /// Add addons or deployment targets to an existing project
    Add {
        /// Addons to add (comma-separated)
        #[arg(long, value_delimiter = ',')]
        addons: Vec<Addon>,

        #[arg(long, value_enum)]
        web_deploy: Option<WebDeploy>,

        #[arg(long, value_enum)]
        server_deploy: Option<ServerDeploy>,

        /// Project directory
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Show what would be written without touching the disk
        #[arg(long)]
        dry_run: bool,
    },

    /// List every option category and its legal values
    Catalog,
}

/// Flags describing a stack; unset flags fall back to configured defaults
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct StackArgs {
    /// Frontends (comma-separated; empty for none)
    #[arg(long, value_delimiter = ',', num_args = 0..)]
    pub frontend: Option<Vec<Frontend>>,

    #[arg(long, value_enum)]
    pub backend: Option<Backend>,

    #[arg(long, value_enum)]
    pub runtime: Option<Runtime>,

    #[arg(long, value_enum)]
    pub database: Option<Database>,

    #[arg(long, value_enum)]
    pub orm: Option<Orm>,

    #[arg(long, value_enum)]
    pub auth: Option<Auth>,

    #[arg(long, value_enum)]
    pub api: Option<Api>,

    #[arg(long, value_enum)]
    pub db_setup: Option<DbSetup>,

    /// Addons (comma-separated; empty for none)
    #[arg(long, value_delimiter = ',', num_args = 0..)]
    pub addons: Option<Vec<Addon>>,

    /// Examples (comma-separated; empty for none)
    #[arg(long, value_delimiter = ',', num_args = 0..)]
    pub examples: Option<Vec<Example>>,

    #[arg(long, value_enum)]
    pub web_deploy: Option<WebDeploy>,

    #[arg(long, value_enum)]
    pub server_deploy: Option<ServerDeploy>,

    #[arg(long, value_enum)]
    pub package_manager: Option<PackageManager>,

    /// Skip `git init`
    #[arg(long)]
    pub no_git: bool,

    /// Skip installing dependencies
    #[arg(long)]
    pub no_install: bool,
}

fn set<T: Ord + Copy>(values: &[T]) -> BTreeSet<T> {
    values.iter().copied().collect()
}

impl StackArgs {
    /// `base` with every given flag applied
    pub fn apply(&self, base: StackConfig) -> StackConfig {
        let mut config = base;
        if let Some(frontend) = &self.frontend {
            config.frontend = set(frontend);
        }
        if let Some(addons) = &self.addons {
            config.addons = set(addons);
        }
        if let Some(examples) = &self.examples {
            config.examples = set(examples);
        }
        config.backend = self.backend.unwrap_or(config.backend);
        config.runtime = self.runtime.unwrap_or(config.runtime);
        config.database = self.database.unwrap_or(config.database);
        config.orm = self.orm.unwrap_or(config.orm);
        config.auth = self.auth.unwrap_or(config.auth);
        config.api = self.api.unwrap_or(config.api);
        config.db_setup = self.db_setup.unwrap_or(config.db_setup);
        config.web_deploy = self.web_deploy.unwrap_or(config.web_deploy);
        config.server_deploy = self.server_deploy.unwrap_or(config.server_deploy);
        config.package_manager = self.package_manager.unwrap_or(config.package_manager);
        if self.no_git {
            config.git = false;
        }
        if self.no_install {
            config.install = false;
        }
        config
    }

    /// Fields given explicitly on the command line
    pub fn pinned(&self) -> BTreeSet<Field> {
        [
            (Field::Frontend, self.frontend.is_some()),
            (Field::Backend, self.backend.is_some()),
            (Field::Runtime, self.runtime.is_some()),
            (Field::Database, self.database.is_some()),
            (Field::Orm, self.orm.is_some()),
            (Field::Auth, self.auth.is_some()),
            (Field::Api, self.api.is_some()),
            (Field::DbSetup, self.db_setup.is_some()),
            (Field::Addons, self.addons.is_some()),
            (Field::Examples, self.examples.is_some()),
            (Field::WebDeploy, self.web_deploy.is_some()),
            (Field::ServerDeploy, self.server_deploy.is_some()),
            (Field::PackageManager, self.package_manager.is_some()),
            (Field::Git, self.no_git),
            (Field::Install, self.no_install),
        ]
        .into_iter()
        .filter_map(|(field, given)| given.then_some(field))
        .collect()
    }
}
