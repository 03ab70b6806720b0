//! Configuration type definitions

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::domain::entities::StackConfig;
use crate::domain::services::MAX_PASSES;
use crate::domain::value_objects::{
    Addon, Api, Auth, Backend, Database, DbSetup, Example, Frontend, Orm, PackageManager, Runtime,
    ServerDeploy, WebDeploy,
};

use super::loader::{self, ConfigError, ConfigWarning};

/// Default answers for `create`.
///
/// Every field is optional; unset fields keep the built-in default stack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackDefaults {
    pub frontend: Option<BTreeSet<Frontend>>,
    pub backend: Option<Backend>,
    pub runtime: Option<Runtime>,
    pub database: Option<Database>,
    pub orm: Option<Orm>,
    pub auth: Option<Auth>,
    pub api: Option<Api>,
    pub db_setup: Option<DbSetup>,
    pub addons: Option<BTreeSet<Addon>>,
    pub examples: Option<BTreeSet<Example>>,
    pub web_deploy: Option<WebDeploy>,
    pub server_deploy: Option<ServerDeploy>,
    pub package_manager: Option<PackageManager>,
    pub git: Option<bool>,
    pub install: Option<bool>,
}

impl StackDefaults {
    /// `base` with every configured default applied
    pub fn apply(&self, base: StackConfig) -> StackConfig {
        let mut config = base;
        if let Some(frontend) = &self.frontend {
            config.frontend = frontend.clone();
        }
        if let Some(addons) = &self.addons {
            config.addons = addons.clone();
        }
        if let Some(examples) = &self.examples {
            config.examples = examples.clone();
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
        config.git = self.git.unwrap_or(config.git);
        config.install = self.install.unwrap_or(config.install);
        config
    }
}

/// Resolver configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Safety bound on fixed-point passes
    pub max_passes: usize,

    /// Apply compatibility corrections instead of rejecting the input
    pub auto_fix: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_passes: MAX_PASSES,
            auto_fix: true,
        }
    }
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Most detailed log level shown at this verbosity
    pub fn level(&self) -> Level {
        match self {
            Verbosity::Quiet => Level::ERROR,
            Verbosity::Normal => Level::WARN,
            Verbosity::Verbose => Level::INFO,
            Verbosity::Debug => Level::DEBUG,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub verbosity: Verbosity,

    /// Machine-readable output on stdout
    pub json: bool,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub defaults: StackDefaults,
    pub resolver: ResolverConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Load a single TOML file, ignoring unknown keys
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load every configuration layer for `cwd`
    pub fn load_layered(cwd: &Path) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_layered(cwd)
    }
}
