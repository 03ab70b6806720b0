//! Configuration module for Stackwright
//!
//! Configuration hierarchy, highest priority first:
//! 1. CLI flags
//! 2. Environment variables (STACKWRIGHT_*)
//! 3. Project config (`.stackwright.toml` in the working directory)
//! 4. User config (`~/.config/stackwright/config.toml`)
//! 5. Built-in defaults

mod loader;
mod types;

pub use loader::{
    apply_env_overrides, load_layered, load_with_warnings, user_config_path, ConfigError,
    ConfigWarning, ENV_AUTO_FIX, ENV_MAX_PASSES, ENV_PACKAGE_MANAGER, ENV_VERBOSITY,
    PROJECT_CONFIG,
};
pub use types::{Config, OutputConfig, ResolverConfig, StackDefaults, Verbosity};
