//! Configuration loading and layering

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::types::{Config, Verbosity};
use crate::domain::value_objects::PackageManager;
use crate::infrastructure::fs::user_config_dir;

/// Project-level configuration file, looked up in the working directory
pub const PROJECT_CONFIG: &str = ".stackwright.toml";

pub const ENV_PACKAGE_MANAGER: &str = "STACKWRIGHT_PACKAGE_MANAGER";
pub const ENV_MAX_PASSES: &str = "STACKWRIGHT_MAX_PASSES";
pub const ENV_AUTO_FIX: &str = "STACKWRIGHT_AUTO_FIX";
pub const ENV_VERBOSITY: &str = "STACKWRIGHT_VERBOSITY";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    UnknownKey {
        key: String,
        file: PathBuf,
        line: Option<usize>,
        suggestion: Option<String>,
    },
    InvalidEnv {
        var: &'static str,
        value: String,
        expected: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::UnknownKey {
                key,
                file,
                line,
                suggestion,
            } => {
                write!(f, "unknown config key `{key}` in {}", file.display())?;
                if let Some(line) = line {
                    write!(f, ":{line}")?;
                }
                if let Some(suggestion) = suggestion {
                    write!(f, " (did you mean `{suggestion}`?)")?;
                }
                Ok(())
            }
            ConfigWarning::InvalidEnv {
                var,
                value,
                expected,
            } => write!(f, "ignoring {var}='{value}' (expected {expected})"),
        }
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = read(path)?;
    parse_with_warnings(&content, path)
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub(super) fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning::UnknownKey {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Built-in defaults < user config < project config < `STACKWRIGHT_*` env
pub fn load_layered(cwd: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let layers: Vec<PathBuf> = user_config_path()
        .into_iter()
        .chain(std::iter::once(cwd.join(PROJECT_CONFIG)))
        .filter(|p| p.is_file())
        .collect();

    let (config, mut warnings) = merge_layers(&layers)?;
    let config = apply_env_overrides(config, |var| std::env::var(var).ok(), &mut warnings);
    Ok((config, warnings))
}

/// Deep-merge the TOML tables of `layers`, later files winning key by key
pub(super) fn merge_layers(layers: &[PathBuf]) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let mut merged = toml::Table::new();
    let mut warnings = Vec::new();
    let mut last = None;

    for path in layers {
        let content = read(path)?;
        let (_, layer_warnings) = parse_with_warnings(&content, path)?;
        warnings.extend(layer_warnings);

        let table: toml::Table = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        merge_table(&mut merged, table);
        last = Some(path);
    }

    let Some(last) = last else {
        return Ok((Config::default(), warnings));
    };
    let config = toml::Value::Table(merged)
        .try_into::<Config>()
        .map_err(|source| ConfigError::Parse {
            path: last.clone(),
            source,
        })?;
    Ok((config, warnings))
}

fn merge_table(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge_table(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

/// Apply environment variable overrides (STACKWRIGHT_* prefix)
pub fn apply_env_overrides(
    mut config: Config,
    var: impl Fn(&str) -> Option<String>,
    warnings: &mut Vec<ConfigWarning>,
) -> Config {
    let mut invalid = |name: &'static str, value: String, expected: &str| {
        warnings.push(ConfigWarning::InvalidEnv {
            var: name,
            value,
            expected: expected.to_string(),
        });
    };

    if let Some(value) = var(ENV_PACKAGE_MANAGER) {
        match PackageManager::from_str(value.trim()) {
            Ok(pm) => config.defaults.package_manager = Some(pm),
            Err(e) => invalid(ENV_PACKAGE_MANAGER, value, &e.expected),
        }
    }

    if let Some(value) = var(ENV_MAX_PASSES) {
        match value.trim().parse::<usize>() {
            Ok(n) if n > 0 => config.resolver.max_passes = n,
            _ => invalid(ENV_MAX_PASSES, value, "a positive integer"),
        }
    }

    if let Some(value) = var(ENV_AUTO_FIX) {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => config.resolver.auto_fix = true,
            "0" | "false" | "no" => config.resolver.auto_fix = false,
            _ => invalid(ENV_AUTO_FIX, value, "true or false"),
        }
    }

    if let Some(value) = var(ENV_VERBOSITY) {
        config.output.verbosity = match value.trim().to_ascii_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "normal" => Verbosity::Normal,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => {
                invalid(ENV_VERBOSITY, value, "quiet, normal, verbose or debug");
                config.output.verbosity
            }
        };
    }

    config
}

/// User-level `config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    user_config_dir().map(|dir| dir.join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "defaults",
        "frontend",
        "backend",
        "runtime",
        "database",
        "orm",
        "auth",
        "api",
        "db_setup",
        "addons",
        "examples",
        "web_deploy",
        "server_deploy",
        "package_manager",
        "git",
        "install",
        "resolver",
        "max_passes",
        "auto_fix",
        "output",
        "verbosity",
        "json",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let b_bytes = b.as_bytes();
    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a.as_bytes().iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_bytes.len()]
}
