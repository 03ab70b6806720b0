//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`; stdout is reserved for command
//! output (human or `--json`). Filtering comes from, in order:
//!
//! 1. `STACKWRIGHT_LOG` (an `EnvFilter` directive string)
//! 2. the `-v` count (`-v` debug, `-vv` trace)
//! 3. the configured verbosity
//!
//! `STACKWRIGHT_LOG_JSON=1` switches to one JSON object per event.

use std::sync::Once;

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Verbosity;

pub const LOG_ENV: &str = "STACKWRIGHT_LOG";
pub const LOG_JSON_ENV: &str = "STACKWRIGHT_LOG_JSON";

static INIT: Once = Once::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: Level,
    pub json: bool,
    /// Raw directive from the environment; overrides `level` when set
    pub directive: Option<String>,
}

impl LoggingConfig {
    /// Resolve the effective configuration from the CLI count, the configured
    /// verbosity and the environment.
    pub fn resolve(verbose: u8, verbosity: Verbosity) -> Self {
        Self::from_parts(
            verbose,
            verbosity,
            std::env::var(LOG_ENV).ok(),
            std::env::var(LOG_JSON_ENV).ok(),
        )
    }

    fn from_parts(
        verbose: u8,
        verbosity: Verbosity,
        directive: Option<String>,
        json: Option<String>,
    ) -> Self {
        let level = match verbose {
            0 => verbosity.level(),
            1 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            json: json.is_some_and(|v| is_truthy(&v)),
            directive: directive.filter(|d| !d.trim().is_empty()),
        }
    }

    fn filter(&self) -> EnvFilter {
        if let Some(directive) = &self.directive {
            if let Ok(filter) = EnvFilter::try_new(directive) {
                return filter;
            }
            eprintln!("warning: ignoring invalid {LOG_ENV} value '{directive}'");
        }
        EnvFilter::new(format!("stackwright={}", self.level))
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = config.filter();
        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false);

        let result = if config.json {
            tracing_subscriber::registry()
                .with(filter)
                .with(layer.json().with_target(true))
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(layer.without_time())
                .try_init()
        };
        if let Err(e) = result {
            eprintln!("warning: logging already initialized: {e}");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_flag_beats_configured_verbosity() {
        let config = LoggingConfig::from_parts(1, Verbosity::Quiet, None, None);
        assert_eq!(config.level, Level::DEBUG);

        let config = LoggingConfig::from_parts(3, Verbosity::Normal, None, None);
        assert_eq!(config.level, Level::TRACE);
    }

    #[test]
    fn configured_verbosity_applies_without_flag() {
        assert_eq!(
            LoggingConfig::from_parts(0, Verbosity::Quiet, None, None).level,
            Level::ERROR
        );
        assert_eq!(
            LoggingConfig::from_parts(0, Verbosity::Normal, None, None).level,
            Level::WARN
        );
    }

    #[test]
    fn json_env_accepts_common_truthy_values() {
        for value in ["1", "true", "YES", " on "] {
            assert!(
                LoggingConfig::from_parts(0, Verbosity::Normal, None, Some(value.into())).json,
                "{value}"
            );
        }
        assert!(!LoggingConfig::from_parts(0, Verbosity::Normal, None, Some("0".into())).json);
    }

    #[test]
    fn blank_directive_is_ignored() {
        let config = LoggingConfig::from_parts(0, Verbosity::Normal, Some("  ".into()), None);
        assert_eq!(config.directive, None);
    }
}
