//! ProjectState entity - the persisted description of a generated project
//!
//! Pure data; reading and writing the on-disk manifest is handled by the
//! `StateRepository` port.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::stack_config::StackConfig;

/// File name of the persisted state manifest, relative to the project root
pub const STATE_FILE_NAME: &str = "stackwright.jsonc";

/// Stack configuration plus provenance of the generation that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectState {
    /// Tool version that last wrote this state
    pub version: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub config: StackConfig,
}

impl ProjectState {
    pub fn new(config: StackConfig, version: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            version: version.into(),
            created_at,
            config,
        }
    }

    /// Same project, new configuration. Keeps the original creation time.
    #[must_use]
    pub fn updated(&self, config: StackConfig, version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            created_at: self.created_at,
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap()
    }

    #[test]
    fn serializes_config_fields_at_top_level() {
        let state = ProjectState::new(StackConfig::default(), "0.4.0", fixed_time());
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["version"], "0.4.0");
        assert_eq!(json["createdAt"], "2026-01-02T03:04:05Z");
        assert_eq!(json["backend"], "hono");
        assert!(json.get("config").is_none());
    }

    #[test]
    fn updated_keeps_created_at() {
        let state = ProjectState::new(StackConfig::default(), "0.3.0", fixed_time());
        let next = state.updated(StackConfig::default(), "0.4.0");

        assert_eq!(next.created_at, state.created_at);
        assert_eq!(next.version, "0.4.0");
    }
}
