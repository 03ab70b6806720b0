//! Generate Options

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

/// Options for a generation run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory the project is written into
    pub project_dir: PathBuf,
    /// Project name used by templates
    pub project_name: String,
    /// Tool version recorded in the persisted state
    pub tool_version: String,
    pub created_at: DateTime<Utc>,
}

impl GenerateOptions {
    /// Options for `project_dir`, named after its last path component
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        let project_dir = project_dir.into();
        let project_name = project_name_for(&project_dir);
        Self {
            project_dir,
            project_name,
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = name.into();
        self
    }

    pub fn with_tool_version(mut self, version: impl Into<String>) -> Self {
        self.tool_version = version.into();
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

/// Package-name-safe project name derived from a directory
pub fn project_name_for(dir: &Path) -> String {
    let raw = dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let name: String = raw
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '-' })
        .collect();
    let name = name.trim_matches('-');
    if name.is_empty() {
        "my-app".to_string()
    } else {
        name.to_string()
    }
}
