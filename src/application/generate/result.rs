//! Generation results and errors

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::ports::{FsError, StateError};
use crate::domain::value_objects::Workspace;
use crate::infrastructure::project::{
    ConfigPatchError, ManifestError, PatchReport, TemplateError,
};
use crate::modules::Category;

/// A contribution dropped because its workspace does not exist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedContribution {
    pub module: &'static str,
    pub workspace: Workspace,
    pub item: String,
}

/// Result of a generation run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedProject {
    pub project_dir: PathBuf,
    /// Module ids in execution order
    pub modules_run: Vec<&'static str>,
    /// Files written, relative to the project directory, sorted
    pub files_written: Vec<PathBuf>,
    pub skipped: Vec<SkippedContribution>,
    pub patches: Vec<PatchReport>,
    /// `sha256:` digest over every written file
    pub fingerprint: String,
}

impl GeneratedProject {
    pub fn has_skips(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// Where a generation run was when it failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Module {
        id: &'static str,
        category: Category,
    },
    /// Env files and persisted state
    Bookkeeping,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Module { id, category } => write!(f, "module `{id}` ({category})"),
            Stage::Bookkeeping => f.write_str("bookkeeping"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationErrorKind {
    #[error(transparent)]
    Fs(#[from] FsError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Patch(#[from] ConfigPatchError),

    #[error(transparent)]
    State(#[from] StateError),
}

/// A failure partway through generation.
///
/// Files written by earlier modules stay on disk.
#[derive(Debug, thiserror::Error)]
#[error("generation failed in {stage}: {kind}")]
pub struct GenerationError {
    pub stage: Stage,
    #[source]
    pub kind: GenerationErrorKind,
}

impl GenerationError {
    pub fn new(stage: Stage, kind: impl Into<GenerationErrorKind>) -> Self {
        Self {
            stage,
            kind: kind.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn error_names_module_and_category() {
        let err = GenerationError::new(
            Stage::Module {
                id: "orm-drizzle",
                category: Category::Database,
            },
            FsError::PermissionDenied(Path::new("apps/server/drizzle.config.ts").to_path_buf()),
        );
        let msg = err.to_string();
        assert!(msg.contains("module `orm-drizzle` (database)"));
        assert!(msg.contains("permission denied"));
    }
}
