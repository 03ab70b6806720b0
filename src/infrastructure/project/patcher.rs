//! Config patcher
//!
//! Applies `PatchOp`s to files through the FileSystem port. The file is only
//! rewritten when the operation changed something.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::ports::file_system::{FileSystem, FsError};
use crate::domain::services::{PatchError, PatchOp, PatchOutcome};

#[derive(Debug, thiserror::Error)]
pub enum ConfigPatchError {
    #[error("cannot patch {}: {source}", path.display())]
    Patch {
        path: PathBuf,
        #[source]
        source: PatchError,
    },

    #[error(transparent)]
    Fs(#[from] FsError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatchStatus {
    Applied,
    AlreadyApplied,
    /// Target file or anchor not found; nothing was written
    Skipped,
}

/// What happened to one patch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchReport {
    pub file: PathBuf,
    pub description: String,
    pub status: PatchStatus,
}

pub struct ConfigPatcher<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> ConfigPatcher<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    pub fn patch(&self, path: &Path, op: &PatchOp) -> Result<PatchReport, ConfigPatchError> {
        let report = |status| PatchReport {
            file: path.to_path_buf(),
            description: op.describe(),
            status,
        };

        if !self.fs.exists(path) {
            warn!(file = %path.display(), patch = %op.describe(), "patch target missing, skipped");
            return Ok(report(PatchStatus::Skipped));
        }
        let content = self.fs.read(path)?;
        let outcome = op.apply(&content).map_err(|source| ConfigPatchError::Patch {
            path: path.to_path_buf(),
            source,
        })?;

        match outcome {
            PatchOutcome::Applied(next) => {
                self.fs.write(path, &next)?;
                debug!(file = %path.display(), patch = %op.describe(), "patched");
                Ok(report(PatchStatus::Applied))
            }
            PatchOutcome::AlreadyApplied => Ok(report(PatchStatus::AlreadyApplied)),
            PatchOutcome::AnchorMissing => {
                warn!(file = %path.display(), patch = %op.describe(), "patch anchor not found, skipped");
                Ok(report(PatchStatus::Skipped))
            }
        }
    }
}
