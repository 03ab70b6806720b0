//! Error types for Stackwright
//!
//! Each layer owns a `thiserror` enum; `StackwrightError` gathers them for
//! callers that drive a whole command and maps them to process exit codes.

use std::path::PathBuf;

use thiserror::Error;

use crate::application::{AddError, GenerationError};
use crate::config::ConfigError;
use crate::domain::ports::{FsError, StateError};
use crate::domain::services::ResolveError;
use crate::infrastructure::fs::LockError;
use crate::modules::RegistryError;

/// Result type alias for Stackwright operations
pub type StackwrightResult<T> = Result<T, StackwrightError>;

/// Main error type for Stackwright operations
#[derive(Error, Debug)]
pub enum StackwrightError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Built-in module table is inconsistent
    #[error("module registry is invalid: {0}")]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Add(#[from] AddError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Fs(#[from] FsError),

    #[error(transparent)]
    Lock(#[from] LockError),

    /// Target has files and confirmation was not possible
    #[error("{} is not empty; pass --yes to write into it anyway", .0.display())]
    TargetNotEmpty(PathBuf),

    /// Target path exists but is not a directory
    #[error("{} exists and is not a directory", .0.display())]
    TargetNotADirectory(PathBuf),

    /// The user declined a confirmation prompt
    #[error("aborted")]
    Aborted,
}

impl StackwrightError {
    /// Process exit status for this error.
    ///
    /// 2 for input the caller can fix (incompatible flags, bad config, refused
    /// target), 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            StackwrightError::Resolve(ResolveError::Incompatible(_))
            | StackwrightError::Add(AddError::Resolve(ResolveError::Incompatible(_)))
            | StackwrightError::Add(AddError::NothingRequested)
            | StackwrightError::Add(AddError::NotAProject(_))
            | StackwrightError::Config(_)
            | StackwrightError::TargetNotEmpty(_)
            | StackwrightError::TargetNotADirectory(_) => 2,
            _ => 1,
        }
    }
}
