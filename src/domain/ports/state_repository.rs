//! StateRepository port - persistence of the project state manifest
//!
//! The domain only sees `ProjectState`; the on-disk format (JSON with a
//! comment header) belongs to the infrastructure implementation.

use std::path::Path;

use crate::domain::entities::ProjectState;

pub type StateResult<T> = Result<T, StateError>;

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// No state file in the project root
    #[error("no project state found at {0}")]
    NotFound(String),

    #[error("invalid project state: {0}")]
    InvalidFormat(String),

    #[error(transparent)]
    Fs(#[from] super::FsError),
}

pub trait StateRepository {
    /// Load the state of the project rooted at `project_root`
    fn load(&self, project_root: &Path) -> StateResult<ProjectState>;

    fn save(&self, project_root: &Path, state: &ProjectState) -> StateResult<()>;
}
