//! FileSystem port - abstraction over the generated project's files
//!
//! Generation and `add` only ever go through this trait, so the orchestrator
//! can be exercised against an in-memory tree.

use std::path::{Path, PathBuf};

pub type FsResult<T> = Result<T, FsError>;

#[derive(Debug, thiserror::Error)]
pub enum FsError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Classify an I/O error raised while touching `path`
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - disk I/O with atomic writes
/// - `MemoryFs` - in-memory tree for tests and dry runs
pub trait FileSystem {
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Write content, creating parent directories. Replaces atomically.
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    fn exists(&self, path: &Path) -> bool;

    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Every file under `root`, relative to it, sorted
    fn list_files(&self, root: &Path) -> FsResult<Vec<PathBuf>>;
}
