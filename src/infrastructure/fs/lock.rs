//! Per-target run lock
//!
//! Two runs against the same target directory would interleave writes, so each
//! run holds an exclusive `fs2` lock on a file named after a digest of the
//! target path. The lock file lives in the system temp dir so the target stays
//! untouched until generation actually starts.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::debug;

use crate::domain::value_objects::ContentHash;

#[derive(Debug, thiserror::Error)]
pub enum LockError {
    #[error("another stackwright run is already working on {}", target.display())]
    Busy { target: PathBuf },

    #[error("cannot create lock file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Held for the duration of a run; released on drop
#[derive(Debug)]
pub struct TargetLock {
    file: File,
    path: PathBuf,
}

impl TargetLock {
    /// Lock file path for `target`
    pub fn path_for(lock_dir: &Path, target: &Path) -> PathBuf {
        let key = target.to_string_lossy();
        let digest = ContentHash::from_content(&key);
        lock_dir.join(format!("stackwright-{}.lock", digest.short(16)))
    }

    /// Try to take the lock for `target` without waiting
    pub fn acquire(target: &Path) -> Result<Self, LockError> {
        Self::acquire_in(&std::env::temp_dir(), target)
    }

    pub fn acquire_in(lock_dir: &Path, target: &Path) -> Result<Self, LockError> {
        let path = Self::path_for(lock_dir, target);
        let io = |source| LockError::Io {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(lock_dir).map_err(io)?;
        let file = File::create(&path).map_err(io)?;
        if file.try_lock_exclusive().is_err() {
            return Err(LockError::Busy {
                target: target.to_path_buf(),
            });
        }
        debug!(lock = %path.display(), target = %target.display(), "acquired run lock");
        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TargetLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}
