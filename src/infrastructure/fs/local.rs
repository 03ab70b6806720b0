//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation with atomic writes
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

/// Write through a temp file in the same directory, then rename over `path`
fn atomic_write(path: &Path, content: &[u8]) -> FsResult<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&parent).map_err(|e| FsError::from_io(&parent, e))?;

    let mut tmp =
        tempfile::NamedTempFile::new_in(&parent).map_err(|e| FsError::from_io(&parent, e))?;
    tmp.write_all(content)
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| FsError::from_io(path, e))?;
    tmp.persist(path).map_err(|e| FsError::from_io(path, e.error))?;
    Ok(())
}

fn walk(root: &Path, dir: &Path, out: &mut Vec<PathBuf>) -> FsResult<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| FsError::from_io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| FsError::from_io(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| FsError::from_io(&path, e))?;
        if file_type.is_dir() {
            walk(root, &path, out)?;
        } else if let Ok(relative) = path.strip_prefix(root) {
            out.push(relative.to_path_buf());
        }
    }
    Ok(())
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::from_io(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        atomic_write(path, content.as_bytes())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(|e| FsError::from_io(path, e))
    }

    fn list_files(&self, root: &Path) -> FsResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        if root.is_dir() {
            walk(root, root, &mut files)?;
        }
        files.sort();
        Ok(files)
    }
}
