//! Copy-on-write view of another FileSystem
//!
//! Reads fall through to the base; writes stay in memory. Dry runs generate
//! against this so existing project files are seen but never touched.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::domain::ports::file_system::{FileSystem, FsResult};

use super::MemoryFs;

pub struct OverlayFs<'a> {
    base: &'a dyn FileSystem,
    upper: MemoryFs,
}

impl<'a> OverlayFs<'a> {
    pub fn new(base: &'a dyn FileSystem) -> Self {
        Self {
            base,
            upper: MemoryFs::new(),
        }
    }

    /// Content of every file written through the overlay
    pub fn pending(&self, root: &Path) -> FsResult<Vec<(PathBuf, String)>> {
        self.upper
            .list_files(root)?
            .into_iter()
            .map(|relative| {
                let content = self.upper.read(&root.join(&relative))?;
                Ok((relative, content))
            })
            .collect()
    }
}

impl FileSystem for OverlayFs<'_> {
    fn read(&self, path: &Path) -> FsResult<String> {
        match self.upper.read(path) {
            Ok(content) => Ok(content),
            Err(_) => self.base.read(path),
        }
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        self.upper.write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        self.upper.exists(path) || self.base.exists(path)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        self.upper.create_dir_all(path)
    }

    fn list_files(&self, root: &Path) -> FsResult<Vec<PathBuf>> {
        let mut files: BTreeSet<PathBuf> = self.upper.list_files(root)?.into_iter().collect();
        if self.base.exists(root) {
            files.extend(self.base.list_files(root)?);
        }
        Ok(files.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_shadow_base_without_touching_it() {
        let base = MemoryFs::new().with_file("/p/package.json", "{}\n");
        let overlay = OverlayFs::new(&base);

        overlay.write(Path::new("/p/package.json"), "{ \"name\": \"p\" }\n").unwrap();
        overlay.write(Path::new("/p/.env"), "PORT=3000\n").unwrap();

        assert_eq!(base.read(Path::new("/p/package.json")).unwrap(), "{}\n");
        assert_eq!(
            overlay.read(Path::new("/p/package.json")).unwrap(),
            "{ \"name\": \"p\" }\n"
        );
        assert_eq!(
            overlay.list_files(Path::new("/p")).unwrap(),
            vec![PathBuf::from(".env"), PathBuf::from("package.json")]
        );
        assert_eq!(overlay.pending(Path::new("/p")).unwrap().len(), 2);
    }

    #[test]
    fn base_directories_are_visible() {
        let base = MemoryFs::new().with_file("/p/apps/web/index.html", "");
        let overlay = OverlayFs::new(&base);
        assert!(overlay.exists(Path::new("/p/apps/web")));
    }
}
