//! Dependency merger
//!
//! Folds package requests and scripts into a workspace's `package.json`.
//! Versions come from the version registry. Writes are last-writer-wins per
//! package name and per script name; everything else in the manifest is left
//! where it was.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::ports::file_system::{FileSystem, FsError};
use crate::modules::{DependencyKind, VersionRegistry};

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("{} is not valid JSON: {source}", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("`{key}` in {} is not an object", path.display())]
    NotAnObject { path: PathBuf, key: String },

    #[error("package `{0}` has no registered version")]
    UnknownPackage(String),

    #[error(transparent)]
    Fs(#[from] FsError),
}

/// A resolved request for one manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageRequest<'a> {
    pub name: &'a str,
    pub kind: DependencyKind,
}

pub struct ManifestMerger<'a> {
    fs: &'a dyn FileSystem,
    versions: &'a VersionRegistry,
}

impl<'a> ManifestMerger<'a> {
    pub fn new(fs: &'a dyn FileSystem, versions: &'a VersionRegistry) -> Self {
        Self { fs, versions }
    }

    /// Add `requests` to the manifest at `path`, creating it if missing
    pub fn merge(&self, path: &Path, requests: &[PackageRequest<'_>]) -> Result<(), ManifestError> {
        if requests.is_empty() {
            return Ok(());
        }
        let mut manifest = self.load(path)?;
        for request in requests {
            let version = self
                .versions
                .get(request.name)
                .ok_or_else(|| ManifestError::UnknownPackage(request.name.to_string()))?;
            let section = section_mut(&mut manifest, request.kind.manifest_key(), path)?;
            if let Some(previous) = section.insert(request.name.to_string(), version.into()) {
                if previous != version {
                    debug!(package = request.name, %previous, version, "dependency version overwritten");
                }
            }
        }
        for kind in [DependencyKind::Dependency, DependencyKind::DevDependency] {
            if let Some(Value::Object(section)) = manifest.get_mut(kind.manifest_key()) {
                sort_keys(section);
            }
        }
        self.store(path, &manifest)
    }

    /// Set scripts by name; existing scripts with other names are kept
    pub fn merge_scripts(&self, path: &Path, scripts: &[(&str, String)]) -> Result<(), ManifestError> {
        if scripts.is_empty() {
            return Ok(());
        }
        let mut manifest = self.load(path)?;
        let section = section_mut(&mut manifest, "scripts", path)?;
        for (name, command) in scripts {
            section.insert((*name).to_string(), Value::String(command.clone()));
        }
        self.store(path, &manifest)
    }

    fn load(&self, path: &Path) -> Result<Map<String, Value>, ManifestError> {
        if !self.fs.exists(path) {
            return Ok(Map::new());
        }
        let content = self.fs.read(path)?;
        match serde_json::from_str(&content) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(ManifestError::NotAnObject {
                path: path.to_path_buf(),
                key: "(root)".to_string(),
            }),
            Err(source) => Err(ManifestError::InvalidJson {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn store(&self, path: &Path, manifest: &Map<String, Value>) -> Result<(), ManifestError> {
        let mut text = serde_json::to_string_pretty(manifest).map_err(|source| {
            ManifestError::InvalidJson {
                path: path.to_path_buf(),
                source,
            }
        })?;
        text.push('\n');
        self.fs.write(path, &text)?;
        Ok(())
    }
}

fn section_mut<'m>(
    manifest: &'m mut Map<String, Value>,
    key: &str,
    path: &Path,
) -> Result<&'m mut Map<String, Value>, ManifestError> {
    manifest
        .entry(key)
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| ManifestError::NotAnObject {
            path: path.to_path_buf(),
            key: key.to_string(),
        })
}

fn sort_keys(section: &mut Map<String, Value>) {
    let mut entries: Vec<(String, Value)> = std::mem::take(section).into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    section.extend(entries);
}
