//! `.env` assembly
//!
//! Entries are appended by key. A key already present, written by an earlier
//! module or by the user, is never touched.

use std::path::Path;

use crate::domain::ports::file_system::{FileSystem, FsResult};

/// Keys defined in `.env` content, in file order
pub fn keys(content: &str) -> Vec<&str> {
    content
        .lines()
        .filter_map(|line| {
            let line = line.trim_start();
            if line.starts_with('#') {
                return None;
            }
            let line = line.strip_prefix("export ").unwrap_or(line);
            line.split_once('=').map(|(key, _)| key.trim())
        })
        .collect()
}

/// Append each `(key, value)` whose key is not yet defined
pub fn append_missing(content: &str, entries: &[(&str, String)]) -> String {
    let mut out = content.to_string();
    let mut present: Vec<String> = keys(content).into_iter().map(str::to_string).collect();
    for (key, value) in entries {
        if present.iter().any(|k| k == key) {
            continue;
        }
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&format!("{key}={value}\n"));
        present.push((*key).to_string());
    }
    out
}

/// Merge `entries` into the env file at `path`. Returns the keys added.
pub fn merge(
    fs: &dyn FileSystem,
    path: &Path,
    entries: &[(&str, String)],
) -> FsResult<Vec<String>> {
    let existing = if fs.exists(path) {
        fs.read(path)?
    } else {
        String::new()
    };
    let before: Vec<String> = keys(&existing).into_iter().map(str::to_string).collect();
    let merged = append_missing(&existing, entries);
    if merged != existing {
        fs.write(path, &merged)?;
    }
    Ok(keys(&merged)
        .into_iter()
        .filter(|k| !before.iter().any(|b| b == k))
        .map(str::to_string)
        .collect())
}
