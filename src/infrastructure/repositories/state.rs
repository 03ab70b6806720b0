//! JSONC State Repository
//!
//! Implements the StateRepository port. The manifest is pretty JSON behind a
//! short `//` comment header; comments anywhere outside strings are ignored on
//! read so hand-annotated files still load.

use std::path::{Path, PathBuf};

use crate::domain::entities::{ProjectState, STATE_FILE_NAME};
use crate::domain::ports::file_system::{FileSystem, FsError};
use crate::domain::ports::state_repository::{StateError, StateRepository, StateResult};

const HEADER: &str = "// Generated by stackwright. Describes the stack this project was created with.\n\
// `stackwright add` reads this file; keep it in version control.\n";

pub struct JsoncStateRepository<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> JsoncStateRepository<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    pub fn path_for(project_root: &Path) -> PathBuf {
        project_root.join(STATE_FILE_NAME)
    }
}

/// Remove `//` and `/* */` comments that are not inside string literals
pub fn strip_comments(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    let mut chars = src.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        let next = chars.peek().copied();
        match (c, next) {
            ('"', _) => {
                in_string = true;
                out.push(c);
            }
            ('/', Some('/')) => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for skipped in chars.by_ref() {
                    if prev == '*' && skipped == '/' {
                        break;
                    }
                    prev = skipped;
                }
            }
            _ => out.push(c),
        }
    }
    out
}

pub fn render(state: &ProjectState) -> StateResult<String> {
    let json = serde_json::to_string_pretty(state)
        .map_err(|e| StateError::InvalidFormat(e.to_string()))?;
    Ok(format!("{HEADER}{json}\n"))
}

pub fn parse(content: &str) -> StateResult<ProjectState> {
    serde_json::from_str(&strip_comments(content))
        .map_err(|e| StateError::InvalidFormat(e.to_string()))
}

impl StateRepository for JsoncStateRepository<'_> {
    fn load(&self, project_root: &Path) -> StateResult<ProjectState> {
        let path = Self::path_for(project_root);
        let content = self.fs.read(&path).map_err(|e| match e {
            FsError::NotFound(_) => StateError::NotFound(path.display().to_string()),
            other => StateError::Fs(other),
        })?;
        parse(&content)
    }

    fn save(&self, project_root: &Path, state: &ProjectState) -> StateResult<()> {
        let content = render(state)?;
        self.fs.write(&Self::path_for(project_root), &content)?;
        Ok(())
    }
}
