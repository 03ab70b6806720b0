//! Command handlers for the `stackwright` binary
//!
//! Each handler resolves, generates or reads through the library, renders
//! with `presentation::output` and prints to stdout. Errors are returned as
//! `anyhow::Error` wrapping a `StackwrightError` so `main` can pick the exit
//! code.

pub mod add;
pub mod catalog;
pub mod create;
pub mod resolve;
pub mod error;
mod target;

use std::path::{Component, Path, PathBuf};

use stackwright::config::Config;
use stackwright::presentation::{OutputFormat, Services};

/// Everything a command needs from startup
pub struct Context {
    pub cwd: PathBuf,
    pub config: Config,
    pub format: OutputFormat,
    pub services: Services,
}

impl Context {
    /// `path` made absolute against the working directory, `.` and `..`
    /// removed
    pub fn absolute(&self, path: &Path) -> PathBuf {
        if let Ok(canonical) = path_from(&self.cwd, path).canonicalize() {
            return canonical;
        }
        let mut out = PathBuf::new();
        for component in path_from(&self.cwd, path).components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    out.pop();
                }
                other => out.push(other.as_os_str()),
            }
        }
        out
    }

    pub fn print(&self, rendered: &str) {
        if rendered.ends_with('\n') {
            print!("{rendered}");
        } else {
            println!("{rendered}");
        }
    }
}

fn path_from(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
