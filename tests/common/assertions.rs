//! Assertion macros with descriptive failure messages.

use std::path::Path;

/// List all files under a directory recursively (for failure messages)
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(list_all_files(&path));
            } else {
                files.push(path.display().to_string());
            }
        }
    }
    files.sort();
    files
}

/// Assert that a file was generated relative to the working directory.
///
/// ```ignore
/// assert_generated!(env, "my-app/apps/server/package.json");
/// ```
#[macro_export]
macro_rules! assert_generated {
    ($env:expr, $path:expr) => {
        let full_path = $env.path($path);
        assert!(
            full_path.exists(),
            "Expected file at '{}', but it doesn't exist.\nFiles found:\n  {}",
            $path,
            $crate::common::list_all_files($env.root()).join("\n  ")
        );
    };
}

/// Assert that a path was NOT generated
#[macro_export]
macro_rules! assert_not_generated {
    ($env:expr, $path:expr) => {
        assert!(
            !$env.path($path).exists(),
            "Expected '{}' to NOT exist, but it does.",
            $path
        );
    };
}

/// Assert that stdout or stderr contains a pattern
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            $result.stdout.contains($pattern) || $result.stderr.contains($pattern),
            "Expected output to contain '{}'\nstdout:\n{}\nstderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}
