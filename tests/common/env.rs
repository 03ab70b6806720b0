//! Isolated environment for running the `stackwright` binary.
//!
//! Every `TestEnv` gets its own working directory and its own user config
//! directory (through `STACKWRIGHT_CONFIG_DIR`), so a developer's real
//! configuration never leaks into a test.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Result of running a CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(self.stdout.trim()).unwrap_or_else(|e| {
            panic!("stdout is not JSON ({e}):\n{}\nstderr:\n{}", self.stdout, self.stderr)
        })
    }
}

pub struct TestEnv {
    work_dir: TempDir,
    config_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            work_dir: tempfile::tempdir().expect("create work dir"),
            config_dir: tempfile::tempdir().expect("create config dir"),
        }
    }

    /// Working directory commands run in
    pub fn root(&self) -> &Path {
        self.work_dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Run the binary from the working directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_stackwright"));
        cmd.current_dir(self.root())
            .args(args)
            .stdin(Stdio::null())
            .env("STACKWRIGHT_CONFIG_DIR", self.config_dir.path())
            .env_remove("STACKWRIGHT_LOG")
            .env_remove("STACKWRIGHT_LOG_JSON")
            .env_remove("STACKWRIGHT_PACKAGE_MANAGER")
            .env_remove("STACKWRIGHT_MAX_PASSES")
            .env_remove("STACKWRIGHT_AUTO_FIX")
            .env_remove("STACKWRIGHT_VERBOSITY");
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        to_result(cmd.output().expect("failed to execute stackwright"))
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("create parent directories");
        }
        std::fs::write(&full_path, content).expect("write file");
    }

    /// Write the user-level `config.toml`
    pub fn write_user_config(&self, content: &str) {
        std::fs::write(self.config_dir.path().join("config.toml"), content)
            .expect("write user config");
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("failed to read {relative}: {e}"))
    }

    pub fn read_json(&self, relative: &str) -> serde_json::Value {
        serde_json::from_str(&self.read(relative))
            .unwrap_or_else(|e| panic!("{relative} is not JSON: {e}"))
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
