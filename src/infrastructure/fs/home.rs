//! User configuration directory resolution with test isolation support.
//!
//! `dirs::config_dir()` ignores `HOME`/`XDG_CONFIG_HOME` overrides on some
//! platforms, so tests point `STACKWRIGHT_CONFIG_DIR` at a temp directory
//! instead.

use std::path::PathBuf;

/// Overrides the user configuration directory (mainly for tests)
pub const CONFIG_DIR_VAR: &str = "STACKWRIGHT_CONFIG_DIR";

/// Directory holding the user-level `config.toml`
///
/// Resolution order: `STACKWRIGHT_CONFIG_DIR`, then `$XDG_CONFIG_HOME/stackwright`,
/// then the platform config dir from `dirs`.
pub fn user_config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_VAR).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|base| base.join("stackwright"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_to_stackwright_subdir_or_override() {
        let Some(dir) = user_config_dir() else {
            return;
        };
        let overridden = std::env::var_os(CONFIG_DIR_VAR).is_some_and(|v| !v.is_empty());
        assert!(overridden || dir.ends_with("stackwright"));
    }
}
