//! Target directory checks before generation

use std::path::Path;

use dialoguer::Confirm;
use is_terminal::IsTerminal;
use tracing::debug;

use stackwright::error::StackwrightError;

fn is_empty_dir(dir: &Path) -> bool {
    match std::fs::read_dir(dir) {
        Ok(mut entries) => entries.next().is_none(),
        Err(_) => true,
    }
}

/// Refuse files, and ask before writing into a non-empty directory.
///
/// Without a terminal there is nobody to ask, so a non-empty target needs
/// `--yes`.
pub fn ensure_writable(target: &Path, yes: bool) -> Result<(), StackwrightError> {
    if target.exists() && !target.is_dir() {
        return Err(StackwrightError::TargetNotADirectory(target.to_path_buf()));
    }
    if yes || is_empty_dir(target) {
        return Ok(());
    }
    if !std::io::stdin().is_terminal() {
        return Err(StackwrightError::TargetNotEmpty(target.to_path_buf()));
    }

    let confirmed = Confirm::new()
        .with_prompt(format!(
            "{} is not empty. Generate into it anyway?",
            target.display()
        ))
        .default(false)
        .interact()
        .map_err(|e| {
            debug!(error = %e, "confirmation prompt failed");
            StackwrightError::Aborted
        })?;
    if confirmed {
        Ok(())
    } else {
        Err(StackwrightError::Aborted)
    }
}
