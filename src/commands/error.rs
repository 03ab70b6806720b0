//! Error reporting on stderr (and stdout for `--json`)

use is_terminal::IsTerminal;

use stackwright::domain::services::ResolveError;
use stackwright::error::StackwrightError;

/// Exit status for a failed command
pub fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<StackwrightError>() {
        Some(err) => err.exit_code() as u8,
        None => 1,
    }
}

fn hint(err: &StackwrightError) -> Option<&'static str> {
    match err {
        StackwrightError::Resolve(ResolveError::Incompatible(_)) => {
            Some("drop --no-auto-fix to let the resolver adjust the other fields")
        }
        StackwrightError::Resolve(ResolveError::NonTermination { .. }) => {
            Some("this is a bug in the compatibility rules; please report it")
        }
        _ => None,
    }
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    let stackwright = err.downcast_ref::<StackwrightError>();
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": format!("{err:#}"),
            "exitCode": exit_code(err),
        });
        println!("{output}");
    }

    let prefix = if std::io::stderr().is_terminal() {
        "\x1b[31merror\x1b[0m"
    } else {
        "error"
    };
    eprintln!("{prefix}: {err:#}");
    if let Some(hint) = stackwright.and_then(hint) {
        eprintln!("  hint: {hint}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn library_errors_keep_their_exit_code() {
        let err = anyhow::Error::from(StackwrightError::TargetNotEmpty(PathBuf::from("x")));
        assert_eq!(exit_code(&err), 2);
    }

    #[test]
    fn other_errors_exit_with_one() {
        assert_eq!(exit_code(&anyhow::anyhow!("boom")), 1);
    }
}
