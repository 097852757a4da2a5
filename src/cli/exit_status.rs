use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Pull completed; skipped files are still a success
/// - `Error` (1): Pull aborted (remote error, configuration error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
        }
    }
}
