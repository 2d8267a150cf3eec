use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Scan completed (whether or not keys were added)
/// - `Error` (2): Command failed due to an unrecoverable error (config
///   error, filesystem failure during persistence, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command failed due to an unrecoverable error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
