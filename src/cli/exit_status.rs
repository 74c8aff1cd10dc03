use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): command completed
/// - `Failure` (1): command completed but reported a failure, e.g. the base
///   locale is missing or the config file already exists
/// - `Error` (2): unreadable or malformed input, config error, I/O failure
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
