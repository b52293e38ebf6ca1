use std::process::ExitCode;

use crate::core::ErrorKind;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed successfully
/// - `InputError` (1): An input file or directory was missing or unreadable
/// - `FormatError` (2): An input was read but malformed (invalid JSON, non-object top level, bad config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    InputError,
    FormatError,
}

impl From<ErrorKind> for ExitStatus {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Input => ExitStatus::InputError,
            ErrorKind::Format => ExitStatus::FormatError,
        }
    }
}

impl ExitStatus {
    /// Pick the exit status for an error returned by a command.
    ///
    /// Errors that do not originate from reading inputs are configuration problems.
    pub fn from_error(err: &anyhow::Error) -> Self {
        err.downcast_ref::<crate::core::Error>()
            .map(|e| e.kind().into())
            .unwrap_or(ExitStatus::FormatError)
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::InputError => ExitCode::from(1),
            ExitStatus::FormatError => ExitCode::from(2),
        }
    }
}
