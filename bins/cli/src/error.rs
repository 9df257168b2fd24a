//! CLI error currency and exit-code mapping.

use crate::console::ConsoleError;
use regdesk_shared::FieldError;
use thiserror::Error;

/// Process exit codes for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Session completed and the report was written.
    Ok = 0,
    /// Input failed a shape or semantic validation check.
    InvalidInput = 2,
    /// Reading stdin or writing stdout failed.
    Io = 3,
    /// Report serialization failed.
    Internal = 1,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Top-level CLI failure.
///
/// `main` owns the single reporting point; every variant renders as one
/// `error: ...` line on standard error.
#[derive(Debug, Error)]
pub enum CliError {
    /// A field failed semantic validation at record construction.
    #[error("invalid {0}")]
    Validation(#[from] FieldError),
    /// Console input had the wrong shape or ended early.
    #[error("invalid input: {0}")]
    Console(#[from] ConsoleError),
    /// Reading stdin or writing stdout failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The JSON report could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    /// Exit code for this failure.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Validation(_) | Self::Console(_) => ExitCode::InvalidInput,
            Self::Io(_) => ExitCode::Io,
            Self::Serialization(_) => ExitCode::Internal,
        }
    }
}
