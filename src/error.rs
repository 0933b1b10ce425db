//! Error types and exit codes for iterbench

use std::process::ExitCode;
use thiserror::Error;

/// Main error type for iterbench operations
#[derive(Error, Debug)]
pub enum IterBenchError {
    #[error("Logger initialization failed: {message}")]
    LoggerInit { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IterBenchError {
    /// Convert error to appropriate exit code:
    /// - 0: Success
    /// - 1: IO error (failed to write the report)
    /// - 2: Logger initialization failure
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Io(_) => ExitCode::from(1),
            Self::LoggerInit { .. } => ExitCode::from(2),
        }
    }
}

/// Result type alias for iterbench operations
pub type Result<T> = std::result::Result<T, IterBenchError>;
