use thiserror::Error;

use crate::presenter::OutputFormat;

/// A user-facing failure with its own exit code.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct CliError {
    pub exit_code: i32,
    pub format: OutputFormat,
    pub message: String,
}

impl CliError {
    pub fn new(format: OutputFormat, message: impl Into<String>, exit_code: i32) -> Self {
        Self {
            exit_code,
            format,
            message: message.into(),
        }
    }
}

/// A check command ran fine but its verdict was negative. The verdict has
/// already been printed, so nothing else is reported.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("check failed")]
pub struct CheckFailed;
