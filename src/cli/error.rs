//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::{ApplicationError, RenderError};
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Application(e) => match e {
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::Fetch(e) => match e {
                    InfraError::Io { .. } => crate::exitcode::NOINPUT,
                    InfraError::Manifest { .. } => crate::exitcode::DATAERR,
                    InfraError::Kubeconfig(_) => crate::exitcode::CONFIG,
                    InfraError::Kube(_) => crate::exitcode::UNAVAILABLE,
                    InfraError::Runtime(_) => crate::exitcode::OSERR,
                },
                ApplicationError::Render(e) => match e {
                    RenderError::Io(_) => crate::exitcode::IOERR,
                    RenderError::Json(_) | RenderError::Yaml(_) => crate::exitcode::SOFTWARE,
                },
            },
        }
    }
}
