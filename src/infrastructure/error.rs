//! Infrastructure-level errors (namespace listing)

use std::path::PathBuf;

use kube::config::KubeconfigError;
use thiserror::Error;

/// Errors raised while obtaining the namespace list.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("kubeconfig: {0}")]
    Kubeconfig(#[from] KubeconfigError),

    #[error("kubernetes API: {0}")]
    Kube(#[from] kube::Error),

    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("I/O error: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid namespace manifest {}: {message}", path.display())]
    Manifest { path: PathBuf, message: String },
}

impl InfraError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type for infrastructure layer operations.
pub type InfraResult<T> = Result<T, InfraError>;
