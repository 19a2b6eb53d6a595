//! Application-level errors (wraps fetch and render errors)

use thiserror::Error;

use crate::application::render::RenderError;
use crate::infrastructure::InfraError;

/// Application errors wrap the failures of one fetch/build/render run.
///
/// The forest builder itself cannot fail, so there is no domain variant.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("failed to list namespaces: {0}")]
    Fetch(#[from] InfraError),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
