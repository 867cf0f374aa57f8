use glint_math::DegenerateVectorError;
use thiserror::Error;

/// Errors that can occur while rendering.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Degenerate geometry: {0}")]
    Degenerate(#[from] DegenerateVectorError),
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;
