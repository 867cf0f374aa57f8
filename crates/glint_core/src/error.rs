use glint_math::DegenerateVectorError;
use thiserror::Error;

/// Errors raised while building a scene or querying it with bad arguments.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Invalid material: {0}")]
    InvalidMaterial(String),

    #[error("Invalid light: {0}")]
    InvalidLight(String),

    #[error("Invalid sphere: {0}")]
    InvalidSphere(String),

    #[error("Invalid plane: {0}")]
    InvalidPlane(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Degenerate(#[from] DegenerateVectorError),
}

/// Result type for scene construction and queries.
pub type SceneResult<T> = Result<T, SceneError>;
