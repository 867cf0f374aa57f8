//! Vector helpers that glam leaves to the caller.

use crate::Vec3;
use thiserror::Error;

/// Normalizing a zero-length (or non-finite) vector.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("cannot normalize degenerate vector {0}")]
pub struct DegenerateVectorError(pub Vec3);

/// Normalize `v`, failing instead of producing NaNs or a silent zero vector.
#[inline]
pub fn try_normalize(v: Vec3) -> Result<Vec3, DegenerateVectorError> {
    v.try_normalize().ok_or(DegenerateVectorError(v))
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}
