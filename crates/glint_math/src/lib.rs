// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod interval;
mod ray;
mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use vector::{reflect, try_normalize, DegenerateVectorError};

/// Minimum accepted hit parameter, and the offset applied to secondary ray
/// origins so they don't re-hit the surface they leave.
pub const RAY_EPSILON: f32 = 1e-3;

/// Below this `|dot(direction, normal)|` a ray is treated as parallel to a plane.
pub const PARALLEL_EPSILON: f32 = 1e-4;
