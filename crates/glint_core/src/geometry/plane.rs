//! Infinite plane primitive.

use std::sync::Arc;

use glint_math::{try_normalize, Ray, Vec3, PARALLEL_EPSILON};

use crate::{Material, SceneError, SceneResult};

/// An infinite plane through `point` with a unit `normal`.
#[derive(Clone, Debug)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
    material: Arc<Material>,
}

impl Plane {
    /// Create a new plane. The normal is normalized here; a zero normal is an error.
    pub fn new(point: Vec3, normal: Vec3, material: Arc<Material>) -> SceneResult<Self> {
        if !point.is_finite() {
            return Err(SceneError::InvalidPlane(format!(
                "point must be finite, got {}",
                point
            )));
        }
        let normal = try_normalize(normal)
            .map_err(|e| SceneError::InvalidPlane(format!("normal: {}", e)))?;

        Ok(Self {
            point,
            normal,
            material,
        })
    }

    pub fn point(&self) -> Vec3 {
        self.point
    }

    /// The stored unit normal.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn material(&self) -> &Arc<Material> {
        &self.material
    }

    /// Ray parameter of the crossing, or `None` when the ray is (nearly)
    /// parallel or the plane is behind the origin.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let denom = ray.direction().dot(self.normal);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (self.point - ray.origin()).dot(self.normal) / denom;
        if t <= 0.0 {
            return None;
        }
        Some(t)
    }
}
