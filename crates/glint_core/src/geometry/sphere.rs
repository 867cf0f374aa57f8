//! Sphere primitive.

use std::sync::Arc;

use glint_math::{try_normalize, DegenerateVectorError, Ray, Vec3};

use crate::{Material, SceneError, SceneResult};

/// A sphere primitive.
#[derive(Clone, Debug)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere. The radius must be finite and positive.
    pub fn new(center: Vec3, radius: f32, material: Arc<Material>) -> SceneResult<Self> {
        if !center.is_finite() {
            return Err(SceneError::InvalidSphere(format!(
                "center must be finite, got {}",
                center
            )));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SceneError::InvalidSphere(format!(
                "radius must be > 0, got {}",
                radius
            )));
        }

        Ok(Self {
            center,
            radius,
            material,
        })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> &Arc<Material> {
        &self.material
    }

    /// Ray parameter of the near root of |o + t*d - c|^2 = r^2.
    ///
    /// The far root is never returned, so a ray starting inside the sphere
    /// reports the (negative) entry root and is filtered out by the caller.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().dot(ray.direction());
        if a <= 0.0 {
            return None;
        }
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        Some((-b - discriminant.sqrt()) / (2.0 * a))
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal_at(&self, point: Vec3) -> Result<Vec3, DegenerateVectorError> {
        try_normalize(point - self.center)
    }
}
