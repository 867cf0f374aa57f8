//! Intersectable primitives.

mod plane;
mod sphere;

pub use plane::Plane;
pub use sphere::Sphere;

use std::sync::Arc;

use glint_math::{DegenerateVectorError, Ray, Vec3};

use crate::{Material, SceneError, SceneResult};

/// Any object that can live in a [`Scene`](crate::Scene).
///
/// The set of shapes is closed, so this is an enum rather than a trait object.
#[derive(Clone, Debug)]
pub enum SceneObject {
    Sphere(Sphere),
    Plane(Plane),
}

impl SceneObject {
    /// Ray parameter of the intersection, if any.
    ///
    /// Callers filter the result against their own valid range.
    #[inline]
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        match self {
            SceneObject::Sphere(sphere) => sphere.intersect(ray),
            SceneObject::Plane(plane) => plane.intersect(ray),
        }
    }

    /// Unit surface normal at `point`. Planes ignore the argument.
    #[inline]
    pub fn normal_at(&self, point: Vec3) -> Result<Vec3, DegenerateVectorError> {
        match self {
            SceneObject::Sphere(sphere) => sphere.normal_at(point),
            SceneObject::Plane(plane) => Ok(plane.normal()),
        }
    }

    /// World-space point at parameter `t` along `ray`.
    pub fn point_at(&self, ray: &Ray, t: f32) -> SceneResult<Vec3> {
        if !t.is_finite() {
            return Err(SceneError::InvalidArgument(format!(
                "intersection parameter must be finite, got {}",
                t
            )));
        }
        Ok(ray.at(t))
    }

    /// The material bound to this object.
    pub fn material(&self) -> &Arc<Material> {
        match self {
            SceneObject::Sphere(sphere) => sphere.material(),
            SceneObject::Plane(plane) => plane.material(),
        }
    }
}

impl From<Sphere> for SceneObject {
    fn from(sphere: Sphere) -> Self {
        SceneObject::Sphere(sphere)
    }
}

impl From<Plane> for SceneObject {
    fn from(plane: Plane) -> Self {
        SceneObject::Plane(plane)
    }
}
