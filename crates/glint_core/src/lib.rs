//! Glint Core - scene description for the Glint ray tracer.
//!
//! This crate provides:
//!
//! - **Materials and lights**: validated, immutable Phong parameters
//! - **Geometry**: `Sphere` and `Plane` with intersection and normal queries
//! - **Scene**: an ordered object list with the nearest-hit query
//!
//! Everything here is built once at scene-setup time and read-only afterwards.
//!
//! # Example
//!
//! ```ignore
//! use glint_core::{Light, Material, Scene, Sphere, Color};
//! use glint_math::{Ray, Vec3};
//!
//! let red = Material::builder(Color::splat(0.1), Color::X, Color::ONE).build()?;
//! let mut scene = Scene::new();
//! scene.add_object(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, red)?);
//! scene.add_light(Light::new(Vec3::new(5.0, 5.0, 0.0), Color::splat(0.2), Color::ONE, Color::ONE)?);
//!
//! let hit = scene.nearest_hit(&Ray::new(Vec3::ZERO, Vec3::NEG_Z), None);
//! ```

pub mod demo;
mod error;
pub mod geometry;
mod light;
mod material;
pub mod scene;

pub use error::{SceneError, SceneResult};
pub use geometry::{Plane, SceneObject, Sphere};
pub use light::Light;
pub use material::{Color, Material, MaterialBuilder};
pub use scene::{Hit, ObjectId, Scene};
