//! Glint Renderer - CPU ray tracing.
//!
//! Casts one primary ray per pixel, shades the nearest hit with multi-light
//! Phong illumination and hard shadows, and adds up to
//! [`MAX_REFLECTION_DEPTH`] mirror bounces. Rows are traced in parallel.

mod camera;
mod error;
mod renderer;
mod shading;

pub use camera::Camera;
pub use error::{RenderError, RenderResult};
pub use renderer::{
    color_to_rgba, render, render_into, render_pixel, AmbientMode, ImageBuffer, RenderConfig,
    BACKGROUND_RGB,
};
pub use shading::{in_shadow, shade, MAX_REFLECTION_DEPTH};

/// Re-export the scene and math types callers need to build a render.
pub use glint_core::{Color, Light, Material, Plane, Scene, SceneObject, Sphere};
pub use glint_math::{Ray, Vec3};
