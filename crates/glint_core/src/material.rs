//! Phong surface materials.

use std::sync::Arc;

use glint_math::Vec3;

use crate::{SceneError, SceneResult};

/// Color type alias (RGB, unclamped while shading, clamped to 0-1 on output)
pub type Color = Vec3;

/// A Lambertian + specular + mirror material.
///
/// Materials are immutable once built and shared between objects through
/// `Arc<Material>`.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    ambient: Color,
    diffuse: Color,
    specular: Color,
    shininess: f32,
    reflectivity: f32,
}

impl Material {
    pub const DEFAULT_SHININESS: f32 = 32.0;
    pub const DEFAULT_REFLECTIVITY: f32 = 0.0;

    /// Start building a material from its three required color terms.
    pub fn builder(ambient: Color, diffuse: Color, specular: Color) -> MaterialBuilder {
        MaterialBuilder {
            ambient,
            diffuse,
            specular,
            shininess: Self::DEFAULT_SHININESS,
            reflectivity: Self::DEFAULT_REFLECTIVITY,
        }
    }

    /// Ambient reflectance.
    pub fn ambient(&self) -> Color {
        self.ambient
    }

    /// Diffuse (Lambertian) reflectance.
    pub fn diffuse(&self) -> Color {
        self.diffuse
    }

    /// Specular reflectance.
    pub fn specular(&self) -> Color {
        self.specular
    }

    /// Phong exponent, always > 0.
    pub fn shininess(&self) -> f32 {
        self.shininess
    }

    /// Mirror weight in [0, 1].
    pub fn reflectivity(&self) -> f32 {
        self.reflectivity
    }

    /// True if shading this material casts a reflection ray.
    pub fn is_reflective(&self) -> bool {
        self.reflectivity > 0.0
    }
}

/// Builder for [`Material`]; validation happens in [`MaterialBuilder::build`].
#[derive(Clone, Debug)]
pub struct MaterialBuilder {
    ambient: Color,
    diffuse: Color,
    specular: Color,
    shininess: f32,
    reflectivity: f32,
}

impl MaterialBuilder {
    /// Set the Phong exponent (default 32).
    pub fn shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }

    /// Set the mirror weight (default 0).
    pub fn reflectivity(mut self, reflectivity: f32) -> Self {
        self.reflectivity = reflectivity;
        self
    }

    /// Validate and freeze the material.
    pub fn build(self) -> SceneResult<Arc<Material>> {
        check_color("ambient", self.ambient)?;
        check_color("diffuse", self.diffuse)?;
        check_color("specular", self.specular)?;

        if !(self.shininess.is_finite() && self.shininess > 0.0) {
            return Err(SceneError::InvalidMaterial(format!(
                "shininess must be > 0, got {}",
                self.shininess
            )));
        }
        if !(0.0..=1.0).contains(&self.reflectivity) {
            return Err(SceneError::InvalidMaterial(format!(
                "reflectivity must be in [0, 1], got {}",
                self.reflectivity
            )));
        }

        Ok(Arc::new(Material {
            ambient: self.ambient,
            diffuse: self.diffuse,
            specular: self.specular,
            shininess: self.shininess,
            reflectivity: self.reflectivity,
        }))
    }
}

fn check_color(name: &str, color: Color) -> SceneResult<()> {
    if !color.is_finite() || color.min_element() < 0.0 {
        return Err(SceneError::InvalidMaterial(format!(
            "{} color must be finite and non-negative, got {}",
            name, color
        )));
    }
    Ok(())
}
