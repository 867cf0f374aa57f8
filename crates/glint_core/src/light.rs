//! Point lights.

use glint_math::Vec3;

use crate::{Color, SceneError, SceneResult};

/// A point light with separate Phong color terms.
#[derive(Clone, Debug, PartialEq)]
pub struct Light {
    position: Vec3,
    ambient: Color,
    diffuse: Color,
    specular: Color,
}

impl Light {
    /// Create a new light, rejecting non-finite positions and negative colors.
    pub fn new(position: Vec3, ambient: Color, diffuse: Color, specular: Color) -> SceneResult<Self> {
        if !position.is_finite() {
            return Err(SceneError::InvalidLight(format!(
                "position must be finite, got {}",
                position
            )));
        }
        for (name, color) in [("ambient", ambient), ("diffuse", diffuse), ("specular", specular)] {
            if !color.is_finite() || color.min_element() < 0.0 {
                return Err(SceneError::InvalidLight(format!(
                    "{} color must be finite and non-negative, got {}",
                    name, color
                )));
            }
        }

        Ok(Self {
            position,
            ambient,
            diffuse,
            specular,
        })
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn ambient(&self) -> Color {
        self.ambient
    }

    pub fn diffuse(&self) -> Color {
        self.diffuse
    }

    pub fn specular(&self) -> Color {
        self.specular
    }
}
