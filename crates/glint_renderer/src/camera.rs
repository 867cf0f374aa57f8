//! Pinhole camera for primary rays.

use glint_math::{Ray, Vec3};

/// A fixed pinhole camera at the origin looking down -Z.
///
/// The projection plane sits at z = -1 and spans [-1, 1] on both axes,
/// whatever the image aspect ratio.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,
    eye: Vec3,
}

impl Camera {
    /// Create a camera for an image of the given size.
    pub fn new(image_width: u32, image_height: u32) -> Self {
        Self {
            image_width,
            image_height,
            eye: Vec3::ZERO,
        }
    }

    /// The eye point every primary ray starts from.
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Map pixel (x, y) to normalized device coordinates.
    ///
    /// Y is flipped so row 0 is the top of the image.
    pub fn ndc(&self, x: u32, y: u32) -> (f32, f32) {
        let ndc_x = 2.0 * x as f32 / self.image_width as f32 - 1.0;
        let ndc_y = 1.0 - 2.0 * y as f32 / self.image_height as f32;
        (ndc_x, ndc_y)
    }

    /// Normalized ray from the eye through pixel (x, y).
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let (ndc_x, ndc_y) = self.ndc(x, y);
        // z = -1 keeps the length >= 1
        let direction = Vec3::new(ndc_x, ndc_y, -1.0).normalize();
        Ray::new(self.eye, direction)
    }
}
