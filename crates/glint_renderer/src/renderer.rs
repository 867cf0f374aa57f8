//! Rasterizer: one primary ray per pixel, rows traced in parallel.

use std::time::Instant;

use glint_core::{Color, Scene};
use glint_math::{try_normalize, Interval};
use rayon::prelude::*;

use crate::{shade, Camera, RenderError, RenderResult};

/// Background for pixels whose primary ray hits nothing.
pub const BACKGROUND_RGB: [u8; 3] = [50, 50, 50];

/// Which lights feed the global ambient term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AmbientMode {
    /// Only the first light's ambient color, whatever the light count.
    #[default]
    FirstLight,
    /// Sum of every light's ambient color.
    AllLights,
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Background color when the primary ray doesn't hit anything
    pub background: Color,
    /// Ambient policy
    pub ambient: AmbientMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let [r, g, b] = BACKGROUND_RGB;
        Self {
            background: Color::new(r as f32, g as f32, b as f32) / 255.0,
            ambient: AmbientMode::FirstLight,
        }
    }
}

/// Convert a color to 8-bit RGBA, clamping each channel to [0, 1].
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let to_byte = |c: f32| (Interval::UNIT.clamp(c) * 255.0).round() as u8;
    [to_byte(color.x), to_byte(color.y), to_byte(color.z), 255]
}

/// Trace the primary ray for pixel (x, y).
pub fn render_pixel(
    scene: &Scene,
    camera: &Camera,
    x: u32,
    y: u32,
    config: &RenderConfig,
) -> RenderResult<Color> {
    let ray = camera.primary_ray(x, y);

    match scene.nearest_hit(&ray, None) {
        Some(hit) => {
            let view_dir = try_normalize(ray.origin() - hit.point)?;
            shade(scene, &hit, view_dir, 0, config)
        }
        None => Ok(config.background),
    }
}

/// Output of a render: tightly packed RGBA8, row-major, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl ImageBuffer {
    /// Get the RGBA pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    /// Raw RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Convert into an `image` crate buffer (for saving to disk).
    pub fn into_rgba_image(self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels)
    }
}

/// Render the scene into a freshly allocated image.
pub fn render(scene: &Scene, width: u32, height: u32, config: &RenderConfig) -> RenderResult<ImageBuffer> {
    let len = buffer_len(width, height)?;
    let mut pixels = vec![0u8; len];
    render_into(scene, &mut pixels, width, height, config)?;

    Ok(ImageBuffer {
        width,
        height,
        pixels,
    })
}

/// Render the scene into a caller-owned RGBA8 buffer of `width * height * 4` bytes.
///
/// Every pixel is written; nothing from the previous contents survives.
pub fn render_into(
    scene: &Scene,
    buffer: &mut [u8],
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> RenderResult<()> {
    let len = buffer_len(width, height)?;
    if buffer.len() != len {
        return Err(RenderError::InvalidArgument(format!(
            "buffer holds {} bytes, {}x{} RGBA needs {}",
            buffer.len(),
            width,
            height,
            len
        )));
    }

    if scene.lights().is_empty() && !scene.is_empty() {
        log::warn!("Scene has {} objects but no lights", scene.len());
    }
    log::info!(
        "Rendering {}x{} ({} objects, {} lights)",
        width,
        height,
        scene.len(),
        scene.lights().len()
    );

    let start = Instant::now();
    let camera = Camera::new(width, height);
    let row_bytes = width as usize * 4;

    buffer
        .par_chunks_mut(row_bytes)
        .enumerate()
        .try_for_each(|(y, row)| -> RenderResult<()> {
            for (x, pixel) in row.chunks_exact_mut(4).enumerate() {
                let color = render_pixel(scene, &camera, x as u32, y as u32, config)?;
                pixel.copy_from_slice(&color_to_rgba(color));
            }
            Ok(())
        })?;

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(())
}

fn buffer_len(width: u32, height: u32) -> RenderResult<usize> {
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidArgument(format!(
            "image size must be positive, got {}x{}",
            width, height
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or_else(|| RenderError::InvalidArgument(format!("image {}x{} is too large", width, height)))
}
