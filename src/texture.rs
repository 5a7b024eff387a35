//! Texture asset loading and UV sampling.

use std::collections::HashMap;

use glam::Vec4;

use crate::color::{to_intensity, Rgba8};
use crate::error::RenderError;
use crate::scene::TextureMap;

/// A decoded texture image, row-major, normalized to RGBA8.
pub struct TextureAsset {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Row-major pixel data, length `width * height`.
    pub pixels: Vec<Rgba8>,
}

impl TextureAsset {
    fn load(filename: &str) -> Result<Self, RenderError> {
        let img = image::open(filename)
            .map_err(|e| RenderError::TextureLoad {
                filename: filename.to_owned(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()),
            })?
            .to_rgba8();
        let (width, height) = img.dimensions();
        let pixels = img
            .pixels()
            .map(|p| Rgba8::new(p[0], p[1], p[2], p[3]))
            .collect();
        Ok(Self { width, height, pixels })
    }
}

/// Process-wide, insert-once, read-many texture store keyed by
/// filename. Populated during scene assembly, read-only during
/// tracing.
#[derive(Default)]
pub struct TextureCache {
    entries: HashMap<String, TextureAsset>,
}

impl TextureCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `filename` into the cache if it isn't already present.
    /// Once inserted, an entry is never replaced or removed.
    pub fn ensure_loaded(&mut self, filename: &str) -> Result<(), RenderError> {
        if !self.entries.contains_key(filename) {
            let asset = TextureAsset::load(filename)?;
            let _ = self.entries.insert(filename.to_owned(), asset);
        }
        Ok(())
    }

    /// Look up a previously-loaded texture by filename.
    #[must_use]
    pub fn get(&self, filename: &str) -> Option<&TextureAsset> {
        self.entries.get(filename)
    }
}

/// Sample a texture at `uv`, scaled by the material's repeat counts.
/// Returns color in `[0, 1]` float space.
#[must_use]
pub fn sample(uv: (f32, f32), texture: &TextureAsset, map: &TextureMap) -> Vec4 {
    let (u, v) = uv;
    let width = i64::from(texture.width);
    let height = i64::from(texture.height);

    let col = (u * texture.width as f32 * map.repeat_u).floor() as i64;
    let row = ((1.0 - v) * texture.height as f32 * map.repeat_v).floor() as i64;

    let col = col.rem_euclid(width.max(1));
    let row = row.rem_euclid(height.max(1));

    let pixel = texture.pixels[(row * width + col) as usize];
    to_intensity(pixel)
}
