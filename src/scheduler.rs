//! Frame/pixel dispatch: generates eye rays, invokes the tracer, and
//! assembles the resulting framebuffer — optionally in parallel.

use glam::Vec4;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use rayon::prelude::*;

use crate::color::{to_rgba8, Rgba8};
use crate::config::RenderConfig;
use crate::scene::Scene;
use crate::texture::TextureCache;
use crate::tracer::{trace_ray, TraceFlags};

/// Render one frame of `scene` into a `width x height` row-major RGBA8
/// framebuffer (row 0 at the top), honoring `config`'s feature flags.
///
/// Each pixel's stochastic samples are drawn from an RNG seeded from
/// `(frame_seed, pixel_index)`, never a shared/global generator, so
/// parallel dispatch is reproducible regardless of thread scheduling.
#[must_use]
pub fn render(
    scene: &Scene,
    textures: &TextureCache,
    config: &RenderConfig,
    width: u32,
    height: u32,
    frame_seed: u64,
) -> Vec<Rgba8> {
    let flags = TraceFlags {
        enable_shadow: config.enable_shadow,
        enable_reflection: config.enable_reflection,
        enable_texture_map: config.enable_texture_map,
    };
    let num_samples = config.effective_samples();
    let pixel_count = (width as usize) * (height as usize);

    let fill = |index: usize| -> Rgba8 {
        let row = index / width as usize;
        let col = index % width as usize;

        let mut rng = StdRng::seed_from_u64(frame_seed ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
        let mut accumulator = Vec4::ZERO;

        for sample in 0..num_samples {
            let (sx, sy) = if sample == num_samples - 1 {
                (0.5, 0.5)
            } else {
                (rng.random::<f32>(), rng.random::<f32>())
            };

            let x = ((col as f32 + sx) / width as f32) - 0.5;
            let y = (((height as i64 - 1 - row as i64) as f32 + sy) / height as f32) - 0.5;

            let ray = scene.camera.generate_ray(x, y);
            accumulator += trace_ray(&ray, scene, textures, flags, 0);
        }

        accumulator /= num_samples as f32;
        to_rgba8(accumulator)
    };

    if config.enable_parallelism {
        (0..pixel_count).into_par_iter().map(fill).collect()
    } else {
        (0..pixel_count).map(fill).collect()
    }
}
