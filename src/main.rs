//! CLI binary for the ray-traced image renderer core.
//!
//! Scene-graph parsing is out of scope for the core crate, so this
//! binary renders a small built-in demo scene — a lit sphere over a
//! floor plane — to exercise the full pipeline end to end. A real
//! caller would build [`skippy_rt::scene::RenderData`] from its own
//! scene-graph loader instead of [`demo_scene`].

use clap::Parser;
use glam::{Mat4, Vec3, Vec4};

use skippy_rt::config::RenderConfig;
use skippy_rt::scene::{
    assemble, CameraData, GlobalData, LightData, LightKind, Material, PrimitiveType, RenderData,
    RenderShapeData,
};
use skippy_rt::scheduler::render;
use skippy_rt::texture::TextureCache;
use skippy_rt::{blur, color};

/// Offline ray-traced image renderer.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Output image width, in pixels.
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Output image height, in pixels.
    #[arg(long, default_value_t = 480)]
    height: u32,

    /// Path to write the rendered PNG.
    #[arg(long, default_value = "output.png")]
    output: std::path::PathBuf,

    /// Path to a `RenderConfig` TOML file. Missing fields (or a
    /// missing file) fall back to defaults.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Seed for the per-pixel stochastic sampling RNG.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn demo_scene() -> RenderData {
    RenderData {
        globals: GlobalData { ka: 0.2, kd: 0.7, ks: 0.4 },
        camera: CameraData {
            pos: Vec3::new(0.0, 2.0, 8.0),
            look: Vec3::new(0.0, -0.2, -1.0),
            up: Vec3::Y,
            height_angle: 0.8,
        },
        shapes: vec![
            RenderShapeData {
                primitive_type: PrimitiveType::Sphere,
                material: Material {
                    c_ambient: Vec4::new(0.1, 0.05, 0.05, 1.0),
                    c_diffuse: Vec4::new(0.8, 0.2, 0.2, 1.0),
                    c_specular: Vec4::splat(0.9),
                    c_reflective: Vec4::splat(0.1),
                    shininess: 32.0,
                    texture_map: None,
                    blend: 0.0,
                },
                ctm: Mat4::from_scale(Vec3::splat(2.0)),
            },
            RenderShapeData {
                primitive_type: PrimitiveType::Cube,
                material: Material {
                    c_ambient: Vec4::new(0.05, 0.05, 0.05, 1.0),
                    c_diffuse: Vec4::splat(0.6),
                    ..Material::default()
                },
                ctm: Mat4::from_scale_rotation_translation(
                    Vec3::new(20.0, 0.2, 20.0),
                    glam::Quat::IDENTITY,
                    Vec3::new(0.0, -2.1, 0.0),
                ),
            },
        ],
        lights: vec![LightData {
            kind: LightKind::Point,
            color: Vec4::ONE,
            function: Vec3::new(1.0, 0.0, 0.05),
            pos: Vec3::new(4.0, 6.0, 4.0),
            dir: Vec3::ZERO,
            penumbra: 0.0,
            angle: 0.0,
        }],
    }
}

fn run(args: &Args) -> Result<(), skippy_rt::error::RenderError> {
    let config = match &args.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig {
            enable_shadow: true,
            enable_reflection: true,
            enable_super_sample: true,
            num_samples: 4,
            enable_post_process: true,
            enable_parallelism: true,
            ..RenderConfig::default()
        },
    };

    let data = demo_scene();
    let aspect_ratio = args.width as f32 / args.height as f32;

    let mut cache = TextureCache::new();
    let scene = assemble(&data, aspect_ratio, &mut cache)?;

    let mut pixels = render(&scene, &cache, &config, args.width, args.height, args.seed);
    if config.enable_post_process {
        pixels = blur::apply_blur(&pixels, args.width, args.height, 1);
    }

    let mut buffer = image::RgbaImage::new(args.width, args.height);
    for (pixel, dst) in pixels.iter().zip(buffer.pixels_mut()) {
        let color::Rgba8 { r, g, b, a } = *pixel;
        *dst = image::Rgba([r, g, b, a]);
    }
    buffer
        .save(&args.output)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    log::info!("wrote {}", args.output.display());
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
