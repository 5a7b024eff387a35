//! Per-frame scene data model and scene assembly.
//!
//! `RenderData` is the interface the core consumes: scene-graph
//! parsing and keyframe interpolation are out of scope (spec.md §1)
//! and are the caller's responsibility to flatten into this plain
//! struct tree before invoking [`assemble`].

use glam::{Mat4, Vec3, Vec4};

use crate::camera::Camera;
use crate::light::Light;
use crate::primitive::{Primitive, ShapeKind};
use crate::texture::TextureCache;

/// Global illumination coefficients shared by every shading
/// evaluation in a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalData {
    /// Ambient coefficient.
    pub ka: f32,
    /// Diffuse coefficient.
    pub kd: f32,
    /// Specular coefficient.
    pub ks: f32,
}

/// Raw camera parameters for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraData {
    /// World-space eye position.
    pub pos: Vec3,
    /// Look direction (not required to be unit length).
    pub look: Vec3,
    /// Up direction (not required to be orthogonal to `look`).
    pub up: Vec3,
    /// Vertical field of view, in radians.
    pub height_angle: f32,
}

/// An optional diffuse texture map on a material.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureMap {
    /// Path/key the texture is loaded and cached under.
    pub filename: String,
    /// Horizontal repeat count.
    pub repeat_u: f32,
    /// Vertical repeat count.
    pub repeat_v: f32,
    /// Whether this map is actually sampled (a material may carry a
    /// stale filename with `used = false`).
    pub used: bool,
}

/// Per-surface shading coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Ambient color.
    pub c_ambient: Vec4,
    /// Diffuse color.
    pub c_diffuse: Vec4,
    /// Specular color.
    pub c_specular: Vec4,
    /// Mirror-reflection weight, multiplied against the recursive
    /// reflected ray's color.
    pub c_reflective: Vec4,
    /// Specular exponent (shininess).
    pub shininess: f32,
    /// Optional diffuse texture map.
    pub texture_map: Option<TextureMap>,
    /// Blend factor between `c_diffuse` and the sampled texture color,
    /// in `[0, 1]`.
    pub blend: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            c_ambient: Vec4::ZERO,
            c_diffuse: Vec4::ONE,
            c_specular: Vec4::ZERO,
            c_reflective: Vec4::ZERO,
            shininess: 0.0,
            texture_map: None,
            blend: 0.0,
        }
    }
}

/// The primitive kinds this core understands. Mesh and torus are
/// accepted as input (so parsers that emit them don't need special
/// casing) but dropped during assembly — see [`assemble`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    /// Axis-aligned unit cube.
    Cube,
    /// Unit cone (apex up).
    Cone,
    /// Unit cylinder.
    Cylinder,
    /// Unit sphere.
    Sphere,
    /// Triangle mesh — unimplemented, dropped with a warning.
    Mesh,
    /// Torus — unimplemented, dropped with a warning.
    Torus,
}

/// One shape entry in the flattened scene-graph shape list.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderShapeData {
    /// Which primitive kind this is.
    pub primitive_type: PrimitiveType,
    /// Surface material.
    pub material: Material,
    /// Object-to-world cumulative transformation matrix.
    pub ctm: Mat4,
}

/// One light entry in the flattened scene-graph light list. Fields not
/// applicable to a given `kind` are ignored (mirrors the original
/// parser's single flat `SceneLightData` struct).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightData {
    /// Which light variant this describes.
    pub kind: LightKind,
    /// Light color.
    pub color: Vec4,
    /// Attenuation function coefficients `(c0, c1, c2)`. Point/spot only.
    pub function: Vec3,
    /// World-space position. Point/spot only.
    pub pos: Vec3,
    /// Direction. Directional/spot only.
    pub dir: Vec3,
    /// Penumbra width in radians. Spot only.
    pub penumbra: f32,
    /// Outer cone angle in radians. Spot only.
    pub angle: f32,
}

/// Discriminant for [`LightData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    /// Parallel rays from an infinitely distant source.
    Directional,
    /// Omnidirectional source with distance attenuation.
    Point,
    /// Cone-restricted source with distance attenuation and angular
    /// falloff.
    Spot,
}

/// Everything the core needs to render one animation frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderData {
    /// Global shading coefficients.
    pub globals: GlobalData,
    /// Camera parameters.
    pub camera: CameraData,
    /// Flattened shape list (after scene-graph CTM composition).
    pub shapes: Vec<RenderShapeData>,
    /// Flattened light list.
    pub lights: Vec<LightData>,
}

/// A fully assembled, read-only frame scene: primitives, lights, and
/// camera, ready for the tracer. Built once per frame, dropped after.
pub struct Scene {
    /// World-space primitive list.
    pub primitives: Vec<Primitive>,
    /// Light list.
    pub lights: Vec<Light>,
    /// Camera for this frame.
    pub camera: Camera,
    /// Global shading coefficients.
    pub globals: GlobalData,
}

/// Build a [`Scene`] from a frame's [`RenderData`], loading any
/// referenced textures into `cache` first.
///
/// Unsupported primitive types (mesh, torus) are dropped with a
/// `log::warn!`, not an error — per spec.md §7 this is a warning, not a
/// fatal condition. Texture load failures ARE fatal and propagate.
pub fn assemble(
    data: &RenderData,
    aspect_ratio: f32,
    cache: &mut TextureCache,
) -> Result<Scene, crate::error::RenderError> {
    for shape in &data.shapes {
        if let Some(map) = &shape.material.texture_map {
            if map.used {
                cache.ensure_loaded(&map.filename)?;
            }
        }
    }

    let mut primitives = Vec::with_capacity(data.shapes.len());
    for shape in &data.shapes {
        let kind = match shape.primitive_type {
            PrimitiveType::Cube => ShapeKind::Cube,
            PrimitiveType::Cone => ShapeKind::Cone,
            PrimitiveType::Cylinder => ShapeKind::Cylinder,
            PrimitiveType::Sphere => ShapeKind::Sphere,
            PrimitiveType::Mesh | PrimitiveType::Torus => {
                log::warn!("dropping unsupported primitive {:?} (no solver)", shape.primitive_type);
                continue;
            }
        };
        primitives.push(Primitive::new(kind, shape.ctm, shape.material.clone()));
    }

    let lights = data.lights.iter().map(Light::from_data).collect();

    let camera = Camera::new(
        data.camera.pos,
        data.camera.look,
        data.camera.up,
        aspect_ratio,
        data.camera.height_angle,
    );

    Ok(Scene { primitives, lights, camera, globals: data.globals })
}
