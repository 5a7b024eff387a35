//! Recursive ray tracing: closest-hit aggregation across primitives
//! plus the Whitted-style reflection recursion.

use glam::Vec4;

use crate::primitive::{MaterialIntersection, Primitive};
use crate::ray::Ray;
use crate::scene::Scene;
use crate::shading::phong;
use crate::texture::TextureCache;

/// Reflection recursion cutoff. Matches the bound used for the
/// scene's own shadow/reflection ray bias.
pub const MAX_DEPTH: u32 = 4;

/// Bias applied to recursive reflection ray origins, along the
/// reflected direction, to avoid immediate self-intersection.
const REFLECT_BIAS: f32 = 0.001;

/// Find the closest intersection across every primitive in the scene.
#[must_use]
pub fn closest_hit<'a>(ray: &Ray, primitives: &'a [Primitive]) -> Option<MaterialIntersection<'a>> {
    primitives
        .iter()
        .filter_map(|p| p.closest_hit(ray))
        .min_by(|a, b| a.t.partial_cmp(&b.t).unwrap_or(std::cmp::Ordering::Equal))
}

/// Feature toggles consulted by the tracer itself (shading/texture
/// flags live on the caller and are threaded through `phong`
/// separately via [`trace_ray`]'s arguments).
#[derive(Debug, Clone, Copy)]
pub struct TraceFlags {
    /// Whether shadow rays are cast.
    pub enable_shadow: bool,
    /// Whether mirror-reflective materials recurse.
    pub enable_reflection: bool,
    /// Whether diffuse texture maps are sampled.
    pub enable_texture_map: bool,
}

/// Trace a world-space ray through the scene, returning its
/// accumulated color. Rays that hit nothing return fully transparent
/// black, matching the rest of the framebuffer before shading.
#[must_use]
pub fn trace_ray(ray: &Ray, scene: &Scene, textures: &TextureCache, flags: TraceFlags, depth: u32) -> Vec4 {
    let Some(hit) = closest_hit(ray, &scene.primitives) else {
        return Vec4::ZERO;
    };

    let point = ray.point_at(hit.t);
    let local = phong(
        point,
        hit.normal,
        -ray.dir,
        hit.material,
        hit.uv,
        textures,
        &scene.lights,
        scene.globals,
        &scene.primitives,
        flags.enable_shadow,
        flags.enable_texture_map,
    );

    if !flags.enable_reflection || hit.material.c_reflective == Vec4::ZERO || depth == MAX_DEPTH {
        return local;
    }

    let reflected_dir = (ray.dir - 2.0 * ray.dir.dot(hit.normal) * hit.normal).normalize();
    let recursive_ray = Ray::new(point + reflected_dir * REFLECT_BIAS, reflected_dir);
    let reflected = scene.globals.ks * hit.material.c_reflective
        * trace_ray(&recursive_ray, scene, textures, flags, depth + 1);

    local + reflected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::primitive::ShapeKind;
    use crate::scene::{GlobalData, Material};
    use glam::{Mat4, Vec3};

    fn empty_scene() -> Scene {
        Scene {
            primitives: vec![],
            lights: vec![],
            camera: Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y, 1.0, 0.8),
            globals: GlobalData { ka: 0.1, kd: 0.5, ks: 0.5 },
        }
    }

    #[test]
    fn miss_returns_transparent_black() {
        let scene = empty_scene();
        let cache = TextureCache::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let flags = TraceFlags { enable_shadow: false, enable_reflection: false, enable_texture_map: false };
        assert_eq!(trace_ray(&ray, &scene, &cache, flags, 0), Vec4::ZERO);
    }

    #[test]
    fn non_reflective_hit_returns_local_phong_only() {
        let mut scene = empty_scene();
        let material = Material { c_ambient: Vec4::new(0.3, 0.3, 0.3, 1.0), ..Material::default() };
        scene.primitives.push(Primitive::new(ShapeKind::Sphere, Mat4::IDENTITY, material));
        let cache = TextureCache::new();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let flags = TraceFlags { enable_shadow: false, enable_reflection: false, enable_texture_map: false };
        let color = trace_ray(&ray, &scene, &cache, flags, 0);
        assert!(color.w > 0.0);
    }

    #[test]
    fn reflection_recursion_stops_at_max_depth() {
        let mut scene = empty_scene();
        let material = Material {
            c_reflective: Vec4::ONE,
            ..Material::default()
        };
        scene.primitives.push(Primitive::new(ShapeKind::Sphere, Mat4::IDENTITY, material));
        let cache = TextureCache::new();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let flags = TraceFlags { enable_shadow: false, enable_reflection: true, enable_texture_map: false };
        // depth == MAX_DEPTH short-circuits to local-only shading, never recursing further.
        let color = trace_ray(&ray, &scene, &cache, flags, MAX_DEPTH);
        assert!(color.w > 0.0);
    }
}
