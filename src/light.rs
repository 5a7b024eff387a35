//! Light sampling: direction, color, and shadow visibility at a hit
//! point, for each of the three supported light kinds.

use glam::{Vec3, Vec4};

use crate::primitive::Primitive;
use crate::ray::Ray;
use crate::scene::{LightData, LightKind};

/// Shadow-ray bias along the surface normal/light direction, large
/// enough to clear float error on the surface that cast it but small
/// enough not to visibly shift the shadow boundary.
const SHADOW_BIAS: f32 = 0.001;

/// A light placed in world space, ready to be sampled against a hit
/// point during shading.
#[derive(Debug, Clone, Copy)]
pub enum Light {
    /// Parallel rays along a fixed direction, no attenuation.
    Directional {
        /// Direction the light travels (light-to-surface).
        dir: Vec3,
        /// Light color.
        color: Vec4,
    },
    /// Omnidirectional point source with inverse-square-ish
    /// attenuation.
    Point {
        /// World-space position.
        pos: Vec3,
        /// Attenuation coefficients `(c0, c1, c2)`.
        function: Vec3,
        /// Light color.
        color: Vec4,
    },
    /// Point source restricted to a cone, with a cubic falloff in the
    /// penumbra band between the inner and outer angle.
    Spot {
        /// World-space position.
        pos: Vec3,
        /// Cone axis direction.
        dir: Vec3,
        /// Outer cone half-angle, radians.
        outer_angle: f32,
        /// Penumbra width, radians. `inner_angle = outer_angle - penumbra`.
        penumbra: f32,
        /// Attenuation coefficients `(c0, c1, c2)`.
        function: Vec3,
        /// Light color.
        color: Vec4,
    },
}

/// The result of sampling a light at a hit point: the direction from
/// the light to the surface, the (possibly attenuated) color, and
/// whether the light is unoccluded.
pub struct LightSample {
    /// Unit direction from the light toward the surface point.
    pub light_to_point: Vec3,
    /// Light color, after attenuation/falloff.
    pub color: Vec4,
    /// Whether the light is visible (unoccluded, and inside the spot
    /// cone if applicable).
    pub visible: bool,
}

fn attenuate(function: Vec3, distance: f32) -> f32 {
    (1.0 / (function.z * distance * distance + function.y * distance + function.x)).min(1.0)
}

/// Whether any primitive intersects `ray` at all (directional shadow
/// check: the light is infinitely far, so any hit occludes it).
fn any_intersection(ray: &Ray, primitives: &[Primitive]) -> bool {
    primitives.iter().any(|p| p.closest_hit(ray).is_some())
}

/// Whether any primitive intersects `ray` strictly before `pos` along
/// the ray. Divides by the direction component of largest magnitude
/// rather than always component 0, so a shadow ray aimed along an
/// axis with a near-zero x-component doesn't divide by (near) zero.
fn any_intersection_before(ray: &Ray, primitives: &[Primitive], pos: Vec3) -> bool {
    let delta = pos - ray.origin;
    let (num, den) = if ray.dir.x.abs() >= ray.dir.y.abs() && ray.dir.x.abs() >= ray.dir.z.abs() {
        (delta.x, ray.dir.x)
    } else if ray.dir.y.abs() >= ray.dir.z.abs() {
        (delta.y, ray.dir.y)
    } else {
        (delta.z, ray.dir.z)
    };
    let pos_t = num / den;

    primitives.iter().any(|p| match p.closest_hit(ray) {
        Some(hit) => hit.t < pos_t,
        None => false,
    })
}

impl Light {
    /// Build a [`Light`] from its flattened scene-data description.
    #[must_use]
    pub fn from_data(data: &LightData) -> Self {
        match data.kind {
            LightKind::Directional => Light::Directional { dir: data.dir.normalize(), color: data.color },
            LightKind::Point => Light::Point { pos: data.pos, function: data.function, color: data.color },
            LightKind::Spot => Light::Spot {
                pos: data.pos,
                dir: data.dir.normalize(),
                outer_angle: data.angle,
                penumbra: data.penumbra,
                function: data.function,
                color: data.color,
            },
        }
    }

    /// Sample this light at `point`, computing direction, attenuated
    /// color, and (if `shadows_enabled`) occlusion against `primitives`.
    #[must_use]
    pub fn sample(&self, point: Vec3, primitives: &[Primitive], shadows_enabled: bool) -> LightSample {
        match *self {
            Light::Directional { dir, color } => {
                let intersect_to_light = -dir;
                let visible = !shadows_enabled || {
                    let ray = Ray::new(point + intersect_to_light * SHADOW_BIAS, intersect_to_light);
                    !any_intersection(&ray, primitives)
                };
                LightSample { light_to_point: dir, color, visible }
            }
            Light::Point { pos, function, color } => {
                let light_to_point = (point - pos).normalize();
                let intersect_to_light = -light_to_point;
                let att = attenuate(function, point.distance(pos));
                let visible = !shadows_enabled || {
                    let ray = Ray::new(point + intersect_to_light * SHADOW_BIAS, intersect_to_light);
                    !any_intersection_before(&ray, primitives, pos)
                };
                LightSample { light_to_point, color: att * color, visible }
            }
            Light::Spot { pos, dir, outer_angle, penumbra, function, color } => {
                let light_to_point = (point - pos).normalize();
                let intersect_to_light = -light_to_point;
                let inner_angle = outer_angle - penumbra;

                let visible = !shadows_enabled || {
                    let ray = Ray::new(point + intersect_to_light * SHADOW_BIAS, intersect_to_light);
                    !any_intersection_before(&ray, primitives, pos)
                };

                let angle = dir.dot(light_to_point).clamp(-1.0, 1.0).acos();
                let att = attenuate(function, point.distance(pos));

                let shaded = if angle <= inner_angle {
                    att * color
                } else if angle > outer_angle {
                    Vec4::ZERO
                } else {
                    let var = (angle - inner_angle) / penumbra;
                    let falloff = -2.0 * var.powi(3) + 3.0 * var.powi(2);
                    (1.0 - falloff) * att * color
                };

                LightSample { light_to_point, color: shaded, visible }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directional_light_has_no_attenuation() {
        let light = Light::Directional { dir: Vec3::new(0.0, -1.0, 0.0), color: Vec4::ONE };
        let sample = light.sample(Vec3::ZERO, &[], false);
        assert_eq!(sample.color, Vec4::ONE);
        assert!(sample.visible);
    }

    #[test]
    fn point_light_attenuates_with_distance() {
        let light = Light::Point { pos: Vec3::new(0.0, 0.0, 10.0), function: Vec3::new(1.0, 0.0, 1.0), color: Vec4::ONE };
        let near = light.sample(Vec3::new(0.0, 0.0, 9.0), &[], false);
        let far = light.sample(Vec3::new(0.0, 0.0, -10.0), &[], false);
        assert!(near.color.x > far.color.x);
    }

    #[test]
    fn spot_light_is_dark_outside_outer_cone() {
        let light = Light::Spot {
            pos: Vec3::ZERO,
            dir: Vec3::new(0.0, -1.0, 0.0),
            outer_angle: 0.2,
            penumbra: 0.05,
            function: Vec3::new(1.0, 0.0, 0.0),
            color: Vec4::ONE,
        };
        // point far to the side: angle between spot dir and light->point close to pi/2
        let sample = light.sample(Vec3::new(10.0, -1.0, 0.0), &[], false);
        assert_eq!(sample.color, Vec4::ZERO);
    }

    #[test]
    fn spot_light_is_full_strength_inside_inner_cone() {
        let light = Light::Spot {
            pos: Vec3::ZERO,
            dir: Vec3::new(0.0, -1.0, 0.0),
            outer_angle: 0.5,
            penumbra: 0.1,
            function: Vec3::new(1.0, 0.0, 0.0),
            color: Vec4::ONE,
        };
        let sample = light.sample(Vec3::new(0.0, -5.0, 0.0), &[], false);
        assert_eq!(sample.color, Vec4::ONE);
    }

    #[test]
    fn shadow_ray_occluded_by_primitive_makes_light_invisible() {
        use crate::primitive::{Primitive, ShapeKind};
        use crate::scene::Material;
        use glam::Mat4;

        let blocker = Primitive::new(ShapeKind::Sphere, Mat4::from_translation(Vec3::new(0.0, 2.0, 0.0)), Material::default());
        let light = Light::Directional { dir: Vec3::new(0.0, -1.0, 0.0), color: Vec4::ONE };
        let sample = light.sample(Vec3::ZERO, std::slice::from_ref(&blocker), true);
        assert!(!sample.visible);
    }
}
