//! World/object-space ray representation and affine transforms.

use glam::{Mat4, Vec3};

/// A ray with an origin and a direction. The direction is not required
/// to stay unit length; callers that need world-space `t` values
/// comparable across spaces must not renormalize after transforming.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin of the ray.
    pub origin: Vec3,
    /// Direction of the ray. Never zero-length by construction.
    pub dir: Vec3,
}

impl Ray {
    /// Build a new ray. Panics in debug builds only via `debug_assert`
    /// if `dir` is degenerate; release builds treat it as caller error.
    #[must_use]
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        debug_assert!(dir.length_squared() > 0.0, "ray direction must be non-zero");
        Self { origin, dir }
    }

    /// Point reached at parameter `t`: `origin + t * dir`.
    #[must_use]
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }

    /// Transform this ray by a 4x4 affine matrix. Position transforms as
    /// `(x, y, z, 1)`, direction as `(x, y, z, 0)`.
    ///
    /// `normalize_dir` must be `false` when moving a world-space ray
    /// into object space, so that `t` stays comparable to the world
    /// ray's parameterization.
    #[must_use]
    pub fn transform(&self, m: Mat4, normalize_dir: bool) -> Self {
        let origin = m.transform_point3(self.origin);
        let mut dir = m.transform_vector3(self.dir);
        if normalize_dir {
            dir = dir.normalize();
        }
        Self { origin, dir }
    }

    /// Whether the ray's direction is degenerate (zero length). A
    /// pathological transform (e.g. a singular CTM) can produce one of
    /// these; callers treat it as a guaranteed miss rather than a panic.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.dir.length_squared() <= f32::EPSILON
    }
}
