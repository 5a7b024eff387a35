//! World-space primitives: an object-space solver set wrapped with a
//! cumulative transformation matrix (CTM) and a material.

use glam::{Mat3, Mat4};

use crate::ray::Ray;
use crate::scene::Material;
use crate::solvers::{Cone, Cube, Cylinder, Intersection, Sphere, SolverSet};

/// Which object-space solver set a primitive dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Six square faces.
    Cube,
    /// Cone body plus base cap.
    Cone,
    /// Cylinder body plus both caps.
    Cylinder,
    /// Sphere body.
    Sphere,
}

impl ShapeKind {
    fn intersections(self, ray: &Ray) -> Vec<Intersection> {
        match self {
            ShapeKind::Cube => Cube.intersections(ray),
            ShapeKind::Cone => Cone.intersections(ray),
            ShapeKind::Cylinder => Cylinder.intersections(ray),
            ShapeKind::Sphere => Sphere.intersections(ray),
        }
    }
}

/// A world-space hit: intersection plus a borrowed reference to the
/// hit surface's material.
pub struct MaterialIntersection<'a> {
    /// World-space distance, normal, and UV.
    pub t: f32,
    /// Unit-length world-space normal.
    pub normal: glam::Vec3,
    /// Texture coordinates at the hit point.
    pub uv: (f32, f32),
    /// The material of the primitive that was hit.
    pub material: &'a Material,
}

/// One shape instance placed in world space by a CTM.
pub struct Primitive {
    /// Which solver set this instance dispatches to.
    pub shape: ShapeKind,
    /// Object-to-world cumulative transformation matrix.
    pub ctm: Mat4,
    /// World-to-object matrix, precomputed from `ctm`.
    pub inv_ctm: Mat4,
    /// `inverse(transpose(mat3(ctm)))`, for transforming normals.
    pub normal_mat: Mat3,
    /// Surface material.
    pub material: Material,
}

impl Primitive {
    /// Build a primitive from a shape kind, CTM, and material,
    /// precomputing the inverse CTM and normal matrix.
    #[must_use]
    pub fn new(shape: ShapeKind, ctm: Mat4, material: Material) -> Self {
        let inv_ctm = ctm.inverse();
        let normal_mat = Mat3::from_mat4(ctm).inverse().transpose();
        Self { shape, ctm, inv_ctm, normal_mat, material }
    }

    /// Intersect a world-space ray against this primitive, returning
    /// the closest hit transformed back into world space.
    #[must_use]
    pub fn closest_hit(&self, world_ray: &Ray) -> Option<MaterialIntersection<'_>> {
        if world_ray.is_degenerate() {
            return None;
        }
        // world -> object: must NOT renormalize, or t stops being
        // comparable to the world-space ray.
        let object_ray = world_ray.transform(self.inv_ctm, false);
        let hit = self.shape.intersections(&object_ray)
            .into_iter()
            .min_by(|a, b| a.t.partial_cmp(&b.t).unwrap_or(std::cmp::Ordering::Equal))?;

        let world_normal = (self.normal_mat * hit.normal).normalize();
        Some(MaterialIntersection {
            t: hit.t,
            normal: world_normal,
            uv: hit.uv,
            material: &self.material,
        })
    }
}
