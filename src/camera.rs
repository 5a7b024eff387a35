//! View/inverse-view matrix construction and eye-ray generation.

use glam::{Mat4, Vec3, Vec4};

use crate::ray::Ray;

fn calculate_view_matrix(look: Vec3, up: Vec3, pos: Vec3) -> Mat4 {
    let w = (-look).normalize();
    let v = (up - up.dot(w) * w).normalize();
    let u = v.cross(w);

    let rotate = Mat4::from_cols(
        Vec4::new(u.x, v.x, w.x, 0.0),
        Vec4::new(u.y, v.y, w.y, 0.0),
        Vec4::new(u.z, v.z, w.z, 0.0),
        Vec4::new(0.0, 0.0, 0.0, 1.0),
    );
    let translate = Mat4::from_translation(-pos);
    rotate * translate
}

/// A pinhole camera: view/inverse-view matrices plus the parameters
/// needed to build eye rays for a given canvas size.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    view: Mat4,
    inverse_view: Mat4,
    aspect_ratio: f32,
    height_angle: f32,
}

impl Camera {
    /// Build a camera from scene parameters and the render target's
    /// aspect ratio.
    #[must_use]
    pub fn new(pos: Vec3, look: Vec3, up: Vec3, aspect_ratio: f32, height_angle: f32) -> Self {
        let view = calculate_view_matrix(look, up, pos);
        Self { view, inverse_view: view.inverse(), aspect_ratio, height_angle }
    }

    /// The camera-to-world transform.
    #[must_use]
    pub fn inverse_view_matrix(&self) -> Mat4 {
        self.inverse_view
    }

    /// The world-to-camera transform.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }

    /// Vertical field of view, in radians.
    #[must_use]
    pub fn height_angle(&self) -> f32 {
        self.height_angle
    }

    /// Generate a world-space eye ray for a canvas offset `(x, y)`,
    /// each already in `[-0.5, 0.5]` camera-plane units (see the pixel
    /// sampling in the scheduler for how `(col, row, sx, sy)` map to
    /// these).
    #[must_use]
    pub fn generate_ray(&self, x: f32, y: f32) -> Ray {
        let v = 2.0 * (self.height_angle / 2.0).tan();
        let u = v * self.aspect_ratio;
        let dir = Vec3::new(u * x, v * y, -1.0).normalize();
        let camera_ray = Ray::new(Vec3::ZERO, dir);
        camera_ray.transform(self.inverse_view, true)
    }
}
