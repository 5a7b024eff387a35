//! Object-space closed-form intersection solvers for the implicit unit
//! primitives (cube, cone, cylinder, sphere), each centered at the
//! origin in its canonical frame.

use glam::Vec3;

use crate::ray::Ray;

/// Numerical tolerance below which a quadric's leading coefficient is
/// treated as zero (no intersection from that solver).
const EPS_QUADRIC: f32 = 1e-6;

/// An object-space hit: parametric distance, surface normal, and UV.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Distance along the ray. Always `>= 0`.
    pub t: f32,
    /// Object-space surface normal, not yet normalized by the caller.
    pub normal: Vec3,
    /// Texture coordinates at the hit point.
    pub uv: (f32, f32),
}

/// One of the four axis-aligned planes a cube face, or a disk cap,
/// lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn component(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }
}

/// Square-plane solver: a unit square face on an axis-aligned plane at
/// `pos` (`+-0.5`). UV mapping is per-face, mirrored on the negative side.
fn square_plane(ray: &Ray, axis: Axis, pos: f32) -> Option<Intersection> {
    let d_axis = axis.component(ray.dir);
    if d_axis.abs() < f32::EPSILON {
        return None; // ray parallel to the plane: no contribution
    }

    let p_axis = axis.component(ray.origin);
    let t = (pos - p_axis) / d_axis;
    if t < 0.0 {
        return None;
    }

    let pt = ray.point_at(t);
    let (a, b) = match axis {
        Axis::X => (pt.y, pt.z),
        Axis::Y => (pt.x, pt.z),
        Axis::Z => (pt.x, pt.y),
    };
    if !(-0.5..=0.5).contains(&a) || !(-0.5..=0.5).contains(&b) {
        return None;
    }

    let normal = axis.unit() * pos.signum();
    let uv = square_uv(axis, pos, pt);
    Some(Intersection { t, normal, uv })
}

/// Per-face UV mapping (spec.md §6). Mirrors on the negative side.
fn square_uv(axis: Axis, pos: f32, pt: Vec3) -> (f32, f32) {
    let positive = pos > 0.0;
    match axis {
        Axis::X => {
            if positive {
                (-pt.z + 0.5, pt.y + 0.5)
            } else {
                (pt.z + 0.5, pt.y + 0.5)
            }
        }
        Axis::Y => {
            if positive {
                (pt.x + 0.5, -pt.z + 0.5)
            } else {
                (pt.x + 0.5, pt.z + 0.5)
            }
        }
        Axis::Z => {
            if positive {
                (pt.x + 0.5, pt.y + 0.5)
            } else {
                (-pt.x + 0.5, pt.y + 0.5)
            }
        }
    }
}

/// Disk solver: a unit-diameter circle on the Y plane at `y`.
fn circle(ray: &Ray, y: f32) -> Option<Intersection> {
    if ray.dir.y.abs() < f32::EPSILON {
        return None;
    }
    let t = (y - ray.origin.y) / ray.dir.y;
    if t < 0.0 {
        return None;
    }
    let pt = ray.point_at(t);
    if pt.x * pt.x + pt.z * pt.z > 0.25 {
        return None;
    }
    let normal = Vec3::new(0.0, y.signum(), 0.0);
    Some(Intersection { t, normal, uv: cone_cylinder_uv(pt) })
}

/// Shared cone/cylinder body UV mapping: `theta = atan2(z, x)`.
fn cone_cylinder_uv(pt: Vec3) -> (f32, f32) {
    let theta = pt.z.atan2(pt.x);
    let u = if theta < 0.0 {
        -theta / std::f32::consts::TAU
    } else {
        1.0 - theta / std::f32::consts::TAU
    };
    (u, pt.y + 0.5)
}

/// Sphere surface point UV mapping; pole pixels pin `u` to 0.5.
fn sphere_uv(pt: Vec3) -> (f32, f32) {
    let v = (pt.y / 0.5).asin() / std::f32::consts::PI + 0.5;
    if v == 0.0 || v == 1.0 {
        (0.5, v)
    } else {
        let (u, _) = cone_cylinder_uv(pt);
        (u, v)
    }
}

/// Solve `a*t^2 + b*t + c = 0`, returning 0, 1, or 2 non-negative roots
/// in ascending order. `accept` filters each candidate root (height
/// bound for cone/cylinder bodies, always-true for spheres).
fn quadratic_roots(a: f32, b: f32, c: f32, accept: impl Fn(f32) -> bool) -> Vec<f32> {
    if a.abs() < EPS_QUADRIC {
        return Vec::new();
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Vec::new();
    }
    let sqrt_d = discriminant.sqrt();
    let t1 = (-b + sqrt_d) / (2.0 * a);
    let mut roots = Vec::with_capacity(2);
    if t1 >= 0.0 && accept(t1) {
        roots.push(t1);
    }
    if discriminant > 0.0 {
        let t2 = (-b - sqrt_d) / (2.0 * a);
        if t2 >= 0.0 && accept(t2) {
            roots.push(t2);
        }
    }
    roots
}

fn sphere_body(ray: &Ray) -> Vec<Intersection> {
    let p = ray.origin;
    let d = ray.dir;
    let a = d.dot(d);
    let b = 2.0 * p.dot(d);
    let c = p.dot(p) - 0.25;
    quadratic_roots(a, b, c, |_| true)
        .into_iter()
        .map(|t| {
            let pt = ray.point_at(t);
            Intersection { t, normal: 2.0 * pt, uv: sphere_uv(pt) }
        })
        .collect()
}

fn cylinder_body(ray: &Ray) -> Vec<Intersection> {
    let p = ray.origin;
    let d = ray.dir;
    let a = d.x * d.x + d.z * d.z;
    let b = 2.0 * (p.x * d.x + p.z * d.z);
    let c = p.x * p.x + p.z * p.z - 0.25;
    let in_height = |t: f32| {
        let y = p.y + t * d.y;
        y > -0.5 && y < 0.5
    };
    quadratic_roots(a, b, c, in_height)
        .into_iter()
        .map(|t| {
            let pt = ray.point_at(t);
            let normal = Vec3::new(2.0 * pt.x, 0.0, 2.0 * pt.z);
            Intersection { t, normal, uv: cone_cylinder_uv(pt) }
        })
        .collect()
}

fn cone_body(ray: &Ray) -> Vec<Intersection> {
    let p = ray.origin;
    let d = ray.dir;
    let a = d.x * d.x + d.z * d.z - d.y * d.y / 4.0;
    let b = 2.0 * p.x * d.x + 2.0 * p.z * d.z + d.y / 4.0 - (p.y * d.y) / 2.0;
    let c = p.x * p.x + p.z * p.z + p.y / 4.0 - p.y * p.y / 4.0 - 1.0 / 16.0;
    let in_height = |t: f32| {
        let y = p.y + t * d.y;
        y > -0.5 && y <= 0.5
    };
    quadratic_roots(a, b, c, in_height)
        .into_iter()
        .map(|t| {
            let pt = ray.point_at(t);
            let normal = Vec3::new(2.0 * pt.x, -(2.0 * pt.y - 1.0) / 4.0, 2.0 * pt.z);
            Intersection { t, normal, uv: cone_cylinder_uv(pt) }
        })
        .collect()
}

/// The set of object-space solvers composing one primitive kind, and
/// the closest-hit reduction over them.
pub trait SolverSet {
    /// All intersections this shape's solvers produce for `ray`.
    fn intersections(&self, ray: &Ray) -> Vec<Intersection>;

    /// The closest valid intersection, if any.
    fn closest(&self, ray: &Ray) -> Option<Intersection> {
        self.intersections(ray)
            .into_iter()
            .min_by(|a, b| a.t.partial_cmp(&b.t).unwrap_or(std::cmp::Ordering::Equal))
    }
}

/// Six square faces.
pub struct Cube;
impl SolverSet for Cube {
    fn intersections(&self, ray: &Ray) -> Vec<Intersection> {
        [
            square_plane(ray, Axis::Z, 0.5),
            square_plane(ray, Axis::Z, -0.5),
            square_plane(ray, Axis::Y, 0.5),
            square_plane(ray, Axis::Y, -0.5),
            square_plane(ray, Axis::X, 0.5),
            square_plane(ray, Axis::X, -0.5),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Cone body plus its base cap.
pub struct Cone;
impl SolverSet for Cone {
    fn intersections(&self, ray: &Ray) -> Vec<Intersection> {
        let mut hits = cone_body(ray);
        hits.extend(circle(ray, -0.5));
        hits
    }
}

/// Cylinder body plus both caps.
pub struct Cylinder;
impl SolverSet for Cylinder {
    fn intersections(&self, ray: &Ray) -> Vec<Intersection> {
        let mut hits = cylinder_body(ray);
        hits.extend(circle(ray, -0.5));
        hits.extend(circle(ray, 0.5));
        hits
    }
}

/// Sphere body only.
pub struct Sphere;
impl SolverSet for Sphere {
    fn intersections(&self, ray: &Ray) -> Vec<Intersection> {
        sphere_body(ray)
    }
}
