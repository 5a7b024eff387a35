//! Phong illumination model.

use glam::{Vec3, Vec4};

use crate::light::Light;
use crate::primitive::Primitive;
use crate::scene::{GlobalData, Material};
use crate::texture::{self, TextureCache};

fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    (incident - 2.0 * incident.dot(normal) * normal).normalize()
}

/// Evaluate Phong shading at a hit point.
///
/// `normal` and `direction_to_camera` are normalized internally, so
/// callers don't need to pre-normalize.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn phong(
    position: Vec3,
    normal: Vec3,
    direction_to_camera: Vec3,
    material: &Material,
    uv: (f32, f32),
    textures: &TextureCache,
    lights: &[Light],
    globals: GlobalData,
    primitives: &[Primitive],
    enable_shadow: bool,
    enable_texture: bool,
) -> Vec4 {
    let normal = normal.normalize();
    let direction_to_camera = direction_to_camera.normalize();

    let mut illumination = globals.ka * material.c_ambient;
    illumination.w = 1.0;

    for light in lights {
        let sample = light.sample(position, primitives, enable_shadow);
        if !sample.visible {
            continue;
        }

        let intersect_to_light = -sample.light_to_point;
        let diffuse_angle = normal.dot(intersect_to_light).max(0.0);

        let diffuse_coef = match (&material.texture_map, enable_texture) {
            (Some(map), true) if map.used => {
                let tex_color = textures
                    .get(&map.filename)
                    .map_or(Vec4::ZERO, |tex| texture::sample(uv, tex, map));
                (1.0 - material.blend) * globals.kd * material.c_diffuse + material.blend * tex_color
            }
            _ => globals.kd * material.c_diffuse,
        };
        let diffuse = diffuse_angle * diffuse_coef;

        let mirror_dir = reflect(sample.light_to_point, normal);
        let spec_angle = mirror_dir.dot(direction_to_camera).max(0.0).powf(material.shininess);
        let specular = globals.ks * material.c_specular * spec_angle;

        illumination += sample.color * (diffuse + specular);
    }

    illumination
}
