//! Separable triangle-kernel post-process blur with edge-reflected
//! sampling.

use crate::color::{get_reflected, Rgba8};

fn triangle_value_at(x: f32, radius: f32) -> f32 {
    1.0 - (x / radius).abs()
}

fn fill_triangle_kernel(radius: i64) -> Vec<f32> {
    let radius_f = radius as f32;
    let mut kernel: Vec<f32> = (-radius..=radius).map(|x| triangle_value_at(x as f32, radius_f)).collect();
    let sum: f32 = kernel.iter().sum();
    let norm = 1.0 / sum;
    for v in &mut kernel {
        *v *= norm;
    }
    kernel
}

fn convolve_horizontal(data: &[Rgba8], width: i64, height: i64, kernel: &[f32]) -> Vec<Rgba8> {
    let last = kernel.len() as i64 - 1;
    let radius = kernel.len() as i64 / 2;
    let mut result = Vec::with_capacity(data.len());

    for row in 0..height {
        for col in 0..width {
            let mut acc = [0.0f32; 3];
            let mut kernel_index = last;
            for offset in -radius..=radius {
                let weight = kernel[kernel_index as usize];
                let pixel = get_reflected(data, row, col + offset, width, height);
                acc[0] += weight * f32::from(pixel.r);
                acc[1] += weight * f32::from(pixel.g);
                acc[2] += weight * f32::from(pixel.b);
                kernel_index -= 1;
            }
            result.push(Rgba8::new(acc[0] as u8, acc[1] as u8, acc[2] as u8, 255));
        }
    }
    result
}

fn convolve_vertical(data: &[Rgba8], width: i64, height: i64, kernel: &[f32]) -> Vec<Rgba8> {
    let last = kernel.len() as i64 - 1;
    let radius = kernel.len() as i64 / 2;
    let mut result = Vec::with_capacity(data.len());

    for row in 0..height {
        for col in 0..width {
            let mut acc = [0.0f32; 3];
            let mut kernel_index = last;
            for offset in -radius..=radius {
                let weight = kernel[kernel_index as usize];
                let pixel = get_reflected(data, row + offset, col, width, height);
                acc[0] += weight * f32::from(pixel.r);
                acc[1] += weight * f32::from(pixel.g);
                acc[2] += weight * f32::from(pixel.b);
                kernel_index -= 1;
            }
            result.push(Rgba8::new(acc[0] as u8, acc[1] as u8, acc[2] as u8, 255));
        }
    }
    result
}

/// Apply a radius-1 normalized triangle blur to a row-major RGBA8
/// framebuffer, convolving horizontally then vertically.
#[must_use]
pub fn apply_blur(image: &[Rgba8], width: u32, height: u32, radius: u32) -> Vec<Rgba8> {
    let kernel = fill_triangle_kernel(i64::from(radius));
    let width = i64::from(width);
    let height = i64::from(height);
    let horizontal = convolve_horizontal(image, width, height, &kernel);
    convolve_vertical(&horizontal, width, height, &kernel)
}
