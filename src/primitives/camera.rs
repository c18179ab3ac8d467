use cgmath::{Point3, Vector3};

use crate::primitives::ray::Ray;

/// Fixed-origin camera looking down `+z`.
///
/// Every pixel shares the origin; only the direction varies, offset from the
/// image center by `1 / scale` per pixel with `z` held at 1.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub origin: Point3<f32>,
    pub scale: f32,
}

impl Camera {
    pub const ORIGIN: [f32; 3] = [0.0, 0.0, -3.5];
    pub const SCALE: f32 = 256.0;

    pub fn ray_for_pixel(&self, x: u32, y: u32, width: u32, height: u32) -> Ray {
        let dx = (x as f32 - width as f32 * 0.5) / self.scale;
        let dy = (y as f32 - height as f32 * 0.5) / self.scale;
        Ray::new(self.origin, Vector3::new(dx, dy, 1.0))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Camera {
            origin: Point3::from(Camera::ORIGIN),
            scale: Camera::SCALE,
        }
    }
}

/// Ray through pixel `(x, y)` from the default camera.
pub fn generate_ray(x: u32, y: u32, width: u32, height: u32) -> Ray {
    Camera::default().ray_for_pixel(x, y, width, height)
}
