use std::time::Instant;

use rayon::prelude::*;

use crate::primitives::camera::Camera;
use crate::primitives::color::{Color, Pixel};
use crate::primitives::hit::Hit;
use crate::primitives::pixel_buffer::PixelBuffer;
use crate::primitives::scene::{RenderConfig, Scene};

/// Binary hit/miss shading.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Shader {
    pub hit: Color,
    pub miss: Color,
}

impl Shader {
    pub fn shade(&self, hit: Option<&Hit>) -> Color {
        match hit {
            Some(_) => self.hit,
            None => self.miss,
        }
    }
}

impl Default for Shader {
    fn default() -> Self {
        Shader {
            hit: Color::GREEN,
            miss: Color::BLUE,
        }
    }
}

/// Camera and shader for turning a scene into a framebuffer.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Renderer {
    pub camera: Camera,
    pub shader: Shader,
}

impl Renderer {
    pub fn new(camera: Camera, shader: Shader) -> Self {
        Self { camera, shader }
    }

    pub fn render_pixel(&self, x: u32, y: u32, width: u32, height: u32, scene: &Scene) -> Pixel {
        let ray = self.camera.ray_for_pixel(x, y, width, height);
        let hit = scene.intersect(&ray);
        self.shader.shade(hit.as_ref()).to_pixel()
    }

    /// Renders in raster order on the calling thread.
    pub fn render(&self, width: u32, height: u32, scene: &Scene) -> PixelBuffer {
        let mut buffer = PixelBuffer::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let pixel = self.render_pixel(x, y, width, height, scene);
                buffer.set(x, y, pixel);
            }
        }
        buffer
    }

    /// Renders rows on the rayon pool. Each worker owns a disjoint row slice.
    pub fn render_parallel(&self, width: u32, height: u32, scene: &Scene) -> PixelBuffer {
        let mut buffer = PixelBuffer::new(width, height);
        if buffer.is_empty() {
            return buffer;
        }

        buffer
            .pixels_mut()
            .par_chunks_mut(width as usize)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, pixel) in row.iter_mut().enumerate() {
                    *pixel = self.render_pixel(x as u32, y as u32, width, height, scene);
                }
            });
        buffer
    }
}

/// Single-threaded render with the default camera and shader.
pub fn render_image(width: u32, height: u32, scene: &Scene) -> PixelBuffer {
    Renderer::default().render(width, height, scene)
}

/// Parallel render with the default camera and shader.
pub fn render_image_parallel(width: u32, height: u32, scene: &Scene) -> PixelBuffer {
    Renderer::default().render_parallel(width, height, scene)
}

/// Renders according to `config`, logging how long it took.
pub fn render(config: &RenderConfig, scene: &Scene) -> PixelBuffer {
    if config.width == 0 || config.height == 0 {
        log::warn!("Rendering an empty {}x{} image", config.width, config.height);
    }
    let start = Instant::now();
    let buffer = if config.parallel {
        render_image_parallel(config.width, config.height, scene)
    } else {
        render_image(config.width, config.height, scene)
    };
    log::info!(
        "Rendered {}x{} ({}, {}) in {:?}",
        config.width,
        config.height,
        if config.parallel { "parallel" } else { "serial" },
        scene.intersector_name(),
        start.elapsed()
    );
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::camera::generate_ray;
    use crate::primitives::scene::Accelerator;
    use crate::process::cube::build_cube_mesh;

    const GREEN: Pixel = Pixel::new(0, 255, 0);
    const BLUE: Pixel = Pixel::new(0, 0, 255);

    fn cube_scene(accelerator: Accelerator) -> Scene {
        Scene::commit(build_cube_mesh(), accelerator).unwrap()
    }

    #[test]
    fn test_shader() {
        let shader = Shader::default();
        let hit = Hit::new(0, 1.0, 0.0, 0.0);
        assert_eq!(shader.shade(Some(&hit)), Color::GREEN);
        assert_eq!(shader.shade(None), Color::BLUE);
    }

    #[test]
    fn test_center_and_corner() {
        let buffer = render_image(256, 256, &cube_scene(Accelerator::Linear));
        assert_eq!(buffer.get(128, 128), Some(GREEN));
        assert_eq!(buffer.get(0, 0), Some(BLUE));
        assert_eq!(buffer.get(255, 255), Some(BLUE));
    }

    #[test]
    fn test_silhouette() {
        // The front face at z = -1 is 2.5 direction lengths from the camera.
        let scene = cube_scene(Accelerator::Bvh);
        let buffer = render_image(256, 256, &scene);
        for y in 0..256 {
            for x in 0..256 {
                let ray = generate_ray(x, y, 256, 256);
                let inside = (ray.direction.x * 2.5).abs() <= 1.0 && (ray.direction.y * 2.5).abs() <= 1.0;
                let expected = if inside { GREEN } else { BLUE };
                assert_eq!(buffer.get(x, y), Some(expected), "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_parallel_matches_serial() {
        let scene = cube_scene(Accelerator::Bvh);
        assert_eq!(render_image(200, 150, &scene), render_image_parallel(200, 150, &scene));
    }

    #[test]
    fn test_accelerators_agree() {
        let linear = render_image(256, 256, &cube_scene(Accelerator::Linear));
        let bvh = render_image(256, 256, &cube_scene(Accelerator::Bvh));
        assert_eq!(linear.as_bytes(), bvh.as_bytes());
    }

    #[test]
    fn test_idempotent() {
        let scene = cube_scene(Accelerator::Bvh);
        assert_eq!(render_image(256, 256, &scene), render_image(256, 256, &scene));
    }

    #[test]
    fn test_zero_sized() {
        let scene = cube_scene(Accelerator::Linear);
        assert!(render_image(0, 0, &scene).is_empty());
        assert!(render_image_parallel(0, 10, &scene).is_empty());
        assert!(render_image_parallel(10, 0, &scene).is_empty());
    }

    #[test]
    fn test_render_zero_sized_config() {
        let scene = cube_scene(Accelerator::Bvh);
        for size in [[0, 0], [0, 16], [16, 0]].iter() {
            let buffer = render(&RenderConfig::new(*size, "unused.png"), &scene);
            assert!(buffer.is_empty());
            assert_eq!((buffer.width(), buffer.height()), (size[0], size[1]));
        }
    }

    #[test]
    fn test_custom_shader() {
        let renderer = Renderer::new(
            Camera::default(),
            Shader {
                hit: Color::new(1.0, 1.0, 1.0),
                miss: Color::BLACK,
            },
        );
        let buffer = renderer.render(256, 256, &cube_scene(Accelerator::Linear));
        assert_eq!(buffer.get(128, 128), Some(Pixel::new(255, 255, 255)));
        assert_eq!(buffer.get(0, 0), Some(Pixel::new(0, 0, 0)));
    }

    #[test]
    fn test_render_honors_config() {
        let scene = cube_scene(Accelerator::Bvh);
        let mut config = RenderConfig::new([32, 16], "unused.png");
        config.parallel = false;
        let serial = render(&config, &scene);
        config.parallel = true;
        let parallel = render(&config, &scene);
        assert_eq!((serial.width(), serial.height()), (32, 16));
        assert_eq!(serial, parallel);
    }
}
