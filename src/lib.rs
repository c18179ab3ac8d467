//! Casts one ray per pixel at a unit cube and writes a flat hit/miss image.
//!
//! [`run`] wires the stages together: [`build_cube_mesh`] -> [`Scene::commit`]
//! -> [`render`] -> [`write_png`].

pub mod error;
pub mod primitives;
pub mod process;

use anyhow::Context;

pub use error::{GeometryError, WriteError};
pub use primitives::camera::{generate_ray, Camera};
pub use primitives::color::{Color, Pixel};
pub use primitives::hit::Hit;
pub use primitives::pixel_buffer::PixelBuffer;
pub use primitives::ray::Ray;
pub use primitives::scene::{Accelerator, RenderConfig, Scene};
pub use primitives::tri_mesh::{TriMesh, Vertex};
pub use primitives::triangle::Triangle;
pub use process::bvh::BVH;
pub use process::cube::build_cube_mesh;
pub use process::intersect::{intersect, Intersector, LinearScan};
pub use process::output::write_png;
pub use process::render::{render, render_image, render_image_parallel, Renderer, Shader};

/// Renders the cube with `config` and writes the image.
pub fn run(config: &RenderConfig) -> anyhow::Result<()> {
    log::info!("Render started!");

    let scene = Scene::commit(build_cube_mesh(), config.accelerator).context("failed to commit cube mesh")?;
    let framebuffer = render(config, &scene);

    match write_png(&config.output, &framebuffer) {
        Ok(()) => {
            log::info!("Wrote file '{}' successfully.", config.output.display());
            Ok(())
        }
        Err(err) => {
            log::error!("Failed to write file '{}'.", config.output.display());
            Err(err.into())
        }
    }
}
