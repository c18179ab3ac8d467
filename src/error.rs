//! Error types for scene construction and image output.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Malformed mesh handed to [`Scene::commit`](crate::primitives::scene::Scene::commit).
#[derive(Error, Debug)]
pub enum GeometryError {
    /// Mesh has no triangles.
    #[error("mesh is empty")]
    EmptyMesh,

    /// A triangle references a vertex that does not exist.
    #[error("triangle {triangle} references vertex {index} but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },
}

/// The framebuffer could not be persisted.
#[derive(Error, Debug)]
pub enum WriteError {
    /// The PNG encoder rejected the buffer or failed while writing.
    #[error("failed to encode {}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Moving the finished file into place failed.
    #[error("failed to write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
