use std::path::PathBuf;

use crate::error::GeometryError;
use crate::primitives::hit::Hit;
use crate::primitives::ray::Ray;
use crate::primitives::tri_mesh::TriMesh;
use crate::process::bvh::BVH;
use crate::process::intersect::{Intersector, LinearScan};

/// Which intersector a [`Scene`] builds on commit.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Accelerator {
    Linear,
    Bvh,
}

/// Settings for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub output: PathBuf,
    pub accelerator: Accelerator,
    pub parallel: bool,
}

impl RenderConfig {
    pub fn new(size: [u32; 2], output: impl Into<PathBuf>) -> Self {
        Self {
            width: size[0],
            height: size[1],
            output: output.into(),
            ..Self::default()
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            output: PathBuf::from("out.png"),
            accelerator: Accelerator::Bvh,
            parallel: true,
        }
    }
}

/// A committed mesh plus the intersector built for it.
///
/// The mesh is validated once in [`Scene::commit`] and cannot be changed
/// afterwards; a different mesh needs a new scene.
pub struct Scene {
    mesh: TriMesh,
    intersector: Box<dyn Intersector>,
}

impl Scene {
    pub fn commit(mesh: TriMesh, accelerator: Accelerator) -> Result<Scene, GeometryError> {
        mesh.validate()?;

        let intersector: Box<dyn Intersector> = match accelerator {
            Accelerator::Linear => Box::new(LinearScan),
            Accelerator::Bvh => Box::new(BVH::new(&mesh)),
        };

        log::info!(
            "Committed mesh with {} vertices and {} triangles ({} intersector)",
            mesh.vertex_count(),
            mesh.triangle_count(),
            intersector.name()
        );

        Ok(Scene { mesh, intersector })
    }

    pub fn mesh(&self) -> &TriMesh {
        &self.mesh
    }

    pub fn intersector_name(&self) -> &'static str {
        self.intersector.name()
    }

    /// Nearest hit along `ray`, if any.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        self.intersector.intersect(ray, &self.mesh)
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("mesh", &self.mesh)
            .field("intersector", &self.intersector.name())
            .finish()
    }
}
