use crate::primitives::aabb::AABB;
use crate::primitives::tri_mesh::Vertex;

/// Three indices into a mesh's vertex list. Winding is `v0 -> v1 -> v2`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Triangle {
    pub v0: u32,
    pub v1: u32,
    pub v2: u32,
}

impl Triangle {
    pub fn new(v0: u32, v1: u32, v2: u32) -> Self {
        Self { v0, v1, v2 }
    }

    pub fn indices(&self) -> [u32; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Resolves the indices against `vertices`, `None` if any is out of range.
    pub fn corners(&self, vertices: &[Vertex]) -> Option<[Vertex; 3]> {
        Some([
            *vertices.get(self.v0 as usize)?,
            *vertices.get(self.v1 as usize)?,
            *vertices.get(self.v2 as usize)?,
        ])
    }

    pub fn bounding_box(&self, vertices: &[Vertex]) -> Option<AABB> {
        self.corners(vertices).map(|corners| AABB::from_points(&corners))
    }
}
