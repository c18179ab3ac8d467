use cgmath::Point3;

use crate::error::GeometryError;
use crate::primitives::triangle::Triangle;

pub type Vertex = Point3<f32>;

/// Indexed triangle mesh. Read-only once handed to a [`Scene`](crate::primitives::scene::Scene).
#[derive(Debug, Clone, PartialEq)]
pub struct TriMesh {
    pub vertices: Vec<Vertex>,
    pub triangles: Vec<Triangle>,
}

impl TriMesh {
    pub fn new(vertices: Vec<Vertex>, triangles: Vec<Triangle>) -> Self {
        TriMesh { vertices, triangles }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// World-space corners of triangle `index`.
    pub fn corners(&self, index: usize) -> Option<[Vertex; 3]> {
        self.triangles.get(index)?.corners(&self.vertices)
    }

    /// Checks that the mesh has triangles and that every index is in range.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.triangles.is_empty() {
            return Err(GeometryError::EmptyMesh);
        }
        let vertex_count = self.vertices.len();
        for (triangle, tri) in self.triangles.iter().enumerate() {
            if let Some(&index) = tri.indices().iter().find(|&&i| i as usize >= vertex_count) {
                return Err(GeometryError::IndexOutOfRange {
                    triangle,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }
}
