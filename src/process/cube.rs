use cgmath::Point3;

use crate::primitives::tri_mesh::TriMesh;
use crate::primitives::triangle::Triangle;

/// Triangles of the unit cube, two per face sharing a diagonal.
const CUBE_TRIANGLES: [[u32; 3]; 12] = [
    // left (x = -1)
    [0, 1, 2],
    [1, 3, 2],
    // right (x = +1)
    [4, 6, 5],
    [5, 6, 7],
    // bottom (y = -1)
    [0, 4, 1],
    [1, 4, 5],
    // top (y = +1)
    [2, 3, 6],
    [3, 7, 6],
    // front (z = -1)
    [0, 2, 4],
    [2, 6, 4],
    // back (z = +1)
    [1, 5, 3],
    [3, 5, 7],
];

/// Cube centered at the origin with half-extent 1.
///
/// Vertex `i` sits at `(±1, ±1, ±1)` with bit 2 of `i` selecting `+x`, bit 1
/// `+y` and bit 0 `+z`.
pub fn build_cube_mesh() -> TriMesh {
    let sign = |bit: u32| -> f32 { if bit != 0 { 1.0 } else { -1.0 } };
    let vertices = (0..8u32)
        .map(|i| Point3::new(sign(i & 4), sign(i & 2), sign(i & 1)))
        .collect();
    let triangles = CUBE_TRIANGLES
        .iter()
        .map(|&[v0, v1, v2]| Triangle::new(v0, v1, v2))
        .collect();

    TriMesh::new(vertices, triangles)
}
