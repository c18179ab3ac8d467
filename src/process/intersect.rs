use cgmath::InnerSpace;

use crate::primitives::hit::Hit;
use crate::primitives::ray::Ray;
use crate::primitives::tri_mesh::{TriMesh, Vertex};

/// Determinants below this magnitude mean the ray runs parallel to the
/// triangle's plane.
pub const EPSILON: f32 = 1e-7;

/// Resolves a ray against a mesh to its nearest hit.
///
/// Implementations must agree on the result: smallest `t` within
/// `[ray.t_near, ray.t_far]`, lowest triangle index on ties.
pub trait Intersector: Send + Sync {
    fn name(&self) -> &'static str;

    fn intersect(&self, ray: &Ray, mesh: &TriMesh) -> Option<Hit>;
}

/// Tests every triangle in index order.
#[derive(Debug, Default, Copy, Clone)]
pub struct LinearScan;

impl Intersector for LinearScan {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn intersect(&self, ray: &Ray, mesh: &TriMesh) -> Option<Hit> {
        (0..mesh.triangle_count())
            .filter_map(|index| hit_triangle(ray, mesh, index))
            .fold(None, |closest, hit| Some(hit.nearest(closest)))
    }
}

/// Nearest hit of `ray` against `mesh` by brute force.
pub fn intersect(ray: &Ray, mesh: &TriMesh) -> Option<Hit> {
    LinearScan.intersect(ray, mesh)
}

/// Tests `ray` against triangle `index` of `mesh`.
pub fn hit_triangle(ray: &Ray, mesh: &TriMesh, index: usize) -> Option<Hit> {
    let [a, b, c] = mesh.corners(index)?;
    moller_trumbore(ray, a, b, c).map(|(t, u, v)| Hit::new(index, t, u, v))
}

/// Möller–Trumbore ray/triangle test.
///
/// Returns `(t, u, v)` where `u` and `v` weight `b` and `c`. Edges are
/// inclusive, so a ray through a shared diagonal hits both triangles.
pub fn moller_trumbore(ray: &Ray, a: Vertex, b: Vertex, c: Vertex) -> Option<(f32, f32, f32)> {
    let edge1 = b - a;
    let edge2 = c - a;

    let pvec = ray.direction.cross(edge2);
    let det = edge1.dot(pvec);
    if det.abs() < EPSILON {
        return None;
    }
    let inv_det = 1.0 / det;

    let tvec = ray.origin - a;
    let u = tvec.dot(pvec) * inv_det;
    if u < 0.0 || u > 1.0 {
        return None;
    }

    let qvec = tvec.cross(edge1);
    let v = ray.direction.dot(qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge2.dot(qvec) * inv_det;
    if t < ray.t_near || t > ray.t_far {
        return None;
    }

    Some((t, u, v))
}
