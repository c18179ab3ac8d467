/// Nearest intersection between a ray and a mesh triangle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hit {
    /// Index of the triangle in its mesh.
    pub triangle: usize,
    /// Ray parameter of the hit point.
    pub t: f32,
    /// Barycentric weight of the triangle's second vertex.
    pub u: f32,
    /// Barycentric weight of the triangle's third vertex.
    pub v: f32,
}

impl Hit {
    pub fn new(triangle: usize, t: f32, u: f32, v: f32) -> Self {
        Hit { triangle, t, u, v }
    }

    /// Ordering used by every intersector: smaller `t` first, lower triangle
    /// index on ties.
    pub fn is_nearer_than(&self, other: &Hit) -> bool {
        self.t < other.t || (self.t == other.t && self.triangle < other.triangle)
    }

    /// Keeps whichever of `current` and `self` is nearer.
    pub fn nearest(self, current: Option<Hit>) -> Hit {
        match current {
            Some(best) if !self.is_nearer_than(&best) => best,
            _ => self,
        }
    }
}
