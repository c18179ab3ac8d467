use crate::primitives::tri_mesh::Vertex;

/// Axis-aligned bounding box, stored as per-axis minimum and maximum.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AABB {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl AABB {
    pub fn new(min: [f32; 3], max: [f32; 3]) -> AABB {
        AABB { min, max }
    }

    pub fn empty() -> Self {
        AABB {
            min: [f32::INFINITY; 3],
            max: [f32::NEG_INFINITY; 3],
        }
    }

    /// Smallest box containing all `points`.
    pub fn from_points(points: &[Vertex]) -> AABB {
        points.iter().fold(AABB::empty(), |aabb, p| aabb.grow([p.x, p.y, p.z]))
    }

    pub fn grow(&self, point: [f32; 3]) -> AABB {
        AABB {
            min: [
                self.min[0].min(point[0]),
                self.min[1].min(point[1]),
                self.min[2].min(point[2]),
            ],
            max: [
                self.max[0].max(point[0]),
                self.max[1].max(point[1]),
                self.max[2].max(point[2]),
            ],
        }
    }

    pub fn union(&self, other: &AABB) -> AABB {
        let min = [
            self.min[0].min(other.min[0]),
            self.min[1].min(other.min[1]),
            self.min[2].min(other.min[2]),
        ];
        let max = [
            self.max[0].max(other.max[0]),
            self.max[1].max(other.max[1]),
            self.max[2].max(other.max[2]),
        ];
        AABB { min, max }
    }

    pub fn centroid(&self) -> [f32; 3] {
        [
            0.5 * (self.min[0] + self.max[0]),
            0.5 * (self.min[1] + self.max[1]),
            0.5 * (self.min[2] + self.max[2]),
        ]
    }

    /// Grows every side by `scale` times the largest coordinate magnitude
    /// (at least 1), so the padding tracks f32 spacing at the box's position.
    pub fn padded(&self, scale: f32) -> AABB {
        let magnitude = self
            .min
            .iter()
            .chain(self.max.iter())
            .fold(1.0f32, |m, c| m.max(c.abs()));
        let pad = scale * magnitude;
        AABB {
            min: [self.min[0] - pad, self.min[1] - pad, self.min[2] - pad],
            max: [self.max[0] + pad, self.max[1] + pad, self.max[2] + pad],
        }
    }
}
