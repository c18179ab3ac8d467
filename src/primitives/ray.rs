use cgmath::{Point3, Vector3};

use crate::primitives::aabb::AABB;

/// Parametric half-line `origin + t * direction` restricted to `[t_near, t_far]`.
///
/// The direction is not normalized, so `t` is measured in multiples of it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub direction: Vector3<f32>,
    pub t_near: f32,
    pub t_far: f32,
}

impl Ray {
    /// Ray over `[0, +inf)`.
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>) -> Self {
        Self::with_interval(origin, direction, 0.0, f32::INFINITY)
    }

    pub fn with_interval(origin: Point3<f32>, direction: Vector3<f32>, t_near: f32, t_far: f32) -> Self {
        Self {
            origin,
            direction,
            t_near,
            t_far,
        }
    }

    /// Slab test against `aabb`, clipped to `[t_near, t_max]`.
    ///
    /// Returns the entry parameter when the clipped segment touches the box.
    /// Both ends are inclusive and the exit is widened by the slab
    /// computation's rounding bound, so a box is never rejected by rounding
    /// alone. Zero direction components produce infinite reciprocals; NaN slabs
    /// are ignored by `f32::min`/`f32::max`.
    #[inline]
    pub fn intersect_aabb(&self, aabb: &AABB, t_max: f32) -> Option<f32> {
        let origin = [self.origin.x, self.origin.y, self.origin.z];
        let direction = [self.direction.x, self.direction.y, self.direction.z];

        let mut t_enter = self.t_near;
        let mut t_exit = t_max;

        for axis in 0..3 {
            let inv = 1.0 / direction[axis];
            let t0 = (aabb.min[axis] - origin[axis]) * inv;
            let t1 = (aabb.max[axis] - origin[axis]) * inv;
            t_enter = t_enter.max(t0.min(t1));
            t_exit = t_exit.min(t0.max(t1));
        }
        t_exit *= 1.0 + 2.0 * gamma(3);

        if t_enter <= t_exit {
            Some(t_enter)
        } else {
            None
        }
    }
}

/// Bound on the relative error of `n` chained f32 operations.
#[inline]
fn gamma(n: i32) -> f32 {
    let n_eps = n as f32 * f32::EPSILON * 0.5;
    n_eps / (1.0 - n_eps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_box() -> AABB {
        AABB::new([0.0, 0.0, 0.0], [1.0, 1.0, 1.0])
    }

    #[test]
    fn test_new_spans_forward_half_line() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(ray.t_near, 0.0);
        assert!(ray.t_far.is_infinite());
    }

    #[test]
    fn test_ray_aabb_hit() {
        let ray = Ray::new(Point3::new(-5.0, 0.5, 0.5), Vector3::new(1.0, 0.0, 0.0));
        let t = ray.intersect_aabb(&unit_box(), ray.t_far);
        assert_relative_eq!(t.unwrap(), 5.0);
    }

    #[test]
    fn test_ray_aabb_miss() {
        let ray = Ray::new(Point3::new(-5.0, 5.0, 5.0), Vector3::new(1.0, 0.0, 0.0));
        assert!(ray.intersect_aabb(&unit_box(), ray.t_far).is_none());
    }

    #[test]
    fn test_ray_aabb_behind() {
        let ray = Ray::new(Point3::new(-5.0, 0.5, 0.5), Vector3::new(-1.0, 0.0, 0.0));
        assert!(ray.intersect_aabb(&unit_box(), ray.t_far).is_none());
    }

    #[test]
    fn test_ray_aabb_clipped_by_t_max() {
        let ray = Ray::new(Point3::new(-5.0, 0.5, 0.5), Vector3::new(1.0, 0.0, 0.0));
        assert!(ray.intersect_aabb(&unit_box(), 4.0).is_none());
        assert!(ray.intersect_aabb(&unit_box(), 5.0).is_some());
    }

    #[test]
    fn test_ray_aabb_exit_within_rounding() {
        // Exit one ulp short of the entry still counts as touching.
        let aabb = AABB::new([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        let ray = Ray::new(Point3::new(-5.0, 0.5, 0.5), Vector3::new(1.0, 0.0, 0.0));
        let t_max = 5.0f32 - f32::EPSILON * 4.0;
        assert!(t_max < 5.0);
        assert!(ray.intersect_aabb(&aabb, t_max).is_some());
    }

    #[test]
    fn test_ray_aabb_flat_box() {
        // Boxes around axis-aligned triangles have zero thickness on one axis.
        let flat = AABB::new([-1.0, -1.0, -1.0], [1.0, 1.0, -1.0]);
        let ray = Ray::new(Point3::new(0.0, 0.0, -3.5), Vector3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(ray.intersect_aabb(&flat, ray.t_far).unwrap(), 2.5);
    }
}
