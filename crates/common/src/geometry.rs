use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Relative tolerance for parallel tests. A direction component is treated as
/// parallel to a plane or slab when it is below this fraction of the
/// direction's length, so the test does not depend on how the ray is scaled.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// A half-line starting at `origin` and extending along `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point at parametric distance `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    fn parallel_tolerance(&self) -> f32 {
        PARALLEL_EPSILON * self.direction.length()
    }

    /// Parametric distance to `plane`, or `None` when the ray is parallel to
    /// the plane or the plane lies behind the origin.
    pub fn intersect_plane(&self, plane: &Plane) -> Option<f32> {
        let denom = plane.normal.dot(self.direction);
        if denom.abs() <= self.parallel_tolerance() {
            return None;
        }
        let t = (plane.d - plane.normal.dot(self.origin)) / denom;
        (t.is_finite() && t >= 0.0).then_some(t)
    }

    /// Slab test against `aabb`.
    ///
    /// Returns the entry distance, `Some(0.0)` when the origin is already inside
    /// the box, or `None` when the ray misses it.
    pub fn intersect_aabb(&self, aabb: &Aabb) -> Option<f32> {
        let mut t_near = 0.0_f32;
        let mut t_far = f32::INFINITY;
        let tolerance = self.parallel_tolerance();

        for axis in 0..3 {
            let origin = self.origin[axis];
            let dir = self.direction[axis];
            let (lo, hi) = (aabb.min[axis], aabb.max[axis]);

            if dir.abs() <= tolerance {
                if origin < lo || origin > hi {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / dir;
            let (t0, t1) = {
                let a = (lo - origin) * inv;
                let b = (hi - origin) * inv;
                if a <= b { (a, b) } else { (b, a) }
            };
            t_near = t_near.max(t0);
            t_far = t_far.min(t1);
            if t_near > t_far {
                return None;
            }
        }

        Some(t_near)
    }
}

/// An infinite plane `normal · p = d`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub normal: Vec3,
    pub d: f32,
}

impl Plane {
    /// Plane through `point` with the given normal. The normal is normalized.
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        let normal = normal.normalize();
        Self {
            normal,
            d: normal.dot(point),
        }
    }

    /// Signed distance from the plane; positive on the side the normal points to.
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) - self.d
    }
}

/// Axis-aligned bounding box with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        assert!(
            min.cmple(max).all(),
            "aabb min {min} must not exceed max {max}"
        );
        Self { min, max }
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Aabb {
        Aabb::new(Vec3::ZERO, Vec3::ONE)
    }

    #[test]
    fn ray_hits_plane_in_front() {
        let plane = Plane::from_point_normal(Vec3::ZERO, Vec3::Y);
        let ray = Ray::new(Vec3::new(0.5, 3.0, 0.5), Vec3::NEG_Y);
        assert_eq!(ray.intersect_plane(&plane), Some(3.0));
    }

    #[test]
    fn ray_hits_plane_from_behind_normal() {
        // Planes are two-sided for intersection purposes.
        let plane = Plane::from_point_normal(Vec3::ZERO, Vec3::Y);
        let ray = Ray::new(Vec3::new(0.0, -2.0, 0.0), Vec3::Y);
        assert_eq!(ray.intersect_plane(&plane), Some(2.0));
    }

    #[test]
    fn ray_misses_plane_behind_origin() {
        let plane = Plane::from_point_normal(Vec3::ZERO, Vec3::Y);
        let ray = Ray::new(Vec3::new(0.0, 3.0, 0.0), Vec3::Y);
        assert_eq!(ray.intersect_plane(&plane), None);
    }

    #[test]
    fn ray_parallel_to_plane_misses() {
        let plane = Plane::from_point_normal(Vec3::ZERO, Vec3::Y);
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);
        assert_eq!(ray.intersect_plane(&plane), None);
    }

    #[test]
    fn ray_starting_on_plane_hits_at_zero() {
        let plane = Plane::from_point_normal(Vec3::ZERO, Vec3::Y);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Y);
        assert_eq!(ray.intersect_plane(&plane), Some(0.0));
    }

    #[test]
    fn plane_distance_is_parametric() {
        let plane = Plane::from_point_normal(Vec3::ZERO, Vec3::Y);
        let ray = Ray::new(Vec3::new(0.0, 4.0, 0.0), Vec3::new(0.0, -2.0, 0.0));
        assert_eq!(ray.intersect_plane(&plane), Some(2.0));
    }

    #[test]
    fn short_direction_is_not_treated_as_parallel() {
        let plane = Plane::from_point_normal(Vec3::ZERO, Vec3::Y);
        let ray = Ray::new(Vec3::new(0.5, 5.0, 0.5), Vec3::new(0.0, -1e-7, 0.0));
        let t = ray.intersect_plane(&plane).unwrap();
        assert!((t - 5e7).abs() / 5e7 < 1e-5, "t = {t}");
        assert!(ray.at(t).y.abs() < 1e-3);

        let tall = Aabb::new(Vec3::ZERO, Vec3::new(1.0, 2.0, 1.0));
        let entry = ray.intersect_aabb(&tall).unwrap();
        assert!((entry - 3e7).abs() / 3e7 < 1e-5, "entry = {entry}");
    }

    #[test]
    fn zero_direction_never_hits_a_plane() {
        let plane = Plane::from_point_normal(Vec3::ZERO, Vec3::Y);
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO);
        assert_eq!(ray.intersect_plane(&plane), None);
        assert_eq!(ray.intersect_aabb(&unit_box()), Some(0.0));
        assert_eq!(Ray::new(Vec3::splat(3.0), Vec3::ZERO).intersect_aabb(&unit_box()), None);
    }

    #[test]
    fn plane_signed_distance() {
        let plane = Plane::from_point_normal(Vec3::new(1.0, 0.0, 0.0), Vec3::NEG_X);
        assert_eq!(plane.signed_distance(Vec3::new(0.5, 0.0, 0.0)), 0.5);
        assert_eq!(plane.signed_distance(Vec3::new(2.0, 0.0, 0.0)), -1.0);
    }

    #[test]
    fn ray_enters_box() {
        let ray = Ray::new(Vec3::new(-1.0, 0.5, 0.5), Vec3::X);
        assert_eq!(ray.intersect_aabb(&unit_box()), Some(1.0));
    }

    #[test]
    fn ray_inside_box_hits_at_zero() {
        let ray = Ray::new(Vec3::splat(0.5), Vec3::new(0.3, -1.0, 0.2));
        assert_eq!(ray.intersect_aabb(&unit_box()), Some(0.0));
    }

    #[test]
    fn ray_pointing_away_misses_box() {
        let ray = Ray::new(Vec3::new(-1.0, 0.5, 0.5), Vec3::NEG_X);
        assert_eq!(ray.intersect_aabb(&unit_box()), None);
    }

    #[test]
    fn axis_parallel_ray_outside_slab_misses_box() {
        let ray = Ray::new(Vec3::new(-1.0, 2.0, 0.5), Vec3::X);
        assert_eq!(ray.intersect_aabb(&unit_box()), None);
    }

    #[test]
    fn diagonal_ray_passing_beside_box_misses() {
        let ray = Ray::new(Vec3::new(-1.0, 0.5, 3.0), Vec3::new(1.0, 0.0, 0.1));
        assert_eq!(ray.intersect_aabb(&unit_box()), None);
    }

    #[test]
    fn aabb_contains_and_center() {
        let b = Aabb::new(Vec3::new(1.0, 0.0, 1.0), Vec3::new(2.0, 2.0, 2.0));
        assert!(b.contains(Vec3::new(1.5, 1.0, 1.5)));
        assert!(b.contains(b.max));
        assert!(!b.contains(Vec3::new(0.5, 1.0, 1.5)));
        assert_eq!(b.center(), Vec3::new(1.5, 1.0, 1.5));
        assert_eq!(b.size(), Vec3::new(1.0, 2.0, 1.0));
    }

    #[test]
    #[should_panic(expected = "must not exceed")]
    fn inverted_aabb_panics() {
        Aabb::new(Vec3::ONE, Vec3::ZERO);
    }
}
