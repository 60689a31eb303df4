//! Flat surface
//!
//! A straight line perpendicular to the optical axis (vertical in model coordinates). It is either limited to a
//! given half height around its anchor point or unbounded.

use super::{Surface, MIN_HIT_DISTANCE};
use crate::ray::Ray2;
use nalgebra::Point2;

#[derive(Debug, Clone, PartialEq)]
/// A flat surface with its normal collinear to the optical axis.
pub struct Plane {
    anchor: Point2<f64>,
    half_height: Option<f64>,
}
impl Plane {
    /// Create a new [`Plane`] through the given anchor point.
    ///
    /// If `half_height` is `None`, the plane extends infinitely in y direction.
    #[must_use]
    pub const fn new(anchor: Point2<f64>, half_height: Option<f64>) -> Self {
        Self {
            anchor,
            half_height,
        }
    }
    /// Returns the x position of this [`Plane`].
    #[must_use]
    pub fn x(&self) -> f64 {
        self.anchor.x
    }
}

impl Surface for Plane {
    fn intersect(&self, ray: &Ray2) -> Option<Point2<f64>> {
        let ray_position = ray.origin();
        let ray_direction = ray.direction();
        let distance_in_x_direction = self.anchor.x - ray_position.x;
        if ray_direction.x.abs() < f64::EPSILON {
            // ray parallel to the plane
            return None;
        }
        let length_in_ray_dir = distance_in_x_direction / ray_direction.x;
        if length_in_ray_dir <= MIN_HIT_DISTANCE {
            // Ray propagates away from the plane => no intersection
            return None;
        }
        let y = ray_direction.y.mul_add(length_in_ray_dir, ray_position.y);
        if let Some(half_height) = self.half_height {
            if (y - self.anchor.y).abs() > half_height {
                return None;
            }
        }
        Some(Point2::new(self.anchor.x, y))
    }
    fn name(&self) -> String {
        "plane".into()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use nalgebra::Vector2;

    #[test]
    fn new() {
        let p = Plane::new(Point2::new(3.0, 1.0), None);
        assert_eq!(p.x(), 3.0);
        assert_eq!(p.name(), "plane");
    }
    #[test]
    fn intersect_on_axis() {
        let s = Plane::new(Point2::new(10.0, 0.0), None);
        let ray = Ray2::new(Point2::new(0.0, 0.0), Vector2::x()).unwrap();
        assert_eq!(s.intersect(&ray), Some(Point2::new(10.0, 0.0)));
    }
    #[test]
    fn intersect_tilted() {
        let s = Plane::new(Point2::new(10.0, 0.0), None);
        let ray = Ray2::new(Point2::new(0.0, 0.0), Vector2::new(1.0, 1.0)).unwrap();
        let hit = s.intersect(&ray).unwrap();
        assert_abs_diff_eq!(hit.x, 10.0);
        assert_abs_diff_eq!(hit.y, 10.0, epsilon = 1e-12);
    }
    #[test]
    fn intersect_bounded() {
        let s = Plane::new(Point2::new(10.0, 0.0), Some(5.0));
        let ray = Ray2::new(Point2::new(0.0, 0.0), Vector2::new(1.0, 1.0)).unwrap();
        assert!(s.intersect(&ray).is_none());
        let ray = Ray2::new(Point2::new(0.0, 4.0), Vector2::x()).unwrap();
        assert!(s.intersect(&ray).is_some());
    }
    #[test]
    fn intersect_miss() {
        let s = Plane::new(Point2::new(10.0, 0.0), None);
        let ray = Ray2::new(Point2::new(0.0, 0.0), -Vector2::x()).unwrap();
        assert!(s.intersect(&ray).is_none());
        let ray = Ray2::new(Point2::new(0.0, 0.0), Vector2::y()).unwrap();
        assert!(s.intersect(&ray).is_none());
    }
}
