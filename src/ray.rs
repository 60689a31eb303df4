#![warn(missing_docs)]
//! Module for handling 2D optical rays and the line segments they are drawn with.
//!
//! All coordinates in this module are plain model coordinates in centimeters. Use
//! [`LineSegment::start`] / [`LineSegment::end`] to get unit aware points.
use nalgebra::{Point2, Unit, Vector2};
use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

use crate::utils::cm_to_point;

/// A light ray, represented as a half-line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray2 {
    origin: Point2<f64>,
    direction: Unit<Vector2<f64>>,
}
impl Ray2 {
    /// Creates a new [`Ray2`].
    ///
    /// The direction vector is normalized. Returns `None` if the direction has zero length or is not finite.
    #[must_use]
    pub fn new(origin: Point2<f64>, direction: Vector2<f64>) -> Option<Self> {
        if !direction.iter().all(|c| c.is_finite()) {
            return None;
        }
        Unit::try_new(direction, f64::EPSILON).map(|direction| Self { origin, direction })
    }
    /// Create a ray starting at `origin` heading toward `target`.
    ///
    /// Returns `None` if both points coincide.
    #[must_use]
    pub fn towards(origin: Point2<f64>, target: Point2<f64>) -> Option<Self> {
        Self::new(origin, target - origin)
    }
    /// Returns the starting point of this [`Ray2`].
    #[must_use]
    pub const fn origin(&self) -> Point2<f64> {
        self.origin
    }
    /// Returns the (normalized) direction of this [`Ray2`].
    #[must_use]
    pub fn direction(&self) -> Vector2<f64> {
        self.direction.into_inner()
    }
    /// Get the point at distance `t` (can be negative) from the ray's origin
    #[must_use]
    pub fn at(&self, t: f64) -> Point2<f64> {
        self.origin + self.direction.as_ref() * t
    }
}

/// A straight line segment of a light ray path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    start: Point2<f64>,
    end: Point2<f64>,
}
impl LineSegment {
    /// Creates a new [`LineSegment`] from two points in model coordinates (cm).
    #[must_use]
    pub const fn new(start: Point2<f64>, end: Point2<f64>) -> Self {
        Self { start, end }
    }
    /// Returns the start point of this [`LineSegment`].
    #[must_use]
    pub fn start(&self) -> Point2<Length> {
        cm_to_point(&self.start)
    }
    /// Returns the end point of this [`LineSegment`].
    #[must_use]
    pub fn end(&self) -> Point2<Length> {
        cm_to_point(&self.end)
    }
    /// Returns the start point in model coordinates (cm).
    #[must_use]
    pub const fn start_cm(&self) -> Point2<f64> {
        self.start
    }
    /// Returns the end point in model coordinates (cm).
    #[must_use]
    pub const fn end_cm(&self) -> Point2<f64> {
        self.end
    }
    /// Returns the length of this [`LineSegment`] in cm.
    #[must_use]
    pub fn length_cm(&self) -> f64 {
        (self.end - self.start).norm()
    }
    /// Return a copy of this segment shortened to the given length, keeping the start point.
    ///
    /// Segments shorter than `length` are returned unchanged. A negative length yields a zero length segment.
    #[must_use]
    pub fn truncated(&self, length: f64) -> Self {
        let full_length = self.length_cm();
        if full_length <= length {
            return *self;
        }
        let length = length.max(0.0);
        let end = self.start + (self.end - self.start) * (length / full_length);
        Self::new(self.start, end)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use uom::si::length::centimeter;
    #[test]
    fn new() {
        assert!(Ray2::new(Point2::origin(), Vector2::zeros()).is_none());
        assert!(Ray2::new(Point2::origin(), Vector2::new(f64::NAN, 1.0)).is_none());
        let ray = Ray2::new(Point2::new(1.0, 2.0), Vector2::new(3.0, 4.0)).unwrap();
        assert_eq!(ray.origin(), Point2::new(1.0, 2.0));
        assert_relative_eq!(ray.direction().x, 0.6);
        assert_relative_eq!(ray.direction().y, 0.8);
    }
    #[test]
    fn towards() {
        assert!(Ray2::towards(Point2::new(1.0, 1.0), Point2::new(1.0, 1.0)).is_none());
        let ray = Ray2::towards(Point2::new(0.0, 0.0), Point2::new(0.0, -5.0)).unwrap();
        assert_relative_eq!(ray.direction().y, -1.0);
    }
    #[test]
    fn at() {
        let ray = Ray2::new(Point2::new(1.0, 0.0), Vector2::new(0.0, 2.0)).unwrap();
        assert_relative_eq!(ray.at(3.0).y, 3.0);
        assert_relative_eq!(ray.at(-1.0).y, -1.0);
    }
    #[test]
    fn segment() {
        let s = LineSegment::new(Point2::new(0.0, 0.0), Point2::new(30.0, 40.0));
        assert_relative_eq!(s.length_cm(), 50.0);
        assert_relative_eq!(s.end().y.get::<centimeter>(), 40.0);
    }
    #[test]
    fn truncated() {
        let s = LineSegment::new(Point2::new(0.0, 0.0), Point2::new(30.0, 40.0));
        assert_eq!(s.truncated(60.0), s);
        let t = s.truncated(10.0);
        assert_relative_eq!(t.end_cm().x, 6.0);
        assert_relative_eq!(t.end_cm().y, 8.0);
        assert_relative_eq!(s.truncated(-1.0).length_cm(), 0.0);
    }
}
