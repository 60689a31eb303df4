//! Conversion between unit aware points and the plain centimeter coordinates used by the ray tracer.
use nalgebra::Point2;
use uom::si::{f64::Length, length::centimeter};

use crate::centimeter;

/// Convert a `Point2<Length>` into plain model coordinates (in cm).
#[must_use]
pub fn point_to_cm(point: &Point2<Length>) -> Point2<f64> {
    Point2::new(point.x.get::<centimeter>(), point.y.get::<centimeter>())
}
/// Convert plain model coordinates (in cm) into a `Point2<Length>`.
#[must_use]
pub fn cm_to_point(point: &Point2<f64>) -> Point2<Length> {
    centimeter!(point.x, point.y)
}
