#![warn(missing_docs)]
//! Closed 2D shapes
//!
//! A [`Polygon`] is used for the projection screen outline and for the (polygonized) light spot ellipse. The
//! light spot is the boolean intersection of both which is computed by clipping against the convex screen
//! outline.
use itertools::Itertools;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::utils::usize_to_f64;

/// Number of vertices used for approximating an ellipse.
pub const ELLIPSE_VERTICES: usize = 64;

/// A closed polygon in model coordinates (cm).
///
/// The closing edge from the last to the first vertex is implicit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Point2<f64>>,
}
impl Polygon {
    /// Creates a new [`Polygon`] from the given vertices.
    #[must_use]
    pub const fn new(vertices: Vec<Point2<f64>>) -> Self {
        Self { vertices }
    }
    /// Create a polygon approximating an axis aligned ellipse.
    ///
    /// An ellipse with a zero radius results in an empty polygon.
    #[must_use]
    pub fn ellipse(center: Point2<f64>, radius_x: f64, radius_y: f64) -> Self {
        if radius_x <= 0.0 || radius_y <= 0.0 || !radius_x.is_finite() || !radius_y.is_finite() {
            return Self::default();
        }
        let vertices = (0..ELLIPSE_VERTICES)
            .map(|i| {
                let phi = 2.0 * PI * usize_to_f64(i) / usize_to_f64(ELLIPSE_VERTICES);
                Point2::new(
                    radius_x.mul_add(phi.cos(), center.x),
                    radius_y.mul_add(phi.sin(), center.y),
                )
            })
            .collect();
        Self { vertices }
    }
    /// Returns the vertices of this [`Polygon`].
    #[must_use]
    pub fn vertices(&self) -> &[Point2<f64>] {
        &self.vertices
    }
    /// Returns the signed area of this [`Polygon`] (positive for counter-clockwise orientation).
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        if self.vertices.len() < 3 {
            return 0.0;
        }
        0.5 * self
            .vertices
            .iter()
            .circular_tuple_windows()
            .map(|(p1, p2)| p1.x.mul_add(p2.y, -(p2.x * p1.y)))
            .sum::<f64>()
    }
    /// Returns the (absolute) area of this [`Polygon`].
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }
    /// Returns true if this [`Polygon`] has no area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.area() <= f64::EPSILON
    }
    /// Returns the axis aligned bounding box (min, max) of this [`Polygon`] or `None` for a polygon without vertices.
    #[must_use]
    pub fn bounds(&self) -> Option<(Point2<f64>, Point2<f64>)> {
        let first = self.vertices.first()?;
        Some(self.vertices.iter().fold((*first, *first), |(min, max), p| {
            (
                Point2::new(min.x.min(p.x), min.y.min(p.y)),
                Point2::new(max.x.max(p.x), max.y.max(p.y)),
            )
        }))
    }
    /// Return the intersection of this polygon with the given convex polygon.
    ///
    /// This is the Sutherland-Hodgman algorithm: the subject polygon is clipped successively against all edges of
    /// `clip`. The subject may be concave, `clip` must be convex. The orientation of both polygons is arbitrary.
    #[must_use]
    pub fn clip_convex(&self, clip: &Self) -> Self {
        if self.vertices.len() < 3 || clip.vertices.len() < 3 {
            return Self::default();
        }
        let orientation = clip.signed_area().signum();
        let mut output = self.vertices.clone();
        for (edge_start, edge_end) in clip.vertices.iter().circular_tuple_windows() {
            if output.is_empty() {
                break;
            }
            let inside = |p: &Point2<f64>| orientation * cross(edge_start, edge_end, p) >= 0.0;
            let input = std::mem::take(&mut output);
            for (previous, current) in input.iter().circular_tuple_windows() {
                match (inside(previous), inside(current)) {
                    (true, true) => output.push(*current),
                    (true, false) => {
                        output.push(line_intersection(previous, current, edge_start, edge_end));
                    }
                    (false, true) => {
                        output.push(line_intersection(previous, current, edge_start, edge_end));
                        output.push(*current);
                    }
                    (false, false) => {}
                }
            }
        }
        let clipped = Self { vertices: output };
        if clipped.is_empty() {
            Self::default()
        } else {
            clipped
        }
    }
}

/// z component of the cross product (b - a) x (p - a)
fn cross(a: &Point2<f64>, b: &Point2<f64>, p: &Point2<f64>) -> f64 {
    (b.x - a.x).mul_add(p.y - a.y, -((b.y - a.y) * (p.x - a.x)))
}

/// Intersection of the segment p1-p2 with the infinite line through a and b.
fn line_intersection(
    p1: &Point2<f64>,
    p2: &Point2<f64>,
    a: &Point2<f64>,
    b: &Point2<f64>,
) -> Point2<f64> {
    let d1 = cross(a, b, p1);
    let d2 = cross(a, b, p2);
    let denominator = d1 - d2;
    if denominator.abs() < f64::EPSILON {
        return *p2;
    }
    let t = d1 / denominator;
    p1 + (p2 - p1) * t
}
