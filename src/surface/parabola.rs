//! Parabolic surface
//!
//! A parabolic arc `x(y) = apex_x + k (y - apex_y)²` opening along the optical axis and limited to
//! `|y - apex_y| <= half_height`.
use super::{Surface, MIN_HIT_DISTANCE};
use crate::ray::Ray2;
use nalgebra::Point2;
use roots::{find_roots_quadratic, Roots};

/// Curvature coefficients below this value are treated as a straight line.
const FLAT_COEFFICIENT: f64 = 1e-12;
/// Relative tolerance for hits at the edges of the arc (rays aimed at the edge of an optic).
const EDGE_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq)]
/// A parabolic arc with its apex on the optical axis of an optic.
pub struct Parabola {
    apex: Point2<f64>,
    coefficient: f64,
    half_height: f64,
}
impl Parabola {
    /// Create a new [`Parabola`].
    ///
    /// **Note**: A positive coefficient leads to an arc with its "opening" towards the positive x axis, i.e. the
    /// edges of the arc lie right of the apex.
    #[must_use]
    pub const fn new(apex: Point2<f64>, coefficient: f64, half_height: f64) -> Self {
        Self {
            apex,
            coefficient,
            half_height,
        }
    }
    /// Returns the apex of this [`Parabola`].
    #[must_use]
    pub const fn apex(&self) -> Point2<f64> {
        self.apex
    }
    /// Returns the half height (y extent from the apex) of this [`Parabola`].
    #[must_use]
    pub const fn half_height(&self) -> f64 {
        self.half_height
    }
    /// Return the x coordinate of the arc at the given height.
    #[must_use]
    pub fn x_at(&self, y: f64) -> f64 {
        let dy = y - self.apex.y;
        self.coefficient.mul_add(dy * dy, self.apex.x)
    }
    /// Return the top end point of the arc.
    #[must_use]
    pub fn top(&self) -> Point2<f64> {
        let y = self.apex.y + self.half_height;
        Point2::new(self.x_at(y), y)
    }
    /// Return the bottom end point of the arc.
    #[must_use]
    pub fn bottom(&self) -> Point2<f64> {
        let y = self.apex.y - self.half_height;
        Point2::new(self.x_at(y), y)
    }
    fn contains_height(&self, y: f64) -> bool {
        (y - self.apex.y).abs() <= self.half_height.mul_add(1.0 + EDGE_TOLERANCE, EDGE_TOLERANCE)
    }
}

impl Surface for Parabola {
    fn intersect(&self, ray: &Ray2) -> Option<Point2<f64>> {
        let dir = ray.direction();
        let pos = ray.origin();
        let k = if self.coefficient.abs() < FLAT_COEFFICIENT {
            0.0
        } else {
            self.coefficient
        };
        let q = pos.y - self.apex.y;
        // parabola (apex a): x - a_x - k (y - a_y)^2 = 0
        //
        // insert ray (p: position, d: direction):
        // p_x + t d_x - a_x - k (q + t d_y)^2 = 0  with q = p_y - a_y
        // This translates into the quadratic equation
        // at^2 + bt + c = 0 with
        // a = k d_y^2
        // b = 2 k q d_y - d_x
        // c = k q^2 + a_x - p_x
        let a = k * dir.y * dir.y;
        let b = (2.0 * k * q).mul_add(dir.y, -dir.x);
        let c = k.mul_add(q * q, self.apex.x - pos.x);
        let candidates: Vec<f64> = match find_roots_quadratic(a, b, c) {
            Roots::One(t) => t.to_vec(),
            Roots::Two(t) => t.to_vec(),
            _ => Vec::new(),
        };
        candidates
            .into_iter()
            .filter(|t| *t > MIN_HIT_DISTANCE)
            .map(|t| (t, ray.at(t)))
            .filter(|(_, p)| self.contains_height(p.y))
            .min_by(|(t1, _), (t2, _)| t1.total_cmp(t2))
            .map(|(_, p)| p)
    }
    fn name(&self) -> String {
        "parabolic".into()
    }
}
