//! Module for handling the geometric surfaces of an optic.
//!
//! An optic is a cross section in the x/y plane of the model: the optical axis runs along x, the surfaces are
//! curves spanning the optic's diameter in y. The [`Surface`] trait handles the interface for calculating
//! the intersection of a [`Ray2`] with such a curve.
mod parabola;
mod plane;

pub use parabola::Parabola;
pub use plane::Plane;

use crate::ray::Ray2;
use nalgebra::Point2;
use std::fmt::Debug;

/// Minimum ray parameter accepted as an intersection. Avoids hitting the surface a ray starts on.
pub(crate) const MIN_HIT_DISTANCE: f64 = 1e-9;

/// Trait for handling geometric surfaces.
pub trait Surface: Debug {
    /// Calculate the first intersection point of a [`Ray2`] with this [`Surface`].
    ///
    /// Only intersections in front of the ray origin are considered. This function returns `None` if the given
    /// ray does not intersect with the surface.
    fn intersect(&self, ray: &Ray2) -> Option<Point2<f64>>;
    /// Return the surface type as string (for debugging purposes)
    fn name(&self) -> String;
}

/// The concrete surface types an optic consists of.
#[derive(Debug, Clone, PartialEq)]
pub enum OpticSurface {
    /// a parabolic arc (curved lens or mirror surface)
    Parabola(Parabola),
    /// a straight vertical line (principal plane or flat surface)
    Plane(Plane),
}
impl Surface for OpticSurface {
    fn intersect(&self, ray: &Ray2) -> Option<Point2<f64>> {
        match self {
            Self::Parabola(p) => p.intersect(ray),
            Self::Plane(p) => p.intersect(ray),
        }
    }
    fn name(&self) -> String {
        match self {
            Self::Parabola(p) => p.name(),
            Self::Plane(p) => p.name(),
        }
    }
}
impl From<Parabola> for OpticSurface {
    fn from(value: Parabola) -> Self {
        Self::Parabola(value)
    }
}
impl From<Plane> for OpticSurface {
    fn from(value: Plane) -> Self {
        Self::Plane(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use nalgebra::Vector2;
    #[test]
    fn dispatch() {
        let ray = Ray2::new(Point2::new(-10.0, 0.0), Vector2::x()).unwrap();
        let plane: OpticSurface = Plane::new(Point2::new(0.0, 0.0), Some(5.0)).into();
        assert_eq!(plane.name(), "plane");
        assert_eq!(plane.intersect(&ray), Some(Point2::new(0.0, 0.0)));
        let parabola: OpticSurface = Parabola::new(Point2::new(2.0, 0.0), 0.0, 5.0).into();
        assert_eq!(parabola.name(), "parabolic");
        assert_eq!(parabola.intersect(&ray), Some(Point2::new(2.0, 0.0)));
    }
}
