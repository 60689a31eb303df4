//! Surface geometry of lenses and mirrors.
//!
//! The real surfaces are approximated by parabolic arcs spanning the optic's diameter. The sagitta of an arc with
//! radius of curvature `R` over the half height `h` is `h² / (2|R|)`, limited to `h` (a half circle).
use nalgebra::Point2;

use super::{OpticType, SurfaceType};
use crate::surface::Parabola;

/// Center thickness of concave and flat lenses (cm).
pub const MIN_LENS_THICKNESS: f64 = 2.0;

/// The front (and for lenses the rear) surface of an optic.
#[derive(Debug, Clone, PartialEq)]
pub struct OpticShapes {
    front: Parabola,
    back: Option<Parabola>,
}
impl OpticShapes {
    /// Creates the [`OpticShapes`] of an optic.
    ///
    /// `position`, `diameter` and `radius_of_curvature` are given in cm.
    #[must_use]
    pub fn new(
        optic_type: OpticType,
        surface_type: SurfaceType,
        position: Point2<f64>,
        diameter: f64,
        radius_of_curvature: f64,
    ) -> Self {
        let h = 0.5 * diameter;
        let sagitta = (h * h / (2.0 * radius_of_curvature.abs())).min(h);
        let k = if h > 0.0 { sagitta / (h * h) } else { 0.0 };
        let apex = |dx: f64| Point2::new(position.x + dx, position.y);
        match optic_type {
            OpticType::Lens => {
                let (front, back) = match surface_type {
                    SurfaceType::Convex => (
                        Parabola::new(apex(-sagitta), k, h),
                        Parabola::new(apex(sagitta), -k, h),
                    ),
                    SurfaceType::Concave => (
                        Parabola::new(apex(-0.5 * MIN_LENS_THICKNESS), -k, h),
                        Parabola::new(apex(0.5 * MIN_LENS_THICKNESS), k, h),
                    ),
                    SurfaceType::Flat => (
                        Parabola::new(apex(-0.5 * MIN_LENS_THICKNESS), 0.0, h),
                        Parabola::new(apex(0.5 * MIN_LENS_THICKNESS), 0.0, h),
                    ),
                };
                Self {
                    front,
                    back: Some(back),
                }
            }
            OpticType::Mirror => {
                let front = match surface_type {
                    SurfaceType::Concave => Parabola::new(apex(0.0), -k, h),
                    SurfaceType::Convex | SurfaceType::Flat => Parabola::new(apex(0.0), k, h),
                };
                Self { front, back: None }
            }
        }
    }
    /// Returns the front (left) surface.
    #[must_use]
    pub const fn front(&self) -> &Parabola {
        &self.front
    }
    /// Returns the rear (right) surface. Mirrors do not have a rear surface.
    #[must_use]
    pub const fn back(&self) -> Option<&Parabola> {
        self.back.as_ref()
    }
    /// Returns the bounding box (min, max) of all surfaces.
    #[must_use]
    pub fn bounds(&self) -> (Point2<f64>, Point2<f64>) {
        let points = [
            self.front.apex(),
            self.front.top(),
            self.front.bottom(),
        ]
        .into_iter()
        .chain(
            self.back
                .iter()
                .flat_map(|b| [b.apex(), b.top(), b.bottom()]),
        );
        let init = (
            Point2::new(f64::INFINITY, f64::INFINITY),
            Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        );
        points.fold(init, |(min, max), p| {
            (
                Point2::new(min.x.min(p.x), min.y.min(p.y)),
                Point2::new(max.x.max(p.x), max.y.max(p.y)),
            )
        })
    }
}
