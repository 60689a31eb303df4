//! The projection screen of the light scene.
use nalgebra::{Point2, Vector2};
use uom::si::f64::Length;

use crate::{
    error::{GeoOpticsError, GeoOpticsResult},
    ray::Ray2,
    shape::Polygon,
    surface::MIN_HIT_DISTANCE,
    utils::{cm_to_point, point_to_cm},
};

/// Outline of the screen relative to its position (cm). The screen is drawn in perspective, hence the trapezoid.
const SCREEN_OUTLINE: [(f64, f64); 4] = [(-10.0, 65.0), (10.0, 45.0), (10.0, -45.0), (-10.0, -65.0)];

/// Half height (cm) of the screen at its center line.
pub const SCREEN_HALF_HEIGHT: f64 = 55.0;

/// A projection screen catching the light of the light sources.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionScreen {
    position: Point2<f64>,
}
impl ProjectionScreen {
    /// Creates a new [`ProjectionScreen`] centered at the given position.
    ///
    /// # Errors
    ///
    /// This function will return an error if the position is not finite.
    pub fn new(position: Point2<Length>) -> GeoOpticsResult<Self> {
        let position = point_to_cm(&position);
        if !position.iter().all(|c| c.is_finite()) {
            return Err(GeoOpticsError::Scene(
                "screen position must be finite".into(),
            ));
        }
        Ok(Self { position })
    }
    /// Returns the position of this [`ProjectionScreen`].
    #[must_use]
    pub fn position(&self) -> Point2<Length> {
        cm_to_point(&self.position)
    }
    pub(crate) const fn position_cm(&self) -> Point2<f64> {
        self.position
    }
    /// Returns the outline of the screen in model coordinates.
    #[must_use]
    pub fn outline(&self) -> Polygon {
        Polygon::new(
            SCREEN_OUTLINE
                .iter()
                .map(|(x, y)| self.position + Vector2::new(*x, *y))
                .collect(),
        )
    }
    /// Returns the distance along the ray to the screen's center line, if the ray hits it.
    pub(crate) fn hit_distance(&self, ray: &Ray2) -> Option<f64> {
        let direction = ray.direction();
        if direction.x.abs() < f64::EPSILON {
            return None;
        }
        let t = (self.position.x - ray.origin().x) / direction.x;
        if t <= MIN_HIT_DISTANCE {
            return None;
        }
        let y = ray.at(t).y;
        ((y - self.position.y).abs() <= SCREEN_HALF_HEIGHT).then_some(t)
    }
}
