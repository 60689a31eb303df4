//! Guides: a pair of arms pivoting at the top or bottom edge of a lens.
//!
//! The incident arm points from the fulcrum toward the optical object, the transmitted arm shows the direction a
//! ray through the fulcrum leaves the lens (thin lens deflection `atan(h / f)`).
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use strum::{Display, EnumIter};
use uom::si::f64::{Angle, Length};

use crate::{
    error::{GeoOpticsError, GeoOpticsResult},
    optic::{Optic, OpticType},
    radian,
    utils::{cm_to_point, point_to_cm},
};

/// Edge of the lens a [`Guide`] is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GuideLocation {
    /// top edge
    Top,
    /// bottom edge
    Bottom,
}
impl GuideLocation {
    const fn sign(self) -> f64 {
        match self {
            Self::Top => 1.0,
            Self::Bottom => -1.0,
        }
    }
}

/// Guide at an edge of a lens.
#[derive(Debug, Clone, PartialEq)]
pub struct Guide {
    location: GuideLocation,
    fulcrum: Point2<f64>,
    incident_angle: f64,
    transmitted_angle: f64,
}
impl Guide {
    /// Creates a new [`Guide`] for the given lens and object position.
    ///
    /// # Errors
    ///
    /// This function will return an error if the optic is not a lens.
    pub fn new(
        optic: &Optic,
        object_position: &Point2<Length>,
        location: GuideLocation,
    ) -> GeoOpticsResult<Self> {
        if optic.optic_type() != OpticType::Lens {
            return Err(GeoOpticsError::Scene(
                "guides are only available for lenses".into(),
            ));
        }
        Ok(Self::from_cm(optic, &point_to_cm(object_position), location))
    }
    pub(crate) fn from_cm(optic: &Optic, object_position: &Point2<f64>, location: GuideLocation) -> Self {
        let half_diameter = location.sign() * 0.5 * optic.diameter_cm();
        let fulcrum = optic.position_cm() + Vector2::new(0.0, half_diameter);
        let to_object = object_position - fulcrum;
        let incident_angle = to_object.y.atan2(to_object.x);
        let transmitted_angle = incident_angle + PI - (half_diameter / optic.focal_length_cm()).atan();
        Self {
            location,
            fulcrum,
            incident_angle,
            transmitted_angle,
        }
    }
    /// Returns the [`GuideLocation`] of this [`Guide`].
    #[must_use]
    pub const fn location(&self) -> GuideLocation {
        self.location
    }
    /// Returns the pivot point of this [`Guide`].
    #[must_use]
    pub fn fulcrum(&self) -> Point2<Length> {
        cm_to_point(&self.fulcrum)
    }
    /// Returns the angle of the arm pointing toward the object, measured from the positive x axis.
    #[must_use]
    pub fn incident_angle(&self) -> Angle {
        radian!(self.incident_angle)
    }
    /// Returns the angle of the arm pointing along the transmitted ray, measured from the positive x axis.
    #[must_use]
    pub fn transmitted_angle(&self) -> Angle {
        radian!(self.transmitted_angle)
    }
}
