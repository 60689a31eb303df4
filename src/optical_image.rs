#![warn(missing_docs)]
//! The optical image of a point, computed with the thin lens / mirror equation.
//!
//! With the object distance `d = x_optic - x_object` and the signed focal length `f` the image distance is
//! `d_i = f d / (d - f)` and the magnification is `m = -d_i / d`. The image is located at
//! `x_optic + sign d_i` where `sign` is +1 for lenses and -1 for mirrors.
use approx::relative_eq;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use strum::Display;
use uom::si::{f64::Length, length::centimeter};

use crate::{
    centimeter,
    optic::Optic,
    utils::{cm_to_point, point_to_cm},
};

/// Image distance (cm) used if the object is located exactly at the focal point.
pub const IMAGE_AT_INFINITY_DISTANCE: f64 = 1e7;

/// Kind of an optical image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ImageType {
    /// light rays actually converge at the image
    Real,
    /// light rays only appear to diverge from the image
    Virtual,
}

/// Orientation of an image with respect to its object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Orientation {
    /// same orientation as the object
    Upright,
    /// upside down
    Inverted,
}

/// The image of an object point formed by an [`Optic`].
#[derive(Debug, Clone, PartialEq)]
pub struct OpticalImage {
    image_distance: f64,
    magnification: f64,
    position: Point2<f64>,
    visible: bool,
}
impl OpticalImage {
    /// Compute the image of the given object point.
    ///
    /// The returned image is not visible: it becomes visible once a light ray reached it (see
    /// [`LightRays`](crate::light_rays::LightRays)).
    #[must_use]
    pub fn new(optic: &Optic, object_position: &Point2<Length>) -> Self {
        Self::from_cm(optic, &point_to_cm(object_position))
    }
    pub(crate) fn from_cm(optic: &Optic, object_position: &Point2<f64>) -> Self {
        let mut image = Self {
            image_distance: 0.0,
            magnification: 1.0,
            position: *object_position,
            visible: false,
        };
        image.update_cm(optic, object_position);
        image
    }
    /// Recompute the image after the object or the optic changed.
    ///
    /// This resets the visibility.
    pub fn update(&mut self, optic: &Optic, object_position: &Point2<Length>) {
        self.update_cm(optic, &point_to_cm(object_position));
    }
    pub(crate) fn update_cm(&mut self, optic: &Optic, object_position: &Point2<f64>) {
        let optic_position = optic.position_cm();
        let focal_length = optic.focal_length_cm();
        let object_distance = optic_position.x - object_position.x;
        self.image_distance = if relative_eq!(object_distance, focal_length) {
            IMAGE_AT_INFINITY_DISTANCE
        } else {
            focal_length * object_distance / (object_distance - focal_length)
        };
        self.magnification = if object_distance == 0.0 {
            1.0
        } else {
            -self.image_distance / object_distance
        };
        self.position = Point2::new(
            optic.sign().mul_add(self.image_distance, optic_position.x),
            self.magnification
                .mul_add(object_position.y - optic_position.y, optic_position.y),
        );
        self.visible = false;
    }
    /// Returns the signed image distance.
    ///
    /// A negative image distance denotes a virtual image.
    #[must_use]
    pub fn image_distance(&self) -> Length {
        centimeter!(self.image_distance)
    }
    /// Returns the (signed) magnification. A negative magnification denotes an inverted image.
    #[must_use]
    pub const fn magnification(&self) -> f64 {
        self.magnification
    }
    /// Returns the position of this [`OpticalImage`].
    #[must_use]
    pub fn position(&self) -> Point2<Length> {
        cm_to_point(&self.position)
    }
    pub(crate) const fn position_cm(&self) -> Point2<f64> {
        self.position
    }
    /// Returns the [`ImageType`] of this [`OpticalImage`].
    #[must_use]
    pub fn image_type(&self) -> ImageType {
        if self.image_distance >= 0.0 {
            ImageType::Real
        } else {
            ImageType::Virtual
        }
    }
    /// Returns true for a virtual image.
    #[must_use]
    pub fn is_virtual(&self) -> bool {
        self.image_type() == ImageType::Virtual
    }
    /// Returns the scale of the image relative to the object.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.magnification.abs()
    }
    /// Returns the [`Orientation`] of this [`OpticalImage`].
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        if self.magnification < 0.0 {
            Orientation::Inverted
        } else {
            Orientation::Upright
        }
    }
    /// Returns true if a light ray has reached this image.
    #[must_use]
    pub const fn visible(&self) -> bool {
        self.visible
    }
    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
