#![warn(missing_docs)]
//! The lens / mirror model
//!
//! An [`Optic`] holds the user adjustable parameters (diameter, surface type, radius of curvature, index of
//! refraction or, in the direct model, the focal length) and derives the signed focal length and the surface
//! geometry used by the ray tracer.
//!
//! # Sign conventions
//! - radius of curvature: positive = convex, negative = concave.
//! - focal length: positive = converging, negative = diverging.
//! - [`Optic::sign`]: +1 for a lens (positive image distance ⇒ image right of the lens), -1 for a mirror
//!   (positive image distance ⇒ image left of the mirror).
mod config;
mod shapes;

pub use config::OpticConfig;
pub use shapes::{OpticShapes, MIN_LENS_THICKNESS};

use log::warn;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use uom::si::{f64::Length, length::centimeter};

use crate::{
    centimeter,
    error::GeoOpticsResult,
    rays_type::RaysType,
    surface::{OpticSurface, Plane},
    utils::{cm_to_point, point_to_cm},
};

/// Radius of curvature (cm) used for flat surfaces. Large but finite in order to keep all derived values finite.
pub const FLAT_RADIUS_OF_CURVATURE: f64 = 1e6;

/// The kind of optic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, EnumString, Display, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OpticType {
    /// a thin lens, light is transmitted
    Lens,
    /// a mirror, light is reflected
    Mirror,
}

/// The shape of the optic's surface.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, EnumString, Display, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SurfaceType {
    /// convex surface(s): converging lens, diverging mirror
    Convex,
    /// concave surface(s): diverging lens, converging mirror
    Concave,
    /// flat surface(s), modelled with [`FLAT_RADIUS_OF_CURVATURE`]
    Flat,
}

/// How the focal length of an optic is determined.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, EnumString, Display, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FocalLengthModelType {
    /// the focal length magnitude is set directly, the radius of curvature is derived from it.
    Direct,
    /// the focal length is derived from radius of curvature and index of refraction.
    Indirect,
}

/// Side of the optic along the optical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OpticSide {
    /// left of the optic (smaller x)
    Left,
    /// right of the optic (larger x)
    Right,
}

/// A lens or mirror.
#[derive(Debug, Clone, PartialEq)]
pub struct Optic {
    optic_type: OpticType,
    config: OpticConfig,
    surface_type: SurfaceType,
    focal_length_model: FocalLengthModelType,
    diameter: f64,
    radius_of_curvature_magnitude: f64,
    index_of_refraction: f64,
    focal_length_magnitude: f64,
}
impl Default for Optic {
    /// Create a convex lens with the default [`OpticConfig::lens`] configuration.
    fn default() -> Self {
        Self::from_valid_config(OpticType::Lens, OpticConfig::lens())
    }
}
impl Optic {
    /// Creates a new [`Optic`] of the given type, initialized with the default values of the given configuration.
    ///
    /// # Errors
    ///
    /// This function will return an error if the configuration is not consistent (see [`OpticConfig::validate`]).
    pub fn new(optic_type: OpticType, config: OpticConfig) -> GeoOpticsResult<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(optic_type, config))
    }
    /// Create a lens with the default configuration.
    #[must_use]
    pub fn lens() -> Self {
        Self::default()
    }
    /// Create a concave mirror with the default configuration.
    #[must_use]
    pub fn mirror() -> Self {
        Self::from_valid_config(OpticType::Mirror, OpticConfig::mirror())
    }
    fn from_valid_config(optic_type: OpticType, config: OpticConfig) -> Self {
        Self {
            optic_type,
            surface_type: config.surface_type,
            focal_length_model: config.focal_length_model,
            diameter: config.diameter.default_value(),
            radius_of_curvature_magnitude: config.radius_of_curvature.default_value(),
            index_of_refraction: config.index_of_refraction.default_value(),
            focal_length_magnitude: config.focal_length.default_value(),
            config,
        }
    }
    /// Restore the initial state given by the configuration.
    pub fn reset(&mut self) {
        *self = Self::from_valid_config(self.optic_type, self.config.clone());
    }
    /// Modifies the [`SurfaceType`] of this [`Optic`]. This function can be used with the "builder pattern".
    #[must_use]
    pub const fn with_surface_type(mut self, surface_type: SurfaceType) -> Self {
        self.surface_type = surface_type;
        self
    }
    /// Modifies the [`FocalLengthModelType`] of this [`Optic`]. This function can be used with the "builder pattern".
    #[must_use]
    pub const fn with_focal_length_model(mut self, model: FocalLengthModelType) -> Self {
        self.focal_length_model = model;
        self
    }
    /// Returns the [`OpticType`] of this [`Optic`].
    #[must_use]
    pub const fn optic_type(&self) -> OpticType {
        self.optic_type
    }
    /// Returns the configuration of this [`Optic`].
    #[must_use]
    pub const fn config(&self) -> &OpticConfig {
        &self.config
    }
    /// Returns the position of this [`Optic`].
    #[must_use]
    pub fn position(&self) -> Point2<Length> {
        cm_to_point(&self.config.position)
    }
    pub(crate) const fn position_cm(&self) -> Point2<f64> {
        self.config.position
    }
    /// Returns the [`SurfaceType`] of this [`Optic`].
    #[must_use]
    pub const fn surface_type(&self) -> SurfaceType {
        self.surface_type
    }
    /// Sets the [`SurfaceType`] of this [`Optic`].
    pub fn set_surface_type(&mut self, surface_type: SurfaceType) {
        self.surface_type = surface_type;
    }
    /// Returns the [`FocalLengthModelType`] of this [`Optic`].
    #[must_use]
    pub const fn focal_length_model(&self) -> FocalLengthModelType {
        self.focal_length_model
    }
    /// Sets the [`FocalLengthModelType`] of this [`Optic`].
    pub fn set_focal_length_model(&mut self, model: FocalLengthModelType) {
        self.focal_length_model = model;
    }
    /// Returns the diameter of this [`Optic`].
    #[must_use]
    pub fn diameter(&self) -> Length {
        centimeter!(self.diameter)
    }
    pub(crate) const fn diameter_cm(&self) -> f64 {
        self.diameter
    }
    /// Returns the maximum diameter of this [`Optic`] given by its configuration.
    #[must_use]
    pub fn max_diameter(&self) -> Length {
        centimeter!(self.config.diameter.max())
    }
    /// Returns the ratio of the current diameter and the maximum diameter.
    ///
    /// The result is in the range `(0.0..=1.0]`.
    #[must_use]
    pub fn diameter_factor(&self) -> f64 {
        self.diameter / self.config.diameter.max()
    }
    /// Sets the diameter of this [`Optic`].
    ///
    /// # Errors
    ///
    /// This function will return an error if the given diameter is outside the configured range.
    pub fn set_diameter(&mut self, diameter: Length) -> GeoOpticsResult<()> {
        self.diameter = self
            .config
            .diameter
            .validate(diameter.get::<centimeter>(), "diameter")?;
        Ok(())
    }
    /// Sets the magnitude of the radius of curvature used by the indirect focal length model.
    ///
    /// The sign of the radius of curvature is determined by the [`SurfaceType`].
    ///
    /// # Errors
    ///
    /// This function will return an error if the given value is outside the configured range.
    pub fn set_radius_of_curvature(&mut self, radius: Length) -> GeoOpticsResult<()> {
        self.radius_of_curvature_magnitude = self
            .config
            .radius_of_curvature
            .validate(radius.get::<centimeter>().abs(), "radius of curvature")?;
        if self.focal_length_model == FocalLengthModelType::Direct {
            warn!("radius of curvature set while using the direct focal length model. Value is only used by the indirect model.");
        }
        Ok(())
    }
    /// Returns the index of refraction of this [`Optic`].
    #[must_use]
    pub const fn index_of_refraction(&self) -> f64 {
        self.index_of_refraction
    }
    /// Sets the index of refraction of this [`Optic`].
    ///
    /// # Errors
    ///
    /// This function will return an error if the given value is outside the configured range (mirrors only allow a
    /// fixed value).
    pub fn set_index_of_refraction(&mut self, index_of_refraction: f64) -> GeoOpticsResult<()> {
        self.index_of_refraction = self
            .config
            .index_of_refraction
            .validate(index_of_refraction, "index of refraction")?;
        Ok(())
    }
    /// Sets the magnitude of the focal length used by the direct focal length model.
    ///
    /// # Errors
    ///
    /// This function will return an error if the given value is outside the configured range.
    pub fn set_direct_focal_length(&mut self, focal_length: Length) -> GeoOpticsResult<()> {
        self.focal_length_magnitude = self
            .config
            .focal_length
            .validate(focal_length.get::<centimeter>().abs(), "focal length")?;
        if self.focal_length_model == FocalLengthModelType::Indirect {
            warn!("focal length set while using the indirect focal length model. Value is only used by the direct model.");
        }
        Ok(())
    }
    /// Returns +1.0 for a lens and -1.0 for a mirror.
    ///
    /// This sign converts an (unsigned) image distance into a horizontal offset from the optic.
    #[must_use]
    pub const fn sign(&self) -> f64 {
        match self.optic_type {
            OpticType::Lens => 1.0,
            OpticType::Mirror => -1.0,
        }
    }
    /// Returns true if the optic focuses light (convex lens, concave mirror).
    #[must_use]
    pub fn is_converging(&self) -> bool {
        self.focal_length_cm() > 0.0
    }
    /// Returns the signed radius of curvature of this [`Optic`].
    #[must_use]
    pub fn radius_of_curvature(&self) -> Length {
        centimeter!(self.radius_of_curvature_cm())
    }
    pub(crate) fn radius_of_curvature_cm(&self) -> f64 {
        match (self.surface_type, self.focal_length_model) {
            (SurfaceType::Flat, _) => FLAT_RADIUS_OF_CURVATURE,
            (_, FocalLengthModelType::Indirect) => {
                self.curvature_sign() * self.radius_of_curvature_magnitude
            }
            // R = 2 f (n - 1) sign
            (_, FocalLengthModelType::Direct) => {
                2.0 * self.focal_length_cm() * (self.index_of_refraction - 1.0) * self.sign()
            }
        }
    }
    /// Returns the signed focal length of this [`Optic`].
    #[must_use]
    pub fn focal_length(&self) -> Length {
        centimeter!(self.focal_length_cm())
    }
    pub(crate) fn focal_length_cm(&self) -> f64 {
        match (self.surface_type, self.focal_length_model) {
            (_, FocalLengthModelType::Indirect) | (SurfaceType::Flat, _) => {
                // f = sign R / (2 (n - 1)), the mirror's n = 2 leads to f = -R/2
                self.sign() * self.radius_of_curvature_cm()
                    / (2.0 * (self.index_of_refraction - 1.0))
            }
            (_, FocalLengthModelType::Direct) => {
                self.sign() * self.curvature_sign() * self.focal_length_magnitude
            }
        }
    }
    const fn curvature_sign(&self) -> f64 {
        match self.surface_type {
            SurfaceType::Convex | SurfaceType::Flat => 1.0,
            SurfaceType::Concave => -1.0,
        }
    }
    /// Returns the focal point on the given side of the optic.
    #[must_use]
    pub fn focal_point(&self, side: OpticSide) -> Point2<Length> {
        cm_to_point(&self.axis_point(side, 1.0))
    }
    /// Returns the point at twice the focal length on the given side of the optic.
    #[must_use]
    pub fn two_f_point(&self, side: OpticSide) -> Point2<Length> {
        cm_to_point(&self.axis_point(side, 2.0))
    }
    fn axis_point(&self, side: OpticSide, multiple: f64) -> Point2<f64> {
        let distance = multiple * self.focal_length_cm().abs();
        let position = self.position_cm();
        match side {
            OpticSide::Left => Point2::new(position.x - distance, position.y),
            OpticSide::Right => Point2::new(position.x + distance, position.y),
        }
    }
    /// Returns the surface geometry of this [`Optic`].
    #[must_use]
    pub fn shapes(&self) -> OpticShapes {
        OpticShapes::new(
            self.optic_type,
            self.surface_type,
            self.position_cm(),
            self.diameter,
            self.radius_of_curvature_cm(),
        )
    }
    /// Returns the bounding box (top left, bottom right) of the optic's active (transmitting / reflecting) surfaces.
    #[must_use]
    pub fn active_bounds(&self) -> (Point2<Length>, Point2<Length>) {
        let (min, max) = self.shapes().bounds();
        (
            cm_to_point(&Point2::new(min.x, max.y)),
            cm_to_point(&Point2::new(max.x, min.y)),
        )
    }
    /// Returns the surface on which incoming rays are refracted or reflected.
    ///
    /// For [`RaysType::Principal`] this is the (unbounded) vertical line through the optic's centre: principal
    /// rays are drawn as if they were refracted at the principal plane.
    #[must_use]
    pub fn front_shape(&self, rays_type: RaysType) -> OpticSurface {
        if rays_type == RaysType::Principal {
            Plane::new(self.position_cm(), None).into()
        } else {
            self.shapes().front().clone().into()
        }
    }
    /// Returns the rear surface of a lens. Mirrors as well as principal rays do not have a rear surface.
    #[must_use]
    pub fn back_shape(&self, rays_type: RaysType) -> Option<OpticSurface> {
        if rays_type == RaysType::Principal {
            return None;
        }
        self.shapes().back().map(|b| b.clone().into())
    }
    /// Returns the top most point of the optic a ray travelling from the `object` to the `image` can pass.
    #[must_use]
    pub fn top_point(&self, object: &Point2<Length>, image: &Point2<Length>) -> Point2<Length> {
        cm_to_point(&self.extremum_point(&point_to_cm(object), &point_to_cm(image), true))
    }
    /// Returns the bottom most point of the optic a ray travelling from the `object` to the `image` can pass.
    #[must_use]
    pub fn bottom_point(&self, object: &Point2<Length>, image: &Point2<Length>) -> Point2<Length> {
        cm_to_point(&self.extremum_point(&point_to_cm(object), &point_to_cm(image), false))
    }
    pub(crate) fn extremum_point(
        &self,
        object: &Point2<f64>,
        image: &Point2<f64>,
        is_top: bool,
    ) -> Point2<f64> {
        let (min, max) = self.shapes().bounds();
        let y_edge = if is_top { max.y } else { min.y };
        let left_corner = Point2::new(min.x, y_edge);
        let right_corner = Point2::new(max.x, y_edge);
        let position = self.position_cm();
        match self.optic_type {
            OpticType::Mirror => match self.surface_type {
                SurfaceType::Concave => left_corner,
                SurfaceType::Convex | SurfaceType::Flat => right_corner,
            },
            OpticType::Lens if self.is_converging() => Point2::new(position.x, y_edge),
            OpticType::Lens => {
                // a ray through the returned point must cross the front as well as the rear surface: take the line
                // from the given point through the lens corner on the far side and evaluate it at the optic's x.
                let offset_via_far_corner = |p: &Point2<f64>| {
                    let far_corner = if p.x < position.x {
                        right_corner
                    } else {
                        left_corner
                    };
                    let dx = far_corner.x - p.x;
                    let offset = if dx.abs() < f64::EPSILON {
                        far_corner.y - position.y
                    } else {
                        let slope = (far_corner.y - p.y) / dx;
                        slope.mul_add(position.x - p.x, p.y) - position.y
                    };
                    if offset.is_finite() {
                        offset
                    } else {
                        y_edge - position.y
                    }
                };
                let object_offset = offset_via_far_corner(object);
                let image_offset = offset_via_far_corner(image);
                let offset = if object_offset.abs() < image_offset.abs() {
                    object_offset
                } else {
                    image_offset
                };
                Point2::new(position.x, position.y + offset)
            }
        }
    }
}
