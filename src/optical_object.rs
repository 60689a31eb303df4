#![warn(missing_docs)]
//! Optical objects: the things that are imaged by an [`Optic`](crate::optic::Optic).
//!
//! An [`OpticalObjectChoice`] is the user's selection of what is placed in front of the optic. It maps to a
//! [`Representation`] which holds the (external) asset names and their scale. The assets themselves are not part
//! of this crate.
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use uom::si::{f64::Length, length::centimeter};

use crate::{
    centimeter,
    error::{GeoOpticsError, GeoOpticsResult},
    utils::{cm_to_point, point_to_cm},
};

/// Selectable optical objects.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OpticalObjectChoice {
    /// framed picture of a pencil
    #[default]
    Pencil,
    /// framed picture of a penguin
    Penguin,
    /// framed picture of a star
    Star,
    /// a pair of arrows
    Arrow,
    /// a pair of light sources
    Light,
}
impl OpticalObjectChoice {
    /// Returns the [`Representation`] of this choice.
    #[must_use]
    pub const fn representation(&self) -> Representation {
        match self {
            Self::Pencil => Representation::framed("pencil", 0.25),
            Self::Penguin => Representation::framed("penguin", 0.2),
            Self::Star => Representation::framed("star", 0.2),
            Self::Arrow => Representation {
                label: "arrow",
                object_asset: None,
                inverted_asset: None,
                scale: 1.0,
                is_framed: false,
            },
            Self::Light => Representation {
                label: "light",
                object_asset: Some("lamp_blue"),
                inverted_asset: Some("lamp_red"),
                scale: 0.5,
                is_framed: false,
            },
        }
    }
    /// Returns true if this is a framed object (pencil, penguin, star).
    #[must_use]
    pub const fn is_framed(&self) -> bool {
        self.representation().is_framed
    }
}

/// Visual representation of an [`OpticalObjectChoice`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Representation {
    /// human readable label
    pub label: &'static str,
    /// asset of the upright object
    pub object_asset: Option<&'static str>,
    /// asset used for the (inverted) image
    pub inverted_asset: Option<&'static str>,
    /// scale of the asset in model units
    pub scale: f64,
    /// true for objects drawn inside a frame
    pub is_framed: bool,
}
impl Representation {
    const fn framed(label: &'static str, scale: f64) -> Self {
        Self {
            label,
            object_asset: Some(label),
            inverted_asset: Some(label),
            scale,
            is_framed: true,
        }
    }
}

/// An optical object (or light source) at a given position.
///
/// Framed objects may carry a second point of interest, stored as a vertical offset to the object position.
#[derive(Debug, Clone, PartialEq)]
pub struct OpticalObject {
    position: Point2<f64>,
    second_point_offset: Option<f64>,
}
impl OpticalObject {
    /// Creates a new [`OpticalObject`] at the given position.
    ///
    /// # Errors
    ///
    /// This function will return an error if the position is not finite.
    pub fn new(position: Point2<Length>) -> GeoOpticsResult<Self> {
        let position = finite_point(&position)?;
        Ok(Self {
            position,
            second_point_offset: None,
        })
    }
    /// Returns the position of this [`OpticalObject`].
    #[must_use]
    pub fn position(&self) -> Point2<Length> {
        cm_to_point(&self.position)
    }
    pub(crate) const fn position_cm(&self) -> Point2<f64> {
        self.position
    }
    /// Sets the position of this [`OpticalObject`].
    ///
    /// # Errors
    ///
    /// This function will return an error if the position is not finite.
    pub fn set_position(&mut self, position: Point2<Length>) -> GeoOpticsResult<()> {
        self.position = finite_point(&position)?;
        Ok(())
    }
    /// Returns the vertical offset of the second point of interest (if any).
    #[must_use]
    pub fn second_point_offset(&self) -> Option<Length> {
        self.second_point_offset.map(|o| centimeter!(o))
    }
    /// Sets (or removes) the second point of interest.
    ///
    /// # Errors
    ///
    /// This function will return an error if the offset is not finite.
    pub fn set_second_point_offset(&mut self, offset: Option<Length>) -> GeoOpticsResult<()> {
        self.second_point_offset = match offset {
            Some(o) => {
                let o = o.get::<centimeter>();
                if !o.is_finite() {
                    return Err(GeoOpticsError::Scene(
                        "second point offset must be finite".into(),
                    ));
                }
                Some(o)
            }
            None => None,
        };
        Ok(())
    }
    /// Returns the position of the second point of interest (if any).
    #[must_use]
    pub fn second_point(&self) -> Option<Point2<Length>> {
        self.second_point_cm().map(|p| cm_to_point(&p))
    }
    pub(crate) fn second_point_cm(&self) -> Option<Point2<f64>> {
        self.second_point_offset
            .map(|o| self.position + Vector2::new(0.0, o))
    }
}

fn finite_point(position: &Point2<Length>) -> GeoOpticsResult<Point2<f64>> {
    let position = point_to_cm(position);
    if position.iter().all(|c| c.is_finite()) {
        Ok(position)
    } else {
        Err(GeoOpticsError::Scene(
            "object position must be finite".into(),
        ))
    }
}
