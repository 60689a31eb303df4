//! Scene configuration, read from JSON files.
use log::info;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use super::SceneKind;
use crate::{
    error::{GeoOpticsError, GeoOpticsResult},
    light_rays::LIGHT_SPEED,
    optic::{FocalLengthModelType, OpticConfig, OpticType, SurfaceType},
    optical_object::OpticalObjectChoice,
    rays_type::RaysType,
};

/// Configuration of a [`Scene`](super::Scene).
///
/// All lengths are given in cm. Missing fields are filled with defaults, missing object positions are taken from
/// [`SceneConfig::default_object_positions`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// lens or mirror
    pub optic_type: OpticType,
    /// parameter ranges of the optic. If not given, the defaults of the optic type are used.
    pub optic: Option<OpticConfig>,
    /// initial surface type (overrides the one of the optic configuration)
    pub surface_type: Option<SurfaceType>,
    /// initial focal length model (overrides the one of the optic configuration)
    pub focal_length_model: Option<FocalLengthModelType>,
    /// the object placed in front of the optic. Determines the [`SceneKind`].
    pub object: OpticalObjectChoice,
    /// initial ray representation
    pub rays_type: RaysType,
    /// positions of the optical objects (two for arrows and lights, one for framed objects)
    pub object_positions: Vec<Point2<f64>>,
    /// vertical offset of the second point of interest of a framed object
    pub second_point_offset: Option<f64>,
    /// position of the projection screen (light scene only)
    pub screen_position: Point2<f64>,
    /// propagation speed of the light rays (cm/s)
    pub light_speed: f64,
}
impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            optic_type: OpticType::Lens,
            optic: None,
            surface_type: None,
            focal_length_model: None,
            object: OpticalObjectChoice::default(),
            rays_type: RaysType::default(),
            object_positions: Vec::new(),
            second_point_offset: None,
            screen_position: Point2::new(200.0, 0.0),
            light_speed: LIGHT_SPEED,
        }
    }
}
impl SceneConfig {
    /// Read a [`SceneConfig`] from a JSON file.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the given path is not found or readable.
    ///   - the parsing / deserialization of the file failed.
    pub fn from_file(path: &Path) -> GeoOpticsResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            GeoOpticsError::Config(format!("cannot read file {} : {}", path.display(), e))
        })?;
        info!("reading scene configuration from {}", path.display());
        Self::from_string(&contents)
    }
    /// Read a [`SceneConfig`] from a JSON string.
    ///
    /// # Errors
    ///
    /// This function will return an error if the deserialization failed.
    pub fn from_string(config: &str) -> GeoOpticsResult<Self> {
        serde_json::from_str(config)
            .map_err(|e| GeoOpticsError::Config(format!("parsing of scene configuration failed: {e}")))
    }
    /// Returns the [`SceneKind`] given by the chosen object.
    #[must_use]
    pub const fn scene_kind(&self) -> SceneKind {
        SceneKind::for_object(self.object)
    }
    /// Returns the optic configuration, including the surface type / focal length model overrides.
    #[must_use]
    pub fn optic_config(&self) -> OpticConfig {
        let mut config = self
            .optic
            .clone()
            .unwrap_or_else(|| OpticConfig::for_type(self.optic_type));
        if let Some(surface_type) = self.surface_type {
            config.surface_type = surface_type;
        }
        if let Some(model) = self.focal_length_model {
            config.focal_length_model = model;
        }
        config
    }
    /// Default object positions of the given [`SceneKind`].
    #[must_use]
    pub fn default_object_positions(kind: SceneKind) -> Vec<Point2<f64>> {
        match kind {
            SceneKind::Arrow => vec![Point2::new(-170.0, 27.0), Point2::new(-100.0, -20.0)],
            SceneKind::Framed => vec![Point2::new(-170.0, 27.0)],
            SceneKind::Light => vec![Point2::new(-170.0, 20.0), Point2::new(-200.0, -30.0)],
        }
    }
    /// Returns the configured object positions or the defaults of the scene kind.
    #[must_use]
    pub fn object_positions_or_default(&self) -> Vec<Point2<f64>> {
        if self.object_positions.is_empty() {
            Self::default_object_positions(self.scene_kind())
        } else {
            self.object_positions.clone()
        }
    }
    /// Check the consistency of this configuration.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the optic configuration is invalid.
    ///   - a light scene is configured with a mirror.
    ///   - the number of object positions does not fit the scene kind.
    ///   - the light speed is not positive.
    pub fn validate(&self) -> GeoOpticsResult<()> {
        self.optic_config().validate()?;
        let kind = self.scene_kind();
        if kind == SceneKind::Light && self.optic_type != OpticType::Lens {
            return Err(GeoOpticsError::Config(
                "light scenes require a lens".into(),
            ));
        }
        let count = self.object_positions_or_default().len();
        if count != kind.object_count() {
            return Err(GeoOpticsError::Config(format!(
                "{kind} scene requires {} object positions, found {count}",
                kind.object_count()
            )));
        }
        if !(self.light_speed.is_finite() && self.light_speed > 0.0) {
            return Err(GeoOpticsError::Config(
                "light speed must be positive".into(),
            ));
        }
        Ok(())
    }
}
