//! Configuration (position and parameter ranges) of an [`Optic`](super::Optic).
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use super::{FocalLengthModelType, OpticType, SurfaceType};
use crate::{
    error::{GeoOpticsError, GeoOpticsResult},
    utils::RangeWithValue,
};

/// Parameter ranges and initial state of an optic.
///
/// All lengths are given in cm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpticConfig {
    /// position of the optic's centre
    pub position: Point2<f64>,
    /// diameter of the optic
    pub diameter: RangeWithValue,
    /// magnitude of the radius of curvature (indirect focal length model)
    pub radius_of_curvature: RangeWithValue,
    /// index of refraction
    pub index_of_refraction: RangeWithValue,
    /// magnitude of the focal length (direct focal length model)
    pub focal_length: RangeWithValue,
    /// initial surface type
    pub surface_type: SurfaceType,
    /// initial focal length model
    pub focal_length_model: FocalLengthModelType,
}
impl OpticConfig {
    /// Default configuration of a lens.
    #[must_use]
    pub fn lens() -> Self {
        Self {
            position: Point2::new(0.0, 0.0),
            diameter: range(30.0, 130.0, 80.0),
            radius_of_curvature: range(30.0, 130.0, 80.0),
            index_of_refraction: range(1.2, 1.87, 1.5),
            focal_length: range(30.0, 130.0, 80.0),
            surface_type: SurfaceType::Convex,
            focal_length_model: FocalLengthModelType::Indirect,
        }
    }
    /// Default configuration of a mirror.
    ///
    /// The index of refraction is fixed to 2.0 so that the lens maker formula reduces to `f = -R/2`.
    #[must_use]
    pub fn mirror() -> Self {
        Self {
            position: Point2::new(0.0, 0.0),
            diameter: range(30.0, 130.0, 80.0),
            radius_of_curvature: range(150.0, 250.0, 200.0),
            index_of_refraction: RangeWithValue::fixed(2.0),
            focal_length: range(75.0, 125.0, 100.0),
            surface_type: SurfaceType::Concave,
            focal_length_model: FocalLengthModelType::Indirect,
        }
    }
    /// Default configuration for the given [`OpticType`].
    #[must_use]
    pub fn for_type(optic_type: OpticType) -> Self {
        match optic_type {
            OpticType::Lens => Self::lens(),
            OpticType::Mirror => Self::mirror(),
        }
    }
    /// Check the consistency of this configuration.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the position is not finite.
    ///   - a range is inconsistent (`min > max`, default value outside of `[min, max]`, non finite values).
    ///   - a lower bound of the diameter, radius of curvature or focal length range is not positive.
    ///   - the index of refraction range contains values <= 1.0.
    pub fn validate(&self) -> GeoOpticsResult<()> {
        if !self.position.iter().all(|c| c.is_finite()) {
            return Err(GeoOpticsError::Config(
                "optic position must be finite".into(),
            ));
        }
        for (name, r) in [
            ("diameter", &self.diameter),
            ("radius of curvature", &self.radius_of_curvature),
            ("index of refraction", &self.index_of_refraction),
            ("focal length", &self.focal_length),
        ] {
            r.check()
                .map_err(|e| GeoOpticsError::Config(format!("invalid {name} range: {e}")))?;
        }
        for (name, r) in [
            ("diameter", &self.diameter),
            ("radius of curvature", &self.radius_of_curvature),
            ("focal length", &self.focal_length),
        ] {
            if r.min() <= 0.0 {
                return Err(GeoOpticsError::Config(format!(
                    "{name} range must be > 0.0"
                )));
            }
        }
        if self.index_of_refraction.min() <= 1.0 {
            return Err(GeoOpticsError::Config(
                "index of refraction range must be > 1.0".into(),
            ));
        }
        Ok(())
    }
}
impl Default for OpticConfig {
    fn default() -> Self {
        Self::lens()
    }
}

// the built-in ranges are consistent, no need for `RangeWithValue::new`
const fn range(min: f64, max: f64, default: f64) -> RangeWithValue {
    RangeWithValue::new_unchecked(min, max, default)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::optic::Optic;
    #[test]
    fn defaults() {
        let lens = OpticConfig::lens();
        assert_eq!(lens.diameter.default_value(), 80.0);
        assert_eq!(lens.index_of_refraction.default_value(), 1.5);
        assert_eq!(lens.surface_type, SurfaceType::Convex);
        assert!(lens.validate().is_ok());
        let mirror = OpticConfig::mirror();
        assert_eq!(mirror.radius_of_curvature.default_value(), 200.0);
        assert_eq!(mirror.index_of_refraction.min(), 2.0);
        assert_eq!(mirror.index_of_refraction.max(), 2.0);
        assert_eq!(mirror.surface_type, SurfaceType::Concave);
        assert!(mirror.validate().is_ok());
        assert_eq!(OpticConfig::default(), lens);
        assert_eq!(OpticConfig::for_type(OpticType::Mirror), mirror);
    }
    #[test]
    fn validate() {
        let mut config = OpticConfig::lens();
        config.position = Point2::new(f64::NAN, 0.0);
        assert!(config.validate().is_err());
        let mut config = OpticConfig::lens();
        config.diameter = RangeWithValue::new(0.0, 10.0, 5.0).unwrap();
        assert_eq!(
            config.validate(),
            Err(GeoOpticsError::Config("diameter range must be > 0.0".into()))
        );
        let mut config = OpticConfig::lens();
        config.index_of_refraction = RangeWithValue::new(1.0, 2.0, 1.5).unwrap();
        assert!(config.validate().is_err());
    }
    #[test]
    fn validate_deserialized_ranges() {
        let mut value = serde_json::to_value(OpticConfig::lens()).unwrap();
        value["diameter"] = serde_json::json!({"min": 30.0, "max": 130.0, "default": 500.0});
        let config: OpticConfig = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(
            config.validate(),
            Err(GeoOpticsError::Config(
                "invalid diameter range: Config:default value 500 outside of range [30, 130]".into()
            ))
        );
        assert!(Optic::new(OpticType::Lens, config).is_err());
        value["diameter"] = serde_json::json!({"min": 130.0, "max": 30.0, "default": 80.0});
        let config: OpticConfig = serde_json::from_value(value).unwrap();
        assert!(config.validate().is_err());
    }
    #[test]
    fn serde() {
        let config = OpticConfig::mirror();
        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: OpticConfig = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, config);
    }
}
