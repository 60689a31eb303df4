//! A closed value range with a default value, used for all user adjustable optic parameters.
use serde::{Deserialize, Serialize};

use crate::error::{GeoOpticsError, GeoOpticsResult};

/// A closed range `[min, max]` together with a default value inside the range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeWithValue {
    min: f64,
    max: f64,
    default: f64,
}
impl RangeWithValue {
    /// Creates a new [`RangeWithValue`].
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - any of the values is not finite.
    ///   - `min > max`.
    ///   - the default value lies outside `[min, max]`.
    pub fn new(min: f64, max: f64, default: f64) -> GeoOpticsResult<Self> {
        if !min.is_finite() || !max.is_finite() || !default.is_finite() {
            return Err(GeoOpticsError::Config(
                "range values must be finite".into(),
            ));
        }
        if min > max {
            return Err(GeoOpticsError::Config("range min must be <= max".into()));
        }
        if !(min..=max).contains(&default) {
            return Err(GeoOpticsError::Config(format!(
                "default value {default} outside of range [{min}, {max}]"
            )));
        }
        Ok(Self { min, max, default })
    }
    /// Check the consistency of this range, e.g. after reading it from a configuration file.
    ///
    /// # Errors
    ///
    /// This function will return an error under the same conditions as [`RangeWithValue::new`].
    pub fn check(&self) -> GeoOpticsResult<()> {
        Self::new(self.min, self.max, self.default).map(|_| ())
    }
    pub(crate) const fn new_unchecked(min: f64, max: f64, default: f64) -> Self {
        Self { min, max, default }
    }
    /// Create a degenerated range containing only a single value.
    #[must_use]
    pub const fn fixed(value: f64) -> Self {
        Self {
            min: value,
            max: value,
            default: value,
        }
    }
    /// Returns the lower bound of this [`RangeWithValue`].
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }
    /// Returns the upper bound of this [`RangeWithValue`].
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }
    /// Returns the default value of this [`RangeWithValue`].
    #[must_use]
    pub const fn default_value(&self) -> f64 {
        self.default
    }
    /// Check if the given value lies inside the range (bounds included).
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
    /// Clamp the given value to the range.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
    /// Check the given value against the range.
    ///
    /// # Errors
    ///
    /// This function returns an [`GeoOpticsError::Optic`] naming the given quantity if the value is NaN or
    /// outside of the range.
    pub fn validate(&self, value: f64, quantity: &str) -> GeoOpticsResult<f64> {
        if value.is_nan() || !self.contains(value) {
            return Err(GeoOpticsError::Optic(format!(
                "{quantity} {value} outside of range [{}, {}]",
                self.min, self.max
            )));
        }
        Ok(value)
    }
}
