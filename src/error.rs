#![warn(missing_docs)]
//! Crate specific error structures
use std::{error::Error, fmt::Display};

/// Geometric optics specific Result type
pub type GeoOpticsResult<T> = std::result::Result<T, GeoOpticsError>;

/// Errors that can be returned by the configuration functions of this crate.
///
/// Numerical edge cases of the optics model (object at the focal point, degenerate rays, ...) are never
/// reported as errors. Only invalid configurations end up here.
#[derive(Debug, PartialEq, Eq)]
pub enum GeoOpticsError {
    /// invalid parameters of an `Optic` (out of range, NaN, ...)
    Optic(String),
    /// error while setting up or mutating a `Scene`
    Scene(String),
    /// errors while reading or parsing a scene configuration
    Config(String),
    /// errors of the command line front-end
    Console(String),
    /// errors not falling in one of the categories above
    Other(String),
}

impl Display for GeoOpticsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Optic(m) => {
                write!(f, "Optic:{m}")
            }
            Self::Scene(m) => {
                write!(f, "Scene:{m}")
            }
            Self::Config(m) => {
                write!(f, "Config:{m}")
            }
            Self::Console(m) => {
                write!(f, "Console:{m}")
            }
            Self::Other(m) => write!(f, "GeoOptics Error:Other:{m}"),
        }
    }
}
impl Error for GeoOpticsError {}

impl std::convert::From<String> for GeoOpticsError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}
#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn from() {
        let error = GeoOpticsError::from("test".to_string());
        assert_eq!(error, GeoOpticsError::Other("test".to_string()));
    }
    #[test]
    fn display() {
        assert_eq!(
            format!("{}", GeoOpticsError::Optic("test".to_string())),
            "Optic:test"
        );
        assert_eq!(
            format!("{}", GeoOpticsError::Scene("test".to_string())),
            "Scene:test"
        );
        assert_eq!(
            format!("{}", GeoOpticsError::Config("test".to_string())),
            "Config:test"
        );
        assert_eq!(
            format!("{}", GeoOpticsError::Console("test".to_string())),
            "Console:test"
        );
        assert_eq!(
            format!("{}", GeoOpticsError::Other("test".to_string())),
            "GeoOptics Error:Other:test"
        );
    }
    #[test]
    fn debug() {
        assert_eq!(
            format!("{:?}", GeoOpticsError::Optic("test".to_string())),
            "Optic(\"test\")"
        );
    }
}
