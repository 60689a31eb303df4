//! Selection of the light rays that are drawn from an optical object.
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The ray representation used by [`LightRays`](crate::light_rays::LightRays).
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
pub enum RaysType {
    /// three rays: through the center and through the top and bottom edge of the optic
    #[default]
    Marginal,
    /// three rays: parallel to the optical axis, through the center and through the focal point
    Principal,
    /// a fan of rays, its density depends on the distance to the optic
    Many,
    /// no rays at all
    None,
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;
    #[test]
    fn strings() {
        assert_eq!(RaysType::default(), RaysType::Marginal);
        assert_eq!(RaysType::from_str("many").unwrap(), RaysType::Many);
        assert_eq!(RaysType::None.to_string(), "none");
        assert_eq!(
            serde_json::from_str::<RaysType>("\"principal\"").unwrap(),
            RaysType::Principal
        );
        assert_eq!(RaysType::iter().count(), 4);
    }
}
