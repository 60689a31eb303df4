//! Module for additional computational capabilities
pub mod geom;
pub mod math_utils;
pub mod range;
pub mod uom_macros;
pub use geom::{cm_to_point, point_to_cm};
pub use math_utils::{f64_to_usize, usize_to_f64};
pub use range::RangeWithValue;
