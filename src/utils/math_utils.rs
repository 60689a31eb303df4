//! Numeric conversion helpers
//!
//! The ray counts handled by the engine are far below 2^52, so the lossy casts below never lose information in
//! practice. The helpers keep the lint exceptions in a single place.

/// Convert a ray (or vertex) count into an `f64`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn usize_to_f64(value: usize) -> f64 {
    value as f64
}

/// Convert a non-negative `f64` into a count.
///
/// The fractional part is truncated. Negative values and NaN saturate to 0, values beyond `usize::MAX` to
/// `usize::MAX`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn f64_to_usize(value: f64) -> usize {
    value as usize
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn conversions() {
        assert_eq!(usize_to_f64(25), 25.0);
        assert_eq!(f64_to_usize(2.9), 2);
        assert_eq!(f64_to_usize(-1.0), 0);
        assert_eq!(f64_to_usize(f64::NAN), 0);
    }
}
