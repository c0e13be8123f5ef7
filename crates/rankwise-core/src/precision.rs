#![forbid(unsafe_code)]

//! Fixed-decimal rounding applied at every pipeline stage boundary.
//!
//! The published examples round to three decimals after each arithmetic
//! step, and downstream comparisons depend on those truncated values, so the
//! rounding is part of the output contract rather than a formatting detail.

use serde::{Deserialize, Serialize};

/// Largest decimal count honoured; beyond this `f64` has no digits left.
pub const MAX_DECIMALS: u32 = 15;

/// Rounding policy for stage outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    /// Keep full `f64` precision.
    Full,
    /// Round half away from zero to the given number of decimals.
    Decimals(u32),
}

impl Default for Precision {
    fn default() -> Self {
        Self::REFERENCE
    }
}

impl Precision {
    /// Three decimals, as in the reference examples.
    pub const REFERENCE: Self = Self::Decimals(3);

    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Full => value,
            Self::Decimals(decimals) => round_to(value, decimals),
        }
    }

    /// Round every element in place.
    pub fn apply_slice(self, values: &mut [f64]) {
        if self == Self::Full {
            return;
        }
        for value in values {
            *value = self.apply(*value);
        }
    }

    #[must_use]
    pub fn apply_vec(self, mut values: Vec<f64>) -> Vec<f64> {
        self.apply_slice(&mut values);
        values
    }
}

/// Round `value` half away from zero to `decimals` places.
///
/// Non-finite inputs, and values too large to scale, are returned unchanged.
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals.min(MAX_DECIMALS) as i32);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(-0.125, 2), -0.13);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(0.4134, 3), 0.413);
    }

    #[test]
    fn full_precision_is_identity() {
        let value = 1.0 / 3.0;
        assert_eq!(Precision::Full.apply(value), value);
    }

    #[test]
    fn default_matches_reference_examples() {
        assert_eq!(Precision::default(), Precision::Decimals(3));
        assert_eq!(Precision::default().apply(2.0 / 3.0), 0.667);
    }

    #[test]
    fn non_finite_passes_through() {
        assert!(round_to(f64::NAN, 3).is_nan());
        assert_eq!(round_to(f64::INFINITY, 3), f64::INFINITY);
        assert_eq!(round_to(f64::MAX, 3), f64::MAX);
    }

    #[test]
    fn apply_vec_rounds_every_element() {
        let rounded = Precision::Decimals(2).apply_vec(vec![0.125, 1.0 / 3.0, -0.004]);
        assert_eq!(rounded, vec![0.13, 0.33, -0.0]);
    }
}
