#![forbid(unsafe_code)]

use crate::error::FuzzyError;
use crate::number::{Trapezoidal, Triangular};

/// Collapse a fuzzy number to one representative real number.
pub trait Defuzzify {
    fn defuzzify(&self) -> Result<f64, FuzzyError>;
}

/// Centroid of the trapezoid `(a0, a1, a2, a3)`.
///
/// Fails when `a2 + a3 == a0 + a1`, i.e. the number collapses to a point.
pub fn centroid(a: [f64; 4]) -> Result<f64, FuzzyError> {
    let [a0, a1, a2, a3] = a;
    let denominator = -a0 - a1 + a2 + a3;
    if denominator == 0.0 {
        return Err(FuzzyError::DegenerateDefuzzification {
            components: a.to_vec(),
        });
    }
    let third = 1.0 / 3.0;
    Ok(
        (-a0 * a1 + a2 * a3 + third * (a3 - a2).powi(2) - third * (a1 - a0).powi(2))
            / denominator,
    )
}

impl Defuzzify for Trapezoidal {
    fn defuzzify(&self) -> Result<f64, FuzzyError> {
        centroid(*self.components())
    }
}

impl Defuzzify for Triangular {
    fn defuzzify(&self) -> Result<f64, FuzzyError> {
        centroid(*self.to_trapezoidal().components())
    }
}
