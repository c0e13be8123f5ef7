#![forbid(unsafe_code)]

//! Preference functions shared by PROMETHEE and SIR.
//!
//! A preference function maps the oriented difference `d = x_a − x_b` on one
//! criterion to a degree in `[0, 1]`. Thresholds are validated once at
//! construction so [`PreferenceFunction::degree`] is total.

use serde::{Deserialize, Serialize};

use crate::error::MethodError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceShape {
    /// Strict preference for any positive difference.
    Usual,
    /// Strict preference beyond the indifference threshold `q`.
    UShape,
    /// Linear ramp from 0 to the preference threshold `p`.
    VShape,
    /// 0 up to `q`, 0.5 up to `p`, 1 beyond.
    Level,
    /// Linear ramp between `q` and `p`.
    Linear,
    /// `1 − exp(−d² / 2p²)` for positive differences.
    Gaussian,
}

/// A validated preference function: shape plus thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PreferenceSpec", into = "PreferenceSpec")]
pub struct PreferenceFunction {
    shape: PreferenceShape,
    q: f64,
    p: f64,
}

/// Serialized form of a [`PreferenceFunction`]; thresholds default to 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreferenceSpec {
    pub shape: PreferenceShape,
    #[serde(default)]
    pub q: f64,
    #[serde(default)]
    pub p: f64,
}

impl PreferenceFunction {
    /// Validate thresholds for `shape`.
    ///
    /// | shape            | requirement   |
    /// |------------------|---------------|
    /// | usual            | none          |
    /// | u-shape          | `q >= 0`      |
    /// | v-shape, gaussian| `p > 0`       |
    /// | level, linear    | `p > q > 0`   |
    pub fn new(shape: PreferenceShape, q: f64, p: f64) -> Result<Self, MethodError> {
        let valid = match shape {
            PreferenceShape::Usual => true,
            PreferenceShape::UShape => q.is_finite() && q >= 0.0,
            PreferenceShape::VShape | PreferenceShape::Gaussian => p.is_finite() && p > 0.0,
            PreferenceShape::Level | PreferenceShape::Linear => {
                q.is_finite() && p.is_finite() && q > 0.0 && p > q
            }
        };
        if !valid {
            return Err(MethodError::InvalidPreferenceThresholds { shape, q, p });
        }
        Ok(Self { shape, q, p })
    }

    #[must_use]
    pub const fn usual() -> Self {
        Self {
            shape: PreferenceShape::Usual,
            q: 0.0,
            p: 0.0,
        }
    }

    #[must_use]
    pub const fn shape(&self) -> PreferenceShape {
        self.shape
    }

    #[must_use]
    pub const fn indifference(&self) -> f64 {
        self.q
    }

    #[must_use]
    pub const fn preference(&self) -> f64 {
        self.p
    }

    /// Preference degree for the oriented difference `d`.
    #[must_use]
    pub fn degree(&self, d: f64) -> f64 {
        let (q, p) = (self.q, self.p);
        match self.shape {
            PreferenceShape::Usual => step(d > 0.0),
            PreferenceShape::UShape => step(d > q),
            PreferenceShape::VShape => {
                if d <= 0.0 {
                    0.0
                } else if d > p {
                    1.0
                } else {
                    d / p
                }
            }
            PreferenceShape::Level => {
                if d <= q {
                    0.0
                } else if d > p {
                    1.0
                } else {
                    0.5
                }
            }
            PreferenceShape::Linear => {
                if d <= q {
                    0.0
                } else if d > p {
                    1.0
                } else {
                    (d - q) / (p - q)
                }
            }
            PreferenceShape::Gaussian => {
                if d <= 0.0 {
                    0.0
                } else {
                    1.0 - (-(d * d) / (2.0 * p * p)).exp()
                }
            }
        }
    }
}

fn step(condition: bool) -> f64 {
    if condition { 1.0 } else { 0.0 }
}

impl TryFrom<PreferenceSpec> for PreferenceFunction {
    type Error = MethodError;

    fn try_from(spec: PreferenceSpec) -> Result<Self, Self::Error> {
        Self::new(spec.shape, spec.q, spec.p)
    }
}

impl From<PreferenceFunction> for PreferenceSpec {
    fn from(function: PreferenceFunction) -> Self {
        Self {
            shape: function.shape,
            q: function.q,
            p: function.p,
        }
    }
}

/// One-shot preference degree; validates the thresholds on every call.
pub fn preference(d: f64, q: f64, p: f64, shape: PreferenceShape) -> Result<f64, MethodError> {
    Ok(PreferenceFunction::new(shape, q, p)?.degree(d))
}

/// Preference matrix `P[a][b]` of one criterion from oriented differences.
pub(crate) fn preference_matrix(differences: &[Vec<f64>], function: &PreferenceFunction) -> Vec<Vec<f64>> {
    differences
        .iter()
        .enumerate()
        .map(|(a, row)| {
            row.iter()
                .enumerate()
                .map(|(b, &d)| if a == b { 0.0 } else { function.degree(d) })
                .collect()
        })
        .collect()
}

/// Fail unless there is one preference function per criterion.
pub(crate) fn check_preference_count(
    functions: &[PreferenceFunction],
    criteria: usize,
) -> Result<(), MethodError> {
    if functions.len() != criteria {
        return Err(MethodError::PreferenceCount {
            expected: criteria,
            actual: functions.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes_at_their_breakpoints() {
        let linear = PreferenceFunction::new(PreferenceShape::Linear, 1.0, 2.0).expect("p > q > 0");
        assert_eq!(linear.degree(1.0), 0.0);
        assert_eq!(linear.degree(1.5), 0.5);
        assert_eq!(linear.degree(2.0), 1.0);
        assert_eq!(linear.degree(2.5), 1.0);

        let level = PreferenceFunction::new(PreferenceShape::Level, 1.0, 2.0).expect("p > q > 0");
        assert_eq!(level.degree(1.0), 0.0);
        assert_eq!(level.degree(2.0), 0.5);
        assert_eq!(level.degree(2.01), 1.0);

        let ushape = PreferenceFunction::new(PreferenceShape::UShape, 1.0, 0.0).expect("q >= 0");
        assert_eq!(ushape.degree(1.0), 0.0);
        assert_eq!(ushape.degree(1.5), 1.0);

        let vshape = PreferenceFunction::new(PreferenceShape::VShape, 0.0, 4.0).expect("p > 0");
        assert_eq!(vshape.degree(-1.0), 0.0);
        assert_eq!(vshape.degree(1.0), 0.25);
        assert_eq!(vshape.degree(5.0), 1.0);

        assert_eq!(PreferenceFunction::usual().degree(1e-9), 1.0);
        assert_eq!(PreferenceFunction::usual().degree(0.0), 0.0);
    }

    #[test]
    fn gaussian_matches_closed_form() {
        let g = PreferenceFunction::new(PreferenceShape::Gaussian, 0.0, 2.0).expect("p > 0");
        let expected = 1.0 - (-1.0f64 / 8.0).exp();
        assert!((g.degree(1.0) - expected).abs() < 1e-15);
        assert_eq!(g.degree(0.0), 0.0);
    }

    #[test]
    fn invalid_thresholds_are_domain_errors() {
        for (shape, q, p) in [
            (PreferenceShape::Linear, 2.0, 1.0),
            (PreferenceShape::Linear, 0.0, 1.0),
            (PreferenceShape::Level, 1.0, 1.0),
            (PreferenceShape::VShape, 0.0, 0.0),
            (PreferenceShape::Gaussian, 0.0, f64::NAN),
            (PreferenceShape::UShape, -1.0, 0.0),
        ] {
            assert_eq!(
                preference(1.0, q, p, shape).map_err(|e| matches!(
                    e,
                    MethodError::InvalidPreferenceThresholds { .. }
                )),
                Err(true),
                "{shape:?} q={q} p={p}"
            );
        }
    }

    #[test]
    fn preference_matrix_has_zero_diagonal() {
        let differences = vec![vec![0.0, 3.0], vec![-3.0, 0.0]];
        let p = preference_matrix(&differences, &PreferenceFunction::usual());
        assert_eq!(p, vec![vec![0.0, 1.0], vec![0.0, 0.0]]);
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    fn any_function() -> impl Strategy<Value = PreferenceFunction> {
        (0usize..6, 0.01f64..5.0, 0.01f64..5.0).prop_map(|(shape, a, b)| {
            let (q, p) = if a < b { (a, b) } else { (b, a + 0.01) };
            let shape = [
                PreferenceShape::Usual,
                PreferenceShape::UShape,
                PreferenceShape::VShape,
                PreferenceShape::Level,
                PreferenceShape::Linear,
                PreferenceShape::Gaussian,
            ][shape];
            PreferenceFunction::new(shape, q, p).expect("0 < q < p")
        })
    }

    proptest! {
        #[test]
        fn degree_is_a_probability(function in any_function(), d in -20.0f64..20.0) {
            let degree = function.degree(d);
            prop_assert!((0.0..=1.0).contains(&degree));
            if d <= 0.0 {
                prop_assert_eq!(degree, 0.0);
            }
        }

        #[test]
        fn degree_is_monotone(function in any_function(), d in -20.0f64..20.0, step in 0.0f64..5.0) {
            prop_assert!(function.degree(d + step) >= function.degree(d));
        }
    }
}
