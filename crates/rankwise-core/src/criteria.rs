#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;
use crate::mode::RuntimeMode;

/// Which extreme of a criterion is preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Maximize,
    Minimize,
}

impl Direction {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Maximize => Self::Minimize,
            Self::Minimize => Self::Maximize,
        }
    }

    /// Difference `a − b` oriented so that a positive result means `a` is better.
    #[must_use]
    pub fn advantage(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Maximize => a - b,
            Self::Minimize => b - a,
        }
    }
}

/// Criterion weights: finite and non-negative.
///
/// Weights are not required to sum to one; unnormalized vectors are logged
/// at debug level and used as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Weights(Vec<f64>);

impl Weights {
    pub fn new(values: Vec<f64>) -> Result<Self, PipelineError> {
        if let Some((criterion, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !(v.is_finite() && **v >= 0.0))
        {
            return Err(PipelineError::InvalidWeight { criterion, value });
        }
        let weights = Self(values);
        if !weights.is_normalized(1e-6) {
            tracing::debug!(sum = weights.sum(), "criterion weights do not sum to one");
        }
        Ok(weights)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    #[must_use]
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.sum() - 1.0).abs() <= tolerance
    }

    /// Fail unless there is exactly one weight per criterion.
    pub fn check_len(&self, criteria: usize) -> Result<(), PipelineError> {
        if self.0.len() != criteria {
            return Err(PipelineError::WeightShape {
                expected: criteria,
                actual: self.0.len(),
            });
        }
        Ok(())
    }
}

impl TryFrom<Vec<f64>> for Weights {
    type Error = PipelineError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<Weights> for Vec<f64> {
    fn from(weights: Weights) -> Self {
        weights.0
    }
}

/// Fail unless there is exactly one direction per criterion.
pub fn check_directions(directions: &[Direction], criteria: usize) -> Result<(), PipelineError> {
    if directions.len() != criteria {
        return Err(PipelineError::DirectionShape {
            expected: criteria,
            actual: directions.len(),
        });
    }
    Ok(())
}

/// Finite-value check for a plain vector, honouring the runtime mode.
pub fn validate_finite_vector(
    values: &[f64],
    mode: RuntimeMode,
    check_finite: bool,
) -> Result<(), PipelineError> {
    if mode.must_check_finite(check_finite) && values.iter().any(|v| !v.is_finite()) {
        return Err(PipelineError::NonFiniteInput);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_and_nan_weights() {
        assert_eq!(
            Weights::new(vec![0.5, -0.1]).expect_err("negative"),
            PipelineError::InvalidWeight {
                criterion: 1,
                value: -0.1
            }
        );
        assert!(matches!(
            Weights::new(vec![f64::NAN]),
            Err(PipelineError::InvalidWeight { criterion: 0, .. })
        ));
    }

    #[test]
    fn unnormalized_weights_are_accepted() {
        let weights = Weights::new(vec![2.0, 3.0]).expect("not enforced");
        assert!(!weights.is_normalized(1e-9));
        assert_eq!(weights.sum(), 5.0);
    }

    #[test]
    fn shape_checks() {
        let weights = Weights::new(vec![0.4, 0.3, 0.1, 0.2]).expect("valid");
        assert!(weights.check_len(4).is_ok());
        assert_eq!(
            weights.check_len(3),
            Err(PipelineError::WeightShape {
                expected: 3,
                actual: 4
            })
        );
        assert_eq!(
            check_directions(&[Direction::Maximize], 2),
            Err(PipelineError::DirectionShape {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn advantage_is_oriented() {
        assert_eq!(Direction::Maximize.advantage(5.0, 3.0), 2.0);
        assert_eq!(Direction::Minimize.advantage(5.0, 3.0), -2.0);
        assert_eq!(Direction::Minimize.opposite(), Direction::Maximize);
    }

    #[test]
    fn try_from_runs_validation() {
        let weights = Weights::try_from(vec![0.25, 0.75]).expect("valid weights");
        assert_eq!(Vec::<f64>::from(weights), vec![0.25, 0.75]);
        assert!(Weights::try_from(vec![-1.0]).is_err());
    }
}
