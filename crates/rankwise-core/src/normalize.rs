#![forbid(unsafe_code)]

//! Column rescaling of a raw decision matrix.

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;
use crate::matrix::DecisionMatrix;
use crate::precision::Precision;

/// Column normalization policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// Divide each column by its Euclidean norm.
    #[default]
    Vector,
    /// Divide each column by its maximum.
    Linear,
}

impl Normalization {
    fn divisor(self, column: &[f64]) -> f64 {
        match self {
            Self::Vector => column.iter().map(|v| v * v).sum::<f64>().sqrt(),
            Self::Linear => column.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }

    const fn divisor_name(self) -> &'static str {
        match self {
            Self::Vector => "euclidean norm",
            Self::Linear => "maximum",
        }
    }
}

/// Rescale every column of `matrix` and round the result to `precision`.
///
/// Fails with [`PipelineError::ZeroColumn`] when a column's divisor is zero.
pub fn normalize(
    matrix: &DecisionMatrix,
    policy: Normalization,
    precision: Precision,
) -> Result<DecisionMatrix, PipelineError> {
    let divisors = (0..matrix.criteria())
        .map(|criterion| {
            let divisor = policy.divisor(&matrix.column(criterion));
            if divisor == 0.0 {
                Err(PipelineError::ZeroColumn {
                    criterion,
                    what: policy.divisor_name(),
                })
            } else {
                Ok(divisor)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(matrix.map_cells(|_, j, value| precision.apply(value / divisors[j])))
}
