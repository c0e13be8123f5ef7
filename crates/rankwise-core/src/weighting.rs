#![forbid(unsafe_code)]

use crate::criteria::Weights;
use crate::error::PipelineError;
use crate::matrix::DecisionMatrix;
use crate::precision::Precision;

/// Multiply every column by its criterion weight, rounding each product.
pub fn apply_weights(
    matrix: &DecisionMatrix,
    weights: &Weights,
    precision: Precision,
) -> Result<DecisionMatrix, PipelineError> {
    weights.check_len(matrix.criteria())?;
    let w = weights.as_slice();
    Ok(matrix.map_cells(|_, j, value| precision.apply(value * w[j])))
}
