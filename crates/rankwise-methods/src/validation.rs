#![forbid(unsafe_code)]

use rankwise_core::{
    DecisionMatrix, Direction, RuntimeMode, Weights, check_directions, validate_finite_vector,
};

use crate::error::MethodError;

/// Shape and finite checks shared by every crisp method.
pub(crate) fn check_crisp_inputs(
    matrix: &DecisionMatrix,
    weights: &Weights,
    directions: &[Direction],
    mode: RuntimeMode,
    check_finite: bool,
) -> Result<(), MethodError> {
    weights.check_len(matrix.criteria())?;
    check_directions(directions, matrix.criteria())?;
    matrix.validate_finite(mode, check_finite)?;
    validate_finite_vector(weights.as_slice(), mode, check_finite)?;
    Ok(())
}

/// `(value − min) / (max − min)` over a vector, failing on a zero-width range.
pub(crate) fn unit_interval_position(
    values: &[f64],
    quantity: &'static str,
) -> Result<Vec<f64>, MethodError> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if range == 0.0 || !range.is_finite() {
        return Err(rankwise_core::PipelineError::DegenerateRange { quantity }.into());
    }
    Ok(values.iter().map(|v| (v - min) / range).collect())
}
