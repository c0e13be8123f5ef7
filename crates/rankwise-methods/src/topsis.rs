#![forbid(unsafe_code)]

//! TOPSIS: closeness to the ideal point relative to the anti-ideal point.

use rankwise_core::{
    DecisionMatrix, Direction, IdealMode, Normalization, PipelineError, Precision, Ranking,
    ReferencePoints, RuntimeMode, ScoreOrder, Weights, apply_weights, ideal_points, normalize,
};
use serde::{Deserialize, Serialize};

use crate::error::MethodError;
use crate::validation::check_crisp_inputs;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopsisOptions {
    pub mode: RuntimeMode,
    pub check_finite: bool,
    pub precision: Precision,
    pub normalization: Normalization,
    pub ideal: IdealMode,
}

impl Default for TopsisOptions {
    fn default() -> Self {
        Self {
            mode: RuntimeMode::Strict,
            check_finite: true,
            precision: Precision::default(),
            normalization: Normalization::Vector,
            ideal: IdealMode::Relative,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopsisResult {
    pub normalized: DecisionMatrix,
    pub weighted: DecisionMatrix,
    pub reference: ReferencePoints,
    /// `d+` per alternative.
    pub distance_to_ideal: Vec<f64>,
    /// `d-` per alternative.
    pub distance_to_anti_ideal: Vec<f64>,
    /// `d- / (d+ + d-)`; higher is better.
    pub closeness: Vec<f64>,
}

impl TopsisResult {
    pub fn ranking(&self) -> Result<Ranking, PipelineError> {
        Ranking::from_scores(&self.closeness, ScoreOrder::HigherIsBetter)
    }
}

pub fn topsis(
    matrix: &DecisionMatrix,
    weights: &Weights,
    directions: &[Direction],
    options: TopsisOptions,
) -> Result<TopsisResult, MethodError> {
    check_crisp_inputs(
        matrix,
        weights,
        directions,
        options.mode,
        options.check_finite,
    )?;
    let precision = options.precision;
    let normalized = normalize(matrix, options.normalization, precision)?;
    let weighted = apply_weights(&normalized, weights, precision)?;
    let reference = ideal_points(&weighted, directions, options.ideal)?;

    let distance_to_ideal: Vec<f64> = weighted
        .rows()
        .iter()
        .map(|row| euclidean(row, &reference.ideal))
        .collect();
    let distance_to_anti_ideal: Vec<f64> = weighted
        .rows()
        .iter()
        .map(|row| euclidean(row, &reference.anti_ideal))
        .collect();
    let closeness = distance_to_ideal
        .iter()
        .zip(&distance_to_anti_ideal)
        .map(|(&plus, &minus)| closeness_coefficient(plus, minus).map(|c| precision.apply(c)))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        method = "topsis",
        alternatives = matrix.alternatives(),
        criteria = matrix.criteria(),
        "closeness coefficients computed"
    );

    Ok(TopsisResult {
        normalized,
        weighted,
        reference,
        distance_to_ideal: precision.apply_vec(distance_to_ideal),
        distance_to_anti_ideal: precision.apply_vec(distance_to_anti_ideal),
        closeness,
    })
}

/// `d- / (d+ + d-)`, failing when both distances are zero.
pub fn closeness_coefficient(
    distance_to_ideal: f64,
    distance_to_anti_ideal: f64,
) -> Result<f64, MethodError> {
    let total = distance_to_ideal + distance_to_anti_ideal;
    if total == 0.0 {
        return Err(PipelineError::DegenerateRange {
            quantity: "distance between ideal and anti-ideal",
        }
        .into());
    }
    Ok(distance_to_anti_ideal / total)
}

pub(crate) fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    fn problem() -> impl Strategy<Value = (Vec<Vec<f64>>, Vec<f64>, Vec<bool>)> {
        (2usize..8, 1usize..5).prop_flat_map(|(m, n)| {
            (
                proptest::collection::vec(proptest::collection::vec(1.0f64..100.0, n), m),
                proptest::collection::vec(0.05f64..1.0, n),
                proptest::collection::vec(any::<bool>(), n),
            )
        })
    }

    proptest! {
        #[test]
        fn closeness_is_in_unit_interval((rows, w, maximize) in problem()) {
            let matrix = DecisionMatrix::new(rows).expect("valid shape");
            let weights = Weights::new(w).expect("positive weights");
            let directions: Vec<Direction> = maximize
                .into_iter()
                .map(|max| if max { Direction::Maximize } else { Direction::Minimize })
                .collect();
            let options = TopsisOptions { precision: Precision::Full, ..TopsisOptions::default() };
            match topsis(&matrix, &weights, &directions, options) {
                Ok(result) => {
                    for c in result.closeness {
                        prop_assert!((0.0..=1.0).contains(&c));
                    }
                }
                Err(err) => prop_assert!(
                    matches!(err, MethodError::Pipeline(PipelineError::DegenerateRange { .. })),
                    "unexpected error {err:?}"
                ),
            }
        }
    }
}
