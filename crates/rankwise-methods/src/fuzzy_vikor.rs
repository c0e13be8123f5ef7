#![forbid(unsafe_code)]

//! Fuzzy VIKOR: aggregate linguistic judgments, defuzzify them by centroid,
//! then run crisp VIKOR on the result.

use rankwise_core::{DecisionMatrix, Direction, Precision, RuntimeMode, Weights};
use rankwise_fuzzy::{AggregationRule, Defuzzify, FuzzyNumber};
use serde::{Deserialize, Serialize};

use crate::error::MethodError;
use crate::judgments::FuzzyJudgments;
use crate::vikor::{VikorOptions, VikorResult, vikor};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzyVikorOptions {
    /// Passed to the crisp VIKOR run over the defuzzified values.
    pub mode: RuntimeMode,
    pub check_finite: bool,
    pub precision: Precision,
    pub aggregation: AggregationRule,
    /// Strategy weight; `None` uses `(n + 1) / 2n`.
    pub v: Option<f64>,
}

impl Default for FuzzyVikorOptions {
    fn default() -> Self {
        Self {
            mode: RuntimeMode::Strict,
            check_finite: true,
            precision: Precision::default(),
            aggregation: AggregationRule::Envelope,
            v: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyVikorResult<const N: usize> {
    pub fuzzy_weights: Vec<FuzzyNumber<N>>,
    pub crisp_weights: Weights,
    /// Defuzzified ratings, alternatives × criteria.
    pub crisp_matrix: DecisionMatrix,
    pub vikor: VikorResult,
}

pub fn fuzzy_vikor<const N: usize, S: AsRef<str>>(
    judgments: &FuzzyJudgments<'_, N, S>,
    directions: &[Direction],
    options: FuzzyVikorOptions,
) -> Result<FuzzyVikorResult<N>, MethodError>
where
    FuzzyNumber<N>: Defuzzify,
{
    let precision = options.precision;
    let aggregated = judgments.aggregate(options.aggregation, precision)?;
    let crisp = |number: &FuzzyNumber<N>| number.defuzzify().map(|v| precision.apply(v));

    let crisp_weights = Weights::new(
        aggregated
            .weights
            .iter()
            .map(crisp)
            .collect::<Result<Vec<_>, _>>()?,
    )?;
    let crisp_matrix = DecisionMatrix::new(
        aggregated
            .ratings
            .iter()
            .map(|row| row.iter().map(crisp).collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()?,
    )?;

    let vikor = vikor(
        &crisp_matrix,
        &crisp_weights,
        directions,
        VikorOptions {
            mode: options.mode,
            check_finite: options.check_finite,
            precision,
            v: options.v,
        },
    )?;

    Ok(FuzzyVikorResult {
        fuzzy_weights: aggregated.weights,
        crisp_weights,
        crisp_matrix,
        vikor,
    })
}
