#![forbid(unsafe_code)]

//! SIR (superiority and inferiority ranking).
//!
//! `S[a][j] = Σ_b P_j(x_a − x_b)` counts how strongly `a` beats the others on
//! criterion `j`, `I[a][j] = Σ_b P_j(x_b − x_a)` how strongly it is beaten.
//! Each matrix is reduced to one flow per alternative, either by a weighted
//! sum or by a TOPSIS-style Minkowski distance to the column extremes.

use rankwise_core::{
    DecisionMatrix, Direction, PipelineError, Precision, Ranking, RuntimeMode, ScoreOrder,
    Weights, check_directions, pairwise_differences,
};
use serde::{Deserialize, Serialize};

use crate::error::MethodError;
use crate::preference::{PreferenceFunction, check_preference_count, preference_matrix};
use crate::validation::check_crisp_inputs;

const RELATIVE_FLOW_DENOMINATOR: &str = "superiority plus inferiority flow";

/// Reduction of the S and I matrices to per-alternative flows.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SirAggregation {
    /// Weighted sum over criteria.
    #[default]
    Saw,
    /// `d⁻ / (d⁺ + d⁻)` with weighted Minkowski distances of order `exponent`.
    Topsis { exponent: f64 },
}

/// Which composed flow ranks the alternatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SirScore {
    /// `n = s − i`.
    #[default]
    Net,
    /// `r = s / (s + i)`.
    Ratio,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SirOptions {
    pub mode: RuntimeMode,
    pub check_finite: bool,
    pub precision: Precision,
    pub aggregation: SirAggregation,
    pub score: SirScore,
}

impl Default for SirOptions {
    fn default() -> Self {
        Self {
            mode: RuntimeMode::Strict,
            check_finite: true,
            precision: Precision::default(),
            aggregation: SirAggregation::Saw,
            score: SirScore::Net,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SirResult {
    /// S matrix, alternatives × criteria.
    pub superiority: DecisionMatrix,
    /// I matrix, alternatives × criteria.
    pub inferiority: DecisionMatrix,
    pub superiority_flow: Vec<f64>,
    pub inferiority_flow: Vec<f64>,
    pub net_flow: Vec<f64>,
    /// `None` when some alternative has zero superiority and inferiority
    /// flow; always present when [`SirScore::Ratio`] was selected.
    pub relative_flow: Option<Vec<f64>>,
    pub score: SirScore,
}

impl SirResult {
    /// The flow selected by [`SirOptions::score`].
    #[must_use]
    pub fn scores(&self) -> Option<&[f64]> {
        match self.score {
            SirScore::Net => Some(&self.net_flow),
            SirScore::Ratio => self.relative_flow.as_deref(),
        }
    }

    pub fn ranking(&self) -> Result<Ranking, PipelineError> {
        let scores = self.scores().ok_or(PipelineError::DegenerateRange {
            quantity: RELATIVE_FLOW_DENOMINATOR,
        })?;
        Ranking::from_scores(scores, ScoreOrder::HigherIsBetter)
    }
}

pub fn sir(
    matrix: &DecisionMatrix,
    weights: &Weights,
    directions: &[Direction],
    functions: &[PreferenceFunction],
    options: SirOptions,
) -> Result<SirResult, MethodError> {
    check_crisp_inputs(
        matrix,
        weights,
        directions,
        options.mode,
        options.check_finite,
    )?;
    check_preference_count(functions, matrix.criteria())?;
    if let SirAggregation::Topsis { exponent } = options.aggregation
        && !(exponent.is_finite() && exponent >= 1.0)
    {
        return Err(MethodError::InvalidExponent { exponent });
    }
    let precision = options.precision;
    let (superiority, inferiority) = superiority_inferiority(matrix, directions, functions)?;

    let w = weights.as_slice();
    let superiority_flow = precision.apply_vec(reduce(&superiority, w, options.aggregation)?);
    let inferiority_flow = precision.apply_vec(reduce(&inferiority, w, options.aggregation)?);

    let net_flow = superiority_flow
        .iter()
        .zip(&inferiority_flow)
        .map(|(s, i)| precision.apply(s - i))
        .collect();
    let relative_flow: Option<Vec<f64>> = superiority_flow
        .iter()
        .zip(&inferiority_flow)
        .map(|(s, i)| {
            let total = s + i;
            (total != 0.0).then(|| precision.apply(s / total))
        })
        .collect();
    if options.score == SirScore::Ratio && relative_flow.is_none() {
        return Err(PipelineError::DegenerateRange {
            quantity: RELATIVE_FLOW_DENOMINATOR,
        }
        .into());
    }

    tracing::debug!(
        method = "sir",
        alternatives = matrix.alternatives(),
        criteria = matrix.criteria(),
        aggregation = ?options.aggregation,
        "superiority and inferiority flows computed"
    );

    Ok(SirResult {
        superiority,
        inferiority,
        superiority_flow,
        inferiority_flow,
        net_flow,
        relative_flow,
        score: options.score,
    })
}

/// The S and I matrices.
pub fn superiority_inferiority(
    matrix: &DecisionMatrix,
    directions: &[Direction],
    functions: &[PreferenceFunction],
) -> Result<(DecisionMatrix, DecisionMatrix), MethodError> {
    check_directions(directions, matrix.criteria())?;
    check_preference_count(functions, matrix.criteria())?;
    let m = matrix.alternatives();
    let n = matrix.criteria();
    let mut s = vec![vec![0.0; n]; m];
    let mut i = vec![vec![0.0; n]; m];
    for (j, (direction, function)) in directions.iter().zip(functions).enumerate() {
        let p = preference_matrix(&pairwise_differences(&matrix.column(j), *direction), function);
        for a in 0..m {
            s[a][j] = p[a].iter().sum();
            i[a][j] = p.iter().map(|row| row[a]).sum();
        }
    }
    Ok((DecisionMatrix::new(s)?, DecisionMatrix::new(i)?))
}

fn reduce(
    flows: &DecisionMatrix,
    weights: &[f64],
    aggregation: SirAggregation,
) -> Result<Vec<f64>, MethodError> {
    match aggregation {
        SirAggregation::Saw => Ok(flows
            .rows()
            .iter()
            .map(|row| row.iter().zip(weights).map(|(x, w)| w * x).sum())
            .collect()),
        SirAggregation::Topsis { exponent } => {
            let top: Vec<f64> = (0..flows.criteria()).map(|j| flows.column_max(j)).collect();
            let bottom: Vec<f64> = (0..flows.criteria()).map(|j| flows.column_min(j)).collect();
            flows
                .rows()
                .iter()
                .map(|row| {
                    let to_top = minkowski(row, &top, weights, exponent);
                    let to_bottom = minkowski(row, &bottom, weights, exponent);
                    let total = to_top + to_bottom;
                    if total == 0.0 {
                        return Err(PipelineError::DegenerateRange {
                            quantity: "distance between flow extremes",
                        }
                        .into());
                    }
                    Ok(to_bottom / total)
                })
                .collect()
        }
    }
}

fn minkowski(row: &[f64], target: &[f64], weights: &[f64], exponent: f64) -> f64 {
    row.iter()
        .zip(target)
        .zip(weights)
        .map(|((x, t), w)| (w * (x - t).abs()).powf(exponent))
        .sum::<f64>()
        .powf(1.0 / exponent)
}
