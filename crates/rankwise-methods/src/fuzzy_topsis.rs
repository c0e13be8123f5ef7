#![forbid(unsafe_code)]

//! Fuzzy TOPSIS over triangular judgments from several decision makers.
//!
//! Ratings are normalized per criterion (benefit: divide by the largest
//! upper bound; cost: smallest lower bound divided by each component,
//! reversed), multiplied by the fuzzy weight, and compared with the fuzzy
//! ideal `(1, 1, 1)` and anti-ideal `(0, 0, 0)` by vertex distance.

use rankwise_core::{
    Direction, PipelineError, Precision, Ranking, RuntimeMode, ScoreOrder, check_directions,
    validate_finite_vector,
};
use rankwise_fuzzy::{AggregationRule, Triangular, vertex_distance};
use serde::{Deserialize, Serialize};

use crate::error::MethodError;
use crate::judgments::FuzzyJudgments;
use crate::topsis::closeness_coefficient;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzyTopsisOptions {
    pub mode: RuntimeMode,
    /// Validate the vertex distances before composing closeness.
    pub check_finite: bool,
    pub precision: Precision,
    pub aggregation: AggregationRule,
}

impl Default for FuzzyTopsisOptions {
    fn default() -> Self {
        Self {
            mode: RuntimeMode::Strict,
            check_finite: true,
            precision: Precision::default(),
            aggregation: AggregationRule::Envelope,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyTopsisResult {
    pub fuzzy_weights: Vec<Triangular>,
    /// Alternatives × criteria.
    pub normalized: Vec<Vec<Triangular>>,
    pub weighted: Vec<Vec<Triangular>>,
    pub distance_to_ideal: Vec<f64>,
    pub distance_to_anti_ideal: Vec<f64>,
    pub closeness: Vec<f64>,
}

impl FuzzyTopsisResult {
    pub fn ranking(&self) -> Result<Ranking, PipelineError> {
        Ranking::from_scores(&self.closeness, ScoreOrder::HigherIsBetter)
    }
}

pub fn fuzzy_topsis<S: AsRef<str>>(
    judgments: &FuzzyJudgments<'_, 3, S>,
    directions: &[Direction],
    options: FuzzyTopsisOptions,
) -> Result<FuzzyTopsisResult, MethodError> {
    let precision = options.precision;
    check_directions(directions, judgments.criteria())?;
    let aggregated = judgments.aggregate(options.aggregation, precision)?;
    let normalized = normalize_fuzzy(&aggregated.ratings, directions, precision)?;

    let weighted = normalized
        .iter()
        .map(|row| {
            row.iter()
                .zip(&aggregated.weights)
                .map(|(rating, weight)| Ok(rating.try_mul(weight)?.rounded(precision)))
                .collect::<Result<Vec<_>, MethodError>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    let ideal = Triangular::crisp(1.0);
    let anti_ideal = Triangular::crisp(0.0);
    let distance_to_ideal: Vec<f64> = weighted
        .iter()
        .map(|row| row.iter().map(|v| vertex_distance(v, &ideal)).sum())
        .collect();
    let distance_to_anti_ideal: Vec<f64> = weighted
        .iter()
        .map(|row| row.iter().map(|v| vertex_distance(v, &anti_ideal)).sum())
        .collect();
    validate_finite_vector(&distance_to_ideal, options.mode, options.check_finite)?;
    validate_finite_vector(&distance_to_anti_ideal, options.mode, options.check_finite)?;
    let closeness = distance_to_ideal
        .iter()
        .zip(&distance_to_anti_ideal)
        .map(|(&plus, &minus)| closeness_coefficient(plus, minus).map(|c| precision.apply(c)))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        method = "fuzzy_topsis",
        alternatives = weighted.len(),
        criteria = judgments.criteria(),
        decision_makers = judgments.decision_makers,
        "closeness coefficients computed"
    );

    Ok(FuzzyTopsisResult {
        fuzzy_weights: aggregated.weights,
        normalized,
        weighted,
        distance_to_ideal: precision.apply_vec(distance_to_ideal),
        distance_to_anti_ideal: precision.apply_vec(distance_to_anti_ideal),
        closeness,
    })
}

fn normalize_fuzzy(
    ratings: &[Vec<Triangular>],
    directions: &[Direction],
    precision: Precision,
) -> Result<Vec<Vec<Triangular>>, MethodError> {
    let mut normalized: Vec<Vec<Triangular>> = vec![Vec::with_capacity(directions.len()); ratings.len()];
    for (criterion, direction) in directions.iter().enumerate() {
        let column = ratings.iter().map(|row| row[criterion]);
        match direction {
            Direction::Maximize => {
                let top = column.map(|r| r.upper()).fold(f64::NEG_INFINITY, f64::max);
                if top == 0.0 {
                    return Err(PipelineError::ZeroColumn {
                        criterion,
                        what: "upper bound",
                    }
                    .into());
                }
                for (row, out) in ratings.iter().zip(normalized.iter_mut()) {
                    out.push(row[criterion].try_map(|c| c / top)?.rounded(precision));
                }
            }
            Direction::Minimize => {
                let bottom = column.map(|r| r.lower()).fold(f64::INFINITY, f64::min);
                for (row, out) in ratings.iter().zip(normalized.iter_mut()) {
                    let [l, m, h] = *row[criterion].components();
                    if l == 0.0 {
                        return Err(PipelineError::ZeroColumn {
                            criterion,
                            what: "lower bound",
                        }
                        .into());
                    }
                    out.push(Triangular::new([bottom / h, bottom / m, bottom / l])?.rounded(precision));
                }
            }
        }
    }
    Ok(normalized)
}
