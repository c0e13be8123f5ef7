#![forbid(unsafe_code)]

//! VIKOR compromise ranking.
//!
//! Per alternative `i` and criterion `j` the normalized weighted gap is
//! `u_ij = w_j (f*_j − f_ij) / (f*_j − f⁻_j)`. `S_i = Σ_j u_ij` is the group
//! utility, `R_i = max_j u_ij` the individual regret, and
//! `Q_i = v (S_i − S*) / (S⁻ − S*) + (1 − v)(R_i − R*) / (R⁻ − R*)`.
//! Lower `Q` is better.

use rankwise_core::{
    BestWorst, DecisionMatrix, Direction, PipelineError, Precision, Ranking, RuntimeMode,
    ScoreOrder, Weights, best_worst,
};
use serde::{Deserialize, Serialize};

use crate::error::MethodError;
use crate::validation::{check_crisp_inputs, unit_interval_position};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VikorOptions {
    pub mode: RuntimeMode,
    pub check_finite: bool,
    pub precision: Precision,
    /// Weight of the group-utility strategy; `None` uses `(n + 1) / 2n`.
    pub v: Option<f64>,
}

impl Default for VikorOptions {
    fn default() -> Self {
        Self {
            mode: RuntimeMode::Strict,
            check_finite: true,
            precision: Precision::default(),
            v: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VikorResult {
    pub best_worst: BestWorst,
    /// `S_i`.
    pub group_utility: Vec<f64>,
    /// `R_i`.
    pub individual_regret: Vec<f64>,
    /// Criterion that produced `R_i`; `None` when every gap is zero.
    pub regret_criterion: Vec<Option<usize>>,
    /// `Q_i`; lower is better.
    pub compromise: Vec<f64>,
    pub v: f64,
}

impl VikorResult {
    pub fn ranking(&self) -> Result<Ranking, PipelineError> {
        Ranking::from_scores(&self.compromise, ScoreOrder::LowerIsBetter)
    }
}

/// Conventional strategy weight `(n + 1) / 2n` for `n` criteria.
#[must_use]
pub fn default_strategy_weight(criteria: usize) -> f64 {
    (criteria as f64 + 1.0) / (2.0 * criteria as f64)
}

pub fn vikor(
    matrix: &DecisionMatrix,
    weights: &Weights,
    directions: &[Direction],
    options: VikorOptions,
) -> Result<VikorResult, MethodError> {
    check_crisp_inputs(
        matrix,
        weights,
        directions,
        options.mode,
        options.check_finite,
    )?;
    let precision = options.precision;
    let v = options
        .v
        .unwrap_or_else(|| default_strategy_weight(matrix.criteria()));
    if !(0.0..=1.0).contains(&v) {
        return Err(MethodError::InvalidCompromiseWeight { v });
    }

    let best_worst = best_worst(matrix, directions)?;
    let ranges: Vec<f64> = best_worst
        .best
        .iter()
        .zip(&best_worst.worst)
        .map(|(best, worst)| best - worst)
        .collect();
    if ranges.iter().any(|&range| range == 0.0) {
        return Err(PipelineError::DegenerateRange {
            quantity: "criterion value range",
        }
        .into());
    }

    let w = weights.as_slice();
    let mut group_utility = Vec::with_capacity(matrix.alternatives());
    let mut individual_regret = Vec::with_capacity(matrix.alternatives());
    let mut regret_criterion = Vec::with_capacity(matrix.alternatives());
    for row in matrix.rows() {
        let mut sum = 0.0;
        // Running maximum from zero: the first of several equal gaps wins.
        let mut regret = 0.0;
        let mut argmax = None;
        for (j, &value) in row.iter().enumerate() {
            let gap = w[j] * (best_worst.best[j] - value) / ranges[j];
            sum += gap;
            if gap > regret {
                regret = gap;
                argmax = Some(j);
            }
        }
        group_utility.push(precision.apply(sum));
        individual_regret.push(precision.apply(regret));
        regret_criterion.push(argmax);
    }

    let compromise = compromise_index(&group_utility, &individual_regret, v, precision)?;

    tracing::debug!(
        method = "vikor",
        alternatives = matrix.alternatives(),
        criteria = matrix.criteria(),
        v,
        "compromise index computed"
    );

    Ok(VikorResult {
        best_worst,
        group_utility,
        individual_regret,
        regret_criterion,
        compromise,
        v,
    })
}

/// `Q_i` from (already rounded) `S` and `R` vectors.
pub fn compromise_index(
    group_utility: &[f64],
    individual_regret: &[f64],
    v: f64,
    precision: Precision,
) -> Result<Vec<f64>, MethodError> {
    let s = unit_interval_position(group_utility, "group utility range")?;
    let r = unit_interval_position(individual_regret, "individual regret range")?;
    Ok(s.iter()
        .zip(&r)
        .map(|(s, r)| precision.apply(v * s + (1.0 - v) * r))
        .collect())
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn compromise_index_is_in_unit_interval(
            rows in (2usize..8, 1usize..5).prop_flat_map(|(m, n)| {
                proptest::collection::vec(proptest::collection::vec(0.0f64..50.0, n), m)
            }),
        ) {
            let criteria = rows[0].len();
            let matrix = DecisionMatrix::new(rows).expect("valid shape");
            let weights = Weights::new(vec![1.0 / criteria as f64; criteria]).expect("valid");
            let directions = vec![Direction::Maximize; criteria];
            let options = VikorOptions { precision: Precision::Full, ..VikorOptions::default() };
            if let Ok(result) = vikor(&matrix, &weights, &directions, options) {
                for q in &result.compromise {
                    prop_assert!((-1e-12..=1.0 + 1e-12).contains(q));
                }
                // An alternative minimal in both S and R has minimal Q.
                let s_min = result.group_utility.iter().copied().fold(f64::INFINITY, f64::min);
                let r_min = result.individual_regret.iter().copied().fold(f64::INFINITY, f64::min);
                let q_min = result.compromise.iter().copied().fold(f64::INFINITY, f64::min);
                for i in 0..result.compromise.len() {
                    if result.group_utility[i] == s_min && result.individual_regret[i] == r_min {
                        prop_assert_eq!(result.compromise[i], q_min);
                    }
                }
            }
        }
    }
}
