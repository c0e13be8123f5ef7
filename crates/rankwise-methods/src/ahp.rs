#![forbid(unsafe_code)]

//! Analytic hierarchy process.
//!
//! Priority vectors are derived from reciprocal pairwise comparison matrices
//! by one of three estimators, and alternatives' local priorities are
//! combined with the criteria weights into global priorities. Consistency
//! is advisory: an inconsistent matrix yields a warning, never an error.

use nalgebra::{DMatrix, DVector};
use rankwise_core::{
    PipelineError, Precision, Ranking, RuntimeMode, ScoreOrder, square_order,
    validate_finite_vector,
};
use serde::{Deserialize, Serialize};

use crate::error::MethodError;

/// Saaty's random consistency index for orders 1 through 10.
pub const RANDOM_INDEX: [f64; 10] = [0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49];

/// Matrices with a consistency ratio above this are flagged.
pub const CONSISTENCY_THRESHOLD: f64 = 0.1;

/// `a_ij · a_ji` may deviate from 1 by this much; covers three-decimal
/// literals such as `0.333` for `1/3`.
pub const RECIPROCAL_TOLERANCE: f64 = 1e-2;

const POWER_ITERATION_TOL: f64 = 1e-12;
const POWER_ITERATION_MAX: usize = 1000;

/// A square, positive, reciprocal judgment matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct PairwiseMatrix {
    rows: Vec<Vec<f64>>,
}

impl PairwiseMatrix {
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, MethodError> {
        let order = square_order(&rows)?;
        for i in 0..order {
            for j in 0..order {
                let value = rows[i][j];
                if !(value.is_finite() && value > 0.0) {
                    return Err(MethodError::NonPositiveJudgment {
                        row: i,
                        col: j,
                        value,
                    });
                }
                if (value * rows[j][i] - 1.0).abs() > RECIPROCAL_TOLERANCE {
                    return Err(MethodError::NotReciprocal { row: i, col: j });
                }
            }
        }
        Ok(Self { rows })
    }

    /// Perfectly consistent matrix `a_ij = v_i / v_j` for a positive vector.
    pub fn from_priorities(priorities: &[f64]) -> Result<Self, MethodError> {
        Self::new(
            priorities
                .iter()
                .map(|vi| priorities.iter().map(|vj| vi / vj).collect())
                .collect(),
        )
    }

    #[must_use]
    pub fn order(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    fn to_dmatrix(&self) -> DMatrix<f64> {
        let n = self.order();
        DMatrix::from_fn(n, n, |i, j| self.rows[i][j])
    }
}

impl TryFrom<Vec<Vec<f64>>> for PairwiseMatrix {
    type Error = MethodError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<PairwiseMatrix> for Vec<Vec<f64>> {
    fn from(matrix: PairwiseMatrix) -> Self {
        matrix.rows
    }
}

/// Estimator turning a pairwise matrix into a priority vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityMethod {
    /// Principal eigenvector by power iteration.
    #[default]
    Eigenvector,
    /// Row means of the column-normalized matrix.
    ColumnSum,
    /// Normalized geometric means of the rows.
    GeometricMean,
}

/// Principal eigenvector (summing to 1) and eigenvalue `λmax`.
#[must_use]
pub fn principal_eigen(matrix: &PairwiseMatrix) -> (Vec<f64>, f64) {
    let a = matrix.to_dmatrix();
    let n = matrix.order();
    let mut w = DVector::from_element(n, 1.0 / n as f64);
    for _ in 0..POWER_ITERATION_MAX {
        let aw = &a * &w;
        let next = &aw / aw.sum();
        let delta = (&next - &w).amax();
        w = next;
        if delta < POWER_ITERATION_TOL {
            break;
        }
    }
    let lambda = (&a * &w).sum();
    (w.iter().copied().collect(), lambda)
}

/// Priority vector of `matrix`; sums to 1 up to `precision` rounding of the
/// column-sum estimator's intermediate matrix.
#[must_use]
pub fn priority_vector(
    matrix: &PairwiseMatrix,
    method: PriorityMethod,
    precision: Precision,
) -> Vec<f64> {
    let n = matrix.order();
    let rows = matrix.rows();
    match method {
        PriorityMethod::Eigenvector => principal_eigen(matrix).0,
        PriorityMethod::ColumnSum => {
            let column_sums: Vec<f64> = (0..n)
                .map(|j| rows.iter().map(|row| row[j]).sum())
                .collect();
            rows.iter()
                .map(|row| {
                    row.iter()
                        .zip(&column_sums)
                        .map(|(a, s)| precision.apply(a / s))
                        .sum::<f64>()
                        / n as f64
                })
                .collect()
        }
        PriorityMethod::GeometricMean => {
            let means: Vec<f64> = rows
                .iter()
                .map(|row| row.iter().product::<f64>().powf(1.0 / n as f64))
                .collect();
            let total: f64 = means.iter().sum();
            means.iter().map(|g| g / total).collect()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    pub order: usize,
    pub lambda_max: f64,
    /// `CI = (λmax − n) / (n − 1)`.
    pub consistency_index: f64,
    pub random_index: f64,
    /// `CR = CI / RI[n]`.
    pub consistency_ratio: f64,
}

impl ConsistencyReport {
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.consistency_ratio <= CONSISTENCY_THRESHOLD
    }
}

/// Consistency of a judgment matrix; undefined for orders below 3 (where
/// the random index is zero) and above 10.
pub fn consistency(matrix: &PairwiseMatrix) -> Result<ConsistencyReport, MethodError> {
    let order = matrix.order();
    if !(3..=RANDOM_INDEX.len()).contains(&order) {
        return Err(MethodError::ConsistencyUndefined { order });
    }
    let (_, lambda_max) = principal_eigen(matrix);
    let consistency_index = (lambda_max - order as f64) / (order as f64 - 1.0);
    let random_index = RANDOM_INDEX[order - 1];
    Ok(ConsistencyReport {
        order,
        lambda_max,
        consistency_index,
        random_index,
        consistency_ratio: consistency_index / random_index,
    })
}

/// Position of a matrix in the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatrixRole {
    Criteria,
    Alternatives { criterion: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AhpWarning {
    Inconsistent { role: MatrixRole, ratio: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatrixConsistency {
    pub role: MatrixRole,
    /// `None` when the order has no random index.
    pub report: Option<ConsistencyReport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AhpOptions {
    pub mode: RuntimeMode,
    pub check_finite: bool,
    pub precision: Precision,
    pub method: PriorityMethod,
}

impl Default for AhpOptions {
    fn default() -> Self {
        Self {
            mode: RuntimeMode::Strict,
            check_finite: true,
            precision: Precision::default(),
            method: PriorityMethod::Eigenvector,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AhpResult {
    pub criteria_weights: Vec<f64>,
    /// One local priority vector per criterion.
    pub local_priorities: Vec<Vec<f64>>,
    /// `Σ_j local[j] · criteria_weights[j]`; higher is better.
    pub global_priorities: Vec<f64>,
    pub consistency: Vec<MatrixConsistency>,
    pub warnings: Vec<AhpWarning>,
}

impl AhpResult {
    pub fn ranking(&self) -> Result<Ranking, PipelineError> {
        Ranking::from_scores(&self.global_priorities, ScoreOrder::HigherIsBetter)
    }
}

/// Full hierarchy: one criteria matrix and one alternatives matrix per
/// criterion.
///
/// Judgments are finite by construction, but extreme ratios can overflow
/// the estimators; with finite checks enabled every derived priority vector
/// is validated.
pub fn ahp(
    criteria: &PairwiseMatrix,
    alternatives: &[PairwiseMatrix],
    options: AhpOptions,
) -> Result<AhpResult, MethodError> {
    if alternatives.len() != criteria.order() {
        return Err(MethodError::CriterionCountMismatch {
            expected: criteria.order(),
            actual: alternatives.len(),
        });
    }
    let m = alternatives.first().map_or(0, PairwiseMatrix::order);
    if let Some(bad) = alternatives.iter().find(|matrix| matrix.order() != m) {
        return Err(MethodError::AlternativeCountMismatch {
            expected: m,
            actual: bad.order(),
        });
    }
    let precision = options.precision;

    let mut consistency_reports = Vec::with_capacity(alternatives.len() + 1);
    let mut warnings = Vec::new();
    let roles = std::iter::once((MatrixRole::Criteria, criteria)).chain(
        alternatives
            .iter()
            .enumerate()
            .map(|(criterion, matrix)| (MatrixRole::Alternatives { criterion }, matrix)),
    );
    for (role, matrix) in roles {
        let report = match consistency(matrix) {
            Ok(report) => Some(report),
            Err(MethodError::ConsistencyUndefined { order }) => {
                tracing::debug!(?role, order, "consistency ratio undefined for this order");
                None
            }
            Err(other) => return Err(other),
        };
        if let Some(report) = report
            && !report.is_consistent()
        {
            tracing::warn!(
                ?role,
                order = report.order,
                ratio = report.consistency_ratio,
                "pairwise comparison matrix is inconsistent"
            );
            warnings.push(AhpWarning::Inconsistent {
                role,
                ratio: report.consistency_ratio,
            });
        }
        consistency_reports.push(MatrixConsistency { role, report });
    }

    let weights = priority_vector(criteria, options.method, precision);
    let local: Vec<Vec<f64>> = alternatives
        .iter()
        .map(|matrix| priority_vector(matrix, options.method, precision))
        .collect();
    let global: Vec<f64> = (0..m)
        .map(|i| local.iter().zip(&weights).map(|(l, w)| l[i] * w).sum())
        .collect();
    for priorities in std::iter::once(&weights).chain(&local).chain(std::iter::once(&global)) {
        validate_finite_vector(priorities, options.mode, options.check_finite)?;
    }

    tracing::debug!(
        method = "ahp",
        alternatives = m,
        criteria = criteria.order(),
        estimator = ?options.method,
        "global priorities computed"
    );

    Ok(AhpResult {
        criteria_weights: precision.apply_vec(weights),
        local_priorities: local
            .into_iter()
            .map(|priorities| precision.apply_vec(priorities))
            .collect(),
        global_priorities: precision.apply_vec(global),
        consistency: consistency_reports,
        warnings,
    })
}
