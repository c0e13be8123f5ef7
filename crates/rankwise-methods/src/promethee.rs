#![forbid(unsafe_code)]

//! PROMETHEE I/II outranking flows.
//!
//! For every criterion the oriented pairwise differences are mapped through
//! that criterion's [`PreferenceFunction`]. Leaving (`φ+`) and entering
//! (`φ−`) flows are weighted sums over criteria divided by `m − 1`; the
//! PROMETHEE II net flow is `φ+ − φ−` and sums to zero over alternatives.

use rankwise_core::{
    DecisionMatrix, Direction, PipelineError, Precision, Ranking, RuntimeMode, ScoreOrder,
    Weights, pairwise_differences,
};
use serde::{Deserialize, Serialize};

use crate::error::MethodError;
use crate::preference::{PreferenceFunction, check_preference_count, preference_matrix};
use crate::validation::check_crisp_inputs;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrometheeOptions {
    pub mode: RuntimeMode,
    pub check_finite: bool,
    pub precision: Precision,
}

impl Default for PrometheeOptions {
    fn default() -> Self {
        Self {
            mode: RuntimeMode::Strict,
            check_finite: true,
            precision: Precision::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrometheeResult {
    /// `φ+`, PROMETHEE I leaving flow.
    pub positive_flow: Vec<f64>,
    /// `φ−`, PROMETHEE I entering flow.
    pub negative_flow: Vec<f64>,
    /// `φ = φ+ − φ−`, PROMETHEE II; higher is better.
    pub net_flow: Vec<f64>,
    /// Unweighted net flow per alternative (row) and criterion (column).
    pub unicriterion_flows: Vec<Vec<f64>>,
}

impl PrometheeResult {
    pub fn ranking(&self) -> Result<Ranking, PipelineError> {
        Ranking::from_scores(&self.net_flow, ScoreOrder::HigherIsBetter)
    }

    /// PROMETHEE I partial preorder: `a` outranks `b` when it is at least as
    /// good on both flows and strictly better on one. `None` when either
    /// index is out of range.
    #[must_use]
    pub fn outranks(&self, a: usize, b: usize) -> Option<bool> {
        let (pa, pb) = (*self.positive_flow.get(a)?, *self.positive_flow.get(b)?);
        let (na, nb) = (*self.negative_flow.get(a)?, *self.negative_flow.get(b)?);
        Some(pa >= pb && na <= nb && (pa > pb || na < nb))
    }
}

pub fn promethee(
    matrix: &DecisionMatrix,
    weights: &Weights,
    directions: &[Direction],
    functions: &[PreferenceFunction],
    options: PrometheeOptions,
) -> Result<PrometheeResult, MethodError> {
    check_crisp_inputs(
        matrix,
        weights,
        directions,
        options.mode,
        options.check_finite,
    )?;
    check_preference_count(functions, matrix.criteria())?;
    let m = matrix.alternatives();
    if m < 2 {
        return Err(PipelineError::TooFewAlternatives {
            required: 2,
            actual: m,
        }
        .into());
    }
    let others = (m - 1) as f64;
    let precision = options.precision;

    let mut positive = vec![0.0; m];
    let mut negative = vec![0.0; m];
    let mut net = vec![0.0; m];
    let mut unicriterion = vec![vec![0.0; matrix.criteria()]; m];
    for (j, ((direction, function), &w)) in directions
        .iter()
        .zip(functions)
        .zip(weights.as_slice())
        .enumerate()
    {
        let differences = pairwise_differences(&matrix.column(j), *direction);
        let p = preference_matrix(&differences, function);
        for a in 0..m {
            let leaving = p[a].iter().sum::<f64>() / others;
            let entering = p.iter().map(|row| row[a]).sum::<f64>() / others;
            positive[a] += w * leaving;
            negative[a] += w * entering;
            net[a] += w * (leaving - entering);
            unicriterion[a][j] = precision.apply(leaving - entering);
        }
    }

    tracing::debug!(
        method = "promethee",
        alternatives = m,
        criteria = matrix.criteria(),
        "outranking flows computed"
    );

    Ok(PrometheeResult {
        positive_flow: precision.apply_vec(positive),
        negative_flow: precision.apply_vec(negative),
        net_flow: precision.apply_vec(net),
        unicriterion_flows: unicriterion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preference::PreferenceShape;

    fn assert_close_slice(actual: &[f64], expected: &[f64], atol: f64) {
        assert_eq!(actual.len(), expected.len(), "length mismatch");
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            assert!((a - e).abs() <= atol, "index {i}: {a} vs {e}");
        }
    }

    fn book() -> (DecisionMatrix, Weights) {
        (
            DecisionMatrix::new(vec![
                vec![8.0, 7.0, 2.0, 1.0],
                vec![5.0, 3.0, 7.0, 5.0],
                vec![7.0, 5.0, 6.0, 4.0],
                vec![9.0, 9.0, 7.0, 3.0],
                vec![11.0, 10.0, 3.0, 7.0],
                vec![6.0, 9.0, 5.0, 4.0],
            ])
            .expect("valid matrix"),
            Weights::new(vec![0.4, 0.3, 0.1, 0.2]).expect("valid weights"),
        )
    }

    fn all(shape: PreferenceShape) -> Vec<PreferenceFunction> {
        vec![PreferenceFunction::new(shape, 1.0, 2.0).expect("p > q > 0"); 4]
    }

    #[test]
    fn linear_preference_flows() {
        let (matrix, weights) = book();
        let result = promethee(
            &matrix,
            &weights,
            &[Direction::Maximize; 4],
            &all(PreferenceShape::Linear),
            PrometheeOptions::default(),
        )
        .expect("book example");
        assert_close_slice(&result.positive_flow, &[0.28, 0.14, 0.22, 0.52, 0.78, 0.26], 1e-12);
        assert_close_slice(&result.negative_flow, &[0.54, 0.66, 0.44, 0.16, 0.08, 0.32], 1e-12);
        assert_close_slice(&result.net_flow, &[-0.26, -0.52, -0.22, 0.36, 0.7, -0.06], 1e-12);
        assert_eq!(
            result.ranking().expect("finite").order_of_alternatives(),
            vec![4, 3, 5, 2, 0, 1]
        );
        assert_eq!(result.outranks(4, 3), Some(true));
        assert_eq!(result.outranks(3, 4), Some(false));
        assert_eq!(result.outranks(6, 0), None);
        assert_eq!(result.outranks(0, 6), None);
    }

    #[test]
    fn gaussian_and_usual_net_flows() {
        let (matrix, weights) = book();
        let gaussian = promethee(
            &matrix,
            &weights,
            &[Direction::Maximize; 4],
            &all(PreferenceShape::Gaussian),
            PrometheeOptions::default(),
        )
        .expect("book example");
        assert_close_slice(
            &gaussian.net_flow,
            &[-0.196, -0.407, -0.202, 0.263, 0.572, -0.031],
            1e-12,
        );
        let usual = promethee(
            &matrix,
            &weights,
            &[Direction::Maximize; 4],
            &[PreferenceFunction::usual(); 4],
            PrometheeOptions::default(),
        )
        .expect("book example");
        assert_close_slice(&usual.net_flow, &[-0.28, -0.5, -0.24, 0.32, 0.84, -0.14], 1e-12);
    }

    #[test]
    fn unicriterion_flows_compose_the_net_flow() {
        let (matrix, weights) = book();
        let result = promethee(
            &matrix,
            &weights,
            &[Direction::Maximize; 4],
            &[PreferenceFunction::usual(); 4],
            PrometheeOptions {
                precision: Precision::Full,
                ..PrometheeOptions::default()
            },
        )
        .expect("book example");
        for (a, row) in result.unicriterion_flows.iter().enumerate() {
            let composed: f64 = row.iter().zip(weights.as_slice()).map(|(f, w)| f * w).sum();
            assert!((composed - result.net_flow[a]).abs() < 1e-12);
        }
    }

    #[test]
    fn single_alternative_is_rejected() {
        let matrix = DecisionMatrix::new(vec![vec![1.0]]).expect("valid");
        let weights = Weights::new(vec![1.0]).expect("valid");
        assert_eq!(
            promethee(
                &matrix,
                &weights,
                &[Direction::Maximize],
                &[PreferenceFunction::usual()],
                PrometheeOptions::default(),
            ),
            Err(MethodError::Pipeline(PipelineError::TooFewAlternatives {
                required: 2,
                actual: 1
            }))
        );
    }

    #[test]
    fn preference_function_count_must_match() {
        let (matrix, weights) = book();
        assert_eq!(
            promethee(
                &matrix,
                &weights,
                &[Direction::Maximize; 4],
                &[PreferenceFunction::usual(); 3],
                PrometheeOptions::default(),
            ),
            Err(MethodError::PreferenceCount {
                expected: 4,
                actual: 3
            })
        );
    }
}
