#![forbid(unsafe_code)]

//! Per-criterion reference points: ideal/anti-ideal for the TOPSIS family,
//! best/worst for VIKOR, and oriented pairwise differences for the
//! outranking methods.

use serde::{Deserialize, Serialize};

use crate::criteria::{Direction, check_directions};
use crate::error::PipelineError;
use crate::matrix::DecisionMatrix;

/// How TOPSIS derives its ideal and anti-ideal points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdealMode {
    /// Column extremes of the weighted matrix.
    #[default]
    Relative,
    /// Fixed unit bounds: 1 is ideal for maximized criteria, 0 for minimized.
    Absolute,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoints {
    pub ideal: Vec<f64>,
    pub anti_ideal: Vec<f64>,
}

/// Ideal and anti-ideal vectors of a (weighted) matrix.
pub fn ideal_points(
    matrix: &DecisionMatrix,
    directions: &[Direction],
    mode: IdealMode,
) -> Result<ReferencePoints, PipelineError> {
    check_directions(directions, matrix.criteria())?;
    let (ideal, anti_ideal) = directions
        .iter()
        .enumerate()
        .map(|(j, direction)| {
            let (high, low) = match mode {
                IdealMode::Relative => (matrix.column_max(j), matrix.column_min(j)),
                IdealMode::Absolute => (1.0, 0.0),
            };
            match direction {
                Direction::Maximize => (high, low),
                Direction::Minimize => (low, high),
            }
        })
        .unzip();
    Ok(ReferencePoints { ideal, anti_ideal })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestWorst {
    pub best: Vec<f64>,
    pub worst: Vec<f64>,
}

/// Best and worst raw value of every criterion, honouring its direction.
pub fn best_worst(
    matrix: &DecisionMatrix,
    directions: &[Direction],
) -> Result<BestWorst, PipelineError> {
    let points = ideal_points(matrix, directions, IdealMode::Relative)?;
    Ok(BestWorst {
        best: points.ideal,
        worst: points.anti_ideal,
    })
}

/// `d[a][b]` = advantage of alternative `a` over `b` on one criterion.
#[must_use]
pub fn pairwise_differences(column: &[f64], direction: Direction) -> Vec<Vec<f64>> {
    column
        .iter()
        .map(|&a| column.iter().map(|&b| direction.advantage(a, b)).collect())
        .collect()
}
