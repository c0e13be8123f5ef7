#![forbid(unsafe_code)]

use rankwise_core::PipelineError;
use rankwise_fuzzy::FuzzyError;
use thiserror::Error;

use crate::preference::PreferenceShape;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MethodError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error(transparent)]
    Fuzzy(#[from] FuzzyError),
    #[error("invalid thresholds for {shape:?} preference: q={q}, p={p}")]
    InvalidPreferenceThresholds {
        shape: PreferenceShape,
        q: f64,
        p: f64,
    },
    #[error("{actual} preference functions supplied for {expected} criteria")]
    PreferenceCount { expected: usize, actual: usize },
    #[error("Minkowski exponent must be finite and at least 1, got {exponent}")]
    InvalidExponent { exponent: f64 },
    #[error("compromise weight v must lie in [0, 1], got {v}")]
    InvalidCompromiseWeight { v: f64 },
    #[error("consistency ratio is undefined for a {order}x{order} matrix")]
    ConsistencyUndefined { order: usize },
    #[error("pairwise entry ({row}, {col}) must be finite and positive, got {value}")]
    NonPositiveJudgment { row: usize, col: usize, value: f64 },
    #[error("pairwise entries ({row}, {col}) and ({col}, {row}) are not reciprocal")]
    NotReciprocal { row: usize, col: usize },
    #[error("expected {expected} alternatives, got {actual}")]
    AlternativeCountMismatch { expected: usize, actual: usize },
    #[error("{ratings} rating rows do not split into {criteria} criteria per alternative")]
    RatingLayout { ratings: usize, criteria: usize },
    #[error("expected one alternatives matrix per criterion ({expected}), got {actual}")]
    CriterionCountMismatch { expected: usize, actual: usize },
    #[error("ratio between most and least important criterion must be finite and >= 1, got {z}")]
    InvalidSimosRatio { z: f64 },
    #[error("invalid Simos card layout: {reason}")]
    SimosLayout { reason: String },
}
