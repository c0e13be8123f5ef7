#![forbid(unsafe_code)]

use thiserror::Error;

/// Failures raised by the shared pipeline stages.
///
/// Every variant is either a shape mismatch or a domain error; advisory
/// conditions are reported through result warnings instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    #[error("decision matrix must contain at least one alternative and one criterion")]
    EmptyMatrix,
    #[error("matrix rows must all have equal length")]
    RaggedMatrix,
    #[error("expected square matrix, got {rows}x{cols}")]
    ExpectedSquareMatrix { rows: usize, cols: usize },
    #[error("weight vector has {actual} entries but the matrix has {expected} criteria")]
    WeightShape { expected: usize, actual: usize },
    #[error("direction vector has {actual} entries but the matrix has {expected} criteria")]
    DirectionShape { expected: usize, actual: usize },
    #[error("weight of criterion {criterion} must be finite and non-negative, got {value}")]
    InvalidWeight { criterion: usize, value: f64 },
    #[error("array must not contain infs or NaNs")]
    NonFiniteInput,
    #[error("criterion {criterion} has a zero {what}; normalization would divide by zero")]
    ZeroColumn {
        criterion: usize,
        what: &'static str,
    },
    #[error("{quantity} has zero width; the ratio is undefined")]
    DegenerateRange { quantity: &'static str },
    #[error("at least {required} alternatives are required, got {actual}")]
    TooFewAlternatives { required: usize, actual: usize },
    #[error("score of alternative {alternative} is not a finite number")]
    NonFiniteScore { alternative: usize },
}
