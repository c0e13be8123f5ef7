#![forbid(unsafe_code)]

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FuzzyError {
    #[error("fuzzy number components must be finite, got {components:?}")]
    NonFinite { components: Vec<f64> },
    #[error("fuzzy number components must be non-decreasing, got {components:?}")]
    Unordered { components: Vec<f64> },
    #[error("label `{label}` is not defined in the linguistic scale")]
    UnknownLabel { label: String },
    #[error("judgment row {row} has {actual} entries but {expected} decision makers were declared")]
    JudgmentShape {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("at least one decision maker is required")]
    NoDecisionMakers,
    #[error("defuzzification denominator is zero for {components:?}")]
    DegenerateDefuzzification { components: Vec<f64> },
}
