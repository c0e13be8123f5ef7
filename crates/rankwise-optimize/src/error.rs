#![forbid(unsafe_code)]

use thiserror::Error;

use crate::model::VariableDomain;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizeError {
    #[error("variable `{name}` is declared more than once")]
    DuplicateVariable { name: String },
    #[error("variable `{name}` is not declared in the model")]
    UnknownVariable { name: String },
    #[error("variable `{name}` has invalid bounds [{lower}, {upper}]")]
    InvalidBounds { name: String, lower: f64, upper: f64 },
    #[error("{context} must be finite")]
    NonFiniteCoefficient { context: String },
    #[error("solver does not support {domain:?} variable `{name}`")]
    UnsupportedDomain { name: String, domain: VariableDomain },
    #[error("model has {count} variables; the solver enumerates at most {limit}")]
    TooManyVariables { count: usize, limit: usize },
    #[error("goal `{name}` is declared more than once")]
    DuplicateGoal { name: String },
    #[error("weight of goal `{goal}` must be finite and non-negative, got {value}")]
    InvalidGoalWeight { goal: String, value: f64 },
}
