#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::OptimizeError;
use crate::model::LinearModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveStatus {
    Optimal,
    Infeasible,
    Unbounded,
    Other,
}

/// Outcome of a solve: a status plus one value per model variable.
///
/// `values` is empty and `objective` is `None` unless the status is
/// [`SolveStatus::Optimal`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub status: SolveStatus,
    pub values: BTreeMap<String, f64>,
    pub objective: Option<f64>,
}

impl Solution {
    pub fn optimal(values: BTreeMap<String, f64>, objective: f64) -> Self {
        Self {
            status: SolveStatus::Optimal,
            values,
            objective: Some(objective),
        }
    }

    pub fn without_values(status: SolveStatus) -> Self {
        Self {
            status,
            values: BTreeMap::new(),
            objective: None,
        }
    }

    pub fn is_optimal(&self) -> bool {
        self.status == SolveStatus::Optimal
    }

    pub fn value(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }
}

/// An optimization backend. The ranking pipeline treats it as opaque.
pub trait Solver {
    fn solve(&self, model: &LinearModel) -> Result<Solution, OptimizeError>;
}

impl<S: Solver + ?Sized> Solver for &S {
    fn solve(&self, model: &LinearModel) -> Result<Solution, OptimizeError> {
        (**self).solve(model)
    }
}
