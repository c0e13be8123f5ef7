#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::OptimizeError;
use crate::model::{LinearModel, VariableDomain};
use crate::solver::{Solution, SolveStatus, Solver};

pub const DEFAULT_MAX_BINARY_VARIABLES: usize = 20;
pub const FEASIBILITY_TOLERANCE: f64 = 1e-9;
/// Hard ceiling on enumerated variables; every mask must fit in a `u64`.
pub const MAX_ENUMERABLE_VARIABLES: usize = (u64::BITS - 1) as usize;

/// Exact solver for pure-binary models by exhaustive enumeration.
///
/// Assignments are visited in increasing bitmask order (variable `i` is bit
/// `i`); on equal objectives the first assignment visited is kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinaryEnumerationSolver {
    pub max_variables: usize,
    pub tolerance: f64,
}

impl Default for BinaryEnumerationSolver {
    fn default() -> Self {
        Self {
            max_variables: DEFAULT_MAX_BINARY_VARIABLES,
            tolerance: FEASIBILITY_TOLERANCE,
        }
    }
}

impl Solver for BinaryEnumerationSolver {
    fn solve(&self, model: &LinearModel) -> Result<Solution, OptimizeError> {
        let variables = model.variables();
        if let Some(variable) = variables
            .iter()
            .find(|variable| variable.domain != VariableDomain::Binary)
        {
            return Err(OptimizeError::UnsupportedDomain {
                name: variable.name.clone(),
                domain: variable.domain,
            });
        }
        let limit = self.max_variables.min(MAX_ENUMERABLE_VARIABLES);
        if variables.len() > limit {
            return Err(OptimizeError::TooManyVariables {
                count: variables.len(),
                limit,
            });
        }

        let mut best: Option<(BTreeMap<String, f64>, f64)> = None;
        let mut values: BTreeMap<String, f64> = variables
            .iter()
            .map(|variable| (variable.name.clone(), 0.0))
            .collect();
        for mask in 0u64..(1u64 << variables.len()) {
            for (bit, variable) in variables.iter().enumerate() {
                let value = if mask & (1u64 << bit) == 0 { 0.0 } else { 1.0 };
                values.insert(variable.name.clone(), value);
            }
            if !model.is_feasible(&values, self.tolerance)? {
                continue;
            }
            let objective = model.objective().evaluate(&values)?;
            let improves = best
                .as_ref()
                .is_none_or(|(_, incumbent)| model.sense().improves(objective, *incumbent));
            if improves {
                best = Some((values.clone(), objective));
            }
        }

        let solution = match best {
            Some((values, objective)) => Solution::optimal(values, objective),
            None => Solution::without_values(SolveStatus::Infeasible),
        };
        tracing::debug!(
            model = model.name(),
            variables = variables.len(),
            status = ?solution.status,
            objective = ?solution.objective,
            "binary model solved"
        );
        Ok(solution)
    }
}
