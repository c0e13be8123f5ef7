#![forbid(unsafe_code)]

//! PROMETHEE V: choose a subset of alternatives maximizing the summed net
//! flow under caller-supplied linear constraints.

use serde::{Deserialize, Serialize};

use crate::error::OptimizeError;
use crate::model::{Constraint, LinearExpr, LinearModel, Sense, Variable};
use crate::solver::{SolveStatus, Solver};

/// Name of the binary selection variable of alternative `index` (`x1`, `x2`, ...).
pub fn portfolio_variable(index: usize) -> String {
    format!("x{}", index + 1)
}

/// Builds the selection model `max Σ φᵢ·xᵢ`, `xᵢ ∈ {0, 1}`.
///
/// Constraints refer to alternatives through [`portfolio_variable`] names.
pub fn portfolio_model(
    net_flows: &[f64],
    constraints: impl IntoIterator<Item = Constraint>,
) -> Result<LinearModel, OptimizeError> {
    if let Some(index) = net_flows.iter().position(|flow| !flow.is_finite()) {
        return Err(OptimizeError::NonFiniteCoefficient {
            context: format!("net flow of alternative {index}"),
        });
    }
    let mut model = LinearModel::new("promethee_v", Sense::Maximize);
    let mut objective = LinearExpr::new();
    for (index, &flow) in net_flows.iter().enumerate() {
        let name = portfolio_variable(index);
        model.add_variable(Variable::binary(name.clone()))?;
        objective = objective.term(name, flow);
    }
    model.set_objective(objective)?;
    for constraint in constraints {
        model.add_constraint(constraint)?;
    }
    Ok(model)
}

/// Sum of selection variables over the given alternatives.
pub fn selection_sum(alternatives: impl IntoIterator<Item = usize>) -> LinearExpr {
    alternatives
        .into_iter()
        .fold(LinearExpr::new(), |expr, index| {
            expr.term(portfolio_variable(index), 1.0)
        })
}

/// `Σ coefficientᵢ·xᵢ` over all alternatives, e.g. a budget row.
pub fn resource_usage(coefficients: &[f64]) -> LinearExpr {
    LinearExpr::from_terms(
        coefficients
            .iter()
            .enumerate()
            .map(|(index, &coefficient)| (portfolio_variable(index), coefficient)),
    )
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSelection {
    pub status: SolveStatus,
    /// Zero-based indices of the chosen alternatives, ascending.
    pub selected: Vec<usize>,
    pub objective: Option<f64>,
}

pub fn select_portfolio<S: Solver + ?Sized>(
    solver: &S,
    net_flows: &[f64],
    constraints: impl IntoIterator<Item = Constraint>,
) -> Result<PortfolioSelection, OptimizeError> {
    let model = portfolio_model(net_flows, constraints)?;
    let solution = solver.solve(&model)?;
    let selected = if solution.is_optimal() {
        (0..net_flows.len())
            .filter(|&index| {
                solution
                    .value(&portfolio_variable(index))
                    .is_some_and(|value| value > 0.5)
            })
            .collect()
    } else {
        Vec::new()
    };
    Ok(PortfolioSelection {
        status: solution.status,
        selected,
        objective: solution.objective,
    })
}
