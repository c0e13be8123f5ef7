#![forbid(unsafe_code)]

//! Rankwise optimize: the optimization collaborator used by PROMETHEE V and
//! goal programming.
//!
//! A [`Solver`] accepts a [`LinearModel`] and returns a [`Solution`] (status
//! plus variable values). Ranking code never looks inside the solver; the
//! bundled [`BinaryEnumerationSolver`] covers small pure-binary models such
//! as portfolio selection.

pub mod enumerate;
pub mod error;
pub mod goal;
pub mod model;
pub mod portfolio;
pub mod solver;

pub use enumerate::{
    BinaryEnumerationSolver, DEFAULT_MAX_BINARY_VARIABLES, FEASIBILITY_TOLERANCE,
    MAX_ENUMERABLE_VARIABLES,
};
pub use error::OptimizeError;
pub use goal::{ACHIEVEMENT_TOLERANCE, AchievementStatus, Goal, GoalAchievement, GoalProgram};
pub use model::{
    Comparison, Constraint, LinearExpr, LinearModel, Sense, Variable, VariableDomain,
};
pub use portfolio::{
    PortfolioSelection, portfolio_model, portfolio_variable, resource_usage, select_portfolio,
    selection_sum,
};
pub use solver::{Solution, SolveStatus, Solver};
