#![forbid(unsafe_code)]

//! Weighted goal programming.
//!
//! Each goal `expr + n - p = target` gets an under-achievement deviation `n`
//! and an over-achievement deviation `p`; the model minimizes the weighted
//! sum of the penalized deviations subject to the hard constraints.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::OptimizeError;
use crate::model::{Constraint, LinearExpr, LinearModel, Sense, Variable, VariableDomain};
use crate::solver::Solution;

pub const ACHIEVEMENT_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub name: String,
    pub expr: LinearExpr,
    pub target: f64,
    #[serde(default)]
    pub under_weight: f64,
    #[serde(default)]
    pub over_weight: f64,
}

impl Goal {
    pub fn new(name: impl Into<String>, expr: LinearExpr, target: f64) -> Self {
        Self {
            name: name.into(),
            expr,
            target,
            under_weight: 0.0,
            over_weight: 0.0,
        }
    }

    #[must_use]
    pub fn penalize_under(mut self, weight: f64) -> Self {
        self.under_weight = weight;
        self
    }

    #[must_use]
    pub fn penalize_over(mut self, weight: f64) -> Self {
        self.over_weight = weight;
        self
    }

    pub fn under_variable(&self) -> String {
        format!("n_{}", self.name)
    }

    pub fn over_variable(&self) -> String {
        format!("p_{}", self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementStatus {
    Satisfied,
    UnderAchieved,
    OverAchieved,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalAchievement {
    pub goal: String,
    pub under: f64,
    pub over: f64,
    pub status: AchievementStatus,
}

impl GoalAchievement {
    /// Under-achievement takes precedence when both deviations are positive.
    pub fn from_deviations(goal: impl Into<String>, under: f64, over: f64) -> Self {
        let status = if under > ACHIEVEMENT_TOLERANCE {
            AchievementStatus::UnderAchieved
        } else if over > ACHIEVEMENT_TOLERANCE {
            AchievementStatus::OverAchieved
        } else {
            AchievementStatus::Satisfied
        };
        Self {
            goal: goal.into(),
            under,
            over,
            status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgram {
    pub name: String,
    pub decision_variables: Vec<Variable>,
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub hard_constraints: Vec<Constraint>,
    pub deviation_domain: VariableDomain,
}

impl GoalProgram {
    pub fn new(name: impl Into<String>, deviation_domain: VariableDomain) -> Self {
        Self {
            name: name.into(),
            decision_variables: Vec::new(),
            goals: Vec::new(),
            hard_constraints: Vec::new(),
            deviation_domain,
        }
    }

    #[must_use]
    pub fn variable(mut self, variable: Variable) -> Self {
        self.decision_variables.push(variable);
        self
    }

    #[must_use]
    pub fn goal(mut self, goal: Goal) -> Self {
        self.goals.push(goal);
        self
    }

    #[must_use]
    pub fn constraint(mut self, constraint: Constraint) -> Self {
        self.hard_constraints.push(constraint);
        self
    }

    /// Expands the program into a plain linear model.
    ///
    /// Deviation variables are named `n_<goal>` and `p_<goal>`; goal
    /// constraints carry the goal's name.
    pub fn to_model(&self) -> Result<LinearModel, OptimizeError> {
        let mut seen = BTreeSet::new();
        for goal in &self.goals {
            if !seen.insert(goal.name.as_str()) {
                return Err(OptimizeError::DuplicateGoal {
                    name: goal.name.clone(),
                });
            }
            for weight in [goal.under_weight, goal.over_weight] {
                if !weight.is_finite() || weight < 0.0 {
                    return Err(OptimizeError::InvalidGoalWeight {
                        goal: goal.name.clone(),
                        value: weight,
                    });
                }
            }
        }

        let mut model = LinearModel::new(self.name.clone(), Sense::Minimize);
        for variable in &self.decision_variables {
            model.add_variable(variable.clone())?;
        }
        let mut objective = LinearExpr::new();
        let mut goal_constraints = Vec::with_capacity(self.goals.len());
        for goal in &self.goals {
            let under = goal.under_variable();
            let over = goal.over_variable();
            model.add_variable(Variable::non_negative(under.clone(), self.deviation_domain))?;
            model.add_variable(Variable::non_negative(over.clone(), self.deviation_domain))?;
            if goal.under_weight > 0.0 {
                objective = objective.term(under.clone(), goal.under_weight);
            }
            if goal.over_weight > 0.0 {
                objective = objective.term(over.clone(), goal.over_weight);
            }
            let expr = goal.expr.clone().term(under, 1.0).term(over, -1.0);
            goal_constraints.push(Constraint::equal(goal.name.clone(), expr, goal.target));
        }
        model.set_objective(objective)?;
        for constraint in goal_constraints.into_iter().chain(self.hard_constraints.iter().cloned()) {
            model.add_constraint(constraint)?;
        }
        Ok(model)
    }

    /// Classifies every goal from the deviation values of a solution.
    pub fn achievement(&self, solution: &Solution) -> Result<Vec<GoalAchievement>, OptimizeError> {
        self.goals
            .iter()
            .map(|goal| {
                let lookup = |name: String| {
                    solution
                        .value(&name)
                        .ok_or(OptimizeError::UnknownVariable { name })
                };
                let under = lookup(goal.under_variable())?;
                let over = lookup(goal.over_variable())?;
                Ok(GoalAchievement::from_deviations(goal.name.clone(), under, over))
            })
            .collect()
    }
}
