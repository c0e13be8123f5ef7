#![forbid(unsafe_code)]

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::OptimizeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sense {
    #[default]
    Minimize,
    Maximize,
}

impl Sense {
    /// True when `candidate` strictly improves on `incumbent` under this sense.
    pub fn improves(self, candidate: f64, incumbent: f64) -> bool {
        match self {
            Self::Minimize => candidate < incumbent,
            Self::Maximize => candidate > incumbent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableDomain {
    Continuous,
    Integer,
    Binary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    pub domain: VariableDomain,
    pub lower: f64,
    #[serde(default)]
    pub upper: Option<f64>,
}

impl Variable {
    pub fn binary(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            domain: VariableDomain::Binary,
            lower: 0.0,
            upper: Some(1.0),
        }
    }

    pub fn integer(name: impl Into<String>, lower: f64, upper: Option<f64>) -> Self {
        Self {
            name: name.into(),
            domain: VariableDomain::Integer,
            lower,
            upper,
        }
    }

    pub fn continuous(name: impl Into<String>, lower: f64, upper: Option<f64>) -> Self {
        Self {
            name: name.into(),
            domain: VariableDomain::Continuous,
            lower,
            upper,
        }
    }

    /// Non-negative variable in `domain` with no upper bound.
    pub fn non_negative(name: impl Into<String>, domain: VariableDomain) -> Self {
        match domain {
            VariableDomain::Binary => Self::binary(name),
            _ => Self {
                name: name.into(),
                domain,
                lower: 0.0,
                upper: None,
            },
        }
    }

    fn validate(&self) -> Result<(), OptimizeError> {
        let upper = self.upper.unwrap_or(f64::INFINITY);
        let binary_ok = self.domain != VariableDomain::Binary || (self.lower >= 0.0 && upper <= 1.0);
        if !self.lower.is_finite() || upper.is_nan() || upper < self.lower || !binary_ok {
            return Err(OptimizeError::InvalidBounds {
                name: self.name.clone(),
                lower: self.lower,
                upper,
            });
        }
        Ok(())
    }

    /// Whether `value` lies within the bounds and, for integral domains, is integral.
    pub fn admits(&self, value: f64, tolerance: f64) -> bool {
        if !value.is_finite() || value < self.lower - tolerance {
            return false;
        }
        if let Some(upper) = self.upper
            && value > upper + tolerance
        {
            return false;
        }
        match self.domain {
            VariableDomain::Continuous => true,
            VariableDomain::Integer | VariableDomain::Binary => {
                (value - value.round()).abs() <= tolerance
            }
        }
    }
}

/// Affine expression `constant + Σ coefficient·variable`.
///
/// Terms keep their insertion order; adding a term for a variable that is
/// already present accumulates its coefficient.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LinearExpr {
    terms: Vec<(String, f64)>,
    #[serde(default)]
    constant: f64,
}

impl LinearExpr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        terms
            .into_iter()
            .fold(Self::new(), |expr, (name, coefficient)| expr.term(name, coefficient))
    }

    #[must_use]
    pub fn term(mut self, name: impl Into<String>, coefficient: f64) -> Self {
        let name = name.into();
        match self.terms.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing)) => *existing += coefficient,
            None => self.terms.push((name, coefficient)),
        }
        self
    }

    #[must_use]
    pub fn with_constant(mut self, constant: f64) -> Self {
        self.constant = constant;
        self
    }

    pub fn terms(&self) -> &[(String, f64)] {
        &self.terms
    }

    pub fn constant(&self) -> f64 {
        self.constant
    }

    pub fn coefficient(&self, name: &str) -> f64 {
        self.terms
            .iter()
            .find(|(existing, _)| existing == name)
            .map_or(0.0, |(_, coefficient)| *coefficient)
    }

    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|(name, _)| name.as_str())
    }

    pub fn evaluate(&self, values: &BTreeMap<String, f64>) -> Result<f64, OptimizeError> {
        self.terms
            .iter()
            .try_fold(self.constant, |acc, (name, coefficient)| {
                values
                    .get(name)
                    .map(|value| acc + coefficient * value)
                    .ok_or_else(|| OptimizeError::UnknownVariable { name: name.clone() })
            })
    }

    fn check_finite(&self, context: &str) -> Result<(), OptimizeError> {
        let finite = self.constant.is_finite()
            && self.terms.iter().all(|(_, coefficient)| coefficient.is_finite());
        if finite {
            Ok(())
        } else {
            Err(OptimizeError::NonFiniteCoefficient {
                context: context.to_string(),
            })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    LessEq,
    GreaterEq,
    Equal,
}

impl Comparison {
    pub fn holds(self, lhs: f64, rhs: f64, tolerance: f64) -> bool {
        match self {
            Self::LessEq => lhs <= rhs + tolerance,
            Self::GreaterEq => lhs >= rhs - tolerance,
            Self::Equal => (lhs - rhs).abs() <= tolerance,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    pub name: String,
    pub expr: LinearExpr,
    pub comparison: Comparison,
    pub rhs: f64,
}

impl Constraint {
    pub fn new(
        name: impl Into<String>,
        expr: LinearExpr,
        comparison: Comparison,
        rhs: f64,
    ) -> Self {
        Self {
            name: name.into(),
            expr,
            comparison,
            rhs,
        }
    }

    pub fn less_eq(name: impl Into<String>, expr: LinearExpr, rhs: f64) -> Self {
        Self::new(name, expr, Comparison::LessEq, rhs)
    }

    pub fn greater_eq(name: impl Into<String>, expr: LinearExpr, rhs: f64) -> Self {
        Self::new(name, expr, Comparison::GreaterEq, rhs)
    }

    pub fn equal(name: impl Into<String>, expr: LinearExpr, rhs: f64) -> Self {
        Self::new(name, expr, Comparison::Equal, rhs)
    }

    pub fn is_satisfied(
        &self,
        values: &BTreeMap<String, f64>,
        tolerance: f64,
    ) -> Result<bool, OptimizeError> {
        let lhs = self.expr.evaluate(values)?;
        Ok(self.comparison.holds(lhs, self.rhs, tolerance))
    }
}

/// A linear (mixed-integer) model handed to a [`crate::Solver`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    name: String,
    sense: Sense,
    objective: LinearExpr,
    variables: Vec<Variable>,
    constraints: Vec<Constraint>,
}

impl LinearModel {
    pub fn new(name: impl Into<String>, sense: Sense) -> Self {
        Self {
            name: name.into(),
            sense,
            objective: LinearExpr::new(),
            variables: Vec::new(),
            constraints: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sense(&self) -> Sense {
        self.sense
    }

    pub fn objective(&self) -> &LinearExpr {
        &self.objective
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|variable| variable.name == name)
    }

    pub fn add_variable(&mut self, variable: Variable) -> Result<(), OptimizeError> {
        if self.variable(&variable.name).is_some() {
            return Err(OptimizeError::DuplicateVariable {
                name: variable.name,
            });
        }
        variable.validate()?;
        self.variables.push(variable);
        Ok(())
    }

    pub fn set_objective(&mut self, objective: LinearExpr) -> Result<(), OptimizeError> {
        self.check_declared(&objective)?;
        objective.check_finite("objective coefficient")?;
        self.objective = objective;
        Ok(())
    }

    pub fn add_constraint(&mut self, constraint: Constraint) -> Result<(), OptimizeError> {
        self.check_declared(&constraint.expr)?;
        constraint
            .expr
            .check_finite(&format!("coefficient of constraint `{}`", constraint.name))?;
        if !constraint.rhs.is_finite() {
            return Err(OptimizeError::NonFiniteCoefficient {
                context: format!("right-hand side of constraint `{}`", constraint.name),
            });
        }
        self.constraints.push(constraint);
        Ok(())
    }

    /// Checks variable bounds, integrality and every constraint.
    ///
    /// Every declared variable must have a value.
    pub fn is_feasible(
        &self,
        values: &BTreeMap<String, f64>,
        tolerance: f64,
    ) -> Result<bool, OptimizeError> {
        for variable in &self.variables {
            let value = values
                .get(&variable.name)
                .ok_or_else(|| OptimizeError::UnknownVariable {
                    name: variable.name.clone(),
                })?;
            if !variable.admits(*value, tolerance) {
                return Ok(false);
            }
        }
        for constraint in &self.constraints {
            if !constraint.is_satisfied(values, tolerance)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn check_declared(&self, expr: &LinearExpr) -> Result<(), OptimizeError> {
        let declared: BTreeSet<&str> = self.variables.iter().map(|v| v.name.as_str()).collect();
        match expr.variables().find(|name| !declared.contains(name)) {
            Some(name) => Err(OptimizeError::UnknownVariable {
                name: name.to_string(),
            }),
            None => Ok(()),
        }
    }
}
