#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;
use crate::mode::RuntimeMode;

/// Alternatives × criteria table of performance values.
///
/// Rows are alternatives, columns are criteria. The constructor guarantees
/// at least one row, at least one column and equal row lengths, so column
/// accessors never see an empty or ragged table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct DecisionMatrix {
    rows: Vec<Vec<f64>>,
    criteria: usize,
}

impl DecisionMatrix {
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, PipelineError> {
        let (alternatives, criteria) = matrix_shape(&rows)?;
        if alternatives == 0 || criteria == 0 {
            return Err(PipelineError::EmptyMatrix);
        }
        Ok(Self { rows, criteria })
    }

    #[must_use]
    pub fn alternatives(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn criteria(&self) -> usize {
        self.criteria
    }

    /// `(alternatives, criteria)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.criteria)
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, alternative: usize) -> Option<&[f64]> {
        self.rows.get(alternative).map(Vec::as_slice)
    }

    #[must_use]
    pub fn value(&self, alternative: usize, criterion: usize) -> Option<f64> {
        self.rows
            .get(alternative)
            .and_then(|row| row.get(criterion))
            .copied()
    }

    /// Values of one criterion, in alternative order.
    #[must_use]
    pub fn column(&self, criterion: usize) -> Vec<f64> {
        self.rows
            .iter()
            .filter_map(|row| row.get(criterion).copied())
            .collect()
    }

    #[must_use]
    pub fn column_max(&self, criterion: usize) -> f64 {
        self.column(criterion)
            .into_iter()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    #[must_use]
    pub fn column_min(&self, criterion: usize) -> f64 {
        self.column(criterion)
            .into_iter()
            .fold(f64::INFINITY, f64::min)
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.rows.iter().flatten().all(|v| v.is_finite())
    }

    /// Build a same-shaped matrix by mapping every cell with its
    /// `(alternative, criterion)` position.
    #[must_use]
    pub fn map_cells(&self, mut f: impl FnMut(usize, usize, f64) -> f64) -> Self {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .map(|(j, &value)| f(i, j, value))
                    .collect()
            })
            .collect();
        Self {
            rows,
            criteria: self.criteria,
        }
    }

    /// Reject NaN/Inf cells when the mode or caller asks for it.
    pub fn validate_finite(
        &self,
        mode: RuntimeMode,
        check_finite: bool,
    ) -> Result<(), PipelineError> {
        if mode.must_check_finite(check_finite) && !self.is_finite() {
            return Err(PipelineError::NonFiniteInput);
        }
        Ok(())
    }
}

impl TryFrom<Vec<Vec<f64>>> for DecisionMatrix {
    type Error = PipelineError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<DecisionMatrix> for Vec<Vec<f64>> {
    fn from(matrix: DecisionMatrix) -> Self {
        matrix.rows
    }
}

/// `(rows, cols)` of a row-major matrix; `(0, 0)` when empty.
pub fn matrix_shape(a: &[Vec<f64>]) -> Result<(usize, usize), PipelineError> {
    let Some(first) = a.first() else {
        return Ok((0, 0));
    };
    let cols = first.len();
    if a.iter().any(|row| row.len() != cols) {
        return Err(PipelineError::RaggedMatrix);
    }
    Ok((a.len(), cols))
}

/// Shape of a matrix that must be square; returns its order.
pub fn square_order(a: &[Vec<f64>]) -> Result<usize, PipelineError> {
    let (rows, cols) = matrix_shape(a)?;
    if rows != cols {
        return Err(PipelineError::ExpectedSquareMatrix { rows, cols });
    }
    if rows == 0 {
        return Err(PipelineError::EmptyMatrix);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_ragged_rows() {
        let err = DecisionMatrix::new(vec![vec![1.0, 2.0], vec![3.0]])
            .expect_err("ragged rows must fail");
        assert_eq!(err, PipelineError::RaggedMatrix);
    }

    #[test]
    fn rejects_empty_matrix_and_empty_rows() {
        assert_eq!(
            DecisionMatrix::new(Vec::new()).expect_err("no rows"),
            PipelineError::EmptyMatrix
        );
        assert_eq!(
            DecisionMatrix::new(vec![Vec::new(), Vec::new()]).expect_err("no columns"),
            PipelineError::EmptyMatrix
        );
    }

    #[test]
    fn column_extrema() {
        let m = DecisionMatrix::new(vec![vec![8.0, 7.0], vec![5.0, 3.0], vec![11.0, 10.0]])
            .expect("valid matrix");
        assert_eq!(m.shape(), (3, 2));
        assert_eq!(m.column(1), vec![7.0, 3.0, 10.0]);
        assert_eq!(m.column_max(0), 11.0);
        assert_eq!(m.column_min(1), 3.0);
        assert_eq!(m.value(2, 1), Some(10.0));
        assert_eq!(m.value(3, 0), None);
    }

    #[test]
    fn hardened_mode_rejects_nan_even_without_check_finite() {
        let m = DecisionMatrix::new(vec![vec![1.0, f64::NAN]]).expect("shape is fine");
        assert!(m.validate_finite(RuntimeMode::Strict, false).is_ok());
        assert_eq!(
            m.validate_finite(RuntimeMode::Hardened, false),
            Err(PipelineError::NonFiniteInput)
        );
    }

    #[test]
    fn square_order_checks_shape() {
        assert_eq!(square_order(&[vec![1.0, 2.0], vec![0.5, 1.0]]), Ok(2));
        assert_eq!(
            square_order(&[vec![1.0, 2.0]]),
            Err(PipelineError::ExpectedSquareMatrix { rows: 1, cols: 2 })
        );
    }
}
