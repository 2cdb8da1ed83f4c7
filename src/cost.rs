//! Cost oracle capability — how the solver reads the cost of a (row, column) pair.
//!
//! The solver never sees a matrix type directly; it queries costs through the
//! [`CostSource`] trait. Two implementations are provided and the caller picks
//! one explicitly:
//!
//! - [`CostMatrix`] — an owned dense row-major `dim × dim` buffer.
//! - [`CostFn`] — any `Fn(usize, usize) -> f64` closure; nothing is
//!   materialised, costs are computed on demand.
//!
//! A source must be a pure, repeatable function of `(row, col)` for the
//! duration of one solve: the pipeline queries the same pair several times
//! across phases and assumes stable answers.

use alloc::vec::Vec;

use crate::error::{Error, Result};

/// A capability that yields the cost of assigning a row to a column.
///
/// Implementors must return the same finite value every time the same pair is
/// queried within one solve call. The solver validates finiteness up front;
/// stability cannot be checked and is a caller contract.
pub trait CostSource {
    /// Cost of assigning `row` to `col`. Both indices are in `0..dim`.
    fn cost(&self, row: usize, col: usize) -> f64;
}

impl<C: CostSource + ?Sized> CostSource for &C {
    fn cost(&self, row: usize, col: usize) -> f64 {
        (**self).cost(row, col)
    }
}

// ─── CostMatrix ──────────────────────────────────────────────────────────────

/// Owned dense cost matrix, row-major, square.
#[derive(Clone, Debug, PartialEq)]
pub struct CostMatrix {
    dim: usize,
    data: Vec<f64>,
}

impl CostMatrix {
    /// Build a cost matrix from a slice of rows.
    ///
    /// Every row must have exactly as many entries as there are rows.
    /// Returns [`Error::ShapeMismatch`] on a ragged or non-square input.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let dim = rows.len();
        let mut data = Vec::with_capacity(dim * dim);
        for row in rows {
            if row.len() != dim {
                return Err(Error::ShapeMismatch {
                    expected: dim,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { dim, data })
    }

    /// Build a cost matrix from a flat row-major buffer of `dim * dim` entries.
    pub fn from_flat(dim: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != dim * dim {
            return Err(Error::ShapeMismatch {
                expected: dim * dim,
                got: data.len(),
            });
        }
        Ok(Self { dim, data })
    }

    /// Number of rows (equal to the number of columns).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Solve the assignment problem over this matrix.
    ///
    /// Shorthand for [`crate::solve`]`(self.dim(), self)`.
    pub fn solve(&self) -> Result<crate::Solution> {
        crate::solver::solve(self.dim, self)
    }
}

impl CostSource for CostMatrix {
    fn cost(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.dim + col]
    }
}

// ─── CostFn ──────────────────────────────────────────────────────────────────

/// Closure-backed cost source.
///
/// Useful when costs are cheap to compute (distances, deadlines) and a full
/// `dim × dim` buffer would be wasted memory.
#[derive(Clone, Debug)]
pub struct CostFn<F> {
    f: F,
}

impl<F: Fn(usize, usize) -> f64> CostFn<F> {
    /// Wrap a closure as a cost source.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F: Fn(usize, usize) -> f64> CostSource for CostFn<F> {
    fn cost(&self, row: usize, col: usize) -> f64 {
        (self.f)(row, col)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_matrix_row_major_layout() {
        let m = CostMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.dim(), 2);
        assert_eq!(m.cost(0, 0), 1.0);
        assert_eq!(m.cost(0, 1), 2.0);
        assert_eq!(m.cost(1, 0), 3.0);
        assert_eq!(m.cost(1, 1), 4.0);
    }

    #[test]
    fn test_matrix_rejects_ragged_rows() {
        let err = CostMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(err, Error::ShapeMismatch { expected: 2, got: 1 });
    }

    #[test]
    fn test_matrix_rejects_wide_input() {
        // Two rows of three entries: rectangular, not square.
        let err = CostMatrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap_err();
        assert_eq!(err, Error::ShapeMismatch { expected: 2, got: 3 });
    }

    #[test]
    fn test_from_flat_checks_length() {
        assert!(CostMatrix::from_flat(2, vec![1.0, 2.0, 3.0, 4.0]).is_ok());
        let err = CostMatrix::from_flat(2, vec![1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, Error::ShapeMismatch { expected: 4, got: 3 });
    }

    #[test]
    fn test_empty_matrix_is_constructible() {
        // Shape-valid; it is the solver that rejects dim == 0.
        let m = CostMatrix::from_rows(&[]).unwrap();
        assert_eq!(m.dim(), 0);
    }

    #[test]
    fn test_cost_fn_delegates() {
        let f = CostFn::new(|i, j| (i * 10 + j) as f64);
        assert_eq!(f.cost(2, 3), 23.0);
        assert_eq!(f.cost(0, 0), 0.0);
    }

    #[test]
    fn test_reference_passthrough() {
        let m = CostMatrix::from_rows(&[vec![5.0]]).unwrap();
        let by_ref: &dyn CostSource = &m;
        assert_eq!(by_ref.cost(0, 0), 5.0);
        assert_eq!((&&m).cost(0, 0), 5.0);
    }
}
