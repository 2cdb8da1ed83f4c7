//! Python FFI bindings via PyO3.
//!
//! Exposes the solver to Python with a dense list-of-lists cost matrix.
//! For closure-backed cost sources, use the Rust API directly.
//!
//! # Building the Python extension
//!
//! ```bash
//! pip install maturin
//! maturin develop --features python-ffi
//! ```
//!
//! # Usage
//!
//! ```python
//! from lap_core import solve
//!
//! solution = solve([
//!     [7.0, 5.0, 9.0],
//!     [2.0, 8.0, 3.0],
//!     [6.0, 4.0, 1.0],
//! ])
//! print(solution.cost)        # 8.0
//! print(solution.row_to_col)  # [1, 0, 2]
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cost::CostMatrix;
use crate::solver::Solution as RustSolution;

/// An optimal assignment together with its dual prices.
///
/// `row_to_col` and `col_to_row` are mutual inverses. The dual vectors
/// certify optimality: `cost == sum(row_duals) + sum(col_duals)` up to
/// floating rounding.
#[pyclass(name = "Solution")]
#[derive(Clone)]
pub struct PySolution {
    inner: RustSolution,
}

#[pymethods]
impl PySolution {
    /// Total cost of the assignment.
    #[getter]
    pub fn cost(&self) -> f64 {
        self.inner.cost
    }

    /// Column assigned to each row.
    #[getter]
    pub fn row_to_col(&self) -> Vec<usize> {
        self.inner.row_to_col.clone()
    }

    /// Row assigned to each column.
    #[getter]
    pub fn col_to_row(&self) -> Vec<usize> {
        self.inner.col_to_row.clone()
    }

    /// Row dual prices (`u`).
    #[getter]
    pub fn row_duals(&self) -> Vec<f64> {
        self.inner.row_duals.clone()
    }

    /// Column dual prices (`v`).
    #[getter]
    pub fn col_duals(&self) -> Vec<f64> {
        self.inner.col_duals.clone()
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        format!(
            "Solution(dim={}, cost={})",
            self.inner.row_to_col.len(),
            self.inner.cost
        )
    }
}

/// Solve the square linear assignment problem over a dense cost matrix.
///
/// Args:
///     cost_rows: square list of lists of floats; `cost_rows[i][j]` is the
///         cost of assigning row i to column j. Every entry must be finite.
///
/// Returns:
///     Solution with the minimum-cost assignment and its dual prices.
///
/// Raises:
///     ValueError: on a ragged/non-square matrix, an empty matrix, or a
///         NaN/infinite cost.
#[pyfunction]
pub fn solve(cost_rows: Vec<Vec<f64>>) -> PyResult<PySolution> {
    let matrix =
        CostMatrix::from_rows(&cost_rows).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let inner = matrix
        .solve()
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(PySolution { inner })
}

// ── Module entry point ───────────────────────────────────────────────────────

/// lap-core Python bindings — dense linear assignment via Jonker–Volgenant.
#[pymodule]
pub fn lap_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySolution>()?;
    m.add_function(wrap_pyfunction!(solve, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
