//! Portable snapshot of a [`Solution`] for persistence and transport.
//!
//! A solved assignment is often computed once and consumed elsewhere — a
//! tracking pipeline hands the matching to a downstream process, a batch job
//! caches solutions next to its inputs. [`SolutionSnapshot`] is the
//! serialisable record for that: a versioned copy of the assignment and dual
//! vectors that can be restored with full validation.
//!
//! Restore is not a blind deserialisation: [`SolutionSnapshot::restore`]
//! re-checks the format version, the vector lengths, and the bijection
//! invariant before handing back a [`Solution`], so a truncated or hand-edited
//! snapshot is rejected instead of propagating a corrupt assignment.
//!
//! # no_std
//!
//! Requires the `serde` feature. Uses `alloc::vec::Vec` and is compatible
//! with no_std + alloc environments.

use alloc::vec::Vec;

use crate::error::{Error, Result};
use crate::solver::Solution;

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u16 = 1;

/// A serialisable record of a solved assignment.
///
/// # Example
///
/// ```rust,ignore
/// use lap_core::snapshot::SolutionSnapshot;
///
/// let snapshot = SolutionSnapshot::from_solution(&solution);
/// let json = serde_json::to_string(&snapshot)?;
/// let restored = serde_json::from_str::<SolutionSnapshot>(&json)?.restore()?;
/// ```
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct SolutionSnapshot {
    /// Format version — always [`SNAPSHOT_VERSION`] for newly created snapshots.
    pub version: u16,
    /// Problem size the solution was computed for.
    pub dim: usize,
    /// Total assignment cost.
    pub cost: f64,
    /// Column assigned to each row.
    pub row_to_col: Vec<usize>,
    /// Row assigned to each column.
    pub col_to_row: Vec<usize>,
    /// Row dual prices.
    pub row_duals: Vec<f64>,
    /// Column dual prices.
    pub col_duals: Vec<f64>,
}

impl SolutionSnapshot {
    /// Capture a solution as a snapshot.
    pub fn from_solution(solution: &Solution) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            dim: solution.row_to_col.len(),
            cost: solution.cost,
            row_to_col: solution.row_to_col.clone(),
            col_to_row: solution.col_to_row.clone(),
            row_duals: solution.row_duals.clone(),
            col_duals: solution.col_duals.clone(),
        }
    }

    /// Validate the snapshot and convert it back into a [`Solution`].
    ///
    /// Checks the format version, that all four vectors have length `dim`,
    /// and that the two assignment vectors are mutual inverses. Returns
    /// [`Error::InvalidSnapshot`] on the first inconsistency found.
    pub fn restore(&self) -> Result<Solution> {
        if self.version != SNAPSHOT_VERSION {
            return Err(Error::InvalidSnapshot { reason: "unsupported format version" });
        }
        if self.dim == 0 {
            return Err(Error::InvalidSnapshot { reason: "empty assignment" });
        }
        if self.row_to_col.len() != self.dim
            || self.col_to_row.len() != self.dim
            || self.row_duals.len() != self.dim
            || self.col_duals.len() != self.dim
        {
            return Err(Error::InvalidSnapshot { reason: "vector length does not match dim" });
        }
        for (i, &j) in self.row_to_col.iter().enumerate() {
            if j >= self.dim {
                return Err(Error::InvalidSnapshot { reason: "column index out of range" });
            }
            if self.col_to_row[j] != i {
                return Err(Error::InvalidSnapshot {
                    reason: "assignment vectors are not mutual inverses",
                });
            }
        }

        Ok(Solution {
            cost: self.cost,
            row_to_col: self.row_to_col.clone(),
            col_to_row: self.col_to_row.clone(),
            row_duals: self.row_duals.clone(),
            col_duals: self.col_duals.clone(),
        })
    }
}

impl From<&Solution> for SolutionSnapshot {
    fn from(solution: &Solution) -> Self {
        Self::from_solution(solution)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
