//! The Jonker–Volgenant shortest augmenting path pipeline.
//!
//! Four phases run in strict order over shared `dim`-sized working arrays:
//!
//! 1. **Column reduction** — per-column minima give an initial column price
//!    vector `v` and a partial greedy assignment.
//! 2. **Reduction transfer** — rows assigned exactly once push slack from
//!    their column's price, tightening the duals.
//! 3. **Augmenting row reduction** — two passes of a cheap O(dim)-per-row
//!    displacement step that resolves most conflicts without a path search.
//! 4. **Shortest-path augmentation** — for each row still free, a
//!    Dijkstra-style search over reduced costs finds an augmenting path to an
//!    unassigned column, updates the settled columns' prices, and flips the
//!    alternating path.
//!
//! Throughout, approximate dual feasibility holds: the reduced cost
//! `cost(i, j) - u[i] - v[j]` never drops below `-epsilon`, with equality on
//! assigned pairs. `epsilon` and the `BIG` sentinel are derived from the mean
//! cost of the input itself (mean / 10⁴ and mean × 10⁴ respectively); they are
//! not tunable, and changing the formulas would change which of several
//! equal-cost optima is returned on tied inputs.
//!
//! Reference: R. Jonker and A. Volgenant, "A Shortest Augmenting Path
//! Algorithm for Dense and Sparse Linear Assignment Problems",
//! Computing 38, 325–340, 1987.

use alloc::vec;
use alloc::vec::Vec;

use log::trace;

use crate::cost::CostSource;
use crate::error::{Error, Result};

/// Internal sentinel for "no row/column assigned yet".
///
/// Never observable through the public API: the final assignment is total.
const UNASSIGNED: usize = usize::MAX;

/// An optimal assignment together with its dual prices.
///
/// `row_to_col` and `col_to_row` are mutual inverses:
/// `col_to_row[row_to_col[i]] == i` for every row `i`. The dual vectors
/// certify optimality: `cost == sum(row_duals) + sum(col_duals)` up to
/// floating rounding, and every reduced cost is non-negative up to the
/// input-derived epsilon.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// Total cost of the assignment.
    pub cost: f64,
    /// Column assigned to each row.
    pub row_to_col: Vec<usize>,
    /// Row assigned to each column.
    pub col_to_row: Vec<usize>,
    /// Row dual prices (`u`).
    pub row_duals: Vec<f64>,
    /// Column dual prices (`v`).
    pub col_duals: Vec<f64>,
}

/// Working arrays shared by all phases of one solve call.
///
/// Kept as flat index-addressed buffers on purpose — the algorithm is a
/// numerical optimisation over dense index space, not an object graph.
struct Scratch {
    /// Column assigned to each row, or [`UNASSIGNED`].
    rowsol: Vec<usize>,
    /// Row assigned to each column, or [`UNASSIGNED`].
    colsol: Vec<usize>,
    /// Column dual prices, maintained continuously.
    v: Vec<f64>,
    /// Work queue of currently unassigned rows; only the first `numfree`
    /// entries are live.
    free_rows: Vec<usize>,
    /// Times each row was the per-column arg-min during column reduction.
    matches: Vec<u32>,
    /// Reduced-cost distance from the current source row to each column.
    /// Valid only within one shortest-path search.
    dist: Vec<f64>,
    /// Predecessor row recorded when a column is reached in a search.
    pred: Vec<usize>,
    /// Column indices partitioned into settled / frontier / unvisited during
    /// a search.
    collist: Vec<usize>,
}

impl Scratch {
    fn new(dim: usize) -> Self {
        Self {
            rowsol: vec![UNASSIGNED; dim],
            colsol: vec![UNASSIGNED; dim],
            v: vec![0.0; dim],
            free_rows: vec![0; dim],
            matches: vec![0; dim],
            dist: vec![0.0; dim],
            pred: vec![0; dim],
            collist: vec![0; dim],
        }
    }
}

/// Solve the square linear assignment problem.
///
/// `dim` is the number of rows and columns; `costs` must yield a finite,
/// stable value for every pair in `0..dim × 0..dim`.
///
/// # Errors
///
/// - [`Error::EmptyProblem`] if `dim == 0`.
/// - [`Error::NonFiniteCost`] if any queried cost is NaN or infinite,
///   detected before any assignment work.
/// - [`Error::AugmentationStalled`] if a path search exhausts all columns —
///   only possible when the cost source violates its stability contract.
pub fn solve<C: CostSource>(dim: usize, costs: &C) -> Result<Solution> {
    if dim == 0 {
        return Err(Error::EmptyProblem);
    }

    // Validation pass doubling as the scale estimate: the total cost over all
    // dim² pairs sets BIG (the "+infinity" stand-in) and epsilon (the
    // tie tolerance against floating noise).
    let mut sum = 0.0;
    for i in 0..dim {
        for j in 0..dim {
            let c = costs.cost(i, j);
            if !c.is_finite() {
                return Err(Error::NonFiniteCost { row: i, col: j, value: c });
            }
            sum += c;
        }
    }
    let big = 10_000.0 * (sum / dim as f64);
    let epsilon = sum / dim as f64 / 10_000.0;
    trace!("solve: dim={dim} big={big} epsilon={epsilon}");

    let mut s = Scratch::new(dim);

    column_reduction(dim, costs, &mut s);
    let mut numfree = reduction_transfer(dim, costs, &mut s, big, epsilon);
    trace!("reduction transfer: {numfree} rows free");

    // Fixed two-pass heuristic; the second pass catches rows freed by the
    // first. Not a convergence loop.
    for pass in 0..2 {
        numfree = augmenting_row_reduction(dim, costs, &mut s, numfree, big, epsilon);
        trace!("augmenting row reduction pass {pass}: {numfree} rows free");
    }

    for f in 0..numfree {
        let free_row = s.free_rows[f];
        shortest_augmenting_path(dim, costs, &mut s, free_row)?;
    }

    // Recover row duals and total cost from the final assignment.
    let mut u = vec![0.0; dim];
    let mut lapcost = 0.0;
    for i in 0..dim {
        let j = s.rowsol[i];
        u[i] = costs.cost(i, j) - s.v[j];
        lapcost += costs.cost(i, j);
    }
    trace!("solve: done, cost={lapcost}");

    Ok(Solution {
        cost: lapcost,
        row_to_col: s.rowsol,
        col_to_row: s.colsol,
        row_duals: u,
        col_duals: s.v,
    })
}

/// Phase 1: per-column minima give `v` and a tentative partial assignment.
///
/// Columns are visited in reverse order — empirically improves convergence of
/// the later phases, not required for correctness.
fn column_reduction<C: CostSource>(dim: usize, costs: &C, s: &mut Scratch) {
    for j in (0..dim).rev() {
        let mut min = costs.cost(0, j);
        let mut imin = 0;
        for i in 1..dim {
            let c = costs.cost(i, j);
            if c < min {
                min = c;
                imin = i;
            }
        }
        s.v[j] = min;

        s.matches[imin] += 1;
        if s.matches[imin] == 1 {
            // First time this row is a column minimum: tentative assignment.
            s.rowsol[imin] = j;
            s.colsol[j] = imin;
        } else if min < s.v[s.rowsol[imin]] {
            // Cheaper column for an already-assigned row: displace.
            let j1 = s.rowsol[imin];
            s.rowsol[imin] = j;
            s.colsol[j] = imin;
            s.colsol[j1] = UNASSIGNED;
        } else {
            s.colsol[j] = UNASSIGNED;
        }
    }
}

/// Phase 2: build the free-row queue and push slack out of columns whose row
/// was matched exactly once.
///
/// Returns the number of free rows. Rows matched more than once already
/// compete across columns and are left for the later phases.
fn reduction_transfer<C: CostSource>(
    dim: usize,
    costs: &C,
    s: &mut Scratch,
    big: f64,
    epsilon: f64,
) -> usize {
    let mut numfree = 0;
    for i in 0..dim {
        if s.matches[i] == 0 {
            s.free_rows[numfree] = i;
            numfree += 1;
        } else if s.matches[i] == 1 {
            let j1 = s.rowsol[i];
            let mut min = big;
            for j in 0..dim {
                if j != j1 {
                    let h = costs.cost(i, j) - s.v[j];
                    // Epsilon slack keeps floating noise from oscillating the
                    // accepted minimum.
                    if h < min + epsilon {
                        min = h;
                    }
                }
            }
            s.v[j1] -= min;
        }
    }
    numfree
}

/// Phase 3, one pass: for every free row, slot it into its best or
/// second-best column, evicting occupants when profitable.
///
/// Consumes the first `numfree` entries of the free-row queue and rebuilds
/// the queue in place with the rows still (or newly) free; returns the new
/// count. An occupant evicted while the row had a strictly better minimum is
/// re-processed immediately at the current queue position — the cheap chained
/// displacement that keeps most rows out of the path search.
fn augmenting_row_reduction<C: CostSource>(
    dim: usize,
    costs: &C,
    s: &mut Scratch,
    numfree: usize,
    big: f64,
    epsilon: f64,
) -> usize {
    let prv_numfree = numfree;
    let mut numfree = 0;
    let mut k = 0;
    while k < prv_numfree {
        let i = s.free_rows[k];
        k += 1;

        // Minimum and second-minimum reduced cost over this row's columns.
        let mut umin = costs.cost(i, 0) - s.v[0];
        let mut j1 = 0;
        let mut usubmin = big;
        let mut j2 = 0;
        for j in 1..dim {
            let h = costs.cost(i, j) - s.v[j];
            if h < usubmin {
                if h >= umin {
                    usubmin = h;
                    j2 = j;
                } else {
                    usubmin = umin;
                    umin = h;
                    j2 = j1;
                    j1 = j;
                }
            }
        }

        let mut i0 = s.colsol[j1];
        if umin < usubmin + epsilon {
            // Clear (or near-tied) minimum: sharpen the dual on the best
            // column so the row's reduced cost there rises to the subminimum.
            s.v[j1] -= usubmin + epsilon - umin;
        } else if i0 != UNASSIGNED {
            // Tied minimum on an occupied column: take the second-best
            // column instead and leave the occupant alone.
            j1 = j2;
            i0 = s.colsol[j2];
        }

        s.rowsol[i] = j1;
        s.colsol[j1] = i;

        if i0 != UNASSIGNED {
            if umin < usubmin {
                // Evicted occupant goes back at the current queue position
                // and is processed next.
                k -= 1;
                s.free_rows[k] = i0;
            } else {
                // No cheap fix available: defer to the path-search phase.
                s.free_rows[numfree] = i0;
                numfree += 1;
            }
        }
    }
    numfree
}

/// Phase 4, one search: single-source shortest augmenting path from
/// `free_row` over reduced costs, followed by the dual update on settled
/// columns and the alternating-path flip.
///
/// `collist` is maintained as a three-way partition:
/// `[0..low)` settled, `[low..up)` frontier at the current minimum,
/// `[up..dim)` unvisited.
fn shortest_augmenting_path<C: CostSource>(
    dim: usize,
    costs: &C,
    s: &mut Scratch,
    free_row: usize,
) -> Result<()> {
    for j in 0..dim {
        s.dist[j] = costs.cost(free_row, j) - s.v[j];
        s.pred[j] = free_row;
        s.collist[j] = j;
    }

    let mut low = 0; // columns in 0..low are settled
    let mut up = 0; // columns in low..up form the current-minimum frontier
    let mut min = 0.0;
    let mut n_ready = 0; // settled columns needing a price update at the end
    let mut endofpath = 0;
    let mut unassigned_found = false;

    while !unassigned_found {
        if up == low {
            // Frontier exhausted. Every column settled without reaching an
            // unassigned one means the source lied about some cost.
            if low == dim {
                return Err(Error::AugmentationStalled { row: free_row });
            }
            n_ready = low;

            // Rescan the unvisited columns for the new minimum distance,
            // collecting every column that achieves it (exact ties included)
            // into the frontier.
            min = s.dist[s.collist[up]];
            up += 1;
            for k in up..dim {
                let j = s.collist[k];
                let h = s.dist[j];
                if h <= min {
                    if h < min {
                        // Strictly better: restart the frontier.
                        up = low;
                        min = h;
                    }
                    s.collist[k] = s.collist[up];
                    s.collist[up] = j;
                    up += 1;
                }
            }

            // An unassigned frontier column terminates the search.
            for k in low..up {
                if s.colsol[s.collist[k]] == UNASSIGNED {
                    endofpath = s.collist[k];
                    unassigned_found = true;
                    break;
                }
            }
        }

        if !unassigned_found {
            // Relax through the next frontier column's occupant.
            let j1 = s.collist[low];
            low += 1;
            let i = s.colsol[j1];
            let h = costs.cost(i, j1) - s.v[j1] - min;

            for k in up..dim {
                let j = s.collist[k];
                let v2 = costs.cost(i, j) - s.v[j] - h;
                if v2 < s.dist[j] {
                    s.pred[j] = i;
                    if v2 == min {
                        if s.colsol[j] == UNASSIGNED {
                            // Reached an unassigned column at the current
                            // minimum: the path is complete.
                            endofpath = j;
                            unassigned_found = true;
                            break;
                        }
                        // Same minimum, assigned: fold straight into the
                        // frontier instead of waiting for the next rescan.
                        s.collist[k] = s.collist[up];
                        s.collist[up] = j;
                        up += 1;
                    }
                    s.dist[j] = v2;
                }
            }
        }
    }

    // Raise prices on the columns settled before the final frontier; this
    // preserves dual feasibility across the assignment change. Frontier
    // columns sit exactly at `min`, so their update would be zero.
    for k in 0..n_ready {
        let j1 = s.collist[k];
        s.v[j1] += s.dist[j1] - min;
    }

    // Flip the alternating path: walk predecessors back from the terminal
    // column, reversing every edge until the source row is reached.
    let mut j1 = endofpath;
    loop {
        let i = s.pred[j1];
        s.colsol[j1] = i;
        let next = s.rowsol[i];
        s.rowsol[i] = j1;
        if i == free_row {
            break;
        }
        j1 = next;
    }

    Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
