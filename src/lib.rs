//! # lap-core
//!
//! Dense linear assignment via the Jonker–Volgenant shortest augmenting path
//! algorithm.
//!
//! Given `dim` rows, `dim` columns, and a cost for every (row, column) pair,
//! [`solve`] finds the one-to-one assignment of rows to columns that minimises
//! total cost, together with the optimal dual prices. This is the classic
//! square Linear Assignment Problem (LAP), solved with the shortest augmenting
//! path method of Jonker and Volgenant (Computing 38, 325–340, 1987).
//!
//! The solver is deterministic, single-threaded, and allocation-light: one
//! solve call owns a handful of `dim`-sized working arrays and nothing else.
//!
//! ## The pipeline
//!
//! ```text
//! CostSource → column reduction → reduction transfer
//!            → augmenting row reduction (two passes)
//!            → shortest-path augmentation → Solution
//! ```
//!
//! Each phase tightens the dual prices and extends a partial assignment; only
//! rows that survive the cheap heuristics reach the Dijkstra-style
//! shortest-path search.
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`cost`] | [`CostSource`], [`CostMatrix`], [`CostFn`] | Cost oracle capability: dense matrix or closure |
//! | [`solver`] | [`solve`], [`Solution`] | The four-phase Jonker–Volgenant pipeline |
//! | [`error`] | [`Error`], [`Result`] | Input validation and defensive invariant errors |
//! | [`snapshot`] | `SolutionSnapshot` | Serialisable solution record (requires `serde` feature) |
//!
//! ## Quick start
//!
//! ```rust
//! use lap_core::{solve, CostMatrix};
//!
//! let costs = CostMatrix::from_rows(&[
//!     vec![7.0, 5.0, 9.0],
//!     vec![2.0, 8.0, 3.0],
//!     vec![6.0, 4.0, 1.0],
//! ])?;
//! let solution = solve(costs.dim(), &costs)?;
//!
//! assert_eq!(solution.row_to_col, vec![1, 0, 2]);
//! assert_eq!(solution.cost, 8.0);
//! # Ok::<(), lap_core::Error>(())
//! ```
//!
//! Costs may equally come from a closure — no matrix needs to be materialised:
//!
//! ```rust
//! use lap_core::{solve, CostFn};
//!
//! let costs = CostFn::new(|i, j| (i as f64 - j as f64).abs());
//! let solution = solve(4, &costs)?;
//! assert_eq!(solution.cost, 0.0); // identity assignment
//! # Ok::<(), lap_core::Error>(())
//! ```
//!
//! ## `no_std`
//!
//! This crate is `#![no_std]` by default and requires only `alloc` (the
//! working arrays are sized by `dim` at runtime). Enable the `std` feature
//! for `std::error::Error` integration, `serde` for the snapshot module, and
//! `python-ffi` for PyO3 bindings.

#![cfg_attr(not(any(feature = "std", feature = "python-ffi")), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

#[cfg(any(feature = "std", feature = "python-ffi"))]
extern crate std;

pub mod cost;
pub mod error;
pub mod solver;

#[cfg(feature = "serde")]
pub mod snapshot;

#[cfg(feature = "python-ffi")]
pub mod ffi;

pub use cost::{CostFn, CostMatrix, CostSource};
pub use error::{Error, Result};
pub use solver::{solve, Solution};
