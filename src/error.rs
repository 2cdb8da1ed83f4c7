//! Error types for lap-core.

use thiserror::Error;

/// Result type alias using lap-core's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur when constructing a cost source or solving.
///
/// The solver itself has exactly two failure modes: invalid input (empty
/// problem, non-finite cost) detected before any algorithmic work, and a
/// defensive check that only an inconsistent cost source can trigger.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The problem has no rows. A solve over zero rows has no meaning.
    #[error("problem size must be at least 1")]
    EmptyProblem,

    /// The cost source returned a NaN or infinite value.
    ///
    /// Every queried pair must be a finite, comparable `f64`. Detected during
    /// the validation pass, before any assignment work begins.
    #[error("cost({row}, {col}) is not finite: {value}")]
    NonFiniteCost {
        /// Row index of the offending pair.
        row: usize,
        /// Column index of the offending pair.
        col: usize,
        /// The non-finite value that was returned.
        value: f64,
    },

    /// A cost buffer does not match the declared square dimensions.
    #[error("cost matrix shape mismatch: expected {expected} entries, got {got}")]
    ShapeMismatch {
        /// Number of entries required by the declared dimension.
        expected: usize,
        /// Number of entries actually supplied.
        got: usize,
    },

    /// The shortest-path search exhausted every column without reaching an
    /// unassigned one.
    ///
    /// Impossible for a pure, repeatable cost source — the column set is
    /// finite and each search round settles at least one column. Indicates
    /// the source returned different values for the same pair across queries.
    #[error("no augmenting path from row {row}: cost source is inconsistent")]
    AugmentationStalled {
        /// The free row whose search stalled.
        row: usize,
    },

    /// A restored snapshot failed validation.
    #[cfg(feature = "serde")]
    #[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
    #[error("snapshot is inconsistent: {reason}")]
    InvalidSnapshot {
        /// What the validation found.
        reason: &'static str,
    },
}
