//! Error types for problem validation and input parsing.
//!
//! Only structural input problems are errors. Pairs rejected during route
//! construction are reported as [`SkipReason`](crate::constructive::SkipReason)
//! values instead.

use thiserror::Error;

/// Errors raised while validating a savings problem instance.
///
/// All of these are fatal to a run: no partial route set is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SavingsError {
    /// The distance matrix has no rows.
    #[error("distance matrix is empty")]
    EmptyMatrix,
    /// A matrix row does not have as many entries as the matrix has rows.
    #[error("distance matrix row {row} has {found} entries, expected {expected}")]
    InvalidMatrix {
        /// Offending row index.
        row: usize,
        /// Number of rows in the matrix.
        expected: usize,
        /// Number of entries in the row.
        found: usize,
    },
    /// A distance is negative, NaN or infinite.
    #[error("distance from {from} to {to} is invalid: {value}")]
    InvalidDistance {
        /// Row index.
        from: usize,
        /// Column index.
        to: usize,
        /// The rejected value.
        value: f64,
    },
    /// Vehicle capacity is not a positive finite number.
    #[error("capacity must be positive and finite, got {0}")]
    InvalidCapacity(f64),
    /// A point referenced by the matrix has no demand entry.
    #[error("no demand given for point {0}")]
    MissingDemand(usize),
    /// A demand is negative, NaN or infinite.
    #[error("demand of point {point} is invalid: {value}")]
    InvalidDemand {
        /// Point the demand belongs to.
        point: usize,
        /// The rejected value.
        value: f64,
    },
    /// A demand entry names the depot or a point outside the matrix.
    #[error("demand given for unknown point {0}")]
    UnknownPoint(usize),
}

/// Errors raised while reading the `;`-separated tabular input format.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Reading the underlying source failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    /// A cell could not be read as a decimal number.
    #[error("line {line}, column {column}: {value:?} is not a number")]
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// 1-based column number.
        column: usize,
        /// The raw cell text.
        value: String,
    },
    /// A demand line has fewer than two fields.
    #[error("line {line}: expected `point;quantity`")]
    MissingField {
        /// 1-based line number.
        line: usize,
    },
    /// A demand line names a point that is not a non-negative integer.
    #[error("line {line}: {value:?} is not a point index")]
    InvalidPoint {
        /// 1-based line number.
        line: usize,
        /// The raw field text.
        value: String,
    },
    /// The same point appears on more than one demand line.
    #[error("line {line}: demand for point {point} given twice")]
    DuplicatePoint {
        /// 1-based line number of the repeated entry.
        line: usize,
        /// The repeated point.
        point: usize,
    },
}
