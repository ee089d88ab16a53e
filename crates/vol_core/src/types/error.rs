//! Error types for structured error handling.
//!
//! This module provides:
//! - `InterpolationError`: Errors from interpolator construction and
//!   mutation
//!
//! Evaluation never produces these errors: out-of-range queries answer
//! with a quiet NaN instead (see the crate-level docs).

use thiserror::Error;

/// Interpolator construction and mutation errors.
///
/// Provides structured error handling for interpolator validation with
/// descriptive context for each failure mode. Every variant names the
/// offending input so callers can report which check failed on which
/// dimension.
///
/// # Variants
/// - `InsufficientData`: Too few points on one axis
/// - `NotStrictlyIncreasing`: Coordinates on one axis are not strictly
///   increasing
/// - `LengthMismatch`: x and y sequences differ in length
/// - `RowCountMismatch`: Grid row count does not match the x axis
/// - `RowLengthMismatch`: One grid row does not match the y axis
/// - `CoincidentPoints`: Two-point input with equal x coordinates
/// - `UnknownMethod`: Unrecognised interpolation method string
///
/// # Examples
/// ```
/// use vol_core::types::InterpolationError;
///
/// let err = InterpolationError::InsufficientData {
///     axis: "x".into(),
///     got: 1,
///     need: 2,
/// };
/// assert_eq!(
///     format!("{}", err),
///     "Insufficient data on axis x: got 1 points, need at least 2"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Too few data points on one axis.
    #[error("Insufficient data on axis {axis}: got {got} points, need at least {need}")]
    InsufficientData {
        /// Axis that failed the check ("x", "y", "time", ...)
        axis: String,
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Coordinates on one axis are not strictly increasing.
    #[error("Axis {axis} is not strictly increasing")]
    NotStrictlyIncreasing {
        /// Axis that failed the check ("x", "y", "time", ...)
        axis: String,
    },

    /// x and y sequences have different lengths.
    #[error("x and y must have the same length: got {x_len} and {y_len}")]
    LengthMismatch {
        /// Length of the x sequence
        x_len: usize,
        /// Length of the y sequence
        y_len: usize,
    },

    /// Grid row count does not match the x coordinate count.
    #[error("Grid has {got} rows, expected {expected} (one per x coordinate)")]
    RowCountMismatch {
        /// Expected number of rows (length of x)
        expected: usize,
        /// Number of rows provided
        got: usize,
    },

    /// One grid row does not match the y coordinate count.
    #[error("Grid row {row} has {got} columns, expected {expected}")]
    RowLengthMismatch {
        /// Index of the offending row
        row: usize,
        /// Expected number of columns (length of y)
        expected: usize,
        /// Number of columns in that row
        got: usize,
    },

    /// Two-point input with coincident x coordinates.
    #[error("Interpolation points coincide at x = {x}")]
    CoincidentPoints {
        /// The shared x coordinate
        x: f64,
    },

    /// Unrecognised interpolation method string.
    #[error("Unknown interpolation method {input:?}: must be {expected}")]
    UnknownMethod {
        /// The string that failed to parse
        input: String,
        /// Human-readable list of accepted methods
        expected: String,
    },
}
