//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors specific to analytical pricing models
//!
//! Pricing itself never produces these errors: parameters are rejected
//! at construction and on mutation, so a valid pricer stays valid.

use thiserror::Error;

/// Analytical pricing errors.
///
/// Provides structured error handling for pricing parameter validation
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidForward`: Non-positive forward rate or price
/// - `InvalidStrike`: Non-positive strike
/// - `InvalidStandardDeviation`: Non-positive standard deviation
/// - `InvalidDiscountFactor`: Non-positive discount factor
/// - `UnknownOptionType`: Unrecognised option type string
///
/// # Examples
/// ```
/// use vol_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidForward { forward: -100.0 };
/// assert_eq!(format!("{}", err), "Invalid forward: F = -100");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnalyticalError {
    /// Invalid forward rate or price (non-positive).
    #[error("Invalid forward: F = {forward}")]
    InvalidForward {
        /// The invalid forward value
        forward: f64,
    },

    /// Invalid strike (non-positive).
    #[error("Invalid strike: X = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid standard deviation (non-positive).
    #[error("Invalid standard deviation: σ√T = {standard_deviation}")]
    InvalidStandardDeviation {
        /// The invalid standard deviation value
        standard_deviation: f64,
    },

    /// Invalid discount factor (non-positive).
    #[error("Invalid discount factor: df = {discount_factor}")]
    InvalidDiscountFactor {
        /// The invalid discount factor value
        discount_factor: f64,
    },

    /// Unrecognised option type string.
    #[error("Unknown option type {input:?}: must be one of: call, put")]
    UnknownOptionType {
        /// The string that failed to parse
        input: String,
    },
}
