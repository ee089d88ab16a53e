//! Error types for surface construction and solver-backed lookups.
//!
//! A surface can fail in two places: while building its interpolator
//! from the quoted grid, and while pricing inside the delta solver.
//! `SurfaceError` wraps both so callers match on one type.

use thiserror::Error;

use vol_core::types::InterpolationError;

use crate::analytical::AnalyticalError;

/// Errors from delta volatility surfaces.
///
/// # Variants
/// - `Construction`: The quoted grid was rejected by the interpolator
/// - `Pricer`: The delta solver could not set up its pricer
///
/// # Examples
/// ```
/// use vol_core::types::InterpolationError;
/// use vol_models::surfaces::SurfaceError;
///
/// let inner = InterpolationError::NotStrictlyIncreasing { axis: "time".into() };
/// let err: SurfaceError = inner.into();
/// assert!(matches!(err, SurfaceError::Construction(_)));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurfaceError {
    /// The quoted grid was rejected by the interpolator.
    #[error("Surface construction failed: {0}")]
    Construction(#[from] InterpolationError),

    /// The delta solver could not set up its pricer.
    #[error("Delta solver pricing failed: {0}")]
    Pricer(#[from] AnalyticalError),
}
