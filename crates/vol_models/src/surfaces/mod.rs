//! Volatility surfaces quoted in delta.
//!
//! This module provides:
//! - [`DeltaVolatilitySurface`]: A (time, put delta) vol grid with
//!   input normalisation and strike/moneyness lookups
//! - [`DeltaEstimate`]: The reported outcome of the strike-to-delta
//!   fixed-point solve
//! - [`SurfaceError`]: Construction and solver-setup failures
//!
//! ## Design Principles
//!
//! Surfaces follow the evaluation contract of the interpolators they
//! wrap: lookups that merely leave the quoted range answer with a
//! quiet NaN, while structural problems surface as errors. Lookups
//! that need the fixed-point solver additionally report whether the
//! iteration settled, so callers can tell a quote from a guess.

pub mod delta;
pub mod error;

// Re-export public types at module level
pub use delta::{DeltaEstimate, DeltaVolatilitySurface};
pub use error::SurfaceError;
