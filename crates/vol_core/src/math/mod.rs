//! Mathematical utilities: monotonicity predicates and interpolation.
//!
//! This module provides:
//! - `monotonic`: Strict-monotonicity predicates used by every
//!   interpolator validator
//! - `interpolators`: One- and two-dimensional interpolation over
//!   tabulated data

pub mod interpolators;
pub mod monotonic;
