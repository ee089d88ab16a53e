//! # vol_core: Interpolation Kernel for Volatility Surfaces
//!
//! ## Foundation Layer Role
//!
//! vol_core is the bottom layer of the volkit-rust workspace, providing:
//! - Strict-monotonicity predicates (`math::monotonic`)
//! - One-dimensional interpolation: two-point line, piecewise linear,
//!   cubic spline (`math::interpolators`)
//! - Two-dimensional interpolation: bilinear and tensor-product bicubic
//!   (`math::interpolators`)
//! - Structured error types (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! vol_core depends on no other volkit crate, with minimal external
//! dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error derives
//! - serde: Serialisation support (optional)
//!
//! ## Evaluation Contract
//!
//! Construction and mutation are validated eagerly and return `Result`;
//! a successfully constructed interpolator is valid for its whole
//! lifetime. Evaluation is infallible: a query outside the data range
//! with extrapolation disallowed returns a quiet NaN, so vectorised
//! callers can post-filter rather than branch per element.
//!
//! ## Usage Examples
//!
//! ```rust
//! use vol_core::math::interpolators::{Interpolator, LinearInterpolator};
//!
//! let xs = [1.0f64, 2.0, 3.0, 4.0];
//! let ys = [10.0, 20.0, 30.0, 40.0];
//!
//! let interp = LinearInterpolator::new(&xs, &ys, false).unwrap();
//! assert!((interp.interpolate(2.5) - 25.0).abs() < 1e-12);
//!
//! // Out of range without extrapolation: quiet NaN, not an error.
//! assert!(interp.interpolate(9.0).is_nan());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for method selectors and error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
