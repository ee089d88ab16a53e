//! Interpolation methods for numerical computation.
//!
//! This module provides the interpolation algorithms behind curve and
//! surface lookups, generic over `T: num_traits::Float`.
//!
//! ## Available Interpolators
//!
//! - [`TwoPointInterpolator`]: Exact line through two points
//! - [`LinearInterpolator`]: Piecewise linear interpolation between data points
//! - [`CubicSplineInterpolator`]: Cubic spline with natural or clamped boundaries
//! - [`BilinearInterpolator`]: 2D grid interpolation for surfaces
//! - [`BicubicInterpolator`]: 2D tensor-product spline interpolation
//!
//! ## Core Traits
//!
//! All 1D interpolators implement the [`Interpolator`] trait and all
//! surface interpolators implement [`Interpolator2D`]. Both evaluate
//! softly: an out-of-range query answers NaN unless extrapolation was
//! enabled at construction, and construction is where malformed data
//! is rejected.
//!
//! ## Runtime Selection
//!
//! [`InterpolationMethod`] and [`InterpolationMethod2D`] parse method
//! names from configuration or user input; [`InterpolatorEnum`] and
//! [`Interpolator2DEnum`] construct and dispatch to the matching
//! implementation without boxing.
//!
//! ## Example
//!
//! ```
//! use vol_core::math::interpolators::{Interpolator, LinearInterpolator};
//!
//! let xs = [0.0f64, 1.0, 2.0, 3.0];
//! let ys = [0.0, 1.0, 4.0, 9.0];
//!
//! let interp = LinearInterpolator::new(&xs, &ys, false).unwrap();
//! let (x_min, x_max) = interp.domain();
//! assert_eq!(x_min, 0.0);
//! assert_eq!(x_max, 3.0);
//!
//! // Interpolate at x = 1.5 (between y=1.0 and y=4.0)
//! let y = interp.interpolate(1.5);
//! assert!((y - 2.5).abs() < 1e-10);
//! ```

mod bicubic;
mod bilinear;
mod cubic_spline;
mod linear;
mod method;
mod traits;
mod two_point;

// Re-export public types at module level
pub use bicubic::BicubicInterpolator;
pub use bilinear::BilinearInterpolator;
pub use cubic_spline::CubicSplineInterpolator;
pub use linear::LinearInterpolator;
pub use method::{InterpolationMethod, InterpolationMethod2D, Interpolator2DEnum, InterpolatorEnum};
pub use traits::{Interpolator, Interpolator2D};
pub use two_point::TwoPointInterpolator;
