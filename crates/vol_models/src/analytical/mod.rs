//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-76 model for options on forwards and futures
//! - Standard normal distribution functions used by the formulas
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Supports both `f64` and `f32`
//! - **Numerical Stability**: Uses erfc-based CDF for accuracy
//! - **Validated parameters**: Inputs are checked at construction and
//!   on every mutation, so pricing itself never fails

pub mod black76;
pub mod distributions;
pub mod error;

// Re-export main types at module level
pub use black76::{Black76, OptionType};
pub use distributions::norm_cdf;
pub use error::AnalyticalError;
