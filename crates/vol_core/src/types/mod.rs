//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for interpolator construction and
//!   mutation
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module
//! level:
//! - [`InterpolationError`] from `error`

pub mod error;

// Re-export commonly used types at module level
pub use error::InterpolationError;
