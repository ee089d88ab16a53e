//! Interpolation method selection and runtime dispatch.
//!
//! Callers that read the method from configuration or user input parse
//! it into [`InterpolationMethod`] / [`InterpolationMethod2D`] and
//! construct the matching interpolator through [`InterpolatorEnum`] /
//! [`Interpolator2DEnum`]. The dispatch enums implement the same
//! traits as the concrete interpolators, so downstream code is generic
//! over the choice without boxing.

use super::{
    BicubicInterpolator, BilinearInterpolator, CubicSplineInterpolator, Interpolator,
    Interpolator2D, LinearInterpolator,
};
use crate::types::InterpolationError;
use num_traits::Float;
use std::fmt;
use std::str::FromStr;

/// One-dimensional interpolation method.
///
/// # Example
///
/// ```
/// use vol_core::math::interpolators::InterpolationMethod;
///
/// let method: InterpolationMethod = " Cubic ".parse().unwrap();
/// assert_eq!(method, InterpolationMethod::CubicSpline);
/// assert_eq!(method.as_str(), "cubic");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationMethod {
    /// Piecewise linear between neighbouring knots
    Linear,
    /// Natural cubic spline through all knots
    CubicSpline,
}

impl InterpolationMethod {
    /// Canonical lowercase name, the same form [`FromStr`] accepts.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::CubicSpline => "cubic",
        }
    }
}

impl fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InterpolationMethod {
    type Err = InterpolationError;

    /// Parses a method name, ignoring surrounding whitespace and case.
    /// The empty string is rejected like any other unknown name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "cubic" => Ok(Self::CubicSpline),
            _ => Err(InterpolationError::UnknownMethod {
                input: s.to_string(),
                expected: "one of: linear, cubic".into(),
            }),
        }
    }
}

/// Two-dimensional interpolation method.
///
/// # Example
///
/// ```
/// use vol_core::math::interpolators::InterpolationMethod2D;
///
/// let method: InterpolationMethod2D = "BILINEAR".parse().unwrap();
/// assert_eq!(method, InterpolationMethod2D::Bilinear);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationMethod2D {
    /// Four-corner blend within each grid cell
    Bilinear,
    /// Tensor product of cubic splines
    Bicubic,
}

impl InterpolationMethod2D {
    /// Canonical lowercase name, the same form [`FromStr`] accepts.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bilinear => "bilinear",
            Self::Bicubic => "bicubic",
        }
    }
}

impl fmt::Display for InterpolationMethod2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InterpolationMethod2D {
    type Err = InterpolationError;

    /// Parses a method name, ignoring surrounding whitespace and case.
    /// The empty string is rejected like any other unknown name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bilinear" => Ok(Self::Bilinear),
            "bicubic" => Ok(Self::Bicubic),
            _ => Err(InterpolationError::UnknownMethod {
                input: s.to_string(),
                expected: "one of: bilinear, bicubic".into(),
            }),
        }
    }
}

/// Runtime-dispatched one-dimensional interpolator.
///
/// # Example
///
/// ```
/// use vol_core::math::interpolators::{
///     InterpolationMethod, Interpolator, InterpolatorEnum,
/// };
///
/// let xs = [1.0f64, 2.0, 3.0];
/// let ys = [10.0, 20.0, 30.0];
/// let interp =
///     InterpolatorEnum::new(InterpolationMethod::Linear, &xs, &ys, false).unwrap();
/// assert_eq!(interp.kind(), InterpolationMethod::Linear);
/// assert!((interp.interpolate(2.5) - 25.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub enum InterpolatorEnum<T: Float> {
    /// Piecewise linear interpolator
    Linear(LinearInterpolator<T>),
    /// Natural cubic spline interpolator
    CubicSpline(CubicSplineInterpolator<T>),
}

impl<T: Float> InterpolatorEnum<T> {
    /// Constructs the interpolator selected by `method`.
    ///
    /// # Errors
    ///
    /// Propagates the selected constructor's validation errors.
    pub fn new(
        method: InterpolationMethod,
        xs: &[T],
        ys: &[T],
        allow_extrapolation: bool,
    ) -> Result<Self, InterpolationError> {
        match method {
            InterpolationMethod::Linear => Ok(Self::Linear(LinearInterpolator::new(
                xs,
                ys,
                allow_extrapolation,
            )?)),
            InterpolationMethod::CubicSpline => Ok(Self::CubicSpline(
                CubicSplineInterpolator::new(xs, ys, allow_extrapolation)?,
            )),
        }
    }

    /// The method this interpolator dispatches to.
    #[inline]
    pub fn kind(&self) -> InterpolationMethod {
        match self {
            Self::Linear(_) => InterpolationMethod::Linear,
            Self::CubicSpline(_) => InterpolationMethod::CubicSpline,
        }
    }
}

impl<T: Float> Interpolator<T> for InterpolatorEnum<T> {
    fn interpolate(&self, x: T) -> T {
        match self {
            Self::Linear(interp) => interp.interpolate(x),
            Self::CubicSpline(interp) => interp.interpolate(x),
        }
    }

    fn allows_extrapolation(&self) -> bool {
        match self {
            Self::Linear(interp) => interp.allows_extrapolation(),
            Self::CubicSpline(interp) => interp.allows_extrapolation(),
        }
    }

    fn domain(&self) -> (T, T) {
        match self {
            Self::Linear(interp) => interp.domain(),
            Self::CubicSpline(interp) => interp.domain(),
        }
    }
}

/// Runtime-dispatched two-dimensional interpolator.
///
/// # Example
///
/// ```
/// use vol_core::math::interpolators::{
///     InterpolationMethod2D, Interpolator2D, Interpolator2DEnum,
/// };
///
/// let zs = vec![vec![0.0f64, 1.0], vec![1.0, 2.0]];
/// let surface = Interpolator2DEnum::new(
///     InterpolationMethod2D::Bilinear,
///     &[0.0, 1.0],
///     &[0.0, 1.0],
///     &zs,
///     false,
/// )
/// .unwrap();
/// assert!((surface.interpolate(0.5, 0.5) - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub enum Interpolator2DEnum<T: Float> {
    /// Four-corner cell blend
    Bilinear(BilinearInterpolator<T>),
    /// Tensor product of cubic splines
    Bicubic(BicubicInterpolator<T>),
}

impl<T: Float> Interpolator2DEnum<T> {
    /// Constructs the surface interpolator selected by `method`.
    ///
    /// # Errors
    ///
    /// Propagates the selected constructor's validation errors.
    pub fn new(
        method: InterpolationMethod2D,
        xs: &[T],
        ys: &[T],
        zs: &[Vec<T>],
        allow_extrapolation: bool,
    ) -> Result<Self, InterpolationError> {
        match method {
            InterpolationMethod2D::Bilinear => Ok(Self::Bilinear(BilinearInterpolator::new(
                xs,
                ys,
                zs,
                allow_extrapolation,
            )?)),
            InterpolationMethod2D::Bicubic => Ok(Self::Bicubic(BicubicInterpolator::new(
                xs,
                ys,
                zs,
                allow_extrapolation,
            )?)),
        }
    }

    /// The method this interpolator dispatches to.
    #[inline]
    pub fn kind(&self) -> InterpolationMethod2D {
        match self {
            Self::Bilinear(_) => InterpolationMethod2D::Bilinear,
            Self::Bicubic(_) => InterpolationMethod2D::Bicubic,
        }
    }
}

impl<T: Float> Interpolator2D<T> for Interpolator2DEnum<T> {
    fn interpolate(&self, x: T, y: T) -> T {
        match self {
            Self::Bilinear(surface) => surface.interpolate(x, y),
            Self::Bicubic(surface) => surface.interpolate(x, y),
        }
    }

    fn allows_extrapolation(&self) -> bool {
        match self {
            Self::Bilinear(surface) => surface.allows_extrapolation(),
            Self::Bicubic(surface) => surface.allows_extrapolation(),
        }
    }

    fn x_domain(&self) -> (T, T) {
        match self {
            Self::Bilinear(surface) => surface.x_domain(),
            Self::Bicubic(surface) => surface.x_domain(),
        }
    }

    fn y_domain(&self) -> (T, T) {
        match self {
            Self::Bilinear(surface) => surface.y_domain(),
            Self::Bicubic(surface) => surface.y_domain(),
        }
    }

    fn locate_x(&self, x: T) -> usize {
        match self {
            Self::Bilinear(surface) => surface.locate_x(x),
            Self::Bicubic(surface) => surface.locate_x(x),
        }
    }

    fn locate_y(&self, y: T) -> usize {
        match self {
            Self::Bilinear(surface) => surface.locate_y(y),
            Self::Bicubic(surface) => surface.locate_y(y),
        }
    }
}
