//! Piecewise linear interpolation over an ordered table.

use super::traits::locate_segment;
use super::{Interpolator, TwoPointInterpolator};
use crate::math::monotonic::is_strictly_increasing;
use crate::types::InterpolationError;
use num_traits::Float;

/// Piecewise linear interpolator.
///
/// Stores strictly increasing x coordinates with matching y values and
/// interpolates linearly between the bracketing pair, delegating each
/// segment to the two-point line fit. With extrapolation enabled,
/// queries beyond either end extend the first or last segment's line;
/// without it they return NaN.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use vol_core::math::interpolators::{Interpolator, LinearInterpolator};
///
/// let xs = [1.0, 10.0];
/// let ys = [1.0, 10.0];
///
/// let interp = LinearInterpolator::new(&xs, &ys, true).unwrap();
/// assert_eq!(interp.interpolate(2.0), 2.0);
/// assert_eq!(interp.interpolate(15.5), 15.5);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator<T: Float> {
    /// Strictly increasing x-coordinates
    xs: Vec<T>,
    /// Corresponding y-values
    ys: Vec<T>,
    /// Whether out-of-range queries extend the boundary segments
    allow_extrapolation: bool,
}

impl<T: Float> LinearInterpolator<T> {
    /// Constructs a linear interpolator from x and y data points.
    ///
    /// # Arguments
    ///
    /// * `xs` - Strictly increasing x-coordinates
    /// * `ys` - Corresponding y-values
    /// * `allow_extrapolation` - Whether queries outside `xs` extend the
    ///   boundary segments instead of returning NaN
    ///
    /// # Errors
    ///
    /// * [`InterpolationError::LengthMismatch`] - `xs` and `ys` differ
    ///   in length
    /// * [`InterpolationError::InsufficientData`] - Fewer than 2 points
    /// * [`InterpolationError::NotStrictlyIncreasing`] - `xs` is not
    ///   strictly increasing
    ///
    /// # Example
    ///
    /// ```
    /// use vol_core::math::interpolators::LinearInterpolator;
    ///
    /// let interp = LinearInterpolator::new(&[0.0, 1.0], &[0.0, 1.0], false).unwrap();
    ///
    /// // Unordered x-coordinates are rejected, not sorted
    /// let result = LinearInterpolator::new(&[1.0, 0.0], &[0.0, 1.0], false);
    /// assert!(result.is_err());
    /// ```
    pub fn new(xs: &[T], ys: &[T], allow_extrapolation: bool) -> Result<Self, InterpolationError> {
        Self::validate(xs, ys)?;
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            allow_extrapolation,
        })
    }

    /// Returns a reference to the x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns a reference to the y-values.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns the number of data points.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if the interpolator has no data points.
    /// Note: This should never be true for a valid interpolator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Replaces the x-coordinates, re-validating the full state first.
    ///
    /// The new sequence must match the current y length; on error the
    /// interpolator is unchanged. Changing the number of points requires
    /// constructing a fresh interpolator.
    pub fn set_x(&mut self, xs: &[T]) -> Result<(), InterpolationError> {
        Self::validate(xs, &self.ys)?;
        self.xs = xs.to_vec();
        Ok(())
    }

    /// Replaces the y-values, re-validating the full state first.
    ///
    /// The new sequence must match the current x length; on error the
    /// interpolator is unchanged.
    pub fn set_y(&mut self, ys: &[T]) -> Result<(), InterpolationError> {
        Self::validate(&self.xs, ys)?;
        self.ys = ys.to_vec();
        Ok(())
    }

    /// Validates a candidate (xs, ys) state.
    fn validate(xs: &[T], ys: &[T]) -> Result<(), InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::LengthMismatch {
                x_len: xs.len(),
                y_len: ys.len(),
            });
        }
        if xs.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                axis: "x".into(),
                got: xs.len(),
                need: 2,
            });
        }
        if !is_strictly_increasing(xs) {
            return Err(InterpolationError::NotStrictlyIncreasing { axis: "x".into() });
        }
        Ok(())
    }

    /// Find the segment index for interpolation using binary search.
    ///
    /// Returns the index `i` such that `xs[i] <= x < xs[i+1]`, clamped
    /// to the valid segment range [0, n-2] so out-of-range queries fall
    /// onto a boundary segment.
    #[inline]
    fn find_segment(&self, x: T) -> usize {
        locate_segment(&self.xs, x)
    }
}

impl<T: Float> Interpolator<T> for LinearInterpolator<T> {
    /// Interpolates the value at `x` along the bracketing segment's
    /// two-point line.
    ///
    /// Out-of-range queries extend the boundary segment when
    /// extrapolation is allowed and return NaN otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use vol_core::math::interpolators::{Interpolator, LinearInterpolator};
    ///
    /// let interp =
    ///     LinearInterpolator::new(&[0.0f64, 1.0, 2.0], &[0.0, 2.0, 4.0], false).unwrap();
    /// assert!((interp.interpolate(0.5) - 1.0).abs() < 1e-12);
    /// assert!(interp.interpolate(2.5).is_nan());
    /// ```
    fn interpolate(&self, x: T) -> T {
        if !self.is_in_range(x) {
            return T::nan();
        }

        let i = self.find_segment(x);
        // Coincident knots cannot pass validation; NaN keeps evaluation
        // total if they somehow did.
        match TwoPointInterpolator::new(self.xs[i], self.ys[i], self.xs[i + 1], self.ys[i + 1]) {
            Ok(line) => line.interpolate(x),
            Err(_) => T::nan(),
        }
    }

    #[inline]
    fn allows_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}
