//! Cubic spline interpolation implementation.
//!
//! Follows the classic Numerical-Recipes construction: a single
//! tridiagonal forward-elimination / back-substitution pass computes one
//! second derivative per knot, and evaluation blends the bracketing
//! knots with those derivatives. Boundary conditions are expressed as
//! first-derivative targets: a zero target selects the routine's
//! natural branch, a nonzero target clamps the end slope.

use super::traits::locate_segment;
use super::Interpolator;
use crate::math::monotonic::is_strictly_increasing;
use crate::types::InterpolationError;
use num_traits::Float;

/// Cubic spline interpolator.
///
/// Stores strictly increasing x coordinates, matching y values, and the
/// precomputed second derivative at every knot. The derivatives are
/// computed once at construction and recomputed whenever `set_x` or
/// `set_y` replaces data, so evaluation is a pure table lookup plus the
/// cubic blend.
///
/// The boundary convention is the one this routine has always shipped
/// with: `yp1 == 0` / `ypn == 0` select its "natural" branch (including
/// the fixed `-0.5` first decomposition coefficient), which does not
/// coincide with the textbook zero-second-derivative natural spline at
/// the left end. Regression values downstream depend on it, so it is
/// part of the contract rather than a detail to correct.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use vol_core::math::interpolators::{CubicSplineInterpolator, Interpolator};
///
/// let xs = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
/// let ys: Vec<f64> = xs.iter().map(|&x| 2.4 * x * x - 3.1 * x - 10.0).collect();
///
/// let spline = CubicSplineInterpolator::new(&xs, &ys, false).unwrap();
/// assert!((spline.interpolate(1.73) - (-8.24323396243094)).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSplineInterpolator<T: Float> {
    /// Strictly increasing x-coordinates
    xs: Vec<T>,
    /// Corresponding y-values
    ys: Vec<T>,
    /// First-derivative boundary target at the first knot (zero selects
    /// the natural branch)
    yp1: T,
    /// First-derivative boundary target at the last knot
    ypn: T,
    /// Second derivative per knot, derived from the data and boundaries
    second_derivatives: Vec<T>,
    /// Whether out-of-range queries extend the boundary cubics
    allow_extrapolation: bool,
}

impl<T: Float> CubicSplineInterpolator<T> {
    /// Constructs a natural-boundary cubic spline.
    ///
    /// Equivalent to [`clamped`](Self::clamped) with both derivative
    /// targets at zero.
    ///
    /// # Errors
    ///
    /// * [`InterpolationError::LengthMismatch`] - `xs` and `ys` differ
    ///   in length
    /// * [`InterpolationError::InsufficientData`] - Fewer than 2 points
    /// * [`InterpolationError::NotStrictlyIncreasing`] - `xs` is not
    ///   strictly increasing
    pub fn new(xs: &[T], ys: &[T], allow_extrapolation: bool) -> Result<Self, InterpolationError> {
        Self::clamped(xs, ys, T::zero(), T::zero(), allow_extrapolation)
    }

    /// Constructs a cubic spline with explicit first-derivative boundary
    /// targets `yp1` (first knot) and `ypn` (last knot).
    ///
    /// Zero targets reproduce [`new`](Self::new) exactly.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    ///
    /// # Example
    ///
    /// ```
    /// use vol_core::math::interpolators::{CubicSplineInterpolator, Interpolator};
    ///
    /// // y = 3x + 1 with its true slope clamped at both ends
    /// let xs = [0.0f64, 1.0, 2.0, 3.0];
    /// let ys = [1.0, 4.0, 7.0, 10.0];
    /// let spline = CubicSplineInterpolator::clamped(&xs, &ys, 3.0, 3.0, false).unwrap();
    /// assert!((spline.interpolate(1.5) - 5.5).abs() < 1e-12);
    /// ```
    pub fn clamped(
        xs: &[T],
        ys: &[T],
        yp1: T,
        ypn: T,
        allow_extrapolation: bool,
    ) -> Result<Self, InterpolationError> {
        Self::validate(xs, ys)?;
        let second_derivatives = Self::compute_second_derivatives(xs, ys, yp1, ypn);
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            yp1,
            ypn,
            second_derivatives,
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

    /// Returns the number of knots.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if the spline has no knots.
    /// Note: This should never be true for a valid interpolator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Replaces the x-coordinates, re-validating and rebuilding the
    /// second derivatives.
    ///
    /// The new sequence must match the current y length; on error the
    /// spline is unchanged.
    pub fn set_x(&mut self, xs: &[T]) -> Result<(), InterpolationError> {
        Self::validate(xs, &self.ys)?;
        self.second_derivatives = Self::compute_second_derivatives(xs, &self.ys, self.yp1, self.ypn);
        self.xs = xs.to_vec();
        Ok(())
    }

    /// Replaces the y-values, re-validating and rebuilding the second
    /// derivatives.
    ///
    /// The new sequence must match the current x length; on error the
    /// spline is unchanged.
    pub fn set_y(&mut self, ys: &[T]) -> Result<(), InterpolationError> {
        Self::validate(&self.xs, ys)?;
        self.second_derivatives = Self::compute_second_derivatives(&self.xs, ys, self.yp1, self.ypn);
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

    /// Tridiagonal decomposition producing one second derivative per
    /// knot.
    ///
    /// The forward sweep stores decomposition factors in the output and
    /// intermediate right-hand values in `u`; back-substitution then
    /// overwrites the output in place. Callers guarantee validated data
    /// (`n >= 2`, strictly increasing `xs`).
    fn compute_second_derivatives(xs: &[T], ys: &[T], yp1: T, ypn: T) -> Vec<T> {
        let n = xs.len();
        let mut spline = vec![T::zero(); n];
        let mut u = vec![T::zero(); n];

        let half = T::from(0.5).unwrap();
        let two = T::from(2.0).unwrap();
        let three = T::from(3.0).unwrap();
        let six = T::from(6.0).unwrap();

        spline[0] = -half;
        u[0] = if yp1 == T::zero() {
            T::zero()
        } else {
            (three / (xs[1] - xs[0])) * ((ys[1] - ys[0]) / (xs[1] - xs[0]) - yp1)
        };

        for i in 1..n - 1 {
            let sig = (xs[i] - xs[i - 1]) / (xs[i + 1] - xs[i - 1]);
            let p = sig * spline[i - 1] + two;
            spline[i] = (sig - T::one()) / p;
            u[i] = (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i])
                - (ys[i] - ys[i - 1]) / (xs[i] - xs[i - 1]);
            u[i] = (six * u[i] / (xs[i + 1] - xs[i - 1]) - sig * u[i - 1]) / p;
        }

        let (qn, un) = if ypn == T::zero() {
            (T::zero(), T::zero())
        } else {
            (
                half,
                (three / (xs[n - 1] - xs[n - 2]))
                    * (ypn - (ys[n - 1] - ys[n - 2]) / (xs[n - 1] - xs[n - 2])),
            )
        };
        spline[n - 1] = (un - qn * u[n - 2]) / (qn * spline[n - 2] + T::one());

        for k in (0..=n - 2).rev() {
            spline[k] = spline[k] * spline[k + 1] + u[k];
        }

        spline
    }

    /// Find the bracketing knot pair via binary search, clamped to the
    /// boundary cells for out-of-range queries.
    #[inline]
    fn find_segment(&self, x: T) -> usize {
        locate_segment(&self.xs, x)
    }
}

impl<T: Float> Interpolator<T> for CubicSplineInterpolator<T> {
    /// Evaluates the spline at `x`.
    ///
    /// Blends the bracketing knot values with their second derivatives:
    ///
    /// ```text
    /// y = a*y_lo + b*y_hi + ((a^3 - a)*S_lo + (b^3 - b)*S_hi) * h^2 / 6
    /// ```
    ///
    /// with `a = (x_hi - x)/h`, `b = (x - x_lo)/h`, `h = x_hi - x_lo`.
    /// Out-of-range queries extend the boundary cubic when extrapolation
    /// is allowed and return NaN otherwise. A degenerate zero-width
    /// bracket cannot pass validation but would also answer NaN.
    fn interpolate(&self, x: T) -> T {
        if !self.is_in_range(x) {
            return T::nan();
        }

        let klo = self.find_segment(x);
        let khi = klo + 1;

        let h = self.xs[khi] - self.xs[klo];
        if h == T::zero() {
            return T::nan();
        }

        let six = T::from(6.0).unwrap();
        let a = (self.xs[khi] - x) / h;
        let b = (x - self.xs[klo]) / h;
        a * self.ys[klo]
            + b * self.ys[khi]
            + ((a * a * a - a) * self.second_derivatives[klo]
                + (b * b * b - b) * self.second_derivatives[khi])
                * (h * h)
                / six
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
