//! Shared traits for one- and two-dimensional interpolators.
//!
//! Both traits share the same evaluation contract: construction is the
//! only fallible step, evaluation is total. A query outside the data
//! range returns the extrapolated value when extrapolation was enabled
//! at construction, and a quiet NaN otherwise.

use num_traits::Float;

/// One-dimensional interpolation over an ordered table.
///
/// Implementors hold strictly increasing x coordinates and matching y
/// values. Range checks come in two flavours: [`extrapolates`] is a pure
/// domain predicate, while [`is_in_range`] additionally treats every
/// point as in range when extrapolation is allowed, matching how lookup
/// call sites use it.
///
/// [`extrapolates`]: Interpolator::extrapolates
/// [`is_in_range`]: Interpolator::is_in_range
pub trait Interpolator<T: Float> {
    /// Computes the interpolated value at `x`.
    ///
    /// Returns NaN if `x` lies outside the data range and extrapolation
    /// is disallowed.
    fn interpolate(&self, x: T) -> T;

    /// Whether out-of-range queries extrapolate instead of returning NaN.
    fn allows_extrapolation(&self) -> bool;

    /// The closed interval `[x_min, x_max]` covered by the data.
    fn domain(&self) -> (T, T);

    /// True when evaluating at `x` would require extrapolation.
    ///
    /// Endpoints count as interior. Independent of the extrapolation
    /// flag.
    #[inline]
    fn extrapolates(&self, x: T) -> bool {
        let (min, max) = self.domain();
        x < min || x > max
    }

    /// True when `x` can be evaluated without leaving the data range,
    /// or unconditionally when extrapolation is allowed.
    #[inline]
    fn is_in_range(&self, x: T) -> bool {
        self.allows_extrapolation() || !self.extrapolates(x)
    }

    /// Element-wise [`is_in_range`](Interpolator::is_in_range) over a
    /// slice of query points.
    #[inline]
    fn all_in_range(&self, xs: &[T]) -> bool {
        xs.iter().all(|&x| self.is_in_range(x))
    }

    /// Element-wise [`interpolate`](Interpolator::interpolate) over a
    /// slice of query points.
    ///
    /// Performs no range checks beyond what `interpolate` does per
    /// element, so out-of-range entries surface as NaN.
    #[inline]
    fn interpolate_slice(&self, xs: &[T]) -> Vec<T> {
        xs.iter().map(|&x| self.interpolate(x)).collect()
    }
}

/// Two-dimensional interpolation over a rectangular grid.
///
/// Implementors hold strictly increasing row coordinates `x`, column
/// coordinates `y`, and a value matrix with one row per x coordinate.
pub trait Interpolator2D<T: Float> {
    /// Computes the interpolated value at `(x, y)`.
    ///
    /// Returns NaN if the point lies outside the grid and extrapolation
    /// is disallowed.
    fn interpolate(&self, x: T, y: T) -> T;

    /// Whether out-of-range queries extrapolate instead of returning NaN.
    fn allows_extrapolation(&self) -> bool;

    /// The closed interval covered by the row coordinates.
    fn x_domain(&self) -> (T, T);

    /// The closed interval covered by the column coordinates.
    fn y_domain(&self) -> (T, T);

    /// Lower bracket index along x.
    ///
    /// Values below the minimum clamp to 0 and values above the maximum
    /// clamp to the second-to-last index, so `locate_x(x) + 1` is always
    /// a valid row.
    fn locate_x(&self, x: T) -> usize;

    /// Lower bracket index along y, clamped like
    /// [`locate_x`](Interpolator2D::locate_x).
    fn locate_y(&self, y: T) -> usize;

    /// True when `(x, y)` lies within both coordinate ranges, or
    /// unconditionally when extrapolation is allowed.
    #[inline]
    fn is_in_range(&self, x: T, y: T) -> bool {
        if self.allows_extrapolation() {
            return true;
        }
        let (x_min, x_max) = self.x_domain();
        let (y_min, y_max) = self.y_domain();
        x >= x_min && x <= x_max && y >= y_min && y <= y_max
    }
}

/// Lower bracket index of `x` within strictly increasing `knots`, via
/// binary search, clamped to `[0, knots.len() - 2]`.
///
/// Callers guarantee `knots.len() >= 2`.
#[inline]
pub(crate) fn locate_segment<T: Float>(knots: &[T], x: T) -> usize {
    let upper = knots.partition_point(|&k| k <= x);
    upper.saturating_sub(1).min(knots.len() - 2)
}
