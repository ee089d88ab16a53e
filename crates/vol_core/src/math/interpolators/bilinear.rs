//! Bilinear interpolation over a rectangular grid.
//!
//! Each query locates the bracketing grid cell on both axes and blends
//! the four corner values with the classic weighted-average formula.
//! The result is continuous across the grid and linear along every grid
//! line, which keeps it cheap and shape-preserving for tabulated
//! surfaces such as volatility quotes.

use super::traits::{locate_segment, Interpolator2D};
use crate::math::monotonic::is_strictly_increasing;
use crate::types::InterpolationError;
use num_traits::Float;

/// Bilinear interpolator over a rectangular grid.
///
/// Stores strictly increasing x and y coordinates plus a dense value
/// grid in row-major order: `zs[i][j]` is the value at `(xs[i], ys[j])`.
/// Out-of-range queries extend the boundary cell's plane when
/// extrapolation is allowed and answer NaN otherwise.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use vol_core::math::interpolators::{BilinearInterpolator, Interpolator2D};
///
/// // z = x + y sampled on the unit square
/// let xs = [0.0f64, 1.0];
/// let ys = [0.0, 1.0];
/// let zs = vec![vec![0.0, 1.0], vec![1.0, 2.0]];
///
/// let surface = BilinearInterpolator::new(&xs, &ys, &zs, false).unwrap();
/// assert!((surface.interpolate(0.5, 0.5) - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct BilinearInterpolator<T: Float> {
    /// Strictly increasing x-coordinates
    xs: Vec<T>,
    /// Strictly increasing y-coordinates
    ys: Vec<T>,
    /// Grid values, one row per x-coordinate
    zs: Vec<Vec<T>>,
    /// Whether out-of-range queries extend the boundary cell
    allow_extrapolation: bool,
}

impl<T: Float> BilinearInterpolator<T> {
    /// Constructs a bilinear interpolator over `(xs, ys, zs)`.
    ///
    /// # Errors
    ///
    /// * [`InterpolationError::InsufficientData`] - Fewer than 2 points
    ///   on either axis
    /// * [`InterpolationError::NotStrictlyIncreasing`] - An axis is not
    ///   strictly increasing
    /// * [`InterpolationError::RowCountMismatch`] - `zs` does not hold
    ///   one row per x-coordinate
    /// * [`InterpolationError::RowLengthMismatch`] - A row does not hold
    ///   one value per y-coordinate
    pub fn new(
        xs: &[T],
        ys: &[T],
        zs: &[Vec<T>],
        allow_extrapolation: bool,
    ) -> Result<Self, InterpolationError> {
        Self::validate(xs, ys, zs)?;
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            zs: zs.to_vec(),
            allow_extrapolation,
        })
    }

    /// Returns a reference to the x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns a reference to the y-coordinates.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns a reference to the grid values.
    #[inline]
    pub fn zs(&self) -> &[Vec<T>] {
        &self.zs
    }

    /// Replaces the x-coordinates.
    ///
    /// The new sequence must keep the grid consistent; on error the
    /// interpolator is unchanged.
    pub fn set_x(&mut self, xs: &[T]) -> Result<(), InterpolationError> {
        Self::validate(xs, &self.ys, &self.zs)?;
        self.xs = xs.to_vec();
        Ok(())
    }

    /// Replaces the y-coordinates.
    ///
    /// The new sequence must keep the grid consistent; on error the
    /// interpolator is unchanged.
    pub fn set_y(&mut self, ys: &[T]) -> Result<(), InterpolationError> {
        Self::validate(&self.xs, ys, &self.zs)?;
        self.ys = ys.to_vec();
        Ok(())
    }

    /// Replaces the grid values.
    ///
    /// The new grid must match the current coordinate lengths; on error
    /// the interpolator is unchanged.
    pub fn set_z(&mut self, zs: &[Vec<T>]) -> Result<(), InterpolationError> {
        Self::validate(&self.xs, &self.ys, zs)?;
        self.zs = zs.to_vec();
        Ok(())
    }

    /// Validates a candidate (xs, ys, zs) state.
    fn validate(xs: &[T], ys: &[T], zs: &[Vec<T>]) -> Result<(), InterpolationError> {
        if xs.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                axis: "x".into(),
                got: xs.len(),
                need: 2,
            });
        }
        if ys.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                axis: "y".into(),
                got: ys.len(),
                need: 2,
            });
        }
        if !is_strictly_increasing(xs) {
            return Err(InterpolationError::NotStrictlyIncreasing { axis: "x".into() });
        }
        if !is_strictly_increasing(ys) {
            return Err(InterpolationError::NotStrictlyIncreasing { axis: "y".into() });
        }
        if zs.len() != xs.len() {
            return Err(InterpolationError::RowCountMismatch {
                expected: xs.len(),
                got: zs.len(),
            });
        }
        for (row, values) in zs.iter().enumerate() {
            if values.len() != ys.len() {
                return Err(InterpolationError::RowLengthMismatch {
                    row,
                    expected: ys.len(),
                    got: values.len(),
                });
            }
        }
        Ok(())
    }
}

impl<T: Float> Interpolator2D<T> for BilinearInterpolator<T> {
    /// Evaluates the surface at `(x, y)`.
    ///
    /// Locates the bracketing cell and blends its four corners:
    ///
    /// ```text
    /// z = (1-t)(1-u)*z1 + t(1-u)*z3 + t*u*z4 + (1-t)u*z2
    /// ```
    ///
    /// with `t` and `u` the fractional positions inside the cell.
    /// Out-of-range queries extend the boundary cell when extrapolation
    /// is allowed and return NaN otherwise.
    fn interpolate(&self, x: T, y: T) -> T {
        if !self.is_in_range(x, y) {
            return T::nan();
        }

        let i = self.locate_x(x);
        let j = self.locate_y(y);

        let z1 = self.zs[i][j];
        let z2 = self.zs[i][j + 1];
        let z3 = self.zs[i + 1][j];
        let z4 = self.zs[i + 1][j + 1];

        let t = (x - self.xs[i]) / (self.xs[i + 1] - self.xs[i]);
        let u = (y - self.ys[j]) / (self.ys[j + 1] - self.ys[j]);

        let one = T::one();
        (one - t) * (one - u) * z1 + t * (one - u) * z3 + t * u * z4 + (one - t) * u * z2
    }

    #[inline]
    fn allows_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    #[inline]
    fn x_domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    #[inline]
    fn y_domain(&self) -> (T, T) {
        (self.ys[0], self.ys[self.ys.len() - 1])
    }

    #[inline]
    fn locate_x(&self, x: T) -> usize {
        locate_segment(&self.xs, x)
    }

    #[inline]
    fn locate_y(&self, y: T) -> usize {
        locate_segment(&self.ys, y)
    }
}
