//! Bicubic interpolation over a rectangular grid.
//!
//! Built as a tensor product of one-dimensional cubic splines: one
//! spline per grid column interpolates through x, and a fresh
//! cross-sectional spline through the column results interpolates
//! through y. The column splines are precomputed at construction, so a
//! query costs one spline evaluation per column plus one spline build
//! over the cross-section.

use super::cubic_spline::CubicSplineInterpolator;
use super::traits::{locate_segment, Interpolator2D};
use super::Interpolator;
use crate::math::monotonic::is_strictly_increasing;
use crate::types::InterpolationError;
use num_traits::Float;

/// Bicubic interpolator over a rectangular grid.
///
/// Stores strictly increasing x and y coordinates, a dense value grid
/// in row-major order (`zs[i][j]` is the value at `(xs[i], ys[j])`),
/// and one natural cubic spline per y-coordinate fitted through that
/// column's values. Evaluation runs the x-pass through the column
/// splines and then a y-pass through the resulting cross-section.
///
/// The y-pass spline always extrapolates: the outer range check has
/// already rejected out-of-range queries, so clamping it again would
/// only mask the cross-section near the boundary.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use vol_core::math::interpolators::{BicubicInterpolator, Interpolator2D};
///
/// // z = x + y; spline interpolation reproduces the plane
/// let xs = [0.0f64, 1.0, 2.0];
/// let ys = [0.0, 1.0, 2.0];
/// let zs = vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 2.0, 3.0],
///     vec![2.0, 3.0, 4.0],
/// ];
///
/// let surface = BicubicInterpolator::new(&xs, &ys, &zs, false).unwrap();
/// assert!((surface.interpolate(0.5, 1.5) - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct BicubicInterpolator<T: Float> {
    /// Strictly increasing x-coordinates
    xs: Vec<T>,
    /// Strictly increasing y-coordinates
    ys: Vec<T>,
    /// Grid values, one row per x-coordinate
    zs: Vec<Vec<T>>,
    /// One natural spline per y-coordinate, fitted through its column
    column_splines: Vec<CubicSplineInterpolator<T>>,
    /// Whether out-of-range queries extend the boundary splines
    allow_extrapolation: bool,
}

impl<T: Float> BicubicInterpolator<T> {
    /// Constructs a bicubic interpolator over `(xs, ys, zs)`.
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
        let column_splines = Self::build_column_splines(xs, ys, zs, allow_extrapolation)?;
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            zs: zs.to_vec(),
            column_splines,
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

    /// Replaces the x-coordinates, rebuilding the column splines.
    ///
    /// The new sequence must keep the grid consistent; on error the
    /// interpolator is unchanged.
    pub fn set_x(&mut self, xs: &[T]) -> Result<(), InterpolationError> {
        Self::validate(xs, &self.ys, &self.zs)?;
        self.column_splines =
            Self::build_column_splines(xs, &self.ys, &self.zs, self.allow_extrapolation)?;
        self.xs = xs.to_vec();
        Ok(())
    }

    /// Replaces the y-coordinates, rebuilding the column splines.
    ///
    /// The new sequence must keep the grid consistent; on error the
    /// interpolator is unchanged.
    pub fn set_y(&mut self, ys: &[T]) -> Result<(), InterpolationError> {
        Self::validate(&self.xs, ys, &self.zs)?;
        self.column_splines =
            Self::build_column_splines(&self.xs, ys, &self.zs, self.allow_extrapolation)?;
        self.ys = ys.to_vec();
        Ok(())
    }

    /// Replaces the grid values, rebuilding the column splines.
    ///
    /// The new grid must match the current coordinate lengths; on error
    /// the interpolator is unchanged.
    pub fn set_z(&mut self, zs: &[Vec<T>]) -> Result<(), InterpolationError> {
        Self::validate(&self.xs, &self.ys, zs)?;
        self.column_splines =
            Self::build_column_splines(&self.xs, &self.ys, zs, self.allow_extrapolation)?;
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

    /// Fits one natural spline through each grid column.
    fn build_column_splines(
        xs: &[T],
        ys: &[T],
        zs: &[Vec<T>],
        allow_extrapolation: bool,
    ) -> Result<Vec<CubicSplineInterpolator<T>>, InterpolationError> {
        let mut splines = Vec::with_capacity(ys.len());
        for j in 0..ys.len() {
            let column: Vec<T> = zs.iter().map(|row| row[j]).collect();
            splines.push(CubicSplineInterpolator::new(xs, &column, allow_extrapolation)?);
        }
        Ok(splines)
    }
}

impl<T: Float> Interpolator2D<T> for BicubicInterpolator<T> {
    /// Evaluates the surface at `(x, y)`.
    ///
    /// Runs the x-pass through the precomputed column splines, then
    /// fits and evaluates the cross-sectional spline through y.
    /// Out-of-range queries extend the boundary splines when
    /// extrapolation is allowed and return NaN otherwise.
    fn interpolate(&self, x: T, y: T) -> T {
        if !self.is_in_range(x, y) {
            return T::nan();
        }

        let section: Vec<T> = self
            .column_splines
            .iter()
            .map(|spline| spline.interpolate(x))
            .collect();

        // Construction cannot fail here because ys was validated with
        // the grid; NaN keeps evaluation total if it somehow did.
        match CubicSplineInterpolator::new(&self.ys, &section, true) {
            Ok(across) => across.interpolate(y),
            Err(_) => T::nan(),
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TIMES: [f64; 6] = [1.0, 2.0, 3.0, 6.0, 12.0, 24.0];
    const DELTAS: [f64; 5] = [10.0, 25.0, 50.0, 75.0, 90.0];

    /// Volatility quotes per (term, delta), one row per term.
    fn volatility_grid() -> Vec<Vec<f64>> {
        vec![
            vec![0.17938, 0.17575, 0.175, 0.18825, 0.20128],
            vec![0.182884, 0.17575, 0.175, 0.18825, 0.204784],
            vec![0.193908, 0.18247, 0.18, 0.19547, 0.216708],
            vec![0.219688, 0.206225, 0.205, 0.223725, 0.250288],
            vec![0.248396, 0.234775, 0.235, 0.223725, 0.287796],
            vec![0.263268, 0.2475, 0.2475, 0.2725, 0.307068],
        ]
    }

    fn surface_fixture(allow_extrapolation: bool) -> BicubicInterpolator<f64> {
        BicubicInterpolator::new(&TIMES, &DELTAS, &volatility_grid(), allow_extrapolation)
            .unwrap()
    }

    // ========================================================================
    // Construction Tests
    // ========================================================================

    #[test]
    fn test_new_with_minimum_grid() {
        let zs = vec![vec![0.0, 1.0], vec![1.0, 2.0]];
        let surface = BicubicInterpolator::new(&[0.0, 1.0], &[0.0, 1.0], &zs, false).unwrap();
        assert_eq!(surface.xs().len(), 2);
        assert_eq!(surface.ys().len(), 2);
    }

    #[test]
    fn test_new_insufficient_y() {
        let zs = vec![vec![0.0], vec![1.0]];
        let result = BicubicInterpolator::new(&[0.0, 1.0], &[0.5], &zs, false);
        assert_eq!(
            result.unwrap_err(),
            InterpolationError::InsufficientData {
                axis: "y".into(),
                got: 1,
                need: 2,
            }
        );
    }

    #[test]
    fn test_new_rejects_non_increasing_x() {
        let zs = vec![vec![0.0, 1.0], vec![1.0, 2.0]];
        let result = BicubicInterpolator::new(&[1.0, 0.0], &[0.0, 1.0], &zs, false);
        assert_eq!(
            result.unwrap_err(),
            InterpolationError::NotStrictlyIncreasing { axis: "x".into() }
        );
    }

    #[test]
    fn test_new_rejects_ragged_grid() {
        let zs = vec![vec![0.0, 1.0], vec![1.0, 2.0, 3.0]];
        let result = BicubicInterpolator::new(&[0.0, 1.0], &[0.0, 1.0], &zs, false);
        assert_eq!(
            result.unwrap_err(),
            InterpolationError::RowLengthMismatch {
                row: 1,
                expected: 2,
                got: 3,
            }
        );
    }

    // ========================================================================
    // Evaluation Tests
    // ========================================================================

    #[test]
    fn test_grid_points_round_trip_exactly() {
        let surface = surface_fixture(false);
        let grid = volatility_grid();
        for (i, &x) in TIMES.iter().enumerate() {
            for (j, &y) in DELTAS.iter().enumerate() {
                assert_eq!(surface.interpolate(x, y), grid[i][j]);
            }
        }
    }

    #[test]
    fn test_reproduces_plane_exactly() {
        // z = x + y; every spline pass sees affine data
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [0.0, 1.0, 2.0];
        let zs: Vec<Vec<f64>> = xs
            .iter()
            .map(|&x| ys.iter().map(|&y| x + y).collect())
            .collect();
        let surface = BicubicInterpolator::new(&xs, &ys, &zs, false).unwrap();
        assert_relative_eq!(surface.interpolate(0.3, 0.7), 1.0, epsilon = 1e-12);
        assert_relative_eq!(surface.interpolate(2.5, 1.25), 3.75, epsilon = 1e-12);
    }

    #[test]
    fn test_matches_composition_of_spline_passes() {
        let surface = surface_fixture(false);
        let grid = volatility_grid();

        // Spline each delta column through time, then across delta
        let mut section = Vec::with_capacity(DELTAS.len());
        for j in 0..DELTAS.len() {
            let column: Vec<f64> = (0..TIMES.len()).map(|i| grid[i][j]).collect();
            let through_time = CubicSplineInterpolator::new(&TIMES, &column, true).unwrap();
            section.push(through_time.interpolate(9.0));
        }
        let across_delta = CubicSplineInterpolator::new(&DELTAS, &section, true).unwrap();

        assert_relative_eq!(
            surface.interpolate(9.0, 33.0),
            across_delta.interpolate(33.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_out_of_range_without_extrapolation_is_nan() {
        let surface = surface_fixture(false);
        assert!(surface.interpolate(9.0, 95.0).is_nan());
        assert!(surface.interpolate(0.5, 50.0).is_nan());
    }

    #[test]
    fn test_extrapolation_extends_boundary_splines() {
        let surface = surface_fixture(true);
        assert!(surface.interpolate(9.0, 95.0).is_finite());
        assert!(surface.interpolate(30.0, 50.0).is_finite());
    }

    #[test]
    fn test_nan_query_returns_nan() {
        let strict = surface_fixture(false);
        assert!(strict.interpolate(f64::NAN, 50.0).is_nan());

        let loose = surface_fixture(true);
        assert!(loose.interpolate(9.0, f64::NAN).is_nan());
    }

    // ========================================================================
    // Range Tests
    // ========================================================================

    #[test]
    fn test_is_in_range_without_extrapolation() {
        let surface = surface_fixture(false);
        assert!(surface.is_in_range(1.5, 75.0));
        assert!(!surface.is_in_range(0.5, 75.0));
        assert!(!surface.is_in_range(1.5, 95.0));
    }

    #[test]
    fn test_locate_matches_axis_ordering() {
        let surface = surface_fixture(true);
        assert_eq!(surface.locate_x(2.1), 1);
        assert_eq!(surface.locate_x(36.0), 4);
        assert_eq!(surface.locate_y(26.0), 1);
        assert_eq!(surface.locate_y(100.0), 3);
    }

    // ========================================================================
    // Mutator Tests
    // ========================================================================

    #[test]
    fn test_set_z_rebuilds_column_splines() {
        let mut surface = surface_fixture(false);
        let shifted: Vec<Vec<f64>> = volatility_grid()
            .iter()
            .map(|row| row.iter().map(|&z| z + 0.01).collect())
            .collect();
        surface.set_z(&shifted).unwrap();
        assert_relative_eq!(surface.interpolate(3.0, 50.0), 0.19, epsilon = 1e-12);
    }

    #[test]
    fn test_mutators_leave_state_unchanged_on_error() {
        let mut surface = surface_fixture(false);
        assert!(surface.set_x(&[1.0, 2.0]).is_err());
        assert!(surface.set_y(&[10.0, 20.0]).is_err());
        assert!(surface.set_z(&[vec![0.1, 0.2]]).is_err());
        assert_eq!(surface.interpolate(1.0, 10.0), 0.17938);
    }

    // ========================================================================
    // Trait and Compatibility Tests
    // ========================================================================

    #[test]
    fn test_clone_and_debug() {
        let surface = surface_fixture(false);
        let cloned = surface.clone();
        assert_eq!(
            surface.interpolate(9.0, 33.0),
            cloned.interpolate(9.0, 33.0)
        );
        assert!(format!("{:?}", surface).contains("BicubicInterpolator"));
    }

    #[test]
    fn test_with_f32() {
        let zs: Vec<Vec<f32>> = vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 2.0, 3.0],
            vec![2.0, 3.0, 4.0],
        ];
        let surface = BicubicInterpolator::new(
            &[0.0_f32, 1.0, 2.0],
            &[0.0_f32, 1.0, 2.0],
            &zs,
            false,
        )
        .unwrap();
        assert!((surface.interpolate(0.5, 1.5) - 2.0).abs() < 1e-5);
    }
}
