//! Two-point line interpolation.

use num_traits::Float;

use crate::types::error::InterpolationError;

/// The straight line through two points.
///
/// This is the building block the piecewise-linear array interpolator
/// uses for each bracketing pair, exposed on its own because callers
/// sometimes want the raw line fit (it always extrapolates). The points
/// may be supplied in either x order; only coincident x coordinates are
/// rejected.
///
/// # Examples
/// ```
/// use vol_core::math::interpolators::TwoPointInterpolator;
///
/// let line = TwoPointInterpolator::new(1.0, 1.0, 10.0, 10.0).unwrap();
/// assert_eq!(line.interpolate(2.0), 2.0);
/// assert_eq!(line.interpolate(15.5), 15.5);
/// assert!(!line.extrapolates(5.0));
/// assert!(line.extrapolates(-1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoPointInterpolator<T: Float> {
    x1: T,
    y1: T,
    x2: T,
    y2: T,
}

impl<T: Float> TwoPointInterpolator<T> {
    /// Creates the line through `(x1, y1)` and `(x2, y2)`.
    ///
    /// # Errors
    /// Returns [`InterpolationError::CoincidentPoints`] if `x1 == x2`
    /// (the line would be vertical).
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Result<Self, InterpolationError> {
        if x1 == x2 {
            return Err(InterpolationError::CoincidentPoints {
                x: x1.to_f64().unwrap_or(0.0),
            });
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    /// First x coordinate.
    #[inline]
    pub fn x1(&self) -> T {
        self.x1
    }

    /// First y coordinate.
    #[inline]
    pub fn y1(&self) -> T {
        self.y1
    }

    /// Second x coordinate.
    #[inline]
    pub fn x2(&self) -> T {
        self.x2
    }

    /// Second y coordinate.
    #[inline]
    pub fn y2(&self) -> T {
        self.y2
    }

    /// Evaluates the line at `x`, extrapolating freely outside the
    /// points.
    #[inline]
    pub fn interpolate(&self, x: T) -> T {
        let slope = (self.y2 - self.y1) / (self.x2 - self.x1);
        let intercept = self.y1 - slope * self.x1;
        slope * x + intercept
    }

    /// True when `x` lies strictly outside the interval spanned by the
    /// two x coordinates (endpoints count as interior).
    #[inline]
    pub fn extrapolates(&self, x: T) -> bool {
        let (min, max) = if self.x1 <= self.x2 {
            (self.x1, self.x2)
        } else {
            (self.x2, self.x1)
        };
        x < min || x > max
    }
}
