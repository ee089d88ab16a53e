//! Delta-quoted volatility surfaces.
//!
//! FX-style vol grids are quoted against put delta rather than strike,
//! and the quotes arrive in several informal conventions. Construction
//! normalises them once:
//!
//! - deltas quoted as fractions (first value below 1) are rescaled to
//!   percent points
//! - a grid starting after time 0 gets a flat copy of its first row at
//!   time 0, so short-dated lookups stay inside the grid
//! - vols quoted in percent (first value above 2) are rescaled to
//!   decimals
//!
//! Lookups keyed by strike or moneyness cannot read the grid directly:
//! the delta a strike maps to depends on the vol, which depends on the
//! delta. [`DeltaVolatilitySurface::delta_from_strike`] runs that
//! fixed point (strike -> delta -> vol -> delta) and reports how it
//! ended instead of pretending it always settles.

use num_traits::Float;

use vol_core::math::interpolators::{
    InterpolationMethod2D, Interpolator2D, Interpolator2DEnum,
};
use vol_core::types::InterpolationError;

use crate::analytical::{Black76, OptionType};

use super::error::SurfaceError;

/// Deltas quoted below this are fractions and get rescaled to percent
/// points.
const DELTA_POINTS_THRESHOLD: f64 = 1.0;

/// Vols quoted above this are percentages and get rescaled to
/// decimals.
const PERCENT_VOL_THRESHOLD: f64 = 2.0;

/// Absolute delta tolerance (in percent points) for the fixed-point
/// solver.
const DELTA_SOLVER_TOLERANCE: f64 = 1.0e-8;

/// Iteration budget for the fixed-point solver.
const DELTA_SOLVER_MAX_ITERATIONS: usize = 20;

/// Outcome of the strike-to-delta fixed-point solve.
///
/// `delta` is the last iterate in percent points. `converged` reports
/// whether successive iterates settled within the solver tolerance
/// inside the iteration budget; a `false` value means `delta` is the
/// best available guess, not a solution.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeltaEstimate<T: Float> {
    /// Put delta in percent points (50 is at-the-money-ish)
    pub delta: T,
    /// Iterations actually run
    pub iterations: usize,
    /// Whether the iteration settled within tolerance
    pub converged: bool,
}

/// Volatility surface quoted in put delta and observation time.
///
/// Stores the normalised quote grid next to the interpolator built
/// from it, so callers can inspect what the normalisation did. Direct
/// delta lookups interpolate the grid; strike and moneyness lookups go
/// through the fixed-point solver first.
///
/// Out-of-range lookups answer with a quiet NaN, matching the
/// interpolator contract in `vol_core`. Errors are reserved for
/// construction problems and for solver setups that are invalid before
/// any iteration runs (a non-positive strike, for instance).
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use vol_core::math::interpolators::InterpolationMethod2D;
/// use vol_models::surfaces::DeltaVolatilitySurface;
///
/// let times = [0.25, 0.5, 1.0];
/// let deltas = [25.0, 50.0, 75.0];
/// let vols = vec![
///     vec![0.18, 0.175, 0.19],
///     vec![0.205, 0.20, 0.21],
///     vec![0.235, 0.23, 0.24],
/// ];
///
/// let surface = DeltaVolatilitySurface::new(
///     &times,
///     &deltas,
///     &vols,
///     false,
///     InterpolationMethod2D::Bilinear,
/// )
/// .unwrap();
///
/// assert_eq!(surface.volatility_for_delta(0.5, 50.0), 0.20);
/// ```
#[derive(Debug, Clone)]
pub struct DeltaVolatilitySurface<T: Float> {
    /// Observation times after normalisation (always starts at 0)
    times: Vec<T>,
    /// Delta points after normalisation (percent points)
    deltas: Vec<T>,
    /// Vol grid after normalisation, one row per time
    volatilities: Vec<Vec<T>>,
    /// Interpolator over (time, delta)
    interpolator: Interpolator2DEnum<T>,
    /// Whether lookups may leave the quoted grid
    allow_extrapolation: bool,
}

impl<T: Float> DeltaVolatilitySurface<T> {
    /// Builds a surface from quoted times, put deltas, and vols.
    ///
    /// `volatilities` holds one row per observation time, one column
    /// per delta point. Inputs are normalised as described in the
    /// module docs before the interpolator selected by `method` is
    /// built over them.
    ///
    /// # Errors
    /// - [`SurfaceError::Construction`] if any axis is empty or the
    ///   normalised grid fails the interpolator's validation
    ///
    /// # Examples
    /// ```
    /// use vol_core::math::interpolators::InterpolationMethod2D;
    /// use vol_models::surfaces::DeltaVolatilitySurface;
    ///
    /// // Fractional deltas and percent vols are normalised on entry
    /// let surface = DeltaVolatilitySurface::new(
    ///     &[0.5, 1.0],
    ///     &[0.25, 0.75],
    ///     &[vec![20.5, 21.0], vec![23.5, 24.0]],
    ///     false,
    ///     InterpolationMethod2D::Bilinear,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(surface.deltas(), &[25.0, 75.0]);
    /// assert_eq!(surface.volatility_for_delta(1.0, 25.0), 0.235);
    /// ```
    pub fn new(
        times: &[T],
        deltas: &[T],
        volatilities: &[Vec<T>],
        allow_extrapolation: bool,
        method: InterpolationMethod2D,
    ) -> Result<Self, SurfaceError> {
        if times.is_empty() {
            return Err(InterpolationError::InsufficientData {
                axis: "time".into(),
                got: 0,
                need: 2,
            }
            .into());
        }
        if deltas.is_empty() {
            return Err(InterpolationError::InsufficientData {
                axis: "delta".into(),
                got: 0,
                need: 2,
            }
            .into());
        }
        if volatilities.is_empty() {
            return Err(InterpolationError::RowCountMismatch {
                expected: times.len(),
                got: 0,
            }
            .into());
        }
        if volatilities[0].is_empty() {
            return Err(InterpolationError::RowLengthMismatch {
                row: 0,
                expected: deltas.len(),
                got: 0,
            }
            .into());
        }

        let mut times = times.to_vec();
        let mut deltas = deltas.to_vec();
        let mut volatilities = volatilities.to_vec();

        let hundred = T::from(100.0).unwrap();

        // Deltas quoted as fractions become percent points
        if deltas[0] < T::from(DELTA_POINTS_THRESHOLD).unwrap() {
            for delta in deltas.iter_mut() {
                *delta = *delta * hundred;
            }
        }

        // A flat copy of the first row anchors short-dated lookups
        if times[0] > T::zero() {
            times.insert(0, T::zero());
            volatilities.insert(0, volatilities[0].clone());
        }

        // Vols quoted in percent become decimals
        if volatilities[0][0] > T::from(PERCENT_VOL_THRESHOLD).unwrap() {
            for row in volatilities.iter_mut() {
                for vol in row.iter_mut() {
                    *vol = *vol / hundred;
                }
            }
        }

        let interpolator = Interpolator2DEnum::new(
            method,
            &times,
            &deltas,
            &volatilities,
            allow_extrapolation,
        )?;

        Ok(Self {
            times,
            deltas,
            volatilities,
            interpolator,
            allow_extrapolation,
        })
    }

    /// Returns the normalised observation times.
    #[inline]
    pub fn times(&self) -> &[T] {
        &self.times
    }

    /// Returns the normalised delta points in percent points.
    #[inline]
    pub fn deltas(&self) -> &[T] {
        &self.deltas
    }

    /// Returns the normalised vol grid, one row per observation time.
    #[inline]
    pub fn volatilities(&self) -> &[Vec<T>] {
        &self.volatilities
    }

    /// Returns whether lookups may leave the quoted grid.
    #[inline]
    pub fn allows_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    /// Returns the interpolation method the surface was built with.
    #[inline]
    pub fn interpolation_method(&self) -> InterpolationMethod2D {
        self.interpolator.kind()
    }

    /// Returns true if `(time, delta)` can be answered.
    ///
    /// Always true when the surface extrapolates.
    #[inline]
    pub fn is_in_delta_range(&self, time: T, delta: T) -> bool {
        self.interpolator.is_in_range(time, delta)
    }

    /// Returns true if a moneyness lookup at `time` can be answered.
    ///
    /// Always true when the surface extrapolates. Otherwise the
    /// fixed-point solver is run and the lookup counts as answerable
    /// only if it produced a usable delta: a solve that never saw the
    /// grid reports a zero delta, which this rejects.
    pub fn is_in_moneyness_range(&self, time: T, moneyness: T) -> bool {
        if self.allow_extrapolation {
            return true;
        }
        let forward = T::one();
        let strike = moneyness + forward;
        let estimate = match self.delta_from_strike(forward, strike, time) {
            Ok(estimate) => estimate,
            Err(_) => return false,
        };
        estimate.delta.abs() >= T::from(DELTA_SOLVER_TOLERANCE).unwrap()
    }

    /// Reads the surface at a (time, delta) point.
    ///
    /// Answers with a quiet NaN outside the quoted grid unless the
    /// surface extrapolates.
    #[inline]
    pub fn volatility_for_delta(&self, time: T, delta: T) -> T {
        self.interpolator.interpolate(time, delta)
    }

    /// Reads the surface at a (time, moneyness) point.
    ///
    /// Moneyness is relative to a unit forward: a strike 10% below the
    /// forward is `-0.1`. The fixed-point solver maps the implied
    /// strike to a delta first, then the grid is read there. Times at
    /// or before 0 answer 0 without running the solver.
    ///
    /// # Errors
    /// - [`SurfaceError::Pricer`] if the implied strike cannot price
    ///   (at or below -100% moneyness)
    pub fn volatility_for_moneyness(&self, time: T, moneyness: T) -> Result<T, SurfaceError> {
        if time <= T::zero() {
            return Ok(T::zero());
        }
        let forward = T::one();
        let strike = moneyness + forward;
        let estimate = self.delta_from_strike(forward, strike, time)?;
        Ok(self.volatility_for_delta(time, estimate.delta))
    }

    /// Reads the at-the-money volatility for `time`.
    ///
    /// Solves for the delta of the strike pinned at the forward, then
    /// reads the grid there.
    ///
    /// # Errors
    /// - [`SurfaceError::Pricer`] if the solver cannot set up its
    ///   pricer
    pub fn volatility(&self, time: T) -> Result<T, SurfaceError> {
        let one = T::one();
        let estimate = self.delta_from_strike(one, one, time)?;
        Ok(self.volatility_for_delta(time, estimate.delta))
    }

    /// Solves for the put delta the surface implies at a strike.
    ///
    /// Starting from a 50-delta guess, each round reads the vol at the
    /// current delta guess (keeping the previous vol when the guess
    /// falls off the grid), reprices the put, and takes its delta as
    /// the next guess. The iteration stops once successive guesses
    /// agree to within the solver tolerance or the budget runs out,
    /// and [`DeltaEstimate::converged`] records which.
    ///
    /// A solve that never finds a usable vol (an out-of-range time on
    /// a non-extrapolating surface leaves the vol at zero, which no
    /// pricer accepts) reports a zero delta with `converged` false
    /// rather than failing.
    ///
    /// # Errors
    /// - [`SurfaceError::Pricer`] if `forward` or `strike` cannot
    ///   price at all
    pub fn delta_from_strike(
        &self,
        forward: T,
        strike: T,
        time: T,
    ) -> Result<DeltaEstimate<T>, SurfaceError> {
        let accuracy = T::from(DELTA_SOLVER_TOLERANCE).unwrap();
        let hundred = T::from(100.0).unwrap();
        let sqrt_time = time.sqrt();

        let mut guess2 = T::from(50.0).unwrap();
        let mut vol1 = T::zero();
        let mut diff = accuracy + T::one();
        let mut iterations = 0;

        let mut put = Black76::new(
            OptionType::Put,
            forward,
            strike,
            T::from(0.2).unwrap(),
            T::one(),
        )?;

        while iterations < DELTA_SOLVER_MAX_ITERATIONS && diff > accuracy {
            let guess1 = guess2;
            if self.interpolator.is_in_range(time, guess1) {
                vol1 = self.interpolator.interpolate(time, guess1);
            }
            let standard_deviation = vol1 * sqrt_time;
            if put.set_standard_deviation(standard_deviation).is_err() {
                return Ok(DeltaEstimate {
                    delta: T::zero(),
                    iterations,
                    converged: false,
                });
            }
            guess2 = -put.delta() * hundred;
            diff = (guess1 - guess2).abs();
            iterations += 1;
        }

        Ok(DeltaEstimate {
            delta: guess2,
            iterations,
            converged: diff <= accuracy,
        })
    }
}
