//! Standard normal distribution functions.
//!
//! This module provides the cumulative distribution function behind the
//! Black-76 premium and delta formulas, generic over `T: Float`.

use num_traits::Float;

/// Complementary error function approximation using Horner's method.
///
/// Abramowitz and Stegun formula 7.1.26, with maximum absolute error
/// 1.5e-7 over the whole real line. That is more headroom than option
/// deltas quoted to a basis point need.
///
/// # Mathematical Definition
/// erfc(x) = 1 - erf(x) = (2/√π) ∫_x^∞ e^(-t²) dt
#[inline]
fn erfc_approx<T: Float>(x: T) -> T {
    let one = T::one();
    let two = T::from(2.0).unwrap();

    // Abramowitz and Stegun constants (7.1.26)
    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    let abs_x = x.abs();
    let t = one / (one + p * abs_x);
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));
    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    // erfc(-x) = 2 - erfc(x)
    if x < T::zero() {
        two - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) for X ~ N(0, 1) via the complementary error
/// function: Φ(x) = erfc(-x/√2) / 2.
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The probability P(X <= x), in the range [0, 1].
///
/// # Accuracy
/// Accurate to at least 1e-7 for all finite x.
///
/// # Examples
/// ```
/// use vol_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let sqrt_2 = T::from(std::f64::consts::SQRT_2).unwrap();
    let half = T::from(0.5).unwrap();

    half * erfc_approx(-x / sqrt_2)
}
