//! Strict-monotonicity predicates.
//!
//! Every interpolator in this crate requires strictly increasing
//! coordinates; these predicates are the shared validation primitives.
//! They are generic over `PartialOrd` so they apply to integer index
//! sequences as well as floating-point data. A sequence containing NaN
//! is never strictly monotonic, since NaN orders with nothing.

/// Returns true if `values` is strictly increasing.
///
/// An empty sequence is not considered increasing; a single element is.
///
/// # Examples
/// ```
/// use vol_core::math::monotonic::is_strictly_increasing;
///
/// assert!(is_strictly_increasing(&[1.0, 2.0, 3.0]));
/// assert!(!is_strictly_increasing(&[1.0, 2.0, 2.0]));
/// assert!(!is_strictly_increasing::<f64>(&[]));
/// ```
#[inline]
pub fn is_strictly_increasing<T: PartialOrd>(values: &[T]) -> bool {
    if values.is_empty() {
        return false;
    }
    values.windows(2).all(|pair| pair[0] < pair[1])
}

/// Returns true if `values` is strictly decreasing.
///
/// An empty sequence is not considered decreasing; a single element is.
///
/// # Examples
/// ```
/// use vol_core::math::monotonic::is_strictly_decreasing;
///
/// assert!(is_strictly_decreasing(&[3, 2, 1]));
/// assert!(!is_strictly_decreasing(&[3, 3, 1]));
/// ```
#[inline]
pub fn is_strictly_decreasing<T: PartialOrd>(values: &[T]) -> bool {
    if values.is_empty() {
        return false;
    }
    values.windows(2).all(|pair| pair[0] > pair[1])
}

/// Returns true if `values` is strictly increasing or strictly
/// decreasing.
///
/// The direction is decided by the first two elements, so sequences
/// shorter than two elements are not considered monotonic, and a
/// repeated leading element fails immediately.
///
/// # Examples
/// ```
/// use vol_core::math::monotonic::is_strictly_monotonic;
///
/// assert!(is_strictly_monotonic(&[1.0, 2.0, 3.0]));
/// assert!(is_strictly_monotonic(&[3.0, 2.0, 1.0]));
/// assert!(!is_strictly_monotonic(&[1.0]));
/// assert!(!is_strictly_monotonic(&[2.0, 2.0, 3.0]));
/// ```
#[inline]
pub fn is_strictly_monotonic<T: PartialOrd>(values: &[T]) -> bool {
    if values.len() <= 1 {
        return false;
    }
    if values[0] < values[1] {
        is_strictly_increasing(values)
    } else if values[0] > values[1] {
        is_strictly_decreasing(values)
    } else {
        false
    }
}
