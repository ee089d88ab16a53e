//! Black-76 pricing model for European options on forwards and futures.
//!
//! This module provides the Black-76 model for pricing European call
//! and put options written on a forward or futures level.
//!
//! ## Mathematical Formulas
//!
//! **Call Premium**: OP = df·(F·N(d₁) - X·N(d₂))
//! **Put Premium**: OP = df·(X·(1-N(d₂)) - F·(1-N(d₁)))
//!
//! Where:
//! - d₁ = ln(F/X)/(σ√T) + (σ√T)/2
//! - d₂ = d₁ - σ√T
//!
//! ## Unitless Inputs
//!
//! The model takes a discount factor rather than a rate, and a total
//! standard deviation (σ√T) rather than a volatility and a time. Rate,
//! day-count, and calendar conventions stay with whatever produced
//! those numbers, so there is no unit ambiguity inside the formula and
//! no time variable at all.

use num_traits::Float;
use std::fmt;
use std::str::FromStr;

use super::distributions::norm_cdf;
use super::error::AnalyticalError;

/// Side of a European option.
///
/// # Example
///
/// ```
/// use vol_models::analytical::OptionType;
///
/// let side: OptionType = " Put ".parse().unwrap();
/// assert_eq!(side, OptionType::Put);
/// assert_eq!(side.as_str(), "put");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// Right to buy at the strike
    Call,
    /// Right to sell at the strike
    Put,
}

impl OptionType {
    /// Canonical lowercase name, the same form [`FromStr`] accepts.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = AnalyticalError;

    /// Parses an option type, ignoring surrounding whitespace and case.
    ///
    /// Accepts the full names and the single-letter forms quoting
    /// systems tend to send (`"c"`, `"p"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(Self::Call),
            "put" | "p" => Ok(Self::Put),
            _ => Err(AnalyticalError::UnknownOptionType {
                input: s.to_string(),
            }),
        }
    }
}

/// Black-76 model for European options on forwards and futures.
///
/// Stores the option side together with the forward (F), strike (X),
/// total standard deviation (σ√T), and discount factor (df). Premium
/// and delta are closed-form; d1 and d2 are recomputed from the current
/// parameters on every call, so setters never leave stale state behind.
///
/// No greeks beyond delta are provided: bump conventions depend on
/// contract, calendar, and curve details that live above this formula,
/// and delta is only here because the delta-quoted surface solves
/// against it.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use vol_models::analytical::{Black76, OptionType};
///
/// let call = Black76::new(OptionType::Call, 100.0_f64, 110.0, 0.2, 0.97).unwrap();
/// let put = Black76::new(OptionType::Put, 100.0_f64, 110.0, 0.2, 0.97).unwrap();
///
/// // Put-call parity: P - C = (X - F)·df
/// let parity = put.premium() - call.premium() - (110.0 - 100.0) * 0.97;
/// assert!(parity.abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Black76<T: Float> {
    /// Call or put
    option_type: OptionType,
    /// Forward level (F)
    forward: T,
    /// Strike (X)
    strike: T,
    /// Total standard deviation over the option's life (σ√T)
    standard_deviation: T,
    /// Discount factor to settlement (df)
    discount_factor: T,
}

impl<T: Float> Black76<T> {
    /// Creates a new Black-76 pricer.
    ///
    /// # Arguments
    /// * `option_type` - Call or put
    /// * `forward` - Forward level (must be positive)
    /// * `strike` - Strike (must be positive)
    /// * `standard_deviation` - Total standard deviation σ√T (must be
    ///   positive; NaN is let through so a failed volatility lookup can
    ///   propagate to the premium)
    /// * `discount_factor` - Discount factor (must be positive; values
    ///   above 1 are accepted for negative-rate settings)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidForward` if forward <= 0
    /// - `AnalyticalError::InvalidStrike` if strike <= 0
    /// - `AnalyticalError::InvalidStandardDeviation` if σ√T <= 0
    /// - `AnalyticalError::InvalidDiscountFactor` if df <= 0
    ///
    /// # Examples
    /// ```
    /// use vol_models::analytical::{Black76, OptionType};
    ///
    /// let call = Black76::new(OptionType::Call, 100.0_f64, 100.0, 0.2, 1.0);
    /// assert!(call.is_ok());
    ///
    /// // Invalid forward
    /// assert!(Black76::new(OptionType::Call, -100.0_f64, 100.0, 0.2, 1.0).is_err());
    ///
    /// // Invalid standard deviation
    /// assert!(Black76::new(OptionType::Call, 100.0_f64, 100.0, 0.0, 1.0).is_err());
    /// ```
    pub fn new(
        option_type: OptionType,
        forward: T,
        strike: T,
        standard_deviation: T,
        discount_factor: T,
    ) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        if forward <= zero {
            return Err(AnalyticalError::InvalidForward {
                forward: forward.to_f64().unwrap_or(0.0),
            });
        }

        if strike <= zero {
            return Err(AnalyticalError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(0.0),
            });
        }

        if standard_deviation <= zero {
            return Err(AnalyticalError::InvalidStandardDeviation {
                standard_deviation: standard_deviation.to_f64().unwrap_or(0.0),
            });
        }

        if discount_factor <= zero {
            return Err(AnalyticalError::InvalidDiscountFactor {
                discount_factor: discount_factor.to_f64().unwrap_or(0.0),
            });
        }

        Ok(Self {
            option_type,
            forward,
            strike,
            standard_deviation,
            discount_factor,
        })
    }

    /// Returns the option side.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns the forward level.
    #[inline]
    pub fn forward(&self) -> T {
        self.forward
    }

    /// Returns the strike.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the total standard deviation.
    #[inline]
    pub fn standard_deviation(&self) -> T {
        self.standard_deviation
    }

    /// Returns the discount factor.
    #[inline]
    pub fn discount_factor(&self) -> T {
        self.discount_factor
    }

    /// Switches the option side.
    #[inline]
    pub fn set_option_type(&mut self, option_type: OptionType) {
        self.option_type = option_type;
    }

    /// Replaces the forward level.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidForward` if forward <= 0; the pricer
    ///   is unchanged on error
    pub fn set_forward(&mut self, forward: T) -> Result<(), AnalyticalError> {
        if forward <= T::zero() {
            return Err(AnalyticalError::InvalidForward {
                forward: forward.to_f64().unwrap_or(0.0),
            });
        }
        self.forward = forward;
        Ok(())
    }

    /// Replaces the strike.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidStrike` if strike <= 0; the pricer is
    ///   unchanged on error
    pub fn set_strike(&mut self, strike: T) -> Result<(), AnalyticalError> {
        if strike <= T::zero() {
            return Err(AnalyticalError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(0.0),
            });
        }
        self.strike = strike;
        Ok(())
    }

    /// Replaces the total standard deviation.
    ///
    /// NaN passes the non-positivity check and is stored as-is, which
    /// lets a failed volatility lookup surface as a NaN premium rather
    /// than a stale number.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidStandardDeviation` if σ√T <= 0; the
    ///   pricer is unchanged on error
    pub fn set_standard_deviation(&mut self, standard_deviation: T) -> Result<(), AnalyticalError> {
        if standard_deviation <= T::zero() {
            return Err(AnalyticalError::InvalidStandardDeviation {
                standard_deviation: standard_deviation.to_f64().unwrap_or(0.0),
            });
        }
        self.standard_deviation = standard_deviation;
        Ok(())
    }

    /// Replaces the discount factor.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidDiscountFactor` if df <= 0; the
    ///   pricer is unchanged on error
    pub fn set_discount_factor(&mut self, discount_factor: T) -> Result<(), AnalyticalError> {
        if discount_factor <= T::zero() {
            return Err(AnalyticalError::InvalidDiscountFactor {
                discount_factor: discount_factor.to_f64().unwrap_or(0.0),
            });
        }
        self.discount_factor = discount_factor;
        Ok(())
    }

    /// Computes the d1 term of the Black-76 formula.
    ///
    /// d₁ = ln(F/X)/(σ√T) + (σ√T)/2
    #[inline]
    pub fn d1(&self) -> T {
        let half = T::from(0.5).unwrap();
        (self.forward / self.strike).ln() / self.standard_deviation
            + half * self.standard_deviation
    }

    /// Computes the d2 term of the Black-76 formula.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self) -> T {
        self.d1() - self.standard_deviation
    }

    /// Computes the option premium.
    ///
    /// - Call: OP = df·(F·N(d₁) - X·N(d₂))
    /// - Put: OP = df·(X·(1-N(d₂)) - F·(1-N(d₁)))
    ///
    /// # Examples
    /// ```
    /// use vol_models::analytical::{Black76, OptionType};
    ///
    /// let call = Black76::new(OptionType::Call, 100.0_f64, 100.0, 0.2, 1.0).unwrap();
    /// assert!(call.premium() > 0.0);
    /// ```
    #[inline]
    pub fn premium(&self) -> T {
        let one = T::one();
        let n_d1 = norm_cdf(self.d1());
        let n_d2 = norm_cdf(self.d2());

        match self.option_type {
            OptionType::Call => {
                self.discount_factor * (self.forward * n_d1 - self.strike * n_d2)
            }
            OptionType::Put => {
                self.discount_factor
                    * (-self.forward * (one - n_d1) + self.strike * (one - n_d2))
            }
        }
    }

    /// Computes the discounted delta (∂OP/∂F).
    ///
    /// - Call: Δ = N(d₁)·df
    /// - Put: Δ = (N(d₁) - 1)·df
    #[inline]
    pub fn delta(&self) -> T {
        let n_d1 = norm_cdf(self.d1());

        match self.option_type {
            OptionType::Call => n_d1 * self.discount_factor,
            OptionType::Put => (n_d1 - T::one()) * self.discount_factor,
        }
    }

    /// Values the option between maturity and settlement.
    ///
    /// The optionality is gone, so the value is the intrinsic amount
    /// against the fixed settlement level, discounted from settlement:
    ///
    /// - Call: max(settlement - X, 0)·df
    /// - Put: max(X - settlement, 0)·df
    ///
    /// `discount_factor` is taken as an argument because the stored
    /// factor discounts from maturity, not from settlement.
    #[inline]
    pub fn premium_after_maturity(&self, settlement_rate: T, discount_factor: T) -> T {
        let zero = T::zero();
        let intrinsic = match self.option_type {
            OptionType::Call => settlement_rate - self.strike,
            OptionType::Put => self.strike - settlement_rate,
        };
        intrinsic.max(zero) * discount_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    // ==========================================================
    // OptionType Tests
    // ==========================================================

    #[test]
    fn test_option_type_parse() {
        assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("put".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!(" CALL ".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("Put".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!("c".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("P".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!(" C ".parse::<OptionType>().unwrap(), OptionType::Call);
    }

    #[test]
    fn test_option_type_parse_rejects_unknown() {
        let err = "straddle".parse::<OptionType>().unwrap_err();
        assert_eq!(
            err,
            AnalyticalError::UnknownOptionType {
                input: "straddle".to_string(),
            }
        );
        assert!("".parse::<OptionType>().is_err());
    }

    #[test]
    fn test_option_type_display_round_trips() {
        for side in [OptionType::Call, OptionType::Put] {
            let parsed: OptionType = side.to_string().parse().unwrap();
            assert_eq!(parsed, side);
        }
    }

    // ==========================================================
    // Constructor Tests
    // ==========================================================

    #[test]
    fn test_new_valid_parameters() {
        let call = Black76::new(OptionType::Call, 100.0_f64, 110.0, 0.2, 0.97).unwrap();
        assert_eq!(call.option_type(), OptionType::Call);
        assert_eq!(call.forward(), 100.0);
        assert_eq!(call.strike(), 110.0);
        assert_eq!(call.standard_deviation(), 0.2);
        assert_eq!(call.discount_factor(), 0.97);
    }

    #[test]
    fn test_new_invalid_forward() {
        let result = Black76::new(OptionType::Call, -100.0_f64, 110.0, 0.2, 0.97);
        match result.unwrap_err() {
            AnalyticalError::InvalidForward { forward } => {
                assert_eq!(forward, -100.0);
            }
            _ => panic!("Expected InvalidForward error"),
        }

        assert!(Black76::new(OptionType::Call, 0.0_f64, 110.0, 0.2, 0.97).is_err());
    }

    #[test]
    fn test_new_invalid_strike() {
        let result = Black76::new(OptionType::Put, 100.0_f64, 0.0, 0.2, 0.97);
        match result.unwrap_err() {
            AnalyticalError::InvalidStrike { strike } => {
                assert_eq!(strike, 0.0);
            }
            _ => panic!("Expected InvalidStrike error"),
        }
    }

    #[test]
    fn test_new_invalid_standard_deviation() {
        let result = Black76::new(OptionType::Call, 100.0_f64, 110.0, -0.2, 0.97);
        match result.unwrap_err() {
            AnalyticalError::InvalidStandardDeviation { standard_deviation } => {
                assert_eq!(standard_deviation, -0.2);
            }
            _ => panic!("Expected InvalidStandardDeviation error"),
        }
    }

    #[test]
    fn test_new_invalid_discount_factor() {
        let result = Black76::new(OptionType::Call, 100.0_f64, 110.0, 0.2, 0.0);
        match result.unwrap_err() {
            AnalyticalError::InvalidDiscountFactor { discount_factor } => {
                assert_eq!(discount_factor, 0.0);
            }
            _ => panic!("Expected InvalidDiscountFactor error"),
        }
    }

    #[test]
    fn test_new_discount_factor_above_one_allowed() {
        // Negative rates push discount factors above 1
        let call = Black76::new(OptionType::Call, 100.0_f64, 100.0, 0.2, 1.02);
        assert!(call.is_ok());
    }

    #[test]
    fn test_new_accepts_nan_standard_deviation() {
        // NaN slips through the non-positivity check and propagates
        let call = Black76::new(OptionType::Call, 100.0_f64, 100.0, f64::NAN, 1.0).unwrap();
        assert!(call.premium().is_nan());
        assert!(call.delta().is_nan());
    }

    // ==========================================================
    // d1/d2 Tests
    // ==========================================================

    #[test]
    fn test_d1_atm() {
        // ATM: ln(F/X) = 0, so d1 = σ√T/2
        let call = Black76::new(OptionType::Call, 100.0_f64, 100.0, 0.2, 1.0).unwrap();
        assert_relative_eq!(call.d1(), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_d1_d2_relationship() {
        // d2 = d1 - σ√T
        let call = Black76::new(OptionType::Call, 100.0_f64, 110.0, 0.2, 0.97).unwrap();
        assert_relative_eq!(call.d2(), call.d1() - 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_d1_is_side_independent() {
        let call = Black76::new(OptionType::Call, 100.0_f64, 110.0, 0.2, 0.97).unwrap();
        let put = Black76::new(OptionType::Put, 100.0_f64, 110.0, 0.2, 0.97).unwrap();
        assert_eq!(call.d1(), put.d1());
        assert_eq!(call.d2(), put.d2());
    }

    // ==========================================================
    // Premium Tests
    // ==========================================================

    #[test]
    fn test_premiums_positive() {
        let call = Black76::new(OptionType::Call, 100.0_f64, 110.0, 0.2, 0.97).unwrap();
        let put = Black76::new(OptionType::Put, 100.0_f64, 110.0, 0.2, 0.97).unwrap();
        assert!(call.premium() > 0.0);
        assert!(put.premium() > 0.0);
    }

    #[test]
    fn test_atm_call_reference_value() {
        // ATM with df = 1: OP = F·(2·N(σ√T/2) - 1)
        let call = Black76::new(OptionType::Call, 100.0_f64, 100.0, 0.2, 1.0).unwrap();
        let expected = 100.0 * (2.0 * 0.5398278372770290 - 1.0);
        assert_relative_eq!(call.premium(), expected, epsilon = 1e-4);
    }

    #[test]
    fn test_put_call_parity() {
        // P - C = (X - F)·df
        let forward = 100.0_f64;
        let strike = 110.0;
        let call = Black76::new(OptionType::Call, forward, strike, 0.2, 0.97).unwrap();
        let put = Black76::new(OptionType::Put, forward, strike, 0.2, 0.97).unwrap();
        let parity = put.premium() - call.premium() - (strike - forward) * 0.97;
        assert!(parity.abs() < 1e-12);
    }

    #[test]
    fn test_put_call_parity_various_strikes() {
        for strike in [50.0_f64, 80.0, 100.0, 120.0, 200.0] {
            let call = Black76::new(OptionType::Call, 100.0, strike, 0.25, 0.95).unwrap();
            let put = Black76::new(OptionType::Put, 100.0, strike, 0.25, 0.95).unwrap();
            let parity = put.premium() - call.premium() - (strike - 100.0) * 0.95;
            assert!(parity.abs() < 1e-12);
        }
    }

    #[test]
    fn test_deep_itm_call_approaches_discounted_intrinsic() {
        // With a tiny σ√T, N(d1) and N(d2) are both 1
        let call = Black76::new(OptionType::Call, 100.0_f64, 50.0, 0.01, 0.97).unwrap();
        assert_relative_eq!(call.premium(), 0.97 * 50.0, epsilon = 1e-12);
    }

    #[test]
    fn test_deep_otm_call_is_near_zero() {
        let call = Black76::new(OptionType::Call, 50.0_f64, 100.0, 0.2, 0.97).unwrap();
        assert!(call.premium() < 0.05);
        assert!(call.premium() >= 0.0);
    }

    #[test]
    fn test_call_premium_decreasing_in_strike() {
        let low = Black76::new(OptionType::Call, 100.0_f64, 90.0, 0.2, 0.97).unwrap();
        let high = Black76::new(OptionType::Call, 100.0_f64, 110.0, 0.2, 0.97).unwrap();
        assert!(low.premium() > high.premium());
    }

    #[test]
    fn test_premium_increasing_in_standard_deviation() {
        let quiet = Black76::new(OptionType::Call, 100.0_f64, 100.0, 0.1, 0.97).unwrap();
        let noisy = Black76::new(OptionType::Call, 100.0_f64, 100.0, 0.4, 0.97).unwrap();
        assert!(noisy.premium() > quiet.premium());
    }

    // ==========================================================
    // Delta Tests
    // ==========================================================

    #[test]
    fn test_delta_bounds() {
        let df = 0.97;
        for strike in [50.0_f64, 80.0, 100.0, 120.0, 200.0] {
            let call = Black76::new(OptionType::Call, 100.0, strike, 0.2, df).unwrap();
            let put = Black76::new(OptionType::Put, 100.0, strike, 0.2, df).unwrap();
            assert!(call.delta() > 0.0 && call.delta() < df);
            assert!(put.delta() > -df && put.delta() < 0.0);
        }
    }

    #[test]
    fn test_delta_call_put_relationship() {
        // Call delta - put delta = df
        let call = Black76::new(OptionType::Call, 100.0_f64, 110.0, 0.2, 0.97).unwrap();
        let put = Black76::new(OptionType::Put, 100.0_f64, 110.0, 0.2, 0.97).unwrap();
        assert_relative_eq!(call.delta() - put.delta(), 0.97, epsilon = 1e-12);
    }

    #[test]
    fn test_delta_vs_finite_diff() {
        // Delta is the forward sensitivity of the premium
        let call = Black76::new(OptionType::Call, 100.0_f64, 110.0, 0.2, 0.97).unwrap();
        let h = 0.01;
        let up = Black76::new(OptionType::Call, 100.0 + h, 110.0, 0.2, 0.97).unwrap();
        let dn = Black76::new(OptionType::Call, 100.0 - h, 110.0, 0.2, 0.97).unwrap();
        let fd_delta = (up.premium() - dn.premium()) / (2.0 * h);
        assert_relative_eq!(call.delta(), fd_delta, epsilon = 1e-4);
    }

    #[test]
    fn test_atm_deltas() {
        // ATM call delta is N(σ√T/2)·df, a touch above df/2
        let call = Black76::new(OptionType::Call, 100.0_f64, 100.0, 0.2, 1.0).unwrap();
        assert_relative_eq!(call.delta(), 0.5398278372770290, epsilon = 1e-6);

        let put = Black76::new(OptionType::Put, 100.0_f64, 100.0, 0.2, 1.0).unwrap();
        assert_relative_eq!(put.delta(), 0.5398278372770290 - 1.0, epsilon = 1e-6);
    }

    // ==========================================================
    // After-Maturity Tests
    // ==========================================================

    #[test]
    fn test_premium_after_maturity_call() {
        let call = Black76::new(OptionType::Call, 100.0_f64, 110.0, 0.2, 0.97).unwrap();
        assert_relative_eq!(
            call.premium_after_maturity(120.0, 0.95),
            (120.0 - 110.0) * 0.95,
            epsilon = 1e-12
        );
        assert_eq!(call.premium_after_maturity(100.0, 0.95), 0.0);
    }

    #[test]
    fn test_premium_after_maturity_put() {
        let put = Black76::new(OptionType::Put, 100.0_f64, 110.0, 0.2, 0.97).unwrap();
        assert_relative_eq!(
            put.premium_after_maturity(100.0, 0.95),
            (110.0 - 100.0) * 0.95,
            epsilon = 1e-12
        );
        assert_eq!(put.premium_after_maturity(120.0, 0.95), 0.0);
    }

    // ==========================================================
    // Setter Tests
    // ==========================================================

    #[test]
    fn test_setters_update_pricing() {
        let mut call = Black76::new(OptionType::Call, 100.0_f64, 110.0, 0.2, 0.97).unwrap();
        let reference = call.premium();

        call.set_forward(105.0).unwrap();
        assert!(call.premium() > reference);

        call.set_forward(100.0).unwrap();
        call.set_standard_deviation(0.4).unwrap();
        assert!(call.premium() > reference);
    }

    #[test]
    fn test_setters_reject_invalid_and_keep_state() {
        let mut call = Black76::new(OptionType::Call, 100.0_f64, 110.0, 0.2, 0.97).unwrap();
        let reference = call.premium();

        assert!(call.set_forward(-1.0).is_err());
        assert!(call.set_strike(0.0).is_err());
        assert!(call.set_standard_deviation(-0.2).is_err());
        assert!(call.set_discount_factor(0.0).is_err());
        assert_eq!(call.premium(), reference);
    }

    #[test]
    fn test_set_standard_deviation_accepts_nan() {
        let mut call = Black76::new(OptionType::Call, 100.0_f64, 110.0, 0.2, 0.97).unwrap();
        assert!(call.set_standard_deviation(f64::NAN).is_ok());
        assert!(call.premium().is_nan());
        assert!(call.delta().is_nan());
    }

    #[test]
    fn test_set_option_type_flips_side() {
        let mut pricer = Black76::new(OptionType::Call, 100.0_f64, 110.0, 0.2, 0.97).unwrap();
        let call_premium = pricer.premium();

        pricer.set_option_type(OptionType::Put);
        let put_premium = pricer.premium();

        // P - C = (X - F)·df
        let parity = put_premium - call_premium - (110.0 - 100.0) * 0.97;
        assert!(parity.abs() < 1e-12);
    }

    // ==========================================================
    // Clone, Debug, and f32 Tests
    // ==========================================================

    #[test]
    fn test_clone_and_debug() {
        let call = Black76::new(OptionType::Call, 100.0_f64, 110.0, 0.2, 0.97).unwrap();
        let cloned = call.clone();
        assert_eq!(call.premium(), cloned.premium());

        let debug_str = format!("{:?}", call);
        assert!(debug_str.contains("Black76"));
        assert!(debug_str.contains("forward"));
    }

    #[test]
    fn test_f32_compatibility() {
        let call = Black76::new(OptionType::Call, 100.0_f32, 110.0, 0.2, 0.97).unwrap();
        assert!(call.premium() > 0.0_f32);
        assert!(call.delta() > 0.0_f32 && call.delta() < 1.0_f32);
    }

    // ==========================================================
    // Property Tests
    // ==========================================================

    proptest! {
        #[test]
        fn prop_put_call_parity(
            forward in 1.0f64..200.0,
            strike in 1.0f64..200.0,
            standard_deviation in 0.01f64..1.5,
            discount_factor in 0.3f64..1.1,
        ) {
            let call = Black76::new(
                OptionType::Call, forward, strike, standard_deviation, discount_factor,
            ).unwrap();
            let put = Black76::new(
                OptionType::Put, forward, strike, standard_deviation, discount_factor,
            ).unwrap();

            let parity = put.premium() - call.premium()
                - (strike - forward) * discount_factor;
            prop_assert!(parity.abs() <= 1e-9 * (1.0 + forward.max(strike)));
        }

        #[test]
        fn prop_delta_bounds(
            forward in 1.0f64..200.0,
            strike in 1.0f64..200.0,
            standard_deviation in 0.01f64..1.5,
            discount_factor in 0.3f64..1.1,
        ) {
            let call = Black76::new(
                OptionType::Call, forward, strike, standard_deviation, discount_factor,
            ).unwrap();
            let put = Black76::new(
                OptionType::Put, forward, strike, standard_deviation, discount_factor,
            ).unwrap();

            // Deep in or out of the money, N(d1) saturates exactly
            prop_assert!(call.delta() >= 0.0 && call.delta() <= discount_factor);
            prop_assert!(put.delta() >= -discount_factor && put.delta() <= 0.0);
            prop_assert!((call.delta() - put.delta() - discount_factor).abs() <= 1e-9);
        }

        #[test]
        fn prop_premiums_are_nonnegative(
            forward in 1.0f64..200.0,
            strike in 1.0f64..200.0,
            standard_deviation in 0.01f64..1.5,
            discount_factor in 0.3f64..1.1,
        ) {
            for option_type in [OptionType::Call, OptionType::Put] {
                let pricer = Black76::new(
                    option_type, forward, strike, standard_deviation, discount_factor,
                ).unwrap();
                // The CDF polynomial is good to ~1.5e-7, so a premium
                // that should be 0 can land a hair below it
                prop_assert!(pricer.premium() >= -1e-4);
            }
        }
    }
}
