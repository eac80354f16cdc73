//! Flat-yield discounted cash-flow analytics.
//!
//! All functions operate on the same level-coupon schedule: `n =
//! round(maturity * frequency)` periods, a coupon of `face_value *
//! coupon_rate / frequency` per period, and the redemption paid with
//! the final coupon. Discounting is nominal at the periodic yield
//! `y = ytm / frequency`. Closed-form summation only, no root finding.

use crate::error::BondError;

/// Validated schedule parameters shared by all analytics.
struct Schedule {
    /// Number of coupon periods
    periods: u32,
    /// Coupon payment per period
    coupon: f64,
    /// Periodic yield `ytm / frequency`
    periodic_yield: f64,
}

impl Schedule {
    fn build(
        face_value: f64,
        maturity: f64,
        coupon_rate: f64,
        ytm: f64,
        frequency: u32,
    ) -> Result<Self, BondError> {
        if !(face_value > 0.0 && face_value.is_finite()) {
            return Err(BondError::InvalidFaceValue { face_value });
        }

        if !(maturity > 0.0 && maturity.is_finite()) {
            return Err(BondError::InvalidMaturity { maturity });
        }

        if frequency < 1 {
            return Err(BondError::InvalidFrequency { frequency });
        }

        let periods = (maturity * frequency as f64).round() as u32;
        if periods < 1 {
            return Err(BondError::EmptySchedule {
                maturity,
                frequency,
            });
        }

        let periodic_yield = ytm / frequency as f64;
        if (1.0 + periodic_yield).abs() < 1e-12 {
            return Err(BondError::DegenerateYield { ytm });
        }

        Ok(Self {
            periods,
            coupon: face_value * coupon_rate / frequency as f64,
            periodic_yield,
        })
    }

    /// Cash flow at period `t` (1-based); the last period adds the
    /// redemption.
    #[inline]
    fn cash_flow(&self, t: u32, face_value: f64) -> f64 {
        if t == self.periods {
            self.coupon + face_value
        } else {
            self.coupon
        }
    }

    /// Discount factor `(1 + y)^(-t)`.
    #[inline]
    fn discount(&self, t: u32) -> f64 {
        (1.0 + self.periodic_yield).powi(-(t as i32))
    }
}

/// Price of a plain-vanilla fixed-coupon bond.
///
/// Present value of the level coupons plus the redemption, discounted
/// at a flat nominal yield compounded `frequency` times per year. The
/// result is in the same unit as `face_value`; there is no accrued
/// interest, so this is the full schedule price.
///
/// # Errors
/// - `BondError::InvalidFaceValue` if `face_value <= 0` or non-finite
/// - `BondError::InvalidMaturity` if `maturity <= 0` or non-finite
/// - `BondError::InvalidFrequency` if `frequency < 1`
/// - `BondError::EmptySchedule` if `round(maturity * frequency) < 1`
/// - `BondError::DegenerateYield` if `1 + ytm/frequency` is zero
///
/// # Examples
/// ```
/// use quant_bonds::bond_price;
///
/// // A par bond prices at face
/// let price = bond_price(100.0, 10.0, 0.05, 0.05, 2).unwrap();
/// assert!((price - 100.0).abs() < 1e-9);
/// ```
pub fn bond_price(
    face_value: f64,
    maturity: f64,
    coupon_rate: f64,
    ytm: f64,
    frequency: u32,
) -> Result<f64, BondError> {
    let schedule = Schedule::build(face_value, maturity, coupon_rate, ytm, frequency)?;

    let mut price = 0.0;
    for t in 1..=schedule.periods {
        price += schedule.cash_flow(t, face_value) * schedule.discount(t);
    }
    Ok(price)
}

/// Macaulay duration in years.
///
/// Present-value weighted average time to the bond's cash flows, with
/// period indices converted back to years by `t / frequency`.
pub fn macaulay_duration(
    face_value: f64,
    maturity: f64,
    coupon_rate: f64,
    ytm: f64,
    frequency: u32,
) -> Result<f64, BondError> {
    let schedule = Schedule::build(face_value, maturity, coupon_rate, ytm, frequency)?;

    let mut price = 0.0;
    let mut weighted_time = 0.0;
    for t in 1..=schedule.periods {
        let pv = schedule.cash_flow(t, face_value) * schedule.discount(t);
        price += pv;
        weighted_time += (t as f64 / frequency as f64) * pv;
    }
    Ok(weighted_time / price)
}

/// Modified duration, annualized.
///
/// `D_mod = D_mac / (1 + ytm/frequency)`; first-order proportional
/// price sensitivity, `ΔP/P ≈ -D_mod · Δy` for small yield moves.
pub fn modified_duration(
    face_value: f64,
    maturity: f64,
    coupon_rate: f64,
    ytm: f64,
    frequency: u32,
) -> Result<f64, BondError> {
    let macaulay = macaulay_duration(face_value, maturity, coupon_rate, ytm, frequency)?;
    Ok(macaulay / (1.0 + ytm / frequency as f64))
}

/// Dollar duration, `-dP/dy`.
///
/// Price change per unit yield move; equals modified duration scaled by
/// the price, positive for plain bonds.
pub fn dollar_duration(
    face_value: f64,
    maturity: f64,
    coupon_rate: f64,
    ytm: f64,
    frequency: u32,
) -> Result<f64, BondError> {
    let price = bond_price(face_value, maturity, coupon_rate, ytm, frequency)?;
    let modified = modified_duration(face_value, maturity, coupon_rate, ytm, frequency)?;
    Ok(price * modified)
}

/// Convexity, annualized.
///
/// Discrete-time second-order yield sensitivity,
///
/// ```text
/// Convexity = Σ CF_t · t·(t+1) / (1+y)^(t+2) / (P · frequency²)
/// ```
///
/// completing the Taylor approximation
/// `P(y+Δy) ≈ P - D_mod·P·Δy + ½·Convexity·P·Δy²`.
pub fn convexity(
    face_value: f64,
    maturity: f64,
    coupon_rate: f64,
    ytm: f64,
    frequency: u32,
) -> Result<f64, BondError> {
    let schedule = Schedule::build(face_value, maturity, coupon_rate, ytm, frequency)?;

    let base = 1.0 + schedule.periodic_yield;
    let mut price = 0.0;
    let mut weighted = 0.0;
    for t in 1..=schedule.periods {
        let cf = schedule.cash_flow(t, face_value);
        price += cf * schedule.discount(t);
        weighted += cf * (t as f64) * (t as f64 + 1.0) / base.powi(t as i32 + 2);
    }

    let frequency = frequency as f64;
    Ok(weighted / (price * frequency * frequency))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    // ==========================================================
    // Validation Tests
    // ==========================================================

    #[test]
    fn test_rejects_invalid_face_value() {
        for face in [-100.0, 0.0, f64::NAN] {
            assert!(matches!(
                bond_price(face, 10.0, 0.05, 0.05, 2),
                Err(BondError::InvalidFaceValue { .. })
            ));
        }
    }

    #[test]
    fn test_rejects_invalid_maturity() {
        assert!(matches!(
            bond_price(100.0, 0.0, 0.05, 0.05, 2),
            Err(BondError::InvalidMaturity { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_frequency() {
        assert!(matches!(
            bond_price(100.0, 10.0, 0.05, 0.05, 0),
            Err(BondError::InvalidFrequency { frequency: 0 })
        ));
    }

    #[test]
    fn test_rejects_empty_schedule() {
        // 0.2 years at annual frequency rounds to zero periods
        assert!(matches!(
            bond_price(100.0, 0.2, 0.05, 0.05, 1),
            Err(BondError::EmptySchedule { .. })
        ));
    }

    #[test]
    fn test_rejects_degenerate_yield() {
        // ytm = -frequency makes 1 + y = 0
        assert!(matches!(
            bond_price(100.0, 10.0, 0.05, -2.0, 2),
            Err(BondError::DegenerateYield { .. })
        ));
    }

    // ==========================================================
    // Pricing Tests
    // ==========================================================

    #[test]
    fn test_par_bond_prices_at_face() {
        for frequency in [1, 2, 4] {
            let price = bond_price(1000.0, 10.0, 0.06, 0.06, frequency).unwrap();
            assert_relative_eq!(price, 1000.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_zero_coupon_bond_is_pure_discount() {
        // No coupons: P = F / (1+y)^n
        let price = bond_price(100.0, 5.0, 0.0, 0.04, 1).unwrap();
        assert_relative_eq!(price, 100.0 / 1.04_f64.powi(5), epsilon = 1e-12);
    }

    #[test]
    fn test_discount_and_premium_bonds() {
        // Coupon below yield prices below par, above yield above par
        let discount = bond_price(100.0, 10.0, 0.04, 0.06, 2).unwrap();
        let premium = bond_price(100.0, 10.0, 0.08, 0.06, 2).unwrap();
        assert!(discount < 100.0);
        assert!(premium > 100.0);
    }

    #[test]
    fn test_single_period_hand_check() {
        // One annual period: P = (coupon + face) / (1 + y)
        let price = bond_price(100.0, 1.0, 0.05, 0.03, 1).unwrap();
        assert_relative_eq!(price, 105.0 / 1.03, epsilon = 1e-12);
    }

    // ==========================================================
    // Duration Tests
    // ==========================================================

    #[test]
    fn test_zero_coupon_macaulay_equals_maturity() {
        let duration = macaulay_duration(100.0, 7.0, 0.0, 0.05, 1).unwrap();
        assert_relative_eq!(duration, 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_coupon_bond_duration_below_maturity() {
        let duration = macaulay_duration(100.0, 10.0, 0.06, 0.05, 2).unwrap();
        assert!(duration > 0.0);
        assert!(duration < 10.0);
    }

    #[test]
    fn test_modified_below_macaulay_for_positive_yield() {
        let macaulay = macaulay_duration(100.0, 10.0, 0.05, 0.06, 2).unwrap();
        let modified = modified_duration(100.0, 10.0, 0.05, 0.06, 2).unwrap();
        assert_relative_eq!(modified, macaulay / 1.03, epsilon = 1e-12);
        assert!(modified < macaulay);
    }

    #[test]
    fn test_dollar_duration_matches_finite_difference() {
        // -dP/dy ≈ (P(y-h) - P(y+h)) / 2h
        let (face, maturity, coupon, ytm, frequency) = (100.0, 10.0, 0.05, 0.06, 2);
        let dollar = dollar_duration(face, maturity, coupon, ytm, frequency).unwrap();

        let h = 1e-6;
        let up = bond_price(face, maturity, coupon, ytm + h, frequency).unwrap();
        let down = bond_price(face, maturity, coupon, ytm - h, frequency).unwrap();
        let fd = (down - up) / (2.0 * h);
        assert_relative_eq!(dollar, fd, epsilon = 1e-4);
    }

    // ==========================================================
    // Convexity Tests
    // ==========================================================

    #[test]
    fn test_convexity_positive_for_plain_bond() {
        let cx = convexity(100.0, 10.0, 0.05, 0.06, 2).unwrap();
        assert!(cx > 0.0);
    }

    #[test]
    fn test_taylor_expansion_improves_with_convexity() {
        let (face, maturity, coupon, ytm, frequency) = (100.0, 10.0, 0.05, 0.06, 2);
        let price = bond_price(face, maturity, coupon, ytm, frequency).unwrap();
        let modified = modified_duration(face, maturity, coupon, ytm, frequency).unwrap();
        let cx = convexity(face, maturity, coupon, ytm, frequency).unwrap();

        let dy = 0.01;
        let actual = bond_price(face, maturity, coupon, ytm + dy, frequency).unwrap();
        let first_order = price * (1.0 - modified * dy);
        let second_order = first_order + 0.5 * cx * price * dy * dy;

        assert!((actual - second_order).abs() < (actual - first_order).abs());
        assert_abs_diff_eq!(actual, second_order, epsilon = 0.05);
    }

    // ==========================================================
    // Property Tests
    // ==========================================================

    proptest::proptest! {
        #[test]
        fn prop_price_decreases_in_yield(
            maturity in 1.0_f64..30.0,
            coupon in 0.0_f64..0.12,
            ytm in 0.005_f64..0.15,
        ) {
            let lower_yield = bond_price(100.0, maturity, coupon, ytm, 2).unwrap();
            let higher_yield = bond_price(100.0, maturity, coupon, ytm + 0.01, 2).unwrap();
            proptest::prop_assert!(higher_yield < lower_yield);
        }

        #[test]
        fn prop_macaulay_within_schedule(
            maturity in 1.0_f64..30.0,
            coupon in 0.001_f64..0.12,
            ytm in 0.0_f64..0.15,
        ) {
            let duration = macaulay_duration(100.0, maturity, coupon, ytm, 2).unwrap();
            // Bounded by the first and last payment dates
            proptest::prop_assert!(duration >= 0.5 - 1e-9);
            proptest::prop_assert!(duration <= maturity + 0.25 + 1e-9);
        }
    }

    #[test]
    fn test_zero_coupon_convexity_hand_check() {
        // Single cash flow at period n: Cx = n(n+1) / ((1+y)^2 · freq^2)
        let n = 5;
        let y = 0.04;
        let cx = convexity(100.0, 5.0, 0.0, y, 1).unwrap();
        let expected = (n as f64) * (n as f64 + 1.0) / ((1.0 + y) * (1.0 + y));
        assert_relative_eq!(cx, expected, epsilon = 1e-12);
    }
}
