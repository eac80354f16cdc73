//! Put-call parity utilities.
//!
//! For European options under continuous rates and carry, parity states
//!
//! ```text
//! C - P = S·e^(-qT) - K·e^(-rT)
//! ```
//!
//! These are pure arithmetic helpers: no validation is performed and no
//! errors are raised. Feeding them American prices produces a
//! [`parity_gap`] that is merely a diagnostic of the early-exercise
//! premium rather than a mispricing signal.

/// Recovers the European put price from the call price via parity.
#[inline]
pub fn put_from_call(
    call: f64,
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    expiry: f64,
) -> f64 {
    call - forward_difference(spot, strike, rate, dividend_yield, expiry)
}

/// Recovers the European call price from the put price via parity.
#[inline]
pub fn call_from_put(
    put: f64,
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    expiry: f64,
) -> f64 {
    put + forward_difference(spot, strike, rate, dividend_yield, expiry)
}

/// Signed deviation from parity: `(C - P) - (S·e^(-qT) - K·e^(-rT))`.
///
/// Zero (to rounding) for consistent European prices; positive when the
/// call is rich relative to the put.
#[inline]
pub fn parity_gap(
    call: f64,
    put: f64,
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    expiry: f64,
) -> f64 {
    (call - put) - forward_difference(spot, strike, rate, dividend_yield, expiry)
}

/// No-arbitrage price bounds for European options.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParityBounds {
    /// Lower bound on the call: `max(S·e^(-qT) - K·e^(-rT), 0)`.
    pub call_lower: f64,
    /// Upper bound on the call: `S·e^(-qT)`.
    pub call_upper: f64,
    /// Lower bound on the put: `max(K·e^(-rT) - S·e^(-qT), 0)`.
    pub put_lower: f64,
    /// Upper bound on the put: `K·e^(-rT)`.
    pub put_upper: f64,
}

impl ParityBounds {
    /// True when `call` lies within `[call_lower, call_upper]`.
    #[inline]
    pub fn brackets_call(&self, call: f64) -> bool {
        (self.call_lower..=self.call_upper).contains(&call)
    }

    /// True when `put` lies within `[put_lower, put_upper]`.
    #[inline]
    pub fn brackets_put(&self, put: f64) -> bool {
        (self.put_lower..=self.put_upper).contains(&put)
    }
}

/// Computes the no-arbitrage bounds implied by parity.
pub fn parity_bounds(
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    expiry: f64,
) -> ParityBounds {
    let carried_spot = spot * (-dividend_yield * expiry).exp();
    let discounted_strike = strike * (-rate * expiry).exp();

    ParityBounds {
        call_lower: (carried_spot - discounted_strike).max(0.0),
        call_upper: carried_spot,
        put_lower: (discounted_strike - carried_spot).max(0.0),
        put_upper: discounted_strike,
    }
}

/// The parity right-hand side `S·e^(-qT) - K·e^(-rT)`.
#[inline]
fn forward_difference(
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    expiry: f64,
) -> f64 {
    spot * (-dividend_yield * expiry).exp() - strike * (-rate * expiry).exp()
}
