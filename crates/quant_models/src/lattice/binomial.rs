//! Cox-Ross-Rubinstein binomial tree engine.
//!
//! Discrete-time lattice with multiplicative up/down moves
//! `u = e^(σ√Δt)`, `d = 1/u`, risk-neutral probability
//! `p = (e^((r-q)Δt) - d) / (u - d)`, and backward induction from the
//! terminal payoffs. American exercise takes the elementwise maximum of
//! continuation and immediate exercise at every node.
//!
//! Complexity is O(steps²) time and O(steps) space: the two level
//! buffers are allocated once per call and swapped level by level,
//! never reallocated.

use crate::instruments::{Exercise, OptionType};

use super::error::LatticeError;

/// A lattice price together with its numerical-robustness diagnostic.
///
/// Extreme parameter combinations can push the risk-neutral probability
/// marginally outside `[0, 1]` through the exponential
/// parameterisation. The engine clamps rather than fails, and reports
/// that the clamp fired so a caller can flag the poorly conditioned
/// parameterisation. The clamp is distinct from validation failures,
/// which are raised as [`LatticeError`] before any tree is built.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatticePrice {
    /// The option price at the root node.
    pub price: f64,
    /// True when the risk-neutral probability was clamped into `[0, 1]`.
    pub probability_clamped: bool,
}

/// Cox-Ross-Rubinstein binomial tree engine.
///
/// Holds the market state and the step count; contract parameters are
/// supplied per call, mirroring [`crate::analytical::BlackScholes`].
///
/// # Examples
/// ```
/// use quant_models::instruments::{Exercise, OptionType};
/// use quant_models::lattice::BinomialTree;
///
/// let tree = BinomialTree::new(100.0, 0.05, 0.0, 0.2, 200).unwrap();
/// let european = tree
///     .price(100.0, 1.0, OptionType::Put, Exercise::European)
///     .unwrap();
/// let american = tree
///     .price(100.0, 1.0, OptionType::Put, Exercise::American)
///     .unwrap();
///
/// // Early exercise can only add value
/// assert!(american >= european);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinomialTree {
    /// Spot price (S)
    spot: f64,
    /// Risk-free interest rate (r), continuously compounded
    rate: f64,
    /// Dividend/carry yield (q), continuously compounded
    dividend_yield: f64,
    /// Volatility (σ)
    volatility: f64,
    /// Number of time steps (N)
    steps: usize,
}

impl BinomialTree {
    /// Creates a new CRR lattice engine.
    ///
    /// # Errors
    /// - `LatticeError::InvalidSteps` if `steps < 1`
    /// - `LatticeError::InvalidSpot` if `spot <= 0` or non-finite
    /// - `LatticeError::InvalidVolatility` if `volatility < 0` or NaN
    pub fn new(
        spot: f64,
        rate: f64,
        dividend_yield: f64,
        volatility: f64,
        steps: usize,
    ) -> Result<Self, LatticeError> {
        if steps < 1 {
            return Err(LatticeError::InvalidSteps { steps });
        }

        if !(spot > 0.0 && spot.is_finite()) {
            return Err(LatticeError::InvalidSpot { spot });
        }

        if !(volatility >= 0.0) {
            return Err(LatticeError::InvalidVolatility { volatility });
        }

        Ok(Self {
            spot,
            rate,
            dividend_yield,
            volatility,
            steps,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the number of time steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Prices an option on the lattice, discarding the clamp diagnostic.
    ///
    /// See [`Self::price_with_diagnostics`].
    pub fn price(
        &self,
        strike: f64,
        expiry: f64,
        option_type: OptionType,
        exercise: Exercise,
    ) -> Result<f64, LatticeError> {
        self.price_with_diagnostics(strike, expiry, option_type, exercise)
            .map(|result| result.price)
    }

    /// Prices an option on the lattice.
    ///
    /// - `expiry <= 0` returns intrinsic value directly, bypassing tree
    ///   construction
    /// - the risk-neutral probability is clamped into `[0, 1]` when
    ///   extreme parameters push it outside; the returned record says
    ///   whether the clamp fired
    ///
    /// # Errors
    /// - `LatticeError::InvalidStrike` if `strike <= 0` or non-finite
    pub fn price_with_diagnostics(
        &self,
        strike: f64,
        expiry: f64,
        option_type: OptionType,
        exercise: Exercise,
    ) -> Result<LatticePrice, LatticeError> {
        if !(strike > 0.0 && strike.is_finite()) {
            return Err(LatticeError::InvalidStrike { strike });
        }

        if expiry <= 0.0 {
            return Ok(LatticePrice {
                price: option_type.intrinsic(self.spot, strike),
                probability_clamped: false,
            });
        }

        let steps = self.steps;
        let dt = expiry / steps as f64;
        let u = (self.volatility * dt.sqrt()).exp();
        let d = 1.0 / u;
        let disc = (-self.rate * dt).exp();

        let raw_p = (((self.rate - self.dividend_yield) * dt).exp() - d) / (u - d);
        let (p, probability_clamped) = clamp_probability(raw_p);

        let disc_p = disc * p;
        let disc_1mp = disc * (1.0 - p);

        // Node j at level n has spot S·u^j·d^(n-j) = S·d^n·(u/d)^j; the
        // multiplicative recurrence avoids powf at every node.
        let ratio = u / d;

        let mut values = vec![0.0_f64; steps + 1];
        let mut scratch = vec![0.0_f64; steps + 1];

        let mut node_spot = self.spot * d.powi(steps as i32);
        for value in values.iter_mut() {
            *value = option_type.intrinsic(node_spot, strike);
            node_spot *= ratio;
        }

        let american = exercise.is_american();
        for level in (0..steps).rev() {
            let mut node_spot = self.spot * d.powi(level as i32);
            for j in 0..=level {
                let continuation = disc_p * values[j + 1] + disc_1mp * values[j];
                scratch[j] = if american {
                    continuation.max(option_type.intrinsic(node_spot, strike))
                } else {
                    continuation
                };
                node_spot *= ratio;
            }
            std::mem::swap(&mut values, &mut scratch);
        }

        Ok(LatticePrice {
            price: values[0],
            probability_clamped,
        })
    }
}

/// Clamps the risk-neutral probability into `[0, 1]`.
///
/// NaN arises only when `u == d` (zero volatility with `r == q`): the
/// tree then collapses to a single path and the mixing weight is
/// irrelevant, so any in-range value prices identically.
#[inline]
fn clamp_probability(raw: f64) -> (f64, bool) {
    if raw.is_nan() {
        (0.5, true)
    } else if raw < 0.0 {
        (0.0, true)
    } else if raw > 1.0 {
        (1.0, true)
    } else {
        (raw, false)
    }
}
