//! Black-Scholes pricing model for European options.
//!
//! Closed-form pricing and analytical Greeks with continuous
//! risk-free rate `r` and dividend/carry yield `q`.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! Two defined edge branches, exact rather than approximate:
//! - `T <= 0`: intrinsic value (maturity payoff)
//! - `σ <= 0`: discounted-forward intrinsic (riskless limit)

use quant_core::math::distributions::{norm_cdf, norm_pdf};

use super::error::AnalyticalError;
use crate::instruments::OptionType;

/// Fixed-shape record of a price and its six sensitivities.
///
/// Always fully populated: in the degenerate branches (`T <= 0` or
/// `sigma <= 0`) the six sensitivities are exactly 0.0 and `price`
/// carries the branch value. Units are per 1.00 of the underlying
/// parameter (vega per 1.00 vol point, theta per year, rho/phi per
/// 1.00 rate point); day-count conversion is the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// Option price.
    pub price: f64,
    /// ∂price/∂S.
    pub delta: f64,
    /// ∂²price/∂S².
    pub gamma: f64,
    /// ∂price/∂σ.
    pub vega: f64,
    /// ∂price/∂t (calendar time; usually negative).
    pub theta: f64,
    /// ∂price/∂r.
    pub rho: f64,
    /// ∂price/∂q.
    pub phi: f64,
}

/// Black-Scholes model for European option pricing.
///
/// Holds the market state (spot, rate, dividend yield, volatility);
/// contract parameters (strike, expiry, option type) are supplied per
/// call. Every method is pure and synchronous.
///
/// # Examples
/// ```
/// use quant_models::analytical::BlackScholes;
/// use quant_models::instruments::OptionType;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.0, 0.2).unwrap();
/// let call = bs.price(100.0, 1.0, OptionType::Call).unwrap();
/// let put = bs.price(100.0, 1.0, OptionType::Put).unwrap();
///
/// // Put-call parity: C - P = S·e^(-qT) - K·e^(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    /// Spot price (S)
    spot: f64,
    /// Risk-free interest rate (r), continuously compounded
    rate: f64,
    /// Dividend/carry yield (q), continuously compounded
    dividend_yield: f64,
    /// Volatility (σ)
    volatility: f64,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free rate (annualised, any sign)
    /// * `dividend_yield` - Dividend/carry yield (annualised, any sign)
    /// * `volatility` - Volatility (must be non-negative; zero selects
    ///   the deterministic riskless branch in `price`)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if `spot <= 0` or non-finite
    /// - `AnalyticalError::InvalidVolatility` if `volatility < 0` or NaN
    ///
    /// # Examples
    /// ```
    /// use quant_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0, 0.05, 0.02, 0.2).is_ok());
    /// assert!(BlackScholes::new(100.0, 0.05, 0.02, 0.0).is_ok());
    /// assert!(BlackScholes::new(-100.0, 0.05, 0.02, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0, 0.05, 0.02, -0.2).is_err());
    /// ```
    pub fn new(
        spot: f64,
        rate: f64,
        dividend_yield: f64,
        volatility: f64,
    ) -> Result<Self, AnalyticalError> {
        if !(spot > 0.0 && spot.is_finite()) {
            return Err(AnalyticalError::InvalidSpot { spot });
        }

        if !(volatility >= 0.0) {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }

        Ok(Self {
            spot,
            rate,
            dividend_yield,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Computes the d₁ term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
    ///
    /// Assumes `expiry > 0` and `volatility > 0`; the pricing methods
    /// branch on the degenerate cases before reaching this term.
    #[inline]
    pub fn d1(&self, strike: f64, expiry: f64) -> f64 {
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let carry =
            (self.rate - self.dividend_yield + 0.5 * self.volatility * self.volatility) * expiry;

        (log_moneyness + carry) / vol_sqrt_t
    }

    /// Computes the d₂ term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: f64, expiry: f64) -> f64 {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Computes the European option price.
    ///
    /// Branches:
    /// - `expiry <= 0`: intrinsic value, the exact maturity payoff
    /// - `volatility <= 0`: deterministic discounted-forward intrinsic,
    ///   `max(±(S·e^(-qT) - K·e^(-rT)), 0)`
    /// - otherwise the closed form with the standard normal CDF
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidStrike` if `strike <= 0` or non-finite
    ///
    /// # Examples
    /// ```
    /// use quant_models::analytical::BlackScholes;
    /// use quant_models::instruments::OptionType;
    ///
    /// let bs = BlackScholes::new(100.0, 0.02, 0.0, 0.2).unwrap();
    ///
    /// // Expired contract prices at intrinsic, exactly
    /// let expired = bs.price(90.0, 0.0, OptionType::Call).unwrap();
    /// assert_eq!(expired, 10.0);
    /// ```
    pub fn price(
        &self,
        strike: f64,
        expiry: f64,
        option_type: OptionType,
    ) -> Result<f64, AnalyticalError> {
        check_strike(strike)?;

        if expiry <= 0.0 {
            return Ok(option_type.intrinsic(self.spot, strike));
        }

        if self.volatility <= 0.0 {
            let fwd_disc = self.spot * self.carry_discount(expiry)
                - strike * self.rate_discount(expiry);
            return Ok(match option_type {
                OptionType::Call => fwd_disc.max(0.0),
                OptionType::Put => (-fwd_disc).max(0.0),
            });
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let disc_q = self.carry_discount(expiry);
        let disc_r = self.rate_discount(expiry);

        Ok(match option_type {
            OptionType::Call => self.spot * disc_q * norm_cdf(d1) - strike * disc_r * norm_cdf(d2),
            OptionType::Put => strike * disc_r * norm_cdf(-d2) - self.spot * disc_q * norm_cdf(-d1),
        })
    }

    /// Convenience wrapper: [`Self::price`] for a call.
    #[inline]
    pub fn price_call(&self, strike: f64, expiry: f64) -> Result<f64, AnalyticalError> {
        self.price(strike, expiry, OptionType::Call)
    }

    /// Convenience wrapper: [`Self::price`] for a put.
    #[inline]
    pub fn price_put(&self, strike: f64, expiry: f64) -> Result<f64, AnalyticalError> {
        self.price(strike, expiry, OptionType::Put)
    }

    /// Computes delta (∂V/∂S).
    ///
    /// - Call: e^(-qT)·N(d₁)
    /// - Put: e^(-qT)·(N(d₁) - 1)
    ///
    /// Degenerate branches (`T <= 0` or `σ <= 0`) return exactly 0.0.
    pub fn delta(
        &self,
        strike: f64,
        expiry: f64,
        option_type: OptionType,
    ) -> Result<f64, AnalyticalError> {
        check_strike(strike)?;
        if self.is_degenerate(expiry) {
            return Ok(0.0);
        }

        let n_d1 = norm_cdf(self.d1(strike, expiry));
        let disc_q = self.carry_discount(expiry);

        Ok(match option_type {
            OptionType::Call => disc_q * n_d1,
            OptionType::Put => disc_q * (n_d1 - 1.0),
        })
    }

    /// Computes gamma (∂²V/∂S²).
    ///
    /// gamma = e^(-qT)·φ(d₁) / (S·σ·√T), identical for calls and puts.
    pub fn gamma(&self, strike: f64, expiry: f64) -> Result<f64, AnalyticalError> {
        check_strike(strike)?;
        if self.is_degenerate(expiry) {
            return Ok(0.0);
        }

        let d1 = self.d1(strike, expiry);
        let sqrt_t = expiry.sqrt();

        Ok(self.carry_discount(expiry) * norm_pdf(d1) / (self.spot * self.volatility * sqrt_t))
    }

    /// Computes vega (∂V/∂σ), per 1.00 change in volatility.
    ///
    /// vega = S·e^(-qT)·φ(d₁)·√T, identical for calls and puts.
    pub fn vega(&self, strike: f64, expiry: f64) -> Result<f64, AnalyticalError> {
        check_strike(strike)?;
        if self.is_degenerate(expiry) {
            return Ok(0.0);
        }

        let d1 = self.d1(strike, expiry);

        Ok(self.spot * self.carry_discount(expiry) * norm_pdf(d1) * expiry.sqrt())
    }

    /// Computes theta (∂V/∂t), per year of calendar time.
    ///
    /// - Call: -S·e^(-qT)·φ(d₁)·σ/(2√T) - r·K·e^(-rT)·N(d₂) + q·S·e^(-qT)·N(d₁)
    /// - Put: -S·e^(-qT)·φ(d₁)·σ/(2√T) + r·K·e^(-rT)·N(-d₂) - q·S·e^(-qT)·N(-d₁)
    pub fn theta(
        &self,
        strike: f64,
        expiry: f64,
        option_type: OptionType,
    ) -> Result<f64, AnalyticalError> {
        check_strike(strike)?;
        if self.is_degenerate(expiry) {
            return Ok(0.0);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let sqrt_t = expiry.sqrt();
        let disc_q = self.carry_discount(expiry);
        let disc_r = self.rate_discount(expiry);

        let decay = -(self.spot * disc_q * norm_pdf(d1) * self.volatility) / (2.0 * sqrt_t);

        Ok(match option_type {
            OptionType::Call => {
                decay - self.rate * strike * disc_r * norm_cdf(d2)
                    + self.dividend_yield * self.spot * disc_q * norm_cdf(d1)
            }
            OptionType::Put => {
                decay + self.rate * strike * disc_r * (1.0 - norm_cdf(d2))
                    - self.dividend_yield * self.spot * disc_q * (1.0 - norm_cdf(d1))
            }
        })
    }

    /// Computes rho (∂V/∂r), per 1.00 change in the risk-free rate.
    ///
    /// - Call: K·T·e^(-rT)·N(d₂)
    /// - Put: -K·T·e^(-rT)·N(-d₂)
    pub fn rho(
        &self,
        strike: f64,
        expiry: f64,
        option_type: OptionType,
    ) -> Result<f64, AnalyticalError> {
        check_strike(strike)?;
        if self.is_degenerate(expiry) {
            return Ok(0.0);
        }

        let n_d2 = norm_cdf(self.d2(strike, expiry));
        let disc_r = self.rate_discount(expiry);

        Ok(match option_type {
            OptionType::Call => strike * expiry * disc_r * n_d2,
            OptionType::Put => -strike * expiry * disc_r * (1.0 - n_d2),
        })
    }

    /// Computes phi (∂V/∂q), per 1.00 change in the dividend yield.
    ///
    /// - Call: -T·S·e^(-qT)·N(d₁)
    /// - Put: +T·S·e^(-qT)·N(-d₁)
    pub fn phi(
        &self,
        strike: f64,
        expiry: f64,
        option_type: OptionType,
    ) -> Result<f64, AnalyticalError> {
        check_strike(strike)?;
        if self.is_degenerate(expiry) {
            return Ok(0.0);
        }

        let n_d1 = norm_cdf(self.d1(strike, expiry));
        let disc_q = self.carry_discount(expiry);

        Ok(match option_type {
            OptionType::Call => -expiry * self.spot * disc_q * n_d1,
            OptionType::Put => expiry * self.spot * disc_q * (1.0 - n_d1),
        })
    }

    /// Computes the price and all six sensitivities as one record.
    ///
    /// The record is always fully populated: in the degenerate branches
    /// the sensitivities are exactly 0.0 while `price` carries the
    /// intrinsic or riskless-limit value.
    ///
    /// # Examples
    /// ```
    /// use quant_models::analytical::BlackScholes;
    /// use quant_models::instruments::OptionType;
    ///
    /// let bs = BlackScholes::new(100.0, 0.05, 0.0, 0.2).unwrap();
    /// let greeks = bs.greeks(100.0, 1.0, OptionType::Call).unwrap();
    ///
    /// assert!(greeks.price > 0.0);
    /// assert!(greeks.delta > 0.0 && greeks.delta < 1.0);
    /// assert!(greeks.gamma > 0.0);
    /// ```
    pub fn greeks(
        &self,
        strike: f64,
        expiry: f64,
        option_type: OptionType,
    ) -> Result<Greeks, AnalyticalError> {
        Ok(Greeks {
            price: self.price(strike, expiry, option_type)?,
            delta: self.delta(strike, expiry, option_type)?,
            gamma: self.gamma(strike, expiry)?,
            vega: self.vega(strike, expiry)?,
            theta: self.theta(strike, expiry, option_type)?,
            rho: self.rho(strike, expiry, option_type)?,
            phi: self.phi(strike, expiry, option_type)?,
        })
    }

    /// True when pricing falls into a closed-form edge branch where all
    /// sensitivities are zero.
    #[inline]
    fn is_degenerate(&self, expiry: f64) -> bool {
        expiry <= 0.0 || self.volatility <= 0.0
    }

    /// e^(-qT)
    #[inline]
    fn carry_discount(&self, expiry: f64) -> f64 {
        (-self.dividend_yield * expiry).exp()
    }

    /// e^(-rT)
    #[inline]
    fn rate_discount(&self, expiry: f64) -> f64 {
        (-self.rate * expiry).exp()
    }
}

#[inline]
fn check_strike(strike: f64) -> Result<(), AnalyticalError> {
    if !(strike > 0.0 && strike.is_finite()) {
        return Err(AnalyticalError::InvalidStrike { strike });
    }
    Ok(())
}
