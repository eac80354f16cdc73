//! Error types for fixed-income analytics.

use quant_core::types::PricingError;
use thiserror::Error;

/// Errors raised by bond analytics validation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BondError {
    /// Face value must be strictly positive and finite.
    #[error("Invalid face value: {face_value} (must be positive)")]
    InvalidFaceValue {
        /// The rejected face value
        face_value: f64,
    },

    /// Maturity must be strictly positive and finite.
    #[error("Invalid maturity: {maturity} (must be positive, in years)")]
    InvalidMaturity {
        /// The rejected maturity
        maturity: f64,
    },

    /// Payment frequency must be at least one per year.
    #[error("Invalid payment frequency: {frequency} (must be >= 1)")]
    InvalidFrequency {
        /// The rejected payments-per-year count
        frequency: u32,
    },

    /// The rounded schedule `round(maturity * frequency)` has no periods.
    #[error("Schedule has no coupon periods: maturity {maturity} at frequency {frequency}")]
    EmptySchedule {
        /// Maturity in years
        maturity: f64,
        /// Payments per year
        frequency: u32,
    },

    /// The periodic discount factor `1 + ytm/frequency` is zero.
    #[error("Degenerate yield: {ytm} makes the periodic discount factor vanish")]
    DegenerateYield {
        /// The rejected annual yield
        ytm: f64,
    },
}

impl From<BondError> for PricingError {
    fn from(err: BondError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
