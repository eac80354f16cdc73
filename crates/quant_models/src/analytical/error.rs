//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: validation failures for the closed-form pricer

use quant_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// All variants are validation failures raised before any computation
/// touches the formula body; retrying an identical call cannot change
/// the outcome.
///
/// # Variants
/// - `InvalidSpot`: non-positive spot price
/// - `InvalidStrike`: non-positive strike
/// - `InvalidVolatility`: negative volatility (sigma = 0 is a defined
///   branch, not an error)
///
/// # Examples
/// ```
/// use quant_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid spot price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike (non-positive).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid volatility (negative).
    #[error("Invalid volatility: sigma = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_spot_display() {
        let err = AnalyticalError::InvalidSpot { spot: -100.0 };
        assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
    }

    #[test]
    fn test_invalid_strike_display() {
        let err = AnalyticalError::InvalidStrike { strike: 0.0 };
        assert_eq!(format!("{}", err), "Invalid strike: K = 0");
    }

    #[test]
    fn test_invalid_volatility_display() {
        let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: sigma = -0.2");
    }

    #[test]
    fn test_to_pricing_error() {
        let err = AnalyticalError::InvalidVolatility { volatility: -0.1 };
        let pricing_err: PricingError = err.into();
        match pricing_err {
            PricingError::InvalidInput(msg) => assert!(msg.contains("volatility")),
            _ => panic!("Expected InvalidInput variant"),
        }
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = AnalyticalError::InvalidStrike { strike: -1.0 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
