//! Error types for risk and performance measures.

use quant_core::types::PricingError;
use thiserror::Error;

/// Errors raised by series-based risk calculations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RiskError {
    /// A paired series does not match the returns series in length.
    #[error("Length mismatch: returns has {returns_len} elements, paired series has {other_len}")]
    LengthMismatch {
        /// Length of the returns series
        returns_len: usize,
        /// Length of the paired series
        other_len: usize,
    },
}

impl From<RiskError> for PricingError {
    fn from(err: RiskError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
