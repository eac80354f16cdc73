//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: the shared error category every module-local error
//!   converts into at the toolkit boundary

use std::fmt;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode. Module-local errors
/// (`AnalyticalError`, `LatticeError`, ...) implement `From` conversions
/// into this type.
///
/// # Variants
/// - `InvalidInput`: Invalid contract or market parameters
/// - `NumericalInstability`: Computation produced a non-finite or
///   ill-conditioned intermediate
/// - `UnsupportedInstrument`: Instrument variant not supported by a model
///
/// # Examples
/// ```
/// use quant_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    InvalidInput(String),

    /// Numerical instability during computation
    NumericalInstability(String),

    /// Instrument type not supported
    UnsupportedInstrument(String),
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PricingError::NumericalInstability(msg) => {
                write!(f, "Numerical instability: {}", msg)
            }
            PricingError::UnsupportedInstrument(msg) => {
                write!(f, "Unsupported instrument: {}", msg)
            }
        }
    }
}

impl std::error::Error for PricingError {}
