//! Error types for contract tag validation.

use quant_core::types::PricingError;
use thiserror::Error;

/// Contract tag validation errors.
///
/// # Variants
/// - `UnknownOptionType`: label is neither "call" nor "put"
///
/// # Examples
/// ```
/// use quant_models::instruments::InstrumentError;
///
/// let err = InstrumentError::UnknownOptionType {
///     label: "straddle".to_string(),
/// };
/// assert!(format!("{}", err).contains("straddle"));
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InstrumentError {
    /// Option type label is not one of the two recognised tags.
    #[error("Unknown option type: {label:?} (expected \"call\" or \"put\")")]
    UnknownOptionType {
        /// The unrecognised label as supplied
        label: String,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
