//! Error types for lattice pricing operations.

use quant_core::types::PricingError;
use thiserror::Error;

/// Lattice pricing errors.
///
/// All variants are validation failures raised before the tree is
/// built. The probability clamp is deliberately not represented here:
/// it is a corrective measure surfaced through the
/// [`super::LatticePrice`] diagnostic, not an error.
///
/// # Variants
/// - `InvalidSteps`: fewer than one time step
/// - `InvalidSpot`: non-positive spot price
/// - `InvalidStrike`: non-positive strike
/// - `InvalidVolatility`: negative volatility
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LatticeError {
    /// Invalid step count (must be >= 1).
    #[error("Invalid step count: steps = {steps} (must be >= 1)")]
    InvalidSteps {
        /// The invalid step count
        steps: usize,
    },

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

impl From<LatticeError> for PricingError {
    fn from(err: LatticeError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
