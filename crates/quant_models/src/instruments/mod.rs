//! Contract tags and payoff helpers.
//!
//! This module provides:
//! - `OptionType`: the closed call/put tag with case-insensitive parsing
//! - `Exercise`: European vs. American exercise styles
//! - `InstrumentError`: validation failures for contract tags
//!
//! # Re-exports
//!
//! The main types are re-exported at this module level.

pub mod error;
pub mod exercise;
pub mod option_type;

pub use error::InstrumentError;
pub use exercise::Exercise;
pub use option_type::OptionType;
