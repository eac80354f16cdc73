//! Shared types for the pricing toolkit.
//!
//! This module provides:
//! - `error`: the workspace-wide error taxonomy
//!
//! # Re-exports
//!
//! [`PricingError`] is re-exported at this module level for convenience.

pub mod error;

pub use error::PricingError;
