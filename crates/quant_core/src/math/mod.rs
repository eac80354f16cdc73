//! Math primitives for analytic pricing.
//!
//! This module provides:
//! - `distributions`: standard normal CDF and PDF
//!
//! # Re-exports
//!
//! [`norm_cdf`] and [`norm_pdf`] are re-exported at this module level.

pub mod distributions;

pub use distributions::{norm_cdf, norm_pdf};
