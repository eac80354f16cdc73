//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes model with continuous carry (risk-free rate `r` and
//!   dividend yield `q`)
//! - Analytical Greeks (delta, gamma, vega, theta, rho, phi)
//!
//! ## Design Principles
//!
//! - **Defined edge branches**: `T <= 0` prices at intrinsic value and
//!   `sigma <= 0` at the deterministic discounted-forward intrinsic;
//!   neither is an error
//! - **Numerical stability**: the normal CDF comes from
//!   `quant_core::math::distributions` at machine precision

pub mod black_scholes;
pub mod error;

// Re-export main types at module level
pub use black_scholes::{BlackScholes, Greeks};
pub use error::AnalyticalError;
