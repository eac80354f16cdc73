//! # quant_risk
//!
//! Non-parametric risk and performance measures over historical return
//! series.
//!
//! - [`var_historical`]: order-statistic Value-at-Risk for one period
//! - [`es_historical`]: expected shortfall (tail mean beyond VaR)
//! - [`sharpe`]: annualized Sharpe ratio against a constant rate
//! - [`sharpe_with_series`]: Sharpe against a time-varying rate series
//!
//! NaN observations are dropped before any statistic is computed, and
//! an empty (or all-NaN) series yields NaN rather than an error,
//! matching the conventions of array-based risk tooling.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

mod error;
mod performance;
mod var;

pub use error::RiskError;
pub use performance::{sharpe, sharpe_with_series};
pub use var::{es_historical, var_historical, QuantileMethod};
