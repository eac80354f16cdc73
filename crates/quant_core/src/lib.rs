//! # quant_core: Foundation for the quantkit pricing toolkit
//!
//! Bottom layer of the workspace, providing:
//! - Standard normal distribution primitives (`math::distributions`)
//! - The shared error taxonomy (`types::PricingError`)
//!
//! ## Zero Dependency Principle
//!
//! The foundation depends on no other quant_* crate and carries a minimal
//! external surface:
//! - statrs: machine-precision standard normal CDF
//!
//! ## Usage Examples
//!
//! ```rust
//! use quant_core::math::distributions::{norm_cdf, norm_pdf};
//!
//! let cdf = norm_cdf(0.0);
//! assert!((cdf - 0.5).abs() < 1e-12);
//!
//! let pdf = norm_pdf(0.0);
//! assert!((pdf - 0.3989422804014327).abs() < 1e-12);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
