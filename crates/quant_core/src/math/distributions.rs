//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: cumulative distribution function (CDF)
//! - `norm_pdf`: probability density function (PDF)
//!
//! Both are stateless free functions over `f64`; no module-level state
//! is held anywhere.

use statrs::distribution::{ContinuousCDF, Normal};

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1), delegating to the statrs
/// standard normal for a machine-precision erf evaluation. Accuracy at
/// double precision matters here: the analytic Greeks are cross-checked
/// against central finite differences at tolerances the coarser
/// polynomial CDF approximations cannot meet.
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The probability P(X <= x), in range [0, 1].
///
/// # Examples
/// ```
/// use quant_core::math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-12);
/// assert!(norm_cdf(-3.0) < 0.01);
/// assert!(norm_cdf(3.0) > 0.99);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    Normal::standard().cdf(x)
}

/// Standard normal probability density function.
///
/// Computes the density φ(x) = (1 / sqrt(2π)) * exp(-x² / 2).
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The density value φ(x), always non-negative.
///
/// # Examples
/// ```
/// use quant_core::math::distributions::norm_pdf;
///
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((norm_pdf(0.0) - 0.3989422804014327).abs() < 1e-12);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}
