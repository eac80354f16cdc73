//! Historical Value-at-Risk and expected shortfall.
//!
//! Both measures are single-period and non-parametric: the empirical
//! loss distribution is the sorted sample itself, and VaR is an
//! order-statistic quantile of it. No scaling across horizons is
//! applied.

/// Order-statistic quantile estimators.
///
/// For a sorted sample of size `n` and level `q`, the fractional rank
/// is `h = q * (n - 1)`; the variants differ in how they resolve a
/// non-integral `h` between the neighbouring order statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuantileMethod {
    /// Linear interpolation between the bracketing order statistics.
    #[default]
    Linear,
    /// The lower bracketing order statistic.
    Lower,
    /// The upper bracketing order statistic.
    Higher,
    /// Midpoint of the two bracketing order statistics.
    Midpoint,
    /// The order statistic with the nearest rank.
    Nearest,
}

/// Historical (non-parametric) one-period Value-at-Risk.
///
/// Interprets the series as simple returns (negated into losses) unless
/// `input_is_loss` is set, drops NaN observations, and reports VaR as a
/// positive loss at the given confidence level. `level` is clamped into
/// `[0, 1]`; an empty or all-NaN series yields NaN.
///
/// # Examples
/// ```
/// use quant_risk::{var_historical, QuantileMethod};
///
/// let returns = [-0.05, 0.01, 0.02, -0.01, 0.00];
/// let var = var_historical(&returns, 0.99, false, QuantileMethod::Linear);
/// assert!(var > 0.0);
/// ```
pub fn var_historical(
    returns: &[f64],
    level: f64,
    input_is_loss: bool,
    method: QuantileMethod,
) -> f64 {
    let mut losses = collect_losses(returns, input_is_loss);
    if losses.is_empty() {
        return f64::NAN;
    }

    losses.sort_unstable_by(f64::total_cmp);
    quantile_sorted(&losses, level.clamp(0.0, 1.0), method)
}

/// Historical one-period expected shortfall (conditional VaR).
///
/// Mean of the losses at or beyond the VaR at the same level, with a
/// small tolerance so the quantile observation itself is always in the
/// tail. Degenerates to the VaR when no observation strictly exceeds
/// it. Same NaN-filtering and sign conventions as [`var_historical`].
pub fn es_historical(
    returns: &[f64],
    level: f64,
    input_is_loss: bool,
    method: QuantileMethod,
) -> f64 {
    let mut losses = collect_losses(returns, input_is_loss);
    if losses.is_empty() {
        return f64::NAN;
    }

    losses.sort_unstable_by(f64::total_cmp);
    let var = quantile_sorted(&losses, level.clamp(0.0, 1.0), method);

    let threshold = var - 1e-12;
    let mut tail_sum = 0.0;
    let mut tail_count = 0usize;
    // Sorted ascending, so the tail is a suffix
    for &loss in losses.iter().rev() {
        if loss < threshold {
            break;
        }
        tail_sum += loss;
        tail_count += 1;
    }

    if tail_count == 0 {
        var
    } else {
        tail_sum / tail_count as f64
    }
}

fn collect_losses(returns: &[f64], input_is_loss: bool) -> Vec<f64> {
    returns
        .iter()
        .filter(|value| !value.is_nan())
        .map(|&value| if input_is_loss { value } else { -value })
        .collect()
}

/// Quantile of an ascending-sorted, non-empty sample.
fn quantile_sorted(sorted: &[f64], q: f64, method: QuantileMethod) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let rank = q * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;

    match method {
        QuantileMethod::Linear => {
            let fraction = rank - lower as f64;
            sorted[lower] + fraction * (sorted[upper] - sorted[lower])
        }
        QuantileMethod::Lower => sorted[lower],
        QuantileMethod::Higher => sorted[upper],
        QuantileMethod::Midpoint => 0.5 * (sorted[lower] + sorted[upper]),
        QuantileMethod::Nearest => sorted[rank.round() as usize],
    }
}
