//! Annualized Sharpe ratio.

use crate::error::RiskError;

/// Annualized Sharpe ratio against a constant per-period rate.
///
/// Drops NaN observations, subtracts the per-period risk-free rate,
/// and annualizes the mean/standard-deviation ratio by
/// `sqrt(periods_per_year)`. The standard deviation uses
/// `degrees_of_freedom` as the divisor correction (1 for the sample
/// convention). Returns 0.0 when the standard deviation is zero or
/// undefined, so a constant series never blows up a report.
///
/// The risk-free rate must already be per period; convert an
/// annualized rate before calling.
///
/// # Examples
/// ```
/// use quant_risk::sharpe;
///
/// let daily = [0.001, -0.002, 0.0015, 0.0008, -0.0005];
/// let ratio = sharpe(&daily, 0.0, 252, 1);
/// assert!(ratio.is_finite());
/// ```
pub fn sharpe(
    returns: &[f64],
    risk_free: f64,
    periods_per_year: u32,
    degrees_of_freedom: usize,
) -> f64 {
    let excess: Vec<f64> = returns
        .iter()
        .filter(|value| !value.is_nan())
        .map(|value| value - risk_free)
        .collect();

    annualized_ratio(&excess, periods_per_year, degrees_of_freedom)
}

/// Annualized Sharpe ratio against a time-varying rate series.
///
/// `risk_free` must pair element-for-element with `returns`; pairs
/// whose return is NaN are dropped together. Otherwise identical to
/// [`sharpe`].
///
/// # Errors
/// - `RiskError::LengthMismatch` when the two series differ in length
pub fn sharpe_with_series(
    returns: &[f64],
    risk_free: &[f64],
    periods_per_year: u32,
    degrees_of_freedom: usize,
) -> Result<f64, RiskError> {
    if returns.len() != risk_free.len() {
        return Err(RiskError::LengthMismatch {
            returns_len: returns.len(),
            other_len: risk_free.len(),
        });
    }

    let excess: Vec<f64> = returns
        .iter()
        .zip(risk_free)
        .filter(|(value, _)| !value.is_nan())
        .map(|(value, rate)| value - rate)
        .collect();

    Ok(annualized_ratio(&excess, periods_per_year, degrees_of_freedom))
}

fn annualized_ratio(excess: &[f64], periods_per_year: u32, degrees_of_freedom: usize) -> f64 {
    let n = excess.len();
    if n == 0 || n <= degrees_of_freedom {
        return 0.0;
    }

    let mean = excess.iter().sum::<f64>() / n as f64;
    let variance = excess
        .iter()
        .map(|value| {
            let deviation = value - mean;
            deviation * deviation
        })
        .sum::<f64>()
        / (n - degrees_of_freedom) as f64;
    let std = variance.sqrt();

    if std == 0.0 || !std.is_finite() {
        return 0.0;
    }

    (mean / std) * (periods_per_year as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hand_computed_ratio() {
        // mean = 0.01, sample std = 0.01, annualized by sqrt(4)
        let returns = [0.0, 0.01, 0.02, 0.01];
        let expected_std = (0.0002_f64 / 3.0).sqrt();
        let ratio = sharpe(&returns, 0.0, 4, 1);
        assert_relative_eq!(ratio, (0.01 / expected_std) * 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_constant_series_returns_zero() {
        let flat = [0.01; 10];
        assert_eq!(sharpe(&flat, 0.0, 252, 1), 0.0);
    }

    #[test]
    fn test_empty_and_underdetermined_series_return_zero() {
        assert_eq!(sharpe(&[], 0.0, 252, 1), 0.0);
        // One observation leaves no degrees of freedom for sample std
        assert_eq!(sharpe(&[0.01], 0.0, 252, 1), 0.0);
    }

    #[test]
    fn test_nan_observations_dropped() {
        let clean = [0.01, -0.005, 0.002, 0.004];
        let noisy = [0.01, f64::NAN, -0.005, 0.002, f64::NAN, 0.004];
        assert_relative_eq!(
            sharpe(&noisy, 0.001, 252, 1),
            sharpe(&clean, 0.001, 252, 1),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_risk_free_shift_lowers_ratio() {
        let returns = [0.01, 0.005, 0.012, 0.008, 0.002];
        let gross = sharpe(&returns, 0.0, 252, 1);
        let net = sharpe(&returns, 0.004, 252, 1);
        assert!(net < gross);
    }

    #[test]
    fn test_population_vs_sample_degrees_of_freedom() {
        let returns = [0.01, -0.02, 0.015, 0.005];
        let sample = sharpe(&returns, 0.0, 12, 1);
        let population = sharpe(&returns, 0.0, 12, 0);
        // Population std is smaller, so its ratio is larger in magnitude
        assert!(population.abs() > sample.abs());
    }

    #[test]
    fn test_series_rate_matches_constant_when_flat() {
        let returns = [0.01, 0.005, 0.012, 0.008];
        let flat_rate = [0.002; 4];
        let constant = sharpe(&returns, 0.002, 252, 1);
        let series = sharpe_with_series(&returns, &flat_rate, 252, 1).unwrap();
        assert_relative_eq!(series, constant, epsilon = 1e-15);
    }

    #[test]
    fn test_series_length_mismatch_rejected() {
        let returns = [0.01, 0.005];
        let rates = [0.001; 3];
        assert!(matches!(
            sharpe_with_series(&returns, &rates, 252, 1),
            Err(RiskError::LengthMismatch {
                returns_len: 2,
                other_len: 3,
            })
        ));
    }
}
