//! estimation::autocovariance — sample autocovariance sequences.
//!
//! Purpose
//! -------
//! Compute the biased sample autocovariance sequence of a univariate
//! series, the derived quantity that feeds both sides of the Yule–Walker
//! system: lags `0 … p − 1` populate the Toeplitz coefficient matrix and
//! lags `1 … p` form the right-hand side.
//!
//! Key behaviors
//! -------------
//! - Compute `γ̂_k = (1/n) ∑_{t=k}^{n−1} (x_t − x̄)(x_{t−k} − x̄)` for all
//!   lags `k = 0 … max_lag` in one pass per lag.
//! - Return the sequence as an `Array1<f64>` of length `max_lag + 1`.
//!
//! Invariants & assumptions
//! ------------------------
//! - The input series must be non-empty, finite, and satisfy
//!   `max_lag < n`; violations surface as [`EstimationError`] values.
//! - The `1/n` (biased) denominator is used at every lag. This is the
//!   standard Yule–Walker convention and keeps the implied Toeplitz
//!   matrix positive semi-definite for any real series.
//!
//! Conventions
//! -----------
//! - Lag `k` pairs `(x_t, x_{t−k})` for `t = k, …, n − 1`, matching the
//!   usual time-series indexing.
//! - The series is demeaned internally; callers may pass raw or centered
//!   values.
//!
//! Downstream usage
//! ----------------
//! - [`YuleWalkerFit::fit`](crate::estimation::yule_walker::YuleWalkerFit::fit)
//!   calls [`autocovariance`] with `max_lag = p` and splits the result
//!   into matrix lags and right-hand side.
//! - The Toeplitz builders in [`crate::estimation::toeplitz`] consume the
//!   same vector; diagnostics may reuse it for reporting.
//!
//! Testing notes
//! -------------
//! - Unit tests check `γ̂_0` against the biased sample variance, verify a
//!   hand-computed lag-1 value on a short series, confirm the alternating
//!   sign pattern on a perfectly periodic series, and exercise the error
//!   branches for invalid lags.

use crate::estimation::errors::{EstimationError, EstimationResult};
use ndarray::Array1;

/// Compute the biased sample autocovariance sequence up to `max_lag`.
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   Input series {xₜ} of length `n ≥ 1`. Must contain only finite
///   values. The series is demeaned internally.
/// - `max_lag`: `usize`
///   Largest lag to compute. Must satisfy `max_lag < n`.
///
/// Returns
/// -------
/// `EstimationResult<Array1<f64>>`
///   On success, a vector of length `max_lag + 1` whose element `k` is
///   the biased sample autocovariance
///   `γ̂_k = (1/n) ∑_{t=k}^{n−1} (x_t − x̄)(x_{t−k} − x̄)`.
///
/// Errors
/// ------
/// - `EstimationError::EmptySeries`
///   Returned when `data` is empty.
/// - `EstimationError::NonFiniteValue(value)`
///   Returned when any element of `data` is not finite.
/// - `EstimationError::InvalidLag { lag, len }`
///   Returned when `max_lag >= data.len()`.
///
/// Panics
/// ------
/// - Never panics under the documented constraints.
///
/// Notes
/// -----
/// - `γ̂_0` equals the biased sample variance and is zero only for an
///   exactly constant series; downstream solvers report that case as a
///   singular system rather than failing here.
///
/// Examples
/// --------
/// ```rust
/// # use ar_estimation::estimation::autocovariance::autocovariance;
/// let data = vec![1.0, 2.0, 1.0, 2.0, 1.0, 2.0];
/// let gamma = autocovariance(&data, 1).unwrap();
///
/// assert_eq!(gamma.len(), 2);
/// assert!(gamma[0] > 0.0);
/// assert!(gamma[1] < 0.0); // perfectly alternating series
/// ```
pub fn autocovariance(data: &[f64], max_lag: usize) -> EstimationResult<Array1<f64>> {
    if data.is_empty() {
        return Err(EstimationError::EmptySeries);
    }

    for &value in data {
        if !value.is_finite() {
            return Err(EstimationError::NonFiniteValue(value));
        }
    }

    let n = data.len();
    if max_lag >= n {
        return Err(EstimationError::InvalidLag { lag: max_lag, len: n });
    }

    let mean = data.iter().sum::<f64>() / n as f64;

    let mut gamma = Array1::<f64>::zeros(max_lag + 1);
    for lag in 0..=max_lag {
        let mut acc = 0.0;
        for t in lag..n {
            acc += (data[t] - mean) * (data[t - lag] - mean);
        }
        gamma[lag] = acc / n as f64;
    }

    Ok(gamma)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Agreement of γ̂₀ with the biased sample variance.
    // - A hand-computed lag-1 autocovariance on a short series.
    // - Sign structure on a perfectly alternating series.
    // - Error branches: empty input, non-finite values, lag ≥ n.
    //
    // They intentionally DO NOT cover:
    // - Consumption of the sequence by the Toeplitz builders or solvers;
    //   those paths are exercised in their own modules.
    // -------------------------------------------------------------------------

    const TOL: f64 = 1e-12;

    #[test]
    // Purpose
    // -------
    // Verify that the lag-0 autocovariance equals the biased sample
    // variance (1/n) Σ (xₜ − x̄)².
    //
    // Given
    // -----
    // - A short finite series.
    //
    // Expect
    // ------
    // - γ̂₀ matches the manually computed biased variance.
    fn autocovariance_lag_zero_matches_biased_variance() {
        // Arrange
        let data = vec![1.0_f64, 3.0, -2.0, 0.5, 4.0];
        let n = data.len() as f64;
        let mean = data.iter().sum::<f64>() / n;
        let variance = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;

        // Act
        let gamma = autocovariance(&data, 0).unwrap();

        // Assert
        assert_relative_eq!(gamma[0], variance, epsilon = TOL, max_relative = TOL);
    }

    #[test]
    // Purpose
    // -------
    // Validate the lag-1 autocovariance against a hand computation on a
    // four-point series.
    //
    // Given
    // -----
    // - data = [1, 2, 3, 4], whose demeaned form is [-1.5, -0.5, 0.5, 1.5].
    //
    // Expect
    // ------
    // - γ̂₁ = (1/4)(−1.5·−0.5 + −0.5·0.5 + 0.5·1.5) = 1.25/4.
    fn autocovariance_lag_one_matches_hand_computation() {
        // Arrange
        let data = vec![1.0_f64, 2.0, 3.0, 4.0];

        // Act
        let gamma = autocovariance(&data, 1).unwrap();

        // Assert
        assert_relative_eq!(gamma[1], 1.25 / 4.0, epsilon = TOL, max_relative = TOL);
    }

    #[test]
    // Purpose
    // -------
    // Confirm the alternating-sign structure of a perfectly periodic
    // series: positive variance, negative lag-1, positive lag-2.
    //
    // Given
    // -----
    // - data = [1, 2, 1, 2, 1, 2, 1, 2, 1, 2] and max_lag = 2.
    //
    // Expect
    // ------
    // - γ̂₀ > 0, γ̂₁ < 0, γ̂₂ > 0.
    fn autocovariance_periodic_series_alternates_sign() {
        // Arrange
        let data = vec![1.0_f64, 2.0, 1.0, 2.0, 1.0, 2.0, 1.0, 2.0, 1.0, 2.0];

        // Act
        let gamma = autocovariance(&data, 2).unwrap();

        // Assert
        assert!(gamma[0] > 0.0, "γ̂₀ should be positive, got {}", gamma[0]);
        assert!(gamma[1] < 0.0, "γ̂₁ should be negative, got {}", gamma[1]);
        assert!(gamma[2] > 0.0, "γ̂₂ should be positive, got {}", gamma[2]);
    }

    #[test]
    // Purpose
    // -------
    // Ensure that an empty series is rejected with `EmptySeries`.
    //
    // Given
    // -----
    // - An empty slice and max_lag = 0.
    //
    // Expect
    // ------
    // - `autocovariance` returns `Err(EstimationError::EmptySeries)`.
    fn autocovariance_empty_input_returns_empty_series() {
        // Arrange
        let data: Vec<f64> = vec![];

        // Act
        let result = autocovariance(&data, 0);

        // Assert
        match result {
            Err(EstimationError::EmptySeries) => (),
            other => panic!("expected EmptySeries error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure that a non-finite observation is rejected before any lag
    // computation takes place.
    //
    // Given
    // -----
    // - A series containing -inf and max_lag = 1.
    //
    // Expect
    // ------
    // - `autocovariance` returns `Err(EstimationError::NonFiniteValue)`.
    fn autocovariance_non_finite_value_returns_non_finite() {
        // Arrange
        let data = vec![1.0_f64, f64::NEG_INFINITY, 2.0];

        // Act
        let result = autocovariance(&data, 1);

        // Assert
        match result {
            Err(EstimationError::NonFiniteValue(v)) => {
                assert!(!v.is_finite(), "payload should be non-finite, got {v}");
            }
            other => panic!("expected NonFiniteValue error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that a lag equal to the series length is rejected, since
    // lag k needs at least k + 1 observations.
    //
    // Given
    // -----
    // - A series of length 3 and max_lag = 3.
    //
    // Expect
    // ------
    // - `autocovariance` returns `Err(EstimationError::InvalidLag)`.
    fn autocovariance_lag_equal_to_len_returns_invalid_lag() {
        // Arrange
        let data = vec![1.0_f64, 2.0, 3.0];

        // Act
        let result = autocovariance(&data, 3);

        // Assert
        match result {
            Err(EstimationError::InvalidLag { lag, len }) => {
                assert_eq!(lag, 3);
                assert_eq!(len, 3);
            }
            other => panic!("expected InvalidLag error, got {other:?}"),
        }
    }
}
