//! diagnostics::residuals — in-sample AR residuals and portmanteau checks.
//!
//! Purpose
//! -------
//! Produce the residual series of a fitted AR(p) model and summary
//! diagnostics over it: standardized residuals for plotting and a
//! Ljung–Box portmanteau statistic with a χ² p-value for leftover serial
//! correlation. The plain numeric arrays returned here are exactly what
//! external plotting/rendering collaborators consume.
//!
//! Key behaviors
//! -------------
//! - [`ar_residuals`] forms one-step-ahead in-sample residuals
//!   `e_t = y_t − ∑_{j=1}^{p} φ_j y_{t−j}` on the demeaned series, for
//!   `t = p … n − 1`.
//! - [`standardized_residuals`] rescales a residual series by its biased
//!   sample standard deviation.
//! - [`LjungBoxOutcome::ljung_box`] computes
//!   `Q = n(n+2) ∑_{k=1}^{h} ρ̂_k² / (n−k)` over residual
//!   autocorrelations and the χ²(h) upper-tail p-value.
//!
//! Invariants & assumptions
//! ------------------------
//! - Residual diagnostics are informational: a failed portmanteau check
//!   is a result value, never an error. Errors here mean the inputs were
//!   unusable (degenerate variance, bad lag counts, invalid series).
//! - The coefficient vector uses the crate-wide convention that entry
//!   `k` multiplies lag `k + 1`.
//!
//! Conventions
//! -----------
//! - `n` in the Ljung–Box formula is the residual series length, and the
//!   degrees of freedom equal the lag count `h`; callers comparing
//!   against a fitted model's residuals may prefer `h − p` degrees of
//!   freedom and can recompute the p-value themselves from `stat()`.
//!
//! Downstream usage
//! ----------------
//! - Pipeline code fits [`YuleWalkerFit`](crate::estimation::YuleWalkerFit),
//!   calls [`ar_residuals`] with the fitted coefficients, and hands the
//!   arrays to its plotting layer; [`LjungBoxOutcome`] supplies the
//!   companion test statistic for the report.
//!
//! Testing notes
//! -------------
//! - Unit tests verify the residual recursion on a hand-computed
//!   example, exact zero residuals for a noiseless recursion,
//!   standardization to unit variance, p-value bounds, and the error
//!   branches for degenerate and malformed inputs.

use crate::diagnostics::errors::{DiagnosticsError, DiagnosticsResult};
use crate::estimation::{autocovariance::autocovariance, validation::validate_series};
use ndarray::{Array1, ArrayView1};
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Compute one-step-ahead in-sample residuals of a fitted AR(p) model.
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   The original series the model was fitted on; length `n ≥ p + 1`,
///   finite values only. Demeaned internally with its own sample mean.
/// - `coefficients`: `ArrayView1<f64>`
///   Fitted AR coefficients `φ_1 … φ_p` (entry `k` multiplies lag
///   `k + 1`). Must be non-empty and finite.
///
/// Returns
/// -------
/// `DiagnosticsResult<Array1<f64>>`
///   Residuals `e_p … e_{n−1}` of length `n − p`.
///
/// Errors
/// ------
/// - `DiagnosticsError::Estimation(_)`
///   Wrapped validation failures: empty/non-finite series, non-finite
///   coefficients, or `p` out of range for the series length.
///
/// Panics
/// ------
/// - Never panics under the documented constraints.
///
/// Examples
/// --------
/// ```rust
/// # use ar_estimation::diagnostics::residuals::ar_residuals;
/// # use ndarray::array;
/// // Exact alternating recursion x_t = −x_{t−1}: residuals vanish.
/// let data: Vec<f64> = (0..10).map(|t| if t % 2 == 0 { 1.0 } else { -1.0 }).collect();
/// let resid = ar_residuals(&data, array![-1.0].view()).unwrap();
///
/// assert_eq!(resid.len(), 9);
/// assert!(resid.iter().all(|e| e.abs() < 1e-12));
/// ```
pub fn ar_residuals(
    data: &[f64], coefficients: ArrayView1<f64>,
) -> DiagnosticsResult<Array1<f64>> {
    let order = coefficients.len();
    validate_series(data, order)?;
    for &phi in coefficients.iter() {
        if !phi.is_finite() {
            return Err(crate::estimation::EstimationError::NonFiniteValue(phi).into());
        }
    }

    let n = data.len();
    let mean = data.iter().sum::<f64>() / n as f64;

    let mut residuals = Array1::<f64>::zeros(n - order);
    for t in order..n {
        let mut prediction = 0.0;
        for (j, phi) in coefficients.iter().enumerate() {
            prediction += phi * (data[t - 1 - j] - mean);
        }
        residuals[t - order] = (data[t] - mean) - prediction;
    }

    Ok(residuals)
}

/// Rescale a residual series by its biased sample standard deviation.
///
/// Parameters
/// ----------
/// - `residuals`: `ArrayView1<f64>`
///   Residual series of length ≥ 1 with finite values.
///
/// Returns
/// -------
/// `DiagnosticsResult<Array1<f64>>`
///   The residuals divided by `√((1/n) ∑ (e_t − ē)²)`.
///
/// Errors
/// ------
/// - `DiagnosticsError::Estimation(_)`
///   Empty or non-finite input.
/// - `DiagnosticsError::DegenerateResiduals`
///   The residual series has zero sample variance.
///
/// Panics
/// ------
/// - Never panics under the documented constraints.
///
/// Notes
/// -----
/// - The residuals are *not* re-centered; only the scale changes, so
///   plots keep any systematic offset visible.
pub fn standardized_residuals(residuals: ArrayView1<f64>) -> DiagnosticsResult<Array1<f64>> {
    if residuals.is_empty() {
        return Err(crate::estimation::EstimationError::EmptySeries.into());
    }
    for &value in residuals.iter() {
        if !value.is_finite() {
            return Err(crate::estimation::EstimationError::NonFiniteValue(value).into());
        }
    }

    let n = residuals.len() as f64;
    let mean = residuals.sum() / n;
    let variance = residuals.iter().map(|e| (e - mean).powi(2)).sum::<f64>() / n;
    if variance <= 0.0 {
        return Err(DiagnosticsError::DegenerateResiduals);
    }

    let sd = variance.sqrt();
    Ok(residuals.map(|e| e / sd))
}

/// `LjungBoxOutcome` — outcome of a Ljung–Box portmanteau test.
///
/// Purpose
/// -------
/// Represent the outcome of a single Ljung–Box test on a residual
/// series: the statistic, its χ²(h) upper-tail p-value, and the lag
/// count used.
///
/// Fields
/// ------
/// - `stat`: `f64`
///   The statistic `Q = n(n+2) ∑_{k=1}^{h} ρ̂_k² / (n−k)`.
/// - `p_value`: `f64`
///   Asymptotic χ²(h) upper-tail probability of `stat`; in `[0, 1]`.
/// - `lags`: `usize`
///   Lag count `h`, also the degrees of freedom used.
///
/// Invariants
/// ----------
/// - `stat` is finite and non-negative whenever construction succeeds.
/// - `1 ≤ lags < n` for the residual series the outcome was built from.
///
/// Notes
/// -----
/// - A simple value object with accessors; it does not own the residual
///   series.
#[derive(Debug, Copy, Clone)]
pub struct LjungBoxOutcome {
    stat: f64,
    p_value: f64,
    lags: usize,
}

impl LjungBoxOutcome {
    /// Run the Ljung–Box portmanteau test on a residual series.
    ///
    /// Parameters
    /// ----------
    /// - `residuals`: `ArrayView1<f64>`
    ///   Residual series of length `n ≥ 2` with finite values and
    ///   non-zero variance.
    /// - `lags`: `usize`
    ///   Number of autocorrelation lags `h` to pool. Must satisfy
    ///   `1 ≤ h < n`.
    ///
    /// Returns
    /// -------
    /// `DiagnosticsResult<LjungBoxOutcome>`
    ///   The statistic, its χ²(h) p-value, and `h`.
    ///
    /// Errors
    /// ------
    /// - `DiagnosticsError::InvalidLagCount { lags, len }`
    ///   `lags == 0` or `lags >= residuals.len()`.
    /// - `DiagnosticsError::DegenerateResiduals`
    ///   Zero residual variance, making autocorrelations undefined.
    /// - `DiagnosticsError::Estimation(_)`
    ///   Empty or non-finite residual input.
    ///
    /// Panics
    /// ------
    /// - Never panics: the χ² degrees of freedom equal `lags ≥ 1`, which
    ///   is always a valid parameter.
    ///
    /// Notes
    /// -----
    /// - Small p-values are evidence of leftover serial correlation,
    ///   i.e., that the fitted AR order did not capture the dependence.
    pub fn ljung_box(residuals: ArrayView1<f64>, lags: usize) -> DiagnosticsResult<Self> {
        if residuals.is_empty() {
            return Err(crate::estimation::EstimationError::EmptySeries.into());
        }
        let n = residuals.len();
        if lags == 0 || lags >= n {
            return Err(DiagnosticsError::InvalidLagCount { lags, len: n });
        }

        let resid_slice = residuals.to_vec();
        let gamma = autocovariance(&resid_slice, lags)?;
        if gamma[0] <= 0.0 {
            return Err(DiagnosticsError::DegenerateResiduals);
        }

        let nf = n as f64;
        let mut stat = 0.0;
        for k in 1..=lags {
            let rho = gamma[k] / gamma[0];
            stat += rho * rho / (nf - k as f64);
        }
        stat *= nf * (nf + 2.0);

        let p_value = 1.0 - ChiSquared::new(lags as f64).expect("lags >= 1").cdf(stat);

        Ok(LjungBoxOutcome { stat, p_value, lags })
    }

    /// Portmanteau statistic `Q`.
    pub fn stat(&self) -> f64 {
        self.stat
    }

    /// Asymptotic χ²(h) p-value of [`stat`](Self::stat).
    pub fn p_value(&self) -> f64 {
        self.p_value
    }

    /// Lag count `h` (and degrees of freedom) used.
    pub fn lags(&self) -> usize {
        self.lags
    }
}
