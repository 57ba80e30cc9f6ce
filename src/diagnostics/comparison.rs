//! diagnostics::comparison — cross-estimator agreement checks.
//!
//! Purpose
//! -------
//! Compare the Yule–Walker and OLS coefficient vectors for numerical
//! agreement. A disagreement is a *soft* condition: the comparison is an
//! ordinary value that reports the maximum absolute difference, and only
//! an explicit call to [`EstimateComparison::into_result`] upgrades it to
//! a hard [`DiagnosticsError::EstimateMismatch`].
//!
//! Key behaviors
//! -------------
//! - [`EstimateComparison::compare`] computes the element-wise maximum
//!   absolute difference between two coefficient vectors of equal length.
//! - [`agrees`](EstimateComparison::agrees) reports the outcome against
//!   the stored tolerance; [`into_result`](EstimateComparison::into_result)
//!   converts a disagreement into an error for callers that want one.
//! - [`DEFAULT_TOL`](EstimateComparison::DEFAULT_TOL) fixes the crate's
//!   documented cross-estimator tolerance (0.05 absolute).
//!
//! Invariants & assumptions
//! ------------------------
//! - Both vectors come from estimators on the same demeaned scale with
//!   the same lag convention, so element-wise comparison is meaningful.
//! - Length mismatches are hard errors: they indicate a caller bug, not
//!   a numerical disagreement.
//!
//! Conventions
//! -----------
//! - Tolerances are absolute, matching how the two estimators are
//!   compared in practice for small orders.
//!
//! Downstream usage
//! ----------------
//! - Pipeline code fits both estimators, compares them here, and reports
//!   `max_abs_diff()` as a diagnostic; a mismatch does not halt the
//!   pipeline unless the caller opts in via `into_result()`.
//!
//! Testing notes
//! -------------
//! - Unit tests cover agreement within and beyond tolerance, the exact
//!   maximum-difference value, the length-mismatch branch, and both
//!   directions of `into_result`.

use crate::diagnostics::errors::{DiagnosticsError, DiagnosticsResult};
use ndarray::ArrayView1;

/// `EstimateComparison` — outcome of comparing two coefficient vectors.
///
/// Purpose
/// -------
/// Represent the result of an element-wise comparison between two AR
/// coefficient estimates: the maximum absolute difference observed and
/// the tolerance it was judged against.
///
/// Fields
/// ------
/// - `max_abs_diff`: `f64`
///   Largest element-wise absolute difference between the two vectors.
/// - `tol`: `f64`
///   Absolute tolerance the comparison was made against.
///
/// Invariants
/// ----------
/// - `max_abs_diff` is non-negative and finite whenever both inputs are
///   finite.
/// - The value is immutable once constructed; re-judging against a
///   different tolerance means re-running [`compare`](Self::compare).
///
/// Notes
/// -----
/// - A plain value object, `Copy` and cheap to pass around; it does not
///   own the compared vectors.
#[derive(Debug, Copy, Clone)]
pub struct EstimateComparison {
    max_abs_diff: f64,
    tol: f64,
}

impl EstimateComparison {
    /// Documented cross-estimator tolerance: Yule–Walker and OLS agree
    /// within 0.05 absolute for small orders on moderate samples.
    pub const DEFAULT_TOL: f64 = 0.05;

    /// Compare two coefficient vectors element-wise.
    ///
    /// Parameters
    /// ----------
    /// - `left`: `ArrayView1<f64>`
    ///   First coefficient vector (conventionally the Yule–Walker
    ///   estimate).
    /// - `right`: `ArrayView1<f64>`
    ///   Second coefficient vector (conventionally the OLS estimate).
    ///   Must have the same length as `left`.
    /// - `tol`: `f64`
    ///   Absolute tolerance for [`agrees`](Self::agrees) /
    ///   [`into_result`](Self::into_result).
    ///
    /// Returns
    /// -------
    /// `DiagnosticsResult<EstimateComparison>`
    ///   The comparison outcome holding the maximum absolute difference.
    ///
    /// Errors
    /// ------
    /// - `DiagnosticsError::LengthMismatch { left, right }`
    ///   The vectors cannot be compared element-wise.
    ///
    /// Panics
    /// ------
    /// - Never panics.
    ///
    /// Notes
    /// -----
    /// - Zero-length inputs are legal and yield `max_abs_diff = 0.0`;
    ///   upstream estimators never produce them, but the comparison does
    ///   not need to forbid them.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ar_estimation::diagnostics::comparison::EstimateComparison;
    /// # use ndarray::array;
    /// let yw = array![0.58, -0.21];
    /// let ols = array![0.60, -0.19];
    ///
    /// let cmp = EstimateComparison::compare(
    ///     yw.view(),
    ///     ols.view(),
    ///     EstimateComparison::DEFAULT_TOL,
    /// ).unwrap();
    ///
    /// assert!(cmp.agrees());
    /// assert!((cmp.max_abs_diff() - 0.02).abs() < 1e-12);
    /// ```
    pub fn compare(
        left: ArrayView1<f64>, right: ArrayView1<f64>, tol: f64,
    ) -> DiagnosticsResult<Self> {
        if left.len() != right.len() {
            return Err(DiagnosticsError::LengthMismatch {
                left: left.len(),
                right: right.len(),
            });
        }

        let max_abs_diff = left
            .iter()
            .zip(right.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0_f64, f64::max);

        Ok(EstimateComparison { max_abs_diff, tol })
    }

    /// Whether the two estimates agree within the stored tolerance.
    pub fn agrees(&self) -> bool {
        self.max_abs_diff <= self.tol
    }

    /// Largest element-wise absolute difference observed.
    pub fn max_abs_diff(&self) -> f64 {
        self.max_abs_diff
    }

    /// Tolerance the comparison was judged against.
    pub fn tol(&self) -> f64 {
        self.tol
    }

    /// Upgrade a disagreement to a hard error.
    ///
    /// Returns
    /// -------
    /// `DiagnosticsResult<()>`
    ///   - `Ok(())` when the estimates agree within tolerance.
    ///   - `Err(DiagnosticsError::EstimateMismatch { .. })` otherwise,
    ///     carrying the observed difference and the tolerance.
    ///
    /// Notes
    /// -----
    /// - This is the only place the soft mismatch condition becomes an
    ///   error; pipeline code that just reports the diagnostic never
    ///   calls it.
    pub fn into_result(self) -> DiagnosticsResult<()> {
        if self.agrees() {
            Ok(())
        } else {
            Err(DiagnosticsError::EstimateMismatch {
                max_abs_diff: self.max_abs_diff,
                tol: self.tol,
            })
        }
    }
}
