//! diagnostics::errors — shared error types for validation diagnostics.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the diagnostics subtree:
//! the cross-estimator comparison, residual analysis, and the builder
//! timing harness. Estimation failures encountered while diagnosing are
//! wrapped rather than duplicated, so pipeline-level code can use a
//! single error type end to end.
//!
//! Key behaviors
//! -------------
//! - Define [`DiagnosticsResult`] and [`DiagnosticsError`] as the
//!   canonical result and error types for diagnostics routines.
//! - Wrap [`EstimationError`] via the `Estimation` variant and a `From`
//!   implementation, so `?` composes across subtree boundaries.
//! - Represent the soft estimator-mismatch condition as an ordinary
//!   variant, `EstimateMismatch`; it is only produced when a caller
//!   explicitly upgrades a comparison to a hard failure.
//!
//! Invariants & assumptions
//! ------------------------
//! - Diagnostics routines validate their own parameters (lag counts,
//!   trial counts, vector lengths) and return [`DiagnosticsResult<T>`]
//!   instead of panicking.
//! - Variants carry scalars only; no error owns series data.
//!
//! Conventions
//! -----------
//! - A disagreement between the Yule–Walker and OLS estimates is
//!   informational by default: [`EstimateComparison`] reports it as a
//!   value, and only
//!   [`into_result`](crate::diagnostics::comparison::EstimateComparison::into_result)
//!   turns it into `EstimateMismatch`.
//!
//! Downstream usage
//! ----------------
//! - All public functions in `diagnostics` return
//!   [`DiagnosticsResult<T>`].
//! - Callers running the full pipeline can match on
//!   `DiagnosticsError::Estimation(_)` to distinguish upstream input
//!   problems from diagnostic-level ones.
//!
//! Testing notes
//! -------------
//! - Unit tests verify `Display` payload embedding and the
//!   `From<EstimationError>` wrapping.

use crate::estimation::errors::EstimationError;

pub type DiagnosticsResult<T> = Result<T, DiagnosticsError>;

/// DiagnosticsError — error conditions for validation diagnostics.
///
/// Purpose
/// -------
/// Represent failures raised while cross-checking estimates, analyzing
/// residuals, or timing the Toeplitz builders.
///
/// Variants
/// --------
/// - `EstimateMismatch { max_abs_diff: f64, tol: f64 }`
///   Two coefficient vectors disagree beyond the stated absolute
///   tolerance. Only produced when a caller upgrades a soft comparison
///   to a hard failure.
/// - `LengthMismatch { left: usize, right: usize }`
///   Two coefficient vectors cannot be compared element-wise because
///   their lengths differ.
/// - `ZeroTrials`
///   The timing harness was asked for zero repetitions.
/// - `InvalidLagCount { lags: usize, len: usize }`
///   A portmanteau lag count violates `1 ≤ lags < len` for a residual
///   series of length `len`.
/// - `DegenerateResiduals`
///   A residual series has zero sample variance, so standardization and
///   autocorrelation-based statistics are undefined.
/// - `Estimation(EstimationError)`
///   An upstream estimation failure encountered while diagnosing.
///
/// Notes
/// -----
/// - Implements [`std::error::Error`] with `source()` forwarding to the
///   wrapped estimation error where applicable.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticsError {
    EstimateMismatch { max_abs_diff: f64, tol: f64 },
    LengthMismatch { left: usize, right: usize },
    ZeroTrials,
    InvalidLagCount { lags: usize, len: usize },
    DegenerateResiduals,
    Estimation(EstimationError),
}

impl std::error::Error for DiagnosticsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DiagnosticsError::Estimation(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for DiagnosticsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagnosticsError::EstimateMismatch { max_abs_diff, tol } => {
                write!(
                    f,
                    "Estimates disagree: max |Δ| = {max_abs_diff} exceeds tolerance {tol}."
                )
            }
            DiagnosticsError::LengthMismatch { left, right } => {
                write!(f, "Coefficient vectors have different lengths: {left} vs {right}.")
            }
            DiagnosticsError::ZeroTrials => {
                write!(f, "Trial count must be at least 1.")
            }
            DiagnosticsError::InvalidLagCount { lags, len } => {
                write!(
                    f,
                    "Invalid portmanteau lag count: {lags}. Must satisfy 1 ≤ lags < {len}."
                )
            }
            DiagnosticsError::DegenerateResiduals => {
                write!(f, "Residual series has zero variance; diagnostics are undefined.")
            }
            DiagnosticsError::Estimation(err) => {
                write!(f, "Estimation failure during diagnostics: {err}")
            }
        }
    }
}

impl From<EstimationError> for DiagnosticsError {
    fn from(err: EstimationError) -> Self {
        DiagnosticsError::Estimation(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` payload embedding for mismatch and lag-count variants.
    // - `From<EstimationError>` wrapping and `source()` forwarding.
    //
    // They intentionally DO NOT cover:
    // - Production of these errors by the diagnostics routines; those
    //   paths are exercised in the comparison, residuals, and timing
    //   modules.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `EstimateMismatch` embeds both the observed difference
    // and the tolerance in its `Display` message.
    //
    // Given
    // -----
    // - An `EstimateMismatch` with max_abs_diff = 0.25 and tol = 0.05.
    //
    // Expect
    // ------
    // - The message contains "0.25" and "0.05".
    fn estimate_mismatch_includes_payload_in_display() {
        // Arrange
        let err = DiagnosticsError::EstimateMismatch { max_abs_diff: 0.25, tol: 0.05 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("0.25"), "message should include the difference.\nGot: {msg}");
        assert!(msg.contains("0.05"), "message should include the tolerance.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `InvalidLagCount` reports the offending lag count and
    // the residual length.
    //
    // Given
    // -----
    // - An `InvalidLagCount` with lags = 9 and len = 4.
    //
    // Expect
    // ------
    // - The message contains "9" and "4".
    fn invalid_lag_count_includes_payload_in_display() {
        // Arrange
        let err = DiagnosticsError::InvalidLagCount { lags: 9, len: 4 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains('9'), "message should include the lag count.\nGot: {msg}");
        assert!(msg.contains('4'), "message should include the length.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure that estimation errors wrap losslessly and are exposed via
    // `source()`.
    //
    // Given
    // -----
    // - An `EstimationError::SingularMatrix { order: 2 }` converted via
    //   `From`.
    //
    // Expect
    // ------
    // - The variant holds the original error and `source()` is `Some`.
    fn from_estimation_error_wraps_and_sources() {
        // Arrange
        let inner = EstimationError::SingularMatrix { order: 2 };

        // Act
        let err: DiagnosticsError = inner.clone().into();

        // Assert
        assert_eq!(err, DiagnosticsError::Estimation(inner));
        assert!(
            std::error::Error::source(&err).is_some(),
            "wrapped estimation error should be exposed via source()"
        );
    }
}
