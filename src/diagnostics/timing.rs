//! diagnostics::timing — wall-clock comparison of the Toeplitz builders.
//!
//! Purpose
//! -------
//! Measure and report wall-clock execution time for the two Toeplitz
//! construction variants over a caller-chosen number of repetitions.
//! This is the crate's only performance-sensitive surface: one input
//! vector, two builders, two totals.
//!
//! Key behaviors
//! -------------
//! - [`BuilderTimings::measure`] runs each builder `trials` times on the
//!   same autocovariance vector, accumulating elapsed wall-clock time
//!   per variant with `std::time::Instant`.
//! - Built matrices pass through `std::hint::black_box` so the compiler
//!   cannot elide the repeated constructions.
//! - Totals and derived per-trial means are exposed via accessors; the
//!   report is informational and never fails once measurement starts.
//!
//! Invariants & assumptions
//! ------------------------
//! - Both builders see identical inputs, so the comparison is apples to
//!   apples; input validation happens once up front, and a validation
//!   failure aborts the measurement before any timing.
//! - Durations are non-negative by construction (`Instant::elapsed`).
//! - Wall-clock totals include allocator and OS noise; callers wanting
//!   statistically disciplined numbers should use the criterion bench
//!   (`benches/toeplitz.rs`), which covers the same pair.
//!
//! Conventions
//! -----------
//! - `manual` refers to [`build_toeplitz_manual`], `shape_fn` to
//!   [`build_toeplitz_shape_fn`], matching the estimation module names.
//!
//! Downstream usage
//! ----------------
//! - Pipeline code reports `manual_total()` / `shape_fn_total()` (or the
//!   per-trial means) alongside the coefficient comparison in its
//!   diagnostic output.
//!
//! Testing notes
//! -------------
//! - Unit tests verify trial bookkeeping, non-negative totals, the
//!   zero-trials guard, and propagation of builder validation errors.
//!   No test asserts which variant is faster; that is machine-dependent.

use crate::diagnostics::errors::{DiagnosticsError, DiagnosticsResult};
use crate::estimation::toeplitz::{build_toeplitz_manual, build_toeplitz_shape_fn};
use std::hint::black_box;
use std::time::{Duration, Instant};

/// `BuilderTimings` — wall-clock totals for the two Toeplitz builders.
///
/// Purpose
/// -------
/// Hold the outcome of one timing run: total elapsed wall-clock time per
/// construction variant and the repetition count they were accumulated
/// over.
///
/// Fields
/// ------
/// - `manual_total`: `Duration`
///   Total elapsed time across all trials of the nested-index builder.
/// - `shape_fn_total`: `Duration`
///   Total elapsed time across all trials of the `from_shape_fn` builder.
/// - `trials`: `usize`
///   Number of repetitions per variant; at least 1.
///
/// Invariants
/// ----------
/// - Both totals are non-negative and were measured over the same
///   `trials` count and the same input.
///
/// Notes
/// -----
/// - A value object; holds no matrices and is cheap to copy.
#[derive(Debug, Copy, Clone)]
pub struct BuilderTimings {
    manual_total: Duration,
    shape_fn_total: Duration,
    trials: usize,
}

impl BuilderTimings {
    /// Time both Toeplitz builders over repeated trials.
    ///
    /// Parameters
    /// ----------
    /// - `gamma`: `&[f64]`
    ///   Autocovariance sequence handed unchanged to both builders.
    ///   Must satisfy the builders' validation rules.
    /// - `order`: `usize`
    ///   Matrix dimension `p ≥ 1`, with `gamma.len() ≥ p`.
    /// - `trials`: `usize`
    ///   Repetition count per variant. Must be at least 1.
    ///
    /// Returns
    /// -------
    /// `DiagnosticsResult<BuilderTimings>`
    ///   Accumulated wall-clock totals for each variant.
    ///
    /// Errors
    /// ------
    /// - `DiagnosticsError::ZeroTrials`
    ///   `trials == 0`.
    /// - `DiagnosticsError::Estimation(_)`
    ///   The input fails builder validation (checked once before any
    ///   timing starts).
    ///
    /// Panics
    /// ------
    /// - Never panics under the documented constraints.
    ///
    /// Notes
    /// -----
    /// - The validated warm-up call also serves as a cache warm-up, so
    ///   the first timed trial is not systematically penalized.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ar_estimation::diagnostics::timing::BuilderTimings;
    /// let gamma = vec![2.0, 0.8, 0.3];
    /// let timings = BuilderTimings::measure(&gamma, 3, 100).unwrap();
    ///
    /// assert_eq!(timings.trials(), 100);
    /// // Durations are non-negative by construction.
    /// assert!(timings.manual_mean() <= timings.manual_total());
    /// ```
    pub fn measure(gamma: &[f64], order: usize, trials: usize) -> DiagnosticsResult<Self> {
        if trials == 0 {
            return Err(DiagnosticsError::ZeroTrials);
        }

        // Validate once up front; also warms caches for both variants.
        black_box(build_toeplitz_manual(gamma, order)?);
        black_box(build_toeplitz_shape_fn(gamma, order)?);

        let start = Instant::now();
        for _ in 0..trials {
            black_box(build_toeplitz_manual(gamma, order)?);
        }
        let manual_total = start.elapsed();

        let start = Instant::now();
        for _ in 0..trials {
            black_box(build_toeplitz_shape_fn(gamma, order)?);
        }
        let shape_fn_total = start.elapsed();

        Ok(BuilderTimings { manual_total, shape_fn_total, trials })
    }

    /// Total elapsed time for the nested-index builder.
    pub fn manual_total(&self) -> Duration {
        self.manual_total
    }

    /// Total elapsed time for the `from_shape_fn` builder.
    pub fn shape_fn_total(&self) -> Duration {
        self.shape_fn_total
    }

    /// Repetition count per variant.
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Mean per-trial duration of the nested-index builder.
    pub fn manual_mean(&self) -> Duration {
        self.manual_total / self.trials as u32
    }

    /// Mean per-trial duration of the `from_shape_fn` builder.
    pub fn shape_fn_mean(&self) -> Duration {
        self.shape_fn_total / self.trials as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimation::errors::EstimationError;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Trial bookkeeping and mean/total consistency.
    // - The zero-trials guard.
    // - Propagation of builder validation failures before timing.
    //
    // They intentionally DO NOT cover:
    // - Relative speed of the two variants (machine-dependent) or
    //   statistically disciplined measurement; the criterion bench
    //   handles the latter.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that a successful measurement reports the requested trial
    // count and internally consistent totals and means.
    //
    // Given
    // -----
    // - A valid 3-lag autocovariance vector, order = 3, trials = 50.
    //
    // Expect
    // ------
    // - trials() == 50 and each mean is no larger than its total.
    fn measure_reports_consistent_totals_and_means() {
        // Arrange
        let gamma = vec![2.0_f64, 0.8, 0.3];

        // Act
        let timings = BuilderTimings::measure(&gamma, 3, 50).unwrap();

        // Assert
        assert_eq!(timings.trials(), 50);
        assert!(timings.manual_mean() <= timings.manual_total());
        assert!(timings.shape_fn_mean() <= timings.shape_fn_total());
    }

    #[test]
    // Purpose
    // -------
    // Ensure that zero trials are rejected before any measurement.
    //
    // Given
    // -----
    // - A valid input vector and trials = 0.
    //
    // Expect
    // ------
    // - `measure` returns `Err(DiagnosticsError::ZeroTrials)`.
    fn measure_zero_trials_returns_error() {
        // Arrange
        let gamma = vec![2.0_f64, 0.8];

        // Act
        let result = BuilderTimings::measure(&gamma, 2, 0);

        // Assert
        match result {
            Err(DiagnosticsError::ZeroTrials) => (),
            other => panic!("expected ZeroTrials error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that invalid builder inputs abort the measurement with the
    // wrapped estimation error.
    //
    // Given
    // -----
    // - An empty autocovariance vector, order = 1, trials = 10.
    //
    // Expect
    // ------
    // - `measure` returns `Err(Estimation(EmptySeries))`.
    fn measure_invalid_input_propagates_estimation_error() {
        // Arrange
        let gamma: Vec<f64> = vec![];

        // Act
        let result = BuilderTimings::measure(&gamma, 1, 10);

        // Assert
        match result {
            Err(DiagnosticsError::Estimation(EstimationError::EmptySeries)) => (),
            other => panic!("expected wrapped EmptySeries error, got {other:?}"),
        }
    }
}
