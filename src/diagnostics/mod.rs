//! diagnostics — cross-checks, residual analysis, and builder timing.
//!
//! Purpose
//! -------
//! Collect the validation-and-benchmark stage of the pipeline: the
//! Yule–Walker vs OLS agreement check, residual diagnostics for plotting
//! and portmanteau testing, and the wall-clock comparison of the two
//! Toeplitz construction variants. Everything here is downstream of a
//! fit and informational unless a caller opts into hard failures.
//!
//! Key behaviors
//! -------------
//! - Compare two coefficient vectors with
//!   [`EstimateComparison::compare`](comparison::EstimateComparison::compare);
//!   a disagreement is a reported value, upgraded to an error only via
//!   [`into_result`](comparison::EstimateComparison::into_result).
//! - Form in-sample residuals and standardized residuals
//!   ([`ar_residuals`], [`standardized_residuals`]) and pool residual
//!   autocorrelations into a Ljung–Box statistic ([`LjungBoxOutcome`]).
//! - Time the two Toeplitz builders over repeated trials with
//!   [`BuilderTimings::measure`](timing::BuilderTimings::measure).
//!
//! Invariants & assumptions
//! ------------------------
//! - Diagnostics never mutate estimation state; they consume coefficient
//!   vectors and series by reference and return fresh values.
//! - Failures here mean unusable inputs (degenerate variance, bad lag or
//!   trial counts, length mismatches), not statistical disagreement.
//!
//! Conventions
//! -----------
//! - Upstream estimation failures are wrapped as
//!   [`DiagnosticsError::Estimation`] so pipeline code handles one error
//!   type.
//!
//! Downstream usage
//! ----------------
//! - Typical pipeline tail:
//!
//!   ```rust
//!   use ar_estimation::diagnostics::{BuilderTimings, EstimateComparison};
//!   use ar_estimation::estimation::{OlsFit, YuleWalkerFit};
//!
//!   let data = vec![1.0, 2.0, 1.0, 2.0, 1.0, 2.0, 1.0, 2.0, 1.0, 2.0];
//!   let yw = YuleWalkerFit::fit(&data, 1)?;
//!   let ols = OlsFit::fit(&data, 1)?;
//!
//!   let cmp = EstimateComparison::compare(
//!       yw.coefficients().view(),
//!       ols.coefficients().view(),
//!       EstimateComparison::DEFAULT_TOL,
//!   )?;
//!   let timings = BuilderTimings::measure(&yw.autocovariances().to_vec(), 1, 100)?;
//!
//!   println!("max |Δ| = {}, agrees = {}", cmp.max_abs_diff(), cmp.agrees());
//!   println!("manual: {:?}, shape_fn: {:?}", timings.manual_total(), timings.shape_fn_total());
//!   # Ok::<(), Box<dyn std::error::Error>>(())
//!   ```
//!
//! Testing notes
//! -------------
//! - Unit tests live in each submodule; the end-to-end behavior of the
//!   diagnostic tail (comparison + timing on the worked periodic
//!   example, portmanteau on simulated residuals) is exercised in
//!   `tests/integration_ar_pipeline.rs`.

pub mod comparison;
pub mod errors;
pub mod residuals;
pub mod timing;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::comparison::EstimateComparison;
pub use self::errors::{DiagnosticsError, DiagnosticsResult};
pub use self::residuals::{ar_residuals, standardized_residuals, LjungBoxOutcome};
pub use self::timing::BuilderTimings;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use ar_estimation::diagnostics::prelude::*;
//
// to import the main diagnostics surface in a single line.

pub mod prelude {
    pub use super::comparison::EstimateComparison;
    pub use super::errors::{DiagnosticsError, DiagnosticsResult};
    pub use super::residuals::LjungBoxOutcome;
    pub use super::timing::BuilderTimings;
}
