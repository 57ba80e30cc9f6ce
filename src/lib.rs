//! ar_estimation — autoregressive model estimation via Yule–Walker.
//!
//! Purpose
//! -------
//! Serve as the crate root for an AR(p) estimation pipeline: load a
//! numeric series from CSV, build the sample-autocovariance Toeplitz
//! system with two interchangeable construction variants, solve the
//! Yule–Walker equations for the coefficient vector and innovation
//! variance, and cross-check the result against an independent OLS fit
//! with residual diagnostics and builder timings.
//!
//! Key behaviors
//! -------------
//! - Re-export the core subtrees (`estimation`, `diagnostics`, `io`) as
//!   the public crate surface, plus the handful of types most callers
//!   need directly.
//! - Keep the two Toeplitz builders behaviorally interchangeable; any
//!   consumer may use either, and the diagnostics layer verifies their
//!   agreement and compares their wall-clock cost.
//!
//! Invariants & assumptions
//! ------------------------
//! - All heavy numerical work lives in the inner modules; this file is
//!   re-export glue only.
//! - Input series reaching estimation code are non-empty and entirely
//!   finite; the `io` loader and `estimation::validation` enforce this
//!   at the boundaries.
//! - Autocovariances use the biased 1/n estimator throughout, so the
//!   Toeplitz system is positive semi-definite for any input.
//!
//! Conventions
//! -----------
//! - `coefficients()[k]` multiplies lag `k + 1` everywhere in the crate.
//! - Model order is `p ≥ 1` and must be strictly less than the series
//!   length.
//! - Errors are rich per-subtree enums ([`EstimationError`],
//!   [`DiagnosticsError`], [`SeriesError`]); the Yule–Walker vs OLS
//!   agreement check is a reported value, not an error, unless the
//!   caller opts in via `EstimateComparison::into_result`.
//!
//! Downstream usage
//! ----------------
//! - Typical pipeline:
//!
//!   ```rust,no_run
//!   use ar_estimation::{
//!       diagnostics::{ar_residuals, BuilderTimings, EstimateComparison},
//!       estimation::{OlsFit, YuleWalkerFit},
//!       io::load_series_csv,
//!   };
//!   use std::path::Path;
//!
//!   let series = load_series_csv(Path::new("data/series.csv"), 0, true)?;
//!   let data = series.to_vec();
//!
//!   let yw = YuleWalkerFit::fit(&data, 2)?;
//!   let ols = OlsFit::fit(&data, 2)?;
//!
//!   let cmp = EstimateComparison::compare(
//!       yw.coefficients().view(),
//!       ols.coefficients().view(),
//!       EstimateComparison::DEFAULT_TOL,
//!   )?;
//!   let residuals = ar_residuals(&data, yw.coefficients().view())?;
//!   let timings = BuilderTimings::measure(&yw.autocovariances().to_vec(), 2, 1_000)?;
//!
//!   println!("phi = {:?}, sigma^2 = {}", yw.coefficients(), yw.noise_variance());
//!   println!("YW vs OLS max |Δ| = {} (agrees = {})", cmp.max_abs_diff(), cmp.agrees());
//!   println!("residuals for plotting: {} points", residuals.len());
//!   println!("manual {:?} vs shape_fn {:?}", timings.manual_mean(), timings.shape_fn_mean());
//!   # Ok::<(), Box<dyn std::error::Error>>(())
//!   ```
//!
//! Testing notes
//! -------------
//! - Numerical behavior is covered by unit tests inside each module;
//!   `tests/integration_ar_pipeline.rs` exercises the full
//!   load-fit-compare-diagnose flow on periodic, simulated, and CSV
//!   inputs.

pub mod diagnostics;
pub mod estimation;
pub mod io;

pub use crate::diagnostics::{
    ar_residuals, standardized_residuals, BuilderTimings, DiagnosticsError, DiagnosticsResult,
    EstimateComparison, LjungBoxOutcome,
};
pub use crate::estimation::{
    autocovariance, build_toeplitz_manual, build_toeplitz_shape_fn, EstimationError,
    EstimationResult, OlsFit, YuleWalkerFit, BUILDER_EQUIVALENCE_TOL,
};
pub use crate::io::{load_series_csv, resolve_data_path, SeriesError, SeriesResult};
