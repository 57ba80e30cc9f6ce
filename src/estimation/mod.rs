//! estimation — AR(p) coefficient estimation via Toeplitz / Yule–Walker.
//!
//! Purpose
//! -------
//! Collect the numerical core of the crate: input validation, sample
//! autocovariances, symmetric Toeplitz construction (two interchangeable
//! variants), the Yule–Walker linear solve, and an independent OLS
//! cross-estimator. Together these implement the pipeline
//! "validate → autocovariance → build matrix → solve", with the OLS path
//! as an independent check on the result.
//!
//! Key behaviors
//! -------------
//! - Estimate AR(p) coefficients from a univariate series via
//!   [`YuleWalkerFit::fit`](yule_walker::YuleWalkerFit::fit).
//! - Cross-estimate the same coefficients by lagged least squares via
//!   [`OlsFit::fit`](ols::OlsFit::fit).
//! - Expose both Toeplitz builders ([`build_toeplitz_manual`],
//!   [`build_toeplitz_shape_fn`]) so diagnostics can time them against
//!   each other.
//! - Centralize input guards in [`validate_series`] /
//!   [`validate_autocovariance`] and failures in [`EstimationError`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Every public entry point validates before computing and reports
//!   failures via [`EstimationResult`]; nothing in this subtree panics on
//!   user-facing invalid input.
//! - All estimators operate on the demeaned series, so their coefficient
//!   vectors are directly comparable.
//! - Model orders are small (tens at most); all solves are direct, with
//!   no iteration or retries.
//!
//! Conventions
//! -----------
//! - Series enter as `&[f64]`; derived vectors and matrices cross module
//!   boundaries as `ndarray` types; nalgebra is an internal solver
//!   detail of `yule_walker` and `ols`.
//! - `coefficients()[k]` multiplies lag `k + 1` in every estimator.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use ar_estimation::estimation::{OlsFit, YuleWalkerFit};
//!
//!   let data = vec![1.0, 2.0, 1.0, 2.0, 1.0, 2.0, 1.0, 2.0];
//!   let yw = YuleWalkerFit::fit(&data, 1)?;
//!   let ols = OlsFit::fit(&data, 1)?;
//!   # Ok::<(), ar_estimation::estimation::EstimationError>(())
//!   ```
//!
//! - `diagnostics` consumes the fitted coefficient vectors for the
//!   cross-check, the residual diagnostics, and the builder timing.
//!
//! Testing notes
//! -------------
//! - Unit tests live in each submodule; the pipeline-level properties
//!   (AR(1) convergence, Yule–Walker vs OLS agreement, the worked
//!   periodic example) are exercised in `tests/integration_ar_pipeline.rs`.

pub mod autocovariance;
pub mod errors;
pub mod ols;
pub mod toeplitz;
pub mod validation;
pub mod yule_walker;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::autocovariance::autocovariance;
pub use self::errors::{EstimationError, EstimationResult};
pub use self::ols::OlsFit;
pub use self::toeplitz::{
    build_toeplitz_manual, build_toeplitz_shape_fn, BUILDER_EQUIVALENCE_TOL,
};
pub use self::validation::{validate_autocovariance, validate_series};
pub use self::yule_walker::YuleWalkerFit;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use ar_estimation::estimation::prelude::*;
//
// to import the main estimation surface in a single line.

pub mod prelude {
    pub use super::errors::{EstimationError, EstimationResult};
    pub use super::ols::OlsFit;
    pub use super::yule_walker::YuleWalkerFit;
}
