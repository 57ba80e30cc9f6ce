//! estimation::toeplitz — symmetric Toeplitz matrices from autocovariances.
//!
//! Purpose
//! -------
//! Construct the `p × p` symmetric Toeplitz coefficient matrix of the
//! Yule–Walker system, `M[i][j] = γ̂_{|i−j|}`, from a sample autocovariance
//! vector. Two interchangeable construction variants are provided: a
//! manual nested-index build and a build through ndarray's
//! `Array2::from_shape_fn` routine. The two must agree element-wise within
//! [`BUILDER_EQUIVALENCE_TOL`] relative tolerance.
//!
//! Key behaviors
//! -------------
//! - [`build_toeplitz_manual`] fills an explicitly allocated matrix with
//!   nested index loops, writing each `(i, j)`/`(j, i)` pair once.
//! - [`build_toeplitz_shape_fn`] delegates the index mapping to
//!   `ndarray::Array2::from_shape_fn`.
//! - Both validate their inputs through
//!   [`validate_autocovariance`](crate::estimation::validation::validate_autocovariance)
//!   and are pure: no side effects beyond the returned matrix.
//!
//! Invariants & assumptions
//! ------------------------
//! - The returned matrix is symmetric and constant along every diagonal
//!   by construction.
//! - For an autocovariance sequence of a real series, the matrix is
//!   positive semi-definite; this module does not verify definiteness,
//!   the Yule–Walker solver reports a failed solve instead.
//! - `gamma` must supply at least `order` lags (`gamma.len() ≥ order`);
//!   the Yule–Walker pipeline passes `order + 1` lags and the builders
//!   simply ignore the last one.
//!
//! Conventions
//! -----------
//! - `order` is the matrix dimension `p`, identical to the AR model order
//!   in the Yule–Walker system.
//! - The two variants exist to back the crate's construction benchmark
//!   ([`crate::diagnostics::timing`]); callers that just need the matrix
//!   should prefer [`build_toeplitz_manual`], which the solver uses.
//!
//! Downstream usage
//! ----------------
//! - [`YuleWalkerFit::fit`](crate::estimation::yule_walker::YuleWalkerFit::fit)
//!   builds its coefficient matrix here.
//! - [`BuilderTimings::measure`](crate::diagnostics::timing::BuilderTimings::measure)
//!   times both variants on the same input.
//!
//! Testing notes
//! -------------
//! - Unit tests verify element-wise agreement of the two variants within
//!   [`BUILDER_EQUIVALENCE_TOL`], symmetry, diagonal constancy, exact
//!   entry placement on a hand-built example, and the shared validation
//!   error branches.

use crate::estimation::{errors::EstimationResult, validation::validate_autocovariance};
use ndarray::Array2;

/// Relative tolerance within which the two construction variants must
/// agree element-wise. Fixed here since the numerical-equivalence check is
/// part of this module's contract.
pub const BUILDER_EQUIVALENCE_TOL: f64 = 1e-8;

/// Build the `order × order` symmetric Toeplitz matrix by nested indexing.
///
/// Parameters
/// ----------
/// - `gamma`: `&[f64]`
///   Autocovariance sequence `γ̂_0, γ̂_1, …` with `gamma.len() ≥ order`
///   finite entries.
/// - `order`: `usize`
///   Matrix dimension `p ≥ 1`.
///
/// Returns
/// -------
/// `EstimationResult<Array2<f64>>`
///   The matrix `M` with `M[i][j] = γ̂_{|i−j|}`.
///
/// Errors
/// ------
/// - Any error from
///   [`validate_autocovariance`](crate::estimation::validation::validate_autocovariance):
///   empty input, non-finite entries, or `order` out of range.
///
/// Panics
/// ------
/// - Never panics under the documented constraints.
///
/// Notes
/// -----
/// - Each symmetric pair is written once: the loops run over the lower
///   triangle (`j ≤ i`) and mirror off-diagonal entries.
///
/// Examples
/// --------
/// ```rust
/// # use ar_estimation::estimation::toeplitz::build_toeplitz_manual;
/// let gamma = vec![2.0, 0.8, 0.3];
/// let m = build_toeplitz_manual(&gamma, 3).unwrap();
///
/// assert_eq!(m[[0, 0]], 2.0);
/// assert_eq!(m[[2, 0]], 0.3);
/// assert_eq!(m[[0, 2]], 0.3);
/// ```
pub fn build_toeplitz_manual(gamma: &[f64], order: usize) -> EstimationResult<Array2<f64>> {
    validate_autocovariance(gamma, order)?;

    let mut matrix = Array2::<f64>::zeros((order, order));
    for i in 0..order {
        for j in 0..=i {
            let value = gamma[i - j];
            matrix[[i, j]] = value;
            if i != j {
                matrix[[j, i]] = value;
            }
        }
    }

    Ok(matrix)
}

/// Build the same symmetric Toeplitz matrix via `Array2::from_shape_fn`.
///
/// Parameters
/// ----------
/// - `gamma`: `&[f64]`
///   Autocovariance sequence with `gamma.len() ≥ order` finite entries.
/// - `order`: `usize`
///   Matrix dimension `p ≥ 1`.
///
/// Returns
/// -------
/// `EstimationResult<Array2<f64>>`
///   The matrix `M` with `M[i][j] = γ̂_{|i−j|}`, numerically identical to
///   the output of [`build_toeplitz_manual`] (both read the same `gamma`
///   entries; agreement within [`BUILDER_EQUIVALENCE_TOL`] is asserted in
///   tests and checked by the timing harness).
///
/// Errors
/// ------
/// - Any error from
///   [`validate_autocovariance`](crate::estimation::validation::validate_autocovariance).
///
/// Panics
/// ------
/// - Never panics under the documented constraints.
///
/// Notes
/// -----
/// - The index mapping `(i, j) ↦ γ̂_{|i−j|}` is handed to ndarray's shape
///   constructor; allocation and traversal order are the library's
///   concern, which is exactly what the construction benchmark compares
///   against the manual variant.
pub fn build_toeplitz_shape_fn(gamma: &[f64], order: usize) -> EstimationResult<Array2<f64>> {
    validate_autocovariance(gamma, order)?;

    let matrix = Array2::from_shape_fn((order, order), |(i, j)| {
        let lag = if i >= j { i - j } else { j - i };
        gamma[lag]
    });

    Ok(matrix)
}
