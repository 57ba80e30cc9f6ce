//! estimation::yule_walker — AR coefficients from the Yule–Walker system.
//!
//! Purpose
//! -------
//! Solve the Yule–Walker equations for a univariate AR(p) model:
//!
//! ```text
//! Γ φ = γ,
//! Γ[i][j] = γ̂_{|i−j|}   (p×p symmetric Toeplitz),
//! γ      = (γ̂_1, …, γ̂_p)ᵀ,
//! ```
//!
//! where `γ̂_k` is the biased sample autocovariance at lag `k`. The
//! solution `φ` is the AR coefficient vector; the innovation variance is
//! recovered as `σ̂² = γ̂_0 − φᵀγ`.
//!
//! Key behaviors
//! -------------
//! - Validate the series and order, compute `γ̂_0 … γ̂_p`, build the
//!   Toeplitz matrix, and solve the linear system by nalgebra LU in one
//!   call, [`YuleWalkerFit::fit`].
//! - Expose the fitted coefficients, innovation variance, model order,
//!   and the autocovariance sequence used, via accessors.
//! - Report singular or numerically broken systems as
//!   [`EstimationError::SingularMatrix`] carrying the offending order.
//!
//! Invariants & assumptions
//! ------------------------
//! - `p` is small (tens at most); a dense direct solve is sufficient and
//!   no iteration or retry is performed.
//! - `coefficients().len() == order()` always holds on a successful fit.
//! - All entries of the solution are finite; a solve that produces
//!   non-finite entries is reported as a singular system, never returned.
//!
//! Conventions
//! -----------
//! - The model convention is `x_t = φ_1 x_{t−1} + … + φ_p x_{t−p} + ε_t`
//!   on the demeaned series, so `coefficients()[k]` multiplies lag
//!   `k + 1`.
//! - The `ndarray` → `nalgebra` handoff is an explicit element copy;
//!   matrices cross the boundary exactly once per fit.
//!
//! Downstream usage
//! ----------------
//! - [`crate::diagnostics::comparison`] compares `coefficients()` against
//!   the OLS estimate from [`crate::estimation::ols`].
//! - [`crate::diagnostics::residuals`] consumes the coefficients to form
//!   in-sample residuals for plotting and portmanteau checks.
//!
//! Testing notes
//! -------------
//! - Unit tests verify an exact AR(1) recovery (`φ̂_1 = γ̂_1/γ̂_0`), the
//!   singular path on a constant series, finiteness and length of the
//!   solution, the sign of the innovation variance on well-behaved data,
//!   and the validation error branches.
//! - Integration tests cover convergence to a known φ on simulated AR(1)
//!   data and agreement with OLS.

use crate::estimation::{
    autocovariance::autocovariance,
    errors::{EstimationError, EstimationResult},
    toeplitz::build_toeplitz_manual,
    validation::validate_series,
};
use nalgebra::{DMatrix, DVector};
use ndarray::Array1;

/// `YuleWalkerFit` — fitted AR(p) model from the Yule–Walker equations.
///
/// Purpose
/// -------
/// Hold the outcome of a single Yule–Walker fit: the AR coefficient
/// vector, the implied innovation variance, the model order, and the
/// autocovariance sequence the system was built from.
///
/// Fields
/// ------
/// - `coefficients`: `Array1<f64>`
///   Length-`p` AR coefficient vector `φ`; entry `k` multiplies lag
///   `k + 1`.
/// - `noise_variance`: `f64`
///   Innovation variance `σ̂² = γ̂_0 − φᵀγ`.
/// - `order`: `usize`
///   Model order `p`.
/// - `autocovariances`: `Array1<f64>`
///   The sequence `γ̂_0 … γ̂_p` used to build the system.
///
/// Invariants
/// ----------
/// - `coefficients.len() == order` and
///   `autocovariances.len() == order + 1`.
/// - Every stored value is finite; degenerate systems error out during
///   [`YuleWalkerFit::fit`] instead of producing a value.
///
/// Notes
/// -----
/// - A plain value object: it does not own the original series and is
///   cheap to clone for reporting.
#[derive(Debug, Clone)]
pub struct YuleWalkerFit {
    coefficients: Array1<f64>,
    noise_variance: f64,
    order: usize,
    autocovariances: Array1<f64>,
}

impl YuleWalkerFit {
    /// Fit an AR(p) model to a series via the Yule–Walker equations.
    ///
    /// Parameters
    /// ----------
    /// - `data`: `&[f64]`
    ///   Input series of length `n ≥ p + 1` with only finite values. The
    ///   series is demeaned internally by the autocovariance computation.
    /// - `order`: `usize`
    ///   AR model order `p`, with `1 ≤ p ≤ n − 1`.
    ///
    /// Returns
    /// -------
    /// `EstimationResult<YuleWalkerFit>`
    ///   On success, the fitted coefficients, innovation variance, order,
    ///   and autocovariances.
    ///
    /// Errors
    /// ------
    /// - `EstimationError::EmptySeries`, `NonFiniteValue`, `InvalidOrder`
    ///   From input validation, before any numeric work.
    /// - `EstimationError::SingularMatrix { order }`
    ///   The Toeplitz matrix is singular (e.g., a constant series makes
    ///   every `γ̂_k` zero) or the solve produced non-finite entries.
    ///
    /// Panics
    /// ------
    /// - Never panics under the documented constraints.
    ///
    /// Notes
    /// -----
    /// - One direct LU solve; no iteration, conditioning estimates, or
    ///   retries. Near-singular systems either fail the LU factorization
    ///   or surface non-finite coefficients, both reported as
    ///   `SingularMatrix`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ar_estimation::estimation::yule_walker::YuleWalkerFit;
    /// let data = vec![1.0, 2.0, 1.0, 2.0, 1.0, 2.0, 1.0, 2.0, 1.0, 2.0];
    /// let fit = YuleWalkerFit::fit(&data, 1).unwrap();
    ///
    /// assert_eq!(fit.coefficients().len(), 1);
    /// assert!(fit.coefficients()[0] < 0.0); // alternating series
    /// ```
    pub fn fit(data: &[f64], order: usize) -> EstimationResult<Self> {
        validate_series(data, order)?;

        let gamma = autocovariance(data, order)?;
        let gamma_lags = gamma.to_vec();
        let matrix = build_toeplitz_manual(&gamma_lags, order)?;

        // ndarray -> nalgebra bridge: copy the coefficient matrix once.
        let mut system = DMatrix::<f64>::zeros(order, order);
        for j in 0..order {
            for i in 0..order {
                system[(i, j)] = matrix[[i, j]];
            }
        }
        let rhs = DVector::<f64>::from_iterator(order, (1..=order).map(|k| gamma[k]));

        let solution = system
            .lu()
            .solve(&rhs)
            .ok_or(EstimationError::SingularMatrix { order })?;

        if solution.iter().any(|v| !v.is_finite()) {
            return Err(EstimationError::SingularMatrix { order });
        }

        let coefficients = Array1::from_iter(solution.iter().copied());
        let noise_variance =
            gamma[0] - coefficients.iter().zip(1..=order).map(|(phi, k)| phi * gamma[k]).sum::<f64>();

        Ok(YuleWalkerFit { coefficients, noise_variance, order, autocovariances: gamma })
    }

    /// AR coefficient vector `φ`; entry `k` multiplies lag `k + 1`.
    pub fn coefficients(&self) -> &Array1<f64> {
        &self.coefficients
    }

    /// Innovation variance `σ̂² = γ̂_0 − φᵀγ`.
    pub fn noise_variance(&self) -> f64 {
        self.noise_variance
    }

    /// Model order `p`.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Autocovariance sequence `γ̂_0 … γ̂_p` the system was built from.
    pub fn autocovariances(&self) -> &Array1<f64> {
        &self.autocovariances
    }
}
