//! estimation::ols — OLS cross-estimator for AR coefficients.
//!
//! Purpose
//! -------
//! Provide an ordinary-least-squares estimate of the AR(p) coefficients
//! that is computed independently of the Yule–Walker path, so the two can
//! be cross-checked for numerical agreement. The estimator regresses the
//! demeaned series on its own first `p` lags:
//!
//! ```text
//! y_t = φ_1 y_{t−1} + … + φ_p y_{t−p} + ε_t,   y_t = x_t − x̄,
//! ```
//!
//! and solves the normal equations `(XᵀX) φ = Xᵀy` directly.
//!
//! Key behaviors
//! -------------
//! - Build the `(n − p) × p` lagged design matrix over the demeaned
//!   series and solve the normal equations by nalgebra LU,
//!   [`OlsFit::fit`].
//! - Share the validation and error surface of the Yule–Walker solver;
//!   rank-deficient designs surface as
//!   [`EstimationError::SingularMatrix`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Demeaning plays the intercept's role: no constant column is added,
//!   so the coefficient vector is directly comparable with the
//!   Yule–Walker solution, which also lives on the demeaned scale.
//! - `p` is small and `n − p ≥ p` effective rows are available after
//!   lagging (guaranteed by `validate_series` plus the row-count check).
//!
//! Conventions
//! -----------
//! - `coefficients()[k]` multiplies lag `k + 1`, matching
//!   [`YuleWalkerFit`](crate::estimation::yule_walker::YuleWalkerFit).
//! - The only shared code with the Yule–Walker path is input validation;
//!   the estimators must remain independent for the cross-check to mean
//!   anything.
//!
//! Downstream usage
//! ----------------
//! - [`crate::diagnostics::comparison`] consumes `coefficients()` from
//!   both estimators and reports their maximum absolute difference.
//!
//! Testing notes
//! -------------
//! - Unit tests verify exact recovery on a noiseless zero-mean periodic
//!   recursion, shape and finiteness of the solution, the singular path
//!   on a constant series, and the row-count guard.
//! - Agreement with Yule–Walker on long simulated series is covered by
//!   the integration tests.

use crate::estimation::{
    errors::{EstimationError, EstimationResult},
    validation::validate_series,
};
use nalgebra::{DMatrix, DVector};
use ndarray::Array1;

/// `OlsFit` — AR(p) coefficients from a lagged least-squares regression.
///
/// Purpose
/// -------
/// Hold the outcome of the OLS cross-fit: the coefficient vector and the
/// model order. The Yule–Walker fit is the primary estimate and carries
/// the richer surface (autocovariances, innovation variance).
///
/// Fields
/// ------
/// - `coefficients`: `Array1<f64>`
///   Length-`p` coefficient vector; entry `k` multiplies lag `k + 1`.
/// - `order`: `usize`
///   Model order `p`.
///
/// Invariants
/// ----------
/// - `coefficients.len() == order` and every entry is finite.
#[derive(Debug, Clone)]
pub struct OlsFit {
    coefficients: Array1<f64>,
    order: usize,
}

impl OlsFit {
    /// Fit AR(p) coefficients by OLS on the demeaned lagged regression.
    ///
    /// Parameters
    /// ----------
    /// - `data`: `&[f64]`
    ///   Input series of length `n ≥ 2p` (so the design has at least as
    ///   many rows as columns) with only finite values.
    /// - `order`: `usize`
    ///   AR model order `p`, with `1 ≤ p ≤ n − 1` and `n − p ≥ p`.
    ///
    /// Returns
    /// -------
    /// `EstimationResult<OlsFit>`
    ///   The least-squares coefficient vector on the demeaned scale.
    ///
    /// Errors
    /// ------
    /// - `EstimationError::EmptySeries`, `NonFiniteValue`, `InvalidOrder`
    ///   From input validation; `InvalidOrder` also covers `n − p < p`,
    ///   where the normal equations cannot have full rank.
    /// - `EstimationError::SingularMatrix { order }`
    ///   The Gram matrix `XᵀX` is singular (e.g., a constant series
    ///   demeans to zero) or the solve produced non-finite entries.
    ///
    /// Panics
    /// ------
    /// - Never panics under the documented constraints.
    ///
    /// Notes
    /// -----
    /// - The normal equations are adequate here: `p` is tiny and the Gram
    ///   matrix is `p × p`, so there is no need for a QR/SVD least-squares
    ///   path.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ar_estimation::estimation::ols::OlsFit;
    /// // Exactly zero-mean alternating series: x_t = −x_{t−1}.
    /// let data: Vec<f64> = (0..20).map(|t| if t % 2 == 0 { 1.0 } else { -1.0 }).collect();
    /// let fit = OlsFit::fit(&data, 1).unwrap();
    ///
    /// assert!((fit.coefficients()[0] - (-1.0)).abs() < 1e-12);
    /// ```
    pub fn fit(data: &[f64], order: usize) -> EstimationResult<Self> {
        validate_series(data, order)?;

        let n = data.len();
        let rows = n - order;
        if rows < order {
            return Err(EstimationError::InvalidOrder { order, len: n });
        }

        let mean = data.iter().sum::<f64>() / n as f64;

        // Design: row t holds lags 1..=p of observation order + t.
        let mut design = DMatrix::<f64>::zeros(rows, order);
        let mut response = DVector::<f64>::zeros(rows);
        for t in 0..rows {
            response[t] = data[order + t] - mean;
            for j in 0..order {
                design[(t, j)] = data[order + t - 1 - j] - mean;
            }
        }

        let gram = design.transpose() * &design;
        let moment = design.transpose() * &response;

        let solution = gram
            .lu()
            .solve(&moment)
            .ok_or(EstimationError::SingularMatrix { order })?;

        if solution.iter().any(|v| !v.is_finite()) {
            return Err(EstimationError::SingularMatrix { order });
        }

        Ok(OlsFit { coefficients: Array1::from_iter(solution.iter().copied()), order })
    }

    /// Coefficient vector; entry `k` multiplies lag `k + 1`.
    pub fn coefficients(&self) -> &Array1<f64> {
        &self.coefficients
    }

    /// Model order `p`.
    pub fn order(&self) -> usize {
        self.order
    }
}
