//! estimation::errors — shared error types for AR estimation routines.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias used by every stage of the AR
//! estimation pipeline: input validation, autocovariance computation,
//! Toeplitz construction, and the Yule–Walker / OLS linear solves. Keeping
//! one error surface per subtree makes `?`-based propagation uniform from
//! the lowest helper up to the public entry points.
//!
//! Key behaviors
//! -------------
//! - Define [`EstimationResult`] and [`EstimationError`] as the canonical
//!   result and error types for the `estimation` subtree.
//! - Attach human-readable `Display` messages to each variant so that
//!   diagnostics are meaningful without additional context.
//! - Carry just enough payload (offending value, order, lag, length) for
//!   callers to log or branch on without dragging whole arrays along.
//!
//! Invariants & assumptions
//! ------------------------
//! - Estimation modules validate their inputs and return
//!   [`EstimationResult<T>`] instead of panicking; a panic in this subtree
//!   indicates a programming error, not bad user input.
//! - `EstimationError` values are small, cheap to clone, and comparable,
//!   so unit tests can match on exact variants.
//!
//! Conventions
//! -----------
//! - Error messages are phrased in terms of domain constraints (e.g.,
//!   "order must satisfy 1 ≤ p ≤ n − 1") rather than implementation
//!   details.
//! - Solver failures always carry the offending model order so that a
//!   caller sweeping over orders can report which one broke.
//!
//! Downstream usage
//! ----------------
//! - All public functions in `estimation` return [`EstimationResult<T>`].
//! - `diagnostics` wraps this type via
//!   `DiagnosticsError::Estimation(EstimationError)` so pipeline-level code
//!   can use a single error type end to end.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that each variant's `Display` message embeds its
//!   payload (offending value, order, or lag).

pub type EstimationResult<T> = Result<T, EstimationError>;

/// EstimationError — error conditions for AR estimation.
///
/// Purpose
/// -------
/// Represent all validation and computation failures that can occur while
/// estimating AR(p) coefficients: malformed input series, inadmissible
/// model orders or lags, and singular Yule–Walker / normal-equation
/// systems.
///
/// Variants
/// --------
/// - `EmptySeries`
///   The input series (or autocovariance vector) contains no observations.
/// - `NonFiniteValue(value: f64)`
///   A data element is non-finite (NaN or ±∞) and cannot participate in
///   autocovariance or matrix computations.
/// - `InvalidOrder { order: usize, len: usize }`
///   The model order violates `1 ≤ order ≤ len − 1` for a series of
///   length `len`, or exceeds the lags available in an autocovariance
///   vector.
/// - `InvalidLag { lag: usize, len: usize }`
///   A requested autocovariance lag is not computable for the series
///   length (`lag ≥ len`).
/// - `SingularMatrix { order: usize }`
///   The `order × order` coefficient matrix is singular or numerically
///   broken, so the linear solve for the AR coefficients failed.
///
/// Invariants
/// ----------
/// - `SingularMatrix { order }` always reports the model order of the
///   system that failed, never an internal matrix dimension.
/// - Variants carry scalars only; no error owns series data.
///
/// Notes
/// -----
/// - Implements [`std::error::Error`] and [`std::fmt::Display`] so it
///   composes with idiomatic `?`-based propagation.
#[derive(Debug, Clone, PartialEq)]
pub enum EstimationError {
    //------ Input validation errors ------
    EmptySeries,
    NonFiniteValue(f64),
    InvalidOrder { order: usize, len: usize },
    InvalidLag { lag: usize, len: usize },
    //------ Linear-solve errors ------
    SingularMatrix { order: usize },
}

impl std::error::Error for EstimationError {}

impl std::fmt::Display for EstimationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EstimationError::EmptySeries => {
                write!(f, "Input series is empty. Need at least order + 1 observations.")
            }
            EstimationError::NonFiniteValue(value) => {
                write!(f, "Invalid data value: {value}. Must be a finite number.")
            }
            EstimationError::InvalidOrder { order, len } => {
                write!(
                    f,
                    "Invalid model order: {order}. Must satisfy 1 ≤ order ≤ {} for length {len}.",
                    len.saturating_sub(1)
                )
            }
            EstimationError::InvalidLag { lag, len } => {
                write!(f, "Invalid lag: {lag}. Must satisfy lag < n (series length {len}).")
            }
            EstimationError::SingularMatrix { order } => {
                write!(
                    f,
                    "Toeplitz system is singular or ill-conditioned at model order {order}."
                )
            }
        }
    }
}
