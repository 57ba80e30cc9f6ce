//! io — input loading for the estimation pipeline.
//!
//! Purpose
//! -------
//! Turn on-disk CSV data into validated in-memory series. This is the
//! only subtree that touches the filesystem; everything downstream works
//! on arrays and slices.
//!
//! Key behaviors
//! -------------
//! - Load a numeric column with [`load_series_csv`], enforcing the
//!   "present, numeric, finite" contract at the boundary.
//! - Resolve relative data paths against the crate manifest directory
//!   with [`resolve_data_path`] so callers are working-directory
//!   agnostic.
//!
//! Invariants & assumptions
//! ------------------------
//! - A series returned by this subtree is non-empty and entirely finite.
//!
//! Conventions
//! -----------
//! - All public functions return [`SeriesResult<T>`]; error line numbers
//!   are 1-indexed.
//!
//! Downstream usage
//! ----------------
//! - Pipeline code loads here and fits with
//!   [`YuleWalkerFit`](crate::estimation::YuleWalkerFit) and
//!   [`OlsFit`](crate::estimation::OlsFit).
//!
//! Testing notes
//! -------------
//! - Unit tests in `io::csv` run against real temporary files; the
//!   integration suite exercises a CSV-to-fit round trip.

pub mod csv;
pub mod errors;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::csv::{load_series_csv, resolve_data_path};
pub use self::errors::{SeriesError, SeriesResult};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use ar_estimation::io::prelude::*;
//
// to import the main io surface in a single line.

pub mod prelude {
    pub use super::csv::{load_series_csv, resolve_data_path};
    pub use super::errors::{SeriesError, SeriesResult};
}
