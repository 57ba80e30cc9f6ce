//! io::errors — error types for series loading.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the input-loading
//! boundary: file access, CSV parsing, and the "no missing values"
//! policy on loaded series. I/O failures carry their underlying cause;
//! parse failures carry the 1-indexed line they occurred on.
//!
//! Key behaviors
//! -------------
//! - Define [`SeriesResult`] and [`SeriesError`] as the canonical result
//!   and error types for the `io` subtree.
//! - Convert `std::io::Error` via `From` so file operations compose with
//!   `?` directly.
//!
//! Invariants & assumptions
//! ------------------------
//! - Line numbers in parse errors are 1-indexed, matching what an editor
//!   or spreadsheet shows for the offending file.
//! - A parsed value that is non-finite (NaN or ±∞) is treated as a
//!   missing value and rejected at load time; downstream estimation code
//!   may therefore assume finite input from this loader.
//!
//! Conventions
//! -----------
//! - This enum intentionally does not implement `PartialEq`/`Clone`
//!   because it owns a `std::io::Error`; tests match on variants instead.
//!
//! Downstream usage
//! ----------------
//! - All public functions in `io` return [`SeriesResult<T>`].
//!
//! Testing notes
//! -------------
//! - Unit tests verify `Display` payload embedding and the
//!   `From<std::io::Error>` conversion; the loader's tests exercise each
//!   variant end to end against real temporary files.

pub type SeriesResult<T> = Result<T, SeriesError>;

/// SeriesError — error conditions for loading an input series.
///
/// Purpose
/// -------
/// Represent all failures that can occur while turning a CSV file into a
/// validated numeric series: file access problems, malformed rows or
/// fields, missing values, and an empty result column.
///
/// Variants
/// --------
/// - `Io(std::io::Error)`
///   The file could not be opened or read.
/// - `Parse { line: usize, message: String }`
///   A row is malformed: too few columns, or a field that does not
///   parse as a number (including empty fields, i.e., missing values).
/// - `NonFinite { line: usize, value: f64 }`
///   A field parsed to a non-finite number (`NaN`, ±∞); treated as a
///   missing value under the loader's policy.
/// - `EmptyColumn { column: usize }`
///   The file was read successfully but the requested column yielded no
///   observations.
///
/// Notes
/// -----
/// - Implements [`std::error::Error`] with `source()` forwarding to the
///   wrapped I/O error where applicable.
#[derive(Debug)]
pub enum SeriesError {
    Io(std::io::Error),
    Parse { line: usize, message: String },
    NonFinite { line: usize, value: f64 },
    EmptyColumn { column: usize },
}

impl std::error::Error for SeriesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SeriesError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for SeriesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeriesError::Io(err) => write!(f, "I/O error reading series: {err}"),
            SeriesError::Parse { line, message } => {
                write!(f, "Parse error at line {line}: {message}")
            }
            SeriesError::NonFinite { line, value } => {
                write!(
                    f,
                    "Non-finite value {value} at line {line}. Missing values are not allowed."
                )
            }
            SeriesError::EmptyColumn { column } => {
                write!(f, "Column {column} contains no observations.")
            }
        }
    }
}

impl From<std::io::Error> for SeriesError {
    fn from(err: std::io::Error) -> Self {
        SeriesError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` payload embedding for parse and missing-value variants.
    // - The `From<std::io::Error>` conversion and `source()` forwarding.
    //
    // They intentionally DO NOT cover:
    // - Production of these errors by the loader; io::csv tests exercise
    //   each variant against real files.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `Parse` embeds the 1-indexed line number and message.
    //
    // Given
    // -----
    // - A `Parse` error at line 17 with a column-count message.
    //
    // Expect
    // ------
    // - The `Display` output contains "17" and the message.
    fn parse_error_includes_line_and_message_in_display() {
        // Arrange
        let err = SeriesError::Parse { line: 17, message: "expected 2 columns".to_string() };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("17"), "message should include the line number.\nGot: {msg}");
        assert!(msg.contains("expected 2 columns"), "message should include detail.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `NonFinite` reports the offending line and value.
    //
    // Given
    // -----
    // - A `NonFinite` error at line 3 with value NaN.
    //
    // Expect
    // ------
    // - The `Display` output contains "3" and "NaN".
    fn non_finite_error_includes_payload_in_display() {
        // Arrange
        let err = SeriesError::NonFinite { line: 3, value: f64::NAN };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains('3'), "message should include the line number.\nGot: {msg}");
        assert!(msg.contains("NaN"), "message should include the value.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure `std::io::Error` converts via `From` and is exposed through
    // `source()`.
    //
    // Given
    // -----
    // - An `io::Error` of kind NotFound.
    //
    // Expect
    // ------
    // - The converted error is the `Io` variant with a `Some` source.
    fn from_io_error_wraps_and_sources() {
        // Arrange
        let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.csv");

        // Act
        let err: SeriesError = inner.into();

        // Assert
        assert!(matches!(err, SeriesError::Io(_)), "expected Io variant, got {err:?}");
        assert!(
            std::error::Error::source(&err).is_some(),
            "wrapped I/O error should be exposed via source()"
        );
    }
}
