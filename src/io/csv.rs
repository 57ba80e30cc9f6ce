//! io::csv — CSV column loading for input series.
//!
//! Purpose
//! -------
//! Read one numeric column from a CSV (or equivalent comma-separated)
//! file into an `Array1<f64>` suitable for the estimation pipeline, and
//! resolve data paths robustly against the process's working directory.
//! The loader enforces the pipeline's input contract at the boundary:
//! every observation present, numeric, and finite.
//!
//! Key behaviors
//! -------------
//! - [`load_series_csv`] parses the file line by line with a buffered
//!   reader, skipping an optional header row and blank lines, and
//!   collects the requested 0-indexed column.
//! - Malformed rows (too few columns), unparseable or empty fields, and
//!   non-finite parsed values are load-time errors carrying the
//!   1-indexed offending line.
//! - [`resolve_data_path`] re-anchors a non-existing relative path at
//!   the crate manifest directory, so notebooks, tests, and rendering
//!   tools can run from any working directory.
//!
//! Invariants & assumptions
//! ------------------------
//! - A series returned by [`load_series_csv`] is non-empty and entirely
//!   finite; downstream validation of those properties cannot fail on
//!   it.
//! - Fields are comma-separated and trimmed; quoting and escaped commas
//!   are not supported (the input files for this pipeline are plain
//!   single-column exports).
//!
//! Conventions
//! -----------
//! - `column` is 0-indexed; error line numbers are 1-indexed to match
//!   editors and spreadsheets.
//!
//! Downstream usage
//! ----------------
//! - Pipeline code loads the series here and hands the array's slice to
//!   [`YuleWalkerFit::fit`](crate::estimation::YuleWalkerFit::fit) and
//!   [`OlsFit::fit`](crate::estimation::OlsFit::fit).
//!
//! Testing notes
//! -------------
//! - Unit tests write real temporary files and cover the happy path
//!   (with and without header), each error variant, blank-line
//!   tolerance, and manifest-anchored path resolution.

use crate::io::errors::{SeriesError, SeriesResult};
use ndarray::Array1;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Load one numeric column from a CSV file.
///
/// Parameters
/// ----------
/// - `path`: `&Path`
///   File to read. Resolved through [`resolve_data_path`] first, so a
///   relative path works regardless of the working directory.
/// - `column`: `usize`
///   0-indexed column to extract.
/// - `has_header`: `bool`
///   If `true`, the first non-blank line is skipped.
///
/// Returns
/// -------
/// `SeriesResult<Array1<f64>>`
///   The column's values in file order; non-empty and entirely finite.
///
/// Errors
/// ------
/// - `SeriesError::Io(_)`
///   The file could not be opened or a line could not be read.
/// - `SeriesError::Parse { line, message }`
///   A row has fewer than `column + 1` fields, or the field is empty or
///   not a number.
/// - `SeriesError::NonFinite { line, value }`
///   The field parsed to `NaN` or ±∞ (a missing-value encoding).
/// - `SeriesError::EmptyColumn { column }`
///   No observations were collected (empty file, or header/blank lines
///   only).
///
/// Panics
/// ------
/// - Never panics.
///
/// Examples
/// --------
/// ```rust,no_run
/// # use ar_estimation::io::csv::load_series_csv;
/// # use std::path::Path;
/// let series = load_series_csv(Path::new("data/series.csv"), 0, true)?;
/// assert!(series.len() > 0);
/// # Ok::<(), ar_estimation::io::SeriesError>(())
/// ```
pub fn load_series_csv(path: &Path, column: usize, has_header: bool) -> SeriesResult<Array1<f64>> {
    let resolved = resolve_data_path(path);
    let file = File::open(&resolved)?;
    let reader = BufReader::new(file);

    let mut values = Vec::new();
    let mut header_pending = has_header;

    for (line_idx, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if header_pending {
            header_pending = false;
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() <= column {
            return Err(SeriesError::Parse {
                line: line_idx + 1,
                message: format!("expected at least {} columns, got {}", column + 1, fields.len()),
            });
        }

        let field = fields[column].trim();
        if field.is_empty() {
            return Err(SeriesError::Parse {
                line: line_idx + 1,
                message: format!("missing value in column {column}"),
            });
        }

        let value: f64 = field.parse().map_err(|_| SeriesError::Parse {
            line: line_idx + 1,
            message: format!("could not parse {field:?} as a number"),
        })?;

        if !value.is_finite() {
            return Err(SeriesError::NonFinite { line: line_idx + 1, value });
        }

        values.push(value);
    }

    if values.is_empty() {
        return Err(SeriesError::EmptyColumn { column });
    }

    Ok(Array1::from_vec(values))
}

/// Resolve a data path robustly against the working directory.
///
/// Parameters
/// ----------
/// - `path`: `&Path`
///   Requested path, absolute or relative.
///
/// Returns
/// -------
/// `PathBuf`
///   `path` unchanged if it exists or is absolute; otherwise the path
///   re-anchored at the crate manifest directory. The returned path is
///   not guaranteed to exist; opening it reports the usual I/O error if
///   it does not.
///
/// Notes
/// -----
/// - Rendering tools (and test harnesses) frequently run with a working
///   directory other than the project root; anchoring at the manifest
///   directory makes relative data paths stable across both.
pub fn resolve_data_path(path: &Path) -> PathBuf {
    if path.is_absolute() || path.exists() {
        return path.to_path_buf();
    }
    Path::new(env!("CARGO_MANIFEST_DIR")).join(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::io::Write;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The happy path with and without a header row, including blank
    //   lines and surrounding whitespace.
    // - Each error variant: missing file, short rows, unparseable and
    //   empty fields, non-finite values, and an empty column.
    // - Manifest anchoring in `resolve_data_path`.
    //
    // They intentionally DO NOT cover:
    // - Quoted fields or escaped commas; the loader documents plain
    //   comma-separated input only.
    // -------------------------------------------------------------------------

    fn write_temp_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    // Purpose
    // -------
    // Verify that a well-formed single-column file with a header loads
    // in order, skipping the header and a blank line.
    //
    // Given
    // -----
    // - A file "value\n1.5\n\n-2.0\n3.25\n" and column 0 with header.
    //
    // Expect
    // ------
    // - The series [1.5, −2.0, 3.25].
    fn load_series_csv_reads_header_file_in_order() {
        // Arrange
        let file = write_temp_csv("value\n1.5\n\n-2.0\n3.25\n");

        // Act
        let series = load_series_csv(file.path(), 0, true).unwrap();

        // Assert
        assert_eq!(series.len(), 3);
        assert_abs_diff_eq!(series[0], 1.5, epsilon = 0.0);
        assert_abs_diff_eq!(series[1], -2.0, epsilon = 0.0);
        assert_abs_diff_eq!(series[2], 3.25, epsilon = 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify that the requested column is extracted from a two-column
    // headerless file.
    //
    // Given
    // -----
    // - Rows "a,1.0", "b,2.0" and column = 1 without header.
    //
    // Expect
    // ------
    // - The series [1.0, 2.0].
    fn load_series_csv_extracts_requested_column() {
        // Arrange
        let file = write_temp_csv("a,1.0\nb,2.0\n");

        // Act
        let series = load_series_csv(file.path(), 1, false).unwrap();

        // Assert
        assert_eq!(series.len(), 2);
        assert_abs_diff_eq!(series[0], 1.0, epsilon = 0.0);
        assert_abs_diff_eq!(series[1], 2.0, epsilon = 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a non-existing file surfaces as the Io variant.
    //
    // Given
    // -----
    // - A path that exists nowhere (absolute, so no manifest anchoring).
    //
    // Expect
    // ------
    // - `load_series_csv` returns `Err(SeriesError::Io(_))`.
    fn load_series_csv_missing_file_returns_io_error() {
        // Arrange
        let path = Path::new("/nonexistent/ar_estimation_test.csv");

        // Act
        let result = load_series_csv(path, 0, false);

        // Assert
        match result {
            Err(SeriesError::Io(_)) => (),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that a row with too few columns is rejected with the
    // 1-indexed line number.
    //
    // Given
    // -----
    // - Rows "1.0,2.0" then "3.0" while requesting column 1.
    //
    // Expect
    // ------
    // - `Parse { line: 2, .. }`.
    fn load_series_csv_short_row_returns_parse_error() {
        // Arrange
        let file = write_temp_csv("1.0,2.0\n3.0\n");

        // Act
        let result = load_series_csv(file.path(), 1, false);

        // Assert
        match result {
            Err(SeriesError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure an empty field (a missing value) is a parse error rather
    // than silently skipped or defaulted.
    //
    // Given
    // -----
    // - Rows "1.0", "", " ,2.0" style input: second data row has an
    //   empty first field.
    //
    // Expect
    // ------
    // - `Parse { line: 2, .. }` naming the missing value.
    fn load_series_csv_empty_field_returns_parse_error() {
        // Arrange
        let file = write_temp_csv("1.0\n,2.0\n");

        // Act
        let result = load_series_csv(file.path(), 0, false);

        // Assert
        match result {
            Err(SeriesError::Parse { line, message }) => {
                assert_eq!(line, 2);
                assert!(message.contains("missing value"), "unexpected message: {message}");
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that an unparseable field is rejected with a message
    // naming the offending text.
    //
    // Given
    // -----
    // - A row containing "abc" in the requested column.
    //
    // Expect
    // ------
    // - `Parse { line: 1, .. }` with "abc" in the message.
    fn load_series_csv_non_numeric_field_returns_parse_error() {
        // Arrange
        let file = write_temp_csv("abc\n1.0\n");

        // Act
        let result = load_series_csv(file.path(), 0, false);

        // Assert
        match result {
            Err(SeriesError::Parse { line, message }) => {
                assert_eq!(line, 1);
                assert!(message.contains("abc"), "unexpected message: {message}");
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure a field that parses to NaN is treated as a missing value
    // via the NonFinite variant.
    //
    // Given
    // -----
    // - Rows "1.0" then "NaN".
    //
    // Expect
    // ------
    // - `NonFinite { line: 2, value }` with a non-finite payload.
    fn load_series_csv_nan_field_returns_non_finite_error() {
        // Arrange
        let file = write_temp_csv("1.0\nNaN\n");

        // Act
        let result = load_series_csv(file.path(), 0, false);

        // Assert
        match result {
            Err(SeriesError::NonFinite { line, value }) => {
                assert_eq!(line, 2);
                assert!(!value.is_finite(), "payload should be non-finite, got {value}");
            }
            other => panic!("expected NonFinite error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that a header-only file yields `EmptyColumn` rather than
    // an empty array.
    //
    // Given
    // -----
    // - A file containing just "value\n" read with header skipping.
    //
    // Expect
    // ------
    // - `EmptyColumn { column: 0 }`.
    fn load_series_csv_header_only_returns_empty_column() {
        // Arrange
        let file = write_temp_csv("value\n");

        // Act
        let result = load_series_csv(file.path(), 0, true);

        // Assert
        match result {
            Err(SeriesError::EmptyColumn { column }) => assert_eq!(column, 0),
            other => panic!("expected EmptyColumn error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the path-resolution policy: absolute and existing paths
    // pass through unchanged, while a non-existing relative path is
    // anchored at the crate manifest directory.
    //
    // Given
    // -----
    // - An existing temp file, an absolute path, and a made-up relative
    //   path.
    //
    // Expect
    // ------
    // - Pass-through for the first two; manifest prefix for the third.
    fn resolve_data_path_anchors_missing_relative_paths() {
        // Arrange
        let file = write_temp_csv("1.0\n");
        let missing_relative = Path::new("data/definitely_missing.csv");

        // Act
        let existing = resolve_data_path(file.path());
        let anchored = resolve_data_path(missing_relative);

        // Assert
        assert_eq!(existing, file.path());
        assert!(
            anchored.starts_with(env!("CARGO_MANIFEST_DIR")),
            "missing relative path should be manifest-anchored, got {anchored:?}"
        );
    }
}
