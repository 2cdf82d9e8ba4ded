//! Error Types Module
//!
//! Structured error type for the whole crate, built with `thiserror` so that
//! underlying io/calamine failures convert automatically via `?`.

use thiserror::Error;

/// Error type used across the xlsx2avito crate
///
/// # Error kinds
///
/// - `Io`: an I/O operation failed (reading the input, writing the feed)
/// - `Parse`: calamine failed to decode the spreadsheet (propagated as-is)
/// - `MissingSheet`: the requested or heuristically chosen sheet is absent
/// - `InsufficientRows`: the listing sheet is too short to contain data rows
/// - `Config`: an invalid converter configuration was rejected by `build()`
///
/// All errors are terminal for a conversion attempt: there is no retry and no
/// partial feed. Rows with an empty id cell are not errors at all; they are
/// silently skipped by design.
#[derive(Error, Debug)]
pub enum XlsxToAvitoError {
    /// An I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The spreadsheet could not be decoded
    ///
    /// Raised by calamine for corrupt files, unsupported formats and the
    /// like. The underlying error is carried unchanged.
    #[error("Failed to parse spreadsheet: {0}")]
    Parse(#[from] calamine::Error),

    /// The selected sheet does not exist in the workbook
    #[error("Sheet not found: {0}")]
    MissingSheet(String),

    /// The listing sheet has fewer rows than the fixed layout requires
    ///
    /// The layout reserves row 0 for the category banner, row 1 for column
    /// titles and rows 2-3 for service data, so anything under 5 rows cannot
    /// contain a single record.
    #[error("Listing sheet must contain at least 5 rows, found {found}")]
    InsufficientRows {
        /// Number of rows actually present in the sheet
        found: usize,
    },

    /// The converter configuration failed validation
    #[error("Configuration error: {0}")]
    Config(String),
}
