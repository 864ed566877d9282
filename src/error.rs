//! Error types for the extractor.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the conditions that can stop a request. Extraction itself never
//! fails: missing text or missing patterns simply produce fewer records.

use thiserror::Error;

/// The main error type for the extractor.
///
/// # Example
///
/// ```
/// use extrator_previdenciario::error::ExtractorError;
///
/// let error = ExtractorError::ConfigNotFound {
///     path: "/missing/extractor.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/extractor.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum ExtractorError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The uploaded bytes could not be opened as a PDF document.
    #[error("Invalid PDF document: {message}")]
    InvalidPdf {
        /// The decoder's description of the failure.
        message: String,
    },

    /// No layout was chosen before uploading.
    #[error("No document layout selected")]
    LayoutNotSelected,

    /// The requested layout is not one of the supported layouts.
    #[error("Unsupported document layout: {layout}")]
    UnsupportedLayout {
        /// The layout identifier that was requested.
        layout: String,
    },

    /// A required upload field was not present.
    #[error("Missing upload field: {field}")]
    MissingField {
        /// Name of the missing form field.
        field: String,
    },

    /// The spreadsheet could not be written.
    #[error("Failed to export workbook: {message}")]
    ExportError {
        /// A description of the export failure.
        message: String,
    },
}

impl From<rust_xlsxwriter::XlsxError> for ExtractorError {
    fn from(error: rust_xlsxwriter::XlsxError) -> Self {
        ExtractorError::ExportError {
            message: error.to_string(),
        }
    }
}

/// A type alias for Results that return ExtractorError.
pub type ExtractorResult<T> = Result<T, ExtractorError>;
