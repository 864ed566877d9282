//! Response types for the extractor API.
//!
//! This module defines the error response structures, the conversion of
//! [`ExtractorError`] into HTTP errors, and the table preview returned by
//! `/extract/preview`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::ExtractorError;
use crate::models::{ContributionPeriodRecord, Extraction, Layout, SalaryRecord};

use super::form::EXTRACTION_WARNING;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<ExtractorError> for ApiErrorResponse {
    fn from(error: ExtractorError) -> Self {
        let message = error.to_string();
        match error {
            ExtractorError::ConfigNotFound { .. } | ExtractorError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            ExtractorError::InvalidPdf { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_PDF",
                    message,
                    "The uploaded file could not be opened as a PDF document",
                ),
            },
            ExtractorError::LayoutNotSelected => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "LAYOUT_NOT_SELECTED",
                    message,
                    "Choose the PDF layout before uploading",
                ),
            },
            ExtractorError::UnsupportedLayout { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNSUPPORTED_LAYOUT",
                    message,
                    "Supported layouts are listed at /layouts",
                ),
            },
            ExtractorError::MissingField { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("MISSING_FILE", message),
            },
            ExtractorError::ExportError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("EXPORT_ERROR", "Export failed", message),
            },
        }
    }
}

/// Description of a supported layout, as listed by `/layouts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutInfo {
    /// Value to send in the `layout` form field.
    pub id: Layout,
    /// Human-readable name.
    pub label: String,
    /// Name of the downloaded spreadsheet.
    pub download_file_name: String,
    /// Sheets written to the spreadsheet.
    pub sheets: Vec<String>,
}

impl From<Layout> for LayoutInfo {
    fn from(layout: Layout) -> Self {
        Self {
            id: layout,
            label: layout.label().to_string(),
            download_file_name: layout.download_file_name().to_string(),
            sheets: layout.sheet_names().iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// One extracted table, as shown on screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TablePreview {
    /// Sheet the table is exported to.
    pub sheet: String,
    /// Column headers.
    pub columns: Vec<String>,
    /// Rows keyed by column header.
    pub rows: Vec<serde_json::Value>,
}

impl TablePreview {
    fn new<R: Serialize>(sheet: &str, columns: &[&str], records: &[R]) -> Self {
        Self {
            sheet: sheet.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: records
                .iter()
                .filter_map(|record| serde_json::to_value(record).ok())
                .collect(),
        }
    }
}

/// Response body for `/extract/preview`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewResponse {
    /// Layout the document was read as.
    pub layout: Layout,
    /// Reminder that extracted data must be checked against the document.
    pub warning: String,
    /// Extracted tables, in sheet order.
    pub tables: Vec<TablePreview>,
}

impl From<&Extraction> for PreviewResponse {
    fn from(extraction: &Extraction) -> Self {
        let sheets = extraction.layout().sheet_names();
        let tables = match extraction {
            Extraction::Inss {
                salaries,
                contribution_periods,
            } => vec![
                TablePreview::new(sheets[0], &SalaryRecord::COLUMNS, salaries),
                TablePreview::new(
                    sheets[1],
                    &ContributionPeriodRecord::COLUMNS,
                    contribution_periods,
                ),
            ],
            Extraction::Municipal { salaries } => {
                vec![TablePreview::new(sheets[0], &SalaryRecord::COLUMNS, salaries)]
            }
        };

        Self {
            layout: extraction.layout(),
            warning: EXTRACTION_WARNING.to_string(),
            tables,
        }
    }
}
