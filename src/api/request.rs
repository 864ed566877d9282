//! Upload parsing for the extractor API.
//!
//! The upload form posts `multipart/form-data` with a `layout` field and a
//! `file` field holding the PDF.

use axum::body::Bytes;
use axum::extract::Multipart;
use tracing::debug;

use crate::error::{ExtractorError, ExtractorResult};
use crate::models::Layout;

use super::response::{ApiError, ApiErrorResponse};

/// Form field carrying the selected layout.
pub const LAYOUT_FIELD: &str = "layout";

/// Form field carrying the PDF document.
pub const FILE_FIELD: &str = "file";

/// The fields of one upload, as received.
#[derive(Debug, Default)]
pub struct UploadRequest {
    /// Raw value of the layout select, if sent.
    pub layout: Option<String>,
    /// Client-side file name of the PDF, if sent.
    pub file_name: Option<String>,
    /// PDF contents, if sent.
    pub file: Option<Bytes>,
}

impl UploadRequest {
    /// Reads the known fields from a multipart body, ignoring any others.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiErrorResponse> {
        let mut upload = UploadRequest::default();

        while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                LAYOUT_FIELD => {
                    upload.layout = Some(field.text().await.map_err(upload_error)?);
                }
                FILE_FIELD => {
                    upload.file_name = field.file_name().map(str::to_string);
                    upload.file = Some(field.bytes().await.map_err(upload_error)?);
                }
                _ => debug!(field = %name, "Ignoring unknown upload field"),
            }
        }

        Ok(upload)
    }

    /// Validates the upload into a layout and non-empty PDF bytes.
    ///
    /// The layout is checked first: without a selected layout nothing else
    /// about the upload matters.
    pub fn into_parts(self) -> ExtractorResult<(Layout, Bytes)> {
        let layout = Layout::from_selection(self.layout.as_deref().unwrap_or_default())?;
        let file = self
            .file
            .filter(|bytes| !bytes.is_empty())
            .ok_or_else(|| ExtractorError::MissingField {
                field: FILE_FIELD.to_string(),
            })?;
        Ok((layout, file))
    }
}

fn upload_error(err: axum::extract::multipart::MultipartError) -> ApiErrorResponse {
    ApiErrorResponse {
        status: err.status(),
        error: ApiError::with_details("INVALID_UPLOAD", "Failed to read upload", err.body_text()),
    }
}
