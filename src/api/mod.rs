//! HTTP API module for the extractor.
//!
//! This module provides the upload form and the endpoints that turn an
//! uploaded statement into spreadsheet or JSON tables.

mod form;
mod handlers;
mod request;
mod response;
mod state;

pub use form::{EXTRACTION_WARNING, render_form};
pub use handlers::create_router;
pub use request::{FILE_FIELD, LAYOUT_FIELD, UploadRequest};
pub use response::{ApiError, ApiErrorResponse, LayoutInfo, PreviewResponse, TablePreview};
pub use state::AppState;
