//! HTTP request handlers for the extractor API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::document::DecodedDocument;
use crate::export::{XLSX_CONTENT_TYPE, export_workbook};
use crate::extraction::run_extraction;
use crate::models::{Extraction, Layout};

use super::form::render_form;
use super::request::UploadRequest;
use super::response::{ApiErrorResponse, LayoutInfo, PreviewResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    let upload_limit = state.config().server().max_upload_bytes;

    Router::new()
        .route("/", get(form_handler))
        .route("/health", get(health_handler))
        .route("/layouts", get(layouts_handler))
        .route("/extract", post(extract_handler))
        .route("/extract/preview", post(preview_handler))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}

/// Handler for GET /, the upload form.
async fn form_handler() -> Html<String> {
    Html(render_form())
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Handler for GET /layouts.
async fn layouts_handler() -> Json<Vec<LayoutInfo>> {
    Json(Layout::ALL.into_iter().map(LayoutInfo::from).collect())
}

/// Handler for POST /extract endpoint.
///
/// Accepts an upload and returns the extracted tables as a spreadsheet
/// attachment named after the layout.
async fn extract_handler(State(state): State<AppState>, multipart: Multipart) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing extraction request");

    let extraction = match extract_upload(multipart, correlation_id).await {
        Ok(extraction) => extraction,
        Err(err) => return err.into_response(),
    };

    match export_workbook(&extraction, state.config().export()) {
        Ok(file) => {
            info!(
                correlation_id = %correlation_id,
                file_name = file.file_name,
                bytes = file.bytes.len(),
                "Workbook exported"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", file.file_name),
                    ),
                ],
                file.bytes,
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Export failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /extract/preview endpoint.
///
/// Accepts the same upload as `/extract` and returns the tables as JSON.
async fn preview_handler(multipart: Multipart) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing preview request");

    match extract_upload(multipart, correlation_id).await {
        Ok(extraction) => (StatusCode::OK, Json(PreviewResponse::from(&extraction))).into_response(),
        Err(err) => err.into_response(),
    }
}

/// Reads the upload, decodes the PDF and runs the layout's extractors.
async fn extract_upload(
    multipart: Multipart,
    correlation_id: Uuid,
) -> Result<Extraction, ApiErrorResponse> {
    let upload = UploadRequest::from_multipart(multipart).await?;
    let file_name = upload.file_name.clone().unwrap_or_default();

    let (layout, bytes) = upload.into_parts().map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Rejected upload");
        ApiErrorResponse::from(err)
    })?;

    let start_time = Instant::now();
    let document = DecodedDocument::from_pdf_bytes(&bytes).map_err(|err| {
        warn!(
            correlation_id = %correlation_id,
            file_name = %file_name,
            error = %err,
            "PDF could not be decoded"
        );
        ApiErrorResponse::from(err)
    })?;

    let extraction = run_extraction(layout, &document);
    info!(
        correlation_id = %correlation_id,
        layout = layout.slug(),
        file_name = %file_name,
        pages = document.page_count(),
        records = extraction.record_count(),
        duration_us = start_time.elapsed().as_micros(),
        "Extraction completed successfully"
    );

    Ok(extraction)
}
