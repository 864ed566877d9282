//! Configuration types for the extractor service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field has a
//! default so a partial file is valid.

use serde::Deserialize;

/// Default address the HTTP server listens on.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8501";

/// Default upper bound for an uploaded PDF (50 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to bind, e.g. `127.0.0.1:8501`.
    pub bind_address: String,
    /// Largest request body accepted by the upload routes.
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

/// Spreadsheet export settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Whether the header row of each sheet is written in bold.
    pub header_bold: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { header_bold: true }
    }
}

/// The complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Spreadsheet export settings.
    pub export: ExportConfig,
}
