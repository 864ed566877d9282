//! Configuration loading for the extractor service.
//!
//! This module loads the HTTP server and export settings from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use extrator_previdenciario::config::ConfigLoader;
//!
//! let config = ConfigLoader::load_or_default("./config/extractor.yaml").unwrap();
//! println!("Upload limit: {} bytes", config.server().max_upload_bytes);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_BIND_ADDRESS, DEFAULT_MAX_UPLOAD_BYTES, ExportConfig, ExtractorConfig, ServerConfig,
};
