//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{ExtractorError, ExtractorResult};

use super::types::{ExportConfig, ExtractorConfig, ServerConfig};

/// Loads and provides access to the service configuration.
///
/// # Example
///
/// ```no_run
/// use extrator_previdenciario::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/extractor.yaml")?;
/// println!("Listening on {}", loader.server().bind_address);
/// # Ok::<(), extrator_previdenciario::error::ExtractorError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ExtractorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file does not exist or cannot be read (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> ExtractorResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ExtractorError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content, &path_str)
    }

    /// Loads configuration from the specified file, falling back to the
    /// defaults when the file does not exist.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> ExtractorResult<Self> {
        match Self::load(path) {
            Err(ExtractorError::ConfigNotFound { .. }) => Ok(Self::default()),
            other => other,
        }
    }

    /// Parses configuration from YAML text. `origin` names the source in
    /// error messages.
    pub fn from_yaml_str(content: &str, origin: &str) -> ExtractorResult<Self> {
        let config: ExtractorConfig =
            serde_yaml::from_str(content).map_err(|e| ExtractorError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { config })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Returns the HTTP server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }

    /// Returns the spreadsheet export settings.
    pub fn export(&self) -> &ExportConfig {
        &self.config.export
    }
}
