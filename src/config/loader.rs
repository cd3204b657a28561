//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading server
//! settings from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::ServerConfig;

/// Loads and provides access to the server configuration.
///
/// # Example
///
/// ```no_run
/// use unit_converter::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/server.yaml").unwrap();
/// println!("Binding to {}", loader.config().bind_address());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ServerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when the file is missing and
    /// [`EngineError::ConfigParseError`] when it contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })?;

        Ok(Self { config })
    }

    /// Loads configuration from the file, falling back to defaults when the
    /// file does not exist. Parse errors still propagate.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        match Self::load(path) {
            Ok(loader) => Ok(loader),
            Err(EngineError::ConfigNotFound { .. }) => Ok(Self {
                config: ServerConfig::default(),
            }),
            Err(err) => Err(err),
        }
    }

    /// Returns the loaded server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_is_config_not_found() {
        let err = ConfigLoader::load("./does/not/exist.yaml").unwrap_err();
        assert!(matches!(err, EngineError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_or_default_falls_back_for_missing_file() {
        let loader = ConfigLoader::load_or_default("./does/not/exist.yaml").unwrap();
        assert_eq!(loader.config(), &ServerConfig::default());
    }

    #[test]
    fn test_load_reads_shipped_config() {
        let loader = ConfigLoader::load("./config/server.yaml").unwrap();
        assert_eq!(loader.config().port, 3000);
    }
}
