//! Service-level configuration: the HTTP listener plus the classifier.

use super::classifier::ClassifierConfig;
use super::errors::{ConfigError, ConfigValidator};
use crate::core::constants::{DEFAULT_BODY_LIMIT_BYTES, DEFAULT_HOST, DEFAULT_PORT};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Maximum accepted request body size in bytes.
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}

impl ServerConfig {
    /// Address string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl ConfigValidator for ServerConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::InvalidConfig {
                message: "host must not be empty".to_string(),
            });
        }
        self.validate_positive_usize(self.body_limit_bytes, "body_limit_bytes")
    }

    fn get_defaults() -> Self {
        Self::default()
    }
}

/// Complete configuration of the classification service.
///
/// ```rust
/// use diatom_classifier::core::config::ServiceConfig;
///
/// let config: ServiceConfig = serde_json::from_str(r#"{
///     "classifier": { "model_path": "models/diatoms.onnx", "num_classes": 6 },
///     "server": { "port": 9000 }
/// }"#).unwrap();
/// assert_eq!(config.server.bind_address(), "0.0.0.0:9000");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Classifier and catalog configuration.
    pub classifier: ClassifierConfig,
    /// HTTP listener configuration.
    pub server: ServerConfig,
}

impl ServiceConfig {
    /// Reads a JSON configuration file.
    ///
    /// The result is not validated; CLI overrides are usually applied first.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl ConfigValidator for ServiceConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.classifier.validate()?;
        self.server.validate()
    }

    fn get_defaults() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_server_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
        assert_eq!(config.body_limit_bytes, 10 * 1024 * 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_server_rejects_empty_host() {
        let config = ServerConfig {
            host: " ".to_string(),
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"classifier": {{"model_path": "w.onnx", "class_names": ["A", "B"]}}}}"#
        )
        .unwrap();

        let config = ServiceConfig::from_json_file(file.path()).unwrap();
        assert_eq!(
            config.classifier.class_names,
            Some(vec!["A".to_string(), "B".to_string()])
        );
        assert_eq!(config.server, ServerConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bundled_config_is_valid() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/diatoms.json");
        let config = ServiceConfig::from_json_file(path).unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.classifier.class_names.as_ref().map(Vec::len), Some(6));
        assert_eq!(config.classifier.get_session_pool_size(), 2);
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_from_json_file_errors() {
        assert!(matches!(
            ServiceConfig::from_json_file("/nonexistent/config.json"),
            Err(ConfigError::Read { .. })
        ));

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(matches!(
            ServiceConfig::from_json_file(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }
}
