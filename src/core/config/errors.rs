//! Configuration error types and validation traits.

use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Neither a class count nor a label source was configured.
    #[error("either num_classes or a class name source must be configured")]
    MissingClassInfo,

    /// A configuration file could not be read.
    #[error("failed to read configuration file '{}'", path.display())]
    Read {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be parsed.
    #[error("failed to parse configuration file '{}'", path.display())]
    Parse {
        path: std::path::PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Error indicating that a configuration is invalid.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// A trait for validating configuration parameters.
pub trait ConfigValidator {
    /// Validates the configuration.
    fn validate(&self) -> Result<(), ConfigError>;

    /// Returns the default configuration.
    fn get_defaults() -> Self
    where
        Self: Sized;

    /// Validates that a count-like value is greater than zero.
    fn validate_positive_usize(&self, value: usize, field_name: &str) -> Result<(), ConfigError> {
        if value == 0 {
            Err(ConfigError::InvalidConfig {
                message: format!("{field_name} must be greater than 0"),
            })
        } else {
            Ok(())
        }
    }

    /// Validates that an optional file path, when set, points to an existing file.
    fn validate_existing_file(&self, path: &Path, field_name: &str) -> Result<(), ConfigError> {
        if !path.is_file() {
            Err(ConfigError::InvalidConfig {
                message: format!("{field_name} is not a readable file: {}", path.display()),
            })
        } else {
            Ok(())
        }
    }
}

/// Extension helpers for validators.
pub trait ConfigValidatorExt: ConfigValidator + Sized {
    /// Validates and returns `self`, converting the error into a [`ClassifierError`].
    ///
    /// [`ClassifierError`]: crate::core::ClassifierError
    fn validate_and_wrap(self) -> Result<Self, crate::core::ClassifierError> {
        self.validate()?;
        Ok(self)
    }
}

impl<T: ConfigValidator> ConfigValidatorExt for T {}
