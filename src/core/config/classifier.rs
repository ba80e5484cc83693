//! Classifier configuration.

use super::errors::{ConfigError, ConfigValidator};
use super::onnx::OrtSessionConfig;
use crate::core::constants::DEFAULT_MODEL_PATH;
use crate::core::errors::ClassifierError;
use crate::domain::ClassCatalog;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration consumed by the model provisioner and the class catalog.
///
/// The weights artifact path is treated as an opaque input: a missing file is
/// not a configuration error, it is handled by provisioning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Path to the ONNX weights artifact.
    pub model_path: PathBuf,
    /// Name used in logs and health reports (defaults to the file stem).
    pub model_name: Option<String>,
    /// Ordered class labels; index `i` names model output `i`.
    pub class_names: Option<Vec<String>>,
    /// File with one class label per line.
    pub class_names_path: Option<PathBuf>,
    /// Width of the model output. Defaults to the number of labels.
    pub num_classes: Option<usize>,
    /// Name of the ONNX graph input (defaults to the first declared input).
    pub input_name: Option<String>,
    /// Size of the session pool used for concurrent requests (>= 1).
    pub session_pool_size: Option<usize>,
    /// ONNX Runtime session configuration.
    pub ort_session: Option<OrtSessionConfig>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            model_name: None,
            class_names: None,
            class_names_path: None,
            num_classes: None,
            input_name: None,
            session_pool_size: Some(1),
            ort_session: None,
        }
    }
}

impl ClassifierConfig {
    /// Creates a configuration for the given weights artifact.
    pub fn new(model_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
            ..Self::default()
        }
    }

    /// Sets the weights artifact path.
    pub fn model_path(mut self, model_path: impl Into<PathBuf>) -> Self {
        self.model_path = model_path.into();
        self
    }

    /// Sets the model name.
    pub fn model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = Some(model_name.into());
        self
    }

    /// Sets the ordered class labels.
    pub fn class_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.class_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the file the class labels are read from.
    pub fn class_names_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.class_names_path = Some(path.into());
        self
    }

    /// Sets the model output width.
    pub fn num_classes(mut self, num_classes: usize) -> Self {
        self.num_classes = Some(num_classes);
        self
    }

    /// Sets the ONNX graph input name.
    pub fn input_name(mut self, input_name: impl Into<String>) -> Self {
        self.input_name = Some(input_name.into());
        self
    }

    /// Sets the session pool size.
    pub fn session_pool_size(mut self, size: usize) -> Self {
        self.session_pool_size = Some(size);
        self
    }

    /// Sets the ONNX Runtime session configuration.
    pub fn ort_session(mut self, cfg: OrtSessionConfig) -> Self {
        self.ort_session = Some(cfg);
        self
    }

    /// Gets the effective session pool size.
    pub fn get_session_pool_size(&self) -> usize {
        self.session_pool_size.unwrap_or(1).max(1)
    }

    /// Gets the model name, falling back to the artifact's file stem.
    pub fn get_model_name(&self) -> String {
        self.model_name
            .clone()
            .or_else(|| {
                self.model_path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .map(|s| s.to_string())
            })
            .unwrap_or_else(|| "unknown_model".to_string())
    }

    /// Resolves the class catalog and the model output width.
    ///
    /// Labels come from `class_names` or `class_names_path`. The output width
    /// is `num_classes` when set, otherwise the number of labels. Without any
    /// labels the catalog is made of `Class_<i>` placeholders.
    pub fn resolve_catalog(&self) -> Result<(ClassCatalog, usize), ClassifierError> {
        self.validate()?;

        let labels = match (&self.class_names, &self.class_names_path) {
            (Some(names), _) => Some(names.clone()),
            (None, Some(path)) => Some(crate::utils::read_class_names(path)?),
            (None, None) => None,
        };

        match (labels, self.num_classes) {
            (Some(labels), num_classes) => {
                let catalog = ClassCatalog::new(labels);
                let num_classes = num_classes.unwrap_or(catalog.len());
                if num_classes == 0 {
                    return Err(ClassifierError::config_error(
                        "class catalog is empty and num_classes is not set",
                    ));
                }
                Ok((catalog, num_classes))
            }
            (None, Some(num_classes)) => Ok((ClassCatalog::placeholder(num_classes), num_classes)),
            (None, None) => Err(ConfigError::MissingClassInfo.into()),
        }
    }
}

impl ConfigValidator for ClassifierConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.class_names.is_none()
            && self.class_names_path.is_none()
            && self.num_classes.is_none()
        {
            return Err(ConfigError::MissingClassInfo);
        }

        if self.class_names.is_some() && self.class_names_path.is_some() {
            return Err(ConfigError::InvalidConfig {
                message: "class_names and class_names_path are mutually exclusive".to_string(),
            });
        }

        if let Some(num_classes) = self.num_classes {
            self.validate_positive_usize(num_classes, "num_classes")?;
        }

        if let Some(path) = &self.class_names_path {
            self.validate_existing_file(path, "class_names_path")?;
        }

        if let Some(size) = self.session_pool_size {
            self.validate_positive_usize(size, "session_pool_size")?;
        }

        if let Some(ort) = &self.ort_session {
            if let Some(threads) = ort.intra_threads {
                self.validate_positive_usize(threads, "ort_session.intra_threads")?;
            }
            if let Some(threads) = ort.inter_threads {
                self.validate_positive_usize(threads, "ort_session.inter_threads")?;
            }
        }

        Ok(())
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
    fn test_missing_class_info_is_rejected() {
        let config = ClassifierConfig::new("model.onnx");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingClassInfo)
        ));
    }

    #[test]
    fn test_zero_values_are_rejected() {
        let config = ClassifierConfig::new("model.onnx").num_classes(0);
        assert!(config.validate().is_err());

        let config = ClassifierConfig::new("model.onnx")
            .num_classes(4)
            .session_pool_size(0);
        assert!(config.validate().is_err());

        let config = ClassifierConfig::new("model.onnx")
            .num_classes(4)
            .ort_session(OrtSessionConfig::new().with_intra_threads(0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_model_file_is_not_a_config_error() {
        let config = ClassifierConfig::new("/nonexistent/weights.onnx").num_classes(30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_resolve_catalog_from_names() {
        let config = ClassifierConfig::new("model.onnx").class_names(["Navicula", "Nitzschia"]);
        let (catalog, num_classes) = config.resolve_catalog().unwrap();
        assert_eq!(num_classes, 2);
        assert_eq!(catalog.get(1), Some("Nitzschia"));
    }

    #[test]
    fn test_resolve_catalog_num_classes_overrides_label_count() {
        let config = ClassifierConfig::new("model.onnx")
            .class_names(["A", "B", "C", "D", "E", "F"])
            .num_classes(30);
        let (catalog, num_classes) = config.resolve_catalog().unwrap();
        assert_eq!(catalog.len(), 6);
        assert_eq!(num_classes, 30);
    }

    #[test]
    fn test_resolve_catalog_placeholders() {
        let config = ClassifierConfig::new("model.onnx").num_classes(3);
        let (catalog, num_classes) = config.resolve_catalog().unwrap();
        assert_eq!(num_classes, 3);
        assert_eq!(catalog.get(2), Some("Class_2"));
    }

    #[test]
    fn test_resolve_catalog_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Asterionella").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "Cyclotella").unwrap();

        let config = ClassifierConfig::new("model.onnx").class_names_path(file.path());
        let (catalog, num_classes) = config.resolve_catalog().unwrap();
        assert_eq!(num_classes, 2);
        assert_eq!(catalog.get(0), Some("Asterionella"));
        assert_eq!(catalog.get(1), Some("Cyclotella"));
    }

    #[test]
    fn test_names_and_path_are_exclusive() {
        let file = NamedTempFile::new().unwrap();
        let config = ClassifierConfig::new("model.onnx")
            .class_names(["A"])
            .class_names_path(file.path());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_model_name_defaults_to_file_stem() {
        let config = ClassifierConfig::new("weights/efficientnet_b0.onnx").num_classes(2);
        assert_eq!(config.get_model_name(), "efficientnet_b0");
        assert_eq!(config.model_name("diatoms").get_model_name(), "diatoms");
    }

    #[test]
    fn test_deserialize_from_json() {
        let config: ClassifierConfig = serde_json::from_str(
            r#"{"model_path": "w.onnx", "num_classes": 30, "session_pool_size": 2}"#,
        )
        .unwrap();
        assert_eq!(config.model_path, PathBuf::from("w.onnx"));
        assert_eq!(config.num_classes, Some(30));
        assert_eq!(config.get_session_pool_size(), 2);
        assert!(config.class_names.is_none());
    }
}
