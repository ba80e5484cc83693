//! Startup provisioning of the classifier.

use crate::core::config::ClassifierConfig;
use crate::core::{ImageTensor, ProvisioningError};
use crate::models::{ModelHandle, OnnxClassifier, UntrainedClassifier};
use tracing::{info, warn};

/// Builds the classifier shared by every request.
///
/// [`load`](Self::load) and [`fallback`](Self::fallback) are the two explicit
/// branches; [`provision`](Self::provision) picks between them and never fails.
#[derive(Debug, Clone)]
pub struct ModelProvisioner {
    config: ClassifierConfig,
    num_classes: usize,
}

impl ModelProvisioner {
    /// Creates a provisioner for `num_classes` outputs.
    pub fn new(config: ClassifierConfig, num_classes: usize) -> Self {
        Self {
            config,
            num_classes,
        }
    }

    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    /// Loads the trained classifier from the weights artifact.
    ///
    /// # Errors
    ///
    /// * `ArtifactNotFound` when the file does not exist.
    /// * `Load` when ONNX Runtime cannot open it.
    /// * `OutputWidthMismatch` when the graph has a static output width other than `num_classes`.
    /// * `InputShapeMismatch` when the graph has a static input other than `[1, 3, 224, 224]`.
    pub fn load(&self) -> Result<ModelHandle, ProvisioningError> {
        if self.num_classes == 0 {
            return Err(ProvisioningError::InvalidClassCount);
        }

        let path = &self.config.model_path;
        if !path.exists() {
            return Err(ProvisioningError::ArtifactNotFound { path: path.clone() });
        }

        let classifier =
            OnnxClassifier::from_config(&self.config, self.num_classes).map_err(|source| {
                ProvisioningError::Load {
                    path: path.clone(),
                    source,
                }
            })?;

        if let Some(width) = classifier.declared_output_width() {
            if width != self.num_classes {
                return Err(ProvisioningError::OutputWidthMismatch {
                    expected: self.num_classes,
                    actual: width,
                });
            }
        }

        if let Some(shape) = classifier.declared_input_shape() {
            check_input_shape(shape)?;
        }

        info!(
            model_path = %path.display(),
            num_classes = self.num_classes,
            sessions = classifier.inference().pool_size(),
            "loaded trained classifier"
        );
        Ok(ModelHandle::trained(classifier, path.clone()))
    }

    /// Untrained classifier with the same output width.
    pub fn fallback(&self) -> ModelHandle {
        ModelHandle::fallback(UntrainedClassifier::new(self.num_classes))
    }

    /// Loads the trained classifier, or falls back when that fails.
    ///
    /// Returns the handle and whether the trained weights are in use.
    pub fn provision(&self) -> (ModelHandle, bool) {
        match self.load() {
            Ok(handle) => (handle, true),
            Err(err) => {
                warn!(
                    model_path = %self.config.model_path.display(),
                    num_classes = self.num_classes,
                    error = %error_chain(&err),
                    "trained weights unavailable, serving untrained fallback classifier"
                );
                (self.fallback(), false)
            }
        }
    }
}

/// Checks a declared input shape against the preprocessor output.
///
/// Non-positive dimensions are dynamic and match anything.
fn check_input_shape(declared: &[i64]) -> Result<(), ProvisioningError> {
    let expected = ImageTensor::SHAPE;
    let compatible = declared.len() == expected.len()
        && declared
            .iter()
            .zip(expected)
            .all(|(&d, e)| d <= 0 || d as usize == e);

    if compatible {
        Ok(())
    } else {
        Err(ProvisioningError::InputShapeMismatch {
            expected: expected.to_vec(),
            actual: declared.to_vec(),
        })
    }
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_artifact() {
        let config = ClassifierConfig::new("/nonexistent/efficientnet.onnx").num_classes(30);
        let provisioner = ModelProvisioner::new(config, 30);

        assert!(matches!(
            provisioner.load(),
            Err(ProvisioningError::ArtifactNotFound { .. })
        ));

        let (handle, loaded) = provisioner.provision();
        assert!(!loaded);
        assert!(!handle.is_loaded());
        assert_eq!(handle.num_classes(), 30);
    }

    #[test]
    fn test_corrupt_artifact_falls_back() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0x00, 0xff, 0x13, 0x37, 0x42]).unwrap();
        let config = ClassifierConfig::new(file.path()).num_classes(6);
        let provisioner = ModelProvisioner::new(config, 6);

        assert!(matches!(
            provisioner.load(),
            Err(ProvisioningError::Load { .. })
        ));

        let (handle, loaded) = provisioner.provision();
        assert!(!loaded);
        assert_eq!(handle.num_classes(), 6);
    }

    #[test]
    fn test_zero_classes_is_rejected() {
        let provisioner = ModelProvisioner::new(ClassifierConfig::default(), 0);
        assert!(matches!(
            provisioner.load(),
            Err(ProvisioningError::InvalidClassCount)
        ));
    }

    #[test]
    fn test_fallback_matches_width() {
        let provisioner = ModelProvisioner::new(ClassifierConfig::default(), 12);
        let handle = provisioner.fallback();
        assert_eq!(handle.num_classes(), 12);
        assert!(!handle.is_loaded());
    }

    #[test]
    fn test_check_input_shape() {
        assert!(check_input_shape(&[1, 3, 224, 224]).is_ok());
        assert!(check_input_shape(&[-1, 3, 224, 224]).is_ok());
        assert!(check_input_shape(&[-1, 3, -1, -1]).is_ok());
        assert!(check_input_shape(&[1, 3, 299, 299]).is_err());
        assert!(check_input_shape(&[1, 1, 224, 224]).is_err());
        assert!(check_input_shape(&[1, 224, 224, 3]).is_err());
        assert!(check_input_shape(&[3, 224, 224]).is_err());
    }

    #[test]
    fn test_error_chain_includes_causes() {
        let err = ProvisioningError::Load {
            path: "w.onnx".into(),
            source: crate::core::ClassifierError::invalid_input("bad graph"),
        };
        let message = error_chain(&err);
        assert!(message.starts_with("failed to load weights artifact 'w.onnx'"));
        assert!(message.contains("bad graph"));
    }
}
