//! Error constructor utilities for the classification pipeline.
//!
//! These helpers keep call sites short and make sure every error carries the
//! component and stage it came from.
//!
//! ```rust
//! use diatom_classifier::core::ClassifierError;
//!
//! let error = ClassifierError::shape_mismatch("OnnxClassifier", &[1, 6], &[1, 30]);
//! assert!(error.to_string().contains("OnnxClassifier"));
//! ```

use super::types::{ClassifierError, ProcessingStage, SimpleError};

impl ClassifierError {
    /// Creates a ClassifierError for tensor operations.
    pub fn tensor_operation(
        context: &str,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::processing_error(ProcessingStage::TensorOperation, context, error)
    }

    /// Creates a ClassifierError for resize operations.
    pub fn resize_error(
        context: &str,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::processing_error(ProcessingStage::Resize, context, error)
    }

    /// Creates a ClassifierError for a given processing stage.
    pub fn processing_error(
        kind: ProcessingStage,
        context: &str,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Processing {
            kind,
            context: context.to_string(),
            source: Box::new(error),
        }
    }

    /// Creates a ClassifierError for a failed forward pass.
    pub fn inference_error(
        model_name: &str,
        context: &str,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Inference {
            model_name: model_name.to_string(),
            context: context.to_string(),
            source: Box::new(error),
        }
    }

    /// Creates a ClassifierError for a model that could not be loaded.
    ///
    /// # Arguments
    ///
    /// * `model_path` - Path of the model artifact.
    /// * `reason` - Short description of the failure.
    /// * `suggestion` - Optional hint for the operator.
    /// * `source` - Optional underlying error.
    pub fn model_load_error(
        model_path: impl AsRef<std::path::Path>,
        reason: impl Into<String>,
        suggestion: Option<&str>,
        source: Option<impl std::error::Error + Send + Sync + 'static>,
    ) -> Self {
        let suggestion = suggestion
            .map(|s| format!("; suggested fix: {}", s))
            .unwrap_or_default();
        Self::ModelLoad {
            model_path: model_path.as_ref().display().to_string(),
            reason: reason.into(),
            suggestion,
            source: source.map(|e| Box::new(e) as _),
        }
    }

    /// Creates a ClassifierError for a tensor whose shape violates a pipeline invariant.
    pub fn shape_mismatch(component: &str, expected: &[usize], actual: &[usize]) -> Self {
        Self::ShapeMismatch {
            component: component.to_string(),
            expected: expected.to_vec(),
            actual: actual.to_vec(),
        }
    }

    /// Creates a ClassifierError for NaN or infinite values.
    pub fn numeric_anomaly(component: &str, message: impl Into<String>) -> Self {
        Self::NumericAnomaly {
            component: component.to_string(),
            message: message.into(),
        }
    }

    /// Creates a ClassifierError for invalid input.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates a ClassifierError for configuration errors.
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Creates a ClassifierError for a poisoned or unavailable session lock.
    pub fn session_lock(model_name: &str, index: usize, pool_size: usize) -> Self {
        Self::inference_error(
            model_name,
            &format!(
                "Failed to acquire session lock for session {}/{}",
                index, pool_size
            ),
            SimpleError::new("Session lock acquisition failed"),
        )
    }
}
