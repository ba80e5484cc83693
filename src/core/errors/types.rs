//! Error type definitions for the classification pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Stage of the request pipeline in which a processing error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    /// Error occurred during image resizing.
    Resize,
    /// Error occurred during tensor operations.
    TensorOperation,
}

impl std::fmt::Display for ProcessingStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessingStage::Resize => write!(f, "resize"),
            ProcessingStage::TensorOperation => write!(f, "tensor operation"),
        }
    }
}

/// Minimal error carrying only a message, used as a `source` where no
/// underlying library error exists.
#[derive(Debug, Clone)]
pub struct SimpleError {
    message: String,
}

impl SimpleError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for SimpleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for SimpleError {}

/// Errors raised while classifying a single image.
///
/// Every request-time failure surfaces as one of these variants; no variant is
/// ever converted into a default prediction.
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// The uploaded bytes are not a decodable image. Caused by the client.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[source] image::ImageError),

    /// Error occurred during processing.
    #[error("{kind} failed: {context}")]
    Processing {
        /// The stage of processing where the error occurred.
        kind: ProcessingStage,
        /// Additional context about the error.
        context: String,
        /// The underlying error that caused this error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A tensor entering or leaving the model has the wrong shape.
    #[error("shape mismatch in {component}: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        /// Component that detected the mismatch.
        component: String,
        /// Expected shape.
        expected: Vec<usize>,
        /// Observed shape.
        actual: Vec<usize>,
    },

    /// Non-finite values were found in a tensor or in the model output.
    #[error("numeric anomaly in {component}: {message}")]
    NumericAnomaly {
        /// Component that detected the anomaly.
        component: String,
        /// Description of the anomaly.
        message: String,
    },

    /// The model could not be loaded from disk.
    #[error("failed to load model '{model_path}': {reason}{suggestion}")]
    ModelLoad {
        /// Path of the model artifact.
        model_path: String,
        /// Reason for the failure.
        reason: String,
        /// Optional suggestion, pre-formatted with a leading separator.
        suggestion: String,
        /// The underlying error, when there is one.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The forward pass failed.
    #[error("inference failed for model '{model_name}': {context}")]
    Inference {
        /// Name of the model that failed.
        model_name: String,
        /// Additional context about the failure.
        context: String,
        /// The underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Error indicating invalid input.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// A message describing the invalid input.
        message: String,
    },

    /// Error indicating a configuration problem.
    #[error("configuration: {message}")]
    ConfigError {
        /// A message describing the configuration error.
        message: String,
    },

    /// Error from the ONNX Runtime session.
    #[error(transparent)]
    Session(#[from] ort::Error),

    /// Error from tensor operations.
    #[error("tensor operation")]
    Tensor(#[from] ndarray::ShapeError),

    /// IO error.
    #[error("io")]
    Io(#[from] std::io::Error),
}

impl ClassifierError {
    /// Returns true when the error was caused by the request payload rather
    /// than by the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ClassifierError::ImageDecode(_) | ClassifierError::InvalidInput { .. }
        )
    }
}

/// Errors raised while provisioning the trained model at startup.
///
/// These never reach request callers: [`crate::predictor::ModelProvisioner::provision`]
/// absorbs them and falls back to an untrained classifier.
#[derive(Error, Debug)]
pub enum ProvisioningError {
    /// The weights artifact does not exist.
    #[error("weights artifact not found: {}", path.display())]
    ArtifactNotFound {
        /// Configured artifact path.
        path: PathBuf,
    },

    /// The artifact exists but could not be turned into a session.
    #[error("failed to load weights artifact '{}'", path.display())]
    Load {
        /// Configured artifact path.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: ClassifierError,
    },

    /// The artifact's output width differs from the configured class count.
    #[error("model output width {actual} does not match configured class count {expected}")]
    OutputWidthMismatch {
        /// Configured class count.
        expected: usize,
        /// Width declared by the artifact.
        actual: usize,
    },

    /// The artifact declares an input shape the preprocessor cannot produce.
    #[error("model input shape {actual:?} is incompatible with {expected:?}")]
    InputShapeMismatch {
        /// Shape produced by the preprocessor.
        expected: Vec<usize>,
        /// Shape declared by the artifact (`-1` for dynamic dimensions).
        actual: Vec<i64>,
    },

    /// The configured class count is zero.
    #[error("class count must be greater than 0")]
    InvalidClassCount,
}

impl From<image::ImageError> for ClassifierError {
    fn from(error: image::ImageError) -> Self {
        Self::ImageDecode(error)
    }
}

impl From<crate::core::config::ConfigError> for ClassifierError {
    fn from(error: crate::core::config::ConfigError) -> Self {
        Self::ConfigError {
            message: error.to_string(),
        }
    }
}
