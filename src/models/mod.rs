//! Classifier implementations and the shared model handle.
//!
//! - [`OnnxClassifier`] runs a trained ONNX graph through ONNX Runtime.
//! - [`UntrainedClassifier`] is the deterministic stand-in used when the
//!   trained weights cannot be loaded.
//! - [`ModelHandle`] shares either of them read-only across requests.

pub mod handle;
pub mod onnx_classifier;
pub mod untrained;

pub use handle::{ModelHandle, ModelProvenance};
pub use onnx_classifier::OnnxClassifier;
pub use untrained::UntrainedClassifier;
