//! # Diatom Classifier
//!
//! Classifies microscopy images of diatoms into a fixed set of taxa with an
//! ONNX classification model, and serves the classifier over HTTP.
//!
//! ## Features
//!
//! - Deterministic preprocessing of arbitrary image bytes into a `1×3×224×224` tensor
//! - ONNX Runtime inference with a pool of sessions for concurrent requests
//! - Fallback to an untrained classifier when the trained weights are unusable,
//!   so the service always starts
//! - Stable softmax decoding into a class id, label and confidence
//! - `axum` HTTP service with `/predict`, `/health` and `/classes`
//!
//! ## Modules
//!
//! * [`core`] - Configuration, errors, tensors, the inference engine and the `Classifier` trait
//! * [`domain`] - Class catalog and prediction result
//! * [`models`] - Trained and fallback classifiers behind a shared handle
//! * [`processors`] - Resize, normalization, softmax and decoding
//! * [`predictor`] - Model provisioning and the request-time prediction path
//! * [`server`] - HTTP routes
//! * [`utils`] - Image decoding and label file loading
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use diatom_classifier::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClassifierConfig::new("models/efficientnet_b0_diatoms.onnx")
//!     .class_names(["Asterionella", "Cyclotella", "Fragilaria", "Gomphonema", "Navicula", "Nitzschia"]);
//!
//! let context = ClassifierContext::from_config(&config)?;
//! let bytes = std::fs::read("sample.png")?;
//! let prediction = context.classify(&bytes)?;
//! println!("{} ({:.4})", prediction.class_name, prediction.confidence);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod domain;
pub mod models;
pub mod predictor;
pub mod processors;
pub mod server;
pub mod utils;

/// Prelude module for convenient imports.
///
/// ```rust
/// use diatom_classifier::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::{
        ClassifierConfig, ClassifierError, ClassifierResult, ImageTensor, ServiceConfig,
    };
    pub use crate::domain::{ClassCatalog, PredictionResult};
    pub use crate::models::ModelHandle;
    pub use crate::predictor::{ClassifierContext, ModelProvisioner, predict};
    pub use crate::processors::{ImagePreprocessor, preprocess};
}
