//! Error types for the classification pipeline.
//!
//! Request-time failures are reported through [`ClassifierError`]; startup
//! failures of the trained model are reported through [`ProvisioningError`]
//! and absorbed by the provisioner.
//!
//! # Usage
//!
//! ```rust
//! use diatom_classifier::core::errors::{ClassifierError, ProcessingStage};
//!
//! let error = ClassifierError::tensor_operation(
//!     "Failed to reshape normalized pixels",
//!     std::io::Error::new(std::io::ErrorKind::InvalidData, "Invalid tensor shape"),
//! );
//! assert!(matches!(
//!     error,
//!     ClassifierError::Processing { kind: ProcessingStage::TensorOperation, .. }
//! ));
//! ```

pub mod constructors;
pub mod types;

pub use types::{ClassifierError, ProcessingStage, ProvisioningError, SimpleError};

/// Convenient result alias for classification operations.
pub type ClassifierResult<T> = Result<T, ClassifierError>;
