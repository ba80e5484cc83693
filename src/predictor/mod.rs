//! Model provisioning and the request-time prediction path.
//!
//! - [`ModelProvisioner`] builds the shared [`ModelHandle`](crate::models::ModelHandle)
//!   at startup, falling back to an untrained classifier when the trained
//!   weights cannot be used.
//! - [`ClassifierContext`] bundles the handle with the class catalog and turns
//!   raw image bytes into a [`PredictionResult`](crate::domain::PredictionResult).

pub mod diatom_classifier;
pub mod provisioner;

pub use diatom_classifier::{ClassifierContext, predict};
pub use provisioner::ModelProvisioner;
