//! Domain-level structures of the classification service.
//!
//! The [`ClassCatalog`] names model outputs and [`PredictionResult`] is the
//! value returned to callers for one image.

pub mod catalog;
pub mod prediction;

pub use catalog::ClassCatalog;
pub use prediction::PredictionResult;
