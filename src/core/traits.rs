//! Traits defining the seams of the classification pipeline.

use crate::core::errors::ClassifierResult;
use crate::core::tensor::{ImageTensor, Tensor1D};

/// A model that maps a fixed-shape image tensor to per-class scores.
///
/// Implementations are shared across concurrent requests and must not mutate
/// any model parameters during [`Classifier::forward`].
pub trait Classifier: Send + Sync + std::fmt::Debug {
    /// Human-readable model name used in logs and health reports.
    fn name(&self) -> &str;

    /// Width of the score vector returned by [`Classifier::forward`].
    fn num_classes(&self) -> usize;

    /// Runs a forward pass and returns `num_classes()` raw scores (logits).
    fn forward(&self, input: &ImageTensor) -> ClassifierResult<Tensor1D>;
}
