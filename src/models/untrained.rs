//! Untrained fallback classifier.

use crate::core::{Classifier, ClassifierError, ClassifierResult, ImageTensor, Tensor1D, Tensor2D};
use ndarray::Array2;

/// Deterministic classifier with default-initialized parameters.
///
/// Features are the per-channel global averages of the input; a linear head
/// maps them to `num_classes` scores. With the default zero parameters every
/// class scores the same, so the decoded prediction is always class 0 with
/// confidence `1 / num_classes`. Parameters are never updated.
#[derive(Debug, Clone)]
pub struct UntrainedClassifier {
    weights: Tensor2D,
    bias: Tensor1D,
}

impl UntrainedClassifier {
    pub const NAME: &'static str = "untrained_fallback";

    /// Zero-initialized head producing `num_classes` scores.
    pub fn new(num_classes: usize) -> Self {
        Self {
            weights: Array2::zeros((num_classes, ImageTensor::SHAPE[1])),
            bias: Tensor1D::zeros(num_classes),
        }
    }

    /// Head with explicit `[num_classes, 3]` weights and `[num_classes]` bias.
    pub fn with_parameters(weights: Tensor2D, bias: Tensor1D) -> ClassifierResult<Self> {
        let channels = ImageTensor::SHAPE[1];
        if weights.ncols() != channels || weights.nrows() != bias.len() {
            return Err(ClassifierError::shape_mismatch(
                Self::NAME,
                &[bias.len(), channels],
                weights.shape(),
            ));
        }
        Ok(Self { weights, bias })
    }
}

impl Classifier for UntrainedClassifier {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn num_classes(&self) -> usize {
        self.bias.len()
    }

    fn forward(&self, input: &ImageTensor) -> ClassifierResult<Tensor1D> {
        let features = input.channel_means();
        Ok(self.weights.dot(&features) + &self.bias)
    }
}
