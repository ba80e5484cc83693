//! Trained classifier backed by an ONNX graph.

use crate::core::config::ClassifierConfig;
use crate::core::inference::OrtInfer;
use crate::core::{Classifier, ClassifierError, ClassifierResult, ImageTensor, Tensor1D};

/// Classifier that runs a trained ONNX graph.
///
/// The graph is expected to take a `[batch, 3, 224, 224]` float input and to
/// return `[batch, num_classes]` logits.
#[derive(Debug)]
pub struct OnnxClassifier {
    inference: OrtInfer,
    num_classes: usize,
}

impl OnnxClassifier {
    pub fn new(inference: OrtInfer, num_classes: usize) -> Self {
        Self {
            inference,
            num_classes,
        }
    }

    /// Opens the weights artifact named by `config`.
    pub fn from_config(config: &ClassifierConfig, num_classes: usize) -> ClassifierResult<Self> {
        Ok(Self::new(OrtInfer::from_config(config)?, num_classes))
    }

    /// Output width declared by the graph, when it is static.
    pub fn declared_output_width(&self) -> Option<usize> {
        match self.inference.primary_output_shape()? {
            [_, width] if *width > 0 => Some(*width as usize),
            _ => None,
        }
    }

    /// Input shape declared by the graph; dynamic dimensions are negative.
    pub fn declared_input_shape(&self) -> Option<&[i64]> {
        self.inference.primary_input_shape()
    }

    pub fn inference(&self) -> &OrtInfer {
        &self.inference
    }
}

impl Classifier for OnnxClassifier {
    fn name(&self) -> &str {
        self.inference.model_name()
    }

    fn num_classes(&self) -> usize {
        self.num_classes
    }

    fn forward(&self, input: &ImageTensor) -> ClassifierResult<Tensor1D> {
        let scores = self.inference.infer_2d(input.view())?;
        if scores.shape() != [1, self.num_classes] {
            return Err(ClassifierError::shape_mismatch(
                self.name(),
                &[1, self.num_classes],
                scores.shape(),
            ));
        }
        Ok(scores.row(0).to_owned())
    }
}
