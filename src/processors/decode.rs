//! Decoding of class scores into a labelled prediction.

use super::softmax::{argmax, softmax};
use crate::core::{ClassifierError, ClassifierResult};
use crate::domain::{ClassCatalog, PredictionResult};
use ndarray::ArrayView1;

/// Turns a score vector into the most likely class of a catalog.
///
/// Indexes with no catalog entry decode to `"Unknown"`; the catalog may be
/// shorter than the score vector.
#[derive(Debug, Clone)]
pub struct ClassificationDecoder {
    catalog: ClassCatalog,
}

impl ClassificationDecoder {
    pub fn new(catalog: ClassCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ClassCatalog {
        &self.catalog
    }

    /// Applies softmax and picks the arg-max class.
    ///
    /// `confidence` is the winning probability at full precision.
    pub fn decode(&self, scores: ArrayView1<'_, f32>) -> ClassifierResult<PredictionResult> {
        let probabilities = softmax(scores)?;
        let (class_id, confidence) = argmax(&probabilities)
            .ok_or_else(|| ClassifierError::invalid_input("score vector is empty"))?;

        Ok(PredictionResult::new(
            class_id,
            confidence,
            self.catalog.label_or_unknown(class_id),
        ))
    }
}
