//! Request-time classification of uploaded images.

use super::provisioner::ModelProvisioner;
use crate::core::config::ClassifierConfig;
use crate::core::{ClassifierError, ClassifierResult, ImageTensor};
use crate::domain::{ClassCatalog, PredictionResult};
use crate::models::ModelHandle;
use crate::processors::{ClassificationDecoder, ImagePreprocessor};
use image::RgbImage;
use tracing::{debug, error, warn};

#[cfg(test)]
#[path = "diatom_classifier_tests.rs"]
mod diatom_classifier_tests;

/// Runs one tensor through `model` and decodes the scores against `catalog`.
///
/// # Errors
///
/// * `ShapeMismatch` when the model returns a score vector whose length is not
///   its declared class count.
/// * `NumericAnomaly` when any score is NaN or infinite.
pub fn predict(
    model: &ModelHandle,
    tensor: &ImageTensor,
    catalog: &ClassCatalog,
) -> ClassifierResult<PredictionResult> {
    predict_with(model, tensor, &ClassificationDecoder::new(catalog.clone()))
}

fn predict_with(
    model: &ModelHandle,
    tensor: &ImageTensor,
    decoder: &ClassificationDecoder,
) -> ClassifierResult<PredictionResult> {
    let result = model.forward(tensor).and_then(|scores| {
        if scores.len() != model.num_classes() {
            return Err(ClassifierError::shape_mismatch(
                model.name(),
                &[model.num_classes()],
                scores.shape(),
            ));
        }
        decoder.decode(scores.view())
    });

    match &result {
        Ok(prediction) => debug!(
            model = model.name(),
            class_id = prediction.class_id,
            class_name = %prediction.class_name,
            confidence = prediction.confidence,
            "classified image"
        ),
        Err(err @ ClassifierError::ShapeMismatch { .. }) => {
            error!(model = model.name(), error = %err, "model output has an unexpected shape")
        }
        Err(_) => {}
    }

    result
}

/// Immutable startup state shared by all requests.
///
/// Holds the provisioned model, the class catalog and the preprocessing chain.
/// Nothing in it changes after construction, so one instance behind an `Arc`
/// serves any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct ClassifierContext {
    model: ModelHandle,
    decoder: ClassificationDecoder,
    preprocessor: ImagePreprocessor,
}

impl ClassifierContext {
    /// Creates a context from an already provisioned model.
    ///
    /// A catalog whose length differs from the model width is accepted; the
    /// extra indexes decode to `"Unknown"`.
    pub fn new(model: ModelHandle, catalog: ClassCatalog) -> Self {
        if catalog.len() != model.num_classes() {
            warn!(
                catalog_len = catalog.len(),
                num_classes = model.num_classes(),
                "class catalog size differs from model output width"
            );
        }

        Self {
            model,
            decoder: ClassificationDecoder::new(catalog),
            preprocessor: ImagePreprocessor::new(),
        }
    }

    /// Resolves the catalog and provisions the model described by `config`.
    ///
    /// Only configuration errors fail; an unusable weights artifact yields a
    /// context backed by the untrained fallback.
    pub fn from_config(config: &ClassifierConfig) -> ClassifierResult<Self> {
        let (catalog, num_classes) = config.resolve_catalog()?;
        let (model, _loaded) = ModelProvisioner::new(config.clone(), num_classes).provision();
        Ok(Self::new(model, catalog))
    }

    /// Classifies encoded image bytes.
    pub fn classify(&self, raw_bytes: &[u8]) -> ClassifierResult<PredictionResult> {
        let tensor = self.preprocessor.preprocess(raw_bytes)?;
        predict_with(&self.model, &tensor, &self.decoder)
    }

    /// Classifies an already decoded image.
    pub fn classify_image(&self, img: &RgbImage) -> ClassifierResult<PredictionResult> {
        let tensor = self.preprocessor.preprocess_image(img)?;
        predict_with(&self.model, &tensor, &self.decoder)
    }

    pub fn model(&self) -> &ModelHandle {
        &self.model
    }

    pub fn catalog(&self) -> &ClassCatalog {
        self.decoder.catalog()
    }

    /// Whether the trained weights are in use.
    pub fn model_loaded(&self) -> bool {
        self.model.is_loaded()
    }

    pub fn num_classes(&self) -> usize {
        self.model.num_classes()
    }
}
