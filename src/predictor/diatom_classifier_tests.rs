use super::*;
use crate::core::{Classifier, Tensor1D};
use crate::models::UntrainedClassifier;
use crate::processors::softmax;
use image::{DynamicImage, ImageFormat, Rgb};
use ndarray::{Array2, Array4};
use std::io::Cursor;
use std::sync::Arc;

const DIATOMS: [&str; 6] = [
    "Asterionella",
    "Cyclotella",
    "Fragilaria",
    "Gomphonema",
    "Navicula",
    "Nitzschia",
];

/// Classifier returning the same scores for every input.
#[derive(Debug)]
struct FixedScores {
    scores: Vec<f32>,
    declared: usize,
}

impl Classifier for FixedScores {
    fn name(&self) -> &str {
        "fixed"
    }

    fn num_classes(&self) -> usize {
        self.declared
    }

    fn forward(&self, _input: &ImageTensor) -> ClassifierResult<Tensor1D> {
        Ok(Tensor1D::from(self.scores.clone()))
    }
}

fn fixed(scores: Vec<f32>) -> ModelHandle {
    let declared = scores.len();
    ModelHandle::fallback(FixedScores { scores, declared })
}

fn png(img: RgbImage) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}

fn zero_tensor() -> ImageTensor {
    ImageTensor::new(Array4::zeros(ImageTensor::SHAPE)).unwrap()
}

#[test]
fn test_white_pixel_with_fallback_model() {
    let context = ClassifierContext::new(
        ModelHandle::fallback(UntrainedClassifier::new(30)),
        ClassCatalog::placeholder(30),
    );
    let bytes = png(RgbImage::from_pixel(1, 1, Rgb([255, 255, 255])));

    let result = context.classify(&bytes).unwrap();
    assert_eq!(result.class_id, 0);
    assert_eq!(result.class_name, "Class_0");
    assert_eq!(result.rounded_confidence(), 0.0333);
    assert!(!context.model_loaded());

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"class_id": 0, "confidence": 0.0333, "class_name": "Class_0"})
    );
}

#[test]
fn test_empty_payload_is_decode_error() {
    let context = ClassifierContext::new(
        ModelHandle::fallback(UntrainedClassifier::new(6)),
        ClassCatalog::new(DIATOMS),
    );
    assert!(matches!(
        context.classify(&[]),
        Err(ClassifierError::ImageDecode(_))
    ));
}

#[test]
fn test_index_beyond_catalog_maps_to_unknown() {
    let mut bias = Tensor1D::zeros(30);
    bias[17] = 5.0;
    let model = UntrainedClassifier::with_parameters(Array2::zeros((30, 3)), bias).unwrap();
    let context = ClassifierContext::new(ModelHandle::fallback(model), ClassCatalog::new(DIATOMS));

    let bytes = png(RgbImage::from_pixel(32, 32, Rgb([40, 90, 10])));
    let result = context.classify(&bytes).unwrap();
    assert_eq!(result.class_id, 17);
    assert_eq!(result.class_name, "Unknown");
}

#[test]
fn test_confidence_is_max_softmax() {
    let scores = vec![0.3f32, 2.5, -1.0, 2.4, 0.0, 1.1];
    let model = fixed(scores.clone());
    let catalog = ClassCatalog::new(DIATOMS);

    let result = predict(&model, &zero_tensor(), &catalog).unwrap();
    let probs = softmax(Tensor1D::from(scores).view()).unwrap();
    let max = probs.iter().cloned().fold(f64::MIN, f64::max);

    assert_eq!(result.class_id, 1);
    assert_eq!(result.class_name, "Cyclotella");
    assert!((0.0..=1.0).contains(&result.confidence));
    assert_eq!(result.confidence, max);
}

#[test]
fn test_ties_resolve_to_lowest_index() {
    let model = fixed(vec![1.0, 3.0, 3.0, 0.0]);
    let result = predict(&model, &zero_tensor(), &ClassCatalog::placeholder(4)).unwrap();
    assert_eq!(result.class_id, 1);
}

#[test]
fn test_wrong_output_width_is_shape_mismatch() {
    let model = ModelHandle::fallback(FixedScores {
        scores: vec![0.0; 5],
        declared: 6,
    });
    let err = predict(&model, &zero_tensor(), &ClassCatalog::new(DIATOMS)).unwrap_err();
    assert!(matches!(err, ClassifierError::ShapeMismatch { .. }));
}

#[test]
fn test_non_finite_scores_are_rejected() {
    let model = fixed(vec![0.0, f32::INFINITY, 1.0]);
    let err = predict(&model, &zero_tensor(), &ClassCatalog::placeholder(3)).unwrap_err();
    assert!(matches!(err, ClassifierError::NumericAnomaly { .. }));
}

#[test]
fn test_predictions_are_idempotent() {
    let model = UntrainedClassifier::with_parameters(
        Array2::from_shape_fn((6, 3), |(i, j)| (i as f32 - 2.5) * (j as f32 + 1.0) * 0.1),
        Tensor1D::zeros(6),
    )
    .unwrap();
    let context = ClassifierContext::new(ModelHandle::fallback(model), ClassCatalog::new(DIATOMS));
    let bytes = png(RgbImage::from_fn(64, 48, |x, y| {
        Rgb([(x * 4) as u8, (y * 5) as u8, 128])
    }));

    let first = context.classify(&bytes).unwrap();
    for _ in 0..3 {
        assert_eq!(context.classify(&bytes).unwrap(), first);
    }
}

#[test]
fn test_concurrent_requests_share_context() {
    let context = Arc::new(ClassifierContext::new(
        ModelHandle::fallback(UntrainedClassifier::new(6)),
        ClassCatalog::new(DIATOMS),
    ));
    let bytes = png(RgbImage::from_pixel(10, 10, Rgb([0, 128, 255])));
    let expected = context.classify(&bytes).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let context = Arc::clone(&context);
                let bytes = &bytes;
                scope.spawn(move || context.classify(bytes).unwrap())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_from_config_falls_back_when_weights_missing() {
    let config = ClassifierConfig::new("/nonexistent/weights.onnx").class_names(DIATOMS);
    let context = ClassifierContext::from_config(&config).unwrap();

    assert!(!context.model_loaded());
    assert_eq!(context.num_classes(), 6);
    assert_eq!(context.catalog().get(4), Some("Navicula"));

    let result = context
        .classify_image(&RgbImage::from_pixel(3, 3, Rgb([1, 1, 1])))
        .unwrap();
    assert_eq!(result.class_name, "Asterionella");
}

#[test]
fn test_from_config_requires_class_information() {
    let config = ClassifierConfig::new("/nonexistent/weights.onnx");
    assert!(ClassifierContext::from_config(&config).is_err());
}
