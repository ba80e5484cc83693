use super::*;
use crate::core::config::{ClassifierConfig, OrtSessionConfig};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_from_config_missing_file_is_model_load_error() {
    let config = ClassifierConfig::new("dummy_path.onnx")
        .num_classes(6)
        .session_pool_size(2)
        .ort_session(OrtSessionConfig::new().with_intra_threads(1));

    let err = OrtInfer::from_config(&config).unwrap_err();
    assert!(matches!(err, ClassifierError::ModelLoad { .. }));
}

#[test]
fn test_from_config_rejects_corrupt_artifact() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"definitely not a protobuf graph").unwrap();

    let config = ClassifierConfig::new(file.path()).num_classes(6);
    assert!(OrtInfer::from_config(&config).is_err());
}

#[test]
fn test_output_matrix_accepts_batch_of_scores() {
    let scores = output_matrix("m", &[1, 3], &[0.1, 0.2, 0.7]).unwrap();
    assert_eq!(scores.shape(), &[1, 3]);
    assert!((scores[[0, 2]] - 0.7).abs() < 1e-6);
}

#[test]
fn test_output_matrix_rejects_bad_layouts() {
    assert!(matches!(
        output_matrix("m", &[1, 3, 1], &[0.0; 3]),
        Err(ClassifierError::ShapeMismatch { .. })
    ));
    assert!(matches!(
        output_matrix("m", &[1, 4], &[0.0; 3]),
        Err(ClassifierError::ShapeMismatch { .. })
    ));
}
