//! Core ONNX Runtime inference engine with support for pooling and configurable sessions.

use crate::core::errors::ClassifierError;
use crate::core::tensor::Tensor2D;
use ort::{session::Session, value::ValueType};
use std::sync::Mutex;

#[path = "ort_infer_builders.rs"]
mod ort_infer_builders;
#[path = "ort_infer_execution.rs"]
mod ort_infer_execution;
#[cfg(test)]
#[path = "ort_infer_tests.rs"]
mod ort_infer_tests;

/// A pool of ONNX Runtime sessions for one classification graph.
///
/// `Session::run` needs exclusive access, so each session sits behind its own
/// mutex and requests are spread over the pool round-robin.
pub struct OrtInfer {
    pub(super) sessions: Vec<Mutex<Session>>,
    pub(super) next_idx: std::sync::atomic::AtomicUsize,
    pub(super) input_name: String,
    pub(super) output_name: String,
    pub(super) input_shape: Option<Vec<i64>>,
    pub(super) output_shape: Option<Vec<i64>>,
    pub(super) model_path: std::path::PathBuf,
    pub(super) model_name: String,
}

impl std::fmt::Debug for OrtInfer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrtInfer")
            .field("sessions", &self.sessions.len())
            .field("input_name", &self.input_name)
            .field("output_name", &self.output_name)
            .field("model_path", &self.model_path)
            .field("model_name", &self.model_name)
            .finish()
    }
}

impl OrtInfer {
    /// Declared shape of the primary input tensor.
    ///
    /// Dynamic dimensions (e.g., -1) are returned as-is.
    pub fn primary_input_shape(&self) -> Option<&[i64]> {
        self.input_shape.as_deref()
    }

    /// Declared shape of the primary output tensor.
    pub fn primary_output_shape(&self) -> Option<&[i64]> {
        self.output_shape.as_deref()
    }

    /// Number of sessions in the pool.
    pub fn pool_size(&self) -> usize {
        self.sessions.len()
    }
}

fn tensor_shape(value_type: &ValueType) -> Option<Vec<i64>> {
    match value_type {
        ValueType::Tensor { shape, .. } => Some(shape.iter().copied().collect()),
        _ => None,
    }
}

/// Checks a raw output buffer against a 2D `[batch, classes]` layout.
fn output_matrix(
    model_name: &str,
    output_shape: &[i64],
    output_data: &[f32],
) -> Result<Tensor2D, ClassifierError> {
    let actual: Vec<usize> = output_shape.iter().map(|&d| d.max(0) as usize).collect();
    if actual.len() != 2 {
        return Err(ClassifierError::shape_mismatch(model_name, &[1, 0], &actual));
    }

    let (rows, cols) = (actual[0], actual[1]);
    if rows * cols != output_data.len() {
        return Err(ClassifierError::shape_mismatch(
            model_name,
            &[rows, cols],
            &[output_data.len()],
        ));
    }

    Ok(Tensor2D::from_shape_vec((rows, cols), output_data.to_vec())?)
}
