use super::*;
use crate::core::errors::SimpleError;
use ndarray::ArrayView4;
use ort::value::TensorRef;

impl OrtInfer {
    /// Returns the model name associated with this inference engine.
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Runs a forward pass on an NCHW batch and returns the `[batch, classes]` scores.
    pub fn infer_2d(&self, x: ArrayView4<'_, f32>) -> Result<Tensor2D, ClassifierError> {
        let input_shape = x.shape().to_vec();
        let dims: Vec<i64> = input_shape.iter().map(|&d| d as i64).collect();
        let data = x.as_slice().ok_or_else(|| {
            ClassifierError::tensor_operation(
                "input tensor is not contiguous",
                SimpleError::new(format!("shape {:?}", input_shape)),
            )
        })?;

        let input_tensor = TensorRef::from_array_view((dims, data)).map_err(|e| {
            ClassifierError::inference_error(
                &self.model_name,
                &format!("Failed to convert input tensor with shape {:?}", input_shape),
                e,
            )
        })?;

        let inputs = ort::inputs![self.input_name.as_str() => input_tensor];

        let idx = self
            .next_idx
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed)
            % self.sessions.len();
        let mut session_guard = self.sessions[idx]
            .lock()
            .map_err(|_| {
                ClassifierError::session_lock(&self.model_name, idx, self.sessions.len())
            })?;

        let outputs = session_guard.run(inputs).map_err(|e| {
            ClassifierError::inference_error(
                &self.model_name,
                &format!(
                    "ONNX Runtime inference failed with input '{}' -> output '{}'",
                    self.input_name, self.output_name
                ),
                e,
            )
        })?;

        let (output_shape, output_data) = outputs[self.output_name.as_str()]
            .try_extract_tensor::<f32>()
            .map_err(|e| {
                ClassifierError::inference_error(
                    &self.model_name,
                    &format!("Failed to extract output tensor '{}' as f32", self.output_name),
                    e,
                )
            })?;

        output_matrix(&self.model_name, output_shape, output_data)
    }
}
