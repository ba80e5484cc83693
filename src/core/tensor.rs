//! Tensor types shared by the preprocessor and the classifiers.

use crate::core::constants::{INPUT_CHANNELS, INPUT_HEIGHT, INPUT_WIDTH};
use crate::core::errors::{ClassifierError, ClassifierResult};
use ndarray::{Array1, Array2, Array4, ArrayView4, Axis};

/// Type alias for 1D tensors (score vectors).
pub type Tensor1D = Array1<f32>;

/// Type alias for 2D tensors (batched score vectors).
pub type Tensor2D = Array2<f32>;

/// Type alias for 4D tensors (NCHW image batches).
pub type Tensor4D = Array4<f32>;

/// A normalized image ready for the classifier.
///
/// The shape is always `[1, 3, 224, 224]` (batch, channel, height, width), the
/// memory layout is contiguous row-major and every value is finite. These
/// invariants are checked once, when the tensor is built.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTensor {
    data: Tensor4D,
}

impl ImageTensor {
    /// The only shape an image tensor can have.
    pub const SHAPE: [usize; 4] = [1, INPUT_CHANNELS, INPUT_HEIGHT, INPUT_WIDTH];

    /// Wraps a 4D array, checking shape and finiteness.
    pub fn new(data: Tensor4D) -> ClassifierResult<Self> {
        if data.shape() != Self::SHAPE {
            return Err(ClassifierError::shape_mismatch(
                "ImageTensor",
                &Self::SHAPE,
                data.shape(),
            ));
        }

        if let Some(position) = data.iter().position(|v| !v.is_finite()) {
            return Err(ClassifierError::numeric_anomaly(
                "ImageTensor",
                format!("non-finite value at flat index {position}"),
            ));
        }

        let data = if data.is_standard_layout() {
            data
        } else {
            data.as_standard_layout().into_owned()
        };

        Ok(Self { data })
    }

    /// Builds a tensor from CHW-ordered values of a single image.
    pub fn from_chw(values: Vec<f32>) -> ClassifierResult<Self> {
        let expected: usize = Self::SHAPE.iter().product();
        if values.len() != expected {
            return Err(ClassifierError::shape_mismatch(
                "ImageTensor",
                &Self::SHAPE,
                &[values.len()],
            ));
        }
        let data = Array4::from_shape_vec(Self::SHAPE, values)?;
        Self::new(data)
    }

    /// Returns the tensor shape.
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Returns a view of the underlying array.
    pub fn view(&self) -> ArrayView4<'_, f32> {
        self.data.view()
    }

    /// Returns the contiguous values in NCHW order.
    pub fn as_slice(&self) -> Option<&[f32]> {
        self.data.as_slice()
    }

    /// Mean value of each channel, in channel order.
    pub fn channel_means(&self) -> Tensor1D {
        self.data
            .index_axis(Axis(0), 0)
            .axis_iter(Axis(0))
            .map(|channel| channel.mean().unwrap_or(0.0))
            .collect()
    }

    /// Consumes the tensor, returning the underlying array.
    pub fn into_inner(self) -> Tensor4D {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_expected_shape() {
        let tensor = ImageTensor::new(Array4::zeros(ImageTensor::SHAPE)).unwrap();
        assert_eq!(tensor.shape(), &ImageTensor::SHAPE);
        assert!(tensor.as_slice().is_some());
    }

    #[test]
    fn test_rejects_wrong_shape() {
        let err = ImageTensor::new(Array4::zeros((1, 3, 32, 32))).unwrap_err();
        assert!(matches!(err, ClassifierError::ShapeMismatch { .. }));

        let err = ImageTensor::new(Array4::zeros((2, 3, 224, 224))).unwrap_err();
        assert!(matches!(err, ClassifierError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_rejects_non_finite_values() {
        let mut data = Array4::zeros(ImageTensor::SHAPE);
        data[[0, 1, 10, 10]] = f32::NAN;
        let err = ImageTensor::new(data).unwrap_err();
        assert!(matches!(err, ClassifierError::NumericAnomaly { .. }));
    }

    #[test]
    fn test_from_chw_length_check() {
        assert!(ImageTensor::from_chw(vec![0.0; 10]).is_err());
        let len: usize = ImageTensor::SHAPE.iter().product();
        assert!(ImageTensor::from_chw(vec![0.5; len]).is_ok());
    }

    #[test]
    fn test_non_standard_layout_is_normalized() {
        let permuted = Array4::<f32>::zeros((1, 224, 224, 3)).permuted_axes([0, 3, 1, 2]);
        assert!(!permuted.is_standard_layout());
        let tensor = ImageTensor::new(permuted).unwrap();
        assert!(tensor.as_slice().is_some());
    }

    #[test]
    fn test_channel_means() {
        let plane = INPUT_HEIGHT * INPUT_WIDTH;
        let mut values = vec![1.0; plane];
        values.extend(vec![2.0; plane]);
        values.extend(vec![-3.0; plane]);
        let tensor = ImageTensor::from_chw(values).unwrap();

        let means = tensor.channel_means();
        assert_eq!(means.len(), 3);
        assert!((means[0] - 1.0).abs() < 1e-6);
        assert!((means[1] - 2.0).abs() < 1e-6);
        assert!((means[2] + 3.0).abs() < 1e-6);
    }
}
