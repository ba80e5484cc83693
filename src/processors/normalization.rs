//! Image normalization into the model's input distribution.

use crate::core::constants::{IMAGENET_MEAN, IMAGENET_STD, INPUT_CHANNELS};
use crate::core::{ClassifierError, ImageTensor};
use image::RgbImage;

/// Per-channel affine normalization, `x * alpha + beta`, written in CHW order.
///
/// With `alpha = scale / std` and `beta = -mean / std` this computes
/// `(x * scale - mean) / std` in one multiply-add per value.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeImage {
    /// Scaling factors for each channel (alpha = scale / std)
    pub alpha: [f32; 3],
    /// Offset values for each channel (beta = -mean / std)
    pub beta: [f32; 3],
}

impl Default for NormalizeImage {
    fn default() -> Self {
        Self::imagenet()
    }
}

impl NormalizeImage {
    /// Creates a normalizer from a scale and per-channel statistics.
    ///
    /// # Errors
    ///
    /// Returns a config error if the scale or any standard deviation is not
    /// strictly positive, or if any statistic is not finite.
    pub fn new(scale: f32, mean: [f32; 3], std: [f32; 3]) -> Result<Self, ClassifierError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(ClassifierError::config_error(format!(
                "Scale must be greater than 0, got {scale}"
            )));
        }
        for (i, &s) in std.iter().enumerate() {
            if !(s.is_finite() && s > 0.0) {
                return Err(ClassifierError::config_error(format!(
                    "Standard deviation at index {i} must be greater than 0, got {s}"
                )));
            }
        }
        if let Some(m) = mean.iter().find(|m| !m.is_finite()) {
            return Err(ClassifierError::config_error(format!(
                "Mean values must be finite, got {m}"
            )));
        }

        Ok(Self::from_stats(scale, mean, std))
    }

    /// Natural-image statistics applied to pixels rescaled to `[0, 1]`.
    pub fn imagenet() -> Self {
        Self::from_stats(1.0 / 255.0, IMAGENET_MEAN, IMAGENET_STD)
    }

    fn from_stats(scale: f32, mean: [f32; 3], std: [f32; 3]) -> Self {
        let mut alpha = [0.0; 3];
        let mut beta = [0.0; 3];
        for c in 0..3 {
            alpha[c] = scale / std[c];
            beta[c] = -mean[c] / std[c];
        }
        Self { alpha, beta }
    }

    /// Normalizes a 224×224 RGB image into a `1×3×224×224` tensor.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the image is not exactly the model input size.
    pub fn apply(&self, img: &RgbImage) -> Result<ImageTensor, ClassifierError> {
        let [_, _, height, width] = ImageTensor::SHAPE;
        let (w, h) = img.dimensions();
        if (w as usize, h as usize) != (width, height) {
            return Err(ClassifierError::shape_mismatch(
                "NormalizeImage",
                &[height, width, INPUT_CHANNELS],
                &[h as usize, w as usize, INPUT_CHANNELS],
            ));
        }

        let plane = height * width;
        let mut result = vec![0.0f32; INPUT_CHANNELS * plane];
        for (x, y, pixel) in img.enumerate_pixels() {
            let offset = y as usize * width + x as usize;
            for c in 0..INPUT_CHANNELS {
                result[c * plane + offset] = pixel[c] as f32 * self.alpha[c] + self.beta[c];
            }
        }

        ImageTensor::from_chw(result)
    }
}
