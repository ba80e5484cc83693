//! Preprocessing of raw upload bytes into a model input tensor.

use super::{NormalizeImage, ResizeImage};
use crate::core::{ClassifierResult, ImageTensor};
use crate::utils::decode_image_bytes;
use image::RgbImage;

/// Decode, resize and normalize chain producing an [`ImageTensor`].
///
/// The chain is fixed: content-sniffed decode to 8-bit RGB, bilinear resize
/// to 224×224 and ImageNet normalization. It holds no per-request state.
#[derive(Debug, Clone, Default)]
pub struct ImagePreprocessor {
    resize: ResizeImage,
    normalize: NormalizeImage,
}

impl ImagePreprocessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preprocesses encoded image bytes (PNG, JPEG, TIFF, ...).
    ///
    /// # Errors
    ///
    /// `ImageDecode` for empty or undecodable bytes. Nothing after decoding
    /// can fail for a valid image.
    pub fn preprocess(&self, raw_bytes: &[u8]) -> ClassifierResult<ImageTensor> {
        let img = decode_image_bytes(raw_bytes)?;
        self.preprocess_image(&img)
    }

    /// Preprocesses an already decoded RGB image.
    pub fn preprocess_image(&self, img: &RgbImage) -> ClassifierResult<ImageTensor> {
        let resized = self.resize.apply(img)?;
        self.normalize.apply(&resized)
    }
}

/// Preprocesses encoded image bytes with the default chain.
pub fn preprocess(raw_bytes: &[u8]) -> ClassifierResult<ImageTensor> {
    ImagePreprocessor::new().preprocess(raw_bytes)
}
