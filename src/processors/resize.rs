//! Fixed-size image resizing.

use crate::core::constants::{INPUT_HEIGHT, INPUT_WIDTH};
use crate::core::{ClassifierError, SimpleError};
use image::RgbImage;
use image::imageops::{self, FilterType};

/// Resizes images to exact dimensions, ignoring aspect ratio.
///
/// No cropping or padding is applied.
#[derive(Debug, Clone, Copy)]
pub struct ResizeImage {
    pub width: u32,
    pub height: u32,
    pub filter: FilterType,
}

impl Default for ResizeImage {
    /// 224×224 with bilinear (`Triangle`) resampling.
    fn default() -> Self {
        Self::new(INPUT_WIDTH as u32, INPUT_HEIGHT as u32)
    }
}

impl ResizeImage {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            filter: FilterType::Triangle,
        }
    }

    /// Resizes `img` to the configured dimensions.
    ///
    /// # Errors
    ///
    /// Returns a resize error when either the source or the target has a zero dimension.
    pub fn apply(&self, img: &RgbImage) -> Result<RgbImage, ClassifierError> {
        let (src_w, src_h) = img.dimensions();
        if src_w == 0 || src_h == 0 || self.width == 0 || self.height == 0 {
            return Err(ClassifierError::resize_error(
                "cannot resize an empty image",
                SimpleError::new(format!(
                    "{}x{} -> {}x{}",
                    src_w, src_h, self.width, self.height
                )),
            ));
        }

        Ok(imageops::resize(img, self.width, self.height, self.filter))
    }
}
