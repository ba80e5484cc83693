//! Utility functions for image decoding.
//!
//! Uploads carry no trustworthy file name, so the decoder is always picked by
//! sniffing the magic bytes of the content.

use crate::core::ClassifierError;
use image::error::{ParameterError, ParameterErrorKind};
use image::{DynamicImage, ImageError, ImageReader, RgbImage};
use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::Path;

/// Converts a DynamicImage to an RgbImage.
///
/// Grayscale and palette images are expanded to three channels; any alpha
/// channel is dropped.
pub fn dynamic_to_rgb(img: DynamicImage) -> RgbImage {
    img.to_rgb8()
}

/// Decodes raw image bytes into an 8-bit RGB image.
///
/// # Errors
///
/// Returns [`ClassifierError::ImageDecode`] when the bytes are empty, truncated,
/// in a format the `image` crate cannot read, or describe an image without pixels.
pub fn decode_image_bytes(bytes: &[u8]) -> Result<RgbImage, ClassifierError> {
    let img = decode_with_guessed_format(Cursor::new(bytes))?;
    Ok(dynamic_to_rgb(img))
}

/// Loads an image from a file path and converts it to RgbImage.
///
/// The content, not the extension, determines the decoder.
pub fn load_image(path: &Path) -> Result<RgbImage, ClassifierError> {
    let file = File::open(path)?;
    let img = decode_with_guessed_format(BufReader::new(file))?;
    Ok(dynamic_to_rgb(img))
}

fn decode_with_guessed_format<R>(reader: R) -> Result<DynamicImage, ImageError>
where
    R: std::io::BufRead + std::io::Seek,
{
    let img = ImageReader::new(reader).with_guessed_format()?.decode()?;
    // Some headers (PNM, farbfeld) legally declare a zero width or height.
    if img.width() == 0 || img.height() == 0 {
        return Err(ImageError::Parameter(ParameterError::from_kind(
            ParameterErrorKind::DimensionMismatch,
        )));
    }
    Ok(img)
}
