//! Utility functions for the classification pipeline.
//!
//! Image decoding from raw bytes or files, and label file loading.

pub mod dict;
pub mod image;

pub use dict::read_class_names;
pub use image::{decode_image_bytes, dynamic_to_rgb, load_image};
