//! Image and score processing stages of the classification pipeline.
//!
//! # Modules
//!
//! * `resize` - Fixed-size resampling of decoded images
//! * `normalization` - Per-channel scaling into the model's input distribution
//! * `preprocess` - Bytes-to-tensor preprocessing chain
//! * `softmax` - Numerically stable softmax and arg-max
//! * `decode` - Score vector to labelled prediction

mod decode;
mod normalization;
mod preprocess;
mod resize;
pub mod softmax;

pub use decode::*;
pub use normalization::*;
pub use preprocess::*;
pub use resize::*;
pub use softmax::{argmax, softmax};
