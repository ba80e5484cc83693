//! ONNX Runtime inference engine.
//!
//! [`OrtInfer`] owns a pool of sessions for one graph and exposes a single
//! batched forward pass returning a `[batch, classes]` score matrix.

pub mod ort_infer;
pub mod session;

pub use ort_infer::OrtInfer;
pub use session::load_session_with;
