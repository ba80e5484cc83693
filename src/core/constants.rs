//! Constants used throughout the classification pipeline.

/// Width of the model input in pixels.
pub const INPUT_WIDTH: usize = 224;

/// Height of the model input in pixels.
pub const INPUT_HEIGHT: usize = 224;

/// Number of color channels fed to the model.
pub const INPUT_CHANNELS: usize = 3;

/// Per-channel mean of the natural-image statistics the model was trained with.
pub const IMAGENET_MEAN: [f32; 3] = [0.485, 0.456, 0.406];

/// Per-channel standard deviation of the natural-image statistics the model was trained with.
pub const IMAGENET_STD: [f32; 3] = [0.229, 0.224, 0.225];

/// Label returned when a class index has no catalog entry.
pub const UNKNOWN_CLASS_NAME: &str = "Unknown";

/// Prefix of generated placeholder labels (`Class_<i>`).
pub const PLACEHOLDER_CLASS_PREFIX: &str = "Class_";

/// Number of decimal digits kept in reported confidences.
pub const CONFIDENCE_DECIMALS: i32 = 4;

/// Default location of the weights artifact.
pub const DEFAULT_MODEL_PATH: &str = "models/efficientnet_b0_diatoms.onnx";

/// Default interface the HTTP server binds to.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default port the HTTP server binds to.
pub const DEFAULT_PORT: u16 = 8000;

/// Default maximum request body size (10 MiB).
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

/// Multipart field carrying the uploaded image.
pub const UPLOAD_FIELD_NAME: &str = "file";
