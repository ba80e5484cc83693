//! Configuration management for the classification service.
//!
//! This module provides configuration types, validation traits, and utilities
//! for loading the service configuration from JSON.

pub mod classifier;
pub mod errors;
pub mod onnx;
pub mod service;

pub use classifier::ClassifierConfig;
pub use errors::{ConfigError, ConfigValidator, ConfigValidatorExt};
pub use onnx::*;
pub use service::{ServerConfig, ServiceConfig};
