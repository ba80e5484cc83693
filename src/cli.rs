//! Command-line arguments shared by the binaries.
//!
//! Every flag has a `DIATOM_*` environment fallback. Values given on the
//! command line (or in the environment) override those of the JSON file.

use crate::core::config::{
    ClassifierConfig, ConfigError, ConfigValidatorExt, OrtExecutionProvider, OrtSessionConfig,
    ServerConfig, ServiceConfig,
};
use crate::core::ClassifierError;
use clap::Args;
use std::path::PathBuf;
use tracing::warn;

/// Classifier and catalog options.
#[derive(Debug, Clone, Default, Args)]
pub struct ClassifierArgs {
    /// JSON configuration file
    #[arg(short, long, env = "DIATOM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to the ONNX weights artifact
    #[arg(short, long, env = "DIATOM_MODEL_PATH")]
    pub model_path: Option<PathBuf>,

    /// Comma-separated class labels, in model output order
    #[arg(long, env = "DIATOM_CLASS_NAMES", value_delimiter = ',')]
    pub class_names: Option<Vec<String>>,

    /// File with one class label per line
    #[arg(long, env = "DIATOM_CLASS_NAMES_PATH")]
    pub class_names_path: Option<PathBuf>,

    /// Width of the model output
    #[arg(short, long, env = "DIATOM_NUM_CLASSES")]
    pub num_classes: Option<usize>,

    /// Number of ONNX Runtime sessions serving requests in parallel
    #[arg(long, env = "DIATOM_SESSION_POOL_SIZE")]
    pub session_pool_size: Option<usize>,

    /// Device to run inference on (cpu, cuda, cuda:N)
    #[arg(long, env = "DIATOM_DEVICE")]
    pub device: Option<String>,
}

/// HTTP listener options.
#[derive(Debug, Clone, Default, Args)]
pub struct ServerArgs {
    /// Interface to bind
    #[arg(long, env = "DIATOM_HOST")]
    pub host: Option<String>,

    /// Port to bind
    #[arg(short, long, env = "DIATOM_PORT")]
    pub port: Option<u16>,

    /// Maximum accepted request body size in bytes
    #[arg(long, env = "DIATOM_BODY_LIMIT_BYTES")]
    pub body_limit_bytes: Option<usize>,
}

impl ClassifierArgs {
    /// Reads the configuration file, if any, and applies the overrides.
    ///
    /// The result is not validated.
    pub fn load(&self) -> Result<ServiceConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ServiceConfig::from_json_file(path)?,
            None => ServiceConfig::default(),
        };
        self.apply(&mut config.classifier)?;
        Ok(config)
    }

    /// Applies the command-line overrides to `config`.
    pub fn apply(&self, config: &mut ClassifierConfig) -> Result<(), ConfigError> {
        if let Some(path) = &self.model_path {
            config.model_path = path.clone();
        }
        if let Some(names) = &self.class_names {
            config.class_names = Some(names.iter().map(|n| n.trim().to_string()).collect());
            config.class_names_path = None;
        }
        if let Some(path) = &self.class_names_path {
            config.class_names_path = Some(path.clone());
            config.class_names = None;
        }
        if let Some(n) = self.num_classes {
            config.num_classes = Some(n);
        }
        if let Some(size) = self.session_pool_size {
            config.session_pool_size = Some(size);
        }
        if let Some(device) = &self.device {
            let providers = parse_device(device)?;
            config
                .ort_session
                .get_or_insert_with(OrtSessionConfig::new)
                .execution_providers = Some(providers);
        }
        Ok(())
    }
}

impl ServerArgs {
    /// Applies the command-line overrides to `config`.
    pub fn apply(&self, config: &mut ServerConfig) {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(limit) = self.body_limit_bytes {
            config.body_limit_bytes = limit;
        }
    }
}

/// Loads the full service configuration and validates it.
pub fn load_service_config(
    classifier: &ClassifierArgs,
    server: &ServerArgs,
) -> Result<ServiceConfig, ClassifierError> {
    let mut config = classifier.load()?;
    server.apply(&mut config.server);
    config.validate_and_wrap()
}

/// Parses a device string into execution providers, in order of preference.
///
/// Accepts `cpu`, `cuda` and `cuda:<id>`. CUDA keeps the CPU as a fallback.
pub fn parse_device(device: &str) -> Result<Vec<OrtExecutionProvider>, ConfigError> {
    let device = device.trim().to_lowercase();

    let device_id = if device == "cpu" {
        return Ok(vec![OrtExecutionProvider::CPU]);
    } else if device == "cuda" {
        0
    } else if let Some(id) = device.strip_prefix("cuda:") {
        id.parse::<i32>().map_err(|_| ConfigError::InvalidConfig {
            message: format!("invalid CUDA device id: {id}"),
        })?
    } else {
        return Err(ConfigError::InvalidConfig {
            message: format!("unsupported device '{device}', expected cpu, cuda or cuda:N"),
        });
    };

    if cfg!(not(feature = "cuda")) {
        warn!("CUDA requested but the `cuda` feature is not enabled; falling back to CPU");
        return Ok(vec![OrtExecutionProvider::CPU]);
    }

    Ok(vec![
        OrtExecutionProvider::CUDA {
            device_id: Some(device_id),
        },
        OrtExecutionProvider::CPU,
    ])
}
