use super::*;
use crate::core::config::{
    ClassifierConfig, OrtExecutionProvider, OrtGraphOptimizationLevel, OrtSessionConfig,
};
use crate::core::inference::session::load_session_with;
use ort::execution_providers::ExecutionProviderDispatch;
use ort::logging::LogLevel;
use ort::session::builder::{GraphOptimizationLevel, SessionBuilder};
use tracing::debug;

impl OrtInfer {
    /// Creates a session pool from a classifier configuration.
    ///
    /// The input name defaults to the first declared graph input and the
    /// output is always the first declared graph output.
    pub fn from_config(config: &ClassifierConfig) -> Result<Self, ClassifierError> {
        let path = config.model_path.as_path();
        let pool_size = config.get_session_pool_size();
        let mut sessions = Vec::with_capacity(pool_size);

        for _ in 0..pool_size {
            let session = load_session_with(path, |builder| {
                let builder = builder.with_log_level(LogLevel::Error)?;
                match &config.ort_session {
                    Some(cfg) => Self::apply_ort_config(builder, cfg),
                    None => Ok(builder),
                }
            })?;
            sessions.push(session);
        }

        let first = sessions.first().ok_or_else(|| {
            ClassifierError::model_load_error(
                path,
                "session pool is empty",
                None,
                None::<ort::Error>,
            )
        })?;

        let declared_input = first.inputs.first().ok_or_else(|| {
            ClassifierError::model_load_error(
                path,
                "graph declares no inputs",
                Some("export the classifier with a single image input"),
                None::<ort::Error>,
            )
        })?;
        let declared_output = first.outputs.first().ok_or_else(|| {
            ClassifierError::model_load_error(
                path,
                "graph declares no outputs",
                Some("export the classifier with a logits output"),
                None::<ort::Error>,
            )
        })?;

        let input_name = config
            .input_name
            .clone()
            .unwrap_or_else(|| declared_input.name.clone());
        let output_name = declared_output.name.clone();
        let input_shape = tensor_shape(&declared_input.input_type);
        let output_shape = tensor_shape(&declared_output.output_type);

        debug!(
            model = %path.display(),
            pool_size,
            input = %input_name,
            output = %output_name,
            ?input_shape,
            ?output_shape,
            "created ONNX session pool"
        );

        Ok(OrtInfer {
            sessions: sessions.into_iter().map(Mutex::new).collect(),
            next_idx: std::sync::atomic::AtomicUsize::new(0),
            input_name,
            output_name,
            input_shape,
            output_shape,
            model_path: path.to_path_buf(),
            model_name: config.get_model_name(),
        })
    }

    /// Applies ORT session configuration to a session builder.
    pub(super) fn apply_ort_config(
        mut builder: SessionBuilder,
        cfg: &OrtSessionConfig,
    ) -> Result<SessionBuilder, ort::Error> {
        if let Some(intra) = cfg.intra_threads {
            builder = builder.with_intra_threads(intra)?;
        }
        if let Some(inter) = cfg.inter_threads {
            builder = builder.with_inter_threads(inter)?;
        }
        if let Some(par) = cfg.parallel_execution {
            builder = builder.with_parallel_execution(par)?;
        }
        if let Some(level) = cfg.optimization_level {
            let mapped = match level {
                OrtGraphOptimizationLevel::DisableAll => GraphOptimizationLevel::Disable,
                OrtGraphOptimizationLevel::Level1 => GraphOptimizationLevel::Level1,
                OrtGraphOptimizationLevel::Level2 => GraphOptimizationLevel::Level2,
                OrtGraphOptimizationLevel::Level3 => GraphOptimizationLevel::Level3,
            };
            builder = builder.with_optimization_level(mapped)?;
        }
        if let Some(eps) = &cfg.execution_providers {
            let providers = Self::build_execution_providers(eps);
            if !providers.is_empty() {
                builder = builder.with_execution_providers(providers)?;
            }
        }
        Ok(builder)
    }

    /// Builds execution providers from configuration.
    ///
    /// Providers that were not compiled in are skipped; ONNX Runtime falls
    /// back to the CPU.
    fn build_execution_providers(eps: &[OrtExecutionProvider]) -> Vec<ExecutionProviderDispatch> {
        let mut providers = Vec::new();

        for ep in eps {
            match ep {
                OrtExecutionProvider::CPU => {
                    providers
                        .push(ort::execution_providers::CPUExecutionProvider::default().build());
                }
                #[cfg(feature = "cuda")]
                OrtExecutionProvider::CUDA { device_id } => {
                    let mut cuda_provider =
                        ort::execution_providers::CUDAExecutionProvider::default();
                    if let Some(id) = device_id {
                        cuda_provider = cuda_provider.with_device_id(*id);
                    }
                    providers.push(cuda_provider.build());
                }
                #[cfg(not(feature = "cuda"))]
                OrtExecutionProvider::CUDA { .. } => {
                    tracing::warn!(
                        "CUDA execution provider requested but the `cuda` feature is disabled"
                    );
                }
            }
        }

        providers
    }
}
