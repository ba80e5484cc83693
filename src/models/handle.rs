//! Shared, read-only handle to the provisioned classifier.

use crate::core::{Classifier, ClassifierResult, ImageTensor, Tensor1D};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Where the classifier behind a [`ModelHandle`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelProvenance {
    /// Loaded from the weights artifact at `path`.
    Trained { path: PathBuf },
    /// Untrained stand-in used after a failed load.
    Fallback,
}

impl fmt::Display for ModelProvenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trained { path } => write!(f, "trained ({})", path.display()),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

/// Cheaply clonable handle shared by all requests.
#[derive(Debug, Clone)]
pub struct ModelHandle {
    model: Arc<dyn Classifier>,
    provenance: ModelProvenance,
}

impl ModelHandle {
    pub fn trained(model: impl Classifier + 'static, path: impl Into<PathBuf>) -> Self {
        Self {
            model: Arc::new(model),
            provenance: ModelProvenance::Trained { path: path.into() },
        }
    }

    pub fn fallback(model: impl Classifier + 'static) -> Self {
        Self {
            model: Arc::new(model),
            provenance: ModelProvenance::Fallback,
        }
    }

    /// `true` when the trained weights are in use.
    pub fn is_loaded(&self) -> bool {
        matches!(self.provenance, ModelProvenance::Trained { .. })
    }

    pub fn provenance(&self) -> &ModelProvenance {
        &self.provenance
    }

    pub fn name(&self) -> &str {
        self.model.name()
    }

    pub fn num_classes(&self) -> usize {
        self.model.num_classes()
    }

    pub fn forward(&self, input: &ImageTensor) -> ClassifierResult<Tensor1D> {
        self.model.forward(input)
    }
}
