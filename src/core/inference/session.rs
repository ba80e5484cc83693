//! Helpers for working directly with ONNX Runtime sessions.

use crate::core::errors::ClassifierError;
use ort::session::Session;
use ort::session::builder::SessionBuilder;
use std::path::Path;

/// Loads a session after letting `configure` adjust the builder.
pub fn load_session_with<F>(
    model_path: impl AsRef<Path>,
    configure: F,
) -> Result<Session, ClassifierError>
where
    F: FnOnce(SessionBuilder) -> Result<SessionBuilder, ort::Error>,
{
    let path = model_path.as_ref();
    let session = Session::builder()
        .and_then(configure)
        .and_then(|b| b.commit_from_file(path))
        .map_err(|e| {
            ClassifierError::model_load_error(
                path,
                "failed to create ONNX session",
                Some("verify the file is an ONNX graph supported by the execution providers"),
                Some(e),
            )
        })?;
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_session_missing_file() {
        let err = load_session_with("nonexistent_model.onnx", Ok).unwrap_err();
        assert!(matches!(err, ClassifierError::ModelLoad { .. }));
        assert!(err.to_string().contains("nonexistent_model.onnx"));
    }
}
