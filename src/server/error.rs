use crate::core::ClassifierError;
use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Error returned by HTTP handlers.
///
/// Client errors carry a message for the caller; internal errors are logged
/// and only expose their code.
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: Option<String>,
}

impl ApiError {
    fn new(status: StatusCode, code: &'static str, message: Option<String>) -> Self {
        Self {
            status,
            code,
            message,
        }
    }

    pub fn missing_file() -> Self {
        tracing::warn!("Bad request: no `file` field in upload");
        Self::new(
            StatusCode::BAD_REQUEST,
            "missing_file",
            Some("multipart field `file` is required".to_string()),
        )
    }

    pub fn bad_request(code: &'static str, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::warn!("Bad request: {}", msg);
        Self::new(StatusCode::BAD_REQUEST, code, Some(msg))
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::error!("Internal error: {}", msg);
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &'static str {
        self.code
    }
}

impl From<ClassifierError> for ApiError {
    fn from(err: ClassifierError) -> Self {
        match &err {
            ClassifierError::ImageDecode(_) => Self::bad_request("invalid_image", err.to_string()),
            _ if err.is_client_error() => Self::bad_request("invalid_input", err.to_string()),
            _ => Self::internal(err.to_string()),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        let status = err.status();
        if status.is_server_error() {
            return Self::internal(err.body_text());
        }
        tracing::warn!(%status, "Rejected upload: {}", err.body_text());
        let code = if status == StatusCode::PAYLOAD_TOO_LARGE {
            "payload_too_large"
        } else {
            "invalid_multipart"
        };
        Self::new(status, code, Some(err.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorBody<'a> {
            error: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            message: Option<&'a str>,
        }

        let body = ErrorBody {
            error: self.code,
            message: self.message.as_deref(),
        };
        (self.status, Json(body)).into_response()
    }
}
