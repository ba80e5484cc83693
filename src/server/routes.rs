//! Request handlers.

use super::ApiError;
use crate::core::constants::UPLOAD_FIELD_NAME;
use crate::domain::PredictionResult;
use crate::domain::catalog::CatalogEntry;
use crate::predictor::ClassifierContext;
use axum::Json;
use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_loaded: bool,
    pub model: String,
    pub num_classes: usize,
}

#[derive(Debug, Serialize)]
struct ClassesResponse<'a> {
    classes: Vec<CatalogEntry<'a>>,
}

/// `POST /predict`: classifies the uploaded `file` field.
pub async fn predict(
    State(context): State<Arc<ClassifierContext>>,
    mut multipart: Multipart,
) -> Result<Json<PredictionResult>, ApiError> {
    let bytes = read_upload(&mut multipart)
        .await?
        .ok_or_else(ApiError::missing_file)?;

    tracing::debug!(bytes = bytes.len(), "received upload");
    let prediction = context.classify(&bytes)?;
    Ok(Json(prediction))
}

/// `GET /health`
pub async fn health(State(context): State<Arc<ClassifierContext>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        model_loaded: context.model_loaded(),
        model: context.model().name().to_string(),
        num_classes: context.num_classes(),
    })
}

/// `GET /classes`: the catalog in index order.
pub async fn classes(State(context): State<Arc<ClassifierContext>>) -> Response {
    Json(ClassesResponse {
        classes: context.catalog().iter().collect(),
    })
    .into_response()
}

/// Returns the bytes of the first upload field, skipping any other fields.
async fn read_upload(multipart: &mut Multipart) -> Result<Option<Bytes>, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(UPLOAD_FIELD_NAME) {
            return Ok(Some(field.bytes().await?));
        }
    }
    Ok(None)
}
