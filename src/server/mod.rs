//! HTTP surface of the classification service.
//!
//! Routes:
//! - `POST /predict` classifies the multipart field `file`.
//! - `GET /health` reports whether the trained weights are in use.
//! - `GET /classes` lists the class catalog.

pub mod error;
pub mod routes;

pub use error::ApiError;

use crate::core::config::ServerConfig;
use crate::predictor::ClassifierContext;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use std::sync::Arc;

/// Builds the service router over a shared classifier context.
pub fn router(context: Arc<ClassifierContext>, config: &ServerConfig) -> Router {
    Router::new()
        .route("/predict", post(routes::predict))
        .route("/health", get(routes::health))
        .route("/classes", get(routes::classes))
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .with_state(context)
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn serve(context: Arc<ClassifierContext>, config: &ServerConfig) -> std::io::Result<()> {
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        model = context.model().name(),
        model_loaded = context.model_loaded(),
        num_classes = context.num_classes(),
        "diatom classifier listening"
    );

    axum::serve(listener, router(context, config))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => {
            tracing::error!(error = %e, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    }
}
