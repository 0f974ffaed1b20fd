use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::config::Config;
use crate::infrastructure::storage::check_data_dir;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready(State(config): State<Arc<Config>>) -> impl IntoResponse {
    let generator = if config.generator_enabled() {
        "configured"
    } else {
        "disabled"
    };

    match check_data_dir(&config.data_dir).await {
        Ok(true) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "storage": "available",
                "generator": generator
            })),
        ),
        Ok(false) | Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "storage": "unavailable",
                "generator": generator
            })),
        ),
    }
}
