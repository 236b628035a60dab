// handlers/public/health.rs - GET / and GET /health

use axum::{http::StatusCode, response::Json};
use serde_json::{json, Value};

use crate::database::DatabaseManager;

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Bienvenido a Citas v2 admin API OAuth2 del Poder Judicial del Estado de Coahuila de Zaragoza.",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// 200 when the database answers, 503 otherwise
pub async fn health() -> (StatusCode, Json<Value>) {
    match DatabaseManager::health_check().await {
        Ok(()) => (StatusCode::OK, Json(json!({"status": "ok", "database": "connected"}))),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"status": "unavailable", "database": "disconnected"})),
            )
        }
    }
}
