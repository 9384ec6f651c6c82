use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Liveness message for the service root.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Careers backend is running"
    }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "careers-api"
    }))
}

/// GET /favicon.ico
/// Browsers probe this on every visit; answer 204 instead of a routing 404.
pub async fn favicon_handler() -> StatusCode {
    StatusCode::NO_CONTENT
}
