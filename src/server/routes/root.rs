//! Liveness endpoints.

use axum::Json;
use serde_json::{json, Value};

/// GET /
pub async fn hello() -> Json<Value> {
    Json(json!({ "message": "Hello, world!" }))
}

/// GET /health
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
