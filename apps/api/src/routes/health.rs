use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Liveness probe — the only endpoint that skips the shared-secret check.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "online",
        "service": "FREDRICK AI",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
