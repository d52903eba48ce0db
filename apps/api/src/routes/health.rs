use axum::Json;
use serde_json::{json, Value};

/// GET /
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Hello from the Clarity backend!" }))
}

/// GET /api/hello
pub async fn hello_handler() -> Json<Value> {
    Json(json!({ "message": "Hello from the backend API!" }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "clarity-api"
    }))
}
