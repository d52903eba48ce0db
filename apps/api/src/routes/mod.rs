pub mod diagnostics;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::explain::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/api/hello", get(health::hello_handler))
        .route("/api/explain", post(handlers::handle_explain))
        .route("/test", get(diagnostics::database_diagnostic_handler))
        .with_state(state)
}
