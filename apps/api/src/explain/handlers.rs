//! Axum route handlers for the Explain API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::explain::simplifier::{explain, ExplainResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExplainRequest {
    pub text: String,
}

/// POST /api/explain
///
/// Runs the heuristic explainer over `text`. Malformed bodies are rejected
/// with the standard error envelope before the explainer is touched.
pub async fn handle_explain(
    State(state): State<AppState>,
    payload: Result<Json<ExplainRequest>, JsonRejection>,
) -> Result<Json<ExplainResponse>, AppError> {
    let Json(request) = payload?;

    let response = explain(&request.text, &state.rules);
    debug!(
        "Explained {} bytes of text ({} tips)",
        request.text.len(),
        response.tips.as_ref().map_or(0, Vec::len)
    );

    Ok(Json(response))
}
