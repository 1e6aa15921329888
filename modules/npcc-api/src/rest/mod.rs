pub mod news;
pub mod urban;

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use tracing::warn;

use npcc_common::{NpccError, PolicyInputs};

use crate::AppState;

// --- Envelope helpers ---

/// Success envelope: `{"success": true, "data": …}`.
pub fn ok_envelope(data: impl Serialize) -> Response {
    Json(serde_json::json!({
        "success": true,
        "data": data,
    }))
    .into_response()
}

/// Failure envelope: `{"success": false, "error": …}`.
pub fn error_envelope(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(serde_json::json!({
            "success": false,
            "error": message.into(),
        })),
    )
        .into_response()
}

/// Failed generative call: logged, then surfaced as a 500 envelope with the
/// endpoint's failure prefix (`AI generation failed` / `Image generation
/// failed`).
pub fn generation_failure(prefix: &str, error: NpccError) -> Response {
    warn!(error = %error, "{prefix}");
    error_envelope(
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("{prefix}: {error}"),
    )
}

// --- Handlers ---

pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "NPCC Backend API",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "policy_simulation": true,
            "ai_headlines": state.headlines.is_some(),
            "urban_impact_visualization": state.urban.is_some(),
        },
    }))
}

pub async fn api_init(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    ok_envelope(state.engine.baseline_state())
}

pub async fn api_calculate(
    State(state): State<Arc<AppState>>,
    body: Result<Json<PolicyInputs>, JsonRejection>,
) -> impl IntoResponse {
    let Json(inputs) = match body {
        Ok(body) => body,
        Err(_) => return error_envelope(StatusCode::BAD_REQUEST, "Missing policy inputs"),
    };

    ok_envelope(state.engine.calculate_impacts(&inputs))
}

pub async fn not_found() -> impl IntoResponse {
    error_envelope(StatusCode::NOT_FOUND, "Endpoint not found")
}
