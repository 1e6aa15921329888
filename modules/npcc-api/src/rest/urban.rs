use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;

use npcc_common::{NpccError, PolicyInputs};
use npcc_urban::{ImageStyle, Scenario, UrbanImpactGenerator};

use crate::AppState;

use super::{error_envelope, generation_failure, ok_envelope};

const DEFAULT_CITY_DESCRIPTION: &str = "urban cityscape";

#[derive(Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub policy_inputs: PolicyInputs,
    pub baseline_image: Option<String>,
    pub city_description: Option<String>,
    pub style: Option<String>,
}

#[derive(Deserialize)]
pub struct QuickGenerateRequest {
    #[serde(default)]
    pub policy_inputs: PolicyInputs,
    pub scenario: Option<String>,
}

fn generator(state: &AppState) -> Result<&UrbanImpactGenerator, axum::response::Response> {
    state.urban.as_ref().ok_or_else(|| {
        generation_failure(
            "Image generation failed",
            NpccError::Config("STABILITY_API_KEY not configured".to_string()),
        )
    })
}

pub async fn api_generate(
    State(state): State<Arc<AppState>>,
    body: Result<Json<GenerateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match body {
        Ok(body) => body,
        Err(_) => return error_envelope(StatusCode::BAD_REQUEST, "Missing request data"),
    };

    let urban = match generator(&state) {
        Ok(urban) => urban,
        Err(response) => return response,
    };

    let calculation = state.engine.calculate_impacts(&request.policy_inputs);
    let city = request
        .city_description
        .as_deref()
        .unwrap_or(DEFAULT_CITY_DESCRIPTION);
    let style = ImageStyle::from_key(request.style.as_deref().unwrap_or_default());

    match urban
        .generate_comparison(
            &request.policy_inputs,
            &calculation,
            city,
            style,
            request.baseline_image,
        )
        .await
    {
        Ok(comparison) => ok_envelope(comparison),
        Err(e) => generation_failure("Image generation failed", e.into()),
    }
}

pub async fn api_quick_generate(
    State(state): State<Arc<AppState>>,
    body: Result<Json<QuickGenerateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match body {
        Ok(body) => body,
        Err(_) => return error_envelope(StatusCode::BAD_REQUEST, "Missing request data"),
    };

    let urban = match generator(&state) {
        Ok(urban) => urban,
        Err(response) => return response,
    };

    let calculation = state.engine.calculate_impacts(&request.policy_inputs);
    let scenario = Scenario::from_key(request.scenario.as_deref().unwrap_or("modern_city"));

    match urban
        .quick_generate(&request.policy_inputs, &calculation, scenario)
        .await
    {
        Ok(comparison) => ok_envelope(comparison),
        Err(e) => generation_failure("Image generation failed", e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_request_defaults() {
        let request: GenerateRequest = serde_json::from_str(
            r#"{"policy_inputs": {"renewable_energy": 80}, "style": "artistic"}"#,
        )
        .unwrap();
        assert_eq!(request.policy_inputs.renewable_energy, 80.0);
        assert!(request.baseline_image.is_none());
        assert!(request.city_description.is_none());
        assert_eq!(request.style.as_deref(), Some("artistic"));
    }

    #[test]
    fn quick_request_tolerates_empty_payload() {
        let request: QuickGenerateRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.policy_inputs, PolicyInputs::default());
        assert!(request.scenario.is_none());
    }
}
