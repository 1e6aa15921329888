use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;

use ai_client::util::strip_surrounding_quotes;
use npcc_common::{format_billions, format_degrees, NpccError, PolicyInputs};

use crate::AppState;

use super::{error_envelope, generation_failure, ok_envelope};

#[derive(Deserialize)]
pub struct NewsRequest {
    #[serde(flatten)]
    pub levels: PolicyInputs,
    /// Temperature mitigation achieved, °C (from a prior calculation).
    #[serde(default)]
    pub temperature_change: f64,
    /// Total fiscal investment, $B (from a prior calculation).
    #[serde(default)]
    pub fiscal_cost: f64,
}

/// Press-secretary prompt for the headline writer. The exemplars anchor the
/// register; the lever table anchors the numbers.
pub fn build_headline_prompt(levels: &PolicyInputs, temperature_change: f64, fiscal_cost: f64) -> String {
    format!(
        "You are a senior government press secretary in the year 2035.\n\
         Write a professional, confident 1-sentence headline announcing the results \
         of the national climate policy program.\n\
         \n\
         Current Policy Implementation Levels (0-100 scale):\n\
         - EV Adoption Incentives: {ev}%\n\
         - Renewable Energy Expansion: {renewable}%\n\
         - Carbon Tax Implementation: {carbon}%\n\
         - Reforestation Programs: {reforestation}%\n\
         - Public Transport Expansion: {transport}%\n\
         - Industrial Emission Controls: {industrial}%\n\
         - Green Building Standards: {buildings}%\n\
         - Waste Management & Recycling: {waste}%\n\
         \n\
         Additional Context:\n\
         - Temperature mitigation achieved: {temperature}\n\
         - Total fiscal investment: {cost}\n\
         \n\
         Write ONE headline that sounds like it came from a government press \
         conference. Be specific, use numbers when relevant, and convey a sense of \
         achievement or urgency depending on the policy levels.\n\
         \n\
         Examples of good headlines:\n\
         - \"Prime Minister Announces Historic Climate Victory as National Emissions \
         Drop 32% Below 2020 Levels\"\n\
         - \"Government Commits $180B to Renewable Energy Revolution, Targeting 75% \
         Clean Grid by 2040\"\n\
         - \"Treasury Reports $50B Revenue Gain from Carbon Tax as Industries Pivot \
         to Green Technologies\"\n\
         \n\
         Your headline:",
        ev = levels.ev_adoption,
        renewable = levels.renewable_energy,
        carbon = levels.carbon_tax,
        reforestation = levels.reforestation,
        transport = levels.public_transport,
        industrial = levels.industrial_controls,
        buildings = levels.green_buildings,
        waste = levels.waste_management,
        temperature = format_degrees(temperature_change),
        cost = format_billions(fiscal_cost),
    )
}

pub async fn api_news(
    State(state): State<Arc<AppState>>,
    body: Result<Json<NewsRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match body {
        Ok(body) => body,
        Err(_) => return error_envelope(StatusCode::BAD_REQUEST, "Missing input data"),
    };

    let Some(ref headlines) = state.headlines else {
        return generation_failure(
            "AI generation failed",
            NpccError::Config("GEMINI_API_KEY not configured".to_string()),
        );
    };

    let prompt =
        build_headline_prompt(&request.levels, request.temperature_change, request.fiscal_cost);

    let headline = match headlines.generate_text(&prompt).await {
        Ok(text) => strip_surrounding_quotes(&text).to_string(),
        Err(e) => return generation_failure("AI generation failed", e.into()),
    };

    ok_envelope(serde_json::json!({
        "headline": headline,
        "policy_summary": {
            "ev_adoption": request.levels.ev_adoption,
            "renewable_energy": request.levels.renewable_energy,
            "carbon_tax": request.levels.carbon_tax,
            "reforestation": request.levels.reforestation,
            "public_transport": request.levels.public_transport,
            "industrial_controls": request.levels.industrial_controls,
            "green_buildings": request.levels.green_buildings,
            "waste_management": request.levels.waste_management,
            "temperature_impact": request.temperature_change,
            "fiscal_cost": request.fiscal_cost,
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_lists_every_lever_with_its_level() {
        let levels = PolicyInputs {
            ev_adoption: 50.0,
            renewable_energy: 75.0,
            carbon_tax: 60.0,
            reforestation: 40.0,
            ..Default::default()
        };
        let prompt = build_headline_prompt(&levels, -0.28, 245.6);

        assert!(prompt.contains("EV Adoption Incentives: 50%"));
        assert!(prompt.contains("Renewable Energy Expansion: 75%"));
        assert!(prompt.contains("Carbon Tax Implementation: 60%"));
        assert!(prompt.contains("Reforestation Programs: 40%"));
        assert!(prompt.contains("Public Transport Expansion: 0%"));
        assert!(prompt.contains("Temperature mitigation achieved: -0.28°C"));
        assert!(prompt.contains("Total fiscal investment: $245.6B"));
        assert!(prompt.contains("year 2035"));
        assert!(prompt.ends_with("Your headline:"));
    }

    #[test]
    fn news_request_accepts_flat_payload() {
        let request: NewsRequest = serde_json::from_str(
            r#"{"ev_adoption": 50, "renewable_energy": 75, "temperature_change": -0.28, "fiscal_cost": 245.6}"#,
        )
        .unwrap();
        assert_eq!(request.levels.ev_adoption, 50.0);
        assert_eq!(request.levels.renewable_energy, 75.0);
        assert_eq!(request.levels.carbon_tax, 0.0);
        assert_eq!(request.temperature_change, -0.28);
        assert_eq!(request.fiscal_cost, 245.6);
    }
}
