//! End-to-end checks of the impact record a dashboard consumes: one
//! moderate scenario, one bankruptcy scenario, and the baseline document.

use npcc_common::PolicyInputs;
use npcc_engine::PolicyEngine;

// ---------------------------------------------------------------------------
// Baseline document
// ---------------------------------------------------------------------------

#[test]
fn baseline_state_serializes_with_dashboard_fields() {
    let state = PolicyEngine::new().baseline_state();
    let json = serde_json::to_value(&state).unwrap();

    assert_eq!(json["year"], 2026);
    assert_eq!(json["temperature_anomaly"], 1.2);
    assert_eq!(json["national_debt"], 0.0);
    assert!(json["bau_projection"].as_array().unwrap().len() == 10);
    assert!(json["historical_data"].as_array().unwrap().len() == 10);
    assert_eq!(json["bau_projection"][0]["year"], 2026);
    assert_eq!(json["historical_data"][0]["year"], 2016);
}

// ---------------------------------------------------------------------------
// Moderate scenario: the demo configuration from the launch deck
// ---------------------------------------------------------------------------

#[test]
fn moderate_scenario_full_record() {
    let inputs = PolicyInputs {
        ev_adoption: 50.0,
        renewable_energy: 75.0,
        carbon_tax: 60.0,
        reforestation: 40.0,
        ..Default::default()
    };
    let result = PolicyEngine::new().calculate_impacts(&inputs);

    // Costs: 50×1.2 + 75×2.5 + 60×0.4 + 40×0.6 = 60 + 187.5 + 24 + 24.
    assert_eq!(result.total_cost, 295.5);
    assert_eq!(result.total_cost_formatted, "$295.5B");
    // Revenue: 60×2.0.
    assert_eq!(result.carbon_revenue, 120.0);
    assert_eq!(result.national_debt, 175.5);
    assert!(!result.bankruptcy_flag);
    assert!(result.warning_message.is_none());

    // Mitigation: 50×0.0030 + 75×0.0045 + 60×0.0025 + 40×0.0035, cooling.
    assert!((result.temperature_mitigation + 0.7775).abs() <= 0.001);
    assert!(result.temperature_mitigation_formatted.starts_with("-0.7"));
    assert!(result.temperature_mitigation_formatted.ends_with("°C"));

    // Four active levers → four breakdown lines and treemap slices.
    assert_eq!(result.policy_breakdown.len(), 4);
    assert_eq!(result.fiscal_treemap.len(), 4);
    assert_eq!(result.efficiency_index.len(), 4);
    assert_eq!(result.trend_line.len(), 10);

    let renewables = result
        .policy_breakdown
        .iter()
        .find(|line| line.policy == "Renewable Energy Expansion")
        .unwrap();
    assert_eq!(renewables.level, 75.0);
    assert_eq!(renewables.cost, 187.5);
    assert_eq!(renewables.cost_formatted, "$187.5B");
    assert!((renewables.temperature + 0.3375).abs() <= 0.001);

    let biggest_slice = result
        .fiscal_treemap
        .iter()
        .max_by(|a, b| a.percentage.total_cmp(&b.percentage))
        .unwrap();
    assert_eq!(biggest_slice.name, "Renewable Energy Expansion");
    assert_eq!(biggest_slice.percentage, 63.5);
    assert_eq!(biggest_slice.percentage_formatted, "63.5%");
}

#[test]
fn moderate_scenario_trend_line_walks_to_the_headline() {
    let inputs = PolicyInputs {
        ev_adoption: 50.0,
        renewable_energy: 75.0,
        carbon_tax: 60.0,
        reforestation: 40.0,
        ..Default::default()
    };
    let result = PolicyEngine::new().calculate_impacts(&inputs);

    let first = &result.trend_line[0];
    assert_eq!(first.year, 2026);
    assert!(first.projected_temperature < first.bau_temperature);
    assert!(first.cumulative_debt > 0.0);

    let last = &result.trend_line[9];
    assert_eq!(last.year, 2035);
    assert_eq!(last.cumulative_debt, result.national_debt);

    // Debt grows monotonically while spending continues.
    for window in result.trend_line.windows(2) {
        assert!(window[0].cumulative_debt < window[1].cumulative_debt);
    }
}

// ---------------------------------------------------------------------------
// Bankruptcy scenario
// ---------------------------------------------------------------------------

#[test]
fn overspend_without_revenue_goes_bankrupt() {
    let inputs = PolicyInputs {
        ev_adoption: 100.0,
        renewable_energy: 100.0,
        carbon_tax: 0.0,
        reforestation: 100.0,
        public_transport: 100.0,
        industrial_controls: 100.0,
        green_buildings: 100.0,
        waste_management: 100.0,
    };
    let result = PolicyEngine::new().calculate_impacts(&inputs);

    assert!(result.bankruptcy_flag);
    assert_eq!(result.national_debt, 1050.0);
    assert!(result
        .warning_message
        .as_deref()
        .unwrap()
        .contains("bankruptcy threshold"));
    // Carbon tax idle → no slice for it, seven of everything else.
    assert_eq!(result.fiscal_treemap.len(), 7);
    assert!(result
        .fiscal_treemap
        .iter()
        .all(|slice| slice.name != "Carbon Tax Implementation"));
}
