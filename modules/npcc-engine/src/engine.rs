//! The policy impact engine: levers in, structured impact record out.
//!
//! Pure and deterministic. No I/O, no clocks, no randomness: the same
//! inputs always produce the same record, which is what keeps the
//! calculation endpoint stateless.

use npcc_common::{format_billions, format_degrees, format_percent, PolicyInputs};
use serde::{Deserialize, Serialize};

use crate::baseline::{build_baseline, BaselineState};
use crate::projection::{build_trend_line, TrendPoint};

/// Net programme debt above which the treasury declares bankruptcy, $B.
pub const BANKRUPTCY_THRESHOLD_BILLIONS: f64 = 1000.0;

/// Per-category cost and temperature contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyLine {
    pub policy: String,
    pub level: f64,
    pub cost: f64,
    pub cost_formatted: String,
    pub temperature: f64,
    pub temperature_formatted: String,
}

/// Share of the total spend claimed by one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreemapSlice {
    pub name: String,
    pub value: f64,
    pub formatted: String,
    pub percentage: f64,
    pub percentage_formatted: String,
}

/// Mitigation bought per billion spent, in milli-°C per $B.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyEntry {
    pub policy: String,
    pub efficiency: f64,
    pub interpretation: String,
}

/// Full impact record for one lever configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactResult {
    pub total_cost: f64,
    pub total_cost_formatted: String,
    pub carbon_revenue: f64,
    pub carbon_revenue_formatted: String,
    pub national_debt: f64,
    pub national_debt_formatted: String,
    pub temperature_mitigation: f64,
    pub temperature_mitigation_formatted: String,
    pub bankruptcy_flag: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning_message: Option<String>,
    pub policy_breakdown: Vec<PolicyLine>,
    pub fiscal_treemap: Vec<TreemapSlice>,
    pub efficiency_index: Vec<EfficiencyEntry>,
    pub trend_line: Vec<TrendPoint>,
}

/// Stateless calculator mapping lever positions to fiscal and temperature
/// impacts.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyEngine;

impl PolicyEngine {
    pub fn new() -> Self {
        Self
    }

    /// Starting state for dashboard initialization.
    pub fn baseline_state(&self) -> BaselineState {
        build_baseline()
    }

    /// Calculate the full impact record for a lever configuration.
    /// Levers outside 0-100 are clamped; NaN reads as 0.
    pub fn calculate_impacts(&self, inputs: &PolicyInputs) -> ImpactResult {
        let inputs = inputs.clamped();

        let mut total_cost = 0.0;
        let mut carbon_revenue = 0.0;
        let mut temperature_mitigation = 0.0;
        let mut policy_breakdown = Vec::new();

        for (category, level) in inputs.levels() {
            let cost = level * category.cost_per_point();
            let temperature = level * category.mitigation_per_point();
            total_cost += cost;
            carbon_revenue += level * category.revenue_per_point();
            temperature_mitigation += temperature;

            if level > 0.0 {
                policy_breakdown.push(PolicyLine {
                    policy: category.display_name().to_string(),
                    level,
                    cost: round1(cost),
                    cost_formatted: format_billions(cost),
                    temperature: round3(temperature),
                    temperature_formatted: format_degrees(temperature),
                });
            }
        }

        let national_debt = total_cost - carbon_revenue;
        let bankruptcy_flag = national_debt > BANKRUPTCY_THRESHOLD_BILLIONS;
        let warning_message = bankruptcy_flag.then(|| {
            format!(
                "National debt of {} exceeds the {} bankruptcy threshold. \
                 The treasury cannot finance this programme.",
                format_billions(national_debt),
                format_billions(BANKRUPTCY_THRESHOLD_BILLIONS),
            )
        });

        let fiscal_treemap = build_treemap(&inputs, total_cost);
        let efficiency_index = build_efficiency_index(&inputs);
        let trend_line = build_trend_line(temperature_mitigation, national_debt);

        ImpactResult {
            total_cost: round1(total_cost),
            total_cost_formatted: format_billions(total_cost),
            carbon_revenue: round1(carbon_revenue),
            carbon_revenue_formatted: format_billions(carbon_revenue),
            national_debt: round1(national_debt),
            national_debt_formatted: format_billions(national_debt),
            temperature_mitigation: round3(temperature_mitigation),
            temperature_mitigation_formatted: format_degrees(temperature_mitigation),
            bankruptcy_flag,
            warning_message,
            policy_breakdown,
            fiscal_treemap,
            efficiency_index,
            trend_line,
        }
    }
}

fn build_treemap(inputs: &PolicyInputs, total_cost: f64) -> Vec<TreemapSlice> {
    inputs
        .levels()
        .filter_map(|(category, level)| {
            let cost = level * category.cost_per_point();
            if cost <= 0.0 {
                return None;
            }
            let percentage = if total_cost > 0.0 {
                round1(cost / total_cost * 100.0)
            } else {
                0.0
            };
            Some(TreemapSlice {
                name: category.display_name().to_string(),
                value: round1(cost),
                formatted: format_billions(cost),
                percentage,
                percentage_formatted: format_percent(percentage),
            })
        })
        .collect()
}

fn build_efficiency_index(inputs: &PolicyInputs) -> Vec<EfficiencyEntry> {
    let mut entries: Vec<EfficiencyEntry> = inputs
        .levels()
        .filter_map(|(category, level)| {
            let cost = level * category.cost_per_point();
            if level <= 0.0 || cost <= 0.0 {
                return None;
            }
            // Linear model, so the ratio is per-category constant: milli-°C
            // of mitigation bought per $B spent.
            let mitigation = (level * category.mitigation_per_point()).abs();
            let efficiency = round2(mitigation / cost * 1000.0);
            Some(EfficiencyEntry {
                policy: category.display_name().to_string(),
                efficiency,
                interpretation: interpret_efficiency(efficiency).to_string(),
            })
        })
        .collect();

    // Best value first.
    entries.sort_by(|a, b| b.efficiency.total_cmp(&a.efficiency));
    entries
}

fn interpret_efficiency(efficiency: f64) -> &'static str {
    if efficiency >= 4.0 {
        "Excellent"
    } else if efficiency >= 2.0 {
        "High"
    } else if efficiency >= 1.0 {
        "Moderate"
    } else {
        "Low"
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
