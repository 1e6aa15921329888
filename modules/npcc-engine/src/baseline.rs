//! The 2026 baseline the dashboard initializes from.

use npcc_common::{format_billions, format_degrees};
use serde::{Deserialize, Serialize};

/// First year of the simulated programme.
pub const BASE_YEAR: i32 = 2026;

/// Projection horizon in years (2026 through 2035 inclusive).
pub const HORIZON_YEARS: i32 = 10;

/// Temperature anomaly vs pre-industrial at the start of the programme, °C.
pub const BASELINE_ANOMALY: f64 = 1.2;

/// Business-as-usual warming per year with no intervention, °C.
pub const BAU_WARMING_PER_YEAR: f64 = 0.04;

/// Observed anomalies for the decade before the programme, °C.
const HISTORICAL_ANOMALIES: [(i32, f64); 10] = [
    (2016, 0.85),
    (2017, 0.88),
    (2018, 0.92),
    (2019, 0.95),
    (2020, 0.98),
    (2021, 1.02),
    (2022, 1.05),
    (2023, 1.08),
    (2024, 1.12),
    (2025, 1.16),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearTemperature {
    pub year: i32,
    pub temperature: f64,
}

/// Starting state for dashboard initialization: where the nation stands
/// before any lever is pulled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineState {
    pub year: i32,
    pub temperature_anomaly: f64,
    pub temperature_formatted: String,
    pub national_debt: f64,
    pub national_debt_formatted: String,
    pub bau_projection: Vec<YearTemperature>,
    pub historical_data: Vec<YearTemperature>,
}

/// Business-as-usual anomaly for a given programme year index (0-based).
pub(crate) fn bau_anomaly(year_index: i32) -> f64 {
    BASELINE_ANOMALY + BAU_WARMING_PER_YEAR * year_index as f64
}

pub(crate) fn build_baseline() -> BaselineState {
    let bau_projection = (0..HORIZON_YEARS)
        .map(|i| YearTemperature {
            year: BASE_YEAR + i,
            temperature: round2(bau_anomaly(i)),
        })
        .collect();

    let historical_data = HISTORICAL_ANOMALIES
        .iter()
        .map(|&(year, temperature)| YearTemperature { year, temperature })
        .collect();

    BaselineState {
        year: BASE_YEAR,
        temperature_anomaly: BASELINE_ANOMALY,
        temperature_formatted: format_degrees(BASELINE_ANOMALY),
        national_debt: 0.0,
        national_debt_formatted: format_billions(0.0),
        bau_projection,
        historical_data,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
