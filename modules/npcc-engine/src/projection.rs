//! Ten-year trend line: BAU warming vs the with-policy path, plus debt
//! accumulation as the programme spend is drawn down.

use serde::{Deserialize, Serialize};

use crate::baseline::{bau_anomaly, BASE_YEAR, HORIZON_YEARS};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub year: i32,
    pub bau_temperature: f64,
    pub projected_temperature: f64,
    pub cumulative_debt: f64,
}

/// Build the 2026-2035 trend line for a programme with the given total
/// mitigation (°C, negative) and net debt ($B).
///
/// Mitigation phases in linearly: the full effect lands in the final year.
/// Spending is likewise spread evenly, so the last point's debt equals the
/// headline figure.
pub(crate) fn build_trend_line(temperature_mitigation: f64, national_debt: f64) -> Vec<TrendPoint> {
    (0..HORIZON_YEARS)
        .map(|i| {
            let phase = (i + 1) as f64 / HORIZON_YEARS as f64;
            let bau = bau_anomaly(i);
            TrendPoint {
                year: BASE_YEAR + i,
                bau_temperature: round3(bau),
                projected_temperature: round3(bau + temperature_mitigation * phase),
                cumulative_debt: round1(national_debt * phase),
            }
        })
        .collect()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_programme_tracks_bau_exactly() {
        let line = build_trend_line(0.0, 0.0);
        assert_eq!(line.len(), 10);
        for point in &line {
            assert_eq!(point.projected_temperature, point.bau_temperature);
            assert_eq!(point.cumulative_debt, 0.0);
        }
    }

    #[test]
    fn mitigation_phases_in_to_full_effect() {
        let line = build_trend_line(-1.0, 500.0);
        let first = &line[0];
        let last = &line[9];
        // Year one carries a tenth of the mitigation.
        assert_eq!(first.projected_temperature, round3(first.bau_temperature - 0.1));
        // Final year carries all of it.
        assert_eq!(last.projected_temperature, round3(last.bau_temperature - 1.0));
    }

    #[test]
    fn debt_accumulates_to_headline_figure() {
        let line = build_trend_line(-0.5, 430.0);
        assert_eq!(line[0].cumulative_debt, 43.0);
        assert_eq!(line[4].cumulative_debt, 215.0);
        assert_eq!(line[9].cumulative_debt, 430.0);
    }

    #[test]
    fn surplus_programmes_accumulate_negative_debt() {
        let line = build_trend_line(-0.25, -100.0);
        assert_eq!(line[9].cumulative_debt, -100.0);
        assert!(line[0].cumulative_debt < 0.0);
    }
}
