//! Prompt construction for the before/after cityscape comparison.
//!
//! Pure functions: lever positions and the impact record in, prompt strings
//! out. The visual vocabulary scales with how hard each lever is pulled.

use ai_client::util::truncate_to_char_boundary;
use npcc_common::{format_billions, format_degrees, PolicyInputs};
use npcc_engine::ImpactResult;

/// Image providers reject very long prompts; keep ours well under the limit.
const MAX_PROMPT_BYTES: usize = 1900;

/// Aggregate lever effort (sum of all eight, max 800) below which the
/// impact scene still reads as polluted.
const LOW_EFFORT_THRESHOLD: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStyle {
    Photorealistic,
    Artistic,
}

impl ImageStyle {
    /// Parse a wire key. Anything but "artistic" renders photorealistic.
    pub fn from_key(key: &str) -> Self {
        match key {
            "artistic" => ImageStyle::Artistic,
            _ => ImageStyle::Photorealistic,
        }
    }

    fn suffix(&self) -> &'static str {
        match self {
            ImageStyle::Photorealistic => {
                "photorealistic, high detail, wide-angle aerial photograph"
            }
            ImageStyle::Artistic => "stylized concept art, painterly, dramatic lighting",
        }
    }
}

/// The city before any policy takes effect.
pub fn baseline_prompt(city_description: &str, style: ImageStyle) -> String {
    let prompt = format!(
        "{city_description}, present day, heavy car traffic, conventional power \
         infrastructure, muted grey tones, {}",
        style.suffix()
    );
    truncate_to_char_boundary(&prompt, MAX_PROMPT_BYTES).to_string()
}

/// The same city after a decade under the given policy configuration.
pub fn impact_prompt(
    inputs: &PolicyInputs,
    result: &ImpactResult,
    city_description: &str,
    style: ImageStyle,
) -> String {
    let inputs = inputs.clamped();
    let mut descriptors: Vec<&str> = vec![city_description, "in the year 2035"];

    if inputs.renewable_energy >= 70.0 {
        descriptors.push("skyline dotted with wind turbines and rooftop solar arrays");
    } else if inputs.renewable_energy >= 40.0 {
        descriptors.push("solar panels spreading across rooftops");
    }
    if inputs.ev_adoption >= 50.0 {
        descriptors.push("electric vehicles and charging stations lining the streets");
    }
    if inputs.reforestation >= 50.0 {
        descriptors.push("dense urban tree canopy and green corridors between districts");
    } else if inputs.reforestation >= 25.0 {
        descriptors.push("young street trees along the avenues");
    }
    if inputs.public_transport >= 50.0 {
        descriptors.push("modern electric trams and busy light-rail lines");
    }
    if inputs.green_buildings >= 60.0 {
        descriptors.push("living facades and rooftop gardens on the towers");
    }
    if inputs.industrial_controls >= 60.0 {
        descriptors.push("factory district running clean with no smokestack plumes");
    }
    if inputs.waste_management >= 50.0 {
        descriptors.push("spotless streets with recycling points on every corner");
    }

    if inputs.total_effort() < LOW_EFFORT_THRESHOLD {
        descriptors.push("hazy smog layer over the skyline, grey polluted air");
    } else if result.temperature_mitigation <= -1.0 {
        descriptors.push("clear blue sky and visibly clean air");
    }

    let mut prompt = descriptors.join(", ");
    prompt.push_str(", ");
    prompt.push_str(style.suffix());
    truncate_to_char_boundary(&prompt, MAX_PROMPT_BYTES).to_string()
}

/// Negative prompt for the impact frame: a serious programme should not
/// render a polluted scene.
pub fn impact_negative_prompt(inputs: &PolicyInputs) -> Option<String> {
    if inputs.clamped().total_effort() >= LOW_EFFORT_THRESHOLD {
        Some("smog, smoke plumes, litter, brown haze".to_string())
    } else {
        None
    }
}

/// Caption for the comparison, derived from the calculation.
pub fn change_description(inputs: &PolicyInputs, result: &ImpactResult) -> String {
    let inputs = inputs.clamped();
    let strongest = inputs
        .levels()
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(category, _)| category.display_name())
        .unwrap_or("no programme");

    if inputs.total_effort() == 0.0 {
        return "No policy intervention: the city continues on its business-as-usual \
                trajectory."
            .to_string();
    }

    let mut description = format!(
        "Projected cityscape after a {} programme led by {}: {} of temperature \
         mitigation against business-as-usual",
        format_billions(result.total_cost),
        strongest,
        format_degrees(result.temperature_mitigation),
    );
    if result.bankruptcy_flag {
        description.push_str(", financed past the national bankruptcy threshold");
    }
    description.push('.');
    description
}

#[cfg(test)]
mod tests {
    use super::*;
    use npcc_engine::PolicyEngine;

    fn calculate(inputs: &PolicyInputs) -> ImpactResult {
        PolicyEngine::new().calculate_impacts(inputs)
    }

    #[test]
    fn baseline_prompt_carries_city_and_style() {
        let prompt = baseline_prompt("modern city skyline", ImageStyle::Photorealistic);
        assert!(prompt.contains("modern city skyline"));
        assert!(prompt.contains("photorealistic"));
        assert!(prompt.contains("present day"));
    }

    #[test]
    fn high_renewables_show_turbines() {
        let inputs = PolicyInputs {
            renewable_energy: 85.0,
            ..Default::default()
        };
        let result = calculate(&inputs);
        let prompt = impact_prompt(&inputs, &result, "modern city", ImageStyle::Photorealistic);
        assert!(prompt.contains("wind turbines"));
    }

    #[test]
    fn moderate_renewables_show_solar_only() {
        let inputs = PolicyInputs {
            renewable_energy: 45.0,
            ..Default::default()
        };
        let result = calculate(&inputs);
        let prompt = impact_prompt(&inputs, &result, "modern city", ImageStyle::Photorealistic);
        assert!(prompt.contains("solar panels"));
        assert!(!prompt.contains("wind turbines"));
    }

    #[test]
    fn idle_programme_renders_smog() {
        let inputs = PolicyInputs {
            ev_adoption: 10.0,
            ..Default::default()
        };
        let result = calculate(&inputs);
        let prompt = impact_prompt(&inputs, &result, "modern city", ImageStyle::Photorealistic);
        assert!(prompt.contains("smog"));
        assert!(impact_negative_prompt(&inputs).is_none());
    }

    #[test]
    fn serious_programme_gets_negative_prompt() {
        let inputs = PolicyInputs {
            renewable_energy: 80.0,
            ev_adoption: 60.0,
            ..Default::default()
        };
        assert!(impact_negative_prompt(&inputs).is_some());
    }

    #[test]
    fn artistic_style_changes_suffix() {
        let inputs = PolicyInputs::default();
        let result = calculate(&inputs);
        let photo = impact_prompt(&inputs, &result, "city", ImageStyle::Photorealistic);
        let art = impact_prompt(&inputs, &result, "city", ImageStyle::Artistic);
        assert!(photo.contains("photorealistic"));
        assert!(art.contains("concept art"));
    }

    #[test]
    fn style_parses_with_photorealistic_fallback() {
        assert_eq!(ImageStyle::from_key("artistic"), ImageStyle::Artistic);
        assert_eq!(ImageStyle::from_key("photorealistic"), ImageStyle::Photorealistic);
        assert_eq!(ImageStyle::from_key("cubist"), ImageStyle::Photorealistic);
    }

    #[test]
    fn description_names_cost_and_lead_policy() {
        let inputs = PolicyInputs {
            renewable_energy: 75.0,
            carbon_tax: 30.0,
            ..Default::default()
        };
        let result = calculate(&inputs);
        let description = change_description(&inputs, &result);
        assert!(description.contains("Renewable Energy Expansion"));
        assert!(description.contains(&result.total_cost_formatted));
    }

    #[test]
    fn description_flags_bankruptcy() {
        let inputs = PolicyInputs {
            ev_adoption: 100.0,
            renewable_energy: 100.0,
            reforestation: 100.0,
            public_transport: 100.0,
            industrial_controls: 100.0,
            green_buildings: 100.0,
            waste_management: 100.0,
            ..Default::default()
        };
        let result = calculate(&inputs);
        assert!(result.bankruptcy_flag);
        assert!(change_description(&inputs, &result).contains("bankruptcy"));
    }

    #[test]
    fn zero_programme_description_is_bau() {
        let inputs = PolicyInputs::default();
        let result = calculate(&inputs);
        assert!(change_description(&inputs, &result).contains("business-as-usual"));
    }
}
