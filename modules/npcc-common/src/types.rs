use serde::{Deserialize, Serialize};

/// The eight national climate policy levers, each dialed 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyCategory {
    EvAdoption,
    RenewableEnergy,
    CarbonTax,
    Reforestation,
    PublicTransport,
    IndustrialControls,
    GreenBuildings,
    WasteManagement,
}

/// Carbon tax revenue in $B per lever point. The only lever that pays
/// back into the treasury.
pub const CARBON_REVENUE_PER_POINT: f64 = 2.0;

impl PolicyCategory {
    pub const ALL: [PolicyCategory; 8] = [
        PolicyCategory::EvAdoption,
        PolicyCategory::RenewableEnergy,
        PolicyCategory::CarbonTax,
        PolicyCategory::Reforestation,
        PolicyCategory::PublicTransport,
        PolicyCategory::IndustrialControls,
        PolicyCategory::GreenBuildings,
        PolicyCategory::WasteManagement,
    ];

    /// Stable wire key, matching the JSON field names on [`PolicyInputs`].
    pub fn key(&self) -> &'static str {
        match self {
            PolicyCategory::EvAdoption => "ev_adoption",
            PolicyCategory::RenewableEnergy => "renewable_energy",
            PolicyCategory::CarbonTax => "carbon_tax",
            PolicyCategory::Reforestation => "reforestation",
            PolicyCategory::PublicTransport => "public_transport",
            PolicyCategory::IndustrialControls => "industrial_controls",
            PolicyCategory::GreenBuildings => "green_buildings",
            PolicyCategory::WasteManagement => "waste_management",
        }
    }

    /// Human-readable programme name as shown on the dashboard.
    pub fn display_name(&self) -> &'static str {
        match self {
            PolicyCategory::EvAdoption => "EV Adoption Incentives",
            PolicyCategory::RenewableEnergy => "Renewable Energy Expansion",
            PolicyCategory::CarbonTax => "Carbon Tax Implementation",
            PolicyCategory::Reforestation => "Reforestation Programs",
            PolicyCategory::PublicTransport => "Public Transport Expansion",
            PolicyCategory::IndustrialControls => "Industrial Emission Controls",
            PolicyCategory::GreenBuildings => "Green Building Standards",
            PolicyCategory::WasteManagement => "Waste Management & Recycling",
        }
    }

    /// Fiscal cost in $B per lever point.
    pub fn cost_per_point(&self) -> f64 {
        match self {
            PolicyCategory::EvAdoption => 1.2,
            PolicyCategory::RenewableEnergy => 2.5,
            PolicyCategory::CarbonTax => 0.4,
            PolicyCategory::Reforestation => 0.6,
            PolicyCategory::PublicTransport => 2.2,
            PolicyCategory::IndustrialControls => 1.9,
            PolicyCategory::GreenBuildings => 1.3,
            PolicyCategory::WasteManagement => 0.8,
        }
    }

    /// Temperature mitigation in °C per lever point. Negative = cooling
    /// relative to business-as-usual.
    pub fn mitigation_per_point(&self) -> f64 {
        match self {
            PolicyCategory::EvAdoption => -0.0030,
            PolicyCategory::RenewableEnergy => -0.0045,
            PolicyCategory::CarbonTax => -0.0025,
            PolicyCategory::Reforestation => -0.0035,
            PolicyCategory::PublicTransport => -0.0020,
            PolicyCategory::IndustrialControls => -0.0040,
            PolicyCategory::GreenBuildings => -0.0015,
            PolicyCategory::WasteManagement => -0.0010,
        }
    }

    /// Revenue in $B per lever point (carbon tax only).
    pub fn revenue_per_point(&self) -> f64 {
        match self {
            PolicyCategory::CarbonTax => CARBON_REVENUE_PER_POINT,
            _ => 0.0,
        }
    }
}

impl std::fmt::Display for PolicyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// One full set of lever positions. Missing fields deserialize to 0 so
/// partial payloads (the frontend only sends the sliders the user touched)
/// are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyInputs {
    #[serde(default)]
    pub ev_adoption: f64,
    #[serde(default)]
    pub renewable_energy: f64,
    #[serde(default)]
    pub carbon_tax: f64,
    #[serde(default)]
    pub reforestation: f64,
    #[serde(default)]
    pub public_transport: f64,
    #[serde(default)]
    pub industrial_controls: f64,
    #[serde(default)]
    pub green_buildings: f64,
    #[serde(default)]
    pub waste_management: f64,
}

impl PolicyInputs {
    /// Lever position for a category.
    pub fn level(&self, category: PolicyCategory) -> f64 {
        match category {
            PolicyCategory::EvAdoption => self.ev_adoption,
            PolicyCategory::RenewableEnergy => self.renewable_energy,
            PolicyCategory::CarbonTax => self.carbon_tax,
            PolicyCategory::Reforestation => self.reforestation,
            PolicyCategory::PublicTransport => self.public_transport,
            PolicyCategory::IndustrialControls => self.industrial_controls,
            PolicyCategory::GreenBuildings => self.green_buildings,
            PolicyCategory::WasteManagement => self.waste_management,
        }
    }

    /// Iterate `(category, level)` in declaration order.
    pub fn levels(&self) -> impl Iterator<Item = (PolicyCategory, f64)> + '_ {
        PolicyCategory::ALL.into_iter().map(|c| (c, self.level(c)))
    }

    /// Copy with every lever forced into 0-100. NaN maps to 0.
    pub fn clamped(&self) -> Self {
        Self {
            ev_adoption: clamp_level(self.ev_adoption),
            renewable_energy: clamp_level(self.renewable_energy),
            carbon_tax: clamp_level(self.carbon_tax),
            reforestation: clamp_level(self.reforestation),
            public_transport: clamp_level(self.public_transport),
            industrial_controls: clamp_level(self.industrial_controls),
            green_buildings: clamp_level(self.green_buildings),
            waste_management: clamp_level(self.waste_management),
        }
    }

    /// Sum of all lever positions. A quick read on overall programme effort.
    pub fn total_effort(&self) -> f64 {
        self.levels().map(|(_, level)| level).sum()
    }
}

fn clamp_level(level: f64) -> f64 {
    if level.is_nan() {
        return 0.0;
    }
    level.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_payload_defaults_missing_levers_to_zero() {
        let inputs: PolicyInputs =
            serde_json::from_str(r#"{"ev_adoption": 50, "carbon_tax": 20}"#).unwrap();
        assert_eq!(inputs.ev_adoption, 50.0);
        assert_eq!(inputs.carbon_tax, 20.0);
        assert_eq!(inputs.renewable_energy, 0.0);
        assert_eq!(inputs.waste_management, 0.0);
    }

    #[test]
    fn clamped_forces_levers_into_range() {
        let inputs = PolicyInputs {
            ev_adoption: -5.0,
            renewable_energy: 150.0,
            carbon_tax: f64::NAN,
            ..Default::default()
        };
        let clamped = inputs.clamped();
        assert_eq!(clamped.ev_adoption, 0.0);
        assert_eq!(clamped.renewable_energy, 100.0);
        assert_eq!(clamped.carbon_tax, 0.0);
    }

    #[test]
    fn levels_covers_every_category_in_order() {
        let inputs = PolicyInputs {
            ev_adoption: 1.0,
            waste_management: 8.0,
            ..Default::default()
        };
        let levels: Vec<_> = inputs.levels().collect();
        assert_eq!(levels.len(), 8);
        assert_eq!(levels[0], (PolicyCategory::EvAdoption, 1.0));
        assert_eq!(levels[7], (PolicyCategory::WasteManagement, 8.0));
    }

    #[test]
    fn category_keys_round_trip_through_serde() {
        for category in PolicyCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.key()));
            let back: PolicyCategory = serde_json::from_str(&json).unwrap();
            assert_eq!(back, category);
        }
    }

    #[test]
    fn only_carbon_tax_generates_revenue() {
        for category in PolicyCategory::ALL {
            if category == PolicyCategory::CarbonTax {
                assert_eq!(category.revenue_per_point(), CARBON_REVENUE_PER_POINT);
            } else {
                assert_eq!(category.revenue_per_point(), 0.0);
            }
        }
    }
}
