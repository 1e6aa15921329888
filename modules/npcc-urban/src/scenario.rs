/// Preset city settings for quick generation, when the caller has no
/// baseline image or description of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    CoastalCity,
    IndustrialCity,
    Suburban,
    Megacity,
    ModernCity,
}

impl Scenario {
    /// Parse a wire key. Unknown keys fall back to a generic modern city.
    pub fn from_key(key: &str) -> Self {
        match key {
            "coastal_city" => Scenario::CoastalCity,
            "industrial_city" => Scenario::IndustrialCity,
            "suburban" => Scenario::Suburban,
            "megacity" => Scenario::Megacity,
            _ => Scenario::ModernCity,
        }
    }

    /// City description fed into the image prompts.
    pub fn description(&self) -> &'static str {
        match self {
            Scenario::CoastalCity => {
                "coastal city skyline with a working harbor and waterfront districts"
            }
            Scenario::IndustrialCity => {
                "industrial city with factory districts and freight corridors"
            }
            Scenario::Suburban => "sprawling suburban landscape of residential neighborhoods",
            Scenario::Megacity => "dense megacity with high-rise towers and elevated highways",
            Scenario::ModernCity => "modern city skyline",
        }
    }
}
