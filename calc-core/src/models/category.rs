use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculatorCategory {
    Length,
    Weight,
    Temperature,
    Energy,
    Power,
    Pressure,
    Speed,
    Area,
    Volume,
    Cooking,
    Health,
    Finance,
    Digital,
    Time,
    Physics,
    Automotive,
}

impl CalculatorCategory {
    pub const ALL: [CalculatorCategory; 16] = [
        Self::Length,
        Self::Weight,
        Self::Temperature,
        Self::Energy,
        Self::Power,
        Self::Pressure,
        Self::Speed,
        Self::Area,
        Self::Volume,
        Self::Cooking,
        Self::Health,
        Self::Finance,
        Self::Digital,
        Self::Time,
        Self::Physics,
        Self::Automotive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Weight => "weight",
            Self::Temperature => "temperature",
            Self::Energy => "energy",
            Self::Power => "power",
            Self::Pressure => "pressure",
            Self::Speed => "speed",
            Self::Area => "area",
            Self::Volume => "volume",
            Self::Cooking => "cooking",
            Self::Health => "health",
            Self::Finance => "finance",
            Self::Digital => "digital",
            Self::Time => "time",
            Self::Physics => "physics",
            Self::Automotive => "automotive",
        }
    }

    /// Parses a stored category code. Matching ignores ASCII case and
    /// surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Length => "Length",
            Self::Weight => "Weight & Mass",
            Self::Temperature => "Temperature",
            Self::Energy => "Energy",
            Self::Power => "Power",
            Self::Pressure => "Pressure",
            Self::Speed => "Speed & Acceleration",
            Self::Area => "Area",
            Self::Volume => "Volume",
            Self::Cooking => "Cooking & Baking",
            Self::Health => "Health & Fitness",
            Self::Finance => "Finance",
            Self::Digital => "Digital Storage",
            Self::Time => "Time",
            Self::Physics => "Physics",
            Self::Automotive => "Automotive",
        }
    }
}

impl std::fmt::Display for CalculatorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
