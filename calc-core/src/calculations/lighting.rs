//! Lumens ↔ watts for light bulbs.
//!
//! Brightness and electrical power are related through luminous efficacy
//! (lumens per watt), which depends on the light source.

use serde::{Deserialize, Serialize};

/// Common light sources and their typical luminous efficacy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightSource {
    Incandescent,
    Halogen,
    Fluorescent,
    Cfl,
    Led,
}

impl LightSource {
    pub const ALL: [LightSource; 5] = [
        Self::Incandescent,
        Self::Halogen,
        Self::Fluorescent,
        Self::Cfl,
        Self::Led,
    ];

    /// Typical efficacy in lumens per watt.
    pub fn efficacy(&self) -> f64 {
        match self {
            Self::Incandescent => 15.0,
            Self::Halogen => 20.0,
            Self::Fluorescent => 80.0,
            Self::Cfl => 60.0,
            Self::Led => 90.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Incandescent => "incandescent",
            Self::Halogen => "halogen",
            Self::Fluorescent => "fluorescent",
            Self::Cfl => "cfl",
            Self::Led => "led",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|source| source.as_str().eq_ignore_ascii_case(s))
    }
}

/// Watts needed to produce `lumens` at `efficacy` lm/W.
///
/// Returns 0 when the efficacy is zero or negative.
pub fn lumens_to_watts(
    lumens: f64,
    efficacy: f64,
) -> f64 {
    if efficacy <= 0.0 {
        return 0.0;
    }
    lumens / efficacy
}

/// Lumens produced by `watts` at `efficacy` lm/W.
pub fn watts_to_lumens(
    watts: f64,
    efficacy: f64,
) -> f64 {
    if efficacy <= 0.0 {
        return 0.0;
    }
    watts * efficacy
}
