//! Step count and stride length calculations.

use serde::{Deserialize, Serialize};

const METERS_PER_MILE: f64 = 1609.344;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unspecified,
}

impl Sex {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Some(Self::Male),
            "female" | "f" => Some(Self::Female),
            "" | "unspecified" => Some(Self::Unspecified),
            _ => None,
        }
    }

    /// Walking stride as a fraction of height.
    fn stride_ratio(&self) -> f64 {
        match self {
            Self::Male => 0.415,
            Self::Female => 0.413,
            Self::Unspecified => 0.414,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceBreakdown {
    pub meters: f64,
    pub kilometers: f64,
    pub miles: f64,
}

impl DistanceBreakdown {
    fn from_meters(meters: f64) -> Self {
        Self {
            meters,
            kilometers: meters / 1000.0,
            miles: meters / METERS_PER_MILE,
        }
    }
}

/// Estimated walking stride length in meters for a person of `height_cm`.
pub fn estimate_stride_length(
    height_cm: f64,
    sex: Sex,
) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    height_cm * sex.stride_ratio() / 100.0
}

/// Distance covered by `steps` steps of `stride_m` meters.
pub fn steps_to_distance(
    steps: f64,
    stride_m: f64,
) -> DistanceBreakdown {
    DistanceBreakdown::from_meters(steps.max(0.0) * stride_m.max(0.0))
}

/// Steps needed to cover `meters`. A zero stride yields 0 steps.
pub fn distance_to_steps(
    meters: f64,
    stride_m: f64,
) -> f64 {
    if stride_m <= 0.0 {
        return 0.0;
    }
    (meters.max(0.0) / stride_m).round()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ten_thousand_steps_at_0_762_m_is_7_62_km() {
        let distance = steps_to_distance(10_000.0, 0.762);

        assert!((distance.kilometers - 7.62).abs() < 1e-9);
        assert!((distance.miles - 4.7348).abs() < 1e-4);
    }

    #[test]
    fn distance_to_steps_rounds_to_whole_steps() {
        assert_eq!(distance_to_steps(1000.0, 0.75), 1333.0);
    }

    #[test]
    fn zero_stride_yields_zero_steps() {
        assert_eq!(distance_to_steps(1000.0, 0.0), 0.0);
    }

    #[test]
    fn stride_estimate_depends_on_sex() {
        assert!((estimate_stride_length(180.0, Sex::Male) - 0.747).abs() < 1e-9);
        assert!((estimate_stride_length(180.0, Sex::Female) - 0.7434).abs() < 1e-9);
        assert_eq!(estimate_stride_length(0.0, Sex::Male), 0.0);
    }

    #[test]
    fn sex_parse_accepts_short_codes() {
        assert_eq!(Sex::parse("F"), Some(Sex::Female));
        assert_eq!(Sex::parse(""), Some(Sex::Unspecified));
        assert_eq!(Sex::parse("other"), None);
    }
}
