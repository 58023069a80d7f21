//! Unit conversion.
//!
//! Most quantities are linear: every unit has a factor relative to a shared
//! base unit and a conversion is `value × factor(from) ÷ factor(to)`.
//! Temperature is affine and goes through kelvin (see [`temperature`]);
//! fuel economy mixes distance-per-volume and volume-per-distance units and
//! goes through km/L (see [`fuel`]).
//!
//! # Example
//!
//! ```
//! use calc_core::calculations::units::{Quantity, convert};
//!
//! let pounds = convert(Quantity::Mass, 1.0, "kg", "lb").unwrap();
//! assert!((pounds - 2.20462).abs() < 1e-5);
//!
//! let fahrenheit = convert(Quantity::Temperature, 100.0, "c", "f").unwrap();
//! assert!((fahrenheit - 212.0).abs() < 1e-9);
//! ```

pub mod fuel;
pub mod tables;
pub mod temperature;

use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during a unit conversion.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConversionError {
    /// The quantity name is not one of the supported quantities.
    #[error("unknown quantity '{0}'")]
    UnknownQuantity(String),

    /// The unit is not defined for the quantity.
    #[error("unknown {quantity} unit '{unit}'")]
    UnknownUnit { quantity: Quantity, unit: String },

    /// The quantity cannot be negative.
    #[error("{quantity} cannot be negative, got {value}")]
    NegativeValue { quantity: Quantity, value: f64 },

    /// The temperature is colder than absolute zero.
    #[error("temperature {value} {unit} is below absolute zero")]
    BelowAbsoluteZero { value: f64, unit: String },

    /// The input value is infinite or NaN.
    #[error("value must be a finite number")]
    NonFiniteValue,
}

/// One unit of a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitDef {
    /// Stable lookup key, e.g. `"km"`.
    pub key: &'static str,
    pub name: &'static str,
    pub plural: &'static str,
    pub symbol: &'static str,
    /// Size of one unit in the quantity's base unit.
    #[serde(skip)]
    pub factor: f64,
}

impl UnitDef {
    fn matches_name(
        &self,
        query: &str,
    ) -> bool {
        self.name.eq_ignore_ascii_case(query) || self.plural.eq_ignore_ascii_case(query)
    }
}

/// The physical quantities supported by [`convert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quantity {
    Length,
    Mass,
    Area,
    Volume,
    Cooking,
    Time,
    Speed,
    Acceleration,
    Energy,
    Power,
    Pressure,
    Force,
    Data,
    Angle,
    Frequency,
    Temperature,
    FuelEconomy,
}

impl Quantity {
    pub const ALL: [Quantity; 17] = [
        Self::Length,
        Self::Mass,
        Self::Area,
        Self::Volume,
        Self::Cooking,
        Self::Time,
        Self::Speed,
        Self::Acceleration,
        Self::Energy,
        Self::Power,
        Self::Pressure,
        Self::Force,
        Self::Data,
        Self::Angle,
        Self::Frequency,
        Self::Temperature,
        Self::FuelEconomy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Mass => "mass",
            Self::Area => "area",
            Self::Volume => "volume",
            Self::Cooking => "cooking",
            Self::Time => "time",
            Self::Speed => "speed",
            Self::Acceleration => "acceleration",
            Self::Energy => "energy",
            Self::Power => "power",
            Self::Pressure => "pressure",
            Self::Force => "force",
            Self::Data => "data",
            Self::Angle => "angle",
            Self::Frequency => "frequency",
            Self::Temperature => "temperature",
            Self::FuelEconomy => "fuel-economy",
        }
    }

    /// Parses a quantity name. `weight` and `velocity` are accepted as
    /// aliases of `mass` and `speed`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "weight" => Some(Self::Mass),
            "velocity" => Some(Self::Speed),
            "fuel" | "fuel_economy" => Some(Self::FuelEconomy),
            other => Self::ALL.into_iter().find(|q| q.as_str() == other),
        }
    }

    pub fn units(&self) -> &'static [UnitDef] {
        match self {
            Self::Length => tables::LENGTH,
            Self::Mass => tables::MASS,
            Self::Area => tables::AREA,
            Self::Volume => tables::VOLUME,
            Self::Cooking => tables::COOKING,
            Self::Time => tables::TIME,
            Self::Speed => tables::SPEED,
            Self::Acceleration => tables::ACCELERATION,
            Self::Energy => tables::ENERGY,
            Self::Power => tables::POWER,
            Self::Pressure => tables::PRESSURE,
            Self::Force => tables::FORCE,
            Self::Data => tables::DATA,
            Self::Angle => tables::ANGLE,
            Self::Frequency => tables::FREQUENCY,
            Self::Temperature => temperature::UNITS,
            Self::FuelEconomy => fuel::UNITS,
        }
    }

    /// Key of the unit every other unit is expressed in.
    pub fn base_unit(&self) -> &'static str {
        match self {
            Self::Length => "m",
            Self::Mass => "kg",
            Self::Area => "m2",
            Self::Volume => "l",
            Self::Cooking => "ml",
            Self::Time => "s",
            Self::Speed => "mps",
            Self::Acceleration => "mps2",
            Self::Energy => "j",
            Self::Power => "w",
            Self::Pressure => "pa",
            Self::Force => "n",
            Self::Data => "b",
            Self::Angle => "rad",
            Self::Frequency => "hz",
            Self::Temperature => "k",
            Self::FuelEconomy => "kml",
        }
    }

    /// Whether negative inputs are physically meaningful. Temperature is
    /// bounded by absolute zero instead.
    pub fn allows_negative(&self) -> bool {
        matches!(self, Self::Acceleration | Self::Angle | Self::Temperature)
    }

    /// Looks up a unit by key, then symbol, then (ignoring case) key, name
    /// or plural name.
    pub fn find_unit(
        &self,
        query: &str,
    ) -> Result<&'static UnitDef, ConversionError> {
        let query = query.trim();
        let units = self.units();
        units
            .iter()
            .find(|u| u.key == query)
            .or_else(|| units.iter().find(|u| u.symbol == query))
            .or_else(|| units.iter().find(|u| u.key.eq_ignore_ascii_case(query)))
            .or_else(|| units.iter().find(|u| u.matches_name(query)))
            .ok_or_else(|| ConversionError::UnknownUnit {
                quantity: *self,
                unit: query.to_string(),
            })
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quantity {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ConversionError::UnknownQuantity(s.to_string()))
    }
}

/// Converts `value` between two units of `quantity`.
///
/// # Errors
///
/// Returns [`ConversionError`] if either unit is unknown, the value is not
/// finite, or the value is negative for a quantity that cannot be negative.
pub fn convert(
    quantity: Quantity,
    value: f64,
    from: &str,
    to: &str,
) -> Result<f64, ConversionError> {
    if !value.is_finite() {
        return Err(ConversionError::NonFiniteValue);
    }
    match quantity {
        Quantity::Temperature => temperature::convert(value, from, to),
        Quantity::FuelEconomy => fuel::convert(value, from, to),
        _ => convert_linear(quantity, value, from, to),
    }
}

fn convert_linear(
    quantity: Quantity,
    value: f64,
    from: &str,
    to: &str,
) -> Result<f64, ConversionError> {
    let from_unit = quantity.find_unit(from)?;
    let to_unit = quantity.find_unit(to)?;

    if value < 0.0 && !quantity.allows_negative() {
        return Err(ConversionError::NegativeValue { quantity, value });
    }

    if from_unit.key == to_unit.key {
        return Ok(value);
    }

    Ok(value * from_unit.factor / to_unit.factor)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn assert_close(
        actual: f64,
        expected: f64,
        tolerance: f64,
    ) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected} ± {tolerance}, got {actual}"
        );
    }

    // =========================================================================
    // lookup tests
    // =========================================================================

    #[test]
    fn find_unit_matches_key_symbol_and_name() {
        assert_eq!(Quantity::Length.find_unit("km").unwrap().key, "km");
        assert_eq!(Quantity::Length.find_unit("NM").unwrap().key, "nmi");
        assert_eq!(Quantity::Length.find_unit("Kilometers").unwrap().key, "km");
        assert_eq!(Quantity::Length.find_unit("foot").unwrap().key, "ft");
        assert_eq!(Quantity::Data.find_unit("MiB").unwrap().key, "mib");
    }

    #[test]
    fn find_unit_reports_unknown_unit() {
        assert_eq!(
            Quantity::Mass.find_unit("furlong"),
            Err(ConversionError::UnknownUnit {
                quantity: Quantity::Mass,
                unit: "furlong".to_string(),
            })
        );
    }

    #[test]
    fn every_table_contains_its_base_unit_with_unit_factor() {
        for quantity in Quantity::ALL {
            let base = quantity.find_unit(quantity.base_unit()).unwrap();
            assert_eq!(base.factor, 1.0, "{quantity} base unit");
        }
    }

    #[test]
    fn unit_keys_are_unique_within_each_quantity() {
        for quantity in Quantity::ALL {
            let units = quantity.units();
            for (i, unit) in units.iter().enumerate() {
                assert!(
                    units[i + 1..].iter().all(|other| other.key != unit.key),
                    "duplicate key {} in {quantity}",
                    unit.key
                );
            }
        }
    }

    #[test]
    fn quantity_parse_accepts_aliases() {
        assert_eq!(Quantity::parse("weight"), Some(Quantity::Mass));
        assert_eq!(Quantity::parse("Velocity"), Some(Quantity::Speed));
        assert_eq!(Quantity::parse("fuel-economy"), Some(Quantity::FuelEconomy));
        assert_eq!(Quantity::parse("luminosity"), None);
    }

    #[test]
    fn quantity_from_str_reports_unknown_quantity() {
        assert_eq!(
            "luminosity".parse::<Quantity>(),
            Err(ConversionError::UnknownQuantity("luminosity".to_string()))
        );
    }

    // =========================================================================
    // identity and round-trip properties
    // =========================================================================

    #[test]
    fn converting_to_same_unit_returns_input_unchanged() {
        for quantity in Quantity::ALL {
            for unit in quantity.units() {
                let result = convert(quantity, 123.456, unit.key, unit.key).unwrap();
                assert_eq!(result, 123.456, "{quantity} {}", unit.key);
            }
        }
    }

    #[test]
    fn round_trip_returns_original_value_for_every_unit_pair() {
        for quantity in Quantity::ALL {
            let units = quantity.units();
            for from in units {
                for to in units {
                    let there = convert(quantity, 42.5, from.key, to.key).unwrap();
                    let back = convert(quantity, there, to.key, from.key).unwrap();
                    assert_close(back, 42.5, 42.5 * 1e-9);
                }
            }
        }
    }

    // =========================================================================
    // known fixed points
    // =========================================================================

    #[test]
    fn one_kilogram_is_2_20462_pounds() {
        let pounds = convert(Quantity::Mass, 1.0, "kg", "lb").unwrap();
        assert_close(pounds, 2.20462, 5e-6);
    }

    #[test]
    fn one_meter_per_second_is_3_6_kmh() {
        let kmh = convert(Quantity::Speed, 1.0, "mps", "kmh").unwrap();
        assert_close(kmh, 3.6, 1e-12);
    }

    #[test]
    fn one_mile_is_1_609344_kilometers() {
        let km = convert(Quantity::Length, 1.0, "mi", "km").unwrap();
        assert_close(km, 1.609344, 1e-12);
    }

    #[test]
    fn one_tablespoon_is_three_teaspoons() {
        let tsp = convert(Quantity::Cooking, 1.0, "tbsp", "tsp").unwrap();
        assert_close(tsp, 3.0, 1e-12);
    }

    #[test]
    fn one_atmosphere_is_14_696_psi() {
        let psi = convert(Quantity::Pressure, 1.0, "atm", "psi").unwrap();
        assert_close(psi, 14.6959, 1e-4);
    }

    #[test]
    fn one_kilowatt_hour_is_3412_btu() {
        let btu = convert(Quantity::Energy, 1.0, "kwh", "btu").unwrap();
        assert_close(btu, 3412.14, 1e-2);
    }

    #[test]
    fn one_horsepower_is_0_7457_kilowatts() {
        let kw = convert(Quantity::Power, 1.0, "hp", "kw").unwrap();
        assert_close(kw, 0.7457, 1e-4);
    }

    #[test]
    fn one_gibibyte_is_1024_mebibytes() {
        let mib = convert(Quantity::Data, 1.0, "gib", "mib").unwrap();
        assert_eq!(mib, 1024.0);
    }

    #[test]
    fn half_turn_is_180_degrees() {
        let degrees = convert(Quantity::Angle, 0.5, "turn", "deg").unwrap();
        assert_close(degrees, 180.0, 1e-9);
    }

    // =========================================================================
    // sign handling
    // =========================================================================

    #[test]
    fn negative_length_is_rejected() {
        assert_eq!(
            convert(Quantity::Length, -1.0, "m", "ft"),
            Err(ConversionError::NegativeValue {
                quantity: Quantity::Length,
                value: -1.0,
            })
        );
    }

    #[test]
    fn negative_acceleration_is_allowed() {
        let result = convert(Quantity::Acceleration, -9.80665, "mps2", "g").unwrap();
        assert_close(result, -1.0, 1e-12);
    }

    #[test]
    fn zero_converts_to_zero() {
        assert_eq!(convert(Quantity::Volume, 0.0, "l", "gal").unwrap(), 0.0);
    }

    #[test]
    fn non_finite_value_is_rejected() {
        assert_eq!(
            convert(Quantity::Length, f64::NAN, "m", "ft"),
            Err(ConversionError::NonFiniteValue)
        );
    }
}
