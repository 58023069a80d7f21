//! Temperature conversion.
//!
//! Temperature scales differ by both scale and zero point, so a conversion
//! is done in two steps: the input is mapped to kelvin, then kelvin is mapped
//! to the output scale.
//!
//! | Scale      | to kelvin                  |
//! |------------|----------------------------|
//! | Celsius    | `(C + 273.15) × 1`         |
//! | Fahrenheit | `(F + 459.67) × 5/9`       |
//! | Kelvin     | `K`                        |
//! | Rankine    | `R × 5/9`                  |
//! | Réaumur    | `(Ré + 218.52) × 5/4`      |

use super::{ConversionError, Quantity, UnitDef};

/// Temperature units. `factor` holds kelvins per degree of the scale.
pub const UNITS: &[UnitDef] = &[
    UnitDef {
        key: "c",
        name: "degree Celsius",
        plural: "celsius",
        symbol: "°C",
        factor: 1.0,
    },
    UnitDef {
        key: "f",
        name: "degree Fahrenheit",
        plural: "fahrenheit",
        symbol: "°F",
        factor: 5.0 / 9.0,
    },
    UnitDef {
        key: "k",
        name: "kelvin",
        plural: "kelvins",
        symbol: "K",
        factor: 1.0,
    },
    UnitDef {
        key: "r",
        name: "degree Rankine",
        plural: "rankine",
        symbol: "°R",
        factor: 5.0 / 9.0,
    },
    UnitDef {
        key: "re",
        name: "degree Réaumur",
        plural: "reaumur",
        symbol: "°Ré",
        factor: 1.25,
    },
];

/// Distance from the scale's zero to absolute zero, in degrees of the scale.
fn offset(key: &str) -> f64 {
    match key {
        "c" => 273.15,
        "f" => 459.67,
        "re" => 218.52,
        _ => 0.0,
    }
}

fn to_kelvin(
    value: f64,
    unit: &UnitDef,
) -> f64 {
    (value + offset(unit.key)) * unit.factor
}

fn from_kelvin(
    kelvin: f64,
    unit: &UnitDef,
) -> f64 {
    kelvin / unit.factor - offset(unit.key)
}

/// Converts a temperature between two scales.
///
/// # Errors
///
/// Returns [`ConversionError::BelowAbsoluteZero`] when the input is colder
/// than 0 K, or [`ConversionError::UnknownUnit`] for an unknown scale.
pub fn convert(
    value: f64,
    from: &str,
    to: &str,
) -> Result<f64, ConversionError> {
    let from_unit = Quantity::Temperature.find_unit(from)?;
    let to_unit = Quantity::Temperature.find_unit(to)?;

    let kelvin = to_kelvin(value, from_unit);
    if kelvin < 0.0 {
        return Err(ConversionError::BelowAbsoluteZero {
            value,
            unit: from_unit.symbol.to_string(),
        });
    }

    if from_unit.key == to_unit.key {
        return Ok(value);
    }

    Ok(from_kelvin(kelvin, to_unit))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn assert_close(
        actual: f64,
        expected: f64,
    ) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn zero_celsius_is_32_fahrenheit() {
        assert_close(convert(0.0, "c", "f").unwrap(), 32.0);
    }

    #[test]
    fn thirty_two_fahrenheit_is_273_15_kelvin() {
        assert_close(convert(32.0, "f", "k").unwrap(), 273.15);
    }

    #[test]
    fn zero_celsius_is_273_15_kelvin() {
        assert_close(convert(0.0, "c", "k").unwrap(), 273.15);
    }

    #[test]
    fn boiling_point_of_water() {
        assert_close(convert(100.0, "c", "f").unwrap(), 212.0);
        assert_close(convert(100.0, "c", "re").unwrap(), 80.0);
        assert_close(convert(212.0, "f", "r").unwrap(), 671.67);
    }

    #[test]
    fn minus_forty_is_the_same_in_celsius_and_fahrenheit() {
        assert_close(convert(-40.0, "c", "f").unwrap(), -40.0);
        assert_close(convert(-40.0, "f", "c").unwrap(), -40.0);
    }

    #[test]
    fn absolute_zero_is_accepted() {
        assert_close(convert(-273.15, "c", "k").unwrap(), 0.0);
        assert_close(convert(0.0, "k", "f").unwrap(), -459.67);
    }

    #[test]
    fn below_absolute_zero_is_rejected() {
        assert_eq!(
            convert(-300.0, "c", "f"),
            Err(ConversionError::BelowAbsoluteZero {
                value: -300.0,
                unit: "°C".to_string(),
            })
        );
        assert!(convert(-1.0, "k", "c").is_err());
    }

    #[test]
    fn scale_names_are_accepted() {
        assert_close(convert(0.0, "Celsius", "Fahrenheit").unwrap(), 32.0);
        assert_close(convert(0.0, "°C", "K").unwrap(), 273.15);
    }
}
