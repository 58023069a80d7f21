//! Fuel economy conversion.
//!
//! Distance-per-volume units (mpg, km/L) are linear multiples of km/L.
//! L/100 km is volume-per-distance, i.e. the reciprocal: `km/L = 100 / x`.
//! A zero reading in either direction converts to 0 instead of infinity.

use super::{ConversionError, Quantity, UnitDef};

const LITERS_PER_100_KM: &str = "l100km";

/// Fuel economy units. `factor` holds km/L per unit, except for L/100 km
/// where it is the numerator of the reciprocal.
pub const UNITS: &[UnitDef] = &[
    UnitDef {
        key: "kml",
        name: "kilometer per liter",
        plural: "kilometers per liter",
        symbol: "km/L",
        factor: 1.0,
    },
    UnitDef {
        key: "mpg",
        name: "mile per US gallon",
        plural: "miles per US gallon",
        symbol: "mpg",
        factor: 1.609344 / 3.785411784,
    },
    UnitDef {
        key: "mpg_imp",
        name: "mile per imperial gallon",
        plural: "miles per imperial gallon",
        symbol: "mpg (imp)",
        factor: 1.609344 / 4.54609,
    },
    UnitDef {
        key: LITERS_PER_100_KM,
        name: "liter per 100 kilometers",
        plural: "liters per 100 kilometers",
        symbol: "L/100km",
        factor: 100.0,
    },
];

fn reciprocal_or_zero(
    numerator: f64,
    value: f64,
) -> f64 {
    if value == 0.0 { 0.0 } else { numerator / value }
}

fn to_km_per_liter(
    value: f64,
    unit: &UnitDef,
) -> f64 {
    if unit.key == LITERS_PER_100_KM {
        reciprocal_or_zero(unit.factor, value)
    } else {
        value * unit.factor
    }
}

fn from_km_per_liter(
    km_per_liter: f64,
    unit: &UnitDef,
) -> f64 {
    if unit.key == LITERS_PER_100_KM {
        reciprocal_or_zero(unit.factor, km_per_liter)
    } else {
        km_per_liter / unit.factor
    }
}

/// Converts a fuel economy figure between two units.
pub fn convert(
    value: f64,
    from: &str,
    to: &str,
) -> Result<f64, ConversionError> {
    let from_unit = Quantity::FuelEconomy.find_unit(from)?;
    let to_unit = Quantity::FuelEconomy.find_unit(to)?;

    if value < 0.0 {
        return Err(ConversionError::NegativeValue {
            quantity: Quantity::FuelEconomy,
            value,
        });
    }

    if from_unit.key == to_unit.key {
        return Ok(value);
    }

    Ok(from_km_per_liter(to_km_per_liter(value, from_unit), to_unit))
}
