//! Baking conversions between kitchen volumes and weights.
//!
//! A cup of flour and a cup of sugar weigh different amounts, so converting
//! between a volume unit and a mass unit goes through the ingredient's
//! density (grams per US cup). Volume to volume and mass to mass conversions
//! do not depend on the ingredient.

use serde::{Deserialize, Serialize};

use super::units::{ConversionError, Quantity, UnitDef, convert};

const ML_PER_US_CUP: f64 = 236.5882365;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ingredient {
    AllPurposeFlour,
    BreadFlour,
    GranulatedSugar,
    BrownSugar,
    PowderedSugar,
    Butter,
    Water,
    Milk,
    Honey,
    CocoaPowder,
    RolledOats,
    Rice,
    TableSalt,
}

impl Ingredient {
    pub const ALL: [Ingredient; 13] = [
        Self::AllPurposeFlour,
        Self::BreadFlour,
        Self::GranulatedSugar,
        Self::BrownSugar,
        Self::PowderedSugar,
        Self::Butter,
        Self::Water,
        Self::Milk,
        Self::Honey,
        Self::CocoaPowder,
        Self::RolledOats,
        Self::Rice,
        Self::TableSalt,
    ];

    /// Weight of one level US cup, in grams.
    pub fn grams_per_cup(&self) -> f64 {
        match self {
            Self::AllPurposeFlour => 120.0,
            Self::BreadFlour => 127.0,
            Self::GranulatedSugar => 200.0,
            Self::BrownSugar => 213.0,
            Self::PowderedSugar => 113.0,
            Self::Butter => 227.0,
            Self::Water => 236.6,
            Self::Milk => 242.0,
            Self::Honey => 336.0,
            Self::CocoaPowder => 84.0,
            Self::RolledOats => 89.0,
            Self::Rice => 198.0,
            Self::TableSalt => 288.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllPurposeFlour => "all-purpose-flour",
            Self::BreadFlour => "bread-flour",
            Self::GranulatedSugar => "granulated-sugar",
            Self::BrownSugar => "brown-sugar",
            Self::PowderedSugar => "powdered-sugar",
            Self::Butter => "butter",
            Self::Water => "water",
            Self::Milk => "milk",
            Self::Honey => "honey",
            Self::CocoaPowder => "cocoa-powder",
            Self::RolledOats => "rolled-oats",
            Self::Rice => "rice",
            Self::TableSalt => "table-salt",
        }
    }

    /// Parses an ingredient code. `flour` and `sugar` are shorthand for the
    /// all-purpose and granulated kinds.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        match s.as_str() {
            "flour" => Some(Self::AllPurposeFlour),
            "sugar" => Some(Self::GranulatedSugar),
            other => Self::ALL.into_iter().find(|i| i.as_str() == other),
        }
    }

    fn grams_per_ml(&self) -> f64 {
        self.grams_per_cup() / ML_PER_US_CUP
    }
}

enum Measure {
    Volume(&'static UnitDef),
    Mass(&'static UnitDef),
}

fn resolve(unit: &str) -> Result<Measure, ConversionError> {
    if let Ok(def) = Quantity::Cooking.find_unit(unit) {
        return Ok(Measure::Volume(def));
    }
    Quantity::Mass.find_unit(unit).map(Measure::Mass)
}

/// Converts an amount of `ingredient` between kitchen volume units and mass
/// units.
///
/// # Errors
///
/// Returns [`ConversionError`] if either unit is neither a cooking volume nor
/// a mass unit, or the amount is negative.
pub fn convert_ingredient(
    value: f64,
    from: &str,
    to: &str,
    ingredient: Ingredient,
) -> Result<f64, ConversionError> {
    match (resolve(from)?, resolve(to)?) {
        (Measure::Volume(f), Measure::Volume(t)) => convert(Quantity::Cooking, value, f.key, t.key),
        (Measure::Mass(f), Measure::Mass(t)) => convert(Quantity::Mass, value, f.key, t.key),
        (Measure::Volume(f), Measure::Mass(t)) => {
            let ml = convert(Quantity::Cooking, value, f.key, "ml")?;
            let grams = ml * ingredient.grams_per_ml();
            convert(Quantity::Mass, grams, "g", t.key)
        }
        (Measure::Mass(f), Measure::Volume(t)) => {
            let grams = convert(Quantity::Mass, value, f.key, "g")?;
            let ml = grams / ingredient.grams_per_ml();
            convert(Quantity::Cooking, ml, "ml", t.key)
        }
    }
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
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn one_cup_of_flour_is_120_grams() {
        assert_close(
            convert_ingredient(1.0, "cup", "g", Ingredient::AllPurposeFlour).unwrap(),
            120.0,
        );
    }

    #[test]
    fn two_hundred_grams_of_sugar_is_one_cup() {
        assert_close(
            convert_ingredient(200.0, "g", "cup", Ingredient::GranulatedSugar).unwrap(),
            1.0,
        );
    }

    #[test]
    fn one_stick_of_butter_is_half_a_cup_and_113_5_grams() {
        assert_close(
            convert_ingredient(1.0, "stick", "cup", Ingredient::Butter).unwrap(),
            0.5,
        );
        assert_close(
            convert_ingredient(1.0, "stick", "g", Ingredient::Butter).unwrap(),
            113.5,
        );
    }

    #[test]
    fn mass_to_mass_ignores_ingredient() {
        let flour = convert_ingredient(1.0, "lb", "g", Ingredient::AllPurposeFlour).unwrap();
        let honey = convert_ingredient(1.0, "lb", "g", Ingredient::Honey).unwrap();

        assert_eq!(flour, honey);
    }

    #[test]
    fn unknown_unit_is_reported() {
        assert!(convert_ingredient(1.0, "bushel", "g", Ingredient::Rice).is_err());
    }

    #[test]
    fn parse_accepts_shorthand_and_spaces() {
        assert_eq!(Ingredient::parse("flour"), Some(Ingredient::AllPurposeFlour));
        assert_eq!(Ingredient::parse("Brown Sugar"), Some(Ingredient::BrownSugar));
        assert_eq!(Ingredient::parse("saffron"), None);
    }
}
