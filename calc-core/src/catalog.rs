//! The built-in calculator catalogue.
//!
//! This is the hardcoded list the seed loader writes into the search index.
//! Every calculator is served under `/calculators/<id>`.

use crate::models::CalculatorCategory::*;
use crate::models::{Calculator, CalculatorCategory};

struct CatalogEntry {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: CalculatorCategory,
    keywords: &'static [&'static str],
}

impl CatalogEntry {
    fn to_calculator(&self) -> Calculator {
        Calculator {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            category: self.category,
            url: calculator_url(self.id),
            keywords: self.keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

const ENTRIES: &[CatalogEntry] = &[
    // Length
    CatalogEntry {
        id: "length-converter",
        name: "Length Converter",
        description: "Convert between metric and imperial units of length.",
        category: Length,
        keywords: &["length", "distance", "meters", "feet", "inches", "miles"],
    },
    CatalogEntry {
        id: "meters-to-feet",
        name: "Meters to Feet",
        description: "Convert meters to feet.",
        category: Length,
        keywords: &["m", "ft", "meters", "feet"],
    },
    CatalogEntry {
        id: "inches-to-centimeters",
        name: "Inches to Centimeters",
        description: "Convert inches to centimeters.",
        category: Length,
        keywords: &["in", "cm", "inches", "centimeters"],
    },
    CatalogEntry {
        id: "kilometers-to-miles",
        name: "Kilometers to Miles",
        description: "Convert kilometers to statute miles.",
        category: Length,
        keywords: &["km", "mi", "kilometers", "miles", "distance"],
    },
    // Weight
    CatalogEntry {
        id: "weight-converter",
        name: "Weight Converter",
        description: "Convert between units of mass and weight.",
        category: Weight,
        keywords: &["weight", "mass", "kilograms", "pounds", "ounces", "grams"],
    },
    CatalogEntry {
        id: "kg-to-lbs",
        name: "Kilograms to Pounds",
        description: "Convert kilograms to pounds.",
        category: Weight,
        keywords: &["kg", "lbs", "kilograms", "pounds"],
    },
    CatalogEntry {
        id: "grams-to-ounces",
        name: "Grams to Ounces",
        description: "Convert grams to avoirdupois ounces.",
        category: Weight,
        keywords: &["g", "oz", "grams", "ounces"],
    },
    CatalogEntry {
        id: "stones-to-kilograms",
        name: "Stones to Kilograms",
        description: "Convert stones to kilograms.",
        category: Weight,
        keywords: &["st", "kg", "stones", "body weight"],
    },
    // Temperature
    CatalogEntry {
        id: "temperature-converter",
        name: "Temperature Converter",
        description: "Convert between Celsius, Fahrenheit, Kelvin, Rankine and Reaumur.",
        category: Temperature,
        keywords: &["temperature", "celsius", "fahrenheit", "kelvin", "rankine"],
    },
    CatalogEntry {
        id: "celsius-to-fahrenheit",
        name: "Celsius to Fahrenheit",
        description: "Convert degrees Celsius to degrees Fahrenheit.",
        category: Temperature,
        keywords: &["c", "f", "celsius", "fahrenheit", "weather"],
    },
    CatalogEntry {
        id: "fahrenheit-to-celsius",
        name: "Fahrenheit to Celsius",
        description: "Convert degrees Fahrenheit to degrees Celsius.",
        category: Temperature,
        keywords: &["f", "c", "fahrenheit", "celsius", "oven"],
    },
    CatalogEntry {
        id: "kelvin-to-celsius",
        name: "Kelvin to Celsius",
        description: "Convert kelvins to degrees Celsius.",
        category: Temperature,
        keywords: &["k", "c", "kelvin", "celsius", "absolute zero"],
    },
    // Energy
    CatalogEntry {
        id: "energy-converter",
        name: "Energy Converter",
        description: "Convert joules, calories, watt-hours, BTU and electronvolts.",
        category: Energy,
        keywords: &["energy", "joules", "calories", "kwh", "btu"],
    },
    CatalogEntry {
        id: "calories-to-joules",
        name: "Calories to Joules",
        description: "Convert food calories (kcal) to joules.",
        category: Energy,
        keywords: &["kcal", "calories", "joules", "food energy"],
    },
    CatalogEntry {
        id: "kwh-to-btu",
        name: "kWh to BTU",
        description: "Convert kilowatt-hours to British thermal units.",
        category: Energy,
        keywords: &["kwh", "btu", "electricity", "heating"],
    },
    // Power
    CatalogEntry {
        id: "power-converter",
        name: "Power Converter",
        description: "Convert watts, kilowatts, horsepower and BTU per hour.",
        category: Power,
        keywords: &["power", "watts", "horsepower", "kilowatts"],
    },
    CatalogEntry {
        id: "horsepower-to-kilowatts",
        name: "Horsepower to Kilowatts",
        description: "Convert mechanical horsepower to kilowatts.",
        category: Power,
        keywords: &["hp", "kw", "horsepower", "engine"],
    },
    CatalogEntry {
        id: "lumens-to-watts",
        name: "Lumens to Watts",
        description: "Estimate bulb wattage from brightness and luminous efficacy.",
        category: Power,
        keywords: &["lumens", "watts", "led", "bulb", "brightness", "lighting"],
    },
    // Pressure
    CatalogEntry {
        id: "pressure-converter",
        name: "Pressure Converter",
        description: "Convert pascals, bar, psi, atmospheres and mmHg.",
        category: Pressure,
        keywords: &["pressure", "psi", "bar", "pascal", "atm"],
    },
    CatalogEntry {
        id: "psi-to-bar",
        name: "PSI to Bar",
        description: "Convert pounds per square inch to bar.",
        category: Pressure,
        keywords: &["psi", "bar", "tire pressure"],
    },
    // Speed
    CatalogEntry {
        id: "speed-converter",
        name: "Speed Converter",
        description: "Convert meters per second, km/h, mph, knots and Mach.",
        category: Speed,
        keywords: &["speed", "velocity", "mph", "kmh", "knots"],
    },
    CatalogEntry {
        id: "mph-to-kmh",
        name: "MPH to km/h",
        description: "Convert miles per hour to kilometers per hour.",
        category: Speed,
        keywords: &["mph", "kmh", "speed limit"],
    },
    CatalogEntry {
        id: "knots-to-mph",
        name: "Knots to MPH",
        description: "Convert nautical knots to miles per hour.",
        category: Speed,
        keywords: &["knots", "mph", "sailing", "aviation"],
    },
    CatalogEntry {
        id: "acceleration-converter",
        name: "Acceleration Converter",
        description: "Convert m/s², g-force and ft/s².",
        category: Speed,
        keywords: &["acceleration", "g-force", "gravity"],
    },
    // Area
    CatalogEntry {
        id: "area-converter",
        name: "Area Converter",
        description: "Convert square meters, square feet, acres and hectares.",
        category: Area,
        keywords: &["area", "square feet", "square meters", "acres"],
    },
    CatalogEntry {
        id: "acres-to-hectares",
        name: "Acres to Hectares",
        description: "Convert acres to hectares.",
        category: Area,
        keywords: &["acres", "hectares", "land"],
    },
    // Volume
    CatalogEntry {
        id: "volume-converter",
        name: "Volume Converter",
        description: "Convert liters, gallons, cubic meters and cubic feet.",
        category: Volume,
        keywords: &["volume", "liters", "gallons", "capacity"],
    },
    CatalogEntry {
        id: "liters-to-gallons",
        name: "Liters to Gallons",
        description: "Convert liters to US gallons.",
        category: Volume,
        keywords: &["l", "gal", "liters", "gallons"],
    },
    // Cooking
    CatalogEntry {
        id: "cooking-converter",
        name: "Cooking Measurement Converter",
        description: "Convert cups, tablespoons, teaspoons and milliliters.",
        category: Cooking,
        keywords: &["cooking", "recipe", "cups", "tablespoons", "teaspoons"],
    },
    CatalogEntry {
        id: "cups-to-grams",
        name: "Cups to Grams",
        description: "Convert cups of common baking ingredients to grams.",
        category: Cooking,
        keywords: &["cups", "grams", "flour", "sugar", "baking"],
    },
    CatalogEntry {
        id: "tablespoons-to-teaspoons",
        name: "Tablespoons to Teaspoons",
        description: "Convert tablespoons to teaspoons.",
        category: Cooking,
        keywords: &["tbsp", "tsp", "tablespoons", "teaspoons"],
    },
    CatalogEntry {
        id: "butter-converter",
        name: "Butter Converter",
        description: "Convert butter between sticks, cups, tablespoons and grams.",
        category: Cooking,
        keywords: &["butter", "sticks", "grams", "baking"],
    },
    // Health
    CatalogEntry {
        id: "steps-to-distance",
        name: "Steps to Distance",
        description: "Convert a step count to kilometers and miles using stride length.",
        category: Health,
        keywords: &["steps", "distance", "pedometer", "walking"],
    },
    CatalogEntry {
        id: "steps-to-miles",
        name: "Steps to Miles",
        description: "Convert a step count to miles.",
        category: Health,
        keywords: &["steps", "miles", "walking", "fitness"],
    },
    CatalogEntry {
        id: "stride-length-calculator",
        name: "Stride Length Calculator",
        description: "Estimate stride length from height.",
        category: Health,
        keywords: &["stride", "height", "step length", "walking"],
    },
    // Finance
    CatalogEntry {
        id: "cagr-calculator",
        name: "CAGR Calculator",
        description: "Compute the compound annual growth rate of an investment.",
        category: Finance,
        keywords: &["cagr", "growth rate", "investment", "returns"],
    },
    CatalogEntry {
        id: "simple-interest-calculator",
        name: "Simple Interest Calculator",
        description: "Compute simple interest and a year-by-year balance.",
        category: Finance,
        keywords: &["simple interest", "loan", "principal", "rate"],
    },
    CatalogEntry {
        id: "compound-interest-calculator",
        name: "Compound Interest Calculator",
        description: "Project compound growth with optional periodic contributions.",
        category: Finance,
        keywords: &["compound interest", "savings", "investment", "contributions"],
    },
    // Digital, time, physics, automotive
    CatalogEntry {
        id: "data-storage-converter",
        name: "Data Storage Converter",
        description: "Convert bits, bytes, kilobytes, mebibytes and terabytes.",
        category: Digital,
        keywords: &["data", "bytes", "megabytes", "gigabytes", "storage"],
    },
    CatalogEntry {
        id: "time-converter",
        name: "Time Converter",
        description: "Convert seconds, minutes, hours, days, weeks and years.",
        category: Time,
        keywords: &["time", "seconds", "minutes", "hours", "days"],
    },
    CatalogEntry {
        id: "force-converter",
        name: "Force Converter",
        description: "Convert newtons, pound-force, kilogram-force and dynes.",
        category: Physics,
        keywords: &["force", "newtons", "lbf", "kgf"],
    },
    CatalogEntry {
        id: "angle-converter",
        name: "Angle Converter",
        description: "Convert degrees, radians, gradians and arc units.",
        category: Physics,
        keywords: &["angle", "degrees", "radians"],
    },
    CatalogEntry {
        id: "frequency-converter",
        name: "Frequency Converter",
        description: "Convert hertz, kilohertz, megahertz and RPM.",
        category: Physics,
        keywords: &["frequency", "hertz", "rpm"],
    },
    CatalogEntry {
        id: "fuel-economy-converter",
        name: "Fuel Economy Converter",
        description: "Convert mpg, km/L and L/100 km.",
        category: Automotive,
        keywords: &["fuel", "mpg", "l/100km", "consumption", "mileage"],
    },
];

/// The canonical url for a calculator id.
pub fn calculator_url(id: &str) -> String {
    format!("/calculators/{id}")
}

/// Every calculator in the catalogue, in catalogue order.
pub fn all_calculators() -> Vec<Calculator> {
    ENTRIES.iter().map(CatalogEntry::to_calculator).collect()
}

pub fn get_calculator_by_id(id: &str) -> Option<Calculator> {
    ENTRIES
        .iter()
        .find(|entry| entry.id == id)
        .map(CatalogEntry::to_calculator)
}

pub fn calculators_in_category(category: CalculatorCategory) -> Vec<Calculator> {
    ENTRIES
        .iter()
        .filter(|entry| entry.category == category)
        .map(CatalogEntry::to_calculator)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ids_are_unique() {
        let calculators = all_calculators();
        let ids: HashSet<_> = calculators.iter().map(|c| c.id.as_str()).collect();

        assert_eq!(ids.len(), calculators.len());
    }

    #[test]
    fn urls_follow_calculator_route() {
        for calculator in all_calculators() {
            assert_eq!(calculator.url, format!("/calculators/{}", calculator.id));
        }
    }

    #[test]
    fn every_entry_has_keywords_and_description() {
        for calculator in all_calculators() {
            assert!(!calculator.keywords.is_empty(), "{} has no keywords", calculator.id);
            assert!(!calculator.description.is_empty(), "{} has no description", calculator.id);
        }
    }

    #[test]
    fn get_calculator_by_id_finds_entry() {
        let calculator = get_calculator_by_id("cagr-calculator").expect("cagr entry");

        assert_eq!(calculator.name, "CAGR Calculator");
        assert_eq!(calculator.category, CalculatorCategory::Finance);
    }

    #[test]
    fn get_calculator_by_id_returns_none_for_unknown_id() {
        assert_eq!(get_calculator_by_id("does-not-exist"), None);
    }

    #[test]
    fn calculators_in_category_filters_by_category() {
        let finance = calculators_in_category(CalculatorCategory::Finance);

        assert_eq!(finance.len(), 3);
        assert!(finance.iter().all(|c| c.category == CalculatorCategory::Finance));
    }
}
