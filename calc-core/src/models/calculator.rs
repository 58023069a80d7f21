use serde::{Deserialize, Serialize};

use super::CalculatorCategory;

/// Metadata describing one calculator in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculator {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: CalculatorCategory,
    pub url: String,
    pub keywords: Vec<String>,
}

impl Calculator {
    /// Keywords joined with commas, as stored in the `keywords` column.
    pub fn keywords_joined(&self) -> String {
        self.keywords.join(",")
    }

    /// Splits a stored keyword column back into trimmed, non-empty keywords.
    pub fn split_keywords(
        raw: &str,
        separator: char,
    ) -> Vec<String> {
        raw.split(separator)
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn split_keywords_trims_and_drops_empty_entries() {
        let keywords = Calculator::split_keywords(" kg , lbs,,pounds ", ',');

        assert_eq!(keywords, vec!["kg", "lbs", "pounds"]);
    }

    #[test]
    fn keywords_joined_uses_commas() {
        let calculator = Calculator {
            id: "kg-to-lbs".to_string(),
            name: "Kilograms to Pounds".to_string(),
            description: String::new(),
            category: CalculatorCategory::Weight,
            url: "/calculators/kg-to-lbs".to_string(),
            keywords: vec!["kg".to_string(), "lbs".to_string()],
        };

        assert_eq!(calculator.keywords_joined(), "kg,lbs");
    }
}
