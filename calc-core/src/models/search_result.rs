use serde::{Deserialize, Serialize};

use super::{Calculator, CalculatorCategory};

/// The slice of a [`Calculator`] returned by keyword search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub name: String,
    pub url: String,
    pub category: CalculatorCategory,
}

impl From<Calculator> for SearchResult {
    fn from(calculator: Calculator) -> Self {
        Self {
            id: calculator.id,
            name: calculator.name,
            url: calculator.url,
            category: calculator.category,
        }
    }
}
