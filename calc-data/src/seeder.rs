use std::collections::HashSet;
use std::io::Read;

use calc_core::catalog::{all_calculators, calculator_url};
use calc_core::{Calculator, CalculatorCategory, CalculatorRepository, RepositoryError};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur when loading catalogue data.
#[derive(Debug, Error)]
pub enum CatalogSeederError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Calculator '{id}' has unknown category '{category}'")]
    InvalidCategory { id: String, category: String },

    #[error("Record {0} has a blank id")]
    BlankId(usize),

    #[error("Duplicate calculator id '{0}'")]
    DuplicateId(String),

    /// Keywords are stored comma-joined, so a keyword may not contain one.
    #[error("Calculator '{id}' has keyword '{keyword}' containing a comma")]
    CommaInKeyword { id: String, keyword: String },

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl From<csv::Error> for CatalogSeederError {
    fn from(err: csv::Error) -> Self {
        CatalogSeederError::CsvParse(err.to_string())
    }
}

/// A single record from a catalogue CSV file.
///
/// - `id`: URL slug, unique across the catalogue
/// - `name`, `description`: display text
/// - `category`: a category code such as `length` or `finance`
/// - `url`: page path; empty means `/calculators/{id}`
/// - `keywords`: search terms separated by `;`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CalculatorRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub keywords: String,
}

impl CalculatorRecord {
    fn into_calculator(self) -> Result<Calculator, CatalogSeederError> {
        let id = self.id.trim().to_string();
        let category = CalculatorCategory::parse(&self.category).ok_or_else(|| {
            CatalogSeederError::InvalidCategory {
                id: id.clone(),
                category: self.category.clone(),
            }
        })?;
        let url = match self.url.trim() {
            "" => calculator_url(&id),
            url => url.to_string(),
        };

        Ok(Calculator {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            category,
            url,
            keywords: Calculator::split_keywords(&self.keywords, ';'),
            id,
        })
    }
}

/// Populates a [`CalculatorRepository`] from the built-in catalogue or a
/// CSV file.
///
/// Seeding replaces the whole index, so running it twice with the same
/// input leaves the same rows behind.
pub struct CatalogSeeder;

impl CatalogSeeder {
    /// The catalogue compiled into the binary.
    pub fn builtin() -> Vec<Calculator> {
        all_calculators()
    }

    /// Parse calculators from a CSV reader.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<Calculator>, CatalogSeederError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut calculators = Vec::new();

        for result in csv_reader.deserialize() {
            let record: CalculatorRecord = result?;
            calculators.push(record.into_calculator()?);
        }

        debug!(count = calculators.len(), "Parsed catalogue CSV");
        Ok(calculators)
    }

    /// Rejects blank and duplicate ids, and keywords containing a comma.
    pub fn validate(calculators: &[Calculator]) -> Result<(), CatalogSeederError> {
        let mut seen = HashSet::new();
        for (index, calculator) in calculators.iter().enumerate() {
            if calculator.id.trim().is_empty() {
                return Err(CatalogSeederError::BlankId(index + 1));
            }
            if !seen.insert(calculator.id.as_str()) {
                return Err(CatalogSeederError::DuplicateId(calculator.id.clone()));
            }
            if let Some(keyword) = calculator.keywords.iter().find(|k| k.contains(',')) {
                return Err(CatalogSeederError::CommaInKeyword {
                    id: calculator.id.clone(),
                    keyword: keyword.clone(),
                });
            }
        }
        Ok(())
    }

    /// Validate `calculators` and replace the repository contents with them.
    /// Returns the number of rows written.
    pub async fn seed<R: CalculatorRepository + ?Sized>(
        repo: &R,
        calculators: &[Calculator],
    ) -> Result<usize, CatalogSeederError> {
        Self::validate(calculators)?;
        let inserted = repo.replace_all(calculators).await?;
        info!(inserted, "Seeded calculator index");
        Ok(inserted)
    }

    /// Seed only when the repository holds no calculators yet. Returns the
    /// number of rows written, or `None` when the index was left alone.
    pub async fn seed_if_empty<R: CalculatorRepository + ?Sized>(
        repo: &R,
        calculators: &[Calculator],
    ) -> Result<Option<usize>, CatalogSeederError> {
        if repo.count().await? > 0 {
            debug!("Calculator index already populated");
            return Ok(None);
        }
        Self::seed(repo, calculators).await.map(Some)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const HEADER: &str = "id,name,description,category,url,keywords\n";

    fn parse_one(line: &str) -> Result<Vec<Calculator>, CatalogSeederError> {
        CatalogSeeder::parse(format!("{HEADER}{line}").as_bytes())
    }

    #[test]
    fn test_parse_single_record() {
        let calculators = parse_one(
            "kg-to-lbs,Kilograms to Pounds,Convert kg.,weight,/calculators/kg-to-lbs,kg; lbs ;pounds",
        )
        .expect("Failed to parse CSV");

        assert_eq!(
            calculators,
            vec![Calculator {
                id: "kg-to-lbs".to_string(),
                name: "Kilograms to Pounds".to_string(),
                description: "Convert kg.".to_string(),
                category: CalculatorCategory::Weight,
                url: "/calculators/kg-to-lbs".to_string(),
                keywords: vec!["kg".to_string(), "lbs".to_string(), "pounds".to_string()],
            }]
        );
    }

    #[test]
    fn test_parse_blank_url_defaults_to_calculator_path() {
        let calculators = parse_one("psi-to-bar,PSI to Bar,,pressure,,psi;bar").unwrap();

        assert_eq!(calculators[0].url, "/calculators/psi-to-bar");
        assert_eq!(calculators[0].description, "");
    }

    #[test]
    fn test_parse_unknown_category() {
        let err = parse_one("x,X,,astrology,,").expect_err("Should reject category");

        let CatalogSeederError::InvalidCategory { id, category } = err else {
            panic!("Expected InvalidCategory error, got: {:?}", err);
        };
        assert_eq!(id, "x");
        assert_eq!(category, "astrology");
    }

    #[test]
    fn test_parse_missing_column() {
        let err = CatalogSeeder::parse("id,name\nx,X".as_bytes()).expect_err("Should fail");

        let CatalogSeederError::CsvParse(msg) = err else {
            panic!("Expected CsvParse error, got: {:?}", err);
        };
        assert!(msg.contains("missing field"), "got: {}", msg);
    }

    #[test]
    fn test_parse_empty_csv() {
        let calculators = CatalogSeeder::parse(HEADER.as_bytes()).unwrap();

        assert!(calculators.is_empty());
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut calculators = CatalogSeeder::builtin();
        calculators.push(calculators[0].clone());

        match CatalogSeeder::validate(&calculators) {
            Err(CatalogSeederError::DuplicateId(id)) => assert_eq!(id, calculators[0].id),
            other => panic!("expected DuplicateId, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_blank_id() {
        let mut calculators = CatalogSeeder::builtin();
        calculators[2].id = "  ".to_string();

        assert!(matches!(
            CatalogSeeder::validate(&calculators),
            Err(CatalogSeederError::BlankId(3))
        ));
    }

    #[test]
    fn test_validate_rejects_comma_in_keyword() {
        let calculators =
            parse_one("steps-to-miles,Steps to Miles,,health,,\"1,000 steps;walk\"").unwrap();

        let err = CatalogSeeder::validate(&calculators).expect_err("Should reject keyword");

        let CatalogSeederError::CommaInKeyword { id, keyword } = err else {
            panic!("Expected CommaInKeyword error, got: {:?}", err);
        };
        assert_eq!(id, "steps-to-miles");
        assert_eq!(keyword, "1,000 steps");
    }

    #[test]
    fn test_builtin_catalogue_is_valid() {
        assert!(CatalogSeeder::validate(&CatalogSeeder::builtin()).is_ok());
    }
}
