use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Calculator, CalculatorCategory};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Storage for the calculator search index.
#[async_trait]
pub trait CalculatorRepository: Send + Sync {
    async fn get_calculator(&self, id: &str) -> Result<Calculator, RepositoryError>;

    /// All calculators ordered by name, optionally limited to one category.
    async fn list_calculators(
        &self,
        category: Option<CalculatorCategory>,
    ) -> Result<Vec<Calculator>, RepositoryError>;

    /// Case-insensitive substring search over name, keywords, description
    /// and category. Name matches come first. A blank query matches nothing.
    async fn search(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Calculator>, RepositoryError>;

    /// Replaces the whole index with `calculators` and returns the number
    /// of rows written.
    async fn replace_all(&self, calculators: &[Calculator]) -> Result<usize, RepositoryError>;

    async fn count(&self) -> Result<i64, RepositoryError>;
}
