use async_trait::async_trait;
use tracing::info;

use calc_core::db::repository::{CalculatorRepository, RepositoryError};
use calc_core::db::{DbConfig, RepositoryFactory};

use crate::repository::SqliteRepository;

/// The `"sqlite"` backend.
///
/// ```rust,no_run
/// use calc_core::db::RepositoryRegistry;
/// use calc_db_sqlite::SqliteRepositoryFactory;
///
/// let registry = RepositoryRegistry::default().with_backend(Box::new(SqliteRepositoryFactory));
/// ```
pub struct SqliteRepositoryFactory;

#[async_trait]
impl RepositoryFactory for SqliteRepositoryFactory {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    /// Open the database described by `config.connection_string`.
    ///
    /// Accepted connection-string values:
    /// * A bare file path, e.g. `"data/calculators.db"`. The file and its
    ///   parent directory are created if they do not exist.
    /// * A sqlx URL such as `"sqlite:calculators.db"`.
    /// * `":memory:"`, an ephemeral in-memory database.
    ///
    /// Migrations run before the repository is returned.
    async fn create(
        &self,
        config: &DbConfig,
    ) -> Result<Box<dyn CalculatorRepository>, RepositoryError> {
        let repo = SqliteRepository::new(&config.connection_string)
            .await
            .map_err(|e| RepositoryError::Connection(format!("{e:#}")))?;
        repo.run_migrations()
            .await
            .map_err(|e| RepositoryError::Database(format!("{e:#}")))?;
        info!(database = %config.connection_string, "Opened SQLite calculator index");
        Ok(Box::new(repo))
    }
}
