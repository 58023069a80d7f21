use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::repository::{CalculatorRepository, RepositoryError};

/// Which backend to open and how to reach it. Doubles as the `[database]`
/// section of the server config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DbConfig {
    /// Name of a registered [`RepositoryFactory`], e.g. `"sqlite"`.
    pub backend: String,
    /// For SQLite a file path, a `sqlite:` URL or `:memory:`.
    pub connection_string: String,
}

impl DbConfig {
    pub fn sqlite(connection_string: impl Into<String>) -> Self {
        Self {
            backend: "sqlite".to_string(),
            connection_string: connection_string.into(),
        }
    }

    pub fn in_memory() -> Self {
        Self::sqlite(":memory:")
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self::sqlite("data/calculators.db")
    }
}

/// Opens a [`CalculatorRepository`] for one backend.
#[async_trait]
pub trait RepositoryFactory: Send + Sync {
    fn backend_name(&self) -> &'static str;

    /// Returns a repository whose schema is ready for use.
    async fn create(&self, config: &DbConfig) -> Result<Box<dyn CalculatorRepository>, RepositoryError>;
}

/// Backend name to factory.
#[derive(Default)]
pub struct RepositoryRegistry {
    factories: HashMap<&'static str, Box<dyn RepositoryFactory>>,
}

impl RepositoryRegistry {
    /// Adds `factory`, replacing any factory with the same backend name.
    pub fn register(&mut self, factory: Box<dyn RepositoryFactory>) {
        self.factories.insert(factory.backend_name(), factory);
    }

    pub fn with_backend(mut self, factory: Box<dyn RepositoryFactory>) -> Self {
        self.register(factory);
        self
    }

    /// Registered backend names, sorted.
    pub fn available_backends(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Opens a shareable repository for `config.backend`.
    ///
    /// # Errors
    /// [`RepositoryError::Configuration`] for an unregistered backend, or
    /// whatever the factory returns.
    pub async fn open(
        &self,
        config: &DbConfig,
    ) -> Result<Arc<dyn CalculatorRepository>, RepositoryError> {
        let Some(factory) = self.factories.get(config.backend.as_str()) else {
            return Err(RepositoryError::Configuration(format!(
                "unknown backend '{}'; available: {}",
                config.backend,
                self.available_backends().join(", ")
            )));
        };

        debug!(backend = %config.backend, "opening calculator repository");
        factory.create(config).await.map(Arc::from)
    }
}
