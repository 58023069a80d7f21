use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use async_trait::async_trait;
use calc_core::{Calculator, CalculatorCategory, CalculatorRepository, RepositoryError};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use tracing::debug;

const SELECT_COLUMNS: &str = "SELECT id, name, description, category, url, keywords FROM calculators";

pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    /// Opens `database_url`, which may be a sqlx URL (`sqlite:foo.db`), a
    /// bare file path, or `:memory:`. Missing database files are created.
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = if is_memory(database_url) {
            // Every connection to `:memory:` is a separate database, so the
            // pool must hold exactly one connection that never expires.
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect("sqlite::memory:")
                .await
        } else {
            let options = connect_options(database_url)?;
            SqlitePoolOptions::new().connect_with(options).await
        }
        .with_context(|| format!("Failed to connect to database: {}", database_url))?;

        Ok(Self { pool })
    }

    /// Wraps an already configured pool. Migrations are not run.
    pub fn new_with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Failed to run database migrations")?;
        Ok(())
    }
}

fn is_memory(database_url: &str) -> bool {
    matches!(database_url.trim(), ":memory:" | "sqlite::memory:" | "sqlite://:memory:")
}

fn connect_options(database_url: &str) -> Result<SqliteConnectOptions> {
    let options = if database_url.starts_with("sqlite:") {
        SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("Invalid database url: {}", database_url))?
    } else {
        let path = Path::new(database_url);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create database directory '{}'", parent.display())
            })?;
        }
        SqliteConnectOptions::new().filename(path)
    };
    Ok(options.create_if_missing(true))
}

/// `LIKE` pattern matching `query` anywhere, with `%`, `_` and the escape
/// character taken literally.
fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for ch in query.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn row_to_calculator(row: &SqliteRow) -> Result<Calculator, RepositoryError> {
    let category_code: String = row
        .try_get("category")
        .map_err(|e| RepositoryError::Database(e.to_string()))?;
    let category = CalculatorCategory::parse(&category_code).ok_or_else(|| {
        RepositoryError::Database(format!("Invalid category: {}", category_code))
    })?;
    let keywords: String = row
        .try_get("keywords")
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

    Ok(Calculator {
        id: row
            .try_get("id")
            .map_err(|e| RepositoryError::Database(e.to_string()))?,
        name: row
            .try_get("name")
            .map_err(|e| RepositoryError::Database(e.to_string()))?,
        description: row
            .try_get("description")
            .map_err(|e| RepositoryError::Database(e.to_string()))?,
        category,
        url: row
            .try_get("url")
            .map_err(|e| RepositoryError::Database(e.to_string()))?,
        keywords: Calculator::split_keywords(&keywords, ','),
    })
}

#[async_trait]
impl CalculatorRepository for SqliteRepository {
    async fn get_calculator(
        &self,
        id: &str,
    ) -> Result<Calculator, RepositoryError> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?
            .ok_or(RepositoryError::NotFound)?;

        row_to_calculator(&row)
    }

    async fn list_calculators(
        &self,
        category: Option<CalculatorCategory>,
    ) -> Result<Vec<Calculator>, RepositoryError> {
        let rows = match category {
            Some(category) => {
                sqlx::query(&format!(
                    "{SELECT_COLUMNS} WHERE category = ? ORDER BY name COLLATE NOCASE"
                ))
                .bind(category.as_str())
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query(&format!("{SELECT_COLUMNS} ORDER BY name COLLATE NOCASE"))
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        rows.iter().map(row_to_calculator).collect()
    }

    async fn search(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Calculator>, RepositoryError> {
        let query = query.trim();
        if query.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        let pattern = like_pattern(query);
        let rows = sqlx::query(&format!(
            "{SELECT_COLUMNS}
             WHERE name LIKE ? ESCAPE '\\'
                OR keywords LIKE ? ESCAPE '\\'
                OR description LIKE ? ESCAPE '\\'
                OR category LIKE ? ESCAPE '\\'
             ORDER BY CASE WHEN name LIKE ? ESCAPE '\\' THEN 0 ELSE 1 END,
                      name COLLATE NOCASE
             LIMIT ?"
        ))
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        debug!(query, hits = rows.len(), "Calculator search");
        rows.iter().map(row_to_calculator).collect()
    }

    async fn replace_all(
        &self,
        calculators: &[Calculator],
    ) -> Result<usize, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        sqlx::query("DELETE FROM calculators")
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        for calculator in calculators {
            sqlx::query(
                "INSERT INTO calculators (id, name, description, category, url, keywords)
                 VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(&calculator.id)
            .bind(&calculator.name)
            .bind(&calculator.description)
            .bind(calculator.category.as_str())
            .bind(&calculator.url)
            .bind(calculator.keywords_joined())
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                RepositoryError::Database(format!("Failed to insert '{}': {}", calculator.id, e))
            })?;
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(calculators.len())
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM calculators")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        row.try_get("n")
            .map_err(|e| RepositoryError::Database(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use calc_core::catalog::all_calculators;
    use pretty_assertions::assert_eq;

    use super::*;

    async fn setup_test_db() -> SqliteRepository {
        let repo = SqliteRepository::new(":memory:")
            .await
            .expect("Failed to create in-memory database");
        repo.run_migrations()
            .await
            .expect("Failed to run migrations");
        repo
    }

    async fn seeded_db() -> SqliteRepository {
        let repo = setup_test_db().await;
        repo.replace_all(&all_calculators())
            .await
            .expect("Failed to seed catalog");
        repo
    }

    fn calculator(
        id: &str,
        name: &str,
        category: CalculatorCategory,
        keywords: &[&str],
    ) -> Calculator {
        Calculator {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("Convert with {name}"),
            category,
            url: format!("/calculators/{id}"),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    fn ids(calculators: &[Calculator]) -> Vec<&str> {
        calculators.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("kg"), "%kg%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
    }

    #[test]
    fn memory_urls_are_recognised() {
        assert!(is_memory(":memory:"));
        assert!(is_memory("sqlite::memory:"));
        assert!(!is_memory("data/calculators.db"));
    }

    #[tokio::test]
    async fn empty_database_has_zero_rows() {
        let repo = setup_test_db().await;

        assert_eq!(repo.count().await, Ok(0));
    }

    #[tokio::test]
    async fn replace_all_inserts_every_calculator() {
        let repo = setup_test_db().await;
        let catalog = all_calculators();

        let inserted = repo.replace_all(&catalog).await.unwrap();

        assert_eq!(inserted, catalog.len());
        assert_eq!(repo.count().await, Ok(catalog.len() as i64));
    }

    #[tokio::test]
    async fn replace_all_discards_previous_rows() {
        let repo = seeded_db().await;
        let replacement = vec![calculator(
            "kg-to-lbs",
            "Kilograms to Pounds",
            CalculatorCategory::Weight,
            &["kg"],
        )];

        repo.replace_all(&replacement).await.unwrap();

        assert_eq!(repo.count().await, Ok(1));
    }

    #[tokio::test]
    async fn replace_all_rolls_back_on_duplicate_id() {
        let repo = seeded_db().await;
        let before = repo.count().await.unwrap();
        let duplicated = vec![
            calculator("dup", "First", CalculatorCategory::Length, &[]),
            calculator("dup", "Second", CalculatorCategory::Length, &[]),
        ];

        let result = repo.replace_all(&duplicated).await;

        assert!(matches!(result, Err(RepositoryError::Database(_))));
        assert_eq!(repo.count().await, Ok(before));
    }

    #[tokio::test]
    async fn get_calculator_round_trips_keywords() {
        let repo = seeded_db().await;

        let found = repo.get_calculator("kg-to-lbs").await.unwrap();

        assert_eq!(found, calc_core::catalog::get_calculator_by_id("kg-to-lbs").unwrap());
    }

    #[tokio::test]
    async fn get_calculator_not_found() {
        let repo = seeded_db().await;

        assert_eq!(
            repo.get_calculator("does-not-exist").await,
            Err(RepositoryError::NotFound)
        );
    }

    #[tokio::test]
    async fn list_calculators_filters_by_category() {
        let repo = seeded_db().await;

        let finance = repo
            .list_calculators(Some(CalculatorCategory::Finance))
            .await
            .unwrap();

        assert_eq!(finance.len(), 3);
        assert!(finance.iter().all(|c| c.category == CalculatorCategory::Finance));
    }

    #[tokio::test]
    async fn list_calculators_is_sorted_by_name() {
        let repo = seeded_db().await;

        let all = repo.list_calculators(None).await.unwrap();
        let names: Vec<String> = all.iter().map(|c| c.name.to_lowercase()).collect();
        let mut sorted = names.clone();
        sorted.sort();

        assert_eq!(names, sorted);
    }

    #[tokio::test]
    async fn search_ranks_name_matches_first() {
        let repo = setup_test_db().await;
        repo.replace_all(&[
            calculator("a-keyword", "Alpha", CalculatorCategory::Length, &["feet"]),
            calculator("z-name", "Zulu Feet", CalculatorCategory::Length, &[]),
            calculator("b-name", "Bravo feet", CalculatorCategory::Length, &[]),
        ])
        .await
        .unwrap();

        let results = repo.search("FEET", 20).await.unwrap();

        assert_eq!(ids(&results), vec!["b-name", "z-name", "a-keyword"]);
    }

    #[tokio::test]
    async fn search_matches_keywords_and_category() {
        let repo = seeded_db().await;

        let by_keyword = repo.search("lbs", 20).await.unwrap();
        let by_category = repo.search("finance", 20).await.unwrap();

        assert!(ids(&by_keyword).contains(&"kg-to-lbs"));
        assert_eq!(by_category.len(), 3);
    }

    #[tokio::test]
    async fn search_respects_limit() {
        let repo = seeded_db().await;

        let results = repo.search("converter", 2).await.unwrap();

        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn blank_search_returns_nothing() {
        let repo = seeded_db().await;

        assert_eq!(repo.search("   ", 20).await, Ok(Vec::new()));
    }

    #[tokio::test]
    async fn wildcards_in_query_are_literal() {
        let repo = seeded_db().await;

        assert_eq!(repo.search("%", 20).await, Ok(Vec::new()));
        assert_eq!(repo.search("_", 20).await, Ok(Vec::new()));
    }

    #[tokio::test]
    async fn file_database_is_created_with_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("calculators.db");

        let repo = SqliteRepository::new(path.to_str().unwrap()).await.unwrap();
        repo.run_migrations().await.unwrap();

        assert!(path.exists());
        assert_eq!(repo.count().await, Ok(0));
    }

    #[tokio::test]
    async fn repository_shares_an_existing_pool() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create in-memory database");
        let repo = SqliteRepository::new_with_pool(pool.clone());
        repo.run_migrations().await.unwrap();

        repo.replace_all(&all_calculators()).await.unwrap();

        let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM calculators")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(rows, all_calculators().len() as i64);
    }
}
