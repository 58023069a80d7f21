//! Integration tests for catalogue seeding against the SQLite backend.

use calc_core::{CalculatorCategory, CalculatorRepository};
use calc_data::{CatalogSeeder, CatalogSeederError};
use calc_db_sqlite::SqliteRepository;
use pretty_assertions::assert_eq;
use sqlx::sqlite::SqlitePoolOptions;

const TEST_CSV: &str = include_str!("../test-data/calculators.csv");

async fn setup_test_db() -> SqliteRepository {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    let repo = SqliteRepository::new_with_pool(pool);
    repo.run_migrations()
        .await
        .expect("Failed to run migrations");

    repo
}

#[tokio::test]
async fn test_seed_builtin_catalogue() {
    let repo = setup_test_db().await;
    let builtin = CatalogSeeder::builtin();

    let inserted = CatalogSeeder::seed(&repo, &builtin)
        .await
        .expect("Failed to seed");

    assert_eq!(inserted, builtin.len());
    assert_eq!(repo.count().await.unwrap(), builtin.len() as i64);
}

#[tokio::test]
async fn test_seed_from_csv_and_search() {
    let repo = setup_test_db().await;

    let calculators = CatalogSeeder::parse(TEST_CSV.as_bytes()).expect("Failed to parse CSV");
    let inserted = CatalogSeeder::seed(&repo, &calculators)
        .await
        .expect("Failed to seed");

    assert_eq!(inserted, 4);

    let results = repo.search("pounds", 20).await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "kg-to-lbs");

    let feet = repo.get_calculator("meters-to-feet").await.unwrap();
    assert_eq!(feet.url, "/calculators/meters-to-feet");
    assert_eq!(feet.category, CalculatorCategory::Length);
}

#[tokio::test]
async fn test_quoted_description_survives() {
    let repo = setup_test_db().await;
    let calculators = CatalogSeeder::parse(TEST_CSV.as_bytes()).unwrap();
    CatalogSeeder::seed(&repo, &calculators).await.unwrap();

    let found = repo.get_calculator("celsius-to-fahrenheit").await.unwrap();

    assert_eq!(found.description, "Convert °C to °F, with a reference table.");
    assert_eq!(found.keywords, vec!["celsius", "fahrenheit", "c to f"]);
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let repo = setup_test_db().await;
    let calculators = CatalogSeeder::parse(TEST_CSV.as_bytes()).unwrap();

    CatalogSeeder::seed(&repo, &calculators).await.unwrap();
    CatalogSeeder::seed(&repo, &calculators).await.unwrap();

    assert_eq!(repo.count().await.unwrap(), 4);
}

#[tokio::test]
async fn test_seed_rejects_duplicates_without_touching_index() {
    let repo = setup_test_db().await;
    let mut calculators = CatalogSeeder::parse(TEST_CSV.as_bytes()).unwrap();
    CatalogSeeder::seed(&repo, &calculators).await.unwrap();

    calculators.push(calculators[0].clone());
    let result = CatalogSeeder::seed(&repo, &calculators).await;

    assert!(matches!(result, Err(CatalogSeederError::DuplicateId(_))));
    assert_eq!(repo.count().await.unwrap(), 4);
}

#[tokio::test]
async fn test_seed_if_empty_only_seeds_once() {
    let repo = setup_test_db().await;
    let builtin = CatalogSeeder::builtin();

    let first = CatalogSeeder::seed_if_empty(&repo, &builtin).await.unwrap();
    let csv = CatalogSeeder::parse(TEST_CSV.as_bytes()).unwrap();
    let second = CatalogSeeder::seed_if_empty(&repo, &csv).await.unwrap();

    assert_eq!(first, Some(builtin.len()));
    assert_eq!(second, None);
    assert_eq!(repo.count().await.unwrap(), builtin.len() as i64);
}

#[tokio::test]
async fn test_seed_rejects_keyword_with_comma() {
    let repo = setup_test_db().await;
    let csv = "id,name,description,category,url,keywords\n\
               steps-to-miles,Steps to Miles,,health,,\"1,000 steps;walk\"\n";
    let calculators = CatalogSeeder::parse(csv.as_bytes()).expect("Failed to parse CSV");

    let result = CatalogSeeder::seed(&repo, &calculators).await;

    assert!(matches!(
        result,
        Err(CatalogSeederError::CommaInKeyword { .. })
    ));
    assert_eq!(repo.count().await.unwrap(), 0);
}
