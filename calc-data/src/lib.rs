//! Loading the calculator catalogue into a search index.

mod seeder;

pub use seeder::{CalculatorRecord, CatalogSeeder, CatalogSeederError};
