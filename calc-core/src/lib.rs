pub mod calculations;
pub mod catalog;
pub mod db;
pub mod models;

pub use db::repository::{CalculatorRepository, RepositoryError};
pub use models::*;
