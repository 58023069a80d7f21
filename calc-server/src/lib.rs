pub mod app;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod routes;

pub use app::{AppState, build_registry, build_router, open_repository, serve};
pub use config::ServerConfig;
