use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use calc_core::CalculatorRepository;
use calc_core::db::{DbConfig, RepositoryRegistry};
use calc_data::CatalogSeeder;
use calc_db_sqlite::SqliteRepositoryFactory;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::routes;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn CalculatorRepository>,
    pub search_limit: u32,
}

impl AppState {
    pub fn new(
        repo: Arc<dyn CalculatorRepository>,
        search_limit: u32,
    ) -> Self {
        Self { repo, search_limit }
    }
}

/// Build the repository registry with all compiled-in backends.
pub fn build_registry() -> RepositoryRegistry {
    RepositoryRegistry::default().with_backend(Box::new(SqliteRepositoryFactory))
}

/// Open the configured index and, when `seed_if_empty` is set, load the
/// built-in catalogue into an empty one.
pub async fn open_repository(
    db_config: &DbConfig,
    seed_if_empty: bool,
) -> Result<Arc<dyn CalculatorRepository>> {
    let repo = build_registry()
        .open(db_config)
        .await
        .with_context(|| format!("Failed to open database: {}", db_config.connection_string))?;

    if seed_if_empty {
        if let Some(inserted) = CatalogSeeder::seed_if_empty(&*repo, &CatalogSeeder::builtin())
            .await
            .context("Failed to seed calculator index")?
        {
            info!(inserted, "Seeded empty calculator index with built-in catalogue");
        }
    }

    Ok(repo)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::api_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Serve the HTTP API until Ctrl-C.
pub async fn serve(config: &ServerConfig) -> Result<()> {
    let addr = config.bind_addr()?;
    let repo = open_repository(&config.database, config.seed_on_start).await?;
    let router = build_router(AppState::new(repo, config.search_limit));

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "unitcalc listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("unitcalc stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested");
    }
}
