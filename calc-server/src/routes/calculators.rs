use axum::{
    Json,
    extract::{Path, Query, State},
};
use calc_core::{Calculator, CalculatorCategory, RepositoryError, SearchResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app::AppState;
use crate::error::ApiError;

#[derive(Debug, Default, Deserialize)]
pub(super) struct SearchParams {
    #[serde(default)]
    q: Option<String>,
    #[serde(default)]
    limit: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct SearchResponse {
    results: Vec<SearchResult>,
}

/// `GET /api/search?q=`. A missing or blank query yields no results.
pub(super) async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = params.q.as_deref().map(str::trim).unwrap_or_default();
    if query.is_empty() {
        return Ok(Json(SearchResponse { results: Vec::new() }));
    }

    let limit = match params.limit.as_deref().map(str::trim) {
        None | Some("") => state.search_limit,
        Some(raw) => raw
            .parse::<u32>()
            .map_err(|_| ApiError::BadRequest(format!("invalid limit '{raw}'")))?
            .min(state.search_limit),
    };

    let results: Vec<SearchResult> = state
        .repo
        .search(query, limit)
        .await?
        .into_iter()
        .map(SearchResult::from)
        .collect();

    debug!(query, hits = results.len(), "search");
    Ok(Json(SearchResponse { results }))
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct ListParams {
    #[serde(default)]
    category: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct ListResponse {
    calculators: Vec<Calculator>,
}

/// `GET /api/calculators[?category=]`.
pub(super) async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse>, ApiError> {
    let category = match params.category.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(code) => Some(
            CalculatorCategory::parse(code)
                .ok_or_else(|| ApiError::BadRequest(format!("unknown category '{code}'")))?,
        ),
    };

    let calculators = state.repo.list_calculators(category).await?;
    Ok(Json(ListResponse { calculators }))
}

/// `GET /api/calculators/:id`.
pub(super) async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Calculator>, ApiError> {
    match state.repo.get_calculator(&id).await {
        Ok(calculator) => Ok(Json(calculator)),
        Err(RepositoryError::NotFound) => {
            Err(ApiError::NotFound(format!("calculator '{id}' not found")))
        }
        Err(other) => Err(other.into()),
    }
}
