use axum::extract::{Extension, Query};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

use super::engine::{self, full_search_profile, suggestion_profile};
use super::types::{
    ErrorResponse, RecentSearchesParams, RecentSearchesResponse, SearchParams, SearchResponse,
    SuggestResponse, SuggestionItem,
};
use crate::catalog::store::Catalog;
use crate::catalog::types::Laptop;

/// Maximum number of suggestions returned to the autocomplete dropdown.
const MAX_SUGGESTIONS: usize = 8;
/// Queries shorter than this (after trimming) skip the catalog entirely.
const MIN_SUGGEST_QUERY_CHARS: usize = 2;
/// Default number of log entries returned by `/search/logs`.
const DEFAULT_RECENT_SEARCHES: usize = 20;

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn storage_error(context: &'static str, err: anyhow::Error) -> HandlerError {
    tracing::error!("{}: {:#}", context, err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: context.to_string(),
        }),
    )
}

/// `GET /search?q=` — full-text fuzzy search over the available catalog.
///
/// Every request with a non-empty query appends exactly one search-log entry,
/// zero-result searches included. A missing or empty `q` short-circuits with
/// an empty result set: no catalog read, no log write.
pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(catalog): Extension<Arc<dyn Catalog>>,
) -> Result<Json<SearchResponse>, HandlerError> {
    let query = params.q.unwrap_or_default();
    if query.is_empty() {
        return Ok(Json(SearchResponse {
            results: Vec::new(),
            query: None,
        }));
    }

    let laptops = catalog
        .list_available()
        .map_err(|e| storage_error("Failed to search laptops", e))?;

    let matches = engine::search(&laptops, &query, &full_search_profile());
    let results: Vec<Laptop> = matches.iter().map(|m| laptops[m.index].clone()).collect();

    catalog
        .log_search(&query, results.len())
        .map_err(|e| storage_error("Failed to search laptops", e))?;

    tracing::debug!("Search for {:?} matched {} laptops", query, results.len());

    Ok(Json(SearchResponse {
        results,
        query: Some(query),
    }))
}

/// `GET /suggest?q=` — ranked autocomplete suggestions.
///
/// Enforces the two-character floor before touching the catalog, matches over
/// the minimal snapshot with the suggestion profile, and truncates to the top
/// eight. Suggestions are never written to the search log.
pub async fn handle_suggest(
    Query(params): Query<SearchParams>,
    Extension(catalog): Extension<Arc<dyn Catalog>>,
) -> Result<Json<SuggestResponse>, HandlerError> {
    let query = params.q.unwrap_or_default();
    if query.trim().chars().count() < MIN_SUGGEST_QUERY_CHARS {
        return Ok(Json(SuggestResponse {
            suggestions: Vec::new(),
        }));
    }

    let summaries = catalog
        .list_available_summaries()
        .map_err(|e| storage_error("Failed to fetch suggestions", e))?;

    let matches = engine::search(&summaries, &query, &suggestion_profile());
    let suggestions: Vec<SuggestionItem> = matches
        .iter()
        .take(MAX_SUGGESTIONS)
        .map(|m| {
            let summary = &summaries[m.index];
            SuggestionItem {
                id: summary.id.clone(),
                name: summary.name.clone(),
                slug: summary.slug.clone(),
                main_image: summary.main_image.clone(),
                price: summary.price,
                brand_name: summary.brand_name.clone(),
                score: m.score,
            }
        })
        .collect();

    Ok(Json(SuggestResponse { suggestions }))
}

/// `GET /search/logs?limit=` — most recent committed searches, newest first.
pub async fn handle_recent_searches(
    Query(params): Query<RecentSearchesParams>,
    Extension(catalog): Extension<Arc<dyn Catalog>>,
) -> Result<Json<RecentSearchesResponse>, HandlerError> {
    let limit = params.limit.unwrap_or(DEFAULT_RECENT_SEARCHES);
    let searches = catalog
        .recent_searches(limit)
        .map_err(|e| storage_error("Failed to load search logs", e))?;
    Ok(Json(RecentSearchesResponse { searches }))
}
