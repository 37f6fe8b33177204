//! Search API Types
//!
//! Data Transfer Objects for the search and suggestion endpoints. Payload
//! shapes and field names follow the storefront's existing JSON contract.

use serde::{Deserialize, Serialize};

use crate::catalog::types::{Laptop, SearchLogEntry};

/// Query string parameters accepted by `/search` and `/suggest`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Query string parameters accepted by `/search/logs`.
#[derive(Debug, Deserialize)]
pub struct RecentSearchesParams {
    pub limit: Option<usize>,
}

/// Full search response: matched records best first, scores dropped.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<Laptop>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

/// Autocomplete response.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<SuggestionItem>,
}

/// Compact projection of a matched record for the autocomplete dropdown.
///
/// `score` is the engine's combined distance (0 = perfect). It is exposed for
/// transparency and client-side debugging; clients are not required to re-rank
/// with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionItem {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub main_image: String,
    pub price: i64,
    pub brand_name: String,
    pub score: f64,
}

/// Read side of the search log, newest first.
#[derive(Debug, Serialize, Deserialize)]
pub struct RecentSearchesResponse {
    pub searches: Vec<SearchLogEntry>,
}

/// Error body for storage failures surfaced as 500s.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
