//! HTTP client for the lapstore search service.
//!
//! The controller talks to the suggest endpoint through the [`SuggestTransport`]
//! trait so tests can substitute a recording fake; the demo binary plugs in the
//! real [`HttpSearchClient`].

use std::future::Future;

use serde::Deserialize;

/// One autocomplete suggestion, as served by `/suggest`.
///
/// `score` is the server's match distance (0 = perfect); informational only.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub main_image: String,
    pub price: i64,
    pub brand_name: String,
    pub score: f64,
}

#[derive(Debug, Deserialize)]
struct SuggestResponse {
    suggestions: Vec<Suggestion>,
}

/// A row of the full search results page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub name: String,
    pub slug: String,
    pub price: i64,
    pub brand_name: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchHit>,
}

/// Issues suggestion requests on behalf of the autocomplete controller.
pub trait SuggestTransport {
    fn fetch_suggestions(
        &self,
        query: &str,
    ) -> impl Future<Output = anyhow::Result<Vec<Suggestion>>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpSearchClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSearchClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Runs a committed full-text search. Failures here are the user's primary
    /// action failing, so the caller surfaces them — unlike suggestions.
    pub async fn search(&self, query: &str) -> anyhow::Result<Vec<SearchHit>> {
        let url = format!("{}/search?q={}", self.base_url, urlencoding::encode(query));
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body: SearchResponse = response.json().await?;
        Ok(body.results)
    }
}

impl SuggestTransport for HttpSearchClient {
    fn fetch_suggestions(
        &self,
        query: &str,
    ) -> impl Future<Output = anyhow::Result<Vec<Suggestion>>> + Send {
        let url = format!("{}/suggest?q={}", self.base_url, urlencoding::encode(query));
        let client = self.client.clone();
        async move {
            let response = client.get(url).send().await?.error_for_status()?;
            let body: SuggestResponse = response.json().await?;
            Ok(body.suggestions)
        }
    }
}
