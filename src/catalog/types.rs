//! Catalog Data Types
//!
//! Records stored in the catalog database and the projections handed to the
//! search pipeline. Wire names stay camelCase so API payloads keep the field
//! names the storefront frontend already consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A laptop manufacturer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub logo_url: Option<String>,
}

/// A laptop as stored in the catalog, joined with its brand name.
///
/// This is the full projection returned by search results. Only records with
/// `is_available = true` ever reach a search snapshot; the filter is applied
/// in SQL, not by callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Laptop {
    pub id: String,
    pub brand_id: String,
    pub brand_name: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub processor: String,
    pub ram: String,
    pub storage: String,
    pub graphics: String,
    pub display: String,
    pub price: i64,
    pub stock_quantity: i64,
    pub is_available: bool,
    pub main_image: String,
}

/// Minimal projection used by the suggestion path.
///
/// Carries only the fields the autocomplete dropdown displays plus the two
/// fields the suggestion weight profile matches against (name, brand name).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaptopSummary {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub main_image: String,
    pub price: i64,
    pub brand_name: String,
}

/// One committed full-text search, as recorded in the analytics log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchLogEntry {
    pub search_query: String,
    pub results_count: usize,
    pub created_at: DateTime<Utc>,
}

/// Field values for inserting a laptop. The store mints the id.
#[derive(Debug, Clone)]
pub struct NewLaptop {
    pub brand_id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub processor: String,
    pub ram: String,
    pub storage: String,
    pub graphics: String,
    pub display: String,
    pub price: i64,
    pub stock_quantity: i64,
    pub is_available: bool,
    pub main_image: String,
}
