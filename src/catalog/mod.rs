//! Catalog Module
//!
//! The persistent product catalog backing the storefront search.
//!
//! ## Overview
//! This module owns the relational store (SQLite) holding brands, laptops and the
//! search log. Search and suggestion requests never touch SQL directly: they go
//! through the [`store::Catalog`] trait, which materializes a fresh snapshot of the
//! currently available products per request and appends committed searches to the
//! analytics log.
//!
//! ## Responsibilities
//! - **Snapshots**: Two read shapes over the same `is_available` filter — the full
//!   projection for result pages and a minimal projection for autocomplete.
//! - **Search log**: Append-only record of committed full-text searches (query text,
//!   result count, timestamp). Suggestions are never logged.
//! - **Seeding**: A demo catalog for local runs, applied once on an empty database.
//!
//! ## Submodules
//! - **`store`**: The `Catalog` trait and its SQLite implementation.
//! - **`seed`**: Demo brands and laptops.
//! - **`types`**: Catalog records and projections.

pub mod seed;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
