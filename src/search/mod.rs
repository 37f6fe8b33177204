//! Search Service Module
//!
//! The core component answering storefront queries against the product catalog.
//!
//! ## Overview
//! This module implements the typo-tolerant search pipeline. It bridges the HTTP
//! API layer with the catalog store: each request materializes a fresh snapshot
//! of the available products, runs the fuzzy matching engine over it with a
//! weighted field profile, and shapes the ranked matches into response payloads.
//!
//! ## Responsibilities
//! - **Matching**: Scoring records with weighted, edit-distance-based multi-field
//!   matching (0 = perfect, 1 = no similarity, threshold 0.4).
//! - **Ranking**: Deterministic best-first ordering over a fixed snapshot.
//! - **API**: The `/search` and `/suggest` endpoints plus the `/search/logs` read.
//! - **Analytics**: One search-log append per committed full search — and none
//!   for suggestions, which would otherwise log every partial keystroke.
//!
//! ## Submodules
//! - **`engine`**: Scoring, weight profiles and ranking.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`tokenizer`**: Query and field text normalization.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod engine;
pub mod handlers;
pub mod tokenizer;
pub mod types;
