//! Laptop Catalog Search Service Library
//!
//! This library crate defines the core modules of the storefront search service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of two loosely coupled subsystems:
//!
//! - **`catalog`**: The persistence layer. Owns the SQLite store holding brands,
//!   laptops and the search log, and exposes per-request snapshots of the
//!   available products behind a swappable `Catalog` trait.
//! - **`search`**: The core retrieval logic. Contains the typo-tolerant fuzzy
//!   matching engine, the weighted field profiles, and the HTTP handlers for
//!   full search, autocomplete suggestions and search-log reads.
//!
//! The client half of the system — debounced autocomplete with keyboard
//! navigation — lives in the separate `lapstore-ui` crate.

pub mod catalog;
pub mod search;
