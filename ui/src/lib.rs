//! Lapstore Autocomplete Client Library
//!
//! The client half of the storefront search: a debounced, race-safe
//! autocomplete controller, the HTTP client it talks through, and match
//! highlighting for dropdown rendering. The `lapstore-ui` binary drives these
//! against a running server as a terminal demo.
//!
//! ## Architecture Modules
//! - **`controller`**: The interaction state machine (debounce, keyboard
//!   navigation, request sequencing) and its async driver loop.
//! - **`client`**: The `SuggestTransport` trait and the reqwest-backed client
//!   for the suggest and search endpoints.
//! - **`highlight`**: Case-insensitive span splitting for emphasized matches.

pub mod client;
pub mod controller;
pub mod highlight;
