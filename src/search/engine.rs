//! Fuzzy Matching Engine
//!
//! Scores every record in a catalog snapshot against a query using weighted,
//! typo-tolerant multi-field matching, and returns the records ranked best
//! first. Scores follow the lower-is-better convention: 0.0 is a perfect
//! match, 1.0 no similarity. The convention is part of the public contract —
//! it orders results and is exposed in the suggestion payload.
//!
//! The scan is linear over the snapshot. That is fine at catalog scale (a few
//! hundred records per request) and is the known scalability ceiling; an
//! indexed matcher can replace this module behind the same [`search`] contract.

use strsim::normalized_damerau_levenshtein;

use super::tokenizer::{tokenize_field, tokenize_query};
use crate::catalog::types::{Laptop, LaptopSummary};

/// Records scoring above this combined distance are dropped.
pub const SEARCH_THRESHOLD: f64 = 0.4;

/// Score for a token found inside a field but not matching a whole word.
const SUBSTRING_SCORE: f64 = 0.1;

/// Perfect field scores are clamped to this floor before combining, so an
/// exact hit in one field still lets other fields influence the ranking.
const FLOOR_SCORE: f64 = 0.001;

/// How much a match in one field contributes to a record's relevance.
pub struct FieldWeight<R> {
    pub name: &'static str,
    pub extract: fn(&R) -> Option<&str>,
    pub weight: f64,
}

/// A validated weight table plus matching parameters.
///
/// Profiles are data, not code: new search shapes (brand-only, accessory
/// search) are new profiles, not new engine branches. Construction asserts on
/// malformed tables — a bad profile is a programmer error, not a runtime case.
pub struct SearchProfile<R> {
    fields: Vec<FieldWeight<R>>,
    threshold: f64,
    min_token_len: usize,
    total_weight: f64,
}

impl<R> SearchProfile<R> {
    pub fn new(fields: Vec<FieldWeight<R>>, threshold: f64, min_token_len: usize) -> Self {
        assert!(!fields.is_empty(), "a search profile needs at least one field");
        assert!(
            (0.0..=1.0).contains(&threshold),
            "threshold must lie within [0, 1]"
        );
        for field in &fields {
            assert!(
                field.weight > 0.0,
                "field {} has a non-positive weight",
                field.name
            );
        }
        let total_weight = fields.iter().map(|f| f.weight).sum();
        Self {
            fields,
            threshold,
            min_token_len,
            total_weight,
        }
    }
}

/// Weight profile for the full search results page: every textual field
/// participates, led by the product name.
pub fn full_search_profile() -> SearchProfile<Laptop> {
    SearchProfile::new(
        vec![
            FieldWeight {
                name: "name",
                extract: |l: &Laptop| Some(l.name.as_str()),
                weight: 2.0,
            },
            FieldWeight {
                name: "brandName",
                extract: |l: &Laptop| Some(l.brand_name.as_str()),
                weight: 1.5,
            },
            FieldWeight {
                name: "processor",
                extract: |l: &Laptop| Some(l.processor.as_str()),
                weight: 1.0,
            },
            FieldWeight {
                name: "description",
                extract: |l: &Laptop| Some(l.description.as_str()),
                weight: 0.5,
            },
        ],
        SEARCH_THRESHOLD,
        1,
    )
}

/// Weight profile for autocomplete: name and brand only, and tokens under two
/// characters do not count, keeping early keystrokes from matching noise.
pub fn suggestion_profile() -> SearchProfile<LaptopSummary> {
    SearchProfile::new(
        vec![
            FieldWeight {
                name: "name",
                extract: |l: &LaptopSummary| Some(l.name.as_str()),
                weight: 2.0,
            },
            FieldWeight {
                name: "brandName",
                extract: |l: &LaptopSummary| Some(l.brand_name.as_str()),
                weight: 1.5,
            },
        ],
        SEARCH_THRESHOLD,
        2,
    )
}

/// Index of a matched record within the snapshot, with its combined score.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub index: usize,
    pub score: f64,
}

/// Scores every record against `query` and returns matches within the
/// profile's threshold, ordered ascending by score.
///
/// Ordering is deterministic for a fixed snapshot: the sort is stable, so
/// equal scores keep snapshot order. A query with no usable tokens matches
/// nothing.
pub fn search<R>(records: &[R], query: &str, profile: &SearchProfile<R>) -> Vec<MatchResult> {
    let tokens = tokenize_query(query, profile.min_token_len);
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<MatchResult> = records
        .iter()
        .enumerate()
        .map(|(index, record)| MatchResult {
            index,
            score: score_record(record, &tokens, profile),
        })
        .filter(|m| m.score <= profile.threshold)
        .collect();

    matches.sort_by(|a, b| a.score.total_cmp(&b.score));
    matches
}

/// Combines per-field scores multiplicatively, each field raised to its
/// normalized weight. A strong hit in a heavy field dominates; fields that are
/// missing or empty contribute nothing and carry no penalty.
fn score_record<R>(record: &R, tokens: &[String], profile: &SearchProfile<R>) -> f64 {
    let mut combined = 1.0;
    for field in &profile.fields {
        let value = match (field.extract)(record) {
            Some(v) if !v.trim().is_empty() => v,
            _ => continue,
        };
        let field_score = score_field(value, tokens).clamp(FLOOR_SCORE, 1.0);
        combined *= field_score.powf(field.weight / profile.total_weight);
    }
    combined
}

/// Average token score against one field value.
fn score_field(value: &str, tokens: &[String]) -> f64 {
    let lowered = value.to_lowercase();
    let words = tokenize_field(&lowered);
    if words.is_empty() {
        return 1.0;
    }
    let total: f64 = tokens
        .iter()
        .map(|token| score_token(token, &lowered, &words))
        .sum();
    total / tokens.len() as f64
}

/// Distance of one query token from a field: exact word hit, then substring
/// anywhere in the field (position-independent), then the best edit distance
/// against the field's words. Damerau-Levenshtein keeps transpositions cheap,
/// so "dlel" stays close to "dell".
fn score_token(token: &str, field_text: &str, words: &[String]) -> f64 {
    if words.iter().any(|word| word == token) {
        return 0.0;
    }
    if field_text.contains(token) {
        return SUBSTRING_SCORE;
    }
    words
        .iter()
        .map(|word| 1.0 - normalized_damerau_levenshtein(token, word))
        .fold(1.0, f64::min)
}
