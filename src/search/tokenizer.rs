use regex::Regex;
use std::sync::OnceLock;

fn word_pattern() -> &'static Regex {
    static WORDS: OnceLock<Regex> = OnceLock::new();
    WORDS.get_or_init(|| Regex::new(r"[a-z0-9]+").expect("static word pattern"))
}

/// Extracts lowercase alphanumeric words from a field value, in order.
/// Digits are kept so model numbers ("9520", "i7") stay searchable.
pub fn tokenize_field(text: &str) -> Vec<String> {
    word_pattern()
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Splits a raw query into lowercase tokens, dropping anything shorter than
/// `min_token_len` characters after trimming surrounding punctuation.
pub fn tokenize_query(query: &str, min_token_len: usize) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| !c.is_alphanumeric())
                .to_string()
        })
        .filter(|word| !word.is_empty() && word.chars().count() >= min_token_len)
        .collect()
}
