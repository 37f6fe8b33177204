//! Match highlighting for the suggestion dropdown.

/// A fragment of display text, marked if it matched the typed query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub highlighted: bool,
}

fn plain(text: &str) -> Span {
    Span {
        text: text.to_string(),
        highlighted: false,
    }
}

/// Splits `text` into spans by case-insensitive occurrences of the trimmed
/// query, so renderers can emphasize the matched fragments. A blank query (or
/// text whose lowercase form shifts byte offsets) yields one plain span.
pub fn highlight_matches(text: &str, query: &str) -> Vec<Span> {
    let needle = query.trim().to_lowercase();
    let haystack = text.to_lowercase();
    if needle.is_empty() || haystack.len() != text.len() {
        return vec![plain(text)];
    }

    let mut spans = Vec::new();
    let mut pos = 0;
    while let Some(found) = haystack[pos..].find(&needle) {
        let start = pos + found;
        let end = start + needle.len();
        if start > pos {
            spans.push(plain(&text[pos..start]));
        }
        spans.push(Span {
            text: text[start..end].to_string(),
            highlighted: true,
        });
        pos = end;
    }
    if pos < text.len() {
        spans.push(plain(&text[pos..]));
    }
    spans
}
