use std::sync::LazyLock;

use regex::Regex;

/// Numbered-list marker used by the service to enumerate suggestions, e.g. `"12. "`.
static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.\s+").expect("valid list marker regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTag {
    /// 1-based position in the response.
    pub index: usize,
    pub text: String,
}

/// Splits a numbered-list response into tags.
///
/// Best effort: a response without list markers becomes a single tag, and a
/// marker-like token inside a sentence also splits it. Never fails.
pub fn parse_tags(raw: &str) -> Vec<ParsedTag> {
    LIST_MARKER
        .split(raw)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .enumerate()
        .map(|(i, segment)| ParsedTag {
            index: i + 1,
            text: strip_quotes(segment).to_string(),
        })
        .collect()
}

fn strip_quotes(segment: &str) -> &str {
    segment
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(segment)
}
