//! Autocomplete over the static category list.
//!
//! Suggestions are a case-insensitive substring filter that keeps the order of the
//! candidate list. No ranking, no network.

/// Inputs with this many characters or fewer never open the dropdown.
pub const MIN_SUGGEST_CHARS: usize = 1;

/// Normalize raw input into the needle used for matching: trimmed and lower-cased.
pub fn normalize_needle(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Whether a normalized needle is long enough to show suggestions.
pub fn wants_suggestions(needle: &str) -> bool {
    needle.chars().count() > MIN_SUGGEST_CHARS
}

/// Subsequence of `candidates` whose lower-cased form contains `needle`.
///
/// `needle` is expected to already be normalized (see [`normalize_needle`]).
pub fn filter_categories<'a>(needle: &str, candidates: &[&'a str]) -> Vec<&'a str> {
    candidates
        .iter()
        .copied()
        .filter(|c| c.to_lowercase().contains(needle))
        .collect()
}
