//! Free-text search helpers for the listing filters.

/// Builds an `ILIKE` pattern that matches `query` as a literal substring.
///
/// `%`, `_` and `\` typed by the user are escaped so they match themselves.
pub fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for ch in query.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Case-insensitive substring test with the same semantics as `ILIKE '%query%'`.
pub(crate) fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
