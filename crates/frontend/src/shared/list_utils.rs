/// Rendering helpers for master-list cells.
use leptos::prelude::*;

const HIGHLIGHT_STYLE: &str =
    "background-color: #ff9800; color: white; padding: 1px 2px; border-radius: 2px; font-weight: 500;";

/// Byte ranges of every case-insensitive, non-overlapping occurrence of
/// `query` in `text`.
///
/// Returns nothing when lowercasing changes the byte length of `text`, since
/// offsets in the lowercased copy would no longer map onto `text`.
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    let haystack = text.to_lowercase();
    if haystack.len() != text.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(&needle) {
        let start = from + pos;
        let end = start + needle.len();
        ranges.push((start, end));
        from = end;
    }
    ranges
}

/// Wraps the parts of `text` matching `filter` in highlighted spans.
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last = 0;
    for (start, end) in ranges {
        if start > last {
            parts.push(view! { <span>{text[last..start].to_string()}</span> }.into_any());
        }
        parts.push(
            view! { <span style=HIGHLIGHT_STYLE>{text[start..end].to_string()}</span> }.into_any(),
        );
        last = end;
    }
    if last < text.len() {
        parts.push(view! { <span>{text[last..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Cell text re-highlighted whenever `query` changes.
pub fn highlighted(text: String, query: Signal<String>) -> impl IntoView {
    move || highlight_matches(&text, &query.get())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges_case_insensitive() {
        assert_eq!(match_ranges("Sonatel Dakar", "DAK"), vec![(8, 11)]);
        assert_eq!(match_ranges("banana", "an"), vec![(1, 3), (3, 5)]);
        assert_eq!(match_ranges("Sonatel Dakar", "sonatel "), vec![(0, 8)]);
        assert!(match_ranges("Sonatel", "Sonatel ").is_empty());
    }

    #[test]
    fn test_match_ranges_empty_query() {
        assert!(match_ranges("Abidjan", "").is_empty());
        assert!(match_ranges("Abidjan", "   ").is_empty());
        assert!(match_ranges("Abidjan", "xyz").is_empty());
    }

    #[test]
    fn test_match_ranges_accented_text() {
        assert_eq!(match_ranges("Société Générale", "générale"), vec![(10, 20)]);
    }
}
