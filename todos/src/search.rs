use std::ops::Range;

/// Queries shorter than this match everything instead of filtering.
pub const MIN_QUERY_CHARS: usize = 2;

/// Whether the query is long enough to filter at all.
pub fn is_filtering(query: &str) -> bool {
    query.chars().count() >= MIN_QUERY_CHARS
}

/// Case-insensitive substring match against a task text.
pub fn matches(text: &str, query: &str) -> bool {
    !is_filtering(query) || !highlight_ranges(text, query).is_empty()
}

/// Byte ranges of every (non-overlapping) occurrence of the query, for the
/// renderer to wrap in emphasis markup. Empty for non-filtering queries.
///
/// Matching is per-character case folding, so the ranges always fall on
/// character boundaries of the original text.
pub fn highlight_ranges(text: &str, query: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    if !is_filtering(query) {
        return ranges;
    }
    let query_chars: Vec<char> = query.chars().collect();
    let text_chars: Vec<(usize, char)> = text.char_indices().collect();

    let mut at = 0;
    while at < text_chars.len() {
        let mut matched = 0;
        while matched < query_chars.len()
            && at + matched < text_chars.len()
            && chars_eq_fold(text_chars[at + matched].1, query_chars[matched])
        {
            matched += 1;
        }
        if matched == query_chars.len() {
            let start = text_chars[at].0;
            let end = text_chars
                .get(at + matched)
                .map_or(text.len(), |&(position, _)| position);
            ranges.push(start..end);
            at += matched;
        } else {
            at += 1;
        }
    }
    ranges
}

/// Wraps every match in the given markers, e.g. `[` and `]` for a terminal.
pub fn emphasize(text: &str, query: &str, open: &str, close: &str) -> String {
    let ranges = highlight_ranges(text, query);
    let mut result = String::with_capacity(text.len());
    let mut cursor = 0;
    for range in ranges {
        result += &text[cursor..range.start];
        result += open;
        result += &text[range.clone()];
        result += close;
        cursor = range.end;
    }
    result += &text[cursor..];
    result
}

fn chars_eq_fold(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_queries_do_not_filter() {
        assert!(!is_filtering(""));
        assert!(!is_filtering("a"));
        assert!(is_filtering("ab"));
        assert!(matches("anything at all", "z"));
        assert_eq!(highlight_ranges("anything", "a"), vec![]);
    }

    #[test]
    fn finds_all_occurrences_case_insensitively() {
        assert_eq!(highlight_ranges("Buy milk, buy bread", "buy"), vec![0..3, 10..13]);
        assert!(matches("Buy milk", "BUY"));
        assert!(!matches("Buy milk", "bread"));
    }

    #[test]
    fn matches_do_not_overlap() {
        // The second 'aa' starts after the first match ends.
        assert_eq!(highlight_ranges("aaaa", "aa"), vec![0..2, 2..4]);
        assert_eq!(highlight_ranges("aaa", "aa"), vec![0..2]);
    }

    #[test]
    fn ranges_respect_multibyte_characters() {
        let text = "zażółć gęślą jaźń";
        let ranges = highlight_ranges(text, "gęślą");
        assert_eq!(ranges.len(), 1);
        assert_eq!(&text[ranges[0].clone()], "gęślą");
    }

    #[test]
    fn emphasize_wraps_matches() {
        assert_eq!(
            emphasize("Buy milk, buy bread", "buy", "[", "]"),
            "[Buy] milk, [buy] bread"
        );
        assert_eq!(emphasize("no match here", "zzz", "[", "]"), "no match here");
    }
}
