//! Shared helpers used across detection and classification.

/// Checks if a keyword appears in text with word boundaries.
///
/// A word boundary is defined as:
/// - Start of string or non-alphanumeric character before the keyword
/// - End of string or non-alphanumeric character after the keyword
///
/// This prevents "finite" from matching inside "infinite". Both arguments are
/// expected to be lowercase already.
pub(crate) fn contains_word(text: &str, keyword: &str) -> bool {
    if keyword.is_empty() {
        return false;
    }

    let mut search_start = 0;

    while let Some(pos) = text[search_start..].find(keyword) {
        let abs_pos = search_start + pos;
        let end_pos = abs_pos + keyword.len();

        let has_boundary_before = text[..abs_pos]
            .chars()
            .next_back()
            .map(|c| !c.is_alphanumeric())
            .unwrap_or(true);

        let has_boundary_after = text[end_pos..]
            .chars()
            .next()
            .map(|c| !c.is_alphanumeric())
            .unwrap_or(true);

        if has_boundary_before && has_boundary_after {
            return true;
        }

        // Move past the first character of this match and keep searching
        search_start = abs_pos
            + text[abs_pos..]
                .chars()
                .next()
                .map(char::len_utf8)
                .unwrap_or(1);
    }

    false
}

/// Returns the key with the most keyword hits in `text`.
///
/// Each distinct keyword counts once. Ties keep the key listed first; `None`
/// when no keyword of any row is present.
pub(crate) fn best_keyword_match<K: Copy>(text: &str, table: &[(K, &[&str])]) -> Option<K> {
    let mut best: Option<(K, usize)> = None;

    for (key, keywords) in table {
        let hits = keywords
            .iter()
            .filter(|keyword| contains_word(text, keyword))
            .count();

        if hits == 0 {
            continue;
        }

        match best {
            Some((_, best_hits)) if best_hits >= hits => {}
            _ => best = Some((*key, hits)),
        }
    }

    best.map(|(key, _)| key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_boundary_prevents_partial_matches() {
        assert!(!contains_word("the universe is infinite", "finite"));
        assert!(contains_word("the universe is finite", "finite"));
        assert!(!contains_word("a repayment plan", "payment"));
    }

    #[test]
    fn word_boundary_allows_punctuation_and_edges() {
        assert!(contains_word("finite, bounded", "finite"));
        assert!(contains_word("well-being matters", "well-being"));
        assert!(contains_word("good", "good"));
    }

    #[test]
    fn word_boundary_handles_multibyte_text() {
        assert!(!contains_word("naïve naïvety", "naïvety2"));
        assert!(contains_word("über naïve", "naïve"));
        assert!(!contains_word("ééé", "é"));
    }

    #[test]
    fn empty_keyword_never_matches() {
        assert!(!contains_word("anything", ""));
    }

    #[test]
    fn best_keyword_match_prefers_more_hits_then_first_row() {
        let table: &[(u8, &[&str])] = &[(1, &["alpha", "beta"]), (2, &["gamma", "delta"])];
        assert_eq!(best_keyword_match("alpha gamma delta", table), Some(2));
        assert_eq!(best_keyword_match("alpha gamma", table), Some(1));
        assert_eq!(best_keyword_match("alpha alpha alpha gamma delta", table), Some(2));
        assert_eq!(best_keyword_match("nothing here", table), None);
    }
}
