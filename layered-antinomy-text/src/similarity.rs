//! Token-set similarity between text fragments.

use std::collections::HashSet;

/// Similarity above which two subjects, predicates or core propositions are
/// treated as the same claim.
pub const SAME_CLAIM_THRESHOLD: f64 = 0.7;

/// Computes the Jaccard similarity between two text fragments.
///
/// The Jaccard coefficient is |A ∩ B| / |A ∪ B| where A and B are the sets of
/// lowercased, whitespace-separated words in each fragment.
///
/// Returns 0.0 when either fragment is empty and 1.0 for identical fragments.
pub fn similarity(a: &str, b: &str) -> f64 {
    let lower_a = a.to_lowercase();
    let lower_b = b.to_lowercase();
    let words_a: HashSet<&str> = lower_a.split_whitespace().collect();
    let words_b: HashSet<&str> = lower_b.split_whitespace().collect();

    if words_a.is_empty() || words_b.is_empty() {
        return 0.0;
    }

    if lower_a == lower_b {
        return 1.0;
    }

    let intersection = words_a.intersection(&words_b).count();
    let union = words_a.union(&words_b).count();

    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_fragments() {
        assert_eq!(similarity("deliver goods", "deliver goods"), 1.0);
        assert_eq!(similarity("Deliver Goods", "deliver goods"), 1.0);
    }

    #[test]
    fn partial_overlap() {
        // "deliver" in common, 1/3 of the union
        let sim = similarity("deliver goods", "deliver products");
        assert!(sim > 0.3 && sim < 0.4);
    }

    #[test]
    fn no_overlap() {
        assert_eq!(similarity("pay invoice", "ship products"), 0.0);
    }

    #[test]
    fn empty_fragments() {
        assert_eq!(similarity("", ""), 0.0);
        assert_eq!(similarity("swans", ""), 0.0);
        assert_eq!(similarity("   ", "swans"), 0.0);
    }

    #[test]
    fn repeated_words_count_once() {
        assert_eq!(similarity("data data data", "data"), 1.0);
    }

    #[test]
    fn threshold_is_strict_boundary_for_gates() {
        // 3 shared of 4 total = 0.75, above the same-claim threshold
        assert!(similarity("the world has beginning", "the world has") > SAME_CLAIM_THRESHOLD);
        // 2 shared of 3 total = 0.66, below it
        assert!(similarity("the world", "the world ends") < SAME_CLAIM_THRESHOLD);
    }
}
