//! Statement normalization and heuristic negation.

use once_cell::sync::Lazy;
use regex::Regex;

/// Punctuation removed by [`normalize`].
const STRIPPED_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?'];

/// Substitution rules for [`negate`], applied top to bottom.
///
/// Every rule runs over the output of the previous one, so a forward rule can
/// re-flip text an inverse rule just produced ("cannot" -> "can" -> "cannot").
/// Direct-negation detection compares against this exact output; reordering
/// the list changes which statement pairs count as direct negations.
const NEGATION_RULES: &[(&str, &str)] = &[
    // Inverse rules
    ("are not", "are"),
    ("is not", "is"),
    ("cannot", "can"),
    ("should not", "should"),
    ("must not", "must"),
    ("will not", "will"),
    ("no", "all"),
    ("some", "none"),
    ("never", "always"),
    // Forward rules
    ("are", "are not"),
    ("is", "is not"),
    ("can", "cannot"),
    ("should", "should not"),
    ("must", "must not"),
    ("will", "will not"),
    ("all", "no"),
    ("none", "some"),
    ("always", "never"),
];

static COMPILED_NEGATION_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    NEGATION_RULES
        .iter()
        .map(|(pattern, replacement)| {
            let regex = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(pattern)))
                .expect("negation rule patterns are literal words");
            (regex, *replacement)
        })
        .collect()
});

/// Normalizes a statement for comparison.
///
/// Lowercases, strips `.,;:!?` and collapses runs of whitespace into a single
/// space. Leading and trailing whitespace is removed.
pub fn normalize(statement: &str) -> String {
    statement
        .to_lowercase()
        .replace(STRIPPED_PUNCTUATION, "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Flips the polarity of a statement using word substitutions.
///
/// This is a fast heuristic, not a linguistic negation: rules are applied in a
/// single ordered pass and may undo each other. `negate(negate(s))` is not
/// guaranteed to equal `s`, and statements that already contain a negation are
/// frequently returned unchanged.
pub fn negate(statement: &str) -> String {
    COMPILED_NEGATION_RULES
        .iter()
        .fold(statement.to_string(), |text, (regex, replacement)| {
            regex.replace_all(&text, *replacement).into_owned()
        })
}
