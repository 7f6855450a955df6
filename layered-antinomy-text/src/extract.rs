//! Template-based extraction of statement parts.
//!
//! Subject and predicate extraction walk an ordered list of templates and take
//! the first match; reordering the lists changes which statements are judged to
//! share a subject, so treat any reordering as a behavior change.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::normalize::normalize;

/// Subject templates, tried in order. Capture group 1 is the subject.
const SUBJECT_TEMPLATES: &[&str] = &[
    r"^all (.+?) are\b",
    r"^(?:no|some|every|each) (.+?) (?:are|is)\b",
    r"^the (.+?) is\b",
    r"^(.+?) (?:is|are)\b",
];

/// Predicate templates, tried in order. Capture group 1 is the predicate.
///
/// A leading "not" is skipped so that "are white" and "are not white" share a
/// predicate; polarity is judged separately by the quantifier check.
const PREDICATE_TEMPLATES: &[&str] = &[
    r"^all .+? are (?:not )?(.+)$",
    r"^(?:no|some|every|each) .+? (?:are|is) (?:not )?(.+)$",
    r"^the .+? is (?:not )?(.+)$",
    r"^.+? (?:is|are) (?:not )?(.+)$",
];

/// Meta-phrases wrapping the actual claim ("it is true that ...").
const META_PHRASE: &str =
    r"^it is (?:not )?(?:true|false|necessary|possible|impossible|certain|contingent|likely|the case) that\s*";

/// Modal operators and qualifiers removed from the core proposition.
const MODAL_QUALIFIERS: &[&str] = &[
    "not necessarily",
    "necessarily",
    "possibly",
    "contingently",
    "certainly",
    "definitely",
    "perhaps",
    "probably",
    "necessary",
    "impossible",
    "possible",
    "contingent",
    "cannot",
    "must",
    "may",
    "might",
    "could",
    "can",
    "should",
    "would",
];

/// Words ignored by [`extract_key_terms`] in addition to short tokens.
const STOP_WORDS: &[&str] = &[
    "about", "also", "been", "being", "could", "does", "from", "have", "into", "more", "most",
    "must", "only", "should", "some", "such", "than", "that", "their", "them", "then", "there",
    "these", "they", "this", "those", "very", "were", "what", "when", "where", "which", "will",
    "with", "would",
];

/// Modal or imperative marker followed by the action verb and its object.
const ACTION_TEMPLATE: &str =
    r"\b(?:should|must|shall|will|can|may|ought to|needs? to)\s+(?:not\s+)?(\w[\w'-]*)\s*(.*)$";

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| Regex::new(pattern).expect("extraction templates are valid regexes"))
        .collect()
}

static SUBJECT_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| compile_all(SUBJECT_TEMPLATES));
static PREDICATE_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| compile_all(PREDICATE_TEMPLATES));
static META_PHRASE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(META_PHRASE).expect("meta-phrase pattern is a valid regex"));
static MODAL_QUALIFIER_REGEX: Lazy<Regex> = Lazy::new(|| {
    let alternation = MODAL_QUALIFIERS.join("|");
    Regex::new(&format!(r"\b(?:{})\b", alternation))
        .expect("modal qualifiers are literal words")
});
static ACTION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(ACTION_TEMPLATE).expect("action template is a valid regex"));

/// Returns capture group 1 of the first template that matches.
fn first_capture(templates: &[Regex], text: &str) -> Option<String> {
    templates.iter().find_map(|regex| {
        regex
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    })
}

/// Extracts the grammatical subject of a statement.
///
/// Falls back to the first three words when no template matches.
pub fn extract_subject(statement: &str) -> String {
    let normalized = normalize(statement);
    first_capture(&SUBJECT_REGEXES, &normalized).unwrap_or_else(|| {
        normalized
            .split_whitespace()
            .take(3)
            .collect::<Vec<_>>()
            .join(" ")
    })
}

/// Extracts the predicate of a statement.
///
/// Falls back to every word after the first when no template matches.
pub fn extract_predicate(statement: &str) -> String {
    let normalized = normalize(statement);
    first_capture(&PREDICATE_REGEXES, &normalized).unwrap_or_else(|| {
        normalized
            .split_whitespace()
            .skip(1)
            .collect::<Vec<_>>()
            .join(" ")
    })
}

/// Extracts the claim underneath modal operators and meta-phrases.
///
/// "It is necessary that the world has a beginning" and "The world must have
/// a beginning" both reduce towards "the world has/have a beginning".
pub fn extract_core_proposition(statement: &str) -> String {
    let normalized = normalize(statement);
    let without_meta = META_PHRASE_REGEX.replace(&normalized, "");
    let without_modals = MODAL_QUALIFIER_REGEX.replace_all(&without_meta, "");
    without_modals
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extracts content words from a statement.
///
/// Drops tokens of three characters or fewer and stop words, then removes
/// duplicates while keeping first-occurrence order.
pub fn extract_key_terms(statement: &str) -> Vec<String> {
    let normalized = normalize(statement);
    let mut terms: Vec<String> = Vec::new();

    for word in normalized.unicode_words() {
        if word.chars().count() <= 3 || STOP_WORDS.contains(&word) {
            continue;
        }
        if !terms.iter().any(|existing| existing == word) {
            terms.push(word.to_string());
        }
    }

    terms
}

/// The action named by a statement: its main verb and the verb's object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ActionPhrase {
    /// The action verb ("collect", "maximize").
    pub verb: String,
    /// Everything after the verb ("personal data").
    pub object: String,
}

impl ActionPhrase {
    /// Returns true if neither a verb nor an object was found.
    pub fn is_empty(&self) -> bool {
        self.verb.is_empty() && self.object.is_empty()
    }
}

/// Extracts the action verb and object of a statement.
///
/// A modal or imperative marker ("should", "must", "needs to", ...) is looked
/// for first; the word after it (skipping "not") is the verb. Without a marker
/// the statement is read as an imperative and its first word is the verb.
pub fn extract_action(statement: &str) -> ActionPhrase {
    let normalized = normalize(statement);

    if let Some(caps) = ACTION_REGEX.captures(&normalized) {
        return ActionPhrase {
            verb: caps.get(1).map(|m| m.as_str().to_string()).unwrap_or_default(),
            object: caps
                .get(2)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default(),
        };
    }

    let mut words = normalized.split_whitespace();
    let verb = words.next().unwrap_or_default().to_string();
    let object = words.collect::<Vec<_>>().join(" ");
    ActionPhrase { verb, object }
}
