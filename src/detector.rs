//! Contradiction detection between proposition pairs.
//!
//! This module provides the [`ContradictionDetector`], which runs an ordered
//! series of checks on two propositions and reports the first that fires:
//!
//! 1. **Direct negation**: one statement is the heuristic negation of the other
//! 2. **Antonym pair**: the statements use opposite terms from a fixed table
//! 3. **Modal contradiction**: same core claim, incompatible modality
//! 4. **Quantifier contradiction**: same subject and predicate, opposed quantifiers
//! 5. **Value conflict**: statements from different sources appeal to opposed
//!    values, or both issue imperatives
//!
//! Checks 3 and 4 are gated on similarity so that statements about unrelated
//! subjects are never reported as modal or quantifier contradictions.
//!
//! # Example
//!
//! ```
//! use layered_antinomy::{ContradictionDetector, Proposition};
//!
//! let detector = ContradictionDetector::new();
//! let check = detector.check_contradiction(
//!     &Proposition::new("The sky is blue", 0.9, "observer_a"),
//!     &Proposition::new("The sky is not blue", 0.9, "observer_b"),
//! );
//! assert!(check.is_contradiction);
//! assert_eq!(check.strength, 1.0);
//! ```

use layered_antinomy_text::{
    extract_core_proposition, extract_predicate, extract_subject, negate, normalize, similarity,
    SAME_CLAIM_THRESHOLD,
};
use regex::Regex;
use tracing::debug;

use crate::antinomy::Antinomy;
use crate::classifier::AntinomyClassifier;
use crate::proposition::Proposition;
use crate::scored::Scored;
use crate::taxonomy::AntinomyType;
use crate::utils::contains_word;

/// Default minimum strength for a contradiction to count as an antinomy.
pub const DEFAULT_ANTINOMY_THRESHOLD: f64 = 0.7;

const DIRECT_NEGATION_STRENGTH: f64 = 1.0;
const ANTONYM_STRENGTH: f64 = 0.85;
const MODAL_STRENGTH: f64 = 0.9;
const QUANTIFIER_STRENGTH: f64 = 0.9;
const VALUE_CONFLICT_STRENGTH: f64 = 0.8;
const CONFLICTING_IMPERATIVES_STRENGTH: f64 = 0.7;

/// Opposed terms. A pair fires when one statement uses the first term and the
/// other uses the second, in either order.
const ANTONYM_PAIRS: &[(&str, &str)] = &[
    ("good", "bad"),
    ("right", "wrong"),
    ("true", "false"),
    ("finite", "infinite"),
    ("discrete", "continuous"),
    ("simple", "composite"),
    ("free", "determined"),
    ("necessary", "contingent"),
    ("possible", "impossible"),
    ("individual", "collective"),
    ("always", "never"),
    ("all", "no"),
    ("permitted", "forbidden"),
    ("mandatory", "optional"),
    ("purpose", "mechanism"),
    ("transparency", "performance"),
    ("generality", "specialization"),
    ("robustness", "adaptability"),
];

const CONTINGENCY: &str = r"\b(?:not necessarily|contingent|contingently|need not)\b";
const NECESSITY: &str = r"\b(?:necessarily|necessary|must|has to|have to)\b";
const IMPOSSIBILITY: &str = r"\b(?:impossible|impossibly|cannot|can not|could not|can't)\b";
const POSSIBILITY: &str = r"\b(?:possible|possibly|may|might|can|could)\b";

/// Value-conflict patterns: (description, inferred type, one side, other side).
const VALUE_CONFLICTS: &[(&str, AntinomyType, &str, &str)] = &[
    (
        "rights vs. utility",
        AntinomyType::UtilityVsRights,
        r"\b(?:rights?|dignity|inviolable)\b",
        r"\b(?:utility|greatest good|overall benefit|maximi[sz]e (?:welfare|happiness|benefit)|consequences)\b",
    ),
    (
        "individual vs. collective",
        AntinomyType::IndividualVsCollective,
        r"\b(?:individual|personal|private)\b",
        r"\b(?:collective|society|public|community|common good)\b",
    ),
    (
        "freedom vs. protection",
        AntinomyType::AutonomyVsWelfare,
        r"\b(?:freedom|liberty|autonomy|choice)\b",
        r"\b(?:protect\w*|safety|security|harm)\b",
    ),
];

const IMPERATIVE_MARKER: &str = r"\b(?:should|must|ought|need|require)";

/// What a check found, before it is scored.
#[derive(Debug, Clone, PartialEq)]
pub struct ContradictionFinding {
    /// Human-readable description of the contradiction.
    pub description: String,
    /// The contradiction type implied by the check itself, if any.
    pub antinomy_type: Option<AntinomyType>,
}

impl ContradictionFinding {
    fn new(description: impl Into<String>, antinomy_type: Option<AntinomyType>) -> Self {
        Self {
            description: description.into(),
            antinomy_type,
        }
    }
}

/// The verdict of [`ContradictionDetector::check_contradiction`].
#[derive(Debug, Clone, PartialEq)]
pub struct ContradictionCheck {
    pub is_contradiction: bool,
    /// Strength from 0.0 to 1.0; 0.0 when no contradiction was found.
    pub strength: f64,
    pub description: String,
    /// Type implied by the check that fired, if it implies one.
    pub antinomy_type: Option<AntinomyType>,
    /// Name of the check that fired.
    pub rule: Option<&'static str>,
}

impl ContradictionCheck {
    fn none(description: impl Into<String>) -> Self {
        Self {
            is_contradiction: false,
            strength: 0.0,
            description: description.into(),
            antinomy_type: None,
            rule: None,
        }
    }
}

impl From<Scored<ContradictionFinding>> for ContradictionCheck {
    fn from(scored: Scored<ContradictionFinding>) -> Self {
        Self {
            is_contradiction: true,
            strength: scored.confidence,
            description: scored.value.description,
            antinomy_type: scored.value.antinomy_type,
            rule: Some(scored.rule),
        }
    }
}

/// Modal operators found in one statement.
#[derive(Debug, Clone, Copy)]
struct ModalProfile {
    necessity: bool,
    possibility: bool,
    impossibility: bool,
    contingency: bool,
}

/// One side has `p` and not `q`, the other `q` and not `p`, in either order.
fn opposed(
    a: &ModalProfile,
    b: &ModalProfile,
    p: fn(&ModalProfile) -> bool,
    q: fn(&ModalProfile) -> bool,
) -> bool {
    (p(a) && !q(a) && q(b) && !p(b)) || (q(a) && !p(a) && p(b) && !q(b))
}

/// Categorical form of a quantified statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Categorical {
    /// "All S are P"
    UniversalAffirmative,
    /// "No S are P", "All S are not P"
    UniversalNegative,
    /// "Some S are P"
    ParticularAffirmative,
    /// "Some S are not P"
    ParticularNegative,
}

/// Quantifier contradictions, tried in order.
const QUANTIFIER_CONTRADICTIONS: &[(&str, Categorical, Categorical)] = &[
    (
        "universal affirmation vs. particular negation",
        Categorical::UniversalAffirmative,
        Categorical::ParticularNegative,
    ),
    (
        "universal affirmation vs. universal negation",
        Categorical::UniversalAffirmative,
        Categorical::UniversalNegative,
    ),
    (
        "particular affirmation vs. universal negation",
        Categorical::ParticularAffirmative,
        Categorical::UniversalNegative,
    ),
];

#[derive(Debug, Clone)]
struct ValueConflictPattern {
    description: &'static str,
    antinomy_type: AntinomyType,
    one_side: Regex,
    other_side: Regex,
}

/// Detects contradictions between propositions and builds antinomies.
///
/// All patterns are compiled once in [`ContradictionDetector::new`]; the
/// detector holds no mutable state and every method is a pure function of its
/// arguments.
#[derive(Debug, Clone)]
pub struct ContradictionDetector {
    /// Minimum strength (inclusive) for a contradiction to become an antinomy
    pub antinomy_threshold: f64,
    classifier: AntinomyClassifier,
    contingency: Regex,
    necessity: Regex,
    impossibility: Regex,
    possibility: Regex,
    universal: Regex,
    universal_negative: Regex,
    particular: Regex,
    negated: Regex,
    value_conflicts: Vec<ValueConflictPattern>,
    imperative: Regex,
}

impl Default for ContradictionDetector {
    fn default() -> Self {
        Self::new()
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("detector patterns are valid regexes")
}

impl ContradictionDetector {
    /// Creates a detector with the default antinomy threshold.
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_ANTINOMY_THRESHOLD)
    }

    /// Creates a detector with a custom antinomy threshold.
    pub fn with_threshold(antinomy_threshold: f64) -> Self {
        let value_conflicts = VALUE_CONFLICTS
            .iter()
            .map(|(description, antinomy_type, one, other)| ValueConflictPattern {
                description: *description,
                antinomy_type: *antinomy_type,
                one_side: compile(one),
                other_side: compile(other),
            })
            .collect();

        Self {
            antinomy_threshold,
            classifier: AntinomyClassifier::new(),
            contingency: compile(CONTINGENCY),
            necessity: compile(NECESSITY),
            impossibility: compile(IMPOSSIBILITY),
            possibility: compile(POSSIBILITY),
            universal: compile(r"^(?:all|every|each)\b"),
            universal_negative: compile(r"^(?:no|none)\b"),
            particular: compile(r"^some\b"),
            negated: compile(r"\bnot\b"),
            value_conflicts,
            imperative: compile(IMPERATIVE_MARKER),
        }
    }

    /// Returns a reference to the type and domain classifier.
    pub fn classifier(&self) -> &AntinomyClassifier {
        &self.classifier
    }

    /// Checks whether two propositions contradict each other.
    ///
    /// Checks run in priority order and the first that fires wins, so a pair
    /// yields at most one verdict. Statements that normalize to the same text
    /// never contradict.
    pub fn check_contradiction(&self, a: &Proposition, b: &Proposition) -> ContradictionCheck {
        if normalize(&a.statement) == normalize(&b.statement) {
            return ContradictionCheck::none("Statements are equivalent");
        }

        self.find_contradiction(a, b)
            .map(ContradictionCheck::from)
            .unwrap_or_else(|| ContradictionCheck::none("No contradiction detected"))
    }

    /// The first check that fires for a pair, or `None` for equivalent or
    /// compatible statements.
    fn find_contradiction(
        &self,
        a: &Proposition,
        b: &Proposition,
    ) -> Option<Scored<ContradictionFinding>> {
        let norm_a = normalize(&a.statement);
        let norm_b = normalize(&b.statement);

        if norm_a == norm_b {
            return None;
        }

        self.check_direct_negation(&norm_a, &norm_b)
            .or_else(|| self.check_antonyms(&norm_a, &norm_b))
            .or_else(|| self.check_modal(&norm_a, &norm_b))
            .or_else(|| self.check_quantifier(&norm_a, &norm_b))
            .or_else(|| self.check_values(a, b, &norm_a, &norm_b))
    }

    fn check_direct_negation(&self, a: &str, b: &str) -> Option<Scored<ContradictionFinding>> {
        if b != negate(a) {
            return None;
        }

        Some(Scored::rule_based(
            ContradictionFinding::new("Direct negation: the second statement negates the first", None),
            DIRECT_NEGATION_STRENGTH,
            "direct_negation",
        ))
    }

    fn check_antonyms(&self, a: &str, b: &str) -> Option<Scored<ContradictionFinding>> {
        ANTONYM_PAIRS.iter().find_map(|(x, y)| {
            let (a_x, a_y) = (contains_word(a, x), contains_word(a, y));
            let (b_x, b_y) = (contains_word(b, x), contains_word(b, y));

            // Both statements using both terms is not an opposition
            if a_x && a_y && b_x && b_y {
                return None;
            }

            let (term_a, term_b) = if a_x && b_y {
                (*x, *y)
            } else if a_y && b_x {
                (*y, *x)
            } else {
                return None;
            };

            Some(Scored::rule_based(
                ContradictionFinding::new(
                    format!("Antonym conflict: '{}' versus '{}'", term_a, term_b),
                    None,
                ),
                ANTONYM_STRENGTH,
                "antonym_pair",
            ))
        })
    }

    fn modal_profile(&self, text: &str) -> ModalProfile {
        let contingency = self.contingency.is_match(text);
        // "not necessarily" must not count as necessity, and "cannot" must not
        // count as possibility.
        let without_contingency = self.contingency.replace_all(text, " ");
        let impossibility = self.impossibility.is_match(text);
        let without_impossibility = self.impossibility.replace_all(&without_contingency, " ");

        ModalProfile {
            necessity: self.necessity.is_match(&without_contingency),
            possibility: self.possibility.is_match(&without_impossibility),
            impossibility,
            contingency,
        }
    }

    fn check_modal(&self, a: &str, b: &str) -> Option<Scored<ContradictionFinding>> {
        let core_similarity =
            similarity(&extract_core_proposition(a), &extract_core_proposition(b));
        if core_similarity <= SAME_CLAIM_THRESHOLD {
            return None;
        }

        let pa = self.modal_profile(a);
        let pb = self.modal_profile(b);

        let (kind, antinomy_type) = if opposed(&pa, &pb, |m| m.necessity, |m| m.impossibility) {
            ("necessity vs. impossibility", None)
        } else if opposed(&pa, &pb, |m| m.possibility, |m| m.impossibility) {
            ("possibility vs. impossibility", None)
        } else if opposed(&pa, &pb, |m| m.contingency, |m| m.necessity) {
            (
                "contingency vs. necessity",
                Some(AntinomyType::NecessityVsContingency),
            )
        } else {
            return None;
        };

        Some(Scored::rule_based(
            ContradictionFinding::new(format!("Modal contradiction ({})", kind), antinomy_type),
            MODAL_STRENGTH,
            "modal",
        ))
    }

    fn categorical(&self, text: &str) -> Option<Categorical> {
        let negated = self.negated.is_match(text);

        if self.universal_negative.is_match(text) {
            Some(Categorical::UniversalNegative)
        } else if self.universal.is_match(text) {
            Some(if negated {
                Categorical::UniversalNegative
            } else {
                Categorical::UniversalAffirmative
            })
        } else if self.particular.is_match(text) {
            Some(if negated {
                Categorical::ParticularNegative
            } else {
                Categorical::ParticularAffirmative
            })
        } else {
            None
        }
    }

    fn check_quantifier(&self, a: &str, b: &str) -> Option<Scored<ContradictionFinding>> {
        if similarity(&extract_subject(a), &extract_subject(b)) <= SAME_CLAIM_THRESHOLD {
            return None;
        }
        if similarity(&extract_predicate(a), &extract_predicate(b)) <= SAME_CLAIM_THRESHOLD {
            return None;
        }

        let form_a = self.categorical(a)?;
        let form_b = self.categorical(b)?;

        let (kind, _, _) = QUANTIFIER_CONTRADICTIONS.iter().find(|(_, x, y)| {
            (form_a == *x && form_b == *y) || (form_a == *y && form_b == *x)
        })?;

        Some(Scored::rule_based(
            ContradictionFinding::new(format!("Quantifier contradiction ({})", kind), None),
            QUANTIFIER_STRENGTH,
            "quantifier",
        ))
    }

    fn check_values(
        &self,
        a: &Proposition,
        b: &Proposition,
        norm_a: &str,
        norm_b: &str,
    ) -> Option<Scored<ContradictionFinding>> {
        if a.source == b.source {
            return None;
        }

        let conflict = self.value_conflicts.iter().find(|pattern| {
            (pattern.one_side.is_match(norm_a) && pattern.other_side.is_match(norm_b))
                || (pattern.other_side.is_match(norm_a) && pattern.one_side.is_match(norm_b))
        });

        if let Some(pattern) = conflict {
            return Some(Scored::rule_based(
                ContradictionFinding::new(
                    format!("Value conflict ({})", pattern.description),
                    Some(pattern.antinomy_type),
                ),
                VALUE_CONFLICT_STRENGTH,
                "value_conflict",
            ));
        }

        if self.imperative.is_match(norm_a) && self.imperative.is_match(norm_b) {
            return Some(Scored::rule_based(
                ContradictionFinding::new(
                    format!(
                        "Conflicting imperatives from different sources ({} vs. {})",
                        a.source, b.source
                    ),
                    None,
                ),
                CONFLICTING_IMPERATIVES_STRENGTH,
                "conflicting_imperatives",
            ));
        }

        None
    }

    /// Detects every antinomy among a set of propositions.
    ///
    /// Each unordered pair `(i, j)` with `i < j` is checked exactly once; the
    /// earlier proposition becomes the thesis. Pairs whose strength reaches
    /// the threshold (inclusive) become antinomies, in input-pair order. A
    /// proposition may take part in several antinomies.
    pub fn detect_antinomies(&self, propositions: &[Proposition]) -> Vec<Antinomy> {
        let mut antinomies = Vec::new();

        for i in 0..propositions.len() {
            for j in (i + 1)..propositions.len() {
                let thesis = &propositions[i];
                let antithesis = &propositions[j];

                let finding = match self.find_contradiction(thesis, antithesis) {
                    Some(finding) if finding.meets(self.antinomy_threshold) => finding,
                    _ => continue,
                };

                let antinomy_type = finding.value.antinomy_type.unwrap_or_else(|| {
                    self.classifier
                        .identify_antinomy_type(&thesis.statement, &antithesis.statement)
                });
                let domain = self.classifier.determine_domain(thesis, antithesis);

                debug!(
                    thesis = i,
                    antithesis = j,
                    strength = finding.confidence,
                    rule = finding.rule,
                    antinomy_type = %antinomy_type,
                    domain = %domain,
                    "antinomy detected"
                );

                antinomies.push(Antinomy::new(
                    antinomy_type,
                    thesis.clone(),
                    antithesis.clone(),
                    domain,
                    finding.value.description,
                    finding.confidence,
                ));
            }
        }

        antinomies
    }

    /// Like [`detect_antinomies`](Self::detect_antinomies), tagging every
    /// antinomy with the situation it was detected in.
    pub fn detect_antinomies_in_context(
        &self,
        propositions: &[Proposition],
        context: &str,
    ) -> Vec<Antinomy> {
        self.detect_antinomies(propositions)
            .into_iter()
            .map(|antinomy| antinomy.with_context(context))
            .collect()
    }
}
