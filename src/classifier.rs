//! Type and domain classification for detected antinomies.
//!
//! Type inference tries direct two-clause patterns first and falls back to
//! keyword scoring. Domain inference prefers an explicit domain on either
//! proposition and falls back to keyword scoring.

use regex::Regex;

use crate::proposition::Proposition;
use crate::taxonomy::{AntinomyDomain, AntinomyType};
use crate::utils::best_keyword_match;

/// Direct patterns, tried in order. A type matches when both clauses occur
/// somewhere in the combined text of the two statements.
const TYPE_PATTERNS: &[(AntinomyType, &str, &str)] = &[
    (
        AntinomyType::FiniteVsInfinite,
        r"\b(?:finite|bounded|limited|beginning in time)\b",
        r"\b(?:infinite|unbounded|unlimited|endless|eternal)\b",
    ),
    (
        AntinomyType::AtomicVsContinuous,
        r"\b(?:atomic|atoms?|discrete|indivisible|simple parts)\b",
        r"\b(?:continuous|continuum|divisible)\b",
    ),
    (
        AntinomyType::DeterministicVsRandom,
        r"\b(?:deterministic|determined|predetermined|predictable)\b",
        r"\b(?:random|chance|stochastic|unpredictable)\b",
    ),
    (
        AntinomyType::FreedomVsCausality,
        r"\b(?:free will|freedom|freely|spontaneous)\b",
        r"\b(?:causality|causal|caused|causes|laws of nature)\b",
    ),
    (
        AntinomyType::NecessityVsContingency,
        r"\b(?:necessary being|necessity|necessary)\b",
        r"\b(?:contingent|contingency|accidental)\b",
    ),
    (
        AntinomyType::TeleologyVsMechanism,
        r"\b(?:purpose|purposes|teleolog\w*|goal-directed|designed)\b",
        r"\b(?:mechanism|mechanical|mechanistic|blind)\b",
    ),
    (
        AntinomyType::UtilityVsRights,
        r"\b(?:utility|greatest good|aggregate welfare|overall benefit|consequences)\b",
        r"\b(?:rights?|dignity|inviolable)\b",
    ),
    (
        AntinomyType::IndividualVsCollective,
        r"\b(?:individual|individuals|personal)\b",
        r"\b(?:collective|society|community|common good)\b",
    ),
    (
        AntinomyType::AutonomyVsWelfare,
        r"\b(?:autonomy|self-determination|choose|choice)\b",
        r"\b(?:welfare|well-being|wellbeing|protect\w*|harm)\b",
    ),
    (
        AntinomyType::TransparencyVsPerformance,
        r"\b(?:transparen\w*|explainab\w*|interpretab\w*|auditab\w*)\b",
        r"\b(?:performance|efficien\w*|speed|latency|throughput)\b",
    ),
    (
        AntinomyType::GeneralityVsSpecialization,
        r"\b(?:generality|general-purpose|universal|generic)\b",
        r"\b(?:speciali[sz]\w*|specific|tailored)\b",
    ),
    (
        AntinomyType::RobustnessVsAdaptability,
        r"\b(?:robust\w*|stabilit\w*|stable|reliab\w*)\b",
        r"\b(?:adapt\w*|flexib\w*|evolv\w*)\b",
    ),
];

/// Keyword tables for the scoring fallback, in tie-break order.
const TYPE_KEYWORDS: &[(AntinomyType, &[&str])] = &[
    (
        AntinomyType::FiniteVsInfinite,
        &[
            "finite", "infinite", "limit", "limits", "boundary", "bounded", "beginning",
            "eternal", "endless", "all", "whole", "totality", "universe",
        ],
    ),
    (
        AntinomyType::AtomicVsContinuous,
        &[
            "atom", "atoms", "atomic", "discrete", "continuous", "divisible", "indivisible",
            "parts", "simple", "composite", "particle",
        ],
    ),
    (
        AntinomyType::DeterministicVsRandom,
        &[
            "determined", "deterministic", "random", "chance", "probability", "predictable",
            "law", "laws", "fixed",
        ],
    ),
    (
        AntinomyType::FreedomVsCausality,
        &[
            "free", "freedom", "cause", "causes", "causality", "spontaneous", "agent", "nature",
        ],
    ),
    (
        AntinomyType::NecessityVsContingency,
        &[
            "necessary", "necessity", "contingent", "contingency", "exist", "existence", "being",
        ],
    ),
    (
        AntinomyType::TeleologyVsMechanism,
        &[
            "purpose", "design", "designed", "goal", "mechanism", "mechanical", "function",
            "teleology",
        ],
    ),
    (
        AntinomyType::UtilityVsRights,
        &[
            "utility", "rights", "right", "benefit", "happiness", "consequences", "dignity",
            "outcome",
        ],
    ),
    (
        AntinomyType::IndividualVsCollective,
        &[
            "individual", "collective", "society", "community", "group", "personal", "public",
            "private",
        ],
    ),
    (
        AntinomyType::AutonomyVsWelfare,
        &[
            "autonomy", "consent", "welfare", "well-being", "wellbeing", "harm", "protect",
            "protection", "paternalism", "choice",
        ],
    ),
    (
        AntinomyType::TransparencyVsPerformance,
        &[
            "transparency", "transparent", "explainable", "interpretable", "performance", "speed",
            "efficiency", "latency", "fast",
        ],
    ),
    (
        AntinomyType::GeneralityVsSpecialization,
        &[
            "general", "generality", "generic", "specialized", "specialization", "specific",
            "universal",
        ],
    ),
    (
        AntinomyType::RobustnessVsAdaptability,
        &[
            "robust", "robustness", "stable", "stability", "adaptable", "adaptability",
            "flexible", "flexibility", "change",
        ],
    ),
];

/// Keyword tables for domain inference, in tie-break order.
const DOMAIN_KEYWORDS: &[(AntinomyDomain, &[&str])] = &[
    (
        AntinomyDomain::Epistemology,
        &[
            "know", "knowledge", "belief", "believe", "truth", "true", "false", "evidence",
            "certain", "certainty", "reason", "perception", "experience", "justified", "proof",
        ],
    ),
    (
        AntinomyDomain::Ethics,
        &[
            "moral", "morality", "ethical", "ethics", "right", "rights", "wrong", "duty", "good",
            "bad", "harm", "welfare", "justice", "fair", "fairness", "consent", "dignity",
            "utility", "ought", "virtue",
        ],
    ),
    (
        AntinomyDomain::Metaphysics,
        &[
            "exist", "existence", "world", "universe", "cause", "causality", "free", "freedom",
            "substance", "necessary", "contingent", "infinite", "finite", "time", "space", "god",
            "soul", "matter", "being",
        ],
    ),
    (
        AntinomyDomain::Aesthetics,
        &[
            "beauty", "beautiful", "art", "artistic", "taste", "sublime", "aesthetic", "elegant",
            "elegance", "harmony", "style",
        ],
    ),
    (
        AntinomyDomain::System,
        &[
            "system", "systems", "architecture", "performance", "transparency", "data", "users",
            "software", "design", "module", "latency", "robust", "robustness", "adaptable",
            "adaptability", "efficiency", "scalability", "interface", "algorithm", "api",
        ],
    ),
];

/// Assigns a contradiction type and a subject domain to a proposition pair.
///
/// Patterns are compiled once in [`AntinomyClassifier::new`]; the classifier
/// is read-only afterwards and can be shared across threads.
#[derive(Debug, Clone)]
pub struct AntinomyClassifier {
    type_patterns: Vec<(AntinomyType, Regex, Regex)>,
}

impl Default for AntinomyClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl AntinomyClassifier {
    pub fn new() -> Self {
        let type_patterns = TYPE_PATTERNS
            .iter()
            .map(|(ty, first, second)| {
                (
                    *ty,
                    Regex::new(first).expect("type patterns are valid regexes"),
                    Regex::new(second).expect("type patterns are valid regexes"),
                )
            })
            .collect();

        Self { type_patterns }
    }

    /// Identifies the contradiction type of two statements.
    ///
    /// Returns the first direct pattern whose clauses both appear in the
    /// combined text; otherwise the type with the most keyword hits, or
    /// `Unclassified` when no keyword of any type appears.
    pub fn identify_antinomy_type(&self, a: &str, b: &str) -> AntinomyType {
        let combined = format!("{} {}", a, b).to_lowercase();

        if let Some((ty, _, _)) = self
            .type_patterns
            .iter()
            .find(|(_, first, second)| first.is_match(&combined) && second.is_match(&combined))
        {
            return *ty;
        }

        best_keyword_match(&combined, TYPE_KEYWORDS).unwrap_or(AntinomyType::Unclassified)
    }

    /// Determines the domain of a proposition pair.
    ///
    /// An explicit domain on the thesis wins, then one on the antithesis;
    /// otherwise the domain is inferred from both statements.
    pub fn determine_domain(&self, thesis: &Proposition, antithesis: &Proposition) -> AntinomyDomain {
        thesis
            .domain
            .or(antithesis.domain)
            .unwrap_or_else(|| {
                self.infer_domain(&format!("{} {}", thesis.statement, antithesis.statement))
            })
    }

    /// Infers a domain from text by keyword scoring.
    ///
    /// Defaults to `Epistemology` when no domain keyword appears.
    pub fn infer_domain(&self, text: &str) -> AntinomyDomain {
        best_keyword_match(&text.to_lowercase(), DOMAIN_KEYWORDS)
            .unwrap_or(AntinomyDomain::Epistemology)
    }
}
