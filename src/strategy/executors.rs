//! One executor per [`ResolutionStrategy`].
//!
//! Every executor is a pure function of the antinomy and the read-only
//! configuration. Resolution text quotes both statements verbatim, except for
//! regulative principles, which rephrase them.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::antinomy::{Antinomy, AntinomyResolution, ConditionalApplicability, SideMapping};
use crate::config::ContextPriority;
use crate::taxonomy::ResolutionStrategy;

use super::tables::{
    ANALYSIS_LEVELS, APPLICABILITY_DOMAINS, DIALECTICAL_STEPS, PERSPECTIVES, PRACTICAL_SOLUTIONS,
    PRIORITY_CONTEXTS, SYNTHESES,
};

/// Resolution confidence never leaves this range.
pub const CONFIDENCE_FLOOR: f64 = 0.5;
pub const CONFIDENCE_CEILING: f64 = 0.95;

/// Substitutions that soften an assertion into a guiding maxim.
const REGULATIVE_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("always", "generally"),
    ("never", "rarely"),
    ("must", "should consider"),
    ("cannot", "might not"),
];

static COMPILED_REGULATIVE_SUBSTITUTIONS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    REGULATIVE_SUBSTITUTIONS
        .iter()
        .map(|(word, replacement)| {
            let regex = Regex::new(&format!(r"(?i)\b{}\b", word))
                .expect("regulative substitutions are literal words");
            (regex, *replacement)
        })
        .collect()
});

/// Runs `strategy` on `antinomy`.
pub fn execute(
    strategy: ResolutionStrategy,
    antinomy: &Antinomy,
    contextual_priorities: &BTreeMap<String, ContextPriority>,
) -> AntinomyResolution {
    let draft = match strategy {
        ResolutionStrategy::DomainDistinction => domain_distinction(antinomy),
        ResolutionStrategy::PerspectiveShift => perspective_shift(antinomy),
        ResolutionStrategy::ContextualPrioritization => {
            contextual_prioritization(antinomy, contextual_priorities)
        }
        ResolutionStrategy::Synthesis => synthesis(antinomy),
        ResolutionStrategy::DialecticalProgression => dialectical_progression(antinomy),
        ResolutionStrategy::RegulativePrinciple => regulative_principle(antinomy),
        ResolutionStrategy::PracticalResolution => practical_resolution(antinomy),
        ResolutionStrategy::MultiLevelAnalysis => multi_level_analysis(antinomy),
        ResolutionStrategy::Unresolvable => unresolvable(antinomy),
    };

    AntinomyResolution {
        antinomy: antinomy.clone(),
        strategy,
        explanation: draft.explanation,
        resolution: draft.resolution,
        confidence: strategy
            .base_confidence()
            .clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING),
        domain_mapping: draft.domain_mapping,
        conditional_applicability: draft.conditional_applicability,
        action_guidance: draft.action_guidance,
    }
}

/// The strategy-specific part of a resolution.
struct Draft {
    explanation: String,
    resolution: String,
    domain_mapping: Option<SideMapping>,
    conditional_applicability: Option<ConditionalApplicability>,
    action_guidance: String,
}

impl Draft {
    fn new(
        explanation: impl Into<String>,
        resolution: impl Into<String>,
        action_guidance: impl Into<String>,
    ) -> Self {
        Self {
            explanation: explanation.into(),
            resolution: resolution.into(),
            domain_mapping: None,
            conditional_applicability: None,
            action_guidance: action_guidance.into(),
        }
    }

    fn with_mapping(mut self, (thesis, antithesis): (&str, &str)) -> Self {
        self.domain_mapping = Some(SideMapping {
            thesis: thesis.to_string(),
            antithesis: antithesis.to_string(),
        });
        self
    }
}

fn statements(antinomy: &Antinomy) -> (&str, &str) {
    (
        antinomy.thesis.statement.as_str(),
        antinomy.antithesis.statement.as_str(),
    )
}

fn domain_distinction(antinomy: &Antinomy) -> Draft {
    let (thesis, antithesis) = statements(antinomy);
    let (thesis_domain, antithesis_domain) = *APPLICABILITY_DOMAINS.get(antinomy.antinomy_type);

    Draft::new(
        "The two claims apply to different domains, so both can be valid without contradicting each other.",
        format!(
            "'{}' holds within {}, while '{}' holds within {}.",
            thesis, thesis_domain, antithesis, antithesis_domain
        ),
        format!(
            "Apply the first claim when dealing with {} and the second when dealing with {}.",
            thesis_domain, antithesis_domain
        ),
    )
    .with_mapping((thesis_domain, antithesis_domain))
}

fn perspective_shift(antinomy: &Antinomy) -> Draft {
    let (thesis, antithesis) = statements(antinomy);
    let (thesis_view, antithesis_view) = *PERSPECTIVES.get(antinomy.antinomy_type);

    Draft::new(
        "Each claim is true relative to the standpoint from which it is made.",
        format!(
            "From {}, '{}'; from {}, '{}'.",
            thesis_view, thesis, antithesis_view, antithesis
        ),
        "Identify which standpoint the decision is taken from before applying either claim.",
    )
    .with_mapping((thesis_view, antithesis_view))
}

fn contextual_prioritization(
    antinomy: &Antinomy,
    contextual_priorities: &BTreeMap<String, ContextPriority>,
) -> Draft {
    let (thesis, antithesis) = statements(antinomy);
    let (thesis_contexts, antithesis_contexts) = *PRIORITY_CONTEXTS.get(antinomy.antinomy_type);

    let mut applicability = ConditionalApplicability {
        thesis_contexts: thesis_contexts.iter().map(|c| c.to_string()).collect(),
        antithesis_contexts: antithesis_contexts.iter().map(|c| c.to_string()).collect(),
    };

    let mut resolution = format!(
        "'{}' takes priority in {}; '{}' takes priority in {}.",
        thesis,
        thesis_contexts.join(", "),
        antithesis,
        antithesis_contexts.join(", ")
    );

    let configured = antinomy
        .context
        .as_deref()
        .and_then(|context| contextual_priorities.get_key_value(context));

    if let Some((context, priority)) = configured {
        // Ties favor the thesis
        let (favored, contexts) = if priority.thesis >= priority.antithesis {
            (thesis, &mut applicability.thesis_contexts)
        } else {
            (antithesis, &mut applicability.antithesis_contexts)
        };
        if !contexts.iter().any(|c| c == context) {
            contexts.push(context.clone());
        }
        resolution.push_str(&format!(
            " In {}, '{}' takes priority ({:.2} vs. {:.2}).",
            context,
            favored,
            priority.thesis.max(priority.antithesis),
            priority.thesis.min(priority.antithesis)
        ));
    }

    let mut draft = Draft::new(
        "Both claims are valid, but which one takes priority depends on the context.",
        resolution,
        "Establish the context first, then act on the claim that takes priority there.",
    );
    draft.conditional_applicability = Some(applicability);
    draft
}

fn synthesis(antinomy: &Antinomy) -> Draft {
    let (thesis, antithesis) = statements(antinomy);
    let principle = *SYNTHESES.get(antinomy.antinomy_type);

    Draft::new(
        "The opposition dissolves once both claims are seen as partial expressions of one principle.",
        format!(
            "'{}' and '{}' are reconciled in {}.",
            thesis, antithesis, principle
        ),
        format!("Pursue {}.", principle),
    )
}

fn dialectical_progression(antinomy: &Antinomy) -> Draft {
    let (thesis, antithesis) = statements(antinomy);
    let (higher, question) = *DIALECTICAL_STEPS.get(antinomy.antinomy_type);

    Draft::new(
        "The tension is a stage in an ongoing inquiry rather than a dead end.",
        format!(
            "The opposition between '{}' and '{}' points towards {}. {}",
            thesis, antithesis, higher, question
        ),
        format!("Treat both claims as provisional and investigate: {}", question),
    )
}

/// Rephrases a statement as a guiding maxim.
pub(crate) fn regulative_maxim(statement: &str) -> String {
    let softened = COMPILED_REGULATIVE_SUBSTITUTIONS
        .iter()
        .fold(statement.trim().to_string(), |text, (regex, replacement)| {
            regex.replace_all(&text, *replacement).into_owned()
        });

    let lowered = softened.to_lowercase();
    if lowered.contains("as if") || lowered.contains("guide") {
        return softened;
    }

    let mut chars = softened.chars();
    match chars.next() {
        Some(first) => format!("Act as if {}{}", first.to_lowercase(), chars.as_str()),
        None => "Act as if".to_string(),
    }
}

fn regulative_principle(antinomy: &Antinomy) -> Draft {
    let (thesis, antithesis) = statements(antinomy);
    let thesis_maxim = regulative_maxim(thesis);
    let antithesis_maxim = regulative_maxim(antithesis);

    Draft::new(
        "Neither claim can be settled as a fact; both are kept as principles that guide inquiry and action.",
        format!(
            "As regulative principles: '{}' and '{}'.",
            thesis_maxim, antithesis_maxim
        ),
        format!(
            "Use '{}' and '{}' to direct inquiry without treating either as established.",
            thesis_maxim, antithesis_maxim
        ),
    )
}

fn practical_resolution(antinomy: &Antinomy) -> Draft {
    let (thesis, antithesis) = statements(antinomy);
    let solution = *PRACTICAL_SOLUTIONS.get(antinomy.antinomy_type);

    Draft::new(
        format!(
            "The tension between '{}' and '{}' is settled in practice rather than in theory.",
            thesis, antithesis
        ),
        format!("In practice: {}", solution),
        solution,
    )
}

fn multi_level_analysis(antinomy: &Antinomy) -> Draft {
    let (thesis, antithesis) = statements(antinomy);
    let (thesis_level, antithesis_level) = *ANALYSIS_LEVELS.get(antinomy.antinomy_type);

    Draft::new(
        "The claims describe different levels of analysis and do not compete at the same level.",
        format!(
            "'{}' holds at {}, while '{}' holds at {}.",
            thesis, thesis_level, antithesis, antithesis_level
        ),
        "Name the level of analysis before applying either claim.",
    )
    .with_mapping((thesis_level, antithesis_level))
}

fn unresolvable(antinomy: &Antinomy) -> Draft {
    let (thesis, antithesis) = statements(antinomy);

    Draft::new(
        "No available strategy reconciles these claims.",
        format!("'{}' and '{}' remain in unresolved tension.", thesis, antithesis),
        "Keep both claims in view, decide case by case and document the tradeoff.",
    )
}
