//! Closed taxonomies: contradiction types, subject domains and strategies.
//!
//! Each enum carries a stable snake-case tag (used for serialization, display
//! and strict parsing) and an `ALL` array so lookup tables keyed by variant can
//! be checked for exhaustiveness in tests.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AntinomyError;

/// The shape of a contradiction between two propositions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AntinomyType {
    /// A bounded whole versus an unbounded one.
    FiniteVsInfinite,
    /// Indivisible parts versus endless divisibility.
    AtomicVsContinuous,
    /// Lawful determination versus chance.
    DeterministicVsRandom,
    /// Spontaneous agency versus natural causation.
    FreedomVsCausality,
    /// A necessary being or truth versus contingency.
    NecessityVsContingency,
    /// Purposive explanation versus mechanical explanation.
    TeleologyVsMechanism,
    /// Aggregate benefit versus individual rights.
    UtilityVsRights,
    /// The individual versus the collective.
    IndividualVsCollective,
    /// Self-determination versus protection of well-being.
    AutonomyVsWelfare,
    /// Inspectability versus speed or efficiency.
    TransparencyVsPerformance,
    /// General-purpose design versus specialized design.
    GeneralityVsSpecialization,
    /// Stability versus flexibility.
    RobustnessVsAdaptability,
    /// No recognizable shape.
    Unclassified,
}

/// Conceptual grouping of [`AntinomyType`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AntinomyFamily {
    Mathematical,
    Dynamical,
    Practical,
    Architectural,
    Unclassified,
}

impl AntinomyType {
    /// Every variant, classified types first and `Unclassified` last.
    pub const ALL: [AntinomyType; 13] = [
        AntinomyType::FiniteVsInfinite,
        AntinomyType::AtomicVsContinuous,
        AntinomyType::DeterministicVsRandom,
        AntinomyType::FreedomVsCausality,
        AntinomyType::NecessityVsContingency,
        AntinomyType::TeleologyVsMechanism,
        AntinomyType::UtilityVsRights,
        AntinomyType::IndividualVsCollective,
        AntinomyType::AutonomyVsWelfare,
        AntinomyType::TransparencyVsPerformance,
        AntinomyType::GeneralityVsSpecialization,
        AntinomyType::RobustnessVsAdaptability,
        AntinomyType::Unclassified,
    ];

    /// Stable snake-case tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            AntinomyType::FiniteVsInfinite => "finite_vs_infinite",
            AntinomyType::AtomicVsContinuous => "atomic_vs_continuous",
            AntinomyType::DeterministicVsRandom => "deterministic_vs_random",
            AntinomyType::FreedomVsCausality => "freedom_vs_causality",
            AntinomyType::NecessityVsContingency => "necessity_vs_contingency",
            AntinomyType::TeleologyVsMechanism => "teleology_vs_mechanism",
            AntinomyType::UtilityVsRights => "utility_vs_rights",
            AntinomyType::IndividualVsCollective => "individual_vs_collective",
            AntinomyType::AutonomyVsWelfare => "autonomy_vs_welfare",
            AntinomyType::TransparencyVsPerformance => "transparency_vs_performance",
            AntinomyType::GeneralityVsSpecialization => "generality_vs_specialization",
            AntinomyType::RobustnessVsAdaptability => "robustness_vs_adaptability",
            AntinomyType::Unclassified => "unclassified",
        }
    }

    /// Human-readable wording used in narratives.
    pub fn label(&self) -> &'static str {
        match self {
            AntinomyType::FiniteVsInfinite => "finite vs. infinite",
            AntinomyType::AtomicVsContinuous => "atomic vs. continuous",
            AntinomyType::DeterministicVsRandom => "deterministic vs. random",
            AntinomyType::FreedomVsCausality => "freedom vs. causality",
            AntinomyType::NecessityVsContingency => "necessity vs. contingency",
            AntinomyType::TeleologyVsMechanism => "teleology vs. mechanism",
            AntinomyType::UtilityVsRights => "utility vs. rights",
            AntinomyType::IndividualVsCollective => "individual vs. collective",
            AntinomyType::AutonomyVsWelfare => "autonomy vs. welfare",
            AntinomyType::TransparencyVsPerformance => "transparency vs. performance",
            AntinomyType::GeneralityVsSpecialization => "generality vs. specialization",
            AntinomyType::RobustnessVsAdaptability => "robustness vs. adaptability",
            AntinomyType::Unclassified => "unclassified",
        }
    }

    pub fn family(&self) -> AntinomyFamily {
        match self {
            AntinomyType::FiniteVsInfinite
            | AntinomyType::AtomicVsContinuous
            | AntinomyType::DeterministicVsRandom => AntinomyFamily::Mathematical,
            AntinomyType::FreedomVsCausality
            | AntinomyType::NecessityVsContingency
            | AntinomyType::TeleologyVsMechanism => AntinomyFamily::Dynamical,
            AntinomyType::UtilityVsRights
            | AntinomyType::IndividualVsCollective
            | AntinomyType::AutonomyVsWelfare => AntinomyFamily::Practical,
            AntinomyType::TransparencyVsPerformance
            | AntinomyType::GeneralityVsSpecialization
            | AntinomyType::RobustnessVsAdaptability => AntinomyFamily::Architectural,
            AntinomyType::Unclassified => AntinomyFamily::Unclassified,
        }
    }
}

impl fmt::Display for AntinomyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AntinomyType {
    type Err = AntinomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AntinomyType::ALL
            .iter()
            .copied()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| AntinomyError::UnknownType(s.to_string()))
    }
}

/// The subject-matter category an antinomy belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AntinomyDomain {
    Epistemology,
    Ethics,
    Metaphysics,
    Aesthetics,
    System,
}

impl AntinomyDomain {
    /// Every variant, in keyword-scoring tie-break order.
    pub const ALL: [AntinomyDomain; 5] = [
        AntinomyDomain::Epistemology,
        AntinomyDomain::Ethics,
        AntinomyDomain::Metaphysics,
        AntinomyDomain::Aesthetics,
        AntinomyDomain::System,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AntinomyDomain::Epistemology => "epistemology",
            AntinomyDomain::Ethics => "ethics",
            AntinomyDomain::Metaphysics => "metaphysics",
            AntinomyDomain::Aesthetics => "aesthetics",
            AntinomyDomain::System => "system",
        }
    }
}

impl fmt::Display for AntinomyDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AntinomyDomain {
    type Err = AntinomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AntinomyDomain::ALL
            .iter()
            .copied()
            .find(|domain| domain.as_str() == s)
            .ok_or_else(|| AntinomyError::UnknownDomain(s.to_string()))
    }
}

/// One of the fixed approaches to reconciling an antinomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStrategy {
    /// Each claim holds in a different domain of applicability.
    DomainDistinction,
    /// Each claim is valid from a different standpoint.
    PerspectiveShift,
    /// Each claim takes priority in different contexts.
    ContextualPrioritization,
    /// Both claims are integrated in a higher principle.
    Synthesis,
    /// The opposition is a stage that points to a further question.
    DialecticalProgression,
    /// Both claims are kept as guiding ideals rather than facts.
    RegulativePrinciple,
    /// A concrete engineering or policy compromise.
    PracticalResolution,
    /// Each claim is true at a different level of analysis.
    MultiLevelAnalysis,
    /// No principled reconciliation is available.
    Unresolvable,
}

impl ResolutionStrategy {
    pub const ALL: [ResolutionStrategy; 9] = [
        ResolutionStrategy::DomainDistinction,
        ResolutionStrategy::PerspectiveShift,
        ResolutionStrategy::ContextualPrioritization,
        ResolutionStrategy::Synthesis,
        ResolutionStrategy::DialecticalProgression,
        ResolutionStrategy::RegulativePrinciple,
        ResolutionStrategy::PracticalResolution,
        ResolutionStrategy::MultiLevelAnalysis,
        ResolutionStrategy::Unresolvable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionStrategy::DomainDistinction => "domain_distinction",
            ResolutionStrategy::PerspectiveShift => "perspective_shift",
            ResolutionStrategy::ContextualPrioritization => "contextual_prioritization",
            ResolutionStrategy::Synthesis => "synthesis",
            ResolutionStrategy::DialecticalProgression => "dialectical_progression",
            ResolutionStrategy::RegulativePrinciple => "regulative_principle",
            ResolutionStrategy::PracticalResolution => "practical_resolution",
            ResolutionStrategy::MultiLevelAnalysis => "multi_level_analysis",
            ResolutionStrategy::Unresolvable => "unresolvable",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResolutionStrategy::DomainDistinction => "domain distinction",
            ResolutionStrategy::PerspectiveShift => "perspective shift",
            ResolutionStrategy::ContextualPrioritization => "contextual prioritization",
            ResolutionStrategy::Synthesis => "synthesis",
            ResolutionStrategy::DialecticalProgression => "dialectical progression",
            ResolutionStrategy::RegulativePrinciple => "regulative principle",
            ResolutionStrategy::PracticalResolution => "practical resolution",
            ResolutionStrategy::MultiLevelAnalysis => "multi-level analysis",
            ResolutionStrategy::Unresolvable => "unresolvable",
        }
    }

    /// Fixed confidence assigned to every resolution produced by this strategy.
    ///
    /// Confidence is a property of the strategy, not of the evidence.
    pub fn base_confidence(&self) -> f64 {
        match self {
            ResolutionStrategy::DomainDistinction => 0.8,
            ResolutionStrategy::PerspectiveShift => 0.75,
            ResolutionStrategy::ContextualPrioritization => 0.7,
            ResolutionStrategy::Synthesis => 0.65,
            ResolutionStrategy::DialecticalProgression => 0.6,
            ResolutionStrategy::RegulativePrinciple => 0.7,
            ResolutionStrategy::PracticalResolution => 0.75,
            ResolutionStrategy::MultiLevelAnalysis => 0.8,
            ResolutionStrategy::Unresolvable => 0.5,
        }
    }

    /// Parses a strategy name in snake-case or kebab-case ("domain-distinction").
    pub fn from_name(name: &str) -> Result<ResolutionStrategy, AntinomyError> {
        name.trim().replace('-', "_").parse()
    }

    /// Like [`from_name`](Self::from_name), mapping anything unknown to `Unresolvable`.
    pub fn from_name_lenient(name: &str) -> ResolutionStrategy {
        Self::from_name(name).unwrap_or(ResolutionStrategy::Unresolvable)
    }
}

impl fmt::Display for ResolutionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResolutionStrategy {
    type Err = AntinomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResolutionStrategy::ALL
            .iter()
            .copied()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| AntinomyError::UnknownStrategy(s.to_string()))
    }
}
