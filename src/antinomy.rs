//! Detected antinomies and their resolutions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::proposition::Proposition;
use crate::taxonomy::{AntinomyDomain, AntinomyType, ResolutionStrategy};

/// Two propositions in genuine tension, classified by type and domain.
///
/// `thesis` is always the earlier proposition of the input and `antithesis`
/// the later one; the order is positional, not a ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Antinomy {
    #[serde(rename = "type")]
    pub antinomy_type: AntinomyType,
    pub thesis: Proposition,
    pub antithesis: Proposition,
    pub domain: AntinomyDomain,
    /// Description of the contradiction the detector found.
    pub contradiction: String,
    /// Contradiction strength from 0.0 to 1.0
    pub strength: f64,
    /// Situation the antinomy was detected in, used for contextual priorities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl Antinomy {
    pub fn new(
        antinomy_type: AntinomyType,
        thesis: Proposition,
        antithesis: Proposition,
        domain: AntinomyDomain,
        contradiction: impl Into<String>,
        strength: f64,
    ) -> Self {
        Self {
            antinomy_type,
            thesis,
            antithesis,
            domain,
            contradiction: contradiction.into(),
            strength: strength.clamp(0.0, 1.0),
            context: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

/// Where each side of an antinomy applies: a domain, a perspective or a level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideMapping {
    pub thesis: String,
    pub antithesis: String,
}

/// Contexts in which each side of an antinomy takes priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionalApplicability {
    pub thesis_contexts: Vec<String>,
    pub antithesis_contexts: Vec<String>,
}

/// The outcome of applying one strategy to one antinomy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AntinomyResolution {
    pub antinomy: Antinomy,
    pub strategy: ResolutionStrategy,
    /// Why the strategy dissolves the tension.
    pub explanation: String,
    /// The reconciled claim.
    pub resolution: String,
    /// Confidence from 0.5 to 0.95
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_mapping: Option<SideMapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditional_applicability: Option<ConditionalApplicability>,
    /// What to do in light of the resolution.
    pub action_guidance: String,
}

impl fmt::Display for AntinomyResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let antinomy = &self.antinomy;
        writeln!(
            f,
            "[{}] {} (strength {:.2}, {})",
            antinomy.antinomy_type.label(),
            antinomy.contradiction,
            antinomy.strength,
            antinomy.domain
        )?;
        writeln!(
            f,
            "  Thesis: {} ({})",
            antinomy.thesis.statement, antinomy.thesis.source
        )?;
        writeln!(
            f,
            "  Antithesis: {} ({})",
            antinomy.antithesis.statement, antinomy.antithesis.source
        )?;
        writeln!(
            f,
            "  Strategy: {} (confidence {:.2})",
            self.strategy.label(),
            self.confidence
        )?;
        write!(f, "  Resolution: {}", self.resolution)
    }
}
