//! The aggregation facade: detection, resolution and the entry points built on them.

use std::collections::BTreeMap;

use layered_antinomy_text::extract_action;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::antinomy::{Antinomy, AntinomyResolution};
use crate::config::EngineConfig;
use crate::detector::{ContradictionCheck, ContradictionDetector};
use crate::error::AntinomyResult;
use crate::proposition::{Action, Proposition};
use crate::strategy::{executors, StrategySelector};
use crate::taxonomy::ResolutionStrategy;

/// Explanation returned when a proposition set contains no antinomy.
pub const NO_CONTRADICTIONS: &str = "No contradictions detected among the propositions.";

/// Source tag of propositions synthesized from resolutions.
pub const RESOLUTION_SOURCE: &str = "antinomy_resolution";

/// Source prefix of the propositions built from design goals.
pub const ARCHITECTURAL_GOAL_SOURCE: &str = "architectural_goal";

/// Judges an action from one ethical or organizational standpoint.
pub trait ValueSystem {
    /// Name used as the source of every proposition this system produces.
    fn name(&self) -> &str;

    /// What this value system holds about the action.
    fn evaluate(&self, action: &Action) -> Proposition;
}

/// A [`ValueSystem`] backed by a closure.
pub struct FnValueSystem<F> {
    name: String,
    evaluate: F,
}

impl<F> FnValueSystem<F>
where
    F: Fn(&Action) -> Proposition,
{
    pub fn new(name: impl Into<String>, evaluate: F) -> Self {
        Self {
            name: name.into(),
            evaluate,
        }
    }
}

impl<F> ValueSystem for FnValueSystem<F>
where
    F: Fn(&Action) -> Proposition,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, action: &Action) -> Proposition {
        (self.evaluate)(action)
    }
}

/// Output of [`AntinomyEngine::resolve_contradictions`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContradictionResolution {
    /// The input propositions followed by one synthesized proposition per resolution.
    pub resolved_propositions: Vec<Proposition>,
    pub resolutions: Vec<AntinomyResolution>,
    /// Narrative covering every antinomy and its resolution.
    pub explanation: String,
}

/// Output of [`AntinomyEngine::manage_architectural_antinomies`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchitecturalBalance {
    /// Goal priorities after blending, each in `[0, 1]`.
    pub balanced_principles: BTreeMap<String, f64>,
    /// One entry per resolved tension between two goals.
    pub tradeoffs: Vec<String>,
}

/// Output of [`AntinomyEngine::evaluate_action_antinomies`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionEvaluation {
    pub antinomies: Vec<Antinomy>,
    pub resolutions: Vec<AntinomyResolution>,
    pub recommendation: String,
    /// Mean resolution confidence; 1.0 when there is nothing to resolve.
    pub confidence: f64,
}

/// Detects antinomies in proposition sets and resolves them.
///
/// The engine is immutable after construction; every method is a pure
/// function of its arguments and the configuration.
///
/// # Example
///
/// ```
/// use layered_antinomy::{AntinomyEngine, Proposition, ResolutionStrategy};
///
/// let engine = AntinomyEngine::new();
/// let result = engine.resolve_contradictions(&[
///     Proposition::new("All users must consent before data collection", 0.9, "privacy_policy"),
///     Proposition::new("No consent is required for essential data collection", 0.8, "legal_team"),
/// ]);
///
/// assert_eq!(result.resolutions.len(), 1);
/// assert_eq!(result.resolutions[0].strategy, ResolutionStrategy::DomainDistinction);
/// assert_eq!(result.resolved_propositions.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct AntinomyEngine {
    config: EngineConfig,
    detector: ContradictionDetector,
    selector: StrategySelector,
}

impl Default for AntinomyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AntinomyEngine {
    /// Creates an engine with the default configuration.
    pub fn new() -> Self {
        Self::build(EngineConfig::default())
    }

    /// Creates an engine with a validated configuration.
    pub fn with_config(config: EngineConfig) -> AntinomyResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: EngineConfig) -> Self {
        Self {
            detector: ContradictionDetector::with_threshold(config.antinomy_threshold),
            selector: StrategySelector::from_config(&config),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn detector(&self) -> &ContradictionDetector {
        &self.detector
    }

    /// Checks a single proposition pair.
    pub fn check_contradiction(&self, a: &Proposition, b: &Proposition) -> ContradictionCheck {
        self.detector.check_contradiction(a, b)
    }

    /// Detects every antinomy among `propositions`, in input-pair order.
    pub fn detect_antinomies(&self, propositions: &[Proposition]) -> Vec<Antinomy> {
        self.detector.detect_antinomies(propositions)
    }

    /// Detects antinomies and tags each with `context`, so configured
    /// contextual priorities apply when they are resolved.
    pub fn detect_antinomies_in_context(
        &self,
        propositions: &[Proposition],
        context: &str,
    ) -> Vec<Antinomy> {
        self.detector
            .detect_antinomies_in_context(propositions, context)
    }

    /// Resolves one antinomy, using `preferred` when given.
    pub fn resolve_antinomy(
        &self,
        antinomy: &Antinomy,
        preferred: Option<ResolutionStrategy>,
    ) -> AntinomyResolution {
        let (strategy, tier) = self.selector.select(antinomy, preferred);
        debug!(
            strategy = %strategy,
            tier = ?tier,
            antinomy_type = %antinomy.antinomy_type,
            domain = %antinomy.domain,
            "strategy selected"
        );

        let resolution = executors::execute(strategy, antinomy, &self.config.contextual_priorities);
        debug!(
            strategy = %strategy,
            confidence = resolution.confidence,
            "antinomy resolved"
        );
        resolution
    }

    /// Resolves one antinomy with a strategy given by name.
    ///
    /// Names that match no strategy resolve as `unresolvable`.
    pub fn resolve_antinomy_by_name(&self, antinomy: &Antinomy, name: &str) -> AntinomyResolution {
        let strategy = ResolutionStrategy::from_name(name).unwrap_or_else(|err| {
            warn!(error = %err, "falling back to the unresolvable strategy");
            ResolutionStrategy::Unresolvable
        });
        self.resolve_antinomy(antinomy, Some(strategy))
    }

    /// Resolves each antinomy with its selected strategy, preserving order.
    pub fn resolve_antinomies(&self, antinomies: &[Antinomy]) -> Vec<AntinomyResolution> {
        antinomies
            .iter()
            .map(|antinomy| self.resolve_antinomy(antinomy, None))
            .collect()
    }

    /// Detects and resolves every antinomy, appending one synthesized
    /// proposition per resolution to a copy of the input.
    pub fn resolve_contradictions(&self, propositions: &[Proposition]) -> ContradictionResolution {
        let antinomies = self.detect_antinomies(propositions);
        info!(
            propositions = propositions.len(),
            antinomies = antinomies.len(),
            "resolving contradictions"
        );

        if antinomies.is_empty() {
            return ContradictionResolution {
                resolved_propositions: propositions.to_vec(),
                resolutions: Vec::new(),
                explanation: NO_CONTRADICTIONS.to_string(),
            };
        }

        let resolutions = self.resolve_antinomies(&antinomies);

        let mut resolved_propositions = propositions.to_vec();
        resolved_propositions.extend(resolutions.iter().map(|resolution| {
            Proposition::new(
                resolution.resolution.clone(),
                resolution.confidence,
                RESOLUTION_SOURCE,
            )
            .with_metadata("thesis", resolution.antinomy.thesis.statement.clone())
            .with_metadata("antithesis", resolution.antinomy.antithesis.statement.clone())
            .with_metadata("strategy", resolution.strategy.as_str())
        }));

        ContradictionResolution {
            explanation: narrative(&resolutions),
            resolved_propositions,
            resolutions,
        }
    }

    /// Balances design goals that pull against each other.
    ///
    /// Each goal becomes the proposition "Maximize <goal>" with its priority
    /// as confidence. Every detected tension rewrites the two goals'
    /// priorities according to the strategy that resolved it.
    pub fn manage_architectural_antinomies(
        &self,
        goal_priorities: &BTreeMap<String, f64>,
    ) -> ArchitecturalBalance {
        let mut balanced_principles: BTreeMap<String, f64> = goal_priorities
            .iter()
            .map(|(goal, priority)| (goal.clone(), unit_priority(*priority)))
            .collect();

        let propositions: Vec<Proposition> = balanced_principles
            .iter()
            .map(|(goal, priority)| {
                Proposition::new(
                    format!("Maximize {}", goal),
                    *priority,
                    format!("{}:{}", ARCHITECTURAL_GOAL_SOURCE, goal),
                )
            })
            .collect();

        let antinomies = self.detect_antinomies(&propositions);
        info!(
            goals = goal_priorities.len(),
            antinomies = antinomies.len(),
            "balancing architectural goals"
        );

        let mut tradeoffs = Vec::new();

        for resolution in self.resolve_antinomies(&antinomies) {
            let goals = goal_of(&resolution.antinomy.thesis)
                .zip(goal_of(&resolution.antinomy.antithesis))
                .filter(|(thesis, antithesis)| {
                    balanced_principles.contains_key(*thesis)
                        && balanced_principles.contains_key(*antithesis)
                });

            if let Some((thesis_goal, antithesis_goal)) = goals {
                let current = (
                    balanced_principles[thesis_goal],
                    balanced_principles[antithesis_goal],
                );
                if let Some((thesis_priority, antithesis_priority)) =
                    blend_priorities(resolution.strategy, current)
                {
                    balanced_principles.insert(thesis_goal.to_string(), thesis_priority);
                    balanced_principles.insert(antithesis_goal.to_string(), antithesis_priority);
                }

                tradeoffs.push(format!(
                    "{} vs. {} ({}): {}",
                    thesis_goal,
                    antithesis_goal,
                    resolution.strategy.label(),
                    resolution.explanation
                ));
            } else {
                tradeoffs.push(resolution.explanation.clone());
            }
        }

        ArchitecturalBalance {
            balanced_principles,
            tradeoffs,
        }
    }

    /// Evaluates an action against several value systems and resolves the
    /// antinomies between their verdicts.
    pub fn evaluate_action_antinomies(
        &self,
        action: &Action,
        value_systems: &[&dyn ValueSystem],
    ) -> ActionEvaluation {
        let propositions: Vec<Proposition> = value_systems
            .iter()
            .map(|system| {
                let mut proposition = system.evaluate(action);
                proposition.source = system.name().to_string();
                proposition
            })
            .collect();

        let antinomies = match &action.context {
            Some(context) => self.detect_antinomies_in_context(&propositions, context),
            None => self.detect_antinomies(&propositions),
        };
        info!(
            value_systems = value_systems.len(),
            antinomies = antinomies.len(),
            "evaluating action"
        );

        let phrase = extract_action(&action.description);
        let action_name = format!("{} {}", phrase.verb, phrase.object)
            .trim()
            .to_string();

        if antinomies.is_empty() {
            return ActionEvaluation {
                antinomies,
                resolutions: Vec::new(),
                recommendation: format!(
                    "No antinomies found: '{}' is unproblematic across all value systems.",
                    action_name
                ),
                confidence: 1.0,
            };
        }

        let resolutions = self.resolve_antinomies(&antinomies);
        let guidance: Vec<&str> = resolutions
            .iter()
            .map(|resolution| resolution.action_guidance.as_str())
            .collect();
        let confidence = resolutions
            .iter()
            .map(|resolution| resolution.confidence)
            .sum::<f64>()
            / resolutions.len() as f64;

        ActionEvaluation {
            recommendation: format!(
                "To {} despite {} {}: {}",
                action_name,
                resolutions.len(),
                if resolutions.len() == 1 {
                    "antinomy"
                } else {
                    "antinomies"
                },
                guidance.join(" ")
            ),
            antinomies,
            resolutions,
            confidence,
        }
    }
}

/// The goal key a "Maximize <goal>" proposition was built from, read back
/// from its `architectural_goal:<goal>` source.
fn goal_of(proposition: &Proposition) -> Option<&str> {
    proposition
        .source
        .strip_prefix(ARCHITECTURAL_GOAL_SOURCE)?
        .strip_prefix(':')
}

/// Goal priority in `[0, 1]`; non-finite priorities count as 0.
fn unit_priority(priority: f64) -> f64 {
    if priority.is_finite() {
        priority.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// New priorities for two goals in tension, or `None` when the strategy
/// leaves them untouched.
fn blend_priorities(
    strategy: ResolutionStrategy,
    (thesis, antithesis): (f64, f64),
) -> Option<(f64, f64)> {
    let average = (thesis + antithesis) / 2.0;
    let blended = match strategy {
        ResolutionStrategy::Synthesis => (average * 0.95, average * 0.95),
        ResolutionStrategy::PracticalResolution => (
            (0.7 * thesis + 0.3 * average) * 0.95,
            (0.7 * antithesis + 0.3 * average) * 0.95,
        ),
        ResolutionStrategy::DomainDistinction => (thesis * 0.9, antithesis * 0.9),
        ResolutionStrategy::ContextualPrioritization => (thesis * 0.85, antithesis * 0.85),
        _ => return None,
    };
    Some((blended.0.clamp(0.0, 1.0), blended.1.clamp(0.0, 1.0)))
}

fn narrative(resolutions: &[AntinomyResolution]) -> String {
    let header = match resolutions.len() {
        1 => "Detected 1 antinomy.".to_string(),
        n => format!("Detected {} antinomies.", n),
    };

    let blocks: Vec<String> = resolutions
        .iter()
        .enumerate()
        .map(|(i, resolution)| format!("{}. {}", i + 1, resolution))
        .collect();

    format!("{}\n\n{}", header, blocks.join("\n\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::AntinomyDomain;
    use crate::AntinomyType;

    #[test]
    fn with_config_validates() {
        assert!(AntinomyEngine::with_config(EngineConfig::default().with_threshold(2.0)).is_err());
        let engine =
            AntinomyEngine::with_config(EngineConfig::default().with_threshold(0.9)).unwrap();
        assert_eq!(engine.detector().antinomy_threshold, 0.9);
    }

    #[test]
    fn resolve_by_unknown_name_is_unresolvable() {
        let engine = AntinomyEngine::new();
        let antinomy = Antinomy::new(
            AntinomyType::UtilityVsRights,
            Proposition::new("Maximize overall utility", 0.9, "a"),
            Proposition::new("Individual rights are inviolable", 0.9, "b"),
            AntinomyDomain::Ethics,
            "test",
            0.8,
        );

        let resolution = engine.resolve_antinomy_by_name(&antinomy, "split-the-difference");
        assert_eq!(resolution.strategy, ResolutionStrategy::Unresolvable);
        assert_eq!(resolution.confidence, 0.5);

        let resolution = engine.resolve_antinomy_by_name(&antinomy, "perspective-shift");
        assert_eq!(resolution.strategy, ResolutionStrategy::PerspectiveShift);
    }

    #[test]
    fn blend_rules() {
        let (a, b) = blend_priorities(ResolutionStrategy::Synthesis, (0.8, 0.4)).unwrap();
        assert!((a - 0.57).abs() < 1e-9 && (b - 0.57).abs() < 1e-9);

        let (a, b) = blend_priorities(ResolutionStrategy::PracticalResolution, (0.8, 0.4)).unwrap();
        assert!((a - (0.56 + 0.18) * 0.95).abs() < 1e-9);
        assert!((b - (0.28 + 0.18) * 0.95).abs() < 1e-9);

        let (a, _) = blend_priorities(ResolutionStrategy::DomainDistinction, (0.8, 0.4)).unwrap();
        assert!((a - 0.72).abs() < 1e-9);

        let (_, b) =
            blend_priorities(ResolutionStrategy::ContextualPrioritization, (0.8, 0.4)).unwrap();
        assert!((b - 0.34).abs() < 1e-9);

        assert!(blend_priorities(ResolutionStrategy::RegulativePrinciple, (0.8, 0.4)).is_none());
    }

    #[test]
    fn goal_lookup_reads_source() {
        let proposition =
            Proposition::new("Maximize Transparency", 0.9, "architectural_goal:Transparency");
        assert_eq!(goal_of(&proposition), Some("Transparency"));

        let proposition = Proposition::new("Maximize Transparency", 0.9, "legal_team");
        assert_eq!(goal_of(&proposition), None);
    }

    #[test]
    fn priorities_are_numeric() {
        assert_eq!(unit_priority(f64::NAN), 0.0);
        assert_eq!(unit_priority(f64::INFINITY), 0.0);
        assert_eq!(unit_priority(1.3), 1.0);
        assert_eq!(unit_priority(0.4), 0.4);
    }

    #[test]
    fn narrative_header() {
        let engine = AntinomyEngine::new();
        let result = engine.resolve_contradictions(&[
            Proposition::new("The world is finite", 0.9, "a"),
            Proposition::new("The world is infinite", 0.9, "b"),
        ]);
        insta::assert_snapshot!(result.explanation, @r###"
        Detected 1 antinomy.

        1. [finite vs. infinite] Antonym conflict: 'finite' versus 'infinite' (strength 0.85, metaphysics)
          Thesis: The world is finite (a)
          Antithesis: The world is infinite (b)
          Strategy: domain distinction (confidence 0.80)
          Resolution: 'The world is finite' holds within what can be given in experience, while 'The world is infinite' holds within what can only be thought as a totality.
        "###);
    }
}
