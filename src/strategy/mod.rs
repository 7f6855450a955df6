//! Strategy selection and execution.
//!
//! The selector decides which [`ResolutionStrategy`] applies to an antinomy;
//! [`executors`] turn the antinomy into an [`AntinomyResolution`](crate::AntinomyResolution).
//!
//! Precedence is a fixed contract, first non-empty tier wins:
//!
//! 1. the strategy the caller asked for
//! 2. the configured preference for the antinomy's domain
//! 3. the default for the antinomy's type
//! 4. the configured default strategy
//! 5. domain distinction

pub mod executors;
mod tables;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::antinomy::Antinomy;
use crate::config::EngineConfig;
use crate::taxonomy::{AntinomyDomain, AntinomyType, ResolutionStrategy};

/// Built-in strategy per antinomy type. `Unclassified` has none.
const TYPE_DEFAULTS: &[(AntinomyType, ResolutionStrategy)] = &[
    (AntinomyType::FiniteVsInfinite, ResolutionStrategy::DomainDistinction),
    (AntinomyType::AtomicVsContinuous, ResolutionStrategy::DomainDistinction),
    (AntinomyType::DeterministicVsRandom, ResolutionStrategy::MultiLevelAnalysis),
    (AntinomyType::FreedomVsCausality, ResolutionStrategy::PerspectiveShift),
    (AntinomyType::NecessityVsContingency, ResolutionStrategy::PerspectiveShift),
    (AntinomyType::TeleologyVsMechanism, ResolutionStrategy::RegulativePrinciple),
    (AntinomyType::UtilityVsRights, ResolutionStrategy::ContextualPrioritization),
    (AntinomyType::IndividualVsCollective, ResolutionStrategy::Synthesis),
    (AntinomyType::AutonomyVsWelfare, ResolutionStrategy::ContextualPrioritization),
    (AntinomyType::TransparencyVsPerformance, ResolutionStrategy::PracticalResolution),
    (AntinomyType::GeneralityVsSpecialization, ResolutionStrategy::MultiLevelAnalysis),
    (AntinomyType::RobustnessVsAdaptability, ResolutionStrategy::DialecticalProgression),
];

/// Which precedence tier chose a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionTier {
    Preferred,
    DomainPreference,
    TypeDefault,
    EngineDefault,
    Fallback,
}

/// Picks the strategy for an antinomy.
#[derive(Debug, Clone)]
pub struct StrategySelector {
    type_defaults: BTreeMap<AntinomyType, ResolutionStrategy>,
    domain_preferences: BTreeMap<AntinomyDomain, ResolutionStrategy>,
    default_strategy: Option<ResolutionStrategy>,
}

impl Default for StrategySelector {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl StrategySelector {
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            type_defaults: TYPE_DEFAULTS.iter().copied().collect(),
            domain_preferences: config.domain_preferences.clone(),
            default_strategy: config.default_strategy,
        }
    }

    /// The built-in strategy for a type, if it has one.
    pub fn type_default(&self, antinomy_type: AntinomyType) -> Option<ResolutionStrategy> {
        self.type_defaults.get(&antinomy_type).copied()
    }

    /// Selects a strategy and reports the tier that chose it.
    pub fn select(
        &self,
        antinomy: &Antinomy,
        preferred: Option<ResolutionStrategy>,
    ) -> (ResolutionStrategy, SelectionTier) {
        if let Some(strategy) = preferred {
            return (strategy, SelectionTier::Preferred);
        }
        if let Some(strategy) = self.domain_preferences.get(&antinomy.domain) {
            return (*strategy, SelectionTier::DomainPreference);
        }
        if let Some(strategy) = self.type_default(antinomy.antinomy_type) {
            return (strategy, SelectionTier::TypeDefault);
        }
        if let Some(strategy) = self.default_strategy {
            return (strategy, SelectionTier::EngineDefault);
        }
        (ResolutionStrategy::DomainDistinction, SelectionTier::Fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proposition::Proposition;

    fn antinomy(ty: AntinomyType, domain: AntinomyDomain) -> Antinomy {
        Antinomy::new(
            ty,
            Proposition::new("a", 1.0, "x"),
            Proposition::new("b", 1.0, "y"),
            domain,
            "test",
            0.9,
        )
    }

    #[test]
    fn every_classified_type_has_a_default() {
        let selector = StrategySelector::default();
        for ty in AntinomyType::ALL {
            assert_eq!(
                selector.type_default(ty).is_some(),
                ty != AntinomyType::Unclassified,
                "{ty}"
            );
        }
    }

    #[test]
    fn precedence_tiers() {
        let config = EngineConfig::default()
            .with_domain_preference(AntinomyDomain::Ethics, ResolutionStrategy::Synthesis)
            .with_default_strategy(ResolutionStrategy::MultiLevelAnalysis);
        let selector = StrategySelector::from_config(&config);

        let ethics = antinomy(AntinomyType::UtilityVsRights, AntinomyDomain::Ethics);
        assert_eq!(
            selector.select(&ethics, Some(ResolutionStrategy::Unresolvable)),
            (ResolutionStrategy::Unresolvable, SelectionTier::Preferred)
        );
        assert_eq!(
            selector.select(&ethics, None),
            (ResolutionStrategy::Synthesis, SelectionTier::DomainPreference)
        );

        let system = antinomy(AntinomyType::UtilityVsRights, AntinomyDomain::System);
        assert_eq!(
            selector.select(&system, None),
            (ResolutionStrategy::ContextualPrioritization, SelectionTier::TypeDefault)
        );

        let unclassified = antinomy(AntinomyType::Unclassified, AntinomyDomain::System);
        assert_eq!(
            selector.select(&unclassified, None),
            (ResolutionStrategy::MultiLevelAnalysis, SelectionTier::EngineDefault)
        );
        assert_eq!(
            StrategySelector::default().select(&unclassified, None),
            (ResolutionStrategy::DomainDistinction, SelectionTier::Fallback)
        );
    }
}
