//! Property-based tests for the engine's range and determinism guarantees.

use once_cell::sync::Lazy;
use proptest::prelude::*;

use crate::{
    Antinomy, AntinomyDomain, AntinomyEngine, AntinomyType, ContradictionDetector, Proposition,
    ResolutionStrategy,
};

/// Words that exercise every detector path: quantifiers, copulas, modals,
/// negation, antonyms, value terms and imperatives.
const VOCABULARY: &[&str] = &[
    "all", "no", "some", "the", "swans", "world", "users", "is", "are", "not", "must", "cannot",
    "might", "necessarily", "contingently", "finite", "infinite", "good", "bad", "white",
    "rights", "utility", "individual", "public", "freedom", "safety", "should", "transparency",
    "performance", "data", "consent", "always", "never",
];

static ENGINE: Lazy<AntinomyEngine> = Lazy::new(AntinomyEngine::new);
static SECOND_ENGINE: Lazy<AntinomyEngine> = Lazy::new(AntinomyEngine::new);
static DETECTOR: Lazy<ContradictionDetector> = Lazy::new(ContradictionDetector::new);

fn statement_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCABULARY), 0..8).prop_map(|words| words.join(" "))
}

fn proposition_strategy() -> impl Strategy<Value = Proposition> {
    (statement_strategy(), 0.0..=1.0f64, prop::sample::select(vec!["a", "b", "c"]))
        .prop_map(|(statement, confidence, source)| Proposition::new(statement, confidence, source))
}

fn type_strategy() -> impl Strategy<Value = AntinomyType> {
    prop::sample::select(AntinomyType::ALL.to_vec())
}

fn strategy_strategy() -> impl Strategy<Value = ResolutionStrategy> {
    prop::sample::select(ResolutionStrategy::ALL.to_vec())
}

fn domain_strategy() -> impl Strategy<Value = AntinomyDomain> {
    prop::sample::select(AntinomyDomain::ALL.to_vec())
}

proptest! {
    #[test]
    fn strength_stays_in_unit_range(a in proposition_strategy(), b in proposition_strategy()) {
        let check = DETECTOR.check_contradiction(&a, &b);
        prop_assert!((0.0..=1.0).contains(&check.strength));
        prop_assert_eq!(check.is_contradiction, check.rule.is_some());
        if !check.is_contradiction {
            prop_assert_eq!(check.strength, 0.0);
        }
    }

    #[test]
    fn resolution_confidence_is_bounded(
        ty in type_strategy(),
        strategy in strategy_strategy(),
        domain in domain_strategy(),
        a in statement_strategy(),
        b in statement_strategy(),
    ) {
        let antinomy = Antinomy::new(
            ty,
            Proposition::new(a, 0.9, "x"),
            Proposition::new(b, 0.9, "y"),
            domain,
            "generated",
            0.9,
        );
        let resolution = ENGINE.resolve_antinomy(&antinomy, Some(strategy));
        prop_assert!((0.5..=0.95).contains(&resolution.confidence));
        prop_assert_eq!(resolution.strategy, strategy);
    }

    #[test]
    fn antinomies_respect_threshold_and_input_order(
        propositions in prop::collection::vec(proposition_strategy(), 0..6),
        threshold in 0.0..=1.0f64,
    ) {
        let mut detector = DETECTOR.clone();
        detector.antinomy_threshold = threshold;
        let antinomies = detector.detect_antinomies(&propositions);

        for antinomy in &antinomies {
            prop_assert!(antinomy.strength >= threshold);
            // Thesis comes from earlier in the input than antithesis
            let i = propositions.iter().position(|p| *p == antinomy.thesis).unwrap();
            let j = propositions.iter().rposition(|p| *p == antinomy.antithesis).unwrap();
            prop_assert!(i < j);
        }
        prop_assert!(antinomies.len() <= propositions.len() * propositions.len().saturating_sub(1) / 2);
    }

    #[test]
    fn resolve_contradictions_is_deterministic(
        propositions in prop::collection::vec(proposition_strategy(), 0..5),
    ) {
        let engine = &*ENGINE;
        let first = serde_json::to_string(&engine.resolve_contradictions(&propositions)).unwrap();
        let second = serde_json::to_string(&engine.resolve_contradictions(&propositions)).unwrap();
        prop_assert_eq!(first, second);

        let third = serde_json::to_string(&SECOND_ENGINE.resolve_contradictions(&propositions)).unwrap();
        prop_assert_eq!(
            serde_json::to_string(&engine.resolve_contradictions(&propositions)).unwrap(),
            third
        );
    }

    #[test]
    fn resolved_propositions_extend_input(
        propositions in prop::collection::vec(proposition_strategy(), 0..5),
    ) {
        let result = ENGINE.resolve_contradictions(&propositions);
        prop_assert_eq!(&result.resolved_propositions[..propositions.len()], &propositions[..]);
        prop_assert_eq!(
            result.resolved_propositions.len(),
            propositions.len() + result.resolutions.len()
        );
    }
}
