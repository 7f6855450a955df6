use layered_antinomy_text::{extract_predicate, extract_subject, similarity};

use crate::{
    AntinomyDomain, AntinomyEngine, AntinomyType, EngineConfig, MetadataValue, Proposition,
    ResolutionStrategy, NO_CONTRADICTIONS, RESOLUTION_SOURCE,
};

const CONSENT: &str = "All users must consent before data collection";
const NO_CONSENT: &str = "No consent is required for essential data collection";

fn consent_propositions() -> Vec<Proposition> {
    vec![
        Proposition::new(CONSENT, 0.9, "privacy_policy"),
        Proposition::new(NO_CONSENT, 0.8, "legal_team"),
    ]
}

// ============ Consent policy vs. legal exemption ============

#[test]
fn consent_conflict_is_one_antinomy() {
    let engine = AntinomyEngine::new();
    let antinomies = engine.detect_antinomies(&consent_propositions());

    assert_eq!(antinomies.len(), 1);
    let antinomy = &antinomies[0];
    assert_eq!(antinomy.thesis.source, "privacy_policy");
    assert_eq!(antinomy.antithesis.source, "legal_team");
    assert!(antinomy.strength >= 0.85);
    assert_eq!(antinomy.antinomy_type, AntinomyType::FiniteVsInfinite);
    assert_eq!(antinomy.domain, AntinomyDomain::System);
    assert_eq!(antinomy.contradiction, "Antonym conflict: 'all' versus 'no'");
}

#[test]
fn consent_conflict_resolves_with_type_default() {
    let engine = AntinomyEngine::new();
    let antinomies = engine.detect_antinomies(&consent_propositions());
    let resolution = engine.resolve_antinomy(&antinomies[0], None);

    assert_eq!(resolution.strategy, ResolutionStrategy::DomainDistinction);
    assert!(resolution.resolution.contains(CONSENT));
    assert!(resolution.resolution.contains(NO_CONSENT));
}

#[test]
fn consent_conflict_aggregates() {
    let engine = AntinomyEngine::new();
    let input = consent_propositions();
    let result = engine.resolve_contradictions(&input);

    assert_eq!(result.resolutions.len(), 1);
    assert_eq!(&result.resolved_propositions[..2], &input[..]);

    let synthesized = &result.resolved_propositions[2];
    assert_eq!(synthesized.source, RESOLUTION_SOURCE);
    assert_eq!(synthesized.statement, result.resolutions[0].resolution);
    assert_eq!(synthesized.confidence, 0.8);
    assert_eq!(
        synthesized.metadata.get("thesis"),
        Some(&MetadataValue::from(CONSENT))
    );
    assert_eq!(
        synthesized.metadata.get("antithesis"),
        Some(&MetadataValue::from(NO_CONSENT))
    );
    assert_eq!(
        synthesized.metadata.get("strategy").and_then(MetadataValue::as_str),
        Some("domain_distinction")
    );

    assert!(result.explanation.starts_with("Detected 1 antinomy."));
    assert!(result.explanation.contains(CONSENT));
}

// ============ Same statement, different sources ============

#[test]
fn identical_statements_are_not_contradictory() {
    let statement = "Users must consent before data collection";
    let a = Proposition::new(statement, 0.9, "privacy_policy");
    let b = Proposition::new(statement, 0.7, "marketing");

    assert_eq!(similarity(&extract_subject(statement), &extract_subject(statement)), 1.0);
    assert_eq!(
        similarity(&extract_predicate(statement), &extract_predicate(statement)),
        1.0
    );

    let engine = AntinomyEngine::new();
    assert!(!engine.check_contradiction(&a, &b).is_contradiction);
    assert!(engine.detect_antinomies(&[a, b]).is_empty());
}

// ============ Aggregator no-op ============

#[test]
fn no_propositions_no_resolutions() {
    let result = AntinomyEngine::new().resolve_contradictions(&[]);
    assert!(result.resolved_propositions.is_empty());
    assert!(result.resolutions.is_empty());
    assert_eq!(result.explanation, NO_CONTRADICTIONS);
}

#[test]
fn single_proposition_is_returned_unchanged() {
    let input = vec![Proposition::new("The world is finite", 0.9, "a")
        .with_domain(AntinomyDomain::Metaphysics)
        .with_metadata("page", 12.0)];

    let result = AntinomyEngine::new().resolve_contradictions(&input);
    assert_eq!(result.resolved_propositions, input);
    assert!(result.resolutions.is_empty());
    assert_eq!(result.explanation, NO_CONTRADICTIONS);
}

// ============ Threshold boundary ============

#[test]
fn threshold_is_inclusive() {
    let propositions = vec![
        Proposition::new("The world is finite", 0.9, "a"),
        Proposition::new("The world is infinite", 0.9, "b"),
    ];

    let at = AntinomyEngine::with_config(EngineConfig::default().with_threshold(0.85)).unwrap();
    assert_eq!(at.detect_antinomies(&propositions).len(), 1);

    let above =
        AntinomyEngine::with_config(EngineConfig::default().with_threshold(0.8500001)).unwrap();
    assert!(above.detect_antinomies(&propositions).is_empty());
}

#[test]
fn conflicting_imperatives_sit_exactly_at_default_threshold() {
    let engine = AntinomyEngine::new();
    let antinomies = engine.detect_antinomies(&[
        Proposition::new("Teams should ship weekly", 0.9, "product"),
        Proposition::new("Releases must wait for audits", 0.9, "compliance"),
    ]);
    assert_eq!(antinomies.len(), 1);
    assert_eq!(antinomies[0].strength, 0.7);
}

// ============ Multiple antinomies ============

#[test]
fn overlapping_pairs_are_not_deduplicated() {
    let engine = AntinomyEngine::new();
    let result = engine.resolve_contradictions(&[
        Proposition::new("The world is finite", 0.9, "a"),
        Proposition::new("The world is infinite", 0.9, "b"),
        Proposition::new("The world is not infinite", 0.9, "c"),
    ]);

    assert_eq!(result.resolutions.len(), 3);
    assert_eq!(result.resolved_propositions.len(), 6);
    assert!(result.explanation.starts_with("Detected 3 antinomies."));
    assert!(result.explanation.contains("\n\n3. "));
}
