use std::collections::BTreeMap;

use crate::{AntinomyEngine, EngineConfig, ResolutionStrategy};

fn goals(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries
        .iter()
        .map(|(goal, priority)| (goal.to_string(), *priority))
        .collect()
}

#[test]
fn transparency_vs_performance_is_balanced_practically() {
    let engine = AntinomyEngine::new();
    let balance =
        engine.manage_architectural_antinomies(&goals(&[("transparency", 0.9), ("performance", 0.9)]));

    assert_eq!(balance.tradeoffs.len(), 1);
    insta::assert_snapshot!(balance.tradeoffs[0], @"performance vs. transparency (practical resolution): The tension between 'Maximize performance' and 'Maximize transparency' is settled in practice rather than in theory.");

    assert_eq!(balance.balanced_principles.len(), 2);
    for priority in balance.balanced_principles.values() {
        assert!((0.0..=1.0).contains(priority));
        assert!((priority - 0.855).abs() < 1e-9, "{priority}");
    }
}

#[test]
fn goal_propositions_carry_priority_and_source() {
    let engine = AntinomyEngine::new();
    let antinomies = engine.detect_antinomies(&[
        crate::Proposition::new("Maximize performance", 0.6, "architectural_goal:performance"),
        crate::Proposition::new("Maximize transparency", 0.9, "architectural_goal:transparency"),
    ]);
    let resolution = engine.resolve_antinomy(&antinomies[0], None);
    assert_eq!(resolution.strategy, ResolutionStrategy::PracticalResolution);

    let balance =
        engine.manage_architectural_antinomies(&goals(&[("transparency", 0.9), ("performance", 0.6)]));
    let average = 0.75;
    assert!((balance.balanced_principles["performance"] - (0.7 * 0.6 + 0.3 * average) * 0.95).abs() < 1e-9);
    assert!((balance.balanced_principles["transparency"] - (0.7 * 0.9 + 0.3 * average) * 0.95).abs() < 1e-9);
}

#[test]
fn dialectical_resolution_leaves_priorities_untouched() {
    let engine = AntinomyEngine::new();
    let balance = engine.manage_architectural_antinomies(&goals(&[
        ("robustness", 0.8),
        ("adaptability", 0.6),
        ("cost", 0.5),
    ]));

    assert_eq!(balance.tradeoffs.len(), 1);
    assert!(balance.tradeoffs[0].starts_with("adaptability vs. robustness (dialectical progression): "));
    assert_eq!(balance.balanced_principles, goals(&[
        ("adaptability", 0.6),
        ("cost", 0.5),
        ("robustness", 0.8),
    ]));
}

#[test]
fn domain_preference_changes_blending() {
    let engine = AntinomyEngine::with_config(EngineConfig::default().with_domain_preference(
        crate::AntinomyDomain::System,
        ResolutionStrategy::ContextualPrioritization,
    ))
    .unwrap();
    let balance =
        engine.manage_architectural_antinomies(&goals(&[("transparency", 0.8), ("performance", 0.4)]));

    assert!((balance.balanced_principles["transparency"] - 0.68).abs() < 1e-9);
    assert!((balance.balanced_principles["performance"] - 0.34).abs() < 1e-9);
}

#[test]
fn priorities_are_clamped_without_tension() {
    let engine = AntinomyEngine::new();
    let balance = engine.manage_architectural_antinomies(&goals(&[("speed", 1.4), ("cost", -0.2)]));

    assert!(balance.tradeoffs.is_empty());
    assert_eq!(balance.balanced_principles, goals(&[("cost", 0.0), ("speed", 1.0)]));
}

#[test]
fn no_goals() {
    let balance = AntinomyEngine::new().manage_architectural_antinomies(&BTreeMap::new());
    assert!(balance.balanced_principles.is_empty());
    assert!(balance.tradeoffs.is_empty());
}

#[test]
fn goal_names_with_modal_words_are_blended() {
    let engine = AntinomyEngine::new();
    let balance = engine.manage_architectural_antinomies(&goals(&[
        ("transparency", 0.9),
        ("performance we can measure", 0.9),
    ]));

    assert_eq!(balance.tradeoffs.len(), 1);
    assert!(balance.tradeoffs[0]
        .starts_with("performance we can measure vs. transparency (practical resolution): "));
    for priority in balance.balanced_principles.values() {
        assert!((priority - 0.855).abs() < 1e-9, "{priority}");
    }
}

#[test]
fn non_finite_priorities_count_as_zero() {
    let engine = AntinomyEngine::new();
    let balance = engine
        .manage_architectural_antinomies(&goals(&[("transparency", f64::NAN), ("performance", 0.9)]));

    assert_eq!(balance.tradeoffs.len(), 1);
    let average = 0.45;
    assert!((balance.balanced_principles["performance"] - (0.7 * 0.9 + 0.3 * average) * 0.95).abs() < 1e-9);
    assert!((balance.balanced_principles["transparency"] - (0.3 * average) * 0.95).abs() < 1e-9);
    assert!(balance.balanced_principles.values().all(|p| (0.0..=1.0).contains(p)));
}
