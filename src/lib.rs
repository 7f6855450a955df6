#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Contradiction detection and resolution for natural-language propositions.
//!
//! Data flows one way: propositions go through the detector, become classified
//! antinomies, get a strategy from the selector and are turned into
//! resolutions by the executors.
//!
//! ## Detection
//!
//! - [`ContradictionDetector`] - direct negation, antonym, modal, quantifier and value checks
//! - [`AntinomyClassifier`] - contradiction type and subject domain inference
//!
//! ## Resolution
//!
//! - [`StrategySelector`] - strategy precedence (caller, domain, type, default)
//! - [`strategy::executors`] - one executor per [`ResolutionStrategy`]
//!
//! ## Facade
//!
//! - [`AntinomyEngine`] - detect, resolve, balance design goals, evaluate actions
//! - [`EngineConfig`] - TOML-loadable engine options
//!
//! ## Confidence Scoring
//!
//! Detector checks produce a [`Scored<T>`] carrying the strength and the name
//! of the rule that fired. Resolution confidence is a fixed property of the
//! strategy and always lies in `[0.5, 0.95]`.
//!
//! ## Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use layered_antinomy::{AntinomyEngine, ResolutionStrategy};
//!
//! let engine = AntinomyEngine::new();
//! let mut goals = BTreeMap::new();
//! goals.insert("transparency".to_string(), 0.9);
//! goals.insert("performance".to_string(), 0.9);
//!
//! let balance = engine.manage_architectural_antinomies(&goals);
//! assert_eq!(balance.tradeoffs.len(), 1);
//! assert!(balance.balanced_principles.values().all(|p| (0.0..=1.0).contains(p)));
//! ```

mod antinomy;
mod classifier;
mod config;
mod detector;
mod engine;
mod error;
mod proposition;
mod scored;
pub mod strategy;
mod taxonomy;
mod utils;


pub use antinomy::{Antinomy, AntinomyResolution, ConditionalApplicability, SideMapping};
pub use classifier::AntinomyClassifier;
pub use config::{ContextPriority, EngineConfig, InterpretationMode};
pub use detector::{
    ContradictionCheck, ContradictionDetector, ContradictionFinding, DEFAULT_ANTINOMY_THRESHOLD,
};
pub use engine::{
    ActionEvaluation, AntinomyEngine, ArchitecturalBalance, ContradictionResolution,
    FnValueSystem, ValueSystem, ARCHITECTURAL_GOAL_SOURCE, NO_CONTRADICTIONS, RESOLUTION_SOURCE,
};
pub use error::{AntinomyError, AntinomyResult};
pub use proposition::{Action, Metadata, MetadataValue, Proposition};
pub use scored::Scored;
pub use strategy::{SelectionTier, StrategySelector};
pub use taxonomy::{AntinomyDomain, AntinomyFamily, AntinomyType, ResolutionStrategy};

pub use layered_antinomy_text as text;
