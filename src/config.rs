//! Engine configuration, loadable from TOML.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::detector::DEFAULT_ANTINOMY_THRESHOLD;
use crate::error::{AntinomyError, AntinomyResult};
use crate::taxonomy::{AntinomyDomain, ResolutionStrategy};

/// How literally the companion evaluator reads propositions.
///
/// Carried for hosts that share one configuration file; contradiction
/// detection and resolution do not depend on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpretationMode {
    Strict,
    #[default]
    Moderate,
    Lenient,
}

/// Relative weight of each side of an antinomy within one context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContextPriority {
    pub thesis: f64,
    pub antithesis: f64,
}

/// Options the engine is constructed with. Read-only afterwards.
///
/// ```toml
/// default_strategy = "synthesis"
/// antinomy_threshold = 0.8
///
/// [domain_preferences]
/// ethics = "contextual_prioritization"
///
/// [contextual_priorities.emergency]
/// thesis = 0.3
/// antithesis = 0.9
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Strategy used when no override, domain preference or type default applies.
    /// `None` means domain distinction.
    pub default_strategy: Option<ResolutionStrategy>,
    /// Advisory; detection never resolves implicitly.
    pub auto_resolve: bool,
    /// Minimum contradiction strength (inclusive) for an antinomy.
    pub antinomy_threshold: f64,
    /// Strategy overrides per domain.
    pub domain_preferences: BTreeMap<AntinomyDomain, ResolutionStrategy>,
    /// Priority hints per named context, used by contextual prioritization.
    pub contextual_priorities: BTreeMap<String, ContextPriority>,
    pub interpretation_mode: InterpretationMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_strategy: None,
            auto_resolve: true,
            antinomy_threshold: DEFAULT_ANTINOMY_THRESHOLD,
            domain_preferences: BTreeMap::new(),
            contextual_priorities: BTreeMap::new(),
            interpretation_mode: InterpretationMode::default(),
        }
    }
}

impl EngineConfig {
    /// Load from a TOML file. A missing file yields the default configuration.
    pub fn load(path: &Path) -> AntinomyResult<Self> {
        if !path.exists() {
            warn!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| AntinomyError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> AntinomyResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects thresholds outside `[0, 1]` (NaN included).
    pub fn validate(&self) -> AntinomyResult<()> {
        if !(0.0..=1.0).contains(&self.antinomy_threshold) {
            return Err(AntinomyError::InvalidThreshold(self.antinomy_threshold));
        }
        Ok(())
    }

    pub fn with_threshold(mut self, antinomy_threshold: f64) -> Self {
        self.antinomy_threshold = antinomy_threshold;
        self
    }

    pub fn with_default_strategy(mut self, strategy: ResolutionStrategy) -> Self {
        self.default_strategy = Some(strategy);
        self
    }

    pub fn with_domain_preference(
        mut self,
        domain: AntinomyDomain,
        strategy: ResolutionStrategy,
    ) -> Self {
        self.domain_preferences.insert(domain, strategy);
        self
    }

    pub fn with_contextual_priority(
        mut self,
        context: impl Into<String>,
        thesis: f64,
        antithesis: f64,
    ) -> Self {
        self.contextual_priorities
            .insert(context.into(), ContextPriority { thesis, antithesis });
        self
    }
}
