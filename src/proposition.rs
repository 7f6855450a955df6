//! Input values: propositions and the actions value systems judge.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::taxonomy::AntinomyDomain;

/// A metadata value attached to a [`Proposition`] or [`Action`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Bool(bool),
    Number(f64),
    String(String),
    Map(BTreeMap<String, MetadataValue>),
}

impl MetadataValue {
    /// Returns the string payload, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetadataValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the numeric payload, if this is a number value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetadataValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::String(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        MetadataValue::String(value)
    }
}

impl From<f64> for MetadataValue {
    fn from(value: f64) -> Self {
        MetadataValue::Number(value)
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        MetadataValue::Bool(value)
    }
}

impl From<BTreeMap<String, MetadataValue>> for MetadataValue {
    fn from(value: BTreeMap<String, MetadataValue>) -> Self {
        MetadataValue::Map(value)
    }
}

/// Open key-value metadata, ordered by key for deterministic serialization.
pub type Metadata = BTreeMap<String, MetadataValue>;

/// A claim with a confidence score and the identifier of where it came from.
///
/// Confidence is clamped to `[0, 1]` on construction and on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PropositionRecord")]
pub struct Proposition {
    /// The claim itself.
    pub statement: String,
    /// Confidence from 0.0 to 1.0
    pub confidence: f64,
    /// Free-text origin identifier ("privacy_policy", "legal_team").
    pub source: String,
    /// Explicit subject domain; overrides keyword-based domain inference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<AntinomyDomain>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: Metadata,
}

impl Proposition {
    /// Creates a proposition. Confidence is clamped to `[0, 1]`.
    pub fn new(statement: impl Into<String>, confidence: f64, source: impl Into<String>) -> Self {
        Self {
            statement: statement.into(),
            confidence: unit_confidence(confidence),
            source: source.into(),
            domain: None,
            metadata: Metadata::new(),
        }
    }

    pub fn with_domain(mut self, domain: AntinomyDomain) -> Self {
        self.domain = Some(domain);
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<MetadataValue>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Wire form of a [`Proposition`], before confidence is clamped.
#[derive(Deserialize)]
struct PropositionRecord {
    statement: String,
    confidence: f64,
    source: String,
    #[serde(default)]
    domain: Option<AntinomyDomain>,
    #[serde(default)]
    metadata: Metadata,
}

impl From<PropositionRecord> for Proposition {
    fn from(record: PropositionRecord) -> Self {
        Self {
            statement: record.statement,
            confidence: unit_confidence(record.confidence),
            source: record.source,
            domain: record.domain,
            metadata: record.metadata,
        }
    }
}

/// NaN counts as no confidence at all.
fn unit_confidence(confidence: f64) -> f64 {
    if confidence.is_nan() {
        0.0
    } else {
        confidence.clamp(0.0, 1.0)
    }
}

/// An action submitted for evaluation against several value systems.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// What is being done, e.g. "Collect location data to improve routing".
    pub description: String,
    /// Who performs the action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
    /// Circumstances the action happens in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: Metadata,
}

impl Action {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            agent: None,
            context: None,
            metadata: Metadata::new(),
        }
    }

    pub fn with_agent(mut self, agent: impl Into<String>) -> Self {
        self.agent = Some(agent.into());
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_is_clamped() {
        assert_eq!(Proposition::new("x", 1.5, "a").confidence, 1.0);
        assert_eq!(Proposition::new("x", -0.2, "a").confidence, 0.0);
        assert_eq!(Proposition::new("x", f64::NAN, "a").confidence, 0.0);
    }

    #[test]
    fn deserialized_confidence_is_clamped() {
        let high: Proposition = serde_json::from_str(
            r#"{"statement":"Logs are kept forever","confidence":1.5,"source":"ops","domain":"system"}"#,
        )
        .unwrap();
        assert_eq!(high.confidence, 1.0);
        assert_eq!(high.domain, Some(AntinomyDomain::System));

        let low: Proposition =
            toml::from_str("statement = \"Logs are deleted daily\"\nconfidence = -3.0\nsource = \"ops\"")
                .unwrap();
        assert_eq!(low.confidence, 0.0);
        assert!(low.metadata.is_empty());
    }

    #[test]
    fn metadata_serializes_as_plain_json() {
        let mut nested = BTreeMap::new();
        nested.insert("reviewed".to_string(), MetadataValue::from(true));

        let proposition = Proposition::new("Data is retained for 30 days", 0.9, "policy")
            .with_metadata("version", 2.0)
            .with_metadata("owner", "legal")
            .with_metadata("audit", nested);

        let json = serde_json::to_string(&proposition).unwrap();
        assert_eq!(
            json,
            r#"{"statement":"Data is retained for 30 days","confidence":0.9,"source":"policy","metadata":{"audit":{"reviewed":true},"owner":"legal","version":2.0}}"#
        );

        let back: Proposition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, proposition);
    }

    #[test]
    fn metadata_accessors() {
        assert_eq!(MetadataValue::from("x").as_str(), Some("x"));
        assert_eq!(MetadataValue::from(0.5).as_f64(), Some(0.5));
        assert_eq!(MetadataValue::from(true).as_str(), None);
    }
}
