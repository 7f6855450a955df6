//! `Scored<T>`: a detector finding with its strength and the rule behind it.

use std::fmt;

/// A value with an associated strength score and the rule that produced it.
///
/// Strength is clamped to `[0, 1]` on construction.
///
/// # Example
/// ```
/// use layered_antinomy::Scored;
///
/// let finding = Scored::rule_based("good vs. bad", 0.85, "antonym_pair");
/// assert_eq!(finding.confidence, 0.85);
/// assert_eq!(finding.rule, "antonym_pair");
/// ```
#[derive(Clone)]
pub struct Scored<T> {
    /// The actual value
    pub value: T,
    /// Score from 0.0 to 1.0
    pub confidence: f64,
    /// Name of the rule that produced this score
    pub rule: &'static str,
}

impl<T> Scored<T> {
    /// Create a scored value from a named rule.
    pub fn rule_based(value: T, confidence: f64, rule: &'static str) -> Self {
        Self {
            value,
            confidence: confidence.clamp(0.0, 1.0),
            rule,
        }
    }

    /// Returns true if the score reaches `threshold` (inclusive).
    pub fn meets(&self, threshold: f64) -> bool {
        self.confidence >= threshold
    }
}

impl<T: fmt::Debug> fmt::Debug for Scored<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Compact format for snapshot tests: Scored(value, conf: 0.85, rule)
        write!(
            f,
            "Scored({:?}, conf: {:.2}, {})",
            self.value, self.confidence, self.rule
        )
    }
}

impl<T: PartialEq> PartialEq for Scored<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
            && (self.confidence - other.confidence).abs() < f64::EPSILON
            && self.rule == other.rule
    }
}
