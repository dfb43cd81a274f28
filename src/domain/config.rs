// ============================================================================
// Averaging Configuration
// Controls how averages treat operands that convert to non-finite doubles
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Average Policy
// ============================================================================

/// Defines how non-finite operands (NaN, ±infinity) are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AveragePolicy {
    /// Plain IEEE-754 arithmetic
    /// - NaN operands yield NaN, infinities propagate
    /// - `(a + b) / 2` is computed exactly as written
    #[default]
    Ieee,

    /// Reject non-finite operands
    /// - Any operand converting to NaN or ±infinity fails with `NonFinite`
    /// - Use case: values that feed further arithmetic and must stay finite
    Strict,
}

// ============================================================================
// Complete Averaging Configuration
// ============================================================================

/// Configuration for `NumberBox::average_with` and `NumberBox::mean_of_with`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AverageConfig {
    /// Non-finite operand handling
    pub policy: AveragePolicy,
}

impl AverageConfig {
    /// Create a configuration with the default (IEEE) policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set the non-finite policy
    pub fn with_policy(mut self, policy: AveragePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Preset: reject NaN and infinite operands
    pub fn strict() -> Self {
        Self::new().with_policy(AveragePolicy::Strict)
    }

    /// Whether non-finite operands are rejected
    pub fn rejects_non_finite(&self) -> bool {
        matches!(self.policy, AveragePolicy::Strict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = AverageConfig::default();
        assert_eq!(config.policy, AveragePolicy::Ieee);
        assert!(!config.rejects_non_finite());
    }

    #[test]
    fn test_builder_pattern() {
        let config = AverageConfig::new().with_policy(AveragePolicy::Strict);
        assert_eq!(config, AverageConfig::strict());
        assert!(config.rejects_non_finite());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serde() {
        let json = serde_json::to_string(&AverageConfig::strict()).unwrap();
        assert_eq!(json, r#"{"policy":"Strict"}"#);

        let back: AverageConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, AverageConfig::strict());
    }
}
