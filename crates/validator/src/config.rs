//! Validator configuration
//!
//! [`ValidatorConfig`] is a plain serde-friendly struct. Every field has a
//! default, so partial JSON documents are accepted:
//!
//! ```rust,ignore
//! let config: ValidatorConfig = serde_json::from_str(r#"{ "context_scope": "root" }"#)?;
//! assert!(config.wildcard_paths);
//! ```

use serde::{Deserialize, Serialize};

/// Which record conditional and cross-field rules see as "the" record.
///
/// Both the nearest enclosing record and the document root stay reachable
/// through [`RuleContext::parent`](crate::foundation::RuleContext::parent) and
/// [`RuleContext::root`](crate::foundation::RuleContext::root); the scope only
/// decides what [`RuleContext::record`](crate::foundation::RuleContext::record)
/// returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextScope {
    /// The record that directly holds the field (default).
    #[default]
    Parent,
    /// The top-level record passed to the validator.
    Root,
}

/// Main configuration for a [`Validator`](crate::Validator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Record exposed to conditional rules.
    pub context_scope: ContextScope,
    /// Also apply rules registered under the index-free pattern of a path
    /// (`Items[].Qty` for `Items[3].Qty`).
    pub wildcard_paths: bool,
    /// Honour per-field rule annotations.
    pub annotations: bool,
    /// Maximum record nesting depth before the walk reports a
    /// configuration error instead of descending.
    pub max_depth: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            context_scope: ContextScope::Parent,
            wildcard_paths: true,
            annotations: true,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

impl ValidatorConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_context_scope(mut self, scope: ContextScope) -> Self {
        self.context_scope = scope;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_wildcard_paths(mut self, enabled: bool) -> Self {
        self.wildcard_paths = enabled;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_annotations(mut self, enabled: bool) -> Self {
        self.annotations = enabled;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = ValidatorConfig::default();
        assert_eq!(config.context_scope, ContextScope::Parent);
        assert!(config.wildcard_paths);
        assert!(config.annotations);
        assert_eq!(config.max_depth, 64);
    }

    #[test]
    fn test_partial_json() {
        let config = ValidatorConfig::from_json(r#"{ "context_scope": "root", "max_depth": 3 }"#)
            .expect("valid config");
        assert_eq!(
            config,
            ValidatorConfig::new()
                .with_context_scope(ContextScope::Root)
                .with_max_depth(3)
        );
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(ValidatorConfig::from_json(r#"{ "strict": true }"#).is_err());
    }

    #[test]
    fn test_round_trip_through_json() {
        let config = ValidatorConfig::new().with_wildcard_paths(false);
        let json = serde_json::to_string(&config).expect("serializable");
        assert_eq!(ValidatorConfig::from_json(&json).expect("parsable"), config);
    }
}
