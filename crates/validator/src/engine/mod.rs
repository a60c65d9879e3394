//! Validation engine
//!
//! [`Validator`] bundles a [`Registry`] with a [`ValidatorConfig`] and runs
//! the structural walk over caller records.
//!
//! Registration needs `&mut Validator` and validation needs `&Validator`, so
//! the borrow checker rules out registering while a validation is in flight.
//! Once built, a validator is `Send + Sync` and can be shared through an
//! `Arc` between threads.

mod dispatch;
mod walker;

use tracing::debug;

use crate::config::ValidatorConfig;
use crate::foundation::{Inspect, Rule, SharedRule, ValidationErrors, Value};
use crate::registry::Registry;
use walker::Walker;

// ============================================================================
// VALIDATOR
// ============================================================================

/// Validates records against registered rules.
///
/// # Examples
///
/// ```
/// use strata_validator::prelude::*;
///
/// struct User {
///     name: String,
///     age: u32,
/// }
///
/// strata_validator::record!(User {
///     name as "Name",
///     age as "Age",
/// });
///
/// let validator = Validator::new()
///     .rule("Name", required())
///     .rule("Age", range(18.0, 100.0));
///
/// let errors = validator
///     .validate(&User { name: String::new(), age: 15 })
///     .unwrap_err();
/// assert_eq!(
///     errors.to_string(),
///     "Name: value is required; Age: value must be greater than or equal to 18"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    registry: Registry,
    config: ValidatorConfig,
}

impl Validator {
    /// A validator with the built-in annotation rules and default settings.
    ///
    /// No field paths are bound: a record without annotations is valid.
    #[must_use]
    pub fn new() -> Self {
        Self::from_registry(Registry::with_builtins())
    }

    /// A validator over an existing registry.
    #[must_use]
    pub fn from_registry(registry: Registry) -> Self {
        Self {
            registry,
            config: ValidatorConfig::default(),
        }
    }

    /// Replaces the configuration.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_config(mut self, config: ValidatorConfig) -> Self {
        debug!(?config, "validator configured");
        self.config = config;
        self
    }

    /// Binds `rule` to the field path `path` (`Name`, `Items[].Qty`).
    pub fn register(&mut self, path: impl Into<String>, rule: impl Rule + 'static) -> &mut Self {
        self.registry.register(path, rule);
        self
    }

    /// Binds an already shared rule to `path`.
    pub fn register_shared(&mut self, path: impl Into<String>, rule: SharedRule) -> &mut Self {
        self.registry.register_shared(path, rule);
        self
    }

    /// Makes `rule` available to field annotations under `name`.
    pub fn register_named(&mut self, name: impl Into<String>, rule: impl Rule + 'static) -> &mut Self {
        self.registry.register_named(name, rule);
        self
    }

    /// Chaining form of [`register`](Self::register).
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(mut self, path: impl Into<String>, rule: impl Rule + 'static) -> Self {
        self.registry.register(path, rule);
        self
    }

    /// Chaining form of [`register_named`](Self::register_named).
    #[must_use = "builder methods must be chained or built"]
    pub fn named_rule(mut self, name: impl Into<String>, rule: impl Rule + 'static) -> Self {
        self.registry.register_named(name, rule);
        self
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates `record`, returning every violation on failure.
    ///
    /// Configuration problems (unknown annotation rules, bad conditional
    /// field references, non-record input) are reported in the same
    /// collection with [`ErrorKind::Configuration`](crate::foundation::ErrorKind::Configuration).
    pub fn validate<T: Inspect + ?Sized>(&self, record: &T) -> Result<(), ValidationErrors> {
        self.validate_all(record).into_result(())
    }

    /// Validates `record` and returns the possibly empty error collection.
    #[must_use]
    pub fn validate_all<T: Inspect + ?Sized>(&self, record: &T) -> ValidationErrors {
        self.validate_value(&record.inspect())
    }

    /// Validates an already inspected value.
    #[must_use]
    pub fn validate_value(&self, value: &Value<'_>) -> ValidationErrors {
        let errors = Walker::new(&self.registry, &self.config).run(value);
        debug!(errors = errors.len(), "validation finished");
        errors
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_validator_is_send_sync() {
        assert_send_sync::<Validator>();
    }

    #[test]
    fn test_register_then_validate() {
        let mut validator = Validator::from_registry(Registry::new());
        validator
            .register("input", crate::validators::required())
            .register("other", crate::validators::required());
        assert_eq!(validator.registry().len(), 2);

        let errors = validator.validate_value(&Value::Str("not a record"));
        assert_eq!(errors.len(), 1);
        assert!(errors.has_configuration_errors());
    }
}
