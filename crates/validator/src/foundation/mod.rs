//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Data view**: [`Value`], [`Inspect`], [`Record`], [`Field`]
//! - **Rules**: [`Rule`], [`RuleExt`], [`RuleContext`], [`RuleArgs`]
//! - **Errors**: [`RuleError`], [`ConfigError`], [`ValidationError`], [`ValidationErrors`]
//!
//! # Architecture
//!
//! ## 1. Explicit introspection
//!
//! Records describe their own shape through [`Record::fields`]; the engine
//! never needs runtime reflection:
//!
//! ```rust,ignore
//! struct Address { city: String }
//! strata_validator::record!(Address { city as "City" });
//! ```
//!
//! ## 2. Context as an argument
//!
//! Rules receive the enclosing records through [`RuleContext`] on every call,
//! so rules hold no per-call state and can be shared freely:
//!
//! ```rust,ignore
//! impl Rule for MatchesPassword {
//!     fn validate(&self, _: &Value<'_>) -> RuleResult {
//!         Err(ConfigError::ContextUnbound.into())
//!     }
//!
//!     fn validate_in(&self, value: &Value<'_>, ctx: &RuleContext<'_>) -> RuleResult {
//!         if ctx.sibling("Password")? == *value { Ok(()) } else {
//!             Err(RuleError::invalid("passwords do not match"))
//!         }
//!     }
//! }
//! ```
//!
//! ## 3. Two error classes
//!
//! [`RuleError::Invalid`] means the data is wrong; [`RuleError::Config`]
//! means the validator is wrong. Both end up in [`ValidationErrors`], tagged
//! with an [`ErrorKind`].

pub mod context;
pub mod error;
pub mod rule;
pub mod value;

pub use context::{RuleArgs, RuleContext};
pub use error::{
    ConfigError, ErrorKind, RuleError, RuleResult, ValidationError, ValidationErrors,
};
pub use rule::{Rule, RuleExt, SharedRule};
pub use value::{Field, Inspect, Record, Value, ValueKind};

/// Validates a value against every rule, collecting each failure message.
///
/// All rules run; there is no short-circuit.
///
/// # Examples
///
/// ```rust,ignore
/// use strata_validator::foundation::validate_with_all;
///
/// let failures = validate_with_all(&Value::Str("a"), &[&length(3, 10), &required()]);
/// assert_eq!(failures.len(), 1);
/// ```
pub fn validate_with_all(value: &Value<'_>, rules: &[&dyn Rule]) -> Vec<RuleError> {
    rules
        .iter()
        .filter_map(|rule| rule.validate(value).err())
        .collect()
}

#[cfg(test)]
mod core_tests {
    use super::*;

    struct AlwaysValid;

    impl Rule for AlwaysValid {
        fn validate(&self, _value: &Value<'_>) -> RuleResult {
            Ok(())
        }
    }

    struct AlwaysFails;

    impl Rule for AlwaysFails {
        fn validate(&self, _value: &Value<'_>) -> RuleResult {
            Err(RuleError::invalid("always fails"))
        }
    }

    #[test]
    fn test_validate_with_all_runs_every_rule() {
        let failures = validate_with_all(&Value::Absent, &[&AlwaysFails, &AlwaysValid, &AlwaysFails]);
        assert_eq!(failures.len(), 2);
    }

    #[test]
    fn test_validate_with_all_success() {
        assert!(validate_with_all(&Value::Absent, &[&AlwaysValid]).is_empty());
    }
}
