//! Presence validation
//!
//! [`Required`] is the only built-in rule that sees absent values: every
//! other leaf rule passes on [`Value::Absent`] so optional fields can carry
//! format rules without also demanding presence.
//!
//! # Examples
//!
//! ```rust,ignore
//! use strata_validator::prelude::*;
//!
//! let rule = required();
//! assert!(rule.validate(&"hello".inspect()).is_ok());
//! assert!(rule.validate(&"".inspect()).is_err());
//! assert!(rule.validate(&None::<String>.inspect()).is_err());
//! ```

use crate::foundation::{Rule, RuleError, RuleResult, Value};

/// Fails on absent values, empty strings and empty sequences or maps.
///
/// Numbers, booleans and records always pass: `0` and `false` are
/// legitimate values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Required;

impl Rule for Required {
    fn validate(&self, value: &Value<'_>) -> RuleResult {
        let missing = match value {
            Value::Absent => true,
            Value::Str(s) => s.is_empty(),
            Value::Seq(items) => items.is_empty(),
            Value::Map(entries) => entries.is_empty(),
            _ => false,
        };
        if missing {
            Err(RuleError::invalid("value is required"))
        } else {
            Ok(())
        }
    }
}

/// Creates a [`Required`] rule.
#[must_use]
pub const fn required() -> Required {
    Required
}
