//! Validation context threaded into rules
//!
//! Conditional and cross-field rules need more than the single field value:
//! they inspect sibling fields of the enclosing record. Instead of binding
//! that record into the rule (which would make a rule instance unusable for
//! concurrent calls), the walker passes a [`RuleContext`] to every rule
//! invocation. The context is a short-lived borrow and the rule stays an
//! immutable, shareable value.

use crate::config::ContextScope;
use crate::foundation::error::ConfigError;
use crate::foundation::value::{Record, Value};
use crate::path::FieldPath;
use std::str::FromStr;

// ============================================================================
// RULE CONTEXT
// ============================================================================

/// Everything a rule may know about where it is running.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    path: &'a FieldPath,
    ancestors: &'a [&'a dyn Record],
    args: RuleArgs<'a>,
    scope: ContextScope,
}

impl<'a> RuleContext<'a> {
    /// Creates a context for `path` with the given ancestor chain
    /// (root first, nearest enclosing record last).
    pub fn new(path: &'a FieldPath, ancestors: &'a [&'a dyn Record]) -> Self {
        Self {
            path,
            ancestors,
            args: RuleArgs::EMPTY,
            scope: ContextScope::default(),
        }
    }

    /// Attaches annotation arguments.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_args(mut self, args: &'a [String]) -> Self {
        self.args = RuleArgs::new(args);
        self
    }

    /// Selects which record [`record`](Self::record) returns.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_scope(mut self, scope: ContextScope) -> Self {
        self.scope = scope;
        self
    }

    /// Path of the field being validated.
    #[must_use]
    pub fn path(&self) -> &'a FieldPath {
        self.path
    }

    /// Enclosing records, root first.
    #[must_use]
    pub fn ancestors(&self) -> &'a [&'a dyn Record] {
        self.ancestors
    }

    /// The record that directly holds the field.
    #[must_use]
    pub fn parent(&self) -> Option<&'a dyn Record> {
        self.ancestors.last().copied()
    }

    /// The top-level record passed to the validator.
    #[must_use]
    pub fn root(&self) -> Option<&'a dyn Record> {
        self.ancestors.first().copied()
    }

    /// The record conditional rules evaluate against, per the configured
    /// [`ContextScope`].
    #[must_use]
    pub fn record(&self) -> Option<&'a dyn Record> {
        match self.scope {
            ContextScope::Parent => self.parent(),
            ContextScope::Root => self.root(),
        }
    }

    /// Like [`record`](Self::record) but reports a configuration error when
    /// no record is available.
    pub fn require_record(&self) -> Result<&'a dyn Record, ConfigError> {
        self.record().ok_or(ConfigError::ContextUnbound)
    }

    /// Looks up a sibling field in [`record`](Self::record).
    pub fn sibling(&self, name: &str) -> Result<Value<'a>, ConfigError> {
        self.require_record()?
            .field(name)
            .ok_or_else(|| ConfigError::MissingField {
                field: name.to_string(),
            })
    }

    /// Arguments of the annotation that selected the rule.
    #[must_use]
    pub fn args(&self) -> RuleArgs<'a> {
        self.args
    }
}

// ============================================================================
// RULE ARGUMENTS
// ============================================================================

/// Arguments parsed from a rule annotation (`min=3`, `range:1:10`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleArgs<'a> {
    values: &'a [String],
}

impl<'a> RuleArgs<'a> {
    /// No arguments.
    pub const EMPTY: RuleArgs<'static> = RuleArgs { values: &[] };

    #[must_use]
    pub fn new(values: &'a [String]) -> Self {
        Self { values }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&'a str> {
        self.values.get(position).map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &'a [String] {
        self.values
    }

    /// Parses the argument at `position`, reporting misuse of `rule` as a
    /// configuration error.
    pub fn parse<T>(&self, rule: &str, position: usize) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let raw = self.get(position).ok_or_else(|| ConfigError::MissingArgument {
            rule: rule.to_string(),
            position,
        })?;
        raw.trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidArgument {
                rule: rule.to_string(),
                value: raw.to_string(),
                reason: e.to_string(),
            })
    }

    /// Parses the argument at `position` if present.
    pub fn parse_opt<T>(&self, rule: &str, position: usize) -> Result<Option<T>, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        if position < self.values.len() {
            self.parse(rule, position).map(Some)
        } else {
            Ok(None)
        }
    }
}
