//! MESSAGE combinator - custom error messages

use std::borrow::Cow;

use crate::foundation::{Rule, RuleContext, RuleError, RuleResult, Value};

// ============================================================================
// WITH MESSAGE COMBINATOR
// ============================================================================

/// Replaces the failure message of a rule.
///
/// Configuration errors from the inner rule are passed through untouched;
/// only data failures are relabelled.
///
/// # Examples
///
/// ```rust,ignore
/// use strata_validator::prelude::*;
///
/// let rule = length(8, 64).with_message("password must be 8-64 characters");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<R> {
    inner: R,
    message: Cow<'static, str>,
}

impl<R> WithMessage<R> {
    pub fn new(inner: R, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }

    /// Returns a reference to the inner rule.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Returns the custom message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Extracts the inner rule.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn relabel(&self, result: RuleResult) -> RuleResult {
        result.map_err(|error| match error {
            RuleError::Invalid(_) => RuleError::Invalid(self.message.clone()),
            config @ RuleError::Config(_) => config,
        })
    }
}

impl<R: Rule> Rule for WithMessage<R> {
    fn validate(&self, value: &Value<'_>) -> RuleResult {
        self.relabel(self.inner.validate(value))
    }

    fn validate_in(&self, value: &Value<'_>, ctx: &RuleContext<'_>) -> RuleResult {
        self.relabel(self.inner.validate_in(value, ctx))
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}

/// Creates a [`WithMessage`] combinator.
pub fn with_message<R>(rule: R, message: impl Into<Cow<'static, str>>) -> WithMessage<R> {
    WithMessage::new(rule, message)
}
