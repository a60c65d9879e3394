//! EACH combinator - validates each element of a sequence

use crate::foundation::{Rule, RuleContext, RuleError, RuleResult, Value};

// ============================================================================
// EACH COMBINATOR
// ============================================================================

/// Validates each element of a sequence.
///
/// Elements are checked in index order; the first failing element is
/// reported as `item at index N: <message>`. An absent value has no elements
/// and passes. Elements see the same context as the sequence field itself.
///
/// # Examples
///
/// ```rust,ignore
/// use strata_validator::prelude::*;
///
/// let rule = Each::new(length(3, 10));
/// assert!(rule.validate(&vec!["foo", "bar"].inspect()).is_ok());
/// assert_eq!(
///     rule.validate(&vec!["foo", "x"].inspect()).unwrap_err().to_string(),
///     "item at index 1: length must be at least 3"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Each<R> {
    inner: R,
}

impl<R> Each<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner rule.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Extracts the inner rule.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Rule> Each<R> {
    fn check(
        &self,
        value: &Value<'_>,
        mut run: impl FnMut(&R, &Value<'_>) -> RuleResult,
    ) -> RuleResult {
        let items = match value {
            Value::Absent => return Ok(()),
            Value::Seq(items) => items,
            _ => return Err(RuleError::invalid("value must be a sequence")),
        };
        for (index, item) in items.iter().enumerate() {
            run(&self.inner, item).map_err(|e| e.prefixed(format_args!("item at index {index}")))?;
        }
        Ok(())
    }
}

impl<R: Rule> Rule for Each<R> {
    fn validate(&self, value: &Value<'_>) -> RuleResult {
        self.check(value, |rule, item| rule.validate(item))
    }

    fn validate_in(&self, value: &Value<'_>, ctx: &RuleContext<'_>) -> RuleResult {
        self.check(value, |rule, item| rule.validate_in(item, ctx))
    }
}

/// Creates an [`Each`] combinator.
pub fn each<R>(rule: R) -> Each<R> {
    Each::new(rule)
}
