//! Cross-field rules
//!
//! Rules that compare a field's value against other fields of the enclosing
//! record:
//!
//! - [`cross_field`]: arbitrary check over `(record, value)`
//! - [`sibling`]: check over `(sibling value, value)` for a named field
//! - [`equals_field`]: the value must equal a named sibling
//! - [`dependent_required`]: a named sibling must be set
//!
//! All of them read the record from the [`RuleContext`] and report
//! [`ConfigError::ContextUnbound`] when validated without one.

use std::fmt;
use std::sync::Arc;

use crate::foundation::{ConfigError, Record, Rule, RuleContext, RuleError, RuleResult, Value};

type Check = dyn Fn(&dyn Record, &Value<'_>) -> RuleResult + Send + Sync;

// ============================================================================
// CROSS FIELD
// ============================================================================

/// Delegates to a function of the enclosing record and the field's value.
///
/// # Examples
///
/// ```rust,ignore
/// use strata_validator::prelude::*;
///
/// let ends_after_start = sibling("Start", |start, end| match (start.as_f64(), end.as_f64()) {
///     (Some(s), Some(e)) if e > s => Ok(()),
///     _ => Err(RuleError::invalid("end must be after start")),
/// });
/// ```
#[derive(Clone)]
pub struct CrossField {
    check: Arc<Check>,
}

impl CrossField {
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&dyn Record, &Value<'_>) -> RuleResult + Send + Sync + 'static,
    {
        Self {
            check: Arc::new(check),
        }
    }
}

impl Rule for CrossField {
    fn validate(&self, _value: &Value<'_>) -> RuleResult {
        Err(ConfigError::ContextUnbound.into())
    }

    fn validate_in(&self, value: &Value<'_>, ctx: &RuleContext<'_>) -> RuleResult {
        (self.check)(ctx.require_record()?, value)
    }
}

impl fmt::Debug for CrossField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrossField").finish_non_exhaustive()
    }
}

/// Creates a [`CrossField`] rule from a function of `(record, value)`.
pub fn cross_field<F>(check: F) -> CrossField
where
    F: Fn(&dyn Record, &Value<'_>) -> RuleResult + Send + Sync + 'static,
{
    CrossField::new(check)
}

/// Compares the field's value with the named sibling field.
///
/// The closure receives `(sibling, value)`. A missing sibling is a
/// configuration error.
pub fn sibling<F>(field: impl Into<String>, compare: F) -> CrossField
where
    F: Fn(&Value<'_>, &Value<'_>) -> RuleResult + Send + Sync + 'static,
{
    let field = field.into();
    CrossField::new(move |record, value| {
        let other = record
            .field(&field)
            .ok_or_else(|| ConfigError::MissingField {
                field: field.clone(),
            })?;
        compare(&other, value)
    })
}

/// Requires the value to equal the named sibling field.
pub fn equals_field(field: impl Into<String>) -> CrossField {
    let field = field.into();
    let message = format!("value must match field {field}");
    sibling(field, move |other, value| {
        if other == value {
            Ok(())
        } else {
            Err(RuleError::invalid(message.clone()))
        }
    })
}

// ============================================================================
// DEPENDENT REQUIRED
// ============================================================================

/// Fails when the named sibling field holds its zero value (absent, empty
/// string, empty collection, `false`, `0`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependentRequired {
    field: String,
}

impl DependentRequired {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Name of the sibling that must be set.
    pub fn field(&self) -> &str {
        &self.field
    }
}

impl Rule for DependentRequired {
    fn validate(&self, _value: &Value<'_>) -> RuleResult {
        Err(ConfigError::ContextUnbound.into())
    }

    fn validate_in(&self, _value: &Value<'_>, ctx: &RuleContext<'_>) -> RuleResult {
        if ctx.sibling(&self.field)?.is_zero() {
            Err(RuleError::invalid(format!("field {} is required", self.field)))
        } else {
            Ok(())
        }
    }
}

/// Creates a [`DependentRequired`] rule.
pub fn dependent_required(field: impl Into<String>) -> DependentRequired {
    DependentRequired::new(field)
}
