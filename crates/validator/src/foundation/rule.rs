//! The rule contract
//!
//! A [`Rule`] is the atomic unit of validation logic. Rules are plain,
//! immutable values: they may carry their own configuration (bounds,
//! patterns, wrapped rules) but never state tied to a validation pass.
//!
//! Rules that need the enclosing record override
//! [`validate_in`](Rule::validate_in) and read it from the [`RuleContext`].
//! Because the context arrives as an argument, the same rule instance can be
//! shared between identifiers, records and threads.

use crate::foundation::context::RuleContext;
use crate::foundation::error::RuleResult;
use crate::foundation::value::{Record, Value};
use std::borrow::Cow;
use std::sync::Arc;

// ============================================================================
// CORE RULE TRAIT
// ============================================================================

/// A named, reusable validation predicate over a single value.
///
/// # Examples
///
/// ```rust,ignore
/// use strata_validator::foundation::{Rule, RuleError, RuleResult, Value};
///
/// struct NotBlank;
///
/// impl Rule for NotBlank {
///     fn validate(&self, value: &Value<'_>) -> RuleResult {
///         match value.as_str() {
///             Some(s) if !s.trim().is_empty() => Ok(()),
///             Some(_) => Err(RuleError::invalid("value must not be blank")),
///             None => Err(RuleError::invalid("value must be a string")),
///         }
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Validates a value without any surrounding context.
    fn validate(&self, value: &Value<'_>) -> RuleResult;

    /// Validates a value with access to its enclosing records and
    /// annotation arguments.
    ///
    /// The engine always calls this method. The default ignores the context.
    fn validate_in(&self, value: &Value<'_>, ctx: &RuleContext<'_>) -> RuleResult {
        let _ = ctx;
        self.validate(value)
    }

    /// Diagnostic name, used in logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<R: Rule + ?Sized> Rule for &R {
    fn validate(&self, value: &Value<'_>) -> RuleResult {
        (**self).validate(value)
    }

    fn validate_in(&self, value: &Value<'_>, ctx: &RuleContext<'_>) -> RuleResult {
        (**self).validate_in(value, ctx)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    fn validate(&self, value: &Value<'_>) -> RuleResult {
        (**self).validate(value)
    }

    fn validate_in(&self, value: &Value<'_>, ctx: &RuleContext<'_>) -> RuleResult {
        (**self).validate_in(value, ctx)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<R: Rule + ?Sized> Rule for Arc<R> {
    fn validate(&self, value: &Value<'_>) -> RuleResult {
        (**self).validate(value)
    }

    fn validate_in(&self, value: &Value<'_>, ctx: &RuleContext<'_>) -> RuleResult {
        (**self).validate_in(value, ctx)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Shared, type-erased rule as stored by the registry.
pub type SharedRule = Arc<dyn Rule>;

// ============================================================================
// RULE EXTENSION TRAIT
// ============================================================================

/// Fluent combinator methods, implemented for every [`Rule`].
///
/// # Examples
///
/// ```rust,ignore
/// use strata_validator::prelude::*;
///
/// let rule = length(2, 20).each().with_message("every tag needs 2-20 chars");
/// let premium_only = required().if_field("Premium");
/// ```
pub trait RuleExt: Rule + Sized + 'static {
    /// Replaces the failure message of this rule.
    fn with_message(self, message: impl Into<Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }

    /// Applies this rule to every element of a sequence.
    fn each(self) -> Each<Self> {
        Each::new(self)
    }

    /// Runs this rule only when `condition` holds for the enclosing record.
    fn when<C>(self, condition: C) -> When
    where
        C: Fn(&dyn Record) -> bool + Send + Sync + 'static,
    {
        When::new(Predicate::func(condition), self)
    }

    /// Runs this rule only when the boolean sibling `field` is `true`.
    fn if_field(self, field: impl Into<String>) -> When {
        When::new(Predicate::field(field), self)
    }

    /// Runs this rule only when the boolean sibling `field` is `false`.
    fn unless_field(self, field: impl Into<String>) -> When {
        When::new(Predicate::not_field(field), self)
    }

    /// Erases the concrete type.
    fn shared(self) -> SharedRule {
        Arc::new(self)
    }
}

impl<R: Rule + 'static> RuleExt for R {}

pub use crate::combinators::each::Each;
pub use crate::combinators::message::WithMessage;
pub use crate::combinators::when::{Predicate, When};

// ============================================================================
// TESTS
// ============================================================================
