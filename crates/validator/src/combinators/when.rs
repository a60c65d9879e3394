//! WHEN combinator - conditional validation
//!
//! [`When`] gates a rule on a predicate over the enclosing record. The
//! predicate is either an arbitrary function of the record or the value of a
//! boolean sibling field:
//!
//! - [`when`]: run `then` if `condition(record)` holds
//! - [`if_field`]: run `then` if the boolean field is `true`
//! - [`unless_field`]: run `then` if the boolean field is `false`
//!
//! An optional [`otherwise`](When::otherwise) rule runs when the predicate
//! does not hold. Both branches receive the same [`RuleContext`], so nested
//! conditionals and cross-field rules see the same enclosing record.
//!
//! # Examples
//!
//! ```rust,ignore
//! use strata_validator::prelude::*;
//!
//! // PremiumUntil is only mandatory for premium accounts
//! let rule = if_field("Premium", required());
//! ```

use std::fmt;
use std::sync::Arc;

use crate::foundation::{ConfigError, Record, Rule, RuleContext, RuleResult, SharedRule, Value};

type Condition = dyn Fn(&dyn Record) -> bool + Send + Sync;

// ============================================================================
// PREDICATE
// ============================================================================

/// Condition evaluated against the enclosing record.
#[derive(Clone)]
pub enum Predicate {
    /// Arbitrary function of the record.
    Fn(Arc<Condition>),
    /// Holds when the named boolean field is `true`.
    Field(String),
    /// Holds when the named boolean field is `false`.
    NotField(String),
}

impl Predicate {
    pub fn func<C>(condition: C) -> Self
    where
        C: Fn(&dyn Record) -> bool + Send + Sync + 'static,
    {
        Self::Fn(Arc::new(condition))
    }

    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }

    pub fn not_field(name: impl Into<String>) -> Self {
        Self::NotField(name.into())
    }

    /// Evaluates the predicate.
    ///
    /// Field-based predicates fail with a configuration error when the field
    /// does not exist or is not a boolean.
    pub fn evaluate(&self, record: &dyn Record) -> Result<bool, ConfigError> {
        match self {
            Self::Fn(condition) => Ok(condition(record)),
            Self::Field(name) => boolean_field(record, name),
            Self::NotField(name) => boolean_field(record, name).map(|flag| !flag),
        }
    }
}

fn boolean_field(record: &dyn Record, name: &str) -> Result<bool, ConfigError> {
    let value = record.field(name).ok_or_else(|| ConfigError::MissingField {
        field: name.to_string(),
    })?;
    value.as_bool().ok_or_else(|| ConfigError::NotBoolean {
        field: name.to_string(),
    })
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fn(_) => f.write_str("Fn(..)"),
            Self::Field(name) => f.debug_tuple("Field").field(name).finish(),
            Self::NotField(name) => f.debug_tuple("NotField").field(name).finish(),
        }
    }
}

// ============================================================================
// WHEN COMBINATOR
// ============================================================================

/// Conditionally applies a rule based on a [`Predicate`].
///
/// Called without a context (plain [`Rule::validate`]) this rule reports
/// [`ConfigError::ContextUnbound`], since there is no record to evaluate the
/// predicate against.
#[derive(Clone)]
pub struct When {
    predicate: Predicate,
    then: SharedRule,
    otherwise: Option<SharedRule>,
}

impl When {
    pub fn new(predicate: Predicate, then: impl Rule + 'static) -> Self {
        Self {
            predicate,
            then: Arc::new(then),
            otherwise: None,
        }
    }

    /// Sets the rule to run when the predicate does not hold.
    #[must_use = "builder methods must be chained or built"]
    pub fn otherwise(mut self, rule: impl Rule + 'static) -> Self {
        self.otherwise = Some(Arc::new(rule));
        self
    }

    /// Returns the predicate.
    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }
}

impl Rule for When {
    fn validate(&self, _value: &Value<'_>) -> RuleResult {
        Err(ConfigError::ContextUnbound.into())
    }

    fn validate_in(&self, value: &Value<'_>, ctx: &RuleContext<'_>) -> RuleResult {
        let record = ctx.require_record()?;
        if self.predicate.evaluate(record)? {
            self.then.validate_in(value, ctx)
        } else if let Some(otherwise) = &self.otherwise {
            otherwise.validate_in(value, ctx)
        } else {
            Ok(())
        }
    }
}

impl fmt::Debug for When {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("When")
            .field("predicate", &self.predicate)
            .field("then", &self.then.name())
            .field("otherwise", &self.otherwise.as_ref().map(|r| r.name()))
            .finish()
    }
}

/// Runs `then` when `condition` holds for the enclosing record.
pub fn when<C>(condition: C, then: impl Rule + 'static) -> When
where
    C: Fn(&dyn Record) -> bool + Send + Sync + 'static,
{
    When::new(Predicate::func(condition), then)
}

/// Runs `then` when the boolean sibling `field` is `true`.
pub fn if_field(field: impl Into<String>, then: impl Rule + 'static) -> When {
    When::new(Predicate::field(field), then)
}

/// Runs `then` when the boolean sibling `field` is `false`.
pub fn unless_field(field: impl Into<String>, then: impl Rule + 'static) -> When {
    When::new(Predicate::not_field(field), then)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Field, Inspect, RuleError};
    use crate::path::FieldPath;

    struct Account {
        premium: bool,
        tier: i64,
        until: String,
    }

    impl Record for Account {
        fn type_name(&self) -> &str {
            "Account"
        }

        fn fields(&self) -> Vec<Field<'_>> {
            vec![
                Field::new("Premium", self.premium.inspect()),
                Field::new("Tier", self.tier.inspect()),
                Field::new("PremiumUntil", self.until.inspect()),
            ]
        }
    }

    struct NotEmpty;

    impl Rule for NotEmpty {
        fn validate(&self, value: &Value<'_>) -> RuleResult {
            if value.is_zero() {
                Err(RuleError::invalid("value is required"))
            } else {
                Ok(())
            }
        }
    }

    struct Fails;

    impl Rule for Fails {
        fn validate(&self, _value: &Value<'_>) -> RuleResult {
            Err(RuleError::invalid("else branch"))
        }
    }

    fn run(rule: &When, account: &Account) -> RuleResult {
        let path = FieldPath::root().field("PremiumUntil");
        let chain: [&dyn Record; 1] = [account];
        let ctx = RuleContext::new(&path, &chain);
        rule.validate_in(&account.until.inspect(), &ctx)
    }

    fn account(premium: bool) -> Account {
        Account {
            premium,
            tier: 1,
            until: String::new(),
        }
    }

    #[test]
    fn test_if_field() {
        let rule = if_field("Premium", NotEmpty);
        assert!(run(&rule, &account(false)).is_ok());
        assert_eq!(
            run(&rule, &account(true)),
            Err(RuleError::invalid("value is required"))
        );
    }

    #[test]
    fn test_unless_field() {
        let rule = unless_field("Premium", NotEmpty);
        assert!(run(&rule, &account(true)).is_ok());
        assert!(run(&rule, &account(false)).is_err());
    }

    #[test]
    fn test_otherwise_branch() {
        let rule = if_field("Premium", NotEmpty).otherwise(Fails);
        assert_eq!(run(&rule, &account(false)), Err(RuleError::invalid("else branch")));
    }

    #[test]
    fn test_function_predicate() {
        let rule = when(
            |record: &dyn Record| record.field("Tier") == Some(Value::Int(1)),
            NotEmpty,
        );
        assert!(run(&rule, &account(false)).is_err());
    }

    #[test]
    fn test_missing_and_non_boolean_fields() {
        assert_eq!(
            run(&if_field("Nope", NotEmpty), &account(true)),
            Err(ConfigError::MissingField { field: "Nope".into() }.into())
        );
        assert_eq!(
            run(&if_field("Tier", NotEmpty), &account(true)),
            Err(ConfigError::NotBoolean { field: "Tier".into() }.into())
        );
    }

    #[test]
    fn test_without_context() {
        let rule = if_field("Premium", NotEmpty);
        assert_eq!(
            rule.validate(&Value::Str("")),
            Err(RuleError::Config(ConfigError::ContextUnbound))
        );
    }

    #[test]
    fn test_nested_conditionals_share_context() {
        let rule = if_field("Premium", if_field("Premium", NotEmpty));
        assert!(run(&rule, &account(true)).is_err());
        assert!(run(&rule, &account(false)).is_ok());
    }
}
