//! Rules built from annotation arguments
//!
//! An annotation such as `min=3` or `range:1:10` selects a registered rule
//! and hands it string arguments. [`Parameterized`] adapts a factory over
//! those arguments into an ordinary [`Rule`] that builds the concrete rule
//! from [`RuleContext::args`] and runs it.
//!
//! Built rules are memoized per argument list, so a `pattern=...`
//! annotation compiles its regex once rather than on every field visit.
//! Factory errors are not cached.

use std::fmt;
use std::sync::Arc;

use moka::sync::Cache;

use crate::foundation::{ConfigError, Rule, RuleArgs, RuleContext, RuleResult, SharedRule, Value};

type Factory = dyn Fn(RuleArgs<'_>) -> Result<Box<dyn Rule>, ConfigError> + Send + Sync;

/// Default number of distinct argument lists kept per rule.
const DEFAULT_CACHE_CAPACITY: u64 = 256;

/// A rule whose configuration comes from annotation arguments.
///
/// # Examples
///
/// ```rust,ignore
/// use strata_validator::prelude::*;
///
/// let min_rule = parameterized("min", |args| Ok(Box::new(min(args.parse("min", 0)?))));
/// registry.register_named("min", min_rule);
/// ```
#[derive(Clone)]
pub struct Parameterized {
    name: &'static str,
    factory: Arc<Factory>,
    built: Arc<Cache<Vec<String>, SharedRule>>,
}

impl Parameterized {
    pub fn new<F>(name: &'static str, factory: F) -> Self
    where
        F: Fn(RuleArgs<'_>) -> Result<Box<dyn Rule>, ConfigError> + Send + Sync + 'static,
    {
        Self {
            name,
            factory: Arc::new(factory),
            built: Arc::new(Cache::new(DEFAULT_CACHE_CAPACITY)),
        }
    }

    /// Builds a fresh concrete rule for the given arguments.
    pub fn build(&self, args: RuleArgs<'_>) -> Result<Box<dyn Rule>, ConfigError> {
        (self.factory)(args)
    }

    /// Returns the memoized rule for `args`, building it on first use.
    pub fn resolve(&self, args: RuleArgs<'_>) -> Result<SharedRule, ConfigError> {
        if let Some(rule) = self.built.get(args.as_slice()) {
            return Ok(rule);
        }
        let rule: SharedRule = Arc::from(self.build(args)?);
        self.built.insert(args.as_slice().to_vec(), Arc::clone(&rule));
        Ok(rule)
    }
}

impl Rule for Parameterized {
    fn validate(&self, value: &Value<'_>) -> RuleResult {
        self.resolve(RuleArgs::EMPTY)?.validate(value)
    }

    fn validate_in(&self, value: &Value<'_>, ctx: &RuleContext<'_>) -> RuleResult {
        self.resolve(ctx.args())?.validate_in(value, ctx)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for Parameterized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameterized")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Creates a [`Parameterized`] rule.
pub fn parameterized<F>(name: &'static str, factory: F) -> Parameterized
where
    F: Fn(RuleArgs<'_>) -> Result<Box<dyn Rule>, ConfigError> + Send + Sync + 'static,
{
    Parameterized::new(name, factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Record, RuleError};
    use crate::path::FieldPath;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct AtLeast(i64);

    impl Rule for AtLeast {
        fn validate(&self, value: &Value<'_>) -> RuleResult {
            match value {
                Value::Int(n) if *n >= self.0 => Ok(()),
                _ => Err(RuleError::invalid(format!("value must be at least {}", self.0))),
            }
        }
    }

    fn at_least() -> Parameterized {
        parameterized("at_least", |args| {
            Ok(Box::new(AtLeast(args.parse("at_least", 0)?)))
        })
    }

    #[test]
    fn test_arguments_from_context() {
        let path = FieldPath::root().field("Qty");
        let chain: [&dyn Record; 0] = [];
        let raw = vec!["5".to_string()];
        let ctx = RuleContext::new(&path, &chain).with_args(&raw);

        assert!(at_least().validate_in(&Value::Int(5), &ctx).is_ok());
        assert_eq!(
            at_least().validate_in(&Value::Int(4), &ctx),
            Err(RuleError::invalid("value must be at least 5"))
        );
    }

    #[test]
    fn test_missing_argument_is_configuration_error() {
        assert_eq!(
            at_least().validate(&Value::Int(1)),
            Err(RuleError::Config(ConfigError::MissingArgument {
                rule: "at_least".into(),
                position: 0,
            }))
        );
    }

    #[test]
    fn test_name() {
        assert_eq!(at_least().name(), "at_least");
    }

    #[test]
    fn test_built_rule_is_reused_per_argument_list() {
        let builds = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&builds);
        let rule = parameterized("at_least", move |args| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(AtLeast(args.parse("at_least", 0)?)))
        });

        let path = FieldPath::root().field("Qty");
        let chain: [&dyn Record; 0] = [];
        let five = vec!["5".to_string()];
        let nine = vec!["9".to_string()];

        for _ in 0..3 {
            let ctx = RuleContext::new(&path, &chain).with_args(&five);
            assert!(rule.validate_in(&Value::Int(6), &ctx).is_ok());
        }
        assert_eq!(builds.load(Ordering::SeqCst), 1);

        let ctx = RuleContext::new(&path, &chain).with_args(&nine);
        assert!(rule.validate_in(&Value::Int(6), &ctx).is_err());
        assert_eq!(builds.load(Ordering::SeqCst), 2);

        // clones share the memoized rules
        let ctx = RuleContext::new(&path, &chain).with_args(&five);
        assert!(rule.clone().validate_in(&Value::Int(6), &ctx).is_ok());
        assert_eq!(builds.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_build_errors_are_not_cached() {
        let builds = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&builds);
        let rule = parameterized("at_least", move |args| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(AtLeast(args.parse("at_least", 0)?)))
        });

        assert!(rule.validate(&Value::Int(1)).is_err());
        assert!(rule.validate(&Value::Int(1)).is_err());
        assert_eq!(builds.load(Ordering::SeqCst), 2);
    }
}
