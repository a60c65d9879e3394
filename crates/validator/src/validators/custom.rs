//! Closure-backed rules

use std::fmt;
use std::sync::Arc;

use crate::foundation::{Rule, RuleResult, Value};

type Check = dyn Fn(&Value<'_>) -> RuleResult + Send + Sync;

/// Wraps a closure as a [`Rule`].
///
/// Unlike the other built-in rules the closure also sees absent values.
///
/// ```rust,ignore
/// let even = custom(|value| match value {
///     Value::Int(n) if n % 2 == 0 => Ok(()),
///     _ => Err(RuleError::invalid("value must be even")),
/// });
/// ```
#[derive(Clone)]
pub struct Custom {
    check: Arc<Check>,
}

impl Custom {
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&Value<'_>) -> RuleResult + Send + Sync + 'static,
    {
        Self {
            check: Arc::new(check),
        }
    }
}

impl Rule for Custom {
    fn validate(&self, value: &Value<'_>) -> RuleResult {
        (self.check)(value)
    }
}

impl fmt::Debug for Custom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom").finish_non_exhaustive()
    }
}

/// Creates a [`Custom`] rule.
pub fn custom<F>(check: F) -> Custom
where
    F: Fn(&Value<'_>) -> RuleResult + Send + Sync + 'static,
{
    Custom::new(check)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::RuleError;

    #[test]
    fn test_custom() {
        let even = custom(|value| match value {
            Value::Int(n) if n % 2 == 0 => Ok(()),
            _ => Err(RuleError::invalid("value must be even")),
        });
        assert!(even.validate(&Value::Int(2)).is_ok());
        assert_eq!(
            even.validate(&Value::Absent),
            Err(RuleError::invalid("value must be even"))
        );
    }
}
