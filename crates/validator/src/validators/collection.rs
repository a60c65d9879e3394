//! Sequence content validators

use crate::foundation::{RuleError, Value};
use crate::validators::choice::Literal;

fn sequence<'v, 'a>(value: &'v Value<'a>) -> Result<&'v [Value<'a>], RuleError> {
    value
        .as_seq()
        .ok_or_else(|| RuleError::invalid("value must be a sequence"))
}

crate::rule! {
    /// Validates that no two elements of a sequence are equal.
    pub Unique;
    check(value) {
        let items = sequence(value)?;
        for (i, item) in items.iter().enumerate() {
            if items[..i].contains(item) {
                return Err(RuleError::invalid(format!("duplicate value found: {item}")));
            }
        }
        Ok(())
    }
    fn unique();
}

crate::rule! {
    /// Validates that a sequence contains a given literal.
    #[derive(PartialEq)]
    pub Contains { needle: Literal };
    check(self, value) {
        if sequence(value)?.iter().any(|item| self.needle.matches(item)) {
            Ok(())
        } else {
            Err(RuleError::invalid(format!("value must contain {}", self.needle)))
        }
    }
    new(needle: impl Into<Literal>) { Self { needle: needle.into() } }
    fn contains(needle: impl Into<Literal>);
}
