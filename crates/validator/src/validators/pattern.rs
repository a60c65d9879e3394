//! Regular expression validator

use regex::Regex;

use crate::foundation::RuleError;

crate::rule! {
    /// Validates that a string matches a regular expression.
    ///
    /// The expression is unanchored; use `^...$` to match the whole value.
    pub Pattern { regex: Regex };
    check(self, value) {
        let s = value
            .as_str()
            .ok_or_else(|| RuleError::invalid("value must be a string"))?;
        if self.regex.is_match(s) {
            Ok(())
        } else {
            Err(RuleError::invalid(format!(
                "value does not match pattern {}",
                self.regex.as_str()
            )))
        }
    }
    fn matches(regex: Regex);
}

impl Pattern {
    /// Compiles `pattern` into a rule.
    pub fn compile(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self::new)
    }

    /// The source of the expression.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// Compiles `pattern` into a [`Pattern`] rule.
pub fn pattern(pattern: &str) -> Result<Pattern, regex::Error> {
    Pattern::compile(pattern)
}
