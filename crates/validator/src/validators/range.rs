//! Numeric range validators
//!
//! All numeric rules compare as `f64`; integers, unsigned integers and
//! floats are accepted alike. Non-numeric values fail with
//! `value must be numeric`.

use crate::foundation::{RuleError, Value};

fn numeric(value: &Value<'_>) -> Result<f64, RuleError> {
    value
        .as_f64()
        .ok_or_else(|| RuleError::invalid("value must be numeric"))
}

crate::rule! {
    /// Validates that a number lies within optional inclusive bounds.
    #[derive(Copy, PartialEq)]
    pub Range { min: Option<f64>, max: Option<f64> };
    check(self, value) {
        let n = numeric(value)?;
        match (self.min, self.max) {
            (Some(min), _) if n < min => Err(RuleError::invalid(format!(
                "value must be greater than or equal to {min}"
            ))),
            (_, Some(max)) if n > max => Err(RuleError::invalid(format!(
                "value must be less than or equal to {max}"
            ))),
            _ => Ok(()),
        }
    }
    new(min: f64, max: f64) { Self { min: Some(min), max: Some(max) } }
    fn range(min: f64, max: f64);
}

impl Range {
    /// Only a lower bound.
    #[must_use]
    pub fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Only an upper bound.
    #[must_use]
    pub fn at_most(max: f64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    #[must_use]
    pub fn lower(&self) -> Option<f64> {
        self.min
    }

    #[must_use]
    pub fn upper(&self) -> Option<f64> {
        self.max
    }
}

/// Validates that a number is at least `min`.
#[must_use]
pub fn min(min: f64) -> Range {
    Range::at_least(min)
}

/// Validates that a number is at most `max`.
#[must_use]
pub fn max(max: f64) -> Range {
    Range::at_most(max)
}

crate::rule! {
    /// Validates that a number is strictly greater than zero.
    pub Positive;
    check(value) {
        if numeric(value)? > 0.0 {
            Ok(())
        } else {
            Err(RuleError::invalid("value must be positive"))
        }
    }
    fn positive();
}
