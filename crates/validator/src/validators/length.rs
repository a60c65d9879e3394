//! Length validators
//!
//! Strings are measured in characters; sequences and maps by entry count.

use crate::foundation::RuleError;

crate::rule! {
    /// Validates the length of a string, sequence or map.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Length { min: usize, max: Option<usize> };
    check(self, value) {
        let len = value
            .len()
            .ok_or_else(|| RuleError::invalid("value must be a sequence, map, or string"))?;
        match self.max {
            _ if len < self.min => Err(RuleError::invalid(format!(
                "length must be at least {}",
                self.min
            ))),
            Some(max) if len > max => Err(RuleError::invalid(format!(
                "length must not exceed {max}"
            ))),
            _ => Ok(()),
        }
    }
    new(min: usize, max: usize) { Self { min, max: Some(max) } }
    fn length(min: usize, max: usize);
}

impl Length {
    /// Only a lower bound.
    #[must_use]
    pub fn at_least(min: usize) -> Self {
        Self { min, max: None }
    }

    /// Only an upper bound.
    #[must_use]
    pub fn at_most(max: usize) -> Self {
        Self { min: 0, max: Some(max) }
    }
}

/// Validates that the length is at least `min`.
#[must_use]
pub fn min_length(min: usize) -> Length {
    Length::at_least(min)
}

/// Validates that the length is at most `max`.
#[must_use]
pub fn max_length(max: usize) -> Length {
    Length::at_most(max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Inspect, Rule, Value};

    #[test]
    fn test_string_length_counts_characters() {
        assert!(length(2, 3).validate(&"äöü".inspect()).is_ok());
        assert_eq!(
            length(2, 3).validate(&"a".inspect()),
            Err(RuleError::invalid("length must be at least 2"))
        );
        assert_eq!(
            length(2, 3).validate(&"abcd".inspect()),
            Err(RuleError::invalid("length must not exceed 3"))
        );
    }

    #[test]
    fn test_collections() {
        assert!(min_length(1).validate(&vec!["a"].inspect()).is_ok());
        assert!(min_length(1).validate(&Vec::<String>::new().inspect()).is_err());
        assert!(max_length(1).validate(&Value::Map(vec![])).is_ok());
    }

    #[test]
    fn test_unmeasurable() {
        assert_eq!(
            min_length(1).validate(&Value::Int(5)),
            Err(RuleError::invalid("value must be a sequence, map, or string"))
        );
    }
}
