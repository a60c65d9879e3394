//! Membership validators over literal values

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::foundation::{RuleError, Value};

// ============================================================================
// LITERAL
// ============================================================================

/// An owned scalar that rule values are compared against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Literal {
    /// Reads a literal from annotation text: integers, floats and booleans
    /// are recognised, everything else is a string.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if let Ok(n) = raw.parse::<i64>() {
            Self::Int(n)
        } else if let Ok(n) = raw.parse::<f64>() {
            Self::Float(n)
        } else if let Ok(b) = raw.parse::<bool>() {
            Self::Bool(b)
        } else {
            Self::Str(raw.to_string())
        }
    }

    /// Compares against an inspected value. Numbers compare by magnitude
    /// regardless of integer or float representation.
    #[must_use]
    pub fn matches(&self, value: &Value<'_>) -> bool {
        match self {
            Self::Bool(b) => value.as_bool() == Some(*b),
            Self::Int(n) => value.as_f64() == Some(*n as f64),
            Self::Float(n) => value.as_f64() == Some(*n),
            Self::Str(s) => value.as_str() == Some(s.as_str()),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for Literal {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

// ============================================================================
// ONE OF
// ============================================================================

crate::rule! {
    /// Validates that a value equals one of a fixed set of literals.
    #[derive(PartialEq)]
    pub OneOf { values: Vec<Literal> };
    check(self, value) {
        if self.values.iter().any(|literal| literal.matches(value)) {
            Ok(())
        } else {
            Err(RuleError::invalid(format!("value must be one of: {}", self)))
        }
    }
    new(values: Vec<Literal>) { Self { values } }
    fn one_of_literals(values: Vec<Literal>);
}

impl OneOf {
    #[must_use]
    pub fn values(&self) -> &[Literal] {
        &self.values
    }
}

/// Renders the accepted set as `[a b c]`.
impl fmt::Display for OneOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, literal) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{literal}")?;
        }
        f.write_str("]")
    }
}

/// Creates a [`OneOf`] rule from anything convertible to [`Literal`].
///
/// ```rust,ignore
/// let status = one_of(["draft", "published"]);
/// ```
pub fn one_of<I>(values: I) -> OneOf
where
    I: IntoIterator,
    I::Item: Into<Literal>,
{
    OneOf::new(values.into_iter().map(Into::into).collect())
}
