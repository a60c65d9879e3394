//! Error types for validation failures
//!
//! Two disjoint classes of problems are reported:
//!
//! - **Validation failures**: a field's value does not satisfy a rule. The
//!   data is wrong.
//! - **Configuration errors**: the validator itself is set up wrongly
//!   (unregistered rule identifier, conditional rule pointing at a missing
//!   field, non-record input). The program is wrong.
//!
//! Rules report either class through [`RuleError`]. The engine turns every
//! rule failure into a [`ValidationError`] tagged with an [`ErrorKind`] and
//! collects them, in discovery order, into [`ValidationErrors`].

use crate::foundation::value::ValueKind;
use crate::path::FieldPath;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

// ============================================================================
// RULE-LEVEL ERRORS
// ============================================================================

/// Setup mistakes detected while validating.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A rule annotation names an identifier that was never registered.
    #[error("rule `{identifier}` is not registered")]
    UnknownRule { identifier: String },

    /// A rule annotation could not be parsed.
    #[error("invalid rule specification `{spec}`: {reason}")]
    InvalidRuleSpec { spec: String, reason: String },

    /// A rule refers to a sibling field the enclosing record does not have.
    #[error("field {field} not found")]
    MissingField { field: String },

    /// A field-name predicate points at a non-boolean field.
    #[error("field {field} is not a boolean")]
    NotBoolean { field: String },

    /// A context-consuming rule ran without an enclosing record.
    #[error("enclosing record not available")]
    ContextUnbound,

    /// The validated input is not a record.
    #[error("input must be a record, got {found}")]
    NotARecord { found: ValueKind },

    /// The validated input is absent.
    #[error("input must not be absent")]
    AbsentRoot,

    /// Record nesting exceeded the configured limit.
    #[error("maximum nesting depth of {limit} exceeded")]
    DepthExceeded { limit: usize },

    /// A parameterized rule was selected without a required argument.
    #[error("rule `{rule}` expects an argument at position {position}")]
    MissingArgument { rule: String, position: usize },

    /// A parameterized rule received an unparsable argument.
    #[error("rule `{rule}` received invalid argument `{value}`: {reason}")]
    InvalidArgument {
        rule: String,
        value: String,
        reason: String,
    },
}

/// Outcome of a failing rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// The value does not satisfy the rule.
    #[error("{0}")]
    Invalid(Cow<'static, str>),

    /// The rule could not be evaluated because of a setup mistake.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl RuleError {
    /// Creates a validation failure with a human-readable message.
    pub fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Invalid(message.into())
    }

    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Prefixes the message of a validation failure, keeping configuration
    /// errors untouched.
    #[must_use]
    pub fn prefixed(self, prefix: impl fmt::Display) -> Self {
        match self {
            Self::Invalid(message) => Self::Invalid(format!("{prefix}: {message}").into()),
            config @ Self::Config(_) => config,
        }
    }
}

/// Result type returned by rules.
pub type RuleResult = Result<(), RuleError>;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Which class of problem a [`ValidationError`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The data violates a rule (default).
    #[default]
    Validation,
    /// The validator is misconfigured.
    Configuration,
}

/// A single failure tagged with the path of the field it concerns.
///
/// Immutable once constructed.
///
/// # Examples
///
/// ```rust,ignore
/// use strata_validator::foundation::ValidationError;
/// use strata_validator::path::FieldPath;
///
/// let error = ValidationError::new(FieldPath::root().field("Name"), "value is required");
/// assert_eq!(error.to_string(), "Name: value is required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    field: FieldPath,
    message: Cow<'static, str>,
    kind: ErrorKind,
}

impl ValidationError {
    /// Creates a validation failure.
    pub fn new(field: FieldPath, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            field,
            message: message.into(),
            kind: ErrorKind::Validation,
        }
    }

    /// Creates a configuration error.
    pub fn configuration(field: FieldPath, error: &ConfigError) -> Self {
        Self {
            field,
            message: error.to_string().into(),
            kind: ErrorKind::Configuration,
        }
    }

    /// Translates a rule failure raised at `field`.
    pub fn from_rule(field: FieldPath, error: RuleError) -> Self {
        match error {
            RuleError::Invalid(message) => Self::new(field, message),
            RuleError::Config(config) => Self::configuration(field, &config),
        }
    }

    #[must_use]
    pub fn field(&self) -> &FieldPath {
        &self.field
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[must_use]
    pub fn is_configuration(&self) -> bool {
        self.kind == ErrorKind::Configuration
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// Insertion-ordered collection of [`ValidationError`]s.
///
/// An empty collection means "valid".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Appends an error.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Appends every error of `other`, preserving order.
    pub fn merge(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Errors reported for exactly `path` (rendered form).
    pub fn for_field<'s>(&'s self, path: &'s str) -> impl Iterator<Item = &'s ValidationError> {
        self.errors.iter().filter(move |e| e.field == *path)
    }

    /// Errors that report a misconfigured validator.
    pub fn configuration_errors(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(|e| e.is_configuration())
    }

    #[must_use]
    pub fn has_configuration_errors(&self) -> bool {
        self.errors.iter().any(ValidationError::is_configuration)
    }

    /// `Ok(ok_value)` when empty, `Err(self)` otherwise.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }

    /// Converts the collection to a JSON array of `{field, message, kind}`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.errors
                .iter()
                .map(|e| {
                    serde_json::json!({
                        "field": e.field.to_string(),
                        "message": e.message,
                        "kind": e.kind,
                    })
                })
                .collect(),
        )
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// `; `-joined `field: message` entries.
impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================
