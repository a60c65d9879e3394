//! Prelude module for convenient imports.
//!
//! Provides a single `use strata_validator::prelude::*;` import that brings
//! in the validator, the rule traits, built-in rules and combinators.
//!
//! # Examples
//!
//! ```rust,ignore
//! use strata_validator::prelude::*;
//!
//! let validator = Validator::new()
//!     .rule("Name", required())
//!     .rule("Tags[]", length(2, 20))
//!     .rule("PremiumUntil", if_field("Premium", required()));
//! ```

// ============================================================================
// ENGINE
// ============================================================================

pub use crate::config::{ContextScope, ValidatorConfig};
pub use crate::engine::Validator;
pub use crate::path::FieldPath;
pub use crate::registry::Registry;

// ============================================================================
// FOUNDATION: Core traits, values, errors
// ============================================================================

pub use crate::foundation::{
    ConfigError, ErrorKind, Field, Inspect, Record, Rule, RuleArgs, RuleContext, RuleError,
    RuleExt, RuleResult, SharedRule, ValidationError, ValidationErrors, Value, ValueKind,
};

// ============================================================================
// VALIDATORS: All built-in rules
// ============================================================================

pub use crate::validators::{
    Contains, Custom, JsonString, Length, Literal, OneOf, Pattern, Positive, Range, Required,
    Unique, contains, custom, json, length, max, max_length, min, min_length, one_of, pattern,
    positive, range, required, unique,
};

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    CrossField, DependentRequired, Each, Keys, MapOf, Parameterized, Predicate, When,
    WithMessage, cross_field, dependent_required, each, equals_field, if_field, keys, map_of,
    parameterized, sibling, unless_field, when, with_message,
};
