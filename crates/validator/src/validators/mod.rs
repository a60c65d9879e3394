//! Built-in leaf rules
//!
//! Ready-to-use rules for common checks. Each one is an ordinary
//! [`Rule`](crate::foundation::Rule) value that can be bound to any number of
//! identifiers.
//!
//! # Categories
//!
//! - **Presence**: [`required`]
//! - **Numeric**: [`range`], [`min`], [`max`], [`positive`]
//! - **Length**: [`length`], [`min_length`], [`max_length`]
//! - **String**: [`pattern`], [`json`]
//! - **Membership**: [`one_of`], [`contains`], [`unique`]
//! - **Ad hoc**: [`custom`]
//!
//! [`register_builtins`] makes the annotation-addressable subset available
//! in the registry's named table under short names (`required`, `min=3`,
//! `range:1:10`, ...).

pub mod choice;
pub mod collection;
pub mod custom;
pub mod json_string;
pub mod length;
pub mod nullable;
pub mod pattern;
pub mod range;

pub use choice::{Literal, OneOf, one_of, one_of_literals};
pub use collection::{Contains, Unique, contains, unique};
pub use custom::{Custom, custom};
pub use json_string::{JsonString, json};
pub use length::{Length, length, max_length, min_length};
pub use nullable::{Required, required};
pub use pattern::{Pattern, matches, pattern};
pub use range::{Positive, Range, max, min, positive, range};

use crate::combinators::parameterized;
use crate::foundation::{ConfigError, Rule, RuleArgs};
use crate::registry::Registry;

// ============================================================================
// ANNOTATION NAMES
// ============================================================================

/// Registers the built-in rules under their annotation names.
///
/// | name       | arguments            | rule                |
/// |------------|----------------------|---------------------|
/// | `required` |                      | [`Required`]        |
/// | `min`      | `min=N`              | [`Range::at_least`] |
/// | `max`      | `max=N`              | [`Range::at_most`]  |
/// | `range`    | `range:MIN:MAX`      | [`Range`]           |
/// | `length`   | `length:MIN[:MAX]`   | [`Length`]          |
/// | `positive` |                      | [`Positive`]        |
/// | `pattern`  | `pattern=REGEX`      | [`Pattern`]         |
/// | `one_of`   | `one_of:a:b:c`       | [`OneOf`]           |
/// | `unique`   |                      | [`Unique`]          |
/// | `json`     |                      | [`JsonString`]      |
pub fn register_builtins(registry: &mut Registry) {
    registry.register_named("required", required());
    registry.register_named(
        "min",
        parameterized("min", |args| boxed(min(args.parse("min", 0)?))),
    );
    registry.register_named(
        "max",
        parameterized("max", |args| boxed(max(args.parse("max", 0)?))),
    );
    registry.register_named(
        "range",
        parameterized("range", |args| {
            boxed(range(args.parse("range", 0)?, args.parse("range", 1)?))
        }),
    );
    registry.register_named(
        "length",
        parameterized("length", |args| {
            let min = args.parse("length", 0)?;
            boxed(match args.parse_opt("length", 1)? {
                Some(max) => length(min, max),
                None => Length::at_least(min),
            })
        }),
    );
    registry.register_named("positive", positive());
    registry.register_named("pattern", parameterized("pattern", compile_pattern));
    registry.register_named(
        "one_of",
        parameterized("one_of", |args| {
            if args.is_empty() {
                return Err(ConfigError::MissingArgument {
                    rule: "one_of".to_string(),
                    position: 0,
                });
            }
            boxed(one_of(args.as_slice().iter().map(|raw| Literal::parse(raw))))
        }),
    );
    registry.register_named("unique", unique());
    registry.register_named("json", json());
}

#[allow(clippy::unnecessary_wraps)]
fn boxed(rule: impl Rule + 'static) -> Result<Box<dyn Rule>, ConfigError> {
    Ok(Box::new(rule))
}

fn compile_pattern(args: RuleArgs<'_>) -> Result<Box<dyn Rule>, ConfigError> {
    let source = args.get(0).ok_or_else(|| ConfigError::MissingArgument {
        rule: "pattern".to_string(),
        position: 0,
    })?;
    let rule = pattern(source).map_err(|e| ConfigError::InvalidArgument {
        rule: "pattern".to_string(),
        value: source.to_string(),
        reason: e.to_string(),
    })?;
    boxed(rule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        let mut registry = Registry::new();
        register_builtins(&mut registry);
        for name in [
            "required", "min", "max", "range", "length", "positive", "pattern", "one_of",
            "unique", "json",
        ] {
            assert!(registry.contains_named(name), "missing builtin {name}");
            assert!(registry.lookup(name).is_empty());
        }
        assert_eq!(registry.names().count(), 10);
    }
}
