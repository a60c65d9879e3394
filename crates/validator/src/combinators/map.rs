//! MAP combinators - validate the keys and values of a map

use crate::foundation::{Rule, RuleContext, RuleError, RuleResult, Value};

// ============================================================================
// MAP COMBINATOR
// ============================================================================

/// Validates every key and every value of a map.
///
/// Keys are checked as strings. Entries are visited in map order and the
/// first failure is reported, either as `invalid map key: <message>` or as
/// `invalid map value for key K: <message>`. Absent values pass.
///
/// # Examples
///
/// ```rust,ignore
/// use strata_validator::prelude::*;
///
/// let rule = map_of(min_length(2), positive());
/// let scores = BTreeMap::from([("ana", 3), ("bo", 0)]);
/// assert_eq!(
///     rule.validate(&scores.inspect()).unwrap_err().to_string(),
///     "invalid map value for key bo: value must be positive"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MapOf<K, V> {
    keys: K,
    values: V,
}

impl<K, V> MapOf<K, V> {
    pub fn new(keys: K, values: V) -> Self {
        Self { keys, values }
    }

    pub fn key_rule(&self) -> &K {
        &self.keys
    }

    pub fn value_rule(&self) -> &V {
        &self.values
    }
}

fn entries<'v, 'a>(value: &'v Value<'a>) -> Result<&'v [(String, Value<'a>)], RuleError> {
    match value {
        Value::Absent => Ok(&[]),
        Value::Map(entries) => Ok(entries),
        _ => Err(RuleError::invalid("value must be a map")),
    }
}

impl<K: Rule, V: Rule> MapOf<K, V> {
    fn check(
        &self,
        value: &Value<'_>,
        mut run: impl FnMut(&dyn Rule, &Value<'_>) -> RuleResult,
    ) -> RuleResult {
        for (key, item) in entries(value)? {
            run(&self.keys, &Value::Str(key)).map_err(|e| e.prefixed("invalid map key"))?;
            run(&self.values, item)
                .map_err(|e| e.prefixed(format_args!("invalid map value for key {key}")))?;
        }
        Ok(())
    }
}

impl<K: Rule, V: Rule> Rule for MapOf<K, V> {
    fn validate(&self, value: &Value<'_>) -> RuleResult {
        self.check(value, |rule, item| rule.validate(item))
    }

    fn validate_in(&self, value: &Value<'_>, ctx: &RuleContext<'_>) -> RuleResult {
        self.check(value, |rule, item| rule.validate_in(item, ctx))
    }
}

/// Creates a [`MapOf`] combinator.
pub fn map_of<K, V>(keys: K, values: V) -> MapOf<K, V> {
    MapOf::new(keys, values)
}

// ============================================================================
// KEYS COMBINATOR
// ============================================================================

/// Validates the keys of a map, leaving values unchecked.
///
/// The first failing key is reported as `map key K failed validation: <message>`.
#[derive(Debug, Clone, Copy)]
pub struct Keys<R> {
    inner: R,
}

impl<R> Keys<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<R: Rule> Keys<R> {
    fn check(&self, value: &Value<'_>, mut run: impl FnMut(&R, &Value<'_>) -> RuleResult) -> RuleResult {
        for (key, _) in entries(value)? {
            run(&self.inner, &Value::Str(key))
                .map_err(|e| e.prefixed(format_args!("map key {key} failed validation")))?;
        }
        Ok(())
    }
}

impl<R: Rule> Rule for Keys<R> {
    fn validate(&self, value: &Value<'_>) -> RuleResult {
        self.check(value, |rule, key| rule.validate(key))
    }

    fn validate_in(&self, value: &Value<'_>, ctx: &RuleContext<'_>) -> RuleResult {
        self.check(value, |rule, key| rule.validate_in(key, ctx))
    }
}

/// Creates a [`Keys`] combinator.
pub fn keys<R>(rule: R) -> Keys<R> {
    Keys::new(rule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Inspect;
    use crate::validators::{min_length, positive};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::collections::BTreeMap;

    fn scores(entries: &[(&'static str, i64)]) -> BTreeMap<&'static str, i64> {
        entries.iter().copied().collect()
    }

    #[rstest]
    #[case::all_valid(&[("ana", 3), ("bo", 1)], None)]
    #[case::empty(&[], None)]
    #[case::short_key(&[("a", 3)], Some("invalid map key: length must be at least 2"))]
    #[case::bad_value(
        &[("ana", 3), ("bo", 0)],
        Some("invalid map value for key bo: value must be positive")
    )]
    #[case::key_checked_before_value(
        &[("x", 0)],
        Some("invalid map key: length must be at least 2")
    )]
    fn test_map_of(#[case] entries: &[(&'static str, i64)], #[case] expected: Option<&str>) {
        let result = map_of(min_length(2), positive()).validate(&scores(entries).inspect());
        assert_eq!(result.err().map(|e| e.to_string()).as_deref(), expected);
    }

    #[rstest]
    #[case::all_valid(&[("ana", -1), ("bo", -2)], None)]
    #[case::short_key(&[("ana", 1), ("z", 1)], Some("map key z failed validation: length must be at least 2"))]
    fn test_keys(#[case] entries: &[(&'static str, i64)], #[case] expected: Option<&str>) {
        let result = keys(min_length(2)).validate(&scores(entries).inspect());
        assert_eq!(result.err().map(|e| e.to_string()).as_deref(), expected);
    }

    #[test]
    fn test_absent_passes() {
        let none: Option<BTreeMap<String, i64>> = None;
        assert!(map_of(min_length(2), positive()).validate(&Inspect::inspect(&none)).is_ok());
        assert!(keys(min_length(2)).validate(&Inspect::inspect(&none)).is_ok());
    }

    #[test]
    fn test_non_map() {
        let expected = Err(RuleError::invalid("value must be a map"));
        assert_eq!(map_of(min_length(2), positive()).validate(&vec![1_i64].inspect()), expected);
        assert_eq!(keys(min_length(2)).validate(&Value::Int(1)), expected);
    }
}
