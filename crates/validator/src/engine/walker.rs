//! Depth-first structural walk
//!
//! Fields are visited in declaration order. For each field the walker first
//! descends into its structure (nested record, sequence elements, map
//! entries) and then dispatches the field's own rules, so errors from inside
//! a nested record precede errors about the field holding it.
//!
//! Sequence elements and map entries are themselves dispatched under
//! `Field[i]` / `Field[key]`, which lets rules registered as `Tags[]` check
//! every element.

use crate::config::ValidatorConfig;
use crate::engine::dispatch::{Dispatcher, report};
use crate::foundation::{ConfigError, Record, ValidationErrors, Value};
use crate::path::FieldPath;
use crate::registry::Registry;

/// Walks a single input and collects every error found.
pub(crate) struct Walker<'v> {
    dispatcher: Dispatcher<'v>,
    max_depth: usize,
    errors: ValidationErrors,
}

impl<'v> Walker<'v> {
    pub(crate) fn new(registry: &'v Registry, config: &'v ValidatorConfig) -> Self {
        Self {
            dispatcher: Dispatcher::new(registry, config),
            max_depth: config.max_depth,
            errors: ValidationErrors::new(),
        }
    }

    /// Validates `root`, which must be a record.
    ///
    /// Absent and non-record roots are reported as configuration errors
    /// under the reserved `input` field.
    pub(crate) fn run(mut self, root: &Value<'_>) -> ValidationErrors {
        match root {
            Value::Record(record) => {
                let mut ancestors = Vec::with_capacity(4);
                self.walk_record(*record, &FieldPath::root(), &mut ancestors);
            }
            Value::Absent => report(&FieldPath::input(), &ConfigError::AbsentRoot, &mut self.errors),
            other => report(
                &FieldPath::input(),
                &ConfigError::NotARecord { found: other.kind() },
                &mut self.errors,
            ),
        }
        self.errors
    }

    fn walk_record<'a>(
        &mut self,
        record: &'a dyn Record,
        path: &FieldPath,
        ancestors: &mut Vec<&'a dyn Record>,
    ) {
        if ancestors.len() >= self.max_depth {
            let at = if path.is_root() { FieldPath::input() } else { path.clone() };
            report(
                &at,
                &ConfigError::DepthExceeded { limit: self.max_depth },
                &mut self.errors,
            );
            return;
        }

        ancestors.push(record);
        for field in record.fields() {
            let child = path.field(field.name);
            self.descend(&field.value, &child, ancestors);
            self.dispatcher
                .dispatch(&field.value, &child, field.rules, ancestors, &mut self.errors);
        }
        ancestors.pop();
    }

    fn descend<'a>(
        &mut self,
        value: &Value<'a>,
        path: &FieldPath,
        ancestors: &mut Vec<&'a dyn Record>,
    ) {
        match value {
            Value::Record(nested) => self.walk_record(*nested, path, ancestors),
            Value::Seq(items) => {
                for (index, item) in items.iter().enumerate() {
                    let child = path.index(index);
                    self.descend(item, &child, ancestors);
                    self.dispatcher
                        .dispatch(item, &child, None, ancestors, &mut self.errors);
                }
            }
            Value::Map(entries) => {
                for (key, item) in entries {
                    let child = path.key(key.as_str());
                    self.descend(item, &child, ancestors);
                    self.dispatcher
                        .dispatch(item, &child, None, ancestors, &mut self.errors);
                }
            }
            _ => {}
        }
    }
}
