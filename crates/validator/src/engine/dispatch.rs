//! Rule dispatch for a single field
//!
//! For one field the dispatcher runs, in order:
//!
//! 1. rules registered under the concrete path (`Items[0].Qty`),
//! 2. rules registered under the pattern path (`Items[].Qty`), when the
//!    pattern differs and wildcard lookup is enabled,
//! 3. rules named by the field's annotation, each with its arguments,
//!    resolved against the registry's named table only.
//!
//! Every rule runs; failures are appended in that order and never stop the
//! remaining rules.

use tracing::{trace, warn};

use crate::annotation::{self, RuleSpec};
use crate::config::ValidatorConfig;
use crate::foundation::{
    ConfigError, Record, RuleContext, RuleError, SharedRule, ValidationError, ValidationErrors,
    Value,
};
use crate::path::FieldPath;
use crate::registry::Registry;

/// Resolves and runs the rules bound to a field.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Dispatcher<'v> {
    registry: &'v Registry,
    config: &'v ValidatorConfig,
}

impl<'v> Dispatcher<'v> {
    pub(crate) fn new(registry: &'v Registry, config: &'v ValidatorConfig) -> Self {
        Self { registry, config }
    }

    /// Runs every rule that applies to the field at `path`.
    ///
    /// `ancestors` lists the enclosing records, root first; its last entry is
    /// the record that holds the field.
    pub(crate) fn dispatch(
        &self,
        value: &Value<'_>,
        path: &FieldPath,
        annotation: Option<&str>,
        ancestors: &[&dyn Record],
        errors: &mut ValidationErrors,
    ) {
        let concrete = path.to_string();
        let ctx = RuleContext::new(path, ancestors).with_scope(self.config.context_scope);

        let by_path = self.registry.lookup(&concrete);
        trace!(field = %concrete, rules = by_path.len(), "dispatching field");
        run_all(by_path, value, &ctx, errors);

        if self.config.wildcard_paths && path.has_wildcards() {
            let pattern = path.pattern();
            if pattern != concrete {
                run_all(self.registry.lookup(&pattern), value, &ctx, errors);
            }
        }

        if let Some(annotation) = annotation.filter(|_| self.config.annotations) {
            match annotation::parse(annotation) {
                Ok(specs) => {
                    for spec in &specs {
                        self.dispatch_spec(spec, value, &ctx, errors);
                    }
                }
                Err(error) => report(path, &error, errors),
            }
        }
    }

    fn dispatch_spec(
        &self,
        spec: &RuleSpec,
        value: &Value<'_>,
        ctx: &RuleContext<'_>,
        errors: &mut ValidationErrors,
    ) {
        if !self.registry.contains_named(spec.name()) {
            let error = ConfigError::UnknownRule {
                identifier: spec.name().to_string(),
            };
            report(ctx.path(), &error, errors);
            return;
        }
        let ctx = ctx.with_args(spec.args());
        run_all(self.registry.named(spec.name()), value, &ctx, errors);
    }
}

fn run_all(
    rules: &[SharedRule],
    value: &Value<'_>,
    ctx: &RuleContext<'_>,
    errors: &mut ValidationErrors,
) {
    for rule in rules {
        match rule.validate_in(value, ctx) {
            Ok(()) => {}
            Err(RuleError::Config(error)) => {
                warn!(field = %ctx.path(), rule = rule.name(), %error, "rule misconfigured");
                errors.add(ValidationError::configuration(ctx.path().clone(), &error));
            }
            Err(error) => errors.add(ValidationError::from_rule(ctx.path().clone(), error)),
        }
    }
}

/// Records a configuration error that is not tied to a single rule.
pub(crate) fn report(path: &FieldPath, error: &ConfigError, errors: &mut ValidationErrors) {
    warn!(field = %path, %error, "validator misconfigured");
    errors.add(ValidationError::configuration(path.clone(), error));
}
