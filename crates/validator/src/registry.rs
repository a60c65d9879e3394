//! Rule registry
//!
//! The [`Registry`] keeps two independent tables:
//!
//! - **path bindings**: field paths (`Name`, `Items[].Qty`, `Items[0].Qty`)
//!   mapped to the rules the walker runs for matching fields;
//! - **named rules**: rule names referenced from field annotations
//!   (`required`, `min=3`), never matched against field paths.
//!
//! A field called `max` is therefore unaffected by the built-in `max` rule
//! unless its annotation names it.
//!
//! Registration appends: binding a second rule to an identifier adds to the
//! list instead of replacing it, and every rule in the list must pass.
//! Lookups never fail; an identifier with no rules yields an empty slice.

use indexmap::IndexMap;
use std::sync::Arc;
use tracing::debug;

use crate::foundation::{Rule, SharedRule};

// ============================================================================
// REGISTRY
// ============================================================================

/// Field-path bindings plus annotation-addressable named rules.
///
/// Build it once, then share it read-only between validations.
///
/// # Examples
///
/// ```rust,ignore
/// use strata_validator::prelude::*;
///
/// let mut registry = Registry::new();
/// registry.register("Name", required());
/// registry.register("Name", length(2, 50));
/// registry.register_named("slug", pattern("^[a-z-]+$")?);
/// assert_eq!(registry.lookup("Name").len(), 2);
/// assert!(registry.lookup("slug").is_empty());
/// assert_eq!(registry.named("slug").len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct Registry {
    paths: IndexMap<String, Vec<SharedRule>>,
    named: IndexMap<String, Vec<SharedRule>>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry whose named table holds the built-in annotation rules.
    ///
    /// See [`register_builtins`](crate::validators::register_builtins).
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::validators::register_builtins(&mut registry);
        registry
    }

    // ------------------------------------------------------------------------
    // Path bindings
    // ------------------------------------------------------------------------

    /// Appends `rule` to the list bound to the field path `path`.
    pub fn register(&mut self, path: impl Into<String>, rule: impl Rule + 'static) {
        self.register_shared(path, Arc::new(rule));
    }

    /// Appends an already shared rule, so one instance can serve many
    /// paths.
    pub fn register_shared(&mut self, path: impl Into<String>, rule: SharedRule) {
        let path = path.into();
        debug!(path = %path, rule = rule.name(), "binding rule to path");
        self.paths.entry(path).or_default().push(rule);
    }

    /// Rules bound to `path`, in registration order.
    #[must_use]
    pub fn lookup(&self, path: &str) -> &[SharedRule] {
        self.paths.get(path).map(Vec::as_slice).unwrap_or(&[])
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains_key(path)
    }

    /// Number of distinct bound paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// `true` when neither table holds a rule.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.named.is_empty()
    }

    /// Bound paths in first-registration order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.paths.keys().map(String::as_str)
    }

    // ------------------------------------------------------------------------
    // Named rules
    // ------------------------------------------------------------------------

    /// Appends `rule` under the annotation name `name`.
    pub fn register_named(&mut self, name: impl Into<String>, rule: impl Rule + 'static) {
        self.register_named_shared(name, Arc::new(rule));
    }

    /// Appends an already shared rule under the annotation name `name`.
    pub fn register_named_shared(&mut self, name: impl Into<String>, rule: SharedRule) {
        let name = name.into();
        debug!(name = %name, rule = rule.name(), "registering named rule");
        self.named.entry(name).or_default().push(rule);
    }

    /// Rules registered under the annotation name `name`.
    #[must_use]
    pub fn named(&self, name: &str) -> &[SharedRule] {
        self.named.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    #[must_use]
    pub fn contains_named(&self, name: &str) -> bool {
        self.named.contains_key(name)
    }

    /// Annotation names in first-registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.named.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = |table: &IndexMap<String, Vec<SharedRule>>| {
            table
                .iter()
                .map(|(id, rules)| (id.clone(), rules.iter().map(|r| r.name()).collect::<Vec<_>>()))
                .collect::<Vec<_>>()
        };
        f.debug_struct("Registry")
            .field("paths", &names(&self.paths))
            .field("named", &names(&self.named))
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
