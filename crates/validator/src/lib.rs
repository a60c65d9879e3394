//! # strata-validator
//!
//! A declarative record-validation engine: register rules under field paths
//! or rule names, hand the validator a record, get back every violation.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use strata_validator::prelude::*;
//!
//! struct Order { items: Vec<Item> }
//! struct Item { qty: i64 }
//!
//! strata_validator::record!(Order { items as "Items" });
//! strata_validator::record!(Item { qty as "Qty" });
//!
//! let validator = Validator::new().rule("Items[].Qty", min(0.0));
//! let errors = validator.validate_all(&Order { items: vec![Item { qty: -1 }] });
//! assert_eq!(errors.to_string(), "Items[0].Qty: value must be greater than or equal to 0");
//! ```
//!
//! ## Moving Parts
//!
//! - [`foundation`]: the [`Rule`](foundation::Rule) contract, the [`Value`](foundation::Value)
//!   view of records, and the error model
//! - [`registry`]: identifier → ordered rule list
//! - [`path`]: field path rendering (`Items[1].Qty`, `Contacts[home]`)
//! - [`engine`]: the [`Validator`] facade, structural walker and rule dispatcher
//! - [`combinators`]: conditional (`when`, `if_field`, `unless_field`),
//!   cross-field and per-element wrappers
//! - [`validators`]: built-in leaf rules
//! - [`annotation`]: the `required,min=3,range:1:10` field annotation syntax
//!
//! ## Creating Rules
//!
//! Use the [`rule!`] macro for leaf rules, [`custom`](validators::custom) for
//! closures, or implement [`Rule`](foundation::Rule) manually when a rule
//! needs the enclosing record.

// Rule closures are stored as `Arc<dyn Fn(..) -> ..>`; the aliases spell out
// the full signature once per module.
#![allow(clippy::type_complexity)]

pub mod annotation;
pub mod combinators;
pub mod config;
pub mod engine;
pub mod foundation;
pub mod json;
mod macros;
pub mod path;
pub mod prelude;
pub mod registry;
pub mod validators;

pub use config::{ContextScope, ValidatorConfig};
pub use engine::Validator;
pub use foundation::{ValidationError, ValidationErrors};
pub use registry::Registry;
