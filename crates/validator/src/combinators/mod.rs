//! Rule combinators
//!
//! Combinators wrap other rules to change when or how they run:
//!
//! - [`Each`]: apply a rule to every sequence element
//! - [`MapOf`], [`Keys`]: apply rules to map keys and values
//! - [`WithMessage`]: replace the failure message
//! - [`When`]: gate a rule on a predicate over the enclosing record
//! - [`CrossField`], [`DependentRequired`]: compare against sibling fields
//! - [`Parameterized`]: build a rule from annotation arguments
//!
//! Context-consuming combinators forward the [`RuleContext`](crate::foundation::RuleContext)
//! they receive to every wrapped rule.

pub mod cross_field;
pub mod each;
pub mod map;
pub mod message;
pub mod param;
pub mod when;

pub use cross_field::{
    CrossField, DependentRequired, cross_field, dependent_required, equals_field, sibling,
};
pub use each::{Each, each};
pub use map::{Keys, MapOf, keys, map_of};
pub use message::{WithMessage, with_message};
pub use param::{Parameterized, parameterized};
pub use when::{Predicate, When, if_field, unless_field, when};
