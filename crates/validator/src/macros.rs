//! Macros for declaring records and rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`record!`] — Implement [`Record`](crate::foundation::Record) and
//!   [`Inspect`](crate::foundation::Inspect) for a struct
//! - [`rule!`] — Create a complete leaf rule (struct + `Rule` impl + factory fn)
//!
//! # Examples
//!
//! ```rust,ignore
//! use strata_validator::{record, rule};
//! use strata_validator::foundation::RuleError;
//!
//! struct Order {
//!     items: Vec<Item>,
//!     note: Option<String>,
//! }
//!
//! record!(Order {
//!     items as "Items" => "required",
//!     note,
//! });
//!
//! rule! {
//!     pub NotBlank;
//!     check(value) {
//!         match value.as_str() {
//!             Some(s) if s.trim().is_empty() => Err(RuleError::invalid("value must not be blank")),
//!             _ => Ok(()),
//!         }
//!     }
//!     fn not_blank();
//! }
//! ```

// ============================================================================
// RECORD MACRO
// ============================================================================

/// Implements `Record` and `Inspect` for a struct.
///
/// Each listed field may be renamed with `as "Name"` (the name used in field
/// paths) and annotated with `=> "rule,rule=arg"`. Fields that are not
/// listed are invisible to the validator.
///
/// ```rust,ignore
/// struct Account {
///     premium: bool,
///     premium_until: String,
///     secret: String, // not listed: skipped
/// }
///
/// record!(Account {
///     premium as "Premium",
///     premium_until as "PremiumUntil",
/// });
/// ```
#[macro_export]
macro_rules! record {
    ($ty:ty { $( $field:ident $(as $name:literal)? $(=> $rules:literal)? ),* $(,)? }) => {
        impl $crate::foundation::Record for $ty {
            fn type_name(&self) -> &str {
                stringify!($ty)
            }

            fn fields(&self) -> ::std::vec::Vec<$crate::foundation::Field<'_>> {
                ::std::vec![
                    $( $crate::__record_field!(self, $field $(as $name)? $(=> $rules)?) ),*
                ]
            }
        }

        impl $crate::foundation::Inspect for $ty {
            fn inspect(&self) -> $crate::foundation::Value<'_> {
                $crate::foundation::Value::Record(self)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __record_field {
    ($this:ident, $field:ident) => {
        $crate::foundation::Field::new(
            stringify!($field),
            $crate::foundation::Inspect::inspect(&$this.$field),
        )
    };
    ($this:ident, $field:ident as $name:literal) => {
        $crate::foundation::Field::new($name, $crate::foundation::Inspect::inspect(&$this.$field))
    };
    ($this:ident, $field:ident => $rules:literal) => {
        $crate::__record_field!($this, $field).with_rules($rules)
    };
    ($this:ident, $field:ident as $name:literal => $rules:literal) => {
        $crate::__record_field!($this, $field as $name).with_rules($rules)
    };
}

// ============================================================================
// RULE MACRO
// ============================================================================

/// Creates a complete leaf rule: struct definition, `Rule` implementation,
/// constructor, and factory function.
///
/// The `check` block receives the field's [`Value`](crate::foundation::Value)
/// and returns a [`RuleResult`](crate::foundation::RuleResult). Absent values
/// pass without running the block; presence is the job of `required`.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
///
/// # Variants
///
/// **Unit rule** (zero-sized, no fields):
/// ```rust,ignore
/// rule! {
///     pub Positive;
///     check(value) { ... }
///     fn positive();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// rule! {
///     #[derive(Copy, PartialEq)]
///     pub Contains { needle: String };
///     check(self, value) { ... }
///     fn contains(needle: String);
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`):
/// ```rust,ignore
/// rule! {
///     pub Length { min: usize, max: Option<usize> };
///     check(self, value) { ... }
///     new(min: usize, max: usize) { Self { min, max: Some(max) } }
///     fn length(min: usize, max: usize);
/// }
/// ```
#[macro_export]
macro_rules! rule {
    // ── Unit rule + factory fn ───────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        check($inp:ident) $check:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Rule for $name {
            fn validate(
                &self,
                $inp: &$crate::foundation::Value<'_>,
            ) -> $crate::foundation::RuleResult {
                if $inp.is_absent() {
                    return Ok(());
                }
                $check
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name {
            $name
        }
    };

    // ── Struct with fields + custom new + factory fn ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        check($self_:ident, $inp:ident) $check:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $($field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        $crate::rule!(@impl $name, $self_, $inp, $check);

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        check($self_:ident, $inp:ident) $check:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $($field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        $crate::rule!(@impl $name, $self_, $inp, $check);

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    (@impl $name:ident, $self_:ident, $inp:ident, $check:block) => {
        impl $crate::foundation::Rule for $name {
            fn validate(
                &$self_,
                $inp: &$crate::foundation::Value<'_>,
            ) -> $crate::foundation::RuleResult {
                if $inp.is_absent() {
                    return Ok(());
                }
                $check
            }
        }
    };
}
