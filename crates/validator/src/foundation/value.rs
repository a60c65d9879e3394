//! Structural view of validated data
//!
//! The engine never reflects over Rust types. Instead every value that can
//! reach a rule is *inspected* into a [`Value`], a borrowed classification
//! of its shape: scalar, absent, sequence, mapping or record.
//!
//! - [`Inspect`] turns a Rust value into a [`Value`].
//! - [`Record`] enumerates named fields of a structured value.
//! - [`Field`] is one `(name, value, annotation)` entry of a record.
//!
//! Most records are declared with the [`record!`](crate::record) macro.
//!
//! # Examples
//!
//! ```rust,ignore
//! use strata_validator::prelude::*;
//!
//! struct Item { qty: i64 }
//! strata_validator::record!(Item { qty as "Qty" });
//!
//! let item = Item { qty: 3 };
//! assert_eq!(item.inspect().kind(), ValueKind::Record);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

// ============================================================================
// VALUE
// ============================================================================

/// A borrowed, classified view of a value under validation.
#[derive(Clone)]
pub enum Value<'a> {
    /// Missing optional value (`None`, JSON `null`).
    Absent,
    /// Boolean scalar.
    Bool(bool),
    /// Signed integer scalar.
    Int(i64),
    /// Unsigned integer scalar that does not fit in `i64`, or any `u64`.
    UInt(u64),
    /// Floating point scalar.
    Float(f64),
    /// String scalar.
    Str(&'a str),
    /// Ordered sequence of values.
    Seq(Vec<Value<'a>>),
    /// Key/value mapping in a stable, engine-defined order.
    Map(Vec<(String, Value<'a>)>),
    /// Nested record.
    Record(&'a dyn Record),
}

/// Shape of a [`Value`], used in messages and type checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Absent,
    Bool,
    Int,
    UInt,
    Float,
    Str,
    Seq,
    Map,
    Record,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Absent => "absent",
            Self::Bool => "boolean",
            Self::Int | Self::UInt => "integer",
            Self::Float => "float",
            Self::Str => "string",
            Self::Seq => "sequence",
            Self::Map => "map",
            Self::Record => "record",
        };
        f.write_str(name)
    }
}

impl<'a> Value<'a> {
    /// Returns the shape of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Absent => ValueKind::Absent,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::UInt(_) => ValueKind::UInt,
            Self::Float(_) => ValueKind::Float,
            Self::Str(_) => ValueKind::Str,
            Self::Seq(_) => ValueKind::Seq,
            Self::Map(_) => ValueKind::Map,
            Self::Record(_) => ValueKind::Record,
        }
    }

    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as `f64` when it is numeric.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::UInt(n) => Some(*n as f64),
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_record(&self) -> Option<&'a dyn Record> {
        match self {
            Self::Record(r) => Some(*r),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_seq(&self) -> Option<&[Value<'a>]> {
        match self {
            Self::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Length of strings (in characters), sequences and maps.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::Str(s) => Some(s.chars().count()),
            Self::Seq(items) => Some(items.len()),
            Self::Map(entries) => Some(entries.len()),
            _ => None,
        }
    }

    /// Returns `true` for the zero value of the value's type.
    ///
    /// Absent, `false`, `0`, `""`, empty collections and records whose
    /// fields are all zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Bool(b) => !b,
            Self::Int(n) => *n == 0,
            Self::UInt(n) => *n == 0,
            Self::Float(n) => *n == 0.0,
            Self::Str(s) => s.is_empty(),
            Self::Seq(items) => items.is_empty(),
            Self::Map(entries) => entries.is_empty(),
            Self::Record(r) => r.fields().iter().all(|f| f.value.is_zero()),
        }
    }
}

impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Absent, Self::Absent) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::UInt(a), Self::UInt(b)) => a == b,
            (Self::Int(a), Self::UInt(b)) | (Self::UInt(b), Self::Int(a)) => {
                u64::try_from(*a).is_ok_and(|a| a == *b)
            }
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Seq(a), Self::Seq(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Record(a), Self::Record(b)) => {
                let (fa, fb) = (a.fields(), b.fields());
                fa.len() == fb.len()
                    && fa
                        .iter()
                        .zip(&fb)
                        .all(|(x, y)| x.name == y.name && x.value == y.value)
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("Absent"),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Self::UInt(n) => f.debug_tuple("UInt").field(n).finish(),
            Self::Float(n) => f.debug_tuple("Float").field(n).finish(),
            Self::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Self::Seq(items) => f.debug_tuple("Seq").field(items).finish(),
            Self::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
            Self::Record(r) => f.debug_tuple("Record").field(&r.type_name()).finish(),
        }
    }
}

/// Renders scalars the way they appear in rule messages.
impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("<absent>"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::UInt(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
            Self::Seq(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Map(entries) => {
                f.write_str("map[")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{k}:{v}")?;
                }
                f.write_str("]")
            }
            Self::Record(r) => write!(f, "{{{}}}", r.type_name()),
        }
    }
}

// ============================================================================
// RECORD
// ============================================================================

/// One named field of a [`Record`].
#[derive(Debug, Clone)]
pub struct Field<'a> {
    /// Field name as it appears in paths.
    pub name: &'a str,
    /// The field's inspected value.
    pub value: Value<'a>,
    /// Optional comma-separated rule annotation (`"required,min=3"`).
    pub rules: Option<&'a str>,
}

impl<'a> Field<'a> {
    pub fn new(name: &'a str, value: Value<'a>) -> Self {
        Self {
            name,
            value,
            rules: None,
        }
    }

    /// Attaches a rule annotation to the field.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_rules(mut self, rules: &'a str) -> Self {
        self.rules = Some(rules);
        self
    }
}

/// A structured value with named fields.
///
/// Implementations list their validatable fields in declaration order.
/// Fields that are left out are invisible to the engine.
pub trait Record {
    /// Human-readable type name used in diagnostics.
    fn type_name(&self) -> &str;

    /// Enumerates fields in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;

    /// Looks up a single field by name.
    fn field(&self, name: &str) -> Option<Value<'_>> {
        self.fields()
            .into_iter()
            .find(|f| f.name == name)
            .map(|f| f.value)
    }
}

impl fmt::Debug for dyn Record + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct(self.type_name());
        for field in self.fields() {
            s.field(field.name, &field.value);
        }
        s.finish()
    }
}

// ============================================================================
// INSPECT
// ============================================================================

/// Conversion of a Rust value into a [`Value`] view.
pub trait Inspect {
    fn inspect(&self) -> Value<'_>;
}

impl<T: Inspect + ?Sized> Inspect for &T {
    fn inspect(&self) -> Value<'_> {
        (**self).inspect()
    }
}

impl<T: Inspect + ?Sized> Inspect for Box<T> {
    fn inspect(&self) -> Value<'_> {
        (**self).inspect()
    }
}

impl<T: Inspect + ?Sized> Inspect for Arc<T> {
    fn inspect(&self) -> Value<'_> {
        (**self).inspect()
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn inspect(&self) -> Value<'_> {
        match self {
            Some(inner) => inner.inspect(),
            None => Value::Absent,
        }
    }
}

impl Inspect for str {
    fn inspect(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl Inspect for String {
    fn inspect(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl Inspect for bool {
    fn inspect(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

macro_rules! inspect_signed {
    ($($t:ty),*) => {$(
        impl Inspect for $t {
            fn inspect(&self) -> Value<'_> {
                Value::Int(i64::from(*self))
            }
        }
    )*};
}

macro_rules! inspect_unsigned {
    ($($t:ty),*) => {$(
        impl Inspect for $t {
            fn inspect(&self) -> Value<'_> {
                Value::UInt(u64::from(*self))
            }
        }
    )*};
}

inspect_signed!(i8, i16, i32, i64);
inspect_unsigned!(u8, u16, u32, u64);

impl Inspect for isize {
    fn inspect(&self) -> Value<'_> {
        Value::Int(*self as i64)
    }
}

impl Inspect for usize {
    fn inspect(&self) -> Value<'_> {
        Value::UInt(*self as u64)
    }
}

impl Inspect for f32 {
    fn inspect(&self) -> Value<'_> {
        Value::Float(f64::from(*self))
    }
}

impl Inspect for f64 {
    fn inspect(&self) -> Value<'_> {
        Value::Float(*self)
    }
}

impl<T: Inspect> Inspect for [T] {
    fn inspect(&self) -> Value<'_> {
        Value::Seq(self.iter().map(Inspect::inspect).collect())
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn inspect(&self) -> Value<'_> {
        self.as_slice().inspect()
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn inspect(&self) -> Value<'_> {
        self.as_slice().inspect()
    }
}

/// Entries are ordered by their rendered key so iteration is stable.
impl<K: fmt::Display, V: Inspect, S> Inspect for HashMap<K, V, S> {
    fn inspect(&self) -> Value<'_> {
        let mut entries: Vec<(String, Value<'_>)> = self
            .iter()
            .map(|(k, v)| (k.to_string(), v.inspect()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Value::Map(entries)
    }
}

impl<K: fmt::Display, V: Inspect> Inspect for BTreeMap<K, V> {
    fn inspect(&self) -> Value<'_> {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.to_string(), v.inspect()))
                .collect(),
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Point {
        x: i32,
        label: Option<String>,
    }

    impl Record for Point {
        fn type_name(&self) -> &str {
            "Point"
        }

        fn fields(&self) -> Vec<Field<'_>> {
            vec![
                Field::new("X", self.x.inspect()),
                Field::new("Label", Inspect::inspect(&self.label)),
            ]
        }
    }

    #[test]
    fn test_scalar_kinds() {
        assert_eq!(42i32.inspect().kind(), ValueKind::Int);
        assert_eq!(7u8.inspect().kind(), ValueKind::UInt);
        assert_eq!(1.5f32.inspect().kind(), ValueKind::Float);
        assert_eq!("x".inspect().kind(), ValueKind::Str);
        assert_eq!(Inspect::inspect(&None::<String>).kind(), ValueKind::Absent);
        assert_eq!(Inspect::inspect(&Some(true)), Value::Bool(true));
    }

    #[test]
    fn test_hash_map_is_sorted_by_key() {
        let mut map = HashMap::new();
        map.insert("zeta", 1);
        map.insert("alpha", 2);
        map.insert("mid", 3);

        let Value::Map(entries) = map.inspect() else {
            panic!("expected map");
        };
        let keys: Vec<_> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_is_zero() {
        assert!(Value::Absent.is_zero());
        assert!(Value::Str("").is_zero());
        assert!(Value::Int(0).is_zero());
        assert!(!Value::Int(-1).is_zero());
        assert!(Value::Seq(vec![]).is_zero());

        let empty = Point { x: 0, label: None };
        let set = Point { x: 0, label: Some("a".into()) };
        assert!(Value::Record(&empty).is_zero());
        assert!(!Value::Record(&set).is_zero());
    }

    #[test]
    fn test_field_lookup() {
        let p = Point { x: 5, label: None };
        assert_eq!(p.field("X"), Some(Value::Int(5)));
        assert_eq!(p.field("Label"), Some(Value::Absent));
        assert_eq!(p.field("Missing"), None);
    }

    #[test]
    fn test_mixed_integer_equality() {
        assert_eq!(Value::Int(3), Value::UInt(3));
        assert_ne!(Value::Int(-3), Value::UInt(3));
    }

    #[test]
    fn test_display_sequence() {
        let binding = vec!["email", "phone"];
        let v = binding.inspect();
        assert_eq!(v.to_string(), "[email phone]");
    }
}
