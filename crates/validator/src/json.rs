//! JSON documents as validation input.
//!
//! A JSON object is a [`Record`] whose keys are its field names, so
//! untyped payloads go through the same walker as Rust structs:
//!
//! ```
//! use strata_validator::prelude::*;
//! use serde_json::json;
//!
//! let mut validator = Validator::new();
//! validator.register("Items[].Qty", min(0.0));
//!
//! let doc = json!({ "Items": [{ "Qty": 1 }, { "Qty": -1 }] });
//! let errors = validator.validate_all(&doc);
//! assert_eq!(errors.to_string(), "Items[1].Qty: value must be greater than or equal to 0");
//! ```
//!
//! `null` inspects as [`Value::Absent`]. Object members are visited in the
//! map's iteration order (sorted by key unless serde_json's
//! `preserve_order` feature is enabled).
//!
//! Every object is a record, including one used as a dictionary. Its members
//! render as field segments (`Contacts.home.City`, never `Contacts[home].City`)
//! and `[]` wildcard patterns only match array elements. To get keyed paths,
//! deserialize the dictionary into a `HashMap` or `BTreeMap` and validate
//! that instead.

use serde_json::{Map, Number, Value as JsonValue};

use crate::foundation::{Field, Inspect, Record, Value};

impl Record for Map<String, JsonValue> {
    fn type_name(&self) -> &str {
        "object"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        self.iter()
            .map(|(name, value)| Field::new(name, value.inspect()))
            .collect()
    }

    fn field(&self, name: &str) -> Option<Value<'_>> {
        self.get(name).map(Inspect::inspect)
    }
}

impl Inspect for Map<String, JsonValue> {
    fn inspect(&self) -> Value<'_> {
        Value::Record(self)
    }
}

impl Inspect for JsonValue {
    fn inspect(&self) -> Value<'_> {
        match self {
            JsonValue::Null => Value::Absent,
            JsonValue::Bool(b) => Value::Bool(*b),
            JsonValue::Number(n) => number(n),
            JsonValue::String(s) => Value::Str(s),
            JsonValue::Array(items) => Value::Seq(items.iter().map(Inspect::inspect).collect()),
            JsonValue::Object(map) => Value::Record(map),
        }
    }
}

fn number(n: &Number) -> Value<'static> {
    if let Some(i) = n.as_i64() {
        Value::Int(i)
    } else if let Some(u) = n.as_u64() {
        Value::UInt(u)
    } else {
        n.as_f64().map_or(Value::Absent, Value::Float)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValueKind;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn scalars() {
        assert_eq!(json!(null).inspect(), Value::Absent);
        assert_eq!(json!(true).inspect(), Value::Bool(true));
        assert_eq!(json!(-3).inspect(), Value::Int(-3));
        assert_eq!(json!(u64::MAX).inspect(), Value::UInt(u64::MAX));
        assert_eq!(json!(1.5).inspect(), Value::Float(1.5));
        assert_eq!(json!("x").inspect(), Value::Str("x"));
    }

    #[test]
    fn arrays_are_sequences() {
        let doc = json!([1, "a", null]);
        assert_eq!(
            doc.inspect(),
            Value::Seq(vec![Value::Int(1), Value::Str("a"), Value::Absent])
        );
    }

    #[test]
    fn objects_are_records() {
        let doc = json!({ "Name": "Ada", "Age": 36 });
        let value = doc.inspect();
        assert_eq!(value.kind(), ValueKind::Record);

        let record = value.as_record().expect("object is a record");
        assert_eq!(record.type_name(), "object");
        assert_eq!(record.field("Age"), Some(Value::Int(36)));
        assert_eq!(record.field("Missing"), None);

        let names: Vec<&str> = record.fields().iter().map(|f| f.name).collect();
        assert_eq!(names, ["Age", "Name"]);
    }
}
