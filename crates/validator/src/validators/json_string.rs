//! JSON string validator.
//!
//! Validates that a string contains well-formed JSON.

use serde::de::IgnoredAny;

use crate::foundation::RuleError;

crate::rule! {
    /// Validates that a string parses as JSON (RFC 8259).
    ///
    /// ```rust,ignore
    /// assert!(json().validate(&Value::Str(r#"{"a": [1, 2]}"#)).is_ok());
    /// assert!(json().validate(&Value::Str("{")).is_err());
    /// ```
    pub JsonString;
    check(value) {
        let s = value
            .as_str()
            .ok_or_else(|| RuleError::invalid("value must be a string"))?;
        serde_json::from_str::<IgnoredAny>(s)
            .map(|_| ())
            .map_err(|_| RuleError::invalid("invalid JSON format"))
    }
    fn json();
}
