use serde_json::{Number, Value};

/// Whether a field value counts as "present" for display purposes
///
/// Null, `false`, zero and the empty string are treated as absent, matching
/// how loosely-typed schema.org producers signal a missing field.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a JSON value as display text
///
/// Strings are returned verbatim, integral floats lose their trailing `.0`,
/// and nested structures fall back to compact JSON.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(n),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Look up `key` on an object value and return its display text when present
pub fn field_text(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .filter(|v| is_truthy(v))
        .map(display_text)
}

fn format_number(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 => {
            format!("{}", v as i64)
        }
        _ => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_truthy() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!(3)));
        assert!(is_truthy(&json!("CA")));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!([])));
    }

    #[test]
    fn test_display_text_numbers() {
        assert_eq!(display_text(&json!(3)), "3");
        assert_eq!(display_text(&json!(3.0)), "3");
        assert_eq!(display_text(&json!(2.5)), "2.5");
        assert_eq!(display_text(&json!(-12)), "-12");
    }

    #[test]
    fn test_display_text_other_values() {
        assert_eq!(display_text(&json!("Main St")), "Main St");
        assert_eq!(display_text(&json!(true)), "true");
        assert_eq!(display_text(&Value::Null), "");
        assert_eq!(display_text(&json!({"a": 1})), r#"{"a":1}"#);
    }

    #[test]
    fn test_field_text_skips_missing_and_empty() {
        let obj = json!({"state": "CA", "year": 2020, "citation": "", "rooms": 0});
        assert_eq!(field_text(&obj, "state").as_deref(), Some("CA"));
        assert_eq!(field_text(&obj, "year").as_deref(), Some("2020"));
        assert_eq!(field_text(&obj, "citation"), None);
        assert_eq!(field_text(&obj, "rooms"), None);
        assert_eq!(field_text(&obj, "missing"), None);
        assert_eq!(field_text(&json!("not an object"), "state"), None);
    }
}
