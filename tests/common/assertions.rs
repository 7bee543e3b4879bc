//! Envelope assertions

use serde_json::Value;

/// Assert the failure envelope with an exact message
pub fn assert_error(body: &Value, message: &str) {
    assert_eq!(body["success"], false, "expected failure envelope: {body}");
    assert_eq!(body["message"], message, "unexpected message: {body}");
}

/// Field names listed in a validation failure
pub fn error_fields(body: &Value) -> Vec<String> {
    body["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e["field"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Assert that no key anywhere in the document names a password
pub fn assert_no_password_keys(value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                assert!(
                    !key.to_ascii_lowercase().contains("password"),
                    "response exposes `{key}`"
                );
                assert_no_password_keys(nested);
            }
        }
        Value::Array(items) => items.iter().for_each(assert_no_password_keys),
        _ => {}
    }
}
