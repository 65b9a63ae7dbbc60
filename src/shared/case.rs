//! Key normalization for response payloads.
//!
//! The API answers with `snake_case` keys; wire types use `camelCase`.
//! Only object keys are rewritten. Values (including numbers, which stay
//! textually exact under `arbitrary_precision`) pass through untouched.

use serde_json::{Map, Value};

/// Convert one `snake_case` identifier to `camelCase`.
///
/// Leading underscores are preserved; already-camel keys are unchanged.
pub fn to_camel_case(key: &str) -> String {
    let leading = key.len() - key.trim_start_matches('_').len();
    let mut out = String::with_capacity(key.len());
    out.push_str(&key[..leading]);

    let mut upper_next = false;
    for c in key[leading..].chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Recursively rewrite every object key in `value` to `camelCase`.
pub fn camelize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (k, v) in map {
                out.insert(to_camel_case(&k), camelize_keys(v));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(camelize_keys).collect()),
        other => other,
    }
}
