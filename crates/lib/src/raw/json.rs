//! Bridge from already-parsed JSON documents into raw values.

use super::{Group, RawValue};

impl From<serde_json::Value> for RawValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => RawValue::Null,
            serde_json::Value::Bool(b) => RawValue::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(int) => RawValue::Int(int),
                // u64 beyond i64 range and all non-integers land here
                None => RawValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => RawValue::Text(s),
            serde_json::Value::Array(items) => RawValue::Group(Group::list(items)),
            serde_json::Value::Object(fields) => RawValue::Group(Group::record(fields)),
        }
    }
}

impl From<&serde_json::Value> for RawValue {
    fn from(value: &serde_json::Value) -> Self {
        RawValue::from(value.clone())
    }
}
