//! Values held by form fields.
//!
//! `FieldValue` mirrors the JSON value space, except numbers are always
//! `f64` so that an unparseable numeric override can be carried as NaN.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field name to value, in declaration order.
pub type FormValues = IndexMap<String, FieldValue>;

/// A single form field value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<FieldValue>),
    Object(FormValues),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[FieldValue]> {
        match self {
            FieldValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Nested values when this is an object.
    pub fn as_object(&self) -> Option<&FormValues> {
        match self {
            FieldValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Short name of the value's shape, used in log output.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Bool(_) => "boolean",
            FieldValue::Number(_) => "number",
            FieldValue::String(_) => "string",
            FieldValue::Array(_) => "array",
            FieldValue::Object(_) => "object",
        }
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<Vec<FieldValue>> for FieldValue {
    fn from(items: Vec<FieldValue>) -> Self {
        FieldValue::Array(items)
    }
}

impl From<FormValues> for FieldValue {
    fn from(map: FormValues) -> Self {
        FieldValue::Object(map)
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => FieldValue::Null,
            serde_json::Value::Bool(b) => FieldValue::Bool(b),
            serde_json::Value::Number(n) => FieldValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => FieldValue::String(s),
            serde_json::Value::Array(items) => {
                FieldValue::Array(items.into_iter().map(FieldValue::from).collect())
            }
            serde_json::Value::Object(map) => FieldValue::Object(
                map.into_iter()
                    .map(|(k, v)| (k, FieldValue::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_preserves_shape() {
        let value = FieldValue::from(json!({
            "name": "Ada",
            "age": 36,
            "admin": false,
            "tags": ["a", "b"],
            "manager": null,
        }));
        let map = value.as_object().unwrap();
        assert_eq!(map["name"], FieldValue::from("Ada"));
        assert_eq!(map["age"], FieldValue::Number(36.0));
        assert_eq!(map["admin"], FieldValue::Bool(false));
        assert_eq!(map["tags"].as_array().unwrap().len(), 2);
        assert!(map["manager"].is_null());
    }

    #[test]
    fn deserializes_untagged_json() {
        let value: FieldValue = serde_json::from_str(r#"{"a": [1, "x", true, null]}"#).unwrap();
        let items = value.as_object().unwrap()["a"].as_array().unwrap();
        assert_eq!(items[0], FieldValue::Number(1.0));
        assert_eq!(items[1], FieldValue::from("x"));
        assert_eq!(items[2], FieldValue::Bool(true));
        assert!(items[3].is_null());
    }

    #[test]
    fn deserializes_untagged_yaml() {
        let value: FieldValue = serde_yaml_ng::from_str("role: member\nlimit: 2.5\n").unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map["role"].as_str(), Some("member"));
        assert_eq!(map["limit"].as_f64(), Some(2.5));
    }

    #[test]
    fn nan_serializes_as_null() {
        let json = serde_json::to_string(&FieldValue::Number(f64::NAN)).unwrap();
        assert_eq!(json, "null");
    }

    #[test]
    fn type_names() {
        assert_eq!(FieldValue::Null.type_name(), "null");
        assert_eq!(FieldValue::from(1.5).type_name(), "number");
        assert_eq!(FieldValue::Object(FormValues::new()).type_name(), "object");
    }
}
