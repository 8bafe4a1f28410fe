//! The dynamic value model traversed by path resolution.
//!
//! [`Value`] covers everything a decoded payload or configuration tree can
//! hold: scalars, ordered sequences, insertion-ordered maps, and structured
//! [`Record`]s. All data is treated as immutable input; nothing here mutates.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::record::Record;

/// Insertion-ordered map underlying [`Value::Map`].
pub type Map = IndexMap<String, Value>;

/// A dynamically-shaped datum.
#[derive(Debug, Clone)]
pub enum Value {
    /// Explicit null.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Integer scalar.
    Int(i64),
    /// Floating-point scalar.
    Float(f64),
    /// String scalar.
    String(String),
    /// Ordered sequence of values.
    Array(Vec<Value>),
    /// Insertion-ordered map of values.
    Map(Map),
    /// Structured object exposing named fields.
    Record(Arc<dyn Record>),
}

impl Value {
    /// Whether this value is the explicit null.
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Whether this value is a scalar (bool, int, float, or string).
    ///
    /// Null is not scalar: a found null fails scalar coercions rather than
    /// silently converting.
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::Bool(_) | Self::Int(_) | Self::Float(_) | Self::String(_)
        )
    }

    /// The string slice, if this is a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The integer, if this is an integer scalar.
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// The float, if this is a floating-point scalar.
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// The boolean, if this is a boolean scalar.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The element slice, if this is a sequence.
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The map, if this is a map.
    pub const fn as_map(&self) -> Option<&Map> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// The record, if this is a record.
    pub fn as_record(&self) -> Option<&Arc<dyn Record>> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            // Records compare by identity: `object_of` hands back the stored
            // instance, so equality follows the handle.
            (Self::Record(a), Self::Record(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Self::Map(map)
    }
}

impl From<Arc<dyn Record>> for Value {
    fn from(record: Arc<dyn Record>) -> Self {
        Self::Record(record)
    }
}

impl<T: Record> From<Arc<T>> for Value {
    fn from(record: Arc<T>) -> Self {
        Self::Record(record)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map_or_else(|| n.as_f64().map_or(Self::Null, Self::Float), Self::Int),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Map(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn json_conversion_keeps_shapes() {
        let value = Value::from(json!({
            "text": "value",
            "count": 123,
            "ratio": 0.5,
            "on": true,
            "nothing": null,
            "items": [1, "two"],
        }));

        let expected: Map = [
            ("text".to_string(), Value::from("value")),
            ("count".to_string(), Value::Int(123)),
            ("ratio".to_string(), Value::Float(0.5)),
            ("on".to_string(), Value::Bool(true)),
            ("nothing".to_string(), Value::Null),
            (
                "items".to_string(),
                Value::Array(vec![Value::Int(1), Value::from("two")]),
            ),
        ]
        .into_iter()
        .collect();
        assert_eq!(value, Value::Map(expected));
    }

    #[test]
    fn json_conversion_preserves_key_order() {
        let value = Value::from(json!({"z": 1, "a": 2, "m": 3}));

        let keys: Vec<&str> = match &value {
            Value::Map(map) => map.keys().map(String::as_str).collect(),
            _ => Vec::new(),
        };
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn json_numbers_beyond_i64_become_floats() {
        let value = Value::from(json!(u64::MAX));
        assert_eq!(value, Value::Float(u64::MAX as f64));
    }

    #[test]
    fn null_is_not_scalar() {
        assert!(!Value::Null.is_scalar());
        assert!(Value::Null.is_null());
        assert!(Value::Int(0).is_scalar());
        assert!(!Value::Array(Vec::new()).is_scalar());
        assert!(!Value::Map(Map::new()).is_scalar());
    }

    #[test]
    fn unit_and_option_convert_to_null() {
        assert_eq!(Value::from(()), Value::Null);
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(5i64)), Value::Int(5));
    }
}
