//! Root-capturing proxy over the extraction operations.

use std::sync::Arc;

use crate::error::Result;
use crate::extract;
use crate::record::Record;
use crate::value::Value;

/// A handle that binds one root value so repeated extractions don't have to
/// pass it around.
///
/// Every method mirrors its free-function twin minus the `data` argument;
/// there is no other state and the captured root is never mutated.
///
/// ```
/// use dotget::{Scope, Value};
/// use serde_json::json;
///
/// let scope = Scope::wrap(Value::from(json!({
///     "server": {"host": "localhost", "port": "8080"}
/// })));
///
/// assert_eq!(scope.string("server.host", ""), Ok("localhost".to_string()));
/// assert_eq!(scope.require_int("server.port"), Ok(8080));
/// assert_eq!(scope.bool("server.tls", false), Ok(false));
/// ```
#[derive(Debug, Clone)]
pub struct Scope {
    data: Value,
}

impl Scope {
    /// Capture `data` as the root for every subsequent extraction.
    pub fn wrap(data: impl Into<Value>) -> Self {
        Self { data: data.into() }
    }

    /// See [`get`](crate::get).
    pub fn get(&self, path: &str, default: impl Into<Value>) -> Value {
        extract::get(path, &self.data, default)
    }

    /// See [`string`](crate::string).
    ///
    /// # Errors
    ///
    /// As [`string`](crate::string).
    pub fn string(&self, path: &str, default: impl Into<String>) -> Result<String> {
        extract::string(path, &self.data, default)
    }

    /// See [`require_string`](crate::require_string).
    ///
    /// # Errors
    ///
    /// As [`require_string`](crate::require_string).
    pub fn require_string(&self, path: &str) -> Result<String> {
        extract::require_string(path, &self.data)
    }

    /// See [`int`](crate::int).
    ///
    /// # Errors
    ///
    /// As [`int`](crate::int).
    pub fn int(&self, path: &str, default: i64) -> Result<i64> {
        extract::int(path, &self.data, default)
    }

    /// See [`require_int`](crate::require_int).
    ///
    /// # Errors
    ///
    /// As [`require_int`](crate::require_int).
    pub fn require_int(&self, path: &str) -> Result<i64> {
        extract::require_int(path, &self.data)
    }

    /// See [`float`](crate::float).
    ///
    /// # Errors
    ///
    /// As [`float`](crate::float).
    pub fn float(&self, path: &str, default: f64) -> Result<f64> {
        extract::float(path, &self.data, default)
    }

    /// See [`require_float`](crate::require_float).
    ///
    /// # Errors
    ///
    /// As [`require_float`](crate::require_float).
    pub fn require_float(&self, path: &str) -> Result<f64> {
        extract::require_float(path, &self.data)
    }

    /// See [`bool`](crate::bool).
    ///
    /// # Errors
    ///
    /// As [`bool`](crate::bool).
    pub fn bool(&self, path: &str, default: bool) -> Result<bool> {
        extract::bool(path, &self.data, default)
    }

    /// See [`require_bool`](crate::require_bool).
    ///
    /// # Errors
    ///
    /// As [`require_bool`](crate::require_bool).
    pub fn require_bool(&self, path: &str) -> Result<bool> {
        extract::require_bool(path, &self.data)
    }

    /// See [`array`](crate::array).
    ///
    /// # Errors
    ///
    /// As [`array`](crate::array).
    pub fn array(&self, path: &str, default: Vec<Value>) -> Result<Vec<Value>> {
        extract::array(path, &self.data, default)
    }

    /// See [`array_of`](crate::array_of).
    ///
    /// # Errors
    ///
    /// As [`array_of`](crate::array_of).
    pub fn array_of<T, F>(&self, path: &str, map_fn: F, default: Vec<T>) -> Result<Vec<T>>
    where
        F: FnMut(Value) -> T,
    {
        extract::array_of(path, &self.data, map_fn, default)
    }

    /// See [`object_of`](crate::object_of).
    ///
    /// # Errors
    ///
    /// As [`object_of`](crate::object_of).
    pub fn object_of<T: Record>(&self, path: &str) -> Result<Arc<T>> {
        extract::object_of(path, &self.data)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::Error;

    #[test]
    fn delegates_with_the_captured_root() {
        let scope = Scope::wrap(Value::from(json!({
            "test": {"test_1": "value"},
            "count": "41",
            "flags": [true, false],
        })));

        assert_eq!(scope.get("test.test_1", ()), Value::from("value"));
        assert_eq!(scope.string("test.test_1", ""), Ok("value".to_string()));
        assert_eq!(scope.int("count", 0), Ok(41));
        assert_eq!(scope.float("count", 0.0), Ok(41.0));
        assert_eq!(scope.bool("count", false), Ok(true));
        assert_eq!(
            scope.array("flags", Vec::new()),
            Ok(vec![Value::Bool(true), Value::Bool(false)])
        );
        assert_eq!(
            scope.require_string("missing"),
            Err(Error::missing("missing"))
        );
    }

    #[test]
    fn wrap_accepts_anything_convertible() {
        let scope = Scope::wrap(Value::from(json!({"n": 1})));
        assert_eq!(scope.require_int("n"), Ok(1));

        // A bare map works the same as a converted JSON object.
        let mut map = crate::value::Map::new();
        map.insert("n".to_string(), Value::Int(2));
        let scope = Scope::wrap(map);
        assert_eq!(scope.require_int("n"), Ok(2));
    }
}
