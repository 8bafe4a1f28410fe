//! The public per-type extraction operations.
//!
//! Each operation resolves a dot-delimited path and then applies the
//! coercion rule for its target kind. Default-bearing operations return the
//! supplied default only when the path is absent; a found null is a found
//! value and goes through coercion like anything else. The `require_*`
//! twins drop the default and turn absence into
//! [`Error::RequiredMissing`](crate::Error::RequiredMissing).

use std::any;
use std::sync::Arc;

use crate::coerce;
use crate::error::{Error, Result};
use crate::path;
use crate::record::Record;
use crate::value::Value;

/// Canonical default for [`string`] extractions.
pub const DEFAULT_STRING: &str = "";
/// Canonical default for [`int`] extractions.
pub const DEFAULT_INT: i64 = 0;
/// Canonical default for [`float`] extractions.
pub const DEFAULT_FLOAT: f64 = 0.0;
/// Canonical default for [`bool()`](crate::bool) extractions.
pub const DEFAULT_BOOL: bool = false;

/// Return the raw value at `path`, or `default` when the path is absent.
///
/// A found null is returned verbatim; only absence produces the default.
///
/// ```
/// use dotget::{get, Value};
/// use serde_json::json;
///
/// let data = Value::from(json!({"test": {"test_1": "value"}, "gone": null}));
/// assert_eq!(get("test.test_1", &data, ()), Value::from("value"));
/// assert_eq!(get("missing", &data, "fallback"), Value::from("fallback"));
/// assert_eq!(get("gone", &data, "fallback"), Value::Null);
/// ```
pub fn get(path: &str, data: &Value, default: impl Into<Value>) -> Value {
    path::resolve(path, data).unwrap_or_else(|| default.into())
}

/// Extract a string at `path`, or `default` when the path is absent.
///
/// Scalars cast to their canonical text form.
///
/// # Errors
///
/// [`Error::NotScalar`](crate::Error::NotScalar) when the found value is a
/// container or null.
pub fn string(path: &str, data: &Value, default: impl Into<String>) -> Result<String> {
    match path::resolve(path, data) {
        Some(value) => coerce::into_string(path, value),
        None => Ok(default.into()),
    }
}

/// Extract a string at `path`, failing when the path is absent.
///
/// # Errors
///
/// [`Error::RequiredMissing`](crate::Error::RequiredMissing) when the path is
/// absent; otherwise as [`string`].
pub fn require_string(path: &str, data: &Value) -> Result<String> {
    coerce::into_string(path, require(path, data)?)
}

/// Extract an integer at `path`, or `default` when the path is absent.
///
/// Floats and numeric strings truncate toward zero.
///
/// # Errors
///
/// [`Error::NotScalar`](crate::Error::NotScalar) for containers and null,
/// [`Error::NotNumeric`](crate::Error::NotNumeric) for scalars that don't
/// pass the numeric-string test.
pub fn int(path: &str, data: &Value, default: i64) -> Result<i64> {
    match path::resolve(path, data) {
        Some(value) => coerce::into_int(path, value),
        None => Ok(default),
    }
}

/// Extract an integer at `path`, failing when the path is absent.
///
/// # Errors
///
/// [`Error::RequiredMissing`](crate::Error::RequiredMissing) when the path is
/// absent; otherwise as [`int`].
pub fn require_int(path: &str, data: &Value) -> Result<i64> {
    coerce::into_int(path, require(path, data)?)
}

/// Extract a float at `path`, or `default` when the path is absent.
///
/// # Errors
///
/// [`Error::NotScalar`](crate::Error::NotScalar) for containers and null,
/// [`Error::NotNumeric`](crate::Error::NotNumeric) for scalars that don't
/// pass the numeric-string test.
pub fn float(path: &str, data: &Value, default: f64) -> Result<f64> {
    match path::resolve(path, data) {
        Some(value) => coerce::into_float(path, value),
        None => Ok(default),
    }
}

/// Extract a float at `path`, failing when the path is absent.
///
/// # Errors
///
/// [`Error::RequiredMissing`](crate::Error::RequiredMissing) when the path is
/// absent; otherwise as [`float`].
pub fn require_float(path: &str, data: &Value) -> Result<f64> {
    coerce::into_float(path, require(path, data)?)
}

/// Extract a boolean at `path`, or `default` when the path is absent.
///
/// Standard truthiness: `false`, `0`, `0.0`, `""`, and `"0"` are false,
/// everything else true.
///
/// # Errors
///
/// [`Error::NotScalar`](crate::Error::NotScalar) when the found value is a
/// container or null.
pub fn bool(path: &str, data: &Value, default: bool) -> Result<bool> {
    match path::resolve(path, data) {
        Some(value) => coerce::into_bool(path, value),
        None => Ok(default),
    }
}

/// Extract a boolean at `path`, failing when the path is absent.
///
/// # Errors
///
/// [`Error::RequiredMissing`](crate::Error::RequiredMissing) when the path is
/// absent; otherwise as [`bool()`](crate::bool).
pub fn require_bool(path: &str, data: &Value) -> Result<bool> {
    coerce::into_bool(path, require(path, data)?)
}

/// Extract a sequence at `path`, or `default` when the path is absent.
///
/// The sequence is returned unchanged; elements are not coerced.
///
/// # Errors
///
/// [`Error::NotArray`](crate::Error::NotArray) when the found value is not a
/// sequence.
pub fn array(path: &str, data: &Value, default: Vec<Value>) -> Result<Vec<Value>> {
    match path::resolve(path, data) {
        Some(value) => coerce::into_array(path, value),
        None => Ok(default),
    }
}

/// Extract a sequence at `path` and map every element through `map_fn`.
///
/// Order and count are preserved. When the path is absent the default is
/// returned as-is; `map_fn` is never applied to default elements.
///
/// # Errors
///
/// [`Error::NotArray`](crate::Error::NotArray) when the found value is not a
/// sequence.
///
/// ```
/// use dotget::{array_of, Value};
/// use serde_json::json;
///
/// let data = Value::from(json!({"x": ["1", "2", "3"]}));
/// let ints = array_of(
///     "x",
///     &data,
///     |v| v.as_str().map_or(0, |s| s.parse().unwrap_or(0)),
///     Vec::new(),
/// );
/// assert_eq!(ints, Ok(vec![1, 2, 3]));
/// ```
pub fn array_of<T, F>(path: &str, data: &Value, map_fn: F, default: Vec<T>) -> Result<Vec<T>>
where
    F: FnMut(Value) -> T,
{
    match path::resolve(path, data) {
        Some(value) => Ok(coerce::into_array(path, value)?
            .into_iter()
            .map(map_fn)
            .collect()),
        None => Ok(default),
    }
}

/// Extract the record instance of concrete type `T` at `path`.
///
/// The returned handle is the very instance stored in the data, not a copy.
/// There is no default variant: absence is not an instance of anything.
///
/// # Errors
///
/// [`Error::NotInstance`](crate::Error::NotInstance) for every outcome other
/// than a found record of exactly type `T`: absence, a non-record value, or
/// a record of a different concrete type.
pub fn object_of<T: Record>(path: &str, data: &Value) -> Result<Arc<T>> {
    if let Some(Value::Record(record)) = path::resolve(path, data) {
        if let Ok(instance) = record.as_any_arc().downcast::<T>() {
            return Ok(instance);
        }
    }
    Err(Error::not_instance(path, any::type_name::<T>()))
}

fn require(path: &str, data: &Value) -> Result<Value> {
    path::resolve(path, data).ok_or_else(|| Error::missing(path))
}
