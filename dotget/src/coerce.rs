//! Scalar validation and coercion rules.
//!
//! Each function takes a value already resolved from a path, checks it
//! against the requested target kind, and either casts or reports a typed
//! error carrying the path. A found null is never scalar-valid here; only
//! the raw `get` operation passes nulls through.

use crate::error::{Error, NumericKind, Result};
use crate::value::Value;

/// Cast a scalar to its canonical text form.
///
/// Booleans render as `true`/`false`, numbers as their digit forms, per the
/// standard `Display` rules of the scalar types.
pub(crate) fn into_string(path: &str, value: Value) -> Result<String> {
    match value {
        Value::Bool(b) => Ok(b.to_string()),
        Value::Int(i) => Ok(i.to_string()),
        Value::Float(f) => Ok(f.to_string()),
        Value::String(s) => Ok(s),
        _ => Err(Error::not_scalar(path)),
    }
}

/// Cast a scalar to an integer, truncating floats and numeric strings.
pub(crate) fn into_int(path: &str, value: Value) -> Result<i64> {
    match value {
        Value::Int(i) => Ok(i),
        Value::Float(f) => Ok(truncate(f)),
        Value::String(s) => {
            int_from_str(&s).ok_or_else(|| Error::not_numeric(path, NumericKind::Int))
        }
        Value::Bool(_) => Err(Error::not_numeric(path, NumericKind::Int)),
        _ => Err(Error::not_scalar(path)),
    }
}

/// Cast a scalar to a float, widening integers and parsing numeric strings.
pub(crate) fn into_float(path: &str, value: Value) -> Result<f64> {
    match value {
        Value::Float(f) => Ok(f),
        Value::Int(i) => Ok(widen(i)),
        Value::String(s) => {
            float_from_str(&s).ok_or_else(|| Error::not_numeric(path, NumericKind::Float))
        }
        Value::Bool(_) => Err(Error::not_numeric(path, NumericKind::Float)),
        _ => Err(Error::not_scalar(path)),
    }
}

/// Cast a scalar via standard truthiness.
///
/// Falsy: `false`, `0`, `0.0`, and the strings `""` and `"0"`. Everything
/// else, `"0.0"` included, is truthy.
pub(crate) fn into_bool(path: &str, value: Value) -> Result<bool> {
    match value {
        Value::Bool(b) => Ok(b),
        Value::Int(i) => Ok(i != 0),
        Value::Float(f) => Ok(f != 0.0),
        Value::String(s) => Ok(!s.is_empty() && s != "0"),
        _ => Err(Error::not_scalar(path)),
    }
}

/// Require the sequence shape, returned unchanged with no element coercion.
pub(crate) fn into_array(path: &str, value: Value) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        _ => Err(Error::not_array(path)),
    }
}

fn int_from_str(s: &str) -> Option<i64> {
    if let Ok(i) = s.parse::<i64>() {
        return Some(i);
    }
    float_from_str(s).map(truncate)
}

/// Truncation toward zero; `as` saturates at the `i64` bounds on overflow.
#[allow(clippy::cast_possible_truncation, reason = "truncation is the rule here")]
fn truncate(f: f64) -> i64 {
    f as i64
}

#[allow(
    clippy::cast_precision_loss,
    reason = "widening follows the platform int-to-float cast rule"
)]
fn widen(i: i64) -> f64 {
    i as f64
}

/// The strict numeric-string test.
///
/// Accepts only a full optionally-signed decimal integer or float literal
/// with optional exponent. Empty strings, trailing garbage, surrounding
/// whitespace, and the `inf`/`nan` spellings all fail.
fn float_from_str(s: &str) -> Option<f64> {
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|f| f.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Map;

    #[test]
    fn string_casts_follow_display_rules() {
        let cases = [
            (Value::String("value".to_string()), "value"),
            (Value::Int(123), "123"),
            (Value::Float(123.5), "123.5"),
            (Value::Bool(true), "true"),
            (Value::Bool(false), "false"),
        ];

        for (value, expected) in cases {
            assert_eq!(into_string("p", value), Ok(expected.to_string()));
        }
    }

    #[test]
    fn containers_and_null_are_not_scalar() {
        let offenders = [Value::Null, Value::Array(Vec::new()), Value::Map(Map::new())];

        for value in offenders {
            assert_eq!(
                into_string("p", value.clone()),
                Err(Error::not_scalar("p"))
            );
            assert_eq!(into_int("p", value.clone()), Err(Error::not_scalar("p")));
            assert_eq!(into_float("p", value.clone()), Err(Error::not_scalar("p")));
            assert_eq!(into_bool("p", value), Err(Error::not_scalar("p")));
        }
    }

    #[test]
    fn int_casts_truncate() {
        assert_eq!(into_int("p", Value::Int(123)), Ok(123));
        assert_eq!(into_int("p", Value::Float(123.9)), Ok(123));
        assert_eq!(into_int("p", Value::Float(-1.9)), Ok(-1));
        assert_eq!(into_int("p", Value::String("123".to_string())), Ok(123));
        assert_eq!(into_int("p", Value::String("123.9".to_string())), Ok(123));
        assert_eq!(into_int("p", Value::String("+5".to_string())), Ok(5));
        assert_eq!(into_int("p", Value::String("1e5".to_string())), Ok(100_000));
    }

    #[test]
    fn non_numeric_scalars_fail_int() {
        let offenders = [
            Value::String("test".to_string()),
            Value::String(String::new()),
            Value::String("12abc".to_string()),
            Value::String(" 12".to_string()),
            Value::String("12 ".to_string()),
            Value::String("0x1A".to_string()),
            Value::String("inf".to_string()),
            Value::String("NaN".to_string()),
            Value::Bool(true),
        ];

        for value in offenders {
            assert_eq!(
                into_int("p", value),
                Err(Error::not_numeric("p", NumericKind::Int))
            );
        }
    }

    #[test]
    fn float_casts_widen_and_parse() {
        assert_eq!(into_float("p", Value::Float(123.1)), Ok(123.1));
        assert_eq!(into_float("p", Value::Int(123)), Ok(123.0));
        assert_eq!(into_float("p", Value::String("123.1".to_string())), Ok(123.1));
        assert_eq!(into_float("p", Value::String(".5".to_string())), Ok(0.5));
        assert_eq!(into_float("p", Value::String("-2e3".to_string())), Ok(-2000.0));
        assert_eq!(
            into_float("p", Value::String("test".to_string())),
            Err(Error::not_numeric("p", NumericKind::Float))
        );
        assert_eq!(
            into_float("p", Value::Bool(false)),
            Err(Error::not_numeric("p", NumericKind::Float))
        );
    }

    #[test]
    fn bool_truthiness_rule() {
        let cases = [
            (Value::Bool(true), true),
            (Value::Bool(false), false),
            (Value::Int(0), false),
            (Value::Int(-1), true),
            (Value::Float(0.0), false),
            (Value::Float(0.1), true),
            (Value::String(String::new()), false),
            (Value::String("0".to_string()), false),
            (Value::String("0.0".to_string()), true),
            (Value::String("1".to_string()), true),
            (Value::String("false".to_string()), true),
        ];

        for (value, expected) in cases {
            assert_eq!(into_bool("p", value), Ok(expected));
        }
    }

    #[test]
    fn arrays_pass_through_everything_else_fails() {
        let items = vec![Value::Int(1), Value::String("x".to_string())];
        assert_eq!(into_array("p", Value::Array(items.clone())), Ok(items));

        let offenders = [
            Value::Null,
            Value::String("test".to_string()),
            Value::Map(Map::new()),
        ];
        for value in offenders {
            assert_eq!(into_array("p", value), Err(Error::not_array("p")));
        }
    }
}
