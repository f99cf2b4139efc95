use std::any::type_name;
use time::Duration;

use super::unsupported;
use crate::dict::Dict;
use crate::duration::{format_duration, parse_duration};
use crate::error::CoerceError;
use crate::value::{Capabilities, Value};

/// Coerces to text.
///
/// Accepts text; integers (base 10); floats (shortest decimal form, so `3.0`
/// renders as `"3"`); booleans; durations (canonical text form); then custom
/// values exposing `as_text` or `to_text`.
pub fn string(value: &Value) -> Result<String, CoerceError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Int(i) => Ok(i.to_string()),
        Value::Uint(u) => Ok(u.to_string()),
        Value::Float(f) => Ok(f.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Duration(d) => Ok(format_duration(*d)),
        Value::Custom(custom) => custom
            .as_text()
            .or_else(|| custom.to_text())
            .ok_or_else(|| unsupported(value, type_name::<String>())),
        _ => Err(unsupported(value, type_name::<String>())),
    }
}

/// Coerces to an integer.
///
/// Numerals are narrowed with `as` (floats truncate toward zero, no overflow
/// check). `true` is 1, `false` is 0, text is parsed as base 10, and
/// durations become their nanosecond count.
pub fn int(value: &Value) -> Result<i64, CoerceError> {
    match value {
        Value::Int(i) => Ok(*i),
        Value::Uint(u) => Ok(*u as i64),
        Value::Float(f) => Ok(*f as i64),
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::String(s) => s.parse::<i64>().map_err(|source| CoerceError::InvalidInt {
            input: s.clone(),
            source,
        }),
        Value::Duration(d) => Ok(nanos(*d)),
        Value::Custom(custom) => match custom_duration(&**custom) {
            Some(result) => result.map(nanos),
            None => Err(unsupported(value, "i64")),
        },
        _ => Err(unsupported(value, "i64")),
    }
}

/// Coerces to a boolean.
///
/// Text must be one of `1 t T TRUE true True 0 f F FALSE false False`.
/// Numerals are true when strictly greater than zero.
pub fn boolean(value: &Value) -> Result<bool, CoerceError> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) => {
            parse_bool(s).ok_or_else(|| CoerceError::InvalidBool { input: s.clone() })
        }
        Value::Int(i) => Ok(*i > 0),
        Value::Uint(u) => Ok(*u > 0),
        Value::Float(f) => Ok(*f > 0.0),
        _ => Err(unsupported(value, "bool")),
    }
}

/// Coerces to a duration.
///
/// Numerals are a nanosecond count (floats truncate) and text uses the
/// grammar in [`crate::duration`]. Unsigned counts narrow to `i64` with `as`.
pub fn duration(value: &Value) -> Result<Duration, CoerceError> {
    match value {
        Value::Duration(d) => Ok(*d),
        Value::Int(i) => Ok(Duration::nanoseconds(*i)),
        Value::Uint(u) => Ok(Duration::nanoseconds(*u as i64)),
        Value::Float(f) => Ok(Duration::nanoseconds(*f as i64)),
        Value::String(s) => parse_duration(s).map_err(|source| CoerceError::InvalidDuration {
            input: s.clone(),
            source,
        }),
        Value::Custom(custom) => custom_duration(&**custom)
            .unwrap_or_else(|| Err(unsupported(value, type_name::<Duration>()))),
        _ => Err(unsupported(value, type_name::<Duration>())),
    }
}

/// Coerces to a nested dictionary, from a [`Dict`] or a plain string-keyed map.
pub fn dict(value: &Value) -> Result<Dict, CoerceError> {
    match value {
        Value::Dict(d) => Ok(d.clone()),
        Value::Map(m) => Ok(Dict::from(m.clone())),
        _ => Err(unsupported(value, type_name::<Dict>())),
    }
}

fn custom_duration(custom: &dyn Capabilities) -> Option<Result<Duration, CoerceError>> {
    if let Some(d) = custom.duration() {
        return Some(Ok(d));
    }
    custom.try_duration().map(|result| {
        result.map_err(|source| CoerceError::Capability {
            type_name: custom.type_name(),
            source,
        })
    })
}

fn nanos(d: Duration) -> i64 {
    d.whole_nanoseconds() as i64
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
