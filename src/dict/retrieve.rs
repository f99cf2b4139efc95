//! Retrieval combinators: look up a key and run a coercer over its value.
//!
//! Four failure policies are offered:
//!
//! - [`get`] returns the error.
//! - [`get_or`] substitutes a fallback on any error.
//! - [`get_non_zero_or`] also substitutes the fallback when the coerced value
//!   is the type's zero value, so a stored `0`, `""` or `false` reads the same
//!   as a missing key.
//! - [`must_get`] panics.

use std::any::{type_name, Any};
use std::sync::Arc;

use super::Dict;
use crate::coerce::{exact, exact_arc};
use crate::error::{CoerceError, DictError};
use crate::value::Value;

/// Looks up `key` and coerces its value.
pub fn get<T, F>(dict: &Dict, key: &str, coerce: F) -> Result<T, DictError>
where
    F: Fn(&Value) -> Result<T, CoerceError>,
{
    let value = dict
        .get(key)
        .ok_or_else(|| DictError::KeyNotFound(key.to_string()))?;
    coerce(value).map_err(|source| DictError::TypeMismatch {
        key: key.to_string(),
        expected: type_name::<T>(),
        actual: value.type_name(),
        source,
    })
}

/// Like [`get`], returning `or` on any error.
pub fn get_or<T, F>(dict: &Dict, key: &str, coerce: F, or: T) -> T
where
    F: Fn(&Value) -> Result<T, CoerceError>,
{
    match get(dict, key, coerce) {
        Ok(v) => v,
        Err(err) => {
            tracing::trace!(key, error = %err, "using fallback value");
            or
        }
    }
}

/// Like [`get_or`], but a successfully coerced zero value (`T::default()`)
/// also yields `or`.
pub fn get_non_zero_or<T, F>(dict: &Dict, key: &str, coerce: F, or: T) -> T
where
    T: Default + PartialEq,
    F: Fn(&Value) -> Result<T, CoerceError>,
{
    match get(dict, key, coerce) {
        Ok(v) if v != T::default() => v,
        Ok(_) => {
            tracing::trace!(key, "zero value, using fallback value");
            or
        }
        Err(err) => {
            tracing::trace!(key, error = %err, "using fallback value");
            or
        }
    }
}

/// Like [`get`], but a failure is treated as a bug in the caller.
///
/// # Panics
///
/// Panics with the error message if the key is missing or its value cannot
/// be coerced.
#[track_caller]
pub fn must_get<T, F>(dict: &Dict, key: &str, coerce: F) -> T
where
    F: Fn(&Value) -> Result<T, CoerceError>,
{
    match get(dict, key, coerce) {
        Ok(v) => v,
        Err(err) => panic!("{err}"),
    }
}

/// Looks up `key` and requires its value to already be a `T`.
pub fn get_exact<T: Any + Clone>(dict: &Dict, key: &str) -> Result<T, DictError> {
    get(dict, key, exact::<T>)
}

/// # Panics
///
/// Panics if the key is missing or its value is not a `T`.
#[track_caller]
pub fn must_get_exact<T: Any + Clone>(dict: &Dict, key: &str) -> T {
    must_get(dict, key, exact::<T>)
}

/// Looks up `key` and requires its value to be a `T`, shared through an `Arc`.
pub fn get_exact_arc<T: Any + Clone + Send + Sync>(
    dict: &Dict,
    key: &str,
) -> Result<Arc<T>, DictError> {
    get(dict, key, exact_arc::<T>)
}

/// # Panics
///
/// Panics if the key is missing or its value is not a `T`.
#[track_caller]
pub fn must_get_exact_arc<T: Any + Clone + Send + Sync>(dict: &Dict, key: &str) -> Arc<T> {
    must_get(dict, key, exact_arc::<T>)
}
