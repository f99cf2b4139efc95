use std::any::{type_name, Any};

use super::unsupported;
use crate::error::{CoerceError, ElementError, SequenceError};
use crate::value::Value;

/// Lifts a coercer for `T` into a coercer for `Vec<T>`.
///
/// A value already holding a `Vec<T>` is cloned. A [`Value::List`] has every
/// element coerced; if any element fails, no partial result is returned and
/// the error lists every failed index. Use `T = Arc<U>` with
/// [`exact_arc`](super::exact_arc) for sequences of shared values.
pub fn sequence<T, F>(coerce: F) -> impl Fn(&Value) -> Result<Vec<T>, CoerceError>
where
    T: Any + Clone,
    F: Fn(&Value) -> Result<T, CoerceError>,
{
    move |value| {
        if let Some(native) = value.as_any().downcast_ref::<Vec<T>>() {
            return Ok(native.clone());
        }

        let Value::List(items) = value else {
            return Err(unsupported(value, type_name::<Vec<T>>()));
        };

        let mut out = Vec::with_capacity(items.len());
        let mut failures = Vec::new();
        for (index, item) in items.iter().enumerate() {
            match coerce(item) {
                Ok(v) => out.push(v),
                Err(error) => failures.push(ElementError { index, error }),
            }
        }

        if failures.is_empty() {
            Ok(out)
        } else {
            Err(SequenceError::new(failures).into())
        }
    }
}
