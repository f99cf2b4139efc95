use std::any::{type_name, Any};
use std::sync::Arc;

use super::unsupported;
use crate::error::CoerceError;
use crate::value::Value;

/// Accepts the value only if it already holds a `T`. No conversion is tried,
/// so an `i64` never satisfies `exact::<i32>` and text never satisfies
/// `exact::<i64>`.
pub fn exact<T: Any + Clone>(value: &Value) -> Result<T, CoerceError> {
    value
        .as_any()
        .downcast_ref::<T>()
        .cloned()
        .ok_or_else(|| unsupported(value, type_name::<T>()))
}

/// Like [`exact`], returning a shared `T`.
///
/// A value that already holds an `Arc<T>` (or a [`Native`](crate::Native)
/// built from one) is shared as is. Otherwise the `T` is copied into a new
/// `Arc`.
pub fn exact_arc<T: Any + Clone + Send + Sync>(value: &Value) -> Result<Arc<T>, CoerceError> {
    if let Some(shared) = value.as_any().downcast_ref::<Arc<T>>() {
        return Ok(Arc::clone(shared));
    }
    if let Value::Native(native) = value {
        if let Some(shared) = native.downcast_arc::<T>() {
            return Ok(shared);
        }
    }
    value
        .as_any()
        .downcast_ref::<T>()
        .map(|v| Arc::new(v.clone()))
        .ok_or_else(|| unsupported(value, type_name::<Arc<T>>()))
}
