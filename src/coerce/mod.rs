//! Coercers: pure functions from a [`Value`](crate::Value) to a target type.
//!
//! Each scalar coercer checks the value's representation against a fixed,
//! ordered list of accepted shapes and the first match wins. Concrete shapes
//! are checked before [`Capabilities`](crate::Capabilities).

mod exact;
mod scalar;
mod sequence;

pub use exact::{exact, exact_arc};
pub use scalar::{boolean, dict, duration, int, string};
pub use sequence::sequence;

use crate::error::CoerceError;
use crate::value::Value;

fn unsupported(value: &Value, to: &'static str) -> CoerceError {
    CoerceError::Unsupported {
        from: value.type_name(),
        to,
    }
}
