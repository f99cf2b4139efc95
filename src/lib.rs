//! Typed reads over a loosely-typed, string-keyed dictionary.
//!
//! A [`Dict`] holds [`Value`]s of any shape, usually decoded from JSON. Reads
//! go through a coercer that converts the stored representation into the
//! requested type: `"200"` reads as the integer 200, `5000000000` reads as a
//! five second duration.
//!
//! ```
//! use time::Duration;
//! use loose_dict::{coerce, Dict};
//!
//! let dict: Dict = r#"{"port": "8080", "timeout": "1m30s", "hosts": ["a", "b"]}"#.parse()?;
//!
//! assert_eq!(dict.get_int("port")?, 8080);
//! assert_eq!(dict.get_duration("timeout")?, Duration::seconds(90));
//! assert_eq!(dict.get_int_or("retries", 3), 3);
//!
//! let hosts = loose_dict::get(&dict, "hosts", coerce::sequence(coerce::string))?;
//! assert_eq!(hosts, ["a", "b"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod coerce;
pub mod dict;
pub mod duration;
mod error;
pub mod value;

pub use dict::{
    get, get_exact, get_exact_arc, get_non_zero_or, get_or, must_get, must_get_exact,
    must_get_exact_arc, Dict,
};
pub use error::{BoxError, CoerceError, DictError, ElementError, SequenceError};
pub use value::{Capabilities, Native, Value};
