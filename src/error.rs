use std::fmt;
use std::num::ParseIntError;

use thiserror::Error;

use crate::duration::DurationError;

/// Boxed error returned by a value's fallible capabilities.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Why a coercer rejected a value.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoerceError {
    #[error("cannot coerce value type: {from} to {to}")]
    Unsupported {
        from: &'static str,
        to: &'static str,
    },

    #[error("cannot parse {input:?} as an integer: {source}")]
    InvalidInt {
        input: String,
        source: ParseIntError,
    },

    #[error("cannot parse {input:?} as a boolean")]
    InvalidBool { input: String },

    #[error("cannot parse {input:?} as a duration: {source}")]
    InvalidDuration {
        input: String,
        source: DurationError,
    },

    #[error("{type_name} failed to produce a duration: {source}")]
    Capability {
        type_name: &'static str,
        source: BoxError,
    },

    #[error(transparent)]
    Sequence(#[from] SequenceError),
}

/// A single failed element of a sequence coercion.
#[derive(Debug, Error)]
#[error("index {index}: {error}")]
pub struct ElementError {
    pub index: usize,
    #[source]
    pub error: CoerceError,
}

/// Every element failure from one sequence coercion, in index order.
#[derive(Debug)]
pub struct SequenceError {
    failures: Vec<ElementError>,
}

impl SequenceError {
    pub(crate) fn new(failures: Vec<ElementError>) -> Self {
        Self { failures }
    }

    pub fn failures(&self) -> &[ElementError] {
        &self.failures
    }

    /// Indexes of the elements that failed.
    pub fn indexes(&self) -> impl Iterator<Item = usize> + '_ {
        self.failures.iter().map(|f| f.index)
    }
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SequenceError {}

/// Error from a keyed retrieval on a [`Dict`](crate::Dict).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DictError {
    #[error("key not found: {0:?}")]
    KeyNotFound(String),

    #[error("value type mismatch for key {key:?}: expected {expected}, saw {actual}: {source}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        actual: &'static str,
        source: CoerceError,
    },
}

impl DictError {
    /// The coercer's error, if the key was present.
    pub fn coerce_error(&self) -> Option<&CoerceError> {
        match self {
            DictError::TypeMismatch { source, .. } => Some(source),
            DictError::KeyNotFound(_) => None,
        }
    }
}
