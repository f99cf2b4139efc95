//! Dynamically-typed values held by a [`Dict`].
//!
//! A [`Value`] carries no schema. Typing happens when a value is read through a
//! coercer (see [`crate::coerce`]), never when it is stored.

use std::any::{type_name, Any};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use time::Duration;

use serde::de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

use crate::dict::Dict;
use crate::error::BoxError;

/// A dynamically-typed value.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    String(String),
    Duration(Duration),
    /// A dictionary stored as a value.
    Dict(Dict),
    /// A plain string-keyed mapping, as produced by decoding nested objects.
    Map(HashMap<String, Value>),
    /// A sequence of dynamic values.
    List(Vec<Value>),
    /// An arbitrary concrete value, reachable only through exact coercion
    /// or as a native sequence.
    Native(Native),
    /// A value exposing textual or duration capabilities.
    Custom(Arc<dyn Capabilities>),
}

impl Value {
    /// Wraps an arbitrary concrete value.
    pub fn native<T: Any + Send + Sync>(value: T) -> Self {
        Value::Native(Native::new(value))
    }

    /// Wraps a value that exposes capabilities.
    pub fn custom<C: Capabilities>(value: C) -> Self {
        Value::Custom(Arc::new(value))
    }

    /// Name of the concrete type held, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => type_name::<bool>(),
            Value::Int(_) => type_name::<i64>(),
            Value::Uint(_) => type_name::<u64>(),
            Value::Float(_) => type_name::<f64>(),
            Value::String(_) => type_name::<String>(),
            Value::Duration(_) => type_name::<Duration>(),
            Value::Dict(_) => type_name::<Dict>(),
            Value::Map(_) => type_name::<HashMap<String, Value>>(),
            Value::List(_) => type_name::<Vec<Value>>(),
            Value::Native(native) => native.type_name(),
            Value::Custom(custom) => custom.type_name(),
        }
    }

    /// The concrete value held, for downcasting.
    pub fn as_any(&self) -> &dyn Any {
        match self {
            Value::Null => &(),
            Value::Bool(b) => b,
            Value::Int(i) => i,
            Value::Uint(u) => u,
            Value::Float(f) => f,
            Value::String(s) => s,
            Value::Duration(d) => d,
            Value::Dict(d) => d,
            Value::Map(m) => m,
            Value::List(l) => l,
            Value::Native(native) => native.as_any(),
            Value::Custom(custom) => custom.as_any(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// Optional behaviors a custom value may expose to the coercers.
///
/// Every capability defaults to "not exposed". The text coercer asks
/// [`as_text`](Self::as_text) before [`to_text`](Self::to_text); the integer
/// and duration coercers ask [`duration`](Self::duration) before
/// [`try_duration`](Self::try_duration).
pub trait Capabilities: fmt::Debug + Send + Sync + 'static {
    fn as_any(&self) -> &dyn Any;

    fn type_name(&self) -> &'static str {
        type_name::<Self>()
    }

    /// The value's natural textual form.
    fn as_text(&self) -> Option<String> {
        None
    }

    /// A rendered textual form, used when there is no natural one.
    fn to_text(&self) -> Option<String> {
        None
    }

    fn duration(&self) -> Option<Duration> {
        None
    }

    fn try_duration(&self) -> Option<Result<Duration, BoxError>> {
        None
    }
}

/// Type-erased storage for an arbitrary concrete value.
#[derive(Clone)]
pub struct Native {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Native {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// Stores an already-shared value without copying it.
    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self {
            value,
            type_name: type_name::<T>(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn as_any(&self) -> &dyn Any {
        &*self.value
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref()
    }

    /// Shares the stored value if it is a `T`.
    pub fn downcast_arc<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.value).downcast().ok()
    }

    fn ptr_eq(&self, other: &Native) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.value), Arc::as_ptr(&other.value))
    }
}

impl fmt::Debug for Native {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Native({})", self.type_name)
    }
}

/// Structural equality. Native and custom values compare by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Uint(a), Value::Uint(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Duration(a), Value::Duration(b)) => a == b,
            (Value::Dict(a), Value::Dict(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Native(a), Value::Native(b)) => a.ptr_eq(b),
            (Value::Custom(a), Value::Custom(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            _ => false,
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v.into())
                }
            }
        )*
    };
}

impl_from! {
    bool => Bool,
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Uint,
    u16 => Uint,
    u32 => Uint,
    u64 => Uint,
    f32 => Float,
    f64 => Float,
    String => String,
    &str => String,
    Duration => Duration,
    Dict => Dict,
    HashMap<String, Value> => Map,
    Vec<Value> => List,
    Native => Native,
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::Uint(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Map(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<toml::Value> for Value {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(s) => Value::String(s),
            toml::Value::Integer(i) => Value::Int(i),
            toml::Value::Float(f) => Value::Float(f),
            toml::Value::Boolean(b) => Value::Bool(b),
            toml::Value::Datetime(dt) => Value::String(dt.to_string()),
            toml::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            toml::Value::Table(table) => Value::Map(
                table
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any value")
    }

    fn visit_bool<E>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Int(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Value, E> {
        Ok(i64::try_from(v).map_or(Value::Uint(v), Value::Int))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Float(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.to_owned()))
    }

    fn visit_string<E>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_unit<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut entries = HashMap::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            entries.insert(key, value);
        }
        Ok(Value::Map(entries))
    }
}
