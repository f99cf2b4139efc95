//! The loose dictionary and its typed accessors.

mod accessors;
mod retrieve;

pub use retrieve::{
    get, get_exact, get_exact_arc, get_non_zero_or, get_or, must_get, must_get_exact,
    must_get_exact_arc,
};

use std::collections::hash_map::{self, HashMap};
use std::io::Read;
use std::str::FromStr;

use serde::Deserialize;

use crate::value::Value;

/// A string-keyed mapping of dynamically-typed values.
///
/// Values are untyped when stored; reads impose a type through a coercer.
///
/// ```
/// use loose_dict::Dict;
///
/// let dict: Dict = r#"{"port": "8080", "debug": 1}"#.parse()?;
/// assert_eq!(dict.get_int("port")?, 8080);
/// assert!(dict.get_bool("debug")?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Dict {
    entries: HashMap<String, Value>,
}

impl Dict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a JSON object.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Decodes one JSON object from a stream. Bytes after the object are left
    /// unread.
    pub fn from_reader(reader: impl Read) -> Result<Self, serde_json::Error> {
        let mut deserializer = serde_json::Deserializer::from_reader(reader);
        Dict::deserialize(&mut deserializer)
    }

    /// Decodes a TOML document. Datetimes are kept as their text form.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        let table: toml::Table = toml::from_str(s)?;
        Ok(table
            .into_iter()
            .map(|(k, v)| (k, Value::from(v)))
            .collect())
    }

    /// The raw value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    /// Returns a copy of `self` with every top-level key of `other` written
    /// over it. Nested values are replaced whole, never merged.
    pub fn shallow_merge(&self, other: &Dict) -> Dict {
        let mut out = self.clone();
        for (key, value) in &other.entries {
            out.entries.insert(key.clone(), value.clone());
        }
        out
    }
}

impl FromStr for Dict {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl From<HashMap<String, Value>> for Dict {
    fn from(entries: HashMap<String, Value>) -> Self {
        Self { entries }
    }
}

impl From<Dict> for HashMap<String, Value> {
    fn from(dict: Dict) -> Self {
        dict.entries
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Dict {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Dict {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl IntoIterator for Dict {
    type Item = (String, Value);
    type IntoIter = hash_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dict {
    type Item = (&'a String, &'a Value);
    type IntoIter = hash_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use time::Duration;

    use super::*;

    #[test]
    fn test_shallow_merge_replaces_nested_values() {
        let base: Dict = r#"{"a": 1, "b": {"x": 1}}"#.parse().unwrap();
        let overlay: Dict = r#"{"b": {"y": 2}}"#.parse().unwrap();

        let merged = base.shallow_merge(&overlay);

        let expected: Dict = r#"{"a": 1, "b": {"y": 2}}"#.parse().unwrap();
        assert_eq!(merged, expected);
    }

    #[test]
    fn test_shallow_merge_leaves_inputs_untouched() {
        let base = Dict::from_iter([("a", 1), ("b", 2)]);
        let overlay = Dict::from_iter([("b", 20), ("c", 30)]);

        let merged = base.shallow_merge(&overlay);

        assert_eq!(merged, Dict::from_iter([("a", 1), ("b", 20), ("c", 30)]));
        assert_eq!(base, Dict::from_iter([("a", 1), ("b", 2)]));
        assert_eq!(overlay, Dict::from_iter([("b", 20), ("c", 30)]));
    }

    #[test]
    fn test_from_slice_rejects_non_objects() {
        assert!(Dict::from_slice(b"[1, 2]").is_err());
        assert!(Dict::from_slice(b"{\"a\": ").is_err());
        assert!(Dict::from_slice(b"{}").unwrap().is_empty());
    }

    #[test]
    fn test_from_reader_reads_one_object() {
        let input: &[u8] = br#"{"a": "b"} {"c": "d"}"#;
        let dict = Dict::from_reader(input).unwrap();
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get("a"), Some(&Value::from("b")));
    }

    #[test]
    fn test_from_toml_str() {
        let dict = Dict::from_toml_str(
            r#"
            name = "svc"
            timeout = "1m30s"

            [server]
            port = 8080
            "#,
        )
        .unwrap();
        assert_eq!(dict.get_string("name").unwrap(), "svc");
        assert_eq!(
            dict.get_duration("timeout").unwrap(),
            Duration::seconds(90)
        );
        assert_eq!(dict.get_dict("server").unwrap().get_int("port").unwrap(), 8080);
    }

    #[test]
    fn test_insert_and_remove() {
        let mut dict = Dict::new();
        assert!(dict.insert("k", "v").is_none());
        assert_eq!(dict.insert("k", 2), Some(Value::from("v")));
        assert!(dict.contains_key("k"));
        assert_eq!(dict.keys().collect::<Vec<_>>(), vec!["k"]);
        assert_eq!(dict.remove("k"), Some(Value::from(2)));
        assert!(dict.is_empty());
    }
}
