use time::Duration;

use super::{get, get_non_zero_or, get_or, must_get, Dict};
use crate::coerce::{self, sequence};
use crate::error::DictError;

/// Typed shorthands for the retrieval combinators.
///
/// The `_or` variants for integers, text and durations treat a zero value as
/// missing (see [`get_non_zero_or`]); the others only fall back on error.
impl Dict {
    pub fn get_int(&self, key: &str) -> Result<i64, DictError> {
        get(self, key, coerce::int)
    }

    pub fn get_int_or(&self, key: &str, default: i64) -> i64 {
        get_non_zero_or(self, key, coerce::int, default)
    }

    #[track_caller]
    pub fn must_get_int(&self, key: &str) -> i64 {
        must_get(self, key, coerce::int)
    }

    pub fn get_string(&self, key: &str) -> Result<String, DictError> {
        get(self, key, coerce::string)
    }

    pub fn get_string_or(&self, key: &str, default: impl Into<String>) -> String {
        get_non_zero_or(self, key, coerce::string, default.into())
    }

    #[track_caller]
    pub fn must_get_string(&self, key: &str) -> String {
        must_get(self, key, coerce::string)
    }

    pub fn get_bool(&self, key: &str) -> Result<bool, DictError> {
        get(self, key, coerce::boolean)
    }

    pub fn get_bool_or(&self, key: &str, default: bool) -> bool {
        get_or(self, key, coerce::boolean, default)
    }

    #[track_caller]
    pub fn must_get_bool(&self, key: &str) -> bool {
        must_get(self, key, coerce::boolean)
    }

    pub fn get_duration(&self, key: &str) -> Result<Duration, DictError> {
        get(self, key, coerce::duration)
    }

    pub fn get_duration_or(&self, key: &str, default: Duration) -> Duration {
        get_non_zero_or(self, key, coerce::duration, default)
    }

    #[track_caller]
    pub fn must_get_duration(&self, key: &str) -> Duration {
        must_get(self, key, coerce::duration)
    }

    pub fn get_dict(&self, key: &str) -> Result<Dict, DictError> {
        get(self, key, coerce::dict)
    }

    pub fn get_dict_or(&self, key: &str, default: Dict) -> Dict {
        get_or(self, key, coerce::dict, default)
    }

    #[track_caller]
    pub fn must_get_dict(&self, key: &str) -> Dict {
        must_get(self, key, coerce::dict)
    }

    pub fn get_strings(&self, key: &str) -> Result<Vec<String>, DictError> {
        get(self, key, sequence(coerce::string))
    }

    pub fn get_strings_or(&self, key: &str, default: Vec<String>) -> Vec<String> {
        get_or(self, key, sequence(coerce::string), default)
    }

    #[track_caller]
    pub fn must_get_strings(&self, key: &str) -> Vec<String> {
        must_get(self, key, sequence(coerce::string))
    }

    pub fn get_ints(&self, key: &str) -> Result<Vec<i64>, DictError> {
        get(self, key, sequence(coerce::int))
    }

    pub fn get_ints_or(&self, key: &str, default: Vec<i64>) -> Vec<i64> {
        get_or(self, key, sequence(coerce::int), default)
    }

    #[track_caller]
    pub fn must_get_ints(&self, key: &str) -> Vec<i64> {
        must_get(self, key, sequence(coerce::int))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dict {
        r#"{
            "definitelyString": false,
            "docsSayInt": "200",
            "billIsSureItsABool": "true",
            "count": 0,
            "timeout": 5000000000,
            "retry": "1h30m",
            "nested": {"x": 1},
            "hosts": ["a", 2, true],
            "ports": ["80", 443],
            "mixed": [1, "two"]
        }"#
        .parse()
        .unwrap()
    }

    #[test]
    fn test_scalar_accessors() {
        let d = sample();
        assert_eq!(d.get_string("definitelyString").unwrap(), "false");
        assert_eq!(d.get_int("docsSayInt").unwrap(), 200);
        assert!(d.get_bool("billIsSureItsABool").unwrap());
        assert_eq!(d.get_duration("timeout").unwrap(), Duration::seconds(5));
        assert_eq!(d.get_duration("retry").unwrap(), Duration::seconds(5400));
        assert_eq!(d.get_dict("nested").unwrap().get_int("x").unwrap(), 1);
    }

    #[test]
    fn test_int_or_treats_zero_as_missing() {
        let d = sample();
        assert_eq!(d.get_int_or("count", 5), 5);
        assert_eq!(d.get_int_or("docsSayInt", 5), 200);
        assert_eq!(d.get_int_or("absent", 5), 5);
    }

    #[test]
    fn test_string_and_duration_or() {
        let mut d = sample();
        d.insert("blank", "");
        assert_eq!(d.get_string_or("blank", "fallback"), "fallback");
        assert_eq!(d.get_string_or("docsSayInt", "fallback"), "200");
        d.insert("none", 0);
        assert_eq!(
            d.get_duration_or("none", Duration::seconds(1)),
            Duration::seconds(1)
        );
        assert_eq!(
            d.get_duration_or("retry", Duration::seconds(1)),
            Duration::seconds(5400)
        );
    }

    #[test]
    fn test_bool_or_keeps_false() {
        let mut d = sample();
        d.insert("off", false);
        assert!(!d.get_bool_or("off", true));
        assert!(d.get_bool_or("absent", true));
        assert!(d.get_bool_or("docsSayInt", true));
    }

    #[test]
    fn test_dict_or() {
        let d = sample();
        let fallback = Dict::from_iter([("y", 2)]);
        assert_eq!(d.get_dict_or("count", fallback.clone()), fallback);
        assert_eq!(d.get_dict_or("nested", fallback).len(), 1);
    }

    #[test]
    fn test_sequence_accessors() {
        let d = sample();
        assert_eq!(d.get_strings("hosts").unwrap(), vec!["a", "2", "true"]);
        assert_eq!(d.get_ints("ports").unwrap(), vec![80, 443]);
        assert!(d.get_ints("mixed").is_err());
        assert_eq!(d.get_ints_or("mixed", vec![9]), vec![9]);
        assert_eq!(d.get_ints_or("ports", vec![9]), vec![80, 443]);
        assert_eq!(d.get_strings_or("count", vec![]), Vec::<String>::new());
        assert_eq!(d.must_get_strings("hosts").len(), 3);
        assert_eq!(d.must_get_ints("ports"), vec![80, 443]);
    }

    #[test]
    fn test_must_accessors() {
        let d = sample();
        assert_eq!(d.must_get_string("definitelyString"), "false");
        assert_eq!(d.must_get_int("docsSayInt"), 200);
        assert!(d.must_get_bool("billIsSureItsABool"));
        assert_eq!(d.must_get_duration("retry"), Duration::seconds(5400));
        assert_eq!(d.must_get_dict("nested").len(), 1);
    }

    #[test]
    #[should_panic(expected = "key not found")]
    fn test_must_get_int_missing() {
        sample().must_get_int("absent");
    }

    #[test]
    #[should_panic(expected = "value type mismatch")]
    fn test_must_get_ints_bad_element() {
        sample().must_get_ints("mixed");
    }
}
