use std::fs::File;
use std::io::Write;

use time::Duration;

use loose_dict::{coerce, get, get_or, CoerceError, Dict, DictError, Value};

const WELL_DOCUMENTED_JSON: &str = r#"{
    "definitelyString": false,
    "docsSayInt": "200",
    "billIsSureItsABool": "true",
    "timeoutNanos": 5000000000,
    "retryAfter": "1h30m",
    "ratio": 0.75,
    "server": {"host": "example.com", "port": "8080"},
    "ports": ["1", 2, "bad"]
}"#;

#[test]
fn test_loosely_typed_fields_read_as_documented() {
    let d = Dict::from_slice(WELL_DOCUMENTED_JSON.as_bytes()).unwrap();

    assert_eq!(d.must_get_string("definitelyString"), "false");
    assert_eq!(d.must_get_int("docsSayInt"), 200);
    assert!(d.must_get_bool("billIsSureItsABool"));
    assert_eq!(d.must_get_duration("timeoutNanos"), Duration::seconds(5));
    assert_eq!(d.must_get_duration("retryAfter"), Duration::seconds(5400));
}

#[test]
fn test_reader_and_slice_agree() {
    let from_slice = Dict::from_slice(WELL_DOCUMENTED_JSON.as_bytes()).unwrap();
    let from_reader = Dict::from_reader(WELL_DOCUMENTED_JSON.as_bytes()).unwrap();

    assert_eq!(from_slice, from_reader);
}

#[test]
fn test_nested_object_reads_as_dict() {
    let d: Dict = WELL_DOCUMENTED_JSON.parse().unwrap();

    let server = d.get_dict("server").unwrap();
    assert_eq!(server.get_string("host").unwrap(), "example.com");
    assert_eq!(server.get_int("port").unwrap(), 8080);
}

#[test]
fn test_float_reads() {
    let d: Dict = WELL_DOCUMENTED_JSON.parse().unwrap();

    assert_eq!(d.get_int("ratio").unwrap(), 0);
    assert!(d.get_bool("ratio").unwrap());
    assert_eq!(d.get_string("ratio").unwrap(), "0.75");
}

#[test]
fn test_bad_sequence_element_reports_its_index() {
    let d: Dict = WELL_DOCUMENTED_JSON.parse().unwrap();

    let err = d.get_ints("ports").unwrap_err();
    let Some(CoerceError::Sequence(seq)) = err.coerce_error() else {
        panic!("expected a sequence error, got {err:?}");
    };
    assert_eq!(seq.indexes().collect::<Vec<_>>(), vec![2]);
    assert_eq!(d.get_ints_or("ports", vec![]), Vec::<i64>::new());
}

#[test]
fn test_zero_value_policy_differs_from_plain_fallback() {
    let d: Dict = r#"{"count": 0}"#.parse().unwrap();

    assert_eq!(d.get_int_or("count", 5), 5);
    assert_eq!(get_or(&d, "count", coerce::int, 5), 0);
}

#[test]
fn test_missing_key() {
    let d: Dict = "{}".parse().unwrap();

    assert!(matches!(
        get(&d, "anything", coerce::string),
        Err(DictError::KeyNotFound(_))
    ));
    assert_eq!(d.get_string_or("anything", "dflt"), "dflt");
}

#[test]
fn test_decode_errors_surface_unchanged() {
    let err = Dict::from_slice(b"{\"a\": tru}").unwrap_err();

    assert!(err.is_syntax());
}

#[test]
fn test_json_null_is_stored() {
    let d: Dict = r#"{"gone": null}"#.parse().unwrap();

    assert_eq!(d.get("gone"), Some(&Value::Null));
    assert!(d.get_string("gone").is_err());
}

#[test]
fn test_reads_dict_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(WELL_DOCUMENTED_JSON.as_bytes()).unwrap();

    let d = Dict::from_reader(File::open(file.path()).unwrap()).unwrap();

    assert_eq!(d.get_int("docsSayInt").unwrap(), 200);
    assert_eq!(
        d.get_duration_or("missing", -Duration::seconds(1)),
        -Duration::seconds(1)
    );
}
