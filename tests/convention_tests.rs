//! The keyword convention, checked case by case.

use serde_kwjson::{decode, decode_as_sequence, encode, kw, kwjson, Keyword, Map, Number, Value};

#[test]
fn test_keyword_encodes_with_sentinel() {
    assert_eq!(encode(&Value::from(kw!(ok))).unwrap(), r#"":ok""#);
    assert_eq!(encode(&Value::from(Keyword::new(""))).unwrap(), r#"":""#);
}

#[test]
fn test_keyword_law() {
    for name in ["ok", "fail", "read-only", "ns/name", "a.b", "x1", ":nested"] {
        let mut map = Map::new();
        map.insert("key", Value::from(Keyword::new(name)));
        let value = Value::Object(map);

        assert_eq!(decode(&encode(&value).unwrap()).unwrap(), value, "{}", name);
    }
}

#[test]
fn test_plain_strings_pass_through() {
    for s in ["", "ok", "a:b", " :x", "日本語", "ok:"] {
        let value = Value::from(s);
        assert_eq!(decode(&encode(&value).unwrap()).unwrap(), value, "{:?}", s);
    }
}

#[test]
fn test_sentinel_collision_is_preserved() {
    let text = encode(&Value::from(":foo")).unwrap();
    assert_eq!(text, r#"":foo""#);
    assert_eq!(decode(&text).unwrap(), Value::from(kw!(foo)));
}

#[test]
fn test_numeric_stability() {
    let first = decode("42").unwrap();
    let second = decode("42").unwrap();
    assert_eq!(first, Value::Number(Number::Integer(42)));
    assert_eq!(first, second);

    // Small, negative and unsigned-only integers share one representation.
    let values = decode_as_sequence("[0, -3, 18446744073709551615]").unwrap();
    for item in values.as_array().unwrap() {
        assert!(matches!(item, Value::Number(Number::Integer(_))));
    }
    assert_eq!(
        values.as_array().unwrap()[2],
        Value::Number(Number::Integer(u64::MAX as i128))
    );
}

#[test]
fn test_floats_stay_floats() {
    assert_eq!(decode("1.0").unwrap(), Value::Number(Number::Float(1.0)));
    assert_eq!(decode("-2.5e3").unwrap(), Value::Number(Number::Float(-2500.0)));
}

#[test]
fn test_sequence_normalization() {
    let value = decode_as_sequence("[1,2,3]").unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0], Value::from(1));
    assert_eq!(items[1], Value::from(2));
    assert_eq!(items[2], Value::from(3));

    let nested = decode_as_sequence(r#"[[":r", 1]]"#).unwrap();
    assert_eq!(nested, kwjson!([[(kw!(r)), 1]]));
}

#[test]
fn test_sequence_normalization_passes_other_values() {
    let obj = decode_as_sequence(r#"{"a":":b"}"#).unwrap();
    assert_eq!(obj, kwjson!({ "a": (kw!(b)) }));

    assert_eq!(decode_as_sequence("null").unwrap(), Value::Null);
    assert_eq!(decode_as_sequence(r#"":x""#).unwrap(), Value::from(kw!(x)));
}

#[test]
fn test_end_to_end_example() {
    let value = kwjson!({
        "status": (kw!(ok)),
        "count": 3
    });

    assert_eq!(encode(&value).unwrap(), r#"{"status":":ok","count":3}"#);

    let back = decode(r#"{"status":":ok","count":3}"#).unwrap();
    assert_eq!(back, value);
    assert_eq!(back.get("count"), Some(&Value::Number(Number::Integer(3))));
}

#[test]
fn test_encode_does_not_mutate_input() {
    let value = kwjson!({ "a": [(kw!(b)), {"c": (kw!(d))}] });
    let snapshot = value.clone();
    let _ = encode(&value).unwrap();
    assert_eq!(value, snapshot);
}
