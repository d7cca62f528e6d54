use serde::{Deserialize, Serialize};
use serde_kwjson::{
    decode, decode_as_sequence, decode_from_reader, decode_with_options, encode, encode_pretty,
    encode_to_writer, encode_with_options, from_value, kw, kwjson, to_value, CodecOptions, Error,
    Keyword, Map, Number, Value,
};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Operation {
    f: Keyword,
    key: u64,
    value: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct History {
    process: u32,
    kind: Keyword,
    ops: Vec<Operation>,
}

#[test]
fn test_nested_document() {
    let json = r#"{
        "type": ":invoke",
        "process": 3,
        "value": [[":w", 6, 1], [":r", 8, null]],
        "meta": {":node": "n1", "time": 1.25}
    }"#;

    let value = decode(json).unwrap();
    assert_eq!(value.get("type"), Some(&Value::from(kw!(invoke))));
    assert_eq!(value.get("process").and_then(Value::as_i64), Some(3));

    let txn = value.get("value").and_then(Value::as_array).unwrap();
    assert_eq!(
        txn[0],
        Value::Array(vec![Value::from(kw!(w)), Value::from(6), Value::from(1)])
    );
    assert_eq!(
        txn[1],
        Value::Array(vec![Value::from(kw!(r)), Value::from(8), Value::Null])
    );

    let meta = value.get("meta").and_then(Value::as_object).unwrap();
    assert_eq!(meta.get(kw!(node)), Some(&Value::from("n1")));
    assert_eq!(meta.get("time"), Some(&Value::Number(Number::Float(1.25))));

    let again = decode(&encode(&value).unwrap()).unwrap();
    assert_eq!(again, value);
}

#[test]
fn test_key_order_survives_round_trip() {
    let text = r#"{"zeta":1,":alpha":2,"mid":":x"}"#;
    let value = decode(text).unwrap();

    let keys: Vec<String> = value
        .as_object()
        .unwrap()
        .keys()
        .map(|k| k.to_string())
        .collect();
    assert_eq!(keys, vec!["zeta", ":alpha", "mid"]);

    assert_eq!(encode(&value).unwrap(), text);
}

#[test]
fn test_typed_history_through_value() {
    let history = History {
        process: 1,
        kind: kw!(ok),
        ops: vec![
            Operation {
                f: kw!(w),
                key: 6,
                value: Some(1),
            },
            Operation {
                f: kw!(r),
                key: 8,
                value: None,
            },
        ],
    };

    let value = to_value(&history).unwrap();
    assert_eq!(value.get("kind"), Some(&Value::from(kw!(ok))));

    let text = encode(&value).unwrap();
    assert_eq!(
        text,
        r#"{"process":1,"kind":":ok","ops":[{"f":":w","key":6,"value":1},{"f":":r","key":8,"value":null}]}"#
    );

    let back: History = from_value(decode(&text).unwrap()).unwrap();
    assert_eq!(back, history);
}

#[test]
fn test_typed_keyword_rejects_plain_string() {
    let value = kwjson!({ "f": "w", "key": 1, "value": null });
    let err = from_value::<Operation>(value).unwrap_err();
    assert!(matches!(err, Error::Custom(_)));
}

#[test]
fn test_pretty_output_decodes_back() {
    let value = kwjson!({
        "name": "Alice",
        (kw!(roles)): [(kw!(admin)), (kw!(dev))]
    });

    let pretty = encode_pretty(&value).unwrap();
    assert!(pretty.contains('\n'));
    assert!(pretty.contains("\":roles\": ["));
    assert_eq!(decode(&pretty).unwrap(), value);

    let four = encode_with_options(&value, &CodecOptions::pretty().with_indent(4)).unwrap();
    assert!(four.contains("\n    \"name\""));
}

#[test]
fn test_keyword_keys_option() {
    let text = r#"{":id":":a"}"#;

    let keyed = decode(text).unwrap();
    assert_eq!(keyed.get(kw!(id)), Some(&Value::from(kw!(a))));

    let plain = decode_with_options(text, &CodecOptions::new().with_keyword_keys(false)).unwrap();
    assert_eq!(plain.get(":id"), Some(&Value::from(kw!(a))));
    assert_eq!(plain.get(kw!(id)), None);

    // Both decode back to the same text.
    assert_eq!(encode(&keyed).unwrap(), text);
    assert_eq!(encode(&plain).unwrap(), text);
}

#[test]
fn test_writer_and_reader() {
    let value = kwjson!([(kw!(a)), 1, true]);

    let mut buffer = Vec::new();
    encode_to_writer(&mut buffer, &value, &CodecOptions::new()).unwrap();
    assert_eq!(buffer, br#"[":a",1,true]"#.to_vec());

    let back = decode_from_reader(buffer.as_slice()).unwrap();
    assert_eq!(back, value);
}

#[test]
fn test_serialization_error_names_value() {
    let mut map = Map::new();
    map.insert("ratio", Value::from(f64::NEG_INFINITY));

    match encode(&Value::Object(map)) {
        Err(Error::Serialization(what)) => assert!(what.contains("-inf")),
        other => panic!("Expected serialization error, got {:?}", other),
    }

    let huge = Value::Number(Number::Integer(i128::MAX));
    match encode(&huge) {
        Err(Error::Serialization(what)) => assert!(what.contains(&i128::MAX.to_string())),
        other => panic!("Expected serialization error, got {:?}", other),
    }
}

#[test]
fn test_parse_errors_are_not_recovered() {
    for bad in ["", "{", "[1,]", "{\"a\" 1}", ":ok", "nul"] {
        let err = decode(bad).unwrap_err();
        assert!(err.is_parse(), "{:?} gave {:?}", bad, err);
        assert!(decode_as_sequence(bad).unwrap_err().is_parse());
    }
}

#[test]
fn test_value_embeds_in_serde_types() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Envelope {
        id: u32,
        body: Value,
    }

    let envelope = Envelope {
        id: 7,
        body: kwjson!({ "state": (kw!(done)) }),
    };

    let text = serde_json::to_string(&envelope).unwrap();
    assert_eq!(text, r#"{"id":7,"body":{"state":":done"}}"#);

    let back: Envelope = serde_json::from_str(&text).unwrap();
    assert_eq!(back, envelope);
}
