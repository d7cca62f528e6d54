//! Basic encoding and decoding of typed data carrying keywords.
//!
//! Run with: cargo run --example simple

use serde::{Deserialize, Serialize};
use serde_kwjson::{decode, encode, from_value, kw, to_value, Keyword};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Event {
    process: u32,
    kind: Keyword,
    f: Keyword,
    value: Vec<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let events = vec![
        Event {
            process: 0,
            kind: kw!(invoke),
            f: kw!(write),
            value: vec![6, 1],
        },
        Event {
            process: 0,
            kind: kw!(ok),
            f: kw!(write),
            value: vec![6, 1],
        },
    ];

    // Typed data -> Value -> JSON text
    let json = encode(&to_value(&events)?)?;
    println!("JSON output:\n{}\n", json);

    // JSON text -> Value -> typed data
    let events_back: Vec<Event> = from_value(decode(&json)?)?;
    assert_eq!(events, events_back);
    println!("✓ Round-trip successful");

    Ok(())
}
