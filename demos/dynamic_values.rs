//! Working with decoded Values at runtime.
//!
//! Run with: cargo run --example dynamic_values

use serde_kwjson::{decode, decode_as_sequence, encode, kw, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let text = r#"{"status":":ok","count":3,"tags":[":fast","plain"]}"#;
    let value = decode(text)?;

    if let Some(Value::Keyword(status)) = value.get("status") {
        println!("status is the keyword {}", status);
    }

    if let Some(count) = value.get("count").and_then(Value::as_i64) {
        println!("count: {}", count);
    }

    if let Some(tags) = value.get("tags").and_then(Value::as_array) {
        for tag in tags {
            println!("  tag {:<8} keyword? {}", tag.to_string(), tag.is_keyword());
        }
    }

    // A plain string that starts with ':' comes back as a keyword.
    let collision = decode(&encode(&Value::from(":foo"))?)?;
    println!("\n\":foo\" decodes to {:?}", collision);
    assert_eq!(collision, Value::from(kw!(foo)));

    let seq = decode_as_sequence("[1,2,3]")?;
    println!("sequence of {} items", seq.as_array().map_or(0, Vec::len));

    Ok(())
}
