//! Customizing output formatting and key handling.
//!
//! Run with: cargo run --example custom_options

use serde_kwjson::{decode_with_options, encode_with_options, kw, kwjson, CodecOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let value = kwjson!({
        (kw!(id)): 7,
        "state": (kw!(running))
    });

    let compact = encode_with_options(&value, &CodecOptions::new())?;
    println!("Compact:\n{}\n", compact);

    let pretty = encode_with_options(&value, &CodecOptions::pretty().with_indent(4))?;
    println!("Pretty (4 spaces):\n{}\n", pretty);

    let plain_keys = CodecOptions::new().with_keyword_keys(false);
    let decoded = decode_with_options(&compact, &plain_keys)?;
    println!("Keys with keyword_keys off:");
    for key in decoded.as_object().into_iter().flat_map(|obj| obj.keys()) {
        println!("  {:<6} keyword? {}", key.to_string(), key.is_keyword());
    }

    Ok(())
}
