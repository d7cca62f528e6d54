//! Using the kwjson! macro for dynamic value construction.
//!
//! Run with: cargo run --example macro

use serde_kwjson::{encode, encode_pretty, kw, kwjson, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let null_val = kwjson!(null);
    let number = kwjson!(42);
    let text = kwjson!("Hello");
    let keyword = kwjson!((kw!(hello)));

    println!("Primitives:");
    println!("  null:    {}", encode(&null_val)?);
    println!("  number:  {}", encode(&number)?);
    println!("  text:    {}", encode(&text)?);
    println!("  keyword: {}\n", encode(&keyword)?);

    let txn = kwjson!([[(kw!(w)), 6, 1], [(kw!(r)), 8, null]]);
    println!("Transaction:\n  {}\n", encode(&txn)?);

    let op = kwjson!({
        (kw!("type")): (kw!(invoke)),
        (kw!(f)): (kw!(txn)),
        (kw!(value)): txn,
        "node": "n1"
    });

    println!("Keyword-keyed map:");
    println!("{}\n", encode_pretty(&op)?);

    if let Some(Value::Keyword(kind)) = op.get(kw!("type")) {
        println!("Accessing values:");
        println!("  type: {} (name {:?})", kind, kind.name());
    }

    Ok(())
}
