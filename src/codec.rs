//! The keyword convention applied to whole trees.
//!
//! Encoding walks a borrowed [`Value`] and builds a fresh `serde_json::Value`,
//! turning every keyword leaf and keyword key into its `":name"` string.
//! Decoding takes ownership of the tree `serde_json` parsed and rebuilds it as
//! a [`Value`], turning `:`-prefixed strings back into keywords and widening
//! every number to [`Number`].
//!
//! Both walks are post-order: children are converted before the parent
//! container is assembled, so the parent is always built from finished
//! children.

use crate::map::{Key, Map};
use crate::{CodecOptions, Error, Keyword, Number, Result, Value};
use log::{debug, trace};
use serde::Serialize;
use std::io;

/// Rewrites `value` into the JSON engine's tree. The input is not modified.
///
/// # Errors
///
/// [`Error::Serialization`] when a number has no JSON form or two keys of an
/// object encode to the same string.
pub(crate) fn encode_tree(value: &Value) -> Result<serde_json::Value> {
    Ok(match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(n) => serde_json::Value::Number(n.to_json()?),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Keyword(kw) => serde_json::Value::String(kw.to_encoded()),
        Value::Array(items) => serde_json::Value::Array(
            items.iter().map(encode_tree).collect::<Result<Vec<_>>>()?,
        ),
        Value::Object(map) => serde_json::Value::Object(encode_map(map)?),
    })
}

fn encode_map(map: &Map) -> Result<serde_json::Map<String, serde_json::Value>> {
    let mut out = serde_json::Map::with_capacity(map.len());
    for (key, value) in map {
        let encoded = encode_tree(value)?;
        let name = key.to_encoded();
        if out.contains_key(&name) {
            return Err(Error::serialization(&format!(
                "object with two keys encoding to {:?}",
                name
            )));
        }
        out.insert(name, encoded);
    }
    Ok(out)
}

/// Rebuilds a parsed engine tree as a [`Value`]. Total: every JSON tree has a
/// decoding.
pub(crate) fn decode_tree(json: serde_json::Value, options: &CodecOptions) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => Value::Number(Number::from_json(&n)),
        serde_json::Value::String(s) => match Keyword::parse_owned(s) {
            Ok(kw) => Value::Keyword(kw),
            Err(s) => Value::String(s),
        },
        serde_json::Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| decode_tree(item, options))
                .collect(),
        ),
        serde_json::Value::Object(entries) => {
            let mut map = Map::with_capacity(entries.len());
            for (name, item) in entries {
                let value = decode_tree(item, options);
                map.insert(decode_key(name, options), value);
            }
            Value::Object(map)
        }
    }
}

fn decode_key(name: String, options: &CodecOptions) -> Key {
    if !options.keyword_keys {
        return Key::String(name);
    }
    match Keyword::parse_owned(name) {
        Ok(kw) => Key::Keyword(kw),
        Err(name) => Key::String(name),
    }
}

/// Returns the top-level result as the canonical sequence container.
///
/// Every JSON array is decoded into a `Vec<Value>`, which is already indexable
/// and knows its length; anything other than an array is returned unchanged.
pub(crate) fn into_sequence(value: Value) -> Value {
    match value {
        Value::Array(items) => {
            debug!("normalized top-level sequence of {} items", items.len());
            Value::Array(items)
        }
        other => {
            trace!("top-level {} is not a sequence, passing through", other.kind());
            other
        }
    }
}

/// Hands a finished engine tree to `serde_json`'s writer.
pub(crate) fn write_tree<W>(
    writer: W,
    tree: &serde_json::Value,
    options: &CodecOptions,
) -> Result<()>
where
    W: io::Write,
{
    if options.pretty {
        let indent = options.indent_bytes();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
        let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
        tree.serialize(&mut serializer).map_err(Error::from_json)
    } else {
        let mut serializer = serde_json::Serializer::new(writer);
        tree.serialize(&mut serializer).map_err(Error::from_json)
    }
}
