//! # serde_kwjson
//!
//! JSON encoding and decoding for data that carries **keywords**: symbolic
//! names that are distinct from plain strings, as found in EDN/Clojure data,
//! enumerated tags, and keyword-keyed maps.
//!
//! JSON has no symbol type, so this crate writes a keyword as a string with a
//! leading `:` sentinel and reads any such string back as a keyword:
//!
//! ```text
//! {status: :ok, count: 3}   <->   {"status":":ok","count":3}
//! ```
//!
//! Parsing and generating JSON text is done by `serde_json`; this crate adds a
//! post-order walk over the tree that tags and untags keywords and normalizes
//! numbers.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_kwjson::{decode, encode, kw, kwjson, Value};
//!
//! let value = kwjson!({
//!     "status": (kw!(ok)),
//!     "count": 3
//! });
//!
//! let text = encode(&value).unwrap();
//! assert_eq!(text, r#"{"status":":ok","count":3}"#);
//!
//! let back = decode(&text).unwrap();
//! assert_eq!(back, value);
//! assert_eq!(back.get("status"), Some(&Value::Keyword(kw!(ok))));
//! ```
//!
//! ## Typed Data
//!
//! [`Keyword`] implements `Serialize`/`Deserialize` as its encoded string, and
//! [`to_value`]/[`from_value`] bridge any serde type to and from [`Value`]:
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_kwjson::{from_value, kw, to_value, Keyword, Value};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Op {
//!     kind: Keyword,
//!     key: u64,
//! }
//!
//! let op = Op { kind: kw!(w), key: 6 };
//! let value = to_value(&op).unwrap();
//! assert_eq!(value.get("kind"), Some(&Value::Keyword(kw!(w))));
//!
//! let back: Op = from_value(value).unwrap();
//! assert_eq!(back, op);
//! ```
//!
//! ## The Sentinel Ambiguity
//!
//! A plain string that already starts with `:` is written unchanged and comes
//! back as a keyword. The convention has no escape; callers that store such
//! strings must not rely on a round-trip.
//!
//! ```rust
//! use serde_kwjson::{decode, encode, kw, Value};
//!
//! let text = encode(&Value::from(":foo")).unwrap();
//! assert_eq!(text, r#"":foo""#);
//! assert_eq!(decode(&text).unwrap(), Value::Keyword(kw!(foo)));
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade at `trace`/`debug` level and
//! never installs a logger.

mod codec;
pub mod error;
pub mod keyword;
pub mod macros;
pub mod map;
pub mod options;
pub mod value;

pub use error::{Error, Result};
pub use keyword::{Keyword, SENTINEL};
pub use map::{Key, Map};
pub use options::CodecOptions;
pub use value::{Number, Value};

use log::{debug, trace};
use serde::{de::DeserializeOwned, Serialize};
use std::io;

/// Encode a [`Value`] as compact JSON text.
///
/// # Examples
///
/// ```rust
/// use serde_kwjson::{encode, kw, Value};
///
/// let value = Value::Array(vec![Value::from(kw!(r)), Value::from(8), Value::Null]);
/// assert_eq!(encode(&value).unwrap(), r#"[":r",8,null]"#);
/// ```
///
/// # Errors
///
/// Returns [`Error::Serialization`] if the tree holds a value with no JSON
/// representation (a non-finite float, an integer beyond 64 bits, or two
/// object keys that encode to the same string). No partial output is produced.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode(value: &Value) -> Result<String> {
    encode_with_options(value, &CodecOptions::default())
}

/// Encode a [`Value`] as pretty-printed JSON text with 2-space indentation.
///
/// # Errors
///
/// Same as [`encode`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_pretty(value: &Value) -> Result<String> {
    encode_with_options(value, &CodecOptions::pretty())
}

/// Encode a [`Value`] as JSON text with custom options.
///
/// # Errors
///
/// Same as [`encode`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_with_options(value: &Value, options: &CodecOptions) -> Result<String> {
    let mut buffer = Vec::with_capacity(128);
    encode_to_writer(&mut buffer, value, options)?;
    String::from_utf8(buffer).map_err(Error::custom)
}

/// Encode a [`Value`] into a writer.
///
/// The whole tree is rewritten before anything is written, so a value that
/// cannot be encoded leaves the writer untouched.
///
/// # Errors
///
/// [`Error::Serialization`] as for [`encode`], or [`Error::Io`] if the writer
/// fails.
pub fn encode_to_writer<W>(writer: W, value: &Value, options: &CodecOptions) -> Result<()>
where
    W: io::Write,
{
    let tree = codec::encode_tree(value).map_err(|err| {
        debug!("encode failed: {}", err);
        err
    })?;
    codec::write_tree(writer, &tree, options)?;
    trace!("encoded {} value", value.kind());
    Ok(())
}

/// Decode JSON text into a [`Value`].
///
/// Strings starting with `:` become keywords, in leaves and in object keys.
/// Every integer becomes [`Number::Integer`] (`i128`), every other number
/// [`Number::Float`].
///
/// # Examples
///
/// ```rust
/// use serde_kwjson::{decode, kw, Number, Value};
///
/// let value = decode(r#"{"status":":ok","count":3}"#).unwrap();
/// assert_eq!(value.get("status"), Some(&Value::Keyword(kw!(ok))));
/// assert_eq!(value.get("count"), Some(&Value::Number(Number::Integer(3))));
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] if the text is not valid JSON. Decoding never fails
/// on valid JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode(s: &str) -> Result<Value> {
    decode_with_options(s, &CodecOptions::default())
}

/// Decode JSON text into a [`Value`] with custom options.
///
/// # Errors
///
/// Same as [`decode`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_with_options(s: &str, options: &CodecOptions) -> Result<Value> {
    trace!("decoding {} bytes", s.len());
    let tree: serde_json::Value = serde_json::from_str(s).map_err(Error::from_json)?;
    Ok(codec::decode_tree(tree, options))
}

/// Decode JSON text, returning a top-level array as the canonical sequence
/// [`Value::Array`]. Any other top-level value is returned unchanged.
///
/// # Examples
///
/// ```rust
/// use serde_kwjson::{decode_as_sequence, Value};
///
/// let value = decode_as_sequence("[1,2,3]").unwrap();
/// let items = value.as_array().unwrap();
/// assert_eq!(items.len(), 3);
/// assert_eq!(items[2], Value::from(3));
/// ```
///
/// # Errors
///
/// Same as [`decode`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_as_sequence(s: &str) -> Result<Value> {
    decode_as_sequence_with_options(s, &CodecOptions::default())
}

/// Decode JSON text as a sequence with custom options.
///
/// # Errors
///
/// Same as [`decode`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_as_sequence_with_options(s: &str, options: &CodecOptions) -> Result<Value> {
    decode_with_options(s, options).map(codec::into_sequence)
}

/// Decode JSON from bytes.
///
/// # Errors
///
/// Returns [`Error::Parse`] if the bytes are not valid UTF-8 JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_from_slice(v: &[u8]) -> Result<Value> {
    decode_from_slice_with_options(v, &CodecOptions::default())
}

/// Decode JSON from bytes with custom options.
///
/// # Errors
///
/// Same as [`decode_from_slice`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_from_slice_with_options(v: &[u8], options: &CodecOptions) -> Result<Value> {
    trace!("decoding {} bytes", v.len());
    let tree: serde_json::Value = serde_json::from_slice(v).map_err(Error::from_json)?;
    Ok(codec::decode_tree(tree, options))
}

/// Decode JSON from an I/O stream.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails and [`Error::Parse`] if the input is
/// not valid JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_from_reader<R>(reader: R) -> Result<Value>
where
    R: io::Read,
{
    decode_from_reader_with_options(reader, &CodecOptions::default())
}

/// Decode JSON from an I/O stream with custom options.
///
/// # Errors
///
/// Same as [`decode_from_reader`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_from_reader_with_options<R>(reader: R, options: &CodecOptions) -> Result<Value>
where
    R: io::Read,
{
    let tree: serde_json::Value = serde_json::from_reader(reader).map_err(Error::from_json)?;
    Ok(codec::decode_tree(tree, options))
}

/// Convert any `T: Serialize` into a [`Value`].
///
/// The value goes through the same convention as text would: strings that
/// start with `:`, including every serialized [`Keyword`], become keywords.
///
/// # Errors
///
/// Returns [`Error::Serialization`] if `T` cannot be represented as JSON (for
/// example a map with non-string keys).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    let tree =
        serde_json::to_value(value).map_err(|err| Error::Serialization(err.to_string()))?;
    Ok(codec::decode_tree(tree, &CodecOptions::default()))
}

/// Convert a [`Value`] into any `T: Deserialize`.
///
/// Keywords are presented to `T` as their encoded `":name"` strings, which is
/// what [`Keyword`]'s `Deserialize` expects.
///
/// # Errors
///
/// Returns [`Error::Serialization`] if the value has no JSON representation
/// and [`Error::Custom`] if it does not have the shape `T` expects.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    let tree = codec::encode_tree(&value)?;
    serde_json::from_value(tree).map_err(Error::from_json)
}
