//! Configuration options for encoding and decoding.
//!
//! ## Examples
//!
//! ```rust
//! use serde_kwjson::{encode_with_options, kw, kwjson, CodecOptions};
//!
//! let value = kwjson!({ "status": (kw!(ok)) });
//!
//! let options = CodecOptions::pretty().with_indent(4);
//! let text = encode_with_options(&value, &options).unwrap();
//! assert_eq!(text, "{\n    \"status\": \":ok\"\n}");
//! ```

/// Configuration for the keyword codec.
///
/// # Examples
///
/// ```rust
/// use serde_kwjson::CodecOptions;
///
/// // Compact output, keyword convention applied to object keys too
/// let options = CodecOptions::new();
/// assert!(!options.pretty);
/// assert!(options.keyword_keys);
///
/// // Leave object keys alone
/// let options = CodecOptions::new().with_keyword_keys(false);
/// assert!(!options.keyword_keys);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodecOptions {
    /// Emit newlines and indentation.
    pub pretty: bool,
    /// Spaces per nesting level when `pretty` is set.
    pub indent: usize,
    /// Decode `:`-prefixed object keys as keyword keys. Keyword keys always
    /// encode as `":name"`.
    pub keyword_keys: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        CodecOptions {
            pretty: false,
            indent: 2,
            keyword_keys: true,
        }
    }
}

impl CodecOptions {
    /// Creates default options (compact output, 2-space indent when pretty,
    /// keyword keys on).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_kwjson::CodecOptions;
    ///
    /// let options = CodecOptions::pretty();
    /// assert!(options.pretty);
    /// assert_eq!(options.indent, 2);
    /// ```
    #[must_use]
    pub fn pretty() -> Self {
        CodecOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the indentation size. Only affects pretty-printed output.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Turns keyword decoding of object keys on or off.
    ///
    /// With it off, a key such as `":id"` decodes as the plain string key
    /// `":id"`.
    #[must_use]
    pub fn with_keyword_keys(mut self, keyword_keys: bool) -> Self {
        self.keyword_keys = keyword_keys;
        self
    }

    pub(crate) fn indent_bytes(&self) -> Vec<u8> {
        vec![b' '; self.indent]
    }
}
