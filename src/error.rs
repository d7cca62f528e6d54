//! Error types for keyword-aware JSON encoding and decoding.
//!
//! ## Error Categories
//!
//! - **Parse Errors**: The input is not valid JSON (line/column from the engine)
//! - **Serialization Errors**: A value has no JSON representation (`NaN`, out-of-range integers)
//! - **Type Mismatches**: A [`Value`](crate::Value) had the wrong shape for the requested type
//! - **I/O Errors**: Reader/writer failures
//!
//! ## Examples
//!
//! ```rust
//! use serde_kwjson::{decode, Error};
//!
//! let result = decode("{\"status\": :ok}");
//! assert!(matches!(result, Err(Error::Parse { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while encoding or decoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Input text is not syntactically valid JSON
    #[error("Parse error at line {line}, column {column}: {msg}")]
    Parse {
        line: usize,
        column: usize,
        msg: String,
    },

    /// A value in the tree cannot be represented as JSON
    #[error("Cannot serialize {0}")]
    Serialization(String),

    /// A value had a different shape than the one requested
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a parse error at the given position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_kwjson::Error;
    ///
    /// let err = Error::parse(3, 7, "expected value");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn parse(line: usize, column: usize, msg: &str) -> Self {
        Error::Parse {
            line,
            column,
            msg: msg.to_string(),
        }
    }

    /// Creates a serialization error describing the offending value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_kwjson::Error;
    ///
    /// let err = Error::serialization("non-finite float NaN");
    /// assert_eq!(err.to_string(), "Cannot serialize non-finite float NaN");
    /// ```
    pub fn serialization(what: &str) -> Self {
        Error::Serialization(what.to_string())
    }

    /// Creates a type mismatch error.
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` for [`Error::Parse`].
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }

    /// Returns `true` for [`Error::Serialization`].
    #[must_use]
    pub const fn is_serialization(&self) -> bool {
        matches!(self, Error::Serialization(_))
    }

    /// Maps an error raised by `serde_json` onto this crate's categories.
    ///
    /// Syntax and end-of-input errors become [`Error::Parse`]; data errors
    /// (a well-formed tree that does not fit the target type) become
    /// [`Error::Custom`].
    pub(crate) fn from_json(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match err.classify() {
            Category::Io => Error::Io(err.to_string()),
            Category::Syntax | Category::Eof => Error::Parse {
                line: err.line(),
                column: err.column(),
                msg: strip_position(&err),
            },
            Category::Data => Error::Custom(err.to_string()),
        }
    }
}

/// `serde_json` appends " at line L column C" to its messages; the position is
/// already carried in dedicated fields.
fn strip_position(err: &serde_json::Error) -> String {
    let full = err.to_string();
    match full.rfind(" at line ") {
        Some(idx) => full[..idx].to_string(),
        None => full,
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
