//! Keywords: symbolic names that survive a JSON round-trip.
//!
//! JSON has no symbol type, so a [`Keyword`] is written as a string carrying
//! the [`SENTINEL`] prefix. `Keyword::new("ok")` encodes as `":ok"`, and any
//! decoded string that starts with `:` comes back as a keyword.
//!
//! Exactly one sentinel is stripped on decode, so a keyword whose own name
//! starts with `:` still round-trips (`"::x"` is the keyword `:x`). The
//! reverse does not hold for plain strings: the string `":foo"` decodes as the
//! keyword `foo`.
//!
//! ```rust
//! use serde_kwjson::Keyword;
//!
//! let kw = Keyword::new("ok");
//! assert_eq!(kw.to_encoded(), ":ok");
//! assert_eq!(Keyword::parse(":ok"), Some(kw));
//! assert_eq!(Keyword::parse("ok"), None);
//! ```

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Leading character that marks a JSON string as an encoded keyword.
pub const SENTINEL: char = ':';

/// A symbolic name, distinct from a plain string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Keyword(String);

impl Keyword {
    /// Creates a keyword with the given name (without the sentinel).
    pub fn new(name: impl Into<String>) -> Self {
        Keyword(name.into())
    }

    /// Recognizes the encoded form, returning `None` unless `s` starts with
    /// the sentinel.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        s.strip_prefix(SENTINEL).map(Keyword::new)
    }

    /// Like [`Keyword::parse`] but reuses the allocation of an owned string.
    pub(crate) fn parse_owned(mut s: String) -> Result<Self, String> {
        if s.starts_with(SENTINEL) {
            s.replace_range(..SENTINEL.len_utf8(), "");
            Ok(Keyword(s))
        } else {
            Err(s)
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_name(self) -> String {
        self.0
    }

    /// Returns the JSON string form, `":" + name`.
    #[must_use]
    pub fn to_encoded(&self) -> String {
        let mut out = String::with_capacity(self.0.len() + SENTINEL.len_utf8());
        out.push(SENTINEL);
        out.push_str(&self.0);
        out
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", SENTINEL, self.0)
    }
}

impl From<&str> for Keyword {
    fn from(name: &str) -> Self {
        Keyword::new(name)
    }
}

impl From<String> for Keyword {
    fn from(name: String) -> Self {
        Keyword(name)
    }
}

impl Serialize for Keyword {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Keyword {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct KeywordVisitor;

        impl<'de> de::Visitor<'de> for KeywordVisitor {
            type Value = Keyword;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a string starting with '{}'", SENTINEL)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Keyword::parse(value)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Str(value), &self))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Keyword::parse_owned(value)
                    .map_err(|s| E::invalid_value(de::Unexpected::Str(&s), &self))
            }
        }

        deserializer.deserialize_str(KeywordVisitor)
    }
}

/// Builds a [`Keyword`] from a bare identifier or a string literal.
///
/// ```rust
/// use serde_kwjson::{kw, Keyword};
///
/// assert_eq!(kw!(ok), Keyword::new("ok"));
/// assert_eq!(kw!("read-only"), Keyword::new("read-only"));
/// ```
#[macro_export]
macro_rules! kw {
    ($name:ident) => {
        $crate::Keyword::new(stringify!($name))
    };
    ($name:literal) => {
        $crate::Keyword::new($name)
    };
}
