//! Ordered map type for JSON objects.
//!
//! [`Map`] wraps an [`IndexMap`] so that object fields keep their insertion
//! order through a decode/encode round-trip. Keys are [`Key`]s: either a plain
//! string or a [`Keyword`], since keyword-keyed maps are the usual shape for
//! symbolic data.
//!
//! ## Examples
//!
//! ```rust
//! use serde_kwjson::{kw, Map, Value};
//!
//! let mut map = Map::new();
//! map.insert("name", Value::from("Alice"));
//! map.insert(kw!(role), Value::from(kw!(admin)));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! assert_eq!(map.get(kw!(role)), Some(&Value::from(kw!(admin))));
//! ```

use crate::{Keyword, Value};
use indexmap::IndexMap;
use std::fmt;

/// An object key: a plain string or a keyword.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    String(String),
    Keyword(Keyword),
}

impl Key {
    #[inline]
    #[must_use]
    pub const fn is_keyword(&self) -> bool {
        matches!(self, Key::Keyword(_))
    }

    /// Returns the string for a plain key, `None` for a keyword key.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::String(s) => Some(s),
            Key::Keyword(_) => None,
        }
    }

    #[must_use]
    pub fn as_keyword(&self) -> Option<&Keyword> {
        match self {
            Key::Keyword(kw) => Some(kw),
            Key::String(_) => None,
        }
    }

    /// Returns the JSON object key this key is written as.
    #[must_use]
    pub fn to_encoded(&self) -> String {
        match self {
            Key::String(s) => s.clone(),
            Key::Keyword(kw) => kw.to_encoded(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::String(s) => f.write_str(s),
            Key::Keyword(kw) => write!(f, "{}", kw),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::String(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::String(s)
    }
}

impl From<Keyword> for Key {
    fn from(kw: Keyword) -> Self {
        Key::Keyword(kw)
    }
}

impl From<&Keyword> for Key {
    fn from(kw: &Keyword) -> Self {
        Key::Keyword(kw.clone())
    }
}

/// An insertion-ordered map of [`Key`]s to [`Value`]s.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Map(IndexMap<Key, Value>);

impl Map {
    /// Creates an empty `Map`.
    #[must_use]
    pub fn new() -> Self {
        Map(IndexMap::new())
    }

    /// Creates an empty `Map` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Map(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the key keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_kwjson::{Map, Value};
    ///
    /// let mut map = Map::new();
    /// assert!(map.insert("key", Value::from(42)).is_none());
    /// assert!(map.insert("key", Value::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: impl Into<Key>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// A `&str` looks up a plain string key; a [`Keyword`] looks up a keyword
    /// key. The two never alias each other.
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.0.get(&key.into())
    }

    pub fn get_mut(&mut self, key: impl Into<Key>) -> Option<&mut Value> {
        self.0.get_mut(&key.into())
    }

    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.0.contains_key(&key.into())
    }

    /// Removes `key`, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<Value> {
        self.0.shift_remove(&key.into())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, Key, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.0.iter()
    }
}

impl IntoIterator for Map {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<Key>> FromIterator<(K, Value)> for Map {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        Map(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kw;

    #[test]
    fn test_string_and_keyword_keys_are_distinct() {
        let mut map = Map::new();
        map.insert("a", Value::from(1));
        map.insert(kw!(a), Value::from(2));

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some(&Value::from(1)));
        assert_eq!(map.get(kw!(a)), Some(&Value::from(2)));
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let map: Map = vec![
            ("zeta", Value::from(1)),
            ("alpha", Value::from(2)),
            ("mid", Value::from(3)),
        ]
        .into_iter()
        .collect();

        let keys: Vec<String> = map.keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_remove_shifts() {
        let mut map = Map::new();
        map.insert("a", Value::from(1));
        map.insert("b", Value::from(2));
        map.insert("c", Value::from(3));

        assert_eq!(map.remove("b"), Some(Value::from(2)));
        let keys: Vec<String> = map.keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, vec!["a", "c"]);
        assert!(!map.contains_key("b"));
    }

    #[test]
    fn test_key_encoded_form() {
        assert_eq!(Key::from("plain").to_encoded(), "plain");
        assert_eq!(Key::from(kw!(status)).to_encoded(), ":status");
        assert!(Key::from(kw!(status)).is_keyword());
        assert_eq!(Key::from("plain").as_str(), Some("plain"));
    }
}
