/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Object keys are string literals or any parenthesized expression that
/// converts into a [`Key`](crate::Key), such as `(kw!(id))`. Literal leaves
/// are taken as written, so `":foo"` stays a plain string. Any other
/// expression goes through [`to_value`](crate::to_value) and so follows the
/// decode convention: `(kw!(ok))` becomes a keyword leaf, a string expression
/// starting with `:` becomes a keyword, and a non-finite float becomes null.
///
/// ```rust
/// use serde_kwjson::{kw, kwjson, Value};
///
/// let value = kwjson!({
///     "status": (kw!(ok)),
///     (kw!(tags)): ["a", "b"],
///     "count": 3
/// });
///
/// assert_eq!(value.get("status"), Some(&Value::Keyword(kw!(ok))));
/// assert_eq!(value.get(kw!(tags)).and_then(Value::as_array).map(Vec::len), Some(2));
/// ```
#[macro_export]
macro_rules! kwjson {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::kwjson!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    ({ $($key:tt : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key, $crate::kwjson!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($s:literal) => {
        $crate::Value::from($s)
    };

    // Any other expression, including parenthesized keywords
    ($s:expr) => {
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    };
}
