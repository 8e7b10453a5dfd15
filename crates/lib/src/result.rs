//! The value/map pair returned by every resolution.

use indexmap::IndexMap;

use crate::Value;

/// Flat map from each concrete path to the value found there, in the order
/// the matches were encountered.
pub type FlatMap = IndexMap<String, Value>;

/// The outcome of [`PathResolver::get`](crate::PathResolver::get).
///
/// `value` holds the resolved value: the single match, a list of matches in
/// document order, or the caller's default when nothing matched. `map` holds
/// every concrete path that matched, with wildcards replaced by the real keys.
///
/// ```
/// # use treepath::{PathResolver, Value};
/// let doc: Value = serde_json::json!({"foo": [{"key": 1}, {"key": 2}]}).into();
/// let resolver = PathResolver::from_document(doc)?;
///
/// let result = resolver.get("foo.*.key", Value::Null);
/// assert_eq!(result.value(), &Value::List(vec![1.into(), 2.into()]));
/// assert_eq!(result.map()["foo.1.key"], 2);
/// # Ok::<(), treepath::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct ResultSet {
    value: Value,
    map: FlatMap,
}

impl ResultSet {
    pub fn new(value: Value, map: FlatMap) -> Self {
        Self { value, map }
    }

    /// Result for a path that names exactly one value.
    pub(crate) fn single(path: &str, value: Value) -> Self {
        let mut map = FlatMap::with_capacity(1);
        map.insert(path.to_string(), value.clone());
        Self { value, map }
    }

    /// The resolved value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Concrete path → value for every match.
    pub fn map(&self) -> &FlatMap {
        &self.map
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    pub fn into_parts(self) -> (Value, FlatMap) {
        (self.value, self.map)
    }
}
