use treepath::{FlatMap, PathResolver, ResultSet, Value};

/// Convert a `serde_json::json!` literal into a document value
pub fn doc(json: serde_json::Value) -> Value {
    json.into()
}

/// Create an instance-scoped resolver over a JSON literal
pub fn resolver(json: serde_json::Value) -> PathResolver {
    PathResolver::from_document(doc(json)).expect("JSON literal should be a list or map")
}

/// Build an ordered flat map from (path, JSON) pairs
pub fn flat(entries: &[(&str, serde_json::Value)]) -> FlatMap {
    entries
        .iter()
        .map(|(path, value)| (path.to_string(), doc(value.clone())))
        .collect()
}

/// Assert both halves of a result against JSON literals
pub fn assert_result(
    result: &ResultSet,
    value: serde_json::Value,
    map: &[(&str, serde_json::Value)],
) {
    assert_eq!(result.value(), &doc(value), "resolved value mismatch");
    assert_eq!(result.map(), &flat(map), "flat map mismatch");
    let paths: Vec<&str> = result.map().keys().map(String::as_str).collect();
    let expected: Vec<&str> = map.iter().map(|(path, _)| *path).collect();
    assert_eq!(paths, expected, "flat map order mismatch");
}
