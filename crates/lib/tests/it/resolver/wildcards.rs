//! Wildcard segments: single-level matching, ordering, and collapse.

use serde_json::json;

use crate::helpers::*;

#[test]
fn test_wildcard_over_list_of_maps() {
    let resolver = resolver(json!({
        "foo": {"bar": [{"key": 1}, {"key": 2}, {"key": 3}, {"key": 4}]}
    }));

    let result = resolver.get_or_null("foo.bar.*.key");
    assert_result(
        &result,
        json!([1, 2, 3, 4]),
        &[
            ("foo.bar.0.key", json!(1)),
            ("foo.bar.1.key", json!(2)),
            ("foo.bar.2.key", json!(3)),
            ("foo.bar.3.key", json!(4)),
        ],
    );
}

#[test]
fn test_wildcard_at_end_of_path() {
    let items = json!([{"key": 1}, {"key": 2}, {"key": 3}, {"key": 4}]);
    let resolver = resolver(json!({"foo": {"bar": items.clone()}}));

    let result = resolver.get_or_null("foo.bar.*");
    assert_result(
        &result,
        items,
        &[
            ("foo.bar.0", json!({"key": 1})),
            ("foo.bar.1", json!({"key": 2})),
            ("foo.bar.2", json!({"key": 3})),
            ("foo.bar.3", json!({"key": 4})),
        ],
    );
}

#[test]
fn test_wildcard_over_map_entries() {
    let resolver = resolver(json!({"foo": {"bar": {"key1": 1, "key2": 2}}}));
    let expected = [("foo.bar.key1", json!(1)), ("foo.bar.key2", json!(2))];

    assert_result(&resolver.get_or_null("foo.bar.*"), json!([1, 2]), &expected);
    assert_result(&resolver.get_or_null("foo.*.*"), json!([1, 2]), &expected);
}

#[test]
fn test_nested_wildcards_follow_document_order() {
    let resolver = resolver(json!({
        "test": [
            {"nested": [
                {"foo": {"10": {"key": 100}, "20": {"key": 200}, "30": {"key": 300}}},
                {"foo": {"40": {"key": 400}, "41": {"key": 400}, "42": {"key": 500}}},
            ]},
            {"nested": [
                {"foo": {"10": {"key": 1000}, "20": {"key": 2000}, "30": {"key": 3000}}},
                {"foo": {"40": {"key": 4000}, "41": {"key": 4000}, "42": {"key": 5000}}},
            ]},
        ]
    }));

    let result = resolver.get_or_null("test.*.nested.*.foo.*.key");
    assert_result(
        &result,
        json!([100, 200, 300, 400, 400, 500, 1000, 2000, 3000, 4000, 4000, 5000]),
        &[
            ("test.0.nested.0.foo.10.key", json!(100)),
            ("test.0.nested.0.foo.20.key", json!(200)),
            ("test.0.nested.0.foo.30.key", json!(300)),
            ("test.0.nested.1.foo.40.key", json!(400)),
            ("test.0.nested.1.foo.41.key", json!(400)),
            ("test.0.nested.1.foo.42.key", json!(500)),
            ("test.1.nested.0.foo.10.key", json!(1000)),
            ("test.1.nested.0.foo.20.key", json!(2000)),
            ("test.1.nested.0.foo.30.key", json!(3000)),
            ("test.1.nested.1.foo.40.key", json!(4000)),
            ("test.1.nested.1.foo.41.key", json!(4000)),
            ("test.1.nested.1.foo.42.key", json!(5000)),
        ],
    );
}

#[test]
fn test_wildcard_never_spans_levels() {
    let resolver = resolver(json!({"a": {"x": {"y": {"c": 1}}, "z": {"c": 2}}}));

    let result = resolver.get_or_null("a.*.c");
    assert_result(&result, json!(2), &[("a.z.c", json!(2))]);
}

#[test]
fn test_single_wildcard_match_collapses() {
    let resolver = resolver(json!({"items": [{"id": "only"}]}));

    let result = resolver.get_or_null("items.*.id");
    assert_result(&result, json!("only"), &[("items.0.id", json!("only"))]);
}

#[test]
fn test_single_match_holding_one_element_list_collapses_once() {
    let resolver = resolver(json!({"a": {"b": [7]}}));

    let result = resolver.get_or_null("a.*");
    assert_result(&result, json!([7]), &[("a.b", json!([7]))]);
}

#[test]
fn test_wildcard_skips_branches_missing_the_tail() {
    let resolver = resolver(json!({
        "users": [
            {"name": "ada", "email": "ada@example.com"},
            {"name": "bob"},
            "not a map",
            {"name": "cy", "email": "cy@example.com"},
        ]
    }));

    let result = resolver.get_or_null("users.*.email");
    assert_result(
        &result,
        json!(["ada@example.com", "cy@example.com"]),
        &[
            ("users.0.email", json!("ada@example.com")),
            ("users.3.email", json!("cy@example.com")),
        ],
    );
}

#[test]
fn test_wildcard_over_empty_list_misses() {
    let resolver = resolver(json!({"items": []}));

    let result = resolver.get("items.*", "none");
    assert_result(&result, json!("none"), &[("items.*", json!("none"))]);
}
