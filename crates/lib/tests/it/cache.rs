//! Tests for result caching, copy-construction, and teardown.
//!
//! Only `test_shared_scope_lifecycle` touches the process-wide cache; every
//! other test uses instance-scoped resolvers so tests can run in parallel.

use serde_json::json;
use treepath::{
    CacheScope, PathResolver, PathSyntax, ResolverOptions, ResultSet, Source, Value,
    resolve::CacheKey,
};

use crate::helpers::*;

fn baz_doc() -> serde_json::Value {
    json!({"foo": {"bar": {"baz": 1}}})
}

fn baz_entry() -> (CacheKey, ResultSet) {
    (
        CacheKey::new("foo.bar.baz", &PathSyntax::default()),
        ResultSet::new(Value::Int(1), flat(&[("foo.bar.baz", json!(1))])),
    )
}

#[test]
fn test_cache_records_resolved_pair() {
    let resolver = resolver(baz_doc());
    resolver.get_or_null("foo.bar.baz");

    let snapshot = resolver.cache_snapshot();
    let (key, entry) = baz_entry();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.get(&key), Some(&entry));
}

#[test]
fn test_cache_hit_returns_stored_result() {
    let resolver = resolver(baz_doc());

    let first = resolver.get_or_null("foo.bar.baz");
    assert_eq!(first.value(), &Value::Int(1));
    assert_eq!(resolver.get_or_null("foo.bar.baz").value(), &Value::Int(1));
    assert_eq!(resolver.cache_snapshot().len(), 1);

    // Top-level key lookups are answered without touching the cache
    let key_hit = resolver.get_or_null("foo");
    assert_result(
        &key_hit,
        json!({"bar": {"baz": 1}}),
        &[("foo", json!({"bar": {"baz": 1}}))],
    );
    assert_eq!(resolver.cache_snapshot().len(), 1);
}

#[test]
fn test_reset_clears_cache_and_document() {
    let mut resolver = resolver(baz_doc());
    resolver.get_or_null("foo.bar.baz");
    assert_eq!(resolver.cache_snapshot().len(), 1);

    resolver.reset();
    assert!(resolver.cache_snapshot().is_empty());
    assert_eq!(resolver.document(), &doc(json!({})));

    // Still usable afterwards, over an empty document
    assert_eq!(resolver.get("foo.bar.baz", "gone").value(), "gone");
}

#[test]
fn test_copy_construct_adopts_document_and_cache() -> treepath::Result<()> {
    let original = resolver(baz_doc());
    original.get_or_null("foo.bar.baz");

    let copy = PathResolver::new(&original)?;
    let (key, entry) = baz_entry();
    assert_eq!(copy.cache_snapshot().get(&key), Some(&entry));
    assert_eq!(copy.document(), &doc(baz_doc()));
    assert_eq!(copy.cache_scope(), CacheScope::Instance);
    Ok(())
}

#[test]
fn test_copy_construct_keeps_syntax() -> treepath::Result<()> {
    let mut original = resolver(json!({"a": {"b": 1}}));
    original.set_delimiter("/")?;

    let copy = PathResolver::new(Source::Resolver(&original))?;
    assert_eq!(copy.syntax().delimiter(), "/");
    assert_eq!(copy.get_or_null("a/b").value(), &Value::Int(1));
    Ok(())
}

#[test]
fn test_instance_caches_are_independent() {
    let first = resolver(baz_doc());
    let second = resolver(json!({"foo": {"bar": {"baz": 2}}}));

    assert_eq!(first.get_or_null("foo.bar.baz").value(), &Value::Int(1));
    assert_eq!(second.get_or_null("foo.bar.baz").value(), &Value::Int(2));
}

#[test]
fn test_into_document_returns_snapshot() {
    let resolver = resolver(baz_doc());
    assert_eq!(resolver.into_document(), doc(baz_doc()));
}

#[test]
fn test_shared_scope_lifecycle() -> treepath::Result<()> {
    let shared = ResolverOptions {
        cache_scope: CacheScope::Shared,
        ..ResolverOptions::default()
    };

    let first = PathResolver::with_options(doc(baz_doc()), shared.clone())?;
    first.get_or_null("foo.bar.baz");
    let (key, entry) = baz_entry();
    assert_eq!(first.cache_snapshot().get(&key), Some(&entry));

    // A second shared resolver over a different document sees the entry
    let other = PathResolver::with_options(doc(json!({"foo": {"bar": {"baz": 2}}})), shared)?;
    assert_eq!(other.cache_snapshot().len(), 1);
    assert_eq!(other.get_or_null("foo.bar.baz").value(), &Value::Int(1));

    // Copy-construction adopts the shared cache wholesale
    let copy = PathResolver::from_resolver(&first);
    assert_eq!(copy.cache_scope(), CacheScope::Shared);
    assert_eq!(copy.cache_snapshot().get(&key), Some(&entry));

    // Dropping any shared resolver clears the cache for all of them
    drop(copy);
    assert!(first.cache_snapshot().is_empty());
    assert!(other.cache_snapshot().is_empty());

    // The surviving resolvers keep their own documents
    assert_eq!(other.get_or_null("foo.bar.baz").value(), &Value::Int(2));

    let mut other = other;
    other.reset();
    assert!(first.cache_snapshot().is_empty());
    assert_eq!(first.get_or_null("foo.bar.baz").value(), &Value::Int(1));

    // `other` was already torn down by reset; dropping it clears nothing more
    drop(other);
    assert_eq!(first.cache_snapshot().len(), 1);
    Ok(())
}
