//! Path resolution over document trees.
//!
//! [`PathResolver`] owns one document snapshot and answers `get` queries
//! against it. A query path is split on the configured delimiter; each
//! segment either names a key (digit-only segments also address list
//! positions) or is the wildcard token, which matches any single key at its
//! position. Wildcards never span more than one level.
//!
//! # Resolution order
//!
//! 1. A top-level map key spelled exactly like the whole path wins outright.
//! 2. A path equal to the wildcard token returns the whole document.
//! 3. A cached result for the same path and syntax is returned as is.
//! 4. Otherwise the document is walked in pre-order, every node at the path's
//!    depth is matched against the segments, and the result is cached.
//!
//! A single match resolves to the matched value itself; several matches
//! resolve to a list in document order; no match resolves to the caller's
//! default, which is returned untouched.
//!
//! # Usage
//!
//! ```
//! use treepath::{PathResolver, Value};
//!
//! let doc: Value = serde_json::json!({
//!     "foo": {"bar": [{"key": 1}, {"key": 2}]}
//! })
//! .into();
//! let resolver = PathResolver::from_document(doc)?;
//!
//! let result = resolver.get("foo.bar.*.key", Value::Null);
//! assert_eq!(result.value(), &Value::List(vec![1.into(), 2.into()]));
//! assert_eq!(result.map().keys().collect::<Vec<_>>(), ["foo.bar.0.key", "foo.bar.1.key"]);
//!
//! let missing = resolver.get("foo.baz", "fallback");
//! assert_eq!(missing.value(), "fallback");
//! # Ok::<(), treepath::Error>(())
//! ```

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::{
    Result,
    result::{FlatMap, ResultSet},
    value::{Map, Value},
};

pub mod cache;
pub mod errors;
pub mod matcher;
pub mod syntax;
pub mod walker;


pub use cache::{CacheKey, CacheScope, PathCache};
pub use errors::ResolveError;
pub use matcher::{PathMatcher, Segment};
pub use syntax::{DEFAULT_DELIMITER, DEFAULT_WILDCARD, PathSyntax};
pub use walker::{TreeWalker, Visit};

use cache::CacheHandle;

/// What a resolver is built from.
#[derive(Debug)]
pub enum Source<'a> {
    /// A raw document; must be a list or a map.
    Document(Value),
    /// An existing resolver whose document and cache are adopted.
    Resolver(&'a PathResolver),
}

impl From<Value> for Source<'_> {
    fn from(document: Value) -> Self {
        Source::Document(document)
    }
}

impl<'a> From<&'a PathResolver> for Source<'a> {
    fn from(resolver: &'a PathResolver) -> Self {
        Source::Resolver(resolver)
    }
}

/// Construction-time settings for a [`PathResolver`].
///
/// Deserializable with every field optional:
///
/// ```
/// # use treepath::{CacheScope, ResolverOptions};
/// let options: ResolverOptions =
///     serde_json::from_str(r#"{"syntax": {"delimiter": "/"}, "cache_scope": "shared"}"#)?;
/// assert_eq!(options.syntax.delimiter(), "/");
/// assert_eq!(options.syntax.wildcard(), "*");
/// assert_eq!(options.cache_scope, CacheScope::Shared);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ResolverOptions {
    pub syntax: PathSyntax,
    pub cache_scope: CacheScope,
}

/// Resolves delimited, wildcard-capable paths against one document.
#[derive(Debug)]
pub struct PathResolver {
    document: Value,
    syntax: PathSyntax,
    cache: CacheHandle,
    torn_down: bool,
}

impl PathResolver {
    /// Builds a resolver from a raw document or from another resolver.
    ///
    /// Copying a resolver adopts its document, syntax, cache scope, and cache
    /// contents. An instance-scoped source has its cache copied; a
    /// shared-scope source already shares its cache with the new resolver.
    ///
    /// # Errors
    /// Returns [`ResolveError::NotATree`] if a raw document is a scalar.
    pub fn new<'a>(source: impl Into<Source<'a>>) -> Result<Self> {
        match source.into() {
            Source::Document(document) => Self::with_options(document, ResolverOptions::default()),
            Source::Resolver(other) => Ok(Self::from_resolver(other)),
        }
    }

    /// Builds a resolver over `document` with default options.
    pub fn from_document(document: Value) -> Result<Self> {
        Self::with_options(document, ResolverOptions::default())
    }

    /// Builds a resolver over `document`.
    ///
    /// # Errors
    /// Returns [`ResolveError::NotATree`] if `document` is a scalar.
    pub fn with_options(document: Value, options: ResolverOptions) -> Result<Self> {
        if !document.is_tree() {
            return Err(ResolveError::NotATree {
                found: document.type_name(),
            }
            .into());
        }

        Ok(Self {
            document,
            syntax: options.syntax,
            cache: CacheHandle::new(options.cache_scope),
            torn_down: false,
        })
    }

    /// Copies `other`'s document, syntax, and cache.
    pub fn from_resolver(other: &PathResolver) -> Self {
        debug!(
            scope = ?other.cache.scope(),
            entries = other.cache.read().len(),
            "Copying resolver"
        );
        Self {
            document: other.document.clone(),
            syntax: other.syntax.clone(),
            cache: other.cache.detached(),
            torn_down: false,
        }
    }

    /// Parses `json` and builds a resolver over it with default options.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: serde_json::Value = serde_json::from_str(json)?;
        Self::from_document(document.into())
    }

    /// Reads JSON from `reader` and builds a resolver over it with `options`.
    pub fn from_json_reader<R: std::io::Read>(reader: R, options: ResolverOptions) -> Result<Self> {
        let document: serde_json::Value = serde_json::from_reader(reader)?;
        Self::with_options(document.into(), options)
    }

    /// Sets the segment delimiter.
    ///
    /// # Errors
    /// Returns [`ResolveError::EmptyDelimiter`] if `delimiter` is empty.
    pub fn set_delimiter(&mut self, delimiter: impl Into<String>) -> Result<()> {
        Ok(self.syntax.set_delimiter(delimiter)?)
    }

    /// Sets the wildcard token.
    ///
    /// # Errors
    /// Returns [`ResolveError::EmptyWildcard`] if `wildcard` is empty.
    pub fn set_wildcard(&mut self, wildcard: impl Into<String>) -> Result<()> {
        Ok(self.syntax.set_wildcard(wildcard)?)
    }

    pub fn syntax(&self) -> &PathSyntax {
        &self.syntax
    }

    pub fn cache_scope(&self) -> CacheScope {
        self.cache.scope()
    }

    /// The document snapshot this resolver answers from.
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Consumes the resolver and returns its document.
    ///
    /// For a shared-scope resolver this is a teardown and clears the shared
    /// cache.
    pub fn into_document(mut self) -> Value {
        std::mem::take(&mut self.document)
    }

    /// Copy of every cached entry visible to this resolver.
    pub fn cache_snapshot(&self) -> IndexMap<CacheKey, ResultSet> {
        self.cache.read().snapshot()
    }

    /// Resolves `path`, falling back to `default` when nothing matches.
    pub fn get(&self, path: &str, default: impl Into<Value>) -> ResultSet {
        if let Value::Map(map) = &self.document
            && let Some(value) = map.get(path)
        {
            debug!(path, "Resolved path from top-level key");
            return ResultSet::single(path, value.clone());
        }

        if self.syntax.is_wildcard(path) {
            debug!(path, "Resolved wildcard to whole document");
            return ResultSet::single(path, self.document.clone());
        }

        let key = CacheKey::new(path, &self.syntax);
        match self.cache.scope() {
            CacheScope::Instance => {
                if let Some(hit) = self.cache.read().get(&key) {
                    debug!(path, "Path cache hit");
                    return hit.clone();
                }

                let result = self.resolve(path, default.into());
                self.cache.write().insert(key, result.clone());
                result
            }
            CacheScope::Shared => {
                // Lookup, resolution and store happen under one guard so a
                // concurrent teardown leaves the shared cache empty.
                let mut cache = self.cache.write();
                if let Some(hit) = cache.get(&key) {
                    debug!(path, "Shared path cache hit");
                    return hit.clone();
                }

                let result = self.resolve(path, default.into());
                cache.insert(key, result.clone());
                result
            }
        }
    }

    /// [`get`](Self::get) with a null default.
    pub fn get_or_null(&self, path: &str) -> ResultSet {
        self.get(path, Value::Null)
    }

    /// Clears the cache and releases the document.
    ///
    /// For a shared-scope resolver this empties the cache of every
    /// shared-scope resolver in the process. The resolver stays usable over an
    /// empty map.
    pub fn reset(&mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        let cleared = {
            let mut cache = self.cache.write();
            let len = cache.len();
            cache.clear();
            len
        };
        self.document = Value::Map(Map::new());
        self.torn_down = true;
        debug!(scope = ?self.cache.scope(), cleared, "Resolver torn down");
    }

    /// Walks the document and collects every node the path matches.
    fn resolve(&self, path: &str, default: Value) -> ResultSet {
        let matcher = PathMatcher::new(path, &self.syntax);
        let mut map = FlatMap::new();

        if let Some(target) = matcher.target_depth() {
            let mut walker = TreeWalker::new(&self.document).max_depth(target);
            while let Some(visit) = walker.next() {
                if visit.depth != target {
                    continue;
                }
                let pathway = walker.pathway();
                if matcher.matches(pathway) {
                    let concrete = self.syntax.join(pathway);
                    trace!(path, concrete = %concrete, "Path matched");
                    // Same concrete path twice: the later value wins, first position kept
                    map.insert(concrete, visit.value.clone());
                }
            }
        }

        debug!(path, matches = map.len(), "Resolved path by traversal");

        if map.is_empty() {
            return ResultSet::single(path, default);
        }

        let mut values: Vec<Value> = map.values().cloned().collect();
        let value = if values.len() == 1 {
            values.swap_remove(0)
        } else {
            Value::List(values)
        };
        ResultSet::new(value, map)
    }
}

impl TryFrom<Value> for PathResolver {
    type Error = crate::Error;

    fn try_from(document: Value) -> Result<Self> {
        Self::from_document(document)
    }
}

impl Drop for PathResolver {
    fn drop(&mut self) {
        if self.cache.scope() == CacheScope::Shared && !self.torn_down {
            self.teardown();
        }
    }
}
