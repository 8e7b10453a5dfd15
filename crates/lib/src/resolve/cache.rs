//! Memoization of resolved paths.
//!
//! Each entry is keyed by the raw path together with the delimiter and
//! wildcard it was resolved under, so changing a resolver's syntax never
//! serves results computed under the old one.
//!
//! Caches are either owned by one resolver ([`CacheScope::Instance`]) or
//! shared by every shared-scope resolver in the process
//! ([`CacheScope::Shared`]). The shared cache is not tied to any document:
//! two shared resolvers over different documents see each other's entries,
//! and tearing down either one clears it for both.

use std::sync::{Arc, LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;

use super::syntax::PathSyntax;
use crate::result::ResultSet;

/// Where a resolver keeps its cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheScope {
    /// Private to one resolver.
    #[default]
    Instance,
    /// One cache for every shared-scope resolver in the process.
    Shared,
}

/// Identifies a cached resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct CacheKey {
    pub path: String,
    pub delimiter: String,
    pub wildcard: String,
}

impl CacheKey {
    pub fn new(path: impl Into<String>, syntax: &PathSyntax) -> Self {
        Self {
            path: path.into(),
            delimiter: syntax.delimiter().to_string(),
            wildcard: syntax.wildcard().to_string(),
        }
    }
}

/// Path-keyed memo of resolved results, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct PathCache {
    entries: IndexMap<CacheKey, ResultSet>,
}

impl PathCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CacheKey) -> Option<&ResultSet> {
        self.entries.get(key)
    }

    /// Stores `result`, replacing any previous entry for `key`.
    pub fn insert(&mut self, key: CacheKey, result: ResultSet) {
        self.entries.insert(key, result);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Copy of every entry.
    pub fn snapshot(&self) -> IndexMap<CacheKey, ResultSet> {
        self.entries.clone()
    }
}

static SHARED: LazyLock<Arc<RwLock<PathCache>>> = LazyLock::new(Arc::default);

/// A resolver's handle on its cache.
///
/// Cloning the handle aliases the same cache; use [`CacheHandle::detached`]
/// to get an independent copy.
#[derive(Debug, Clone)]
pub(crate) struct CacheHandle {
    scope: CacheScope,
    cache: Arc<RwLock<PathCache>>,
}

impl CacheHandle {
    pub(crate) fn new(scope: CacheScope) -> Self {
        let cache = match scope {
            CacheScope::Instance => Arc::default(),
            CacheScope::Shared => Arc::clone(&SHARED),
        };
        Self { scope, cache }
    }

    /// Handle for a resolver copied from one using `self`.
    ///
    /// Instance caches are copied so the two resolvers never alias. The shared
    /// cache already holds the source's entries, so the new handle adopts it
    /// as is.
    pub(crate) fn detached(&self) -> Self {
        match self.scope {
            CacheScope::Instance => Self {
                scope: CacheScope::Instance,
                cache: Arc::new(RwLock::new(self.read().clone())),
            },
            CacheScope::Shared => Self::new(CacheScope::Shared),
        }
    }

    pub(crate) fn scope(&self) -> CacheScope {
        self.scope
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, PathCache> {
        self.cache.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, PathCache> {
        self.cache.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// True while some guard on the cache is held.
    #[cfg(test)]
    pub(crate) fn is_locked(&self) -> bool {
        matches!(self.cache.try_write(), Err(std::sync::TryLockError::WouldBlock))
    }
}
