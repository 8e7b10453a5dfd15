//!
//! treepath: resolve delimited paths against in-memory document trees.
//!
//! A document is a tree of [`Value`]s shaped like parsed JSON: scalars,
//! ordered lists, and ordered string-keyed maps. A [`PathResolver`] owns one
//! document snapshot and answers queries such as `server.headers` or
//! `items.*.id`, returning a [`ResultSet`] that holds both the resolved value
//! and a flat map from every concrete matched path to its value.
//!
//! ## Core Concepts
//!
//! * **Values (`value::Value`)**: The tagged union for every node in a document.
//! * **Paths**: Text split on a configurable delimiter (default `.`) into segments.
//!   Digit-only segments also address list positions. A configurable wildcard
//!   (default `*`) matches any single key.
//! * **Resolution (`resolve::PathResolver`)**: Shortcuts for exact top-level keys and
//!   the bare wildcard, then a cached pre-order walk that matches every node at the
//!   path's depth.
//! * **Caching (`resolve::cache`)**: Results are memoized per path and syntax, either
//!   per resolver or in one process-wide cache.

pub mod resolve;
pub mod result;
pub mod value;

pub use resolve::{CacheScope, PathResolver, PathSyntax, ResolverOptions, Source};
pub use result::{FlatMap, ResultSet};
pub use value::{Key, Map, Value};

/// Result type used throughout the treepath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the treepath library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured resolver errors from the resolve module
    #[error(transparent)]
    Resolve(resolve::ResolveError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Resolve(_) => "resolve",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error comes from an empty delimiter or wildcard.
    pub fn is_configuration_error(&self) -> bool {
        match self {
            Error::Resolve(resolve_err) => resolve_err.is_configuration_error(),
            _ => false,
        }
    }

    /// Check if this error comes from an unusable document.
    pub fn is_construction_error(&self) -> bool {
        match self {
            Error::Resolve(resolve_err) => resolve_err.is_construction_error(),
            _ => false,
        }
    }

    /// Check if this error is a JSON parse or serialization failure.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
