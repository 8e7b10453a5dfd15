//! Error types for path resolution.
//!
//! Resolution itself never fails: a path that matches nothing yields the
//! caller's default. Errors only come from configuring a resolver with an
//! unusable path syntax, or from building one over a document that is not a
//! tree.

use thiserror::Error;

/// Structured error types for resolver configuration and construction.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The path delimiter was set to an empty string
    #[error("The delimiter must not be an empty string")]
    EmptyDelimiter,

    /// The wildcard token was set to an empty string
    #[error("The wildcard must not be an empty string")]
    EmptyWildcard,

    /// A resolver was built over a scalar instead of a list or map
    #[error("Cannot resolve paths in a {found} value; the document must be a list or a map")]
    NotATree { found: &'static str },
}

impl ResolveError {
    /// Check if this error comes from an invalid delimiter or wildcard
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            ResolveError::EmptyDelimiter | ResolveError::EmptyWildcard
        )
    }

    /// Check if this error comes from an unusable document
    pub fn is_construction_error(&self) -> bool {
        matches!(self, ResolveError::NotATree { .. })
    }
}

// Conversion from ResolveError to the main Error type
impl From<ResolveError> for crate::Error {
    fn from(err: ResolveError) -> Self {
        crate::Error::Resolve(err)
    }
}
