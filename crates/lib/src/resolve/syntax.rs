//! Path syntax: the delimiter that separates segments and the wildcard token.

use super::errors::ResolveError;

/// Default segment delimiter.
pub const DEFAULT_DELIMITER: &str = ".";

/// Default wildcard token.
pub const DEFAULT_WILDCARD: &str = "*";

/// A validated delimiter/wildcard pair.
///
/// Both tokens are guaranteed non-empty. Setters validate at set time, so a
/// resolver can never be queried with an unusable syntax.
///
/// ```
/// # use treepath::PathSyntax;
/// let syntax = PathSyntax::new(":", "@")?;
/// let segments: Vec<&str> = syntax.split("foo:@:bar").collect();
/// assert_eq!(segments, ["foo", "@", "bar"]);
/// assert!(syntax.is_wildcard("@"));
/// # Ok::<(), treepath::resolve::ResolveError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawSyntax", into = "RawSyntax")]
pub struct PathSyntax {
    delimiter: String,
    wildcard: String,
}

impl Default for PathSyntax {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            wildcard: DEFAULT_WILDCARD.to_string(),
        }
    }
}

impl PathSyntax {
    pub fn new(
        delimiter: impl Into<String>,
        wildcard: impl Into<String>,
    ) -> Result<Self, ResolveError> {
        let mut syntax = Self::default();
        syntax.set_delimiter(delimiter)?;
        syntax.set_wildcard(wildcard)?;
        Ok(syntax)
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn wildcard(&self) -> &str {
        &self.wildcard
    }

    /// Replaces the delimiter.
    ///
    /// # Errors
    /// Returns [`ResolveError::EmptyDelimiter`] if `delimiter` is empty; the
    /// current delimiter is kept.
    pub fn set_delimiter(&mut self, delimiter: impl Into<String>) -> Result<(), ResolveError> {
        let delimiter = delimiter.into();
        if delimiter.is_empty() {
            return Err(ResolveError::EmptyDelimiter);
        }
        self.delimiter = delimiter;
        Ok(())
    }

    /// Replaces the wildcard token.
    ///
    /// # Errors
    /// Returns [`ResolveError::EmptyWildcard`] if `wildcard` is empty; the
    /// current wildcard is kept.
    pub fn set_wildcard(&mut self, wildcard: impl Into<String>) -> Result<(), ResolveError> {
        let wildcard = wildcard.into();
        if wildcard.is_empty() {
            return Err(ResolveError::EmptyWildcard);
        }
        self.wildcard = wildcard;
        Ok(())
    }

    /// Splits a path into its raw segments. Empty segments are kept.
    pub fn split<'p>(&self, path: &'p str) -> std::str::Split<'p, &str> {
        path.split(self.delimiter.as_str())
    }

    /// Joins concrete keys back into a path.
    pub fn join<I>(&self, parts: I) -> String
    where
        I: IntoIterator,
        I::Item: std::fmt::Display,
    {
        let mut path = String::new();
        for (i, part) in parts.into_iter().enumerate() {
            if i > 0 {
                path.push_str(&self.delimiter);
            }
            path.push_str(&part.to_string());
        }
        path
    }

    pub fn is_wildcard(&self, segment: &str) -> bool {
        segment == self.wildcard
    }
}

/// Unvalidated form used for serde.
#[derive(serde::Serialize, serde::Deserialize)]
struct RawSyntax {
    #[serde(default = "default_delimiter")]
    delimiter: String,
    #[serde(default = "default_wildcard")]
    wildcard: String,
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

fn default_wildcard() -> String {
    DEFAULT_WILDCARD.to_string()
}

impl TryFrom<RawSyntax> for PathSyntax {
    type Error = ResolveError;

    fn try_from(raw: RawSyntax) -> Result<Self, Self::Error> {
        PathSyntax::new(raw.delimiter, raw.wildcard)
    }
}

impl From<PathSyntax> for RawSyntax {
    fn from(syntax: PathSyntax) -> Self {
        RawSyntax {
            delimiter: syntax.delimiter,
            wildcard: syntax.wildcard,
        }
    }
}
