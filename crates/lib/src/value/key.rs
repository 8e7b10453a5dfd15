//! Concrete keys found while walking a document.
//!
//! A [`Key`] is what a node is stored under in its parent: a position for
//! list items, a name for map entries. The chain of keys from the root to a
//! node is what user path segments are compared against.

use std::fmt;

/// A key held by a node in its parent tree.
///
/// Keys borrow map names from the document, so building an ancestor chain
/// during traversal never allocates per key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    /// Position within a [`Value::List`](super::Value::List)
    Index(usize),
    /// Name within a [`Value::Map`](super::Value::Map)
    Name(&'a str),
}

impl Key<'_> {
    /// Returns the integer this key stands for, if any.
    ///
    /// List positions always have one. Map names have one only when written
    /// as a canonical decimal: ASCII digits with no leading zero, except for
    /// `"0"` itself.
    ///
    /// ```
    /// # use treepath::Key;
    /// assert_eq!(Key::Index(3).as_index(), Some(3));
    /// assert_eq!(Key::Name("10").as_index(), Some(10));
    /// assert_eq!(Key::Name("010").as_index(), None);
    /// assert_eq!(Key::Name("ten").as_index(), None);
    /// ```
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Name(name) => canonical_index(name),
        }
    }

    /// Returns the map name, or `None` for list positions.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Index(_) => None,
            Key::Name(name) => Some(name),
        }
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{index}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

impl From<usize> for Key<'_> {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(name: &'a str) -> Self {
        Key::Name(name)
    }
}

fn canonical_index(name: &str) -> Option<usize> {
    let canonical = match name.as_bytes() {
        [] => false,
        [b'0'] => true,
        [b'0', ..] => false,
        bytes => bytes.iter().all(u8::is_ascii_digit),
    };
    if canonical { name.parse().ok() } else { None }
}
