//! Matching user path segments against the concrete keys of a node.

use crate::value::Key;

use super::syntax::PathSyntax;

/// One delimiter-separated token of a user path.
///
/// A segment made only of ASCII digits also carries its integer form, so
/// `foo.0` can address position 0 of a list while staying textual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'p> {
    text: &'p str,
    index: Option<usize>,
}

impl<'p> Segment<'p> {
    pub fn new(text: &'p str) -> Self {
        let index = if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
            text.parse().ok()
        } else {
            None
        };
        Self { text, index }
    }

    pub fn as_str(&self) -> &'p str {
        self.text
    }

    /// Integer form of a digit-only segment.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Compares against a concrete key after numeric normalization.
    ///
    /// A digit segment matches a list position or map name with the same
    /// integer value, and any map name spelled identically. Other segments
    /// only match map names spelled identically.
    pub fn matches_key(&self, key: Key<'_>) -> bool {
        match (self.index, key) {
            (Some(index), Key::Index(position)) => index == position,
            (Some(index), Key::Name(name)) => {
                name == self.text || key.as_index() == Some(index)
            }
            (None, Key::Index(_)) => false,
            (None, Key::Name(name)) => name == self.text,
        }
    }

    /// Exact textual identity with a key, without normalization.
    fn is_identical(&self, key: Key<'_>) -> bool {
        match key {
            Key::Name(name) => name == self.text,
            Key::Index(position) => self.index == Some(position) && !self.has_leading_zero(),
        }
    }

    fn has_leading_zero(&self) -> bool {
        self.text.len() > 1 && self.text.starts_with('0')
    }
}

/// Decides whether a node's ancestor chain satisfies a split user path.
#[derive(Debug, Clone)]
pub struct PathMatcher<'p> {
    segments: Vec<Segment<'p>>,
    wildcard: &'p str,
}

impl<'p> PathMatcher<'p> {
    /// Splits `path` with `syntax` and prepares the segments for matching.
    pub fn new(path: &'p str, syntax: &'p PathSyntax) -> Self {
        Self {
            segments: syntax.split(path).map(Segment::new).collect(),
            wildcard: syntax.wildcard(),
        }
    }

    pub fn segments(&self) -> &[Segment<'p>] {
        &self.segments
    }

    /// Depth at which candidate nodes sit: one less than the segment count.
    pub fn target_depth(&self) -> Option<usize> {
        self.segments.len().checked_sub(1)
    }

    /// Returns true if `pathway` satisfies every segment.
    ///
    /// An identical chain always matches, including two empty ones. Otherwise
    /// each segment must equal the key at its position or be the wildcard; a
    /// missing key never matches. An empty segment list only matches an empty
    /// chain.
    pub fn matches(&self, pathway: &[Key<'_>]) -> bool {
        if self.segments.len() == pathway.len()
            && self
                .segments
                .iter()
                .zip(pathway)
                .all(|(segment, key)| segment.is_identical(*key))
        {
            return true;
        }

        let mut equals = false;
        for (i, segment) in self.segments.iter().enumerate() {
            let position_matches = match pathway.get(i) {
                Some(key) => segment.matches_key(*key) || segment.as_str() == self.wildcard,
                None => false,
            };
            if !position_matches {
                return false;
            }
            equals = true;
        }
        equals
    }
}
