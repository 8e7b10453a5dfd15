//! Pre-order traversal of a document tree.
//!
//! [`TreeWalker`] visits every node below the root, parents before children,
//! and keeps the chain of keys leading to the node it last yielded. That
//! chain is what [`PathMatcher`](super::matcher::PathMatcher) compares user
//! paths against.
//!
//! ```
//! # use treepath::{Key, Value, resolve::TreeWalker};
//! let doc: Value = serde_json::json!({"a": [10, 20]}).into();
//! let mut walker = TreeWalker::new(&doc);
//!
//! let first = walker.next().unwrap();
//! assert_eq!((first.depth, first.key), (0, Key::Name("a")));
//!
//! let second = walker.next().unwrap();
//! assert_eq!(second.value, &Value::Int(10));
//! assert_eq!(walker.pathway(), &[Key::Name("a"), Key::Index(0)]);
//! ```

use crate::value::{Key, Value};

/// A node yielded by [`TreeWalker`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visit<'a> {
    /// Distance from the root; the root's own entries sit at depth 0.
    pub depth: usize,
    /// Key of this node in its parent.
    pub key: Key<'a>,
    pub value: &'a Value,
}

enum Children<'a> {
    List(std::iter::Enumerate<std::slice::Iter<'a, Value>>),
    Map(indexmap::map::Iter<'a, String, Value>),
}

impl<'a> Children<'a> {
    fn of(value: &'a Value) -> Option<Self> {
        match value {
            Value::List(items) => Some(Children::List(items.iter().enumerate())),
            Value::Map(map) => Some(Children::Map(map.iter())),
            _ => None,
        }
    }
}

impl<'a> Iterator for Children<'a> {
    type Item = (Key<'a>, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Children::List(items) => items.next().map(|(i, item)| (Key::Index(i), item)),
            Children::Map(entries) => entries
                .next()
                .map(|(name, item)| (Key::Name(name.as_str()), item)),
        }
    }
}

/// Lazy pre-order walk over a document.
///
/// Composite values (empty ones included) are yielded before their children.
/// After each call to `next`, [`pathway`](Self::pathway) returns the keys from
/// the root down to the yielded node.
pub struct TreeWalker<'a> {
    stack: Vec<Children<'a>>,
    pathway: Vec<Key<'a>>,
    max_depth: Option<usize>,
}

impl<'a> TreeWalker<'a> {
    /// Starts a walk over `root`. Scalars have nothing to walk.
    pub fn new(root: &'a Value) -> Self {
        Self {
            stack: Children::of(root).into_iter().collect(),
            pathway: Vec::new(),
            max_depth: None,
        }
    }

    /// Stops descending below `depth`; nodes at `depth` are still yielded.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Keys from the root to the most recently yielded node.
    pub fn pathway(&self) -> &[Key<'a>] {
        &self.pathway
    }
}

impl<'a> Iterator for TreeWalker<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let depth = self.stack.len().checked_sub(1)?;
            let Some((key, value)) = self.stack[depth].next() else {
                self.stack.pop();
                continue;
            };

            self.pathway.truncate(depth);
            self.pathway.push(key);

            if self.max_depth.is_none_or(|max| depth < max)
                && let Some(children) = Children::of(value)
            {
                self.stack.push(children);
            }

            return Some(Visit { depth, key, value });
        }
    }
}
