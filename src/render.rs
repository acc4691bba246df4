//! UI-node adapter.
//!
//! The functions here are the core fold and accessor with one extra
//! constraint: every handler must produce something [`Renderable`], and
//! the result comes back as a [`Node`]. Nothing about the resolution
//! changes.

use std::borrow::Cow;
use std::fmt;

use crate::fold::{self, Foldable};
use crate::handlers::{ExhaustiveHandlers, FoldHandlers};

/// A rendered UI node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Node {
    /// Renders nothing.
    #[default]
    Empty,

    /// A run of text.
    Text(String),

    /// Several nodes rendered in order.
    Fragment(Vec<Node>),
}

impl Node {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(text) => f.write_str(text),
            Self::Fragment(children) => children.iter().try_for_each(|child| write!(f, "{child}")),
        }
    }
}

/// Anything a fold handler may return when rendering.
pub trait Renderable {
    fn into_node(self) -> Node;
}

impl Renderable for Node {
    fn into_node(self) -> Node {
        self
    }
}

impl Renderable for () {
    fn into_node(self) -> Node {
        Node::Empty
    }
}

impl Renderable for String {
    fn into_node(self) -> Node {
        Node::Text(self)
    }
}

impl Renderable for &str {
    fn into_node(self) -> Node {
        Node::Text(self.to_owned())
    }
}

impl Renderable for Cow<'_, str> {
    fn into_node(self) -> Node {
        Node::Text(self.into_owned())
    }
}

impl<R: Renderable> Renderable for Option<R> {
    fn into_node(self) -> Node {
        self.map_or(Node::Empty, Renderable::into_node)
    }
}

impl<R: Renderable> Renderable for Vec<R> {
    fn into_node(self) -> Node {
        Node::Fragment(self.into_iter().map(Renderable::into_node).collect())
    }
}

/// [`fold::fold`] restricted to renderable results.
pub fn fold<T, R>(value: T, handlers: FoldHandlers<'_, T::Error, T::Data, R>) -> Node
where
    T: Foldable,
    R: Renderable,
{
    fold::fold(value, handlers).into_node()
}

/// [`fold::fold_w`] restricted to renderable results.
pub fn fold_w<T, R>(value: T, handlers: ExhaustiveHandlers<'_, T::Error, T::Data, R>) -> Node
where
    T: Foldable,
    R: Renderable,
{
    fold::fold_w(value, handlers).into_node()
}

/// [`fold::success_or_else`] restricted to renderable payloads.
pub fn success_or_else<T, F>(value: T, or_else: F) -> Node
where
    T: Foldable,
    T::Data: Renderable,
    F: FnOnce(T) -> T::Data,
{
    fold::success_or_else(value, or_else).into_node()
}
