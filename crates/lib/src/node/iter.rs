//! Structural iteration over a node's direct children.
//!
//! Arrays yield `(element, index)` in ascending order, objects yield
//! `(value, key)` in insertion order, and every other value yields nothing.
//! The children are snapshotted before any callback runs, so callbacks are
//! free to mutate the structure they are iterating.

use std::{fmt, future::Future};

use futures::{
    FutureExt,
    future::{JoinAll, join_all},
};

use super::Node;
use crate::value::Value;

/// Completion signal returned by [`Node::for_each_async`].
///
/// Resolves to the callbacks' outputs in call order once every one of them
/// has settled.
pub type Completion<Fut> = JoinAll<Fut>;

/// Position of a child within its parent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Array index
    Index(usize),
    /// Object key
    Name(String),
}

impl Key {
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Name(_) => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Index(_) => None,
            Key::Name(name) => Some(name),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{index}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl PartialEq<usize> for Key {
    fn eq(&self, other: &usize) -> bool {
        self.as_index() == Some(*other)
    }
}

impl PartialEq<&str> for Key {
    fn eq(&self, other: &&str) -> bool {
        self.as_name() == Some(*other)
    }
}

impl Node {
    fn children(&self) -> Vec<(Key, Value)> {
        match self.value() {
            Value::Array(items) => items
                .to_vec()
                .into_iter()
                .enumerate()
                .map(|(index, item)| (Key::Index(index), item))
                .collect(),
            Value::Object(entries) => entries
                .entries()
                .into_iter()
                .map(|(key, item)| (Key::Name(key), item))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Calls `f` with a node for every direct child.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(Node, Key),
    {
        for (key, item) in self.children() {
            f(Node::wrap(item), key);
        }
    }

    /// Calls `f` for every direct child and collects the returned futures.
    ///
    /// All callbacks run, in order, before this returns; the returned
    /// [`Completion`] then waits for every future to settle and yields their
    /// outputs in call order. Driving the futures concurrently is up to the
    /// executor polling the completion.
    pub fn for_each_async<F, Fut>(&self, mut f: F) -> Completion<Fut>
    where
        F: FnMut(Node, Key) -> Fut,
        Fut: Future,
    {
        let pending: Vec<Fut> = self
            .children()
            .into_iter()
            .map(|(key, item)| f(Node::wrap(item), key))
            .collect();
        join_all(pending)
    }

    /// Builds a node wrapping an array of `f`'s results.
    ///
    /// Object keys are dropped; the result is always an array.
    pub fn map<F, R>(&self, mut f: F) -> Node
    where
        F: FnMut(Node, Key) -> R,
        R: Into<Value>,
    {
        let results: Vec<Value> = self
            .children()
            .into_iter()
            .map(|(key, item)| f(Node::wrap(item), key).into())
            .collect();
        Node::wrap(Value::array(results))
    }

    /// Like [`map`](Self::map) with asynchronous callbacks.
    ///
    /// Callbacks are invoked eagerly as in
    /// [`for_each_async`](Self::for_each_async); the future resolves once all
    /// results have settled.
    pub fn map_async<F, Fut>(&self, f: F) -> impl Future<Output = Node> + use<F, Fut>
    where
        F: FnMut(Node, Key) -> Fut,
        Fut: Future,
        Fut::Output: Into<Value>,
    {
        self.for_each_async(f)
            .map(|results| Node::wrap(Value::array(results)))
    }

    /// Indices of an array or keys of an object, in order.
    pub fn keys(&self) -> Vec<Key> {
        self.children().into_iter().map(|(key, _)| key).collect()
    }

    /// Raw child values, in the same order as [`keys`](Self::keys).
    pub fn values(&self) -> Vec<Value> {
        match self.value() {
            Value::Array(items) => items.to_vec(),
            Value::Object(entries) => entries.values(),
            _ => Vec::new(),
        }
    }

    /// `(key, value)` pairs with indices rendered as strings.
    pub fn entries(&self) -> Vec<(String, Value)> {
        match self.value() {
            Value::Object(entries) => entries.entries(),
            _ => self
                .children()
                .into_iter()
                .map(|(key, item)| (key.to_string(), item))
                .collect(),
        }
    }
}
