//! The [`Node`] wrapper: path navigation, mutation, iteration and merging
//! over a JSON-like [`Value`].
//!
//! A `Node` owns one [`Value`]. Because arrays and objects are shared
//! handles, the nodes returned by [`Node::get`] and [`Node::traverse`] refer
//! to the same storage as their parent: a write through a child is visible
//! from the parent and from every other node wrapping that container.
//!
//! # Usage
//!
//! ```
//! use nested_traversal::{Key, Node, Value};
//!
//! let mut config = Node::new();
//! config.set("flush.batch_size", 20)?.set("platforms.0.id", "web")?;
//!
//! assert_eq!(config.get("flush.batch_size").unwrap(), 20);
//! assert_eq!(config.traverse("platforms").keys(), vec![Key::Index(0)]);
//!
//! config.merge(Value::from(serde_json::json!({"flush": {"interval": 10000}})));
//! assert_eq!(config.get("flush.interval").unwrap(), 10000);
//! assert_eq!(config.get("flush.batch_size").unwrap(), 20);
//! # Ok::<(), nested_traversal::Error>(())
//! ```

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value::{Kind, Value};

pub mod errors;
mod iter;
mod merge;
mod resolve;

pub use errors::NodeError;
pub use iter::{Completion, Key};
pub use merge::{DEFAULT_MAX_MERGE_DEPTH, MergeOptions};

/// A wrapper over one JSON-like value exposing dotted-path access.
///
/// # Core Operations
///
/// - **Navigation**: [`get`](Self::get), [`traverse`](Self::traverse),
///   [`has`](Self::has)
/// - **Mutation**: [`set`](Self::set) with auto-vivification
/// - **Iteration**: [`for_each`](Self::for_each), [`map`](Self::map),
///   [`keys`](Self::keys), [`values`](Self::values),
///   [`entries`](Self::entries) and their async variants
/// - **Merging**: [`merge`](Self::merge) with deep-merge semantics
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    value: Value,
}

/// Result of [`Node::get`]: containers come back wrapped, leaves raw.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Node(Node),
    Value(Value),
}

impl Item {
    /// True for a wrapped container.
    pub fn is_node(&self) -> bool {
        matches!(self, Item::Node(_))
    }

    /// Borrows the wrapped container, if this is one.
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Item::Node(node) => Some(node),
            Item::Value(_) => None,
        }
    }

    /// Unwraps the container node, if this is one.
    pub fn into_node(self) -> Option<Node> {
        match self {
            Item::Node(node) => Some(node),
            Item::Value(_) => None,
        }
    }

    /// Borrows the raw leaf, if this is one.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Item::Node(_) => None,
            Item::Value(value) => Some(value),
        }
    }

    /// Unwraps the raw leaf, if this is one.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Item::Node(_) => None,
            Item::Value(value) => Some(value),
        }
    }

    /// Returns the underlying value whichever variant this is.
    pub fn to_json(&self) -> Value {
        match self {
            Item::Node(node) => node.to_json(),
            Item::Value(value) => value.clone(),
        }
    }
}

macro_rules! item_eq {
    ($($ty:ty),*) => {
        $(
            impl PartialEq<$ty> for Item {
                fn eq(&self, other: &$ty) -> bool {
                    self.as_value().is_some_and(|value| value == other)
                }
            }
        )*
    };
}

item_eq!(&str, i32, i64, u32, u64, usize, f64, bool);

impl Node {
    /// Creates a node wrapping an empty object.
    pub fn new() -> Self {
        Self::wrap(Value::object())
    }

    /// Creates a node wrapping `value` without copying it.
    pub fn wrap(value: impl Into<Value>) -> Self {
        Node {
            value: value.into(),
        }
    }

    /// Parses JSON text into a node.
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::wrap(value))
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// Returns the wrapped value. Containers are returned as handles to the
    /// same storage, not copies.
    pub fn to_json(&self) -> Value {
        self.value.clone()
    }

    pub fn to_serde_json(&self) -> serde_json::Value {
        serde_json::Value::from(&self.value)
    }

    pub fn to_json_string(&self) -> String {
        self.value.to_json_string()
    }

    pub fn to_json_string_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(&self.value)?)
    }

    pub fn kind(&self) -> Kind {
        self.value.kind()
    }

    pub fn is_array(&self) -> bool {
        matches!(self.value, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self.value, Value::Object(_))
    }

    /// True when this node wraps the absence marker.
    pub fn is_absent(&self) -> bool {
        self.value.is_undefined()
    }

    /// Number of direct children; zero for leaves.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Resolves `path`, wrapping containers and returning leaves raw.
    ///
    /// Returns `None` when the path leads nowhere or to an undefined slot.
    /// Resolution stops at the first null or undefined value it meets and
    /// returns that value, so `get("a.b")` on `{"a": null}` is `null`.
    pub fn get(&self, path: impl AsRef<str>) -> Option<Item> {
        match resolve::resolve(&self.value, path.as_ref()).into_value()? {
            Value::Undefined => None,
            value @ (Value::Array(_) | Value::Object(_)) => Some(Item::Node(Node::wrap(value))),
            value => Some(Item::Value(value)),
        }
    }

    /// Resolves `path` and always wraps the result, wrapping
    /// [`Value::Undefined`] when nothing is there.
    pub fn traverse(&self, path: impl AsRef<str>) -> Node {
        let value = resolve::resolve(&self.value, path.as_ref())
            .into_value()
            .unwrap_or_default();
        Node::wrap(value)
    }

    /// True when every segment of `path` resolves and the final value is not
    /// undefined. An explicit null counts as present.
    pub fn has(&self, path: impl AsRef<str>) -> bool {
        resolve::resolve(&self.value, path.as_ref()).is_present()
    }

    /// Writes `value` at `path`, creating missing containers.
    ///
    /// Numeric segments address array elements and other segments address
    /// object keys. On the way down, a missing slot or one holding a value
    /// of the wrong shape (a leaf, or a container of the other kind) is
    /// replaced by an empty container of the needed kind. A final key
    /// always lands in an object. A final index on an empty object converts
    /// it to an array. Writing past the end of an array fills the gap with
    /// [`Value::Undefined`].
    ///
    /// # Errors
    ///
    /// - [`NodeError::TypeMismatch`] when the final segment is an index and
    ///   its container is a non-empty object.
    /// - [`NodeError::IndexOutOfRange`] when an index lies more than
    ///   [`MAX_ARRAY_GAP`](crate::value::MAX_ARRAY_GAP) slots past the end
    ///   of its array.
    ///
    /// Nothing is written when an error is returned.
    pub fn set(&mut self, path: impl AsRef<str>, value: impl Into<Value>) -> crate::Result<&mut Self> {
        resolve::assign(&mut self.value, path.as_ref(), value.into())?;
        Ok(self)
    }

    /// Deep-merges `other` into this node with default [`MergeOptions`].
    pub fn merge(&mut self, other: impl Into<Value>) {
        self.merge_with(other, &MergeOptions::default());
    }

    /// Deep-merges `other` into this node.
    ///
    /// When the merged result is a container of the same kind as the one
    /// this node wraps, the existing container is updated in place so every
    /// handle to it sees the result.
    pub fn merge_with(&mut self, other: impl Into<Value>, options: &MergeOptions) {
        let merged = merge::deep_merge(&self.value, &other.into(), options);
        if merged.ptr_eq(&self.value) {
            return;
        }
        if let (Value::Object(own), Value::Object(fresh)) = (&self.value, &merged) {
            own.replace(fresh.to_map());
            return;
        }
        if let (Value::Array(own), Value::Array(fresh)) = (&self.value, &merged) {
            own.replace(fresh.to_vec());
            return;
        }
        self.value = merged;
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        Node::wrap(value)
    }
}

impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        Node::wrap(value)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Node::wrap)
    }
}
