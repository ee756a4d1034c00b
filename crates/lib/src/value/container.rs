//! Shared container handles.
//!
//! [`Array`] and [`Object`] wrap their contents in `Rc<RefCell<..>>` so that
//! every clone of a handle refers to the same storage. Accessors hand out
//! cloned child handles rather than borrows, which keeps `RefCell` borrows
//! short-lived and lets callers mutate through any handle at any time.

use std::{cell::RefCell, fmt, rc::Rc};

use indexmap::IndexMap;

use super::Value;

/// Most undefined slots a single [`Array::set`] may add past the end.
pub const MAX_ARRAY_GAP: usize = 1 << 16;

/// An ordered sequence of values behind a shared handle.
#[derive(Clone, Default)]
pub struct Array(Rc<RefCell<Vec<Value>>>);

impl Array {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vec(items: Vec<Value>) -> Self {
        Array(Rc::new(RefCell::new(items)))
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Returns the element at `index`, or `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().get(index).cloned()
    }

    /// Stores `value` at `index`, growing the array as needed.
    ///
    /// Slots between the old length and `index` are filled with
    /// [`Value::Undefined`]. Returns `false` and leaves the array untouched
    /// when that would add more than [`MAX_ARRAY_GAP`] slots.
    pub fn set(&self, index: usize, value: impl Into<Value>) -> bool {
        let mut items = self.0.borrow_mut();
        let len = items.len();
        if index < len {
            items[index] = value.into();
            return true;
        }
        if index - len > MAX_ARRAY_GAP {
            return false;
        }
        items.resize(index, Value::Undefined);
        items.push(value.into());
        true
    }

    pub fn push(&self, value: impl Into<Value>) {
        self.0.borrow_mut().push(value.into());
    }

    /// Returns a snapshot of the element handles.
    pub fn to_vec(&self) -> Vec<Value> {
        self.0.borrow().clone()
    }

    /// Replaces the contents in place; every handle observes the change.
    pub fn replace(&self, items: Vec<Value>) {
        *self.0.borrow_mut() = items;
    }

    /// Returns true if both handles point at the same storage.
    pub fn ptr_eq(&self, other: &Array) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.0.borrow() == *other.0.borrow()
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(items) => f.debug_list().entries(items.iter()).finish(),
            Err(_) => f.write_str("[<borrowed>]"),
        }
    }
}

/// An insertion-ordered mapping from string keys to values behind a shared
/// handle.
#[derive(Clone, Default)]
pub struct Object(Rc<RefCell<IndexMap<String, Value>>>);

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an object from entries in order. A repeated key keeps its
    /// first position and its last value.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, Value)>) -> Self {
        Object(Rc::new(RefCell::new(entries.into_iter().collect())))
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.borrow().contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.0.borrow().get(key).cloned()
    }

    /// Inserts or overwrites `key`, returning the previous value.
    ///
    /// Overwriting keeps the key at its original position.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.borrow_mut().insert(key.into(), value.into())
    }

    pub fn keys(&self) -> Vec<String> {
        self.0.borrow().keys().cloned().collect()
    }

    pub fn values(&self) -> Vec<Value> {
        self.0.borrow().values().cloned().collect()
    }

    /// Returns a snapshot of the entries in insertion order.
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.0
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Returns a snapshot of the entries as a keyed map.
    pub(crate) fn to_map(&self) -> IndexMap<String, Value> {
        self.0.borrow().clone()
    }

    /// Replaces the contents in place; every handle observes the change.
    pub fn replace(&self, entries: impl IntoIterator<Item = (String, Value)>) {
        let entries: IndexMap<String, Value> = entries.into_iter().collect();
        *self.0.borrow_mut() = entries;
    }

    /// Returns true if both handles point at the same storage.
    pub fn ptr_eq(&self, other: &Object) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Address of the shared storage, stable for the handle's lifetime.
    pub(crate) fn as_ptr(&self) -> *const () {
        Rc::as_ptr(&self.0).cast()
    }
}

/// Key order is ignored when comparing objects.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        let left = self.0.borrow();
        let right = other.0.borrow();
        left.len() == right.len() && left.iter().all(|(k, v)| right.get(k) == Some(v))
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(entries) => f.debug_map().entries(entries.iter()).finish(),
            Err(_) => f.write_str("{<borrowed>}"),
        }
    }
}
