//! Path resolution and path assignment over raw values.
//!
//! These work on [`Value`] directly so that walking a path never has to
//! build intermediate [`Node`](super::Node) wrappers. Child containers are
//! reached through cloned handles, so no `RefCell` borrow is held across a
//! recursive step.

use tracing::{debug, trace, warn};

use super::NodeError;
use crate::{
    path::{Segment, segments},
    value::{Array, Kind, MAX_ARRAY_GAP, Object, Value},
};

/// Outcome of walking a path from a root value.
#[derive(Debug, Clone)]
pub(super) enum Resolution {
    /// Every segment was consumed.
    Found(Value),
    /// A null or undefined value was reached before the last segment.
    Stopped(Value),
    /// A key or index was missing, or a leaf was in the way.
    Missing,
}

impl Resolution {
    /// Returns the reached value, including one the walk stopped on.
    pub(super) fn into_value(self) -> Option<Value> {
        match self {
            Resolution::Found(value) | Resolution::Stopped(value) => Some(value),
            Resolution::Missing => None,
        }
    }

    /// True when the full path led to something other than `Undefined`.
    pub(super) fn is_present(&self) -> bool {
        matches!(self, Resolution::Found(value) if !value.is_undefined())
    }
}

pub(super) fn resolve(root: &Value, path: &str) -> Resolution {
    let mut current = root.clone();
    for segment in segments(path) {
        if current.is_nullish() {
            return Resolution::Stopped(current);
        }
        current = match child(&current, segment) {
            Some(next) => next,
            None => return Resolution::Missing,
        };
    }
    Resolution::Found(current)
}

fn child(container: &Value, segment: Segment<'_>) -> Option<Value> {
    match container {
        Value::Array(items) => items.get(segment.index()?),
        Value::Object(entries) => entries.get(segment.as_str()),
        _ => None,
    }
}

/// Writes `value` at `path` below `root`, creating containers on the way.
///
/// Nothing is written when an error is returned.
pub(super) fn assign(root: &mut Value, path: &str, value: Value) -> Result<(), NodeError> {
    let parts: Vec<Segment<'_>> = segments(path).collect();
    let mut staged = root.clone();
    assign_segments(&mut staged, &parts, value, path)?;
    *root = staged;
    Ok(())
}

fn assign_segments(
    slot: &mut Value,
    parts: &[Segment<'_>],
    value: Value,
    path: &str,
) -> Result<(), NodeError> {
    let Some((segment, rest)) = parts.split_first() else {
        *slot = value;
        return Ok(());
    };

    let target = target(slot, *segment, rest.is_empty(), path)?;
    if rest.is_empty() {
        target.put(value);
        return Ok(());
    }

    let mut next = target.get().unwrap_or_default();
    assign_segments(&mut next, rest, value, path)?;
    target.put(next);
    Ok(())
}

/// The position inside a container that one segment addresses.
enum Target<'a> {
    Element(Array, usize),
    Entry(Object, &'a str),
}

impl Target<'_> {
    fn get(&self) -> Option<Value> {
        match self {
            Target::Element(items, index) => items.get(*index),
            Target::Entry(entries, key) => entries.get(key),
        }
    }

    fn put(&self, value: Value) {
        match self {
            Target::Element(items, index) => {
                if *index > items.len() {
                    trace!(index, len = items.len(), "extending array with holes");
                }
                // Gap already checked by `element`; arrays only grow meanwhile.
                items.set(*index, value);
            }
            Target::Entry(entries, key) => {
                entries.insert(*key, value);
            }
        }
    }
}

/// Makes `slot` a container suitable for `segment` and returns the addressed
/// position.
///
/// Leaves are replaced, and so is a container of the wrong kind. The one
/// exception is an index as the `last` segment on a populated object, which
/// is a [`NodeError::TypeMismatch`]; an empty object is converted instead.
fn target<'a>(
    slot: &mut Value,
    segment: Segment<'a>,
    last: bool,
    path: &str,
) -> Result<Target<'a>, NodeError> {
    let wanted = if segment.is_index() {
        Kind::Array
    } else {
        Kind::Object
    };

    match (&*slot, segment.index()) {
        (Value::Array(items), Some(index)) => return element(items.clone(), index, path),
        (Value::Object(entries), None) => {
            return Ok(Target::Entry(entries.clone(), segment.as_str()));
        }
        (Value::Object(entries), Some(_)) if last && !entries.is_empty() => {
            debug!(path, segment = %segment, "index on a populated object");
            return Err(NodeError::TypeMismatch {
                path: path.to_string(),
                expected: Kind::Array,
                actual: Kind::Object,
            });
        }
        (Value::Array(_) | Value::Object(_), _) if !slot.is_empty() => {
            warn!(
                path,
                segment = %segment,
                from = %slot.kind(),
                to = %wanted,
                discarded = slot.len(),
                "replacing populated container of the wrong kind"
            );
        }
        (Value::Array(_) | Value::Object(_), _) => {
            debug!(path, segment = %segment, from = %slot.kind(), to = %wanted, "converting empty container");
        }
        _ => {
            trace!(path, segment = %segment, kind = %wanted, "auto-vivifying container");
        }
    }

    Ok(match segment.index() {
        Some(index) => {
            let items = Array::new();
            let target = element(items.clone(), index, path)?;
            *slot = Value::Array(items);
            target
        }
        None => {
            let entries = Object::new();
            *slot = Value::Object(entries.clone());
            Target::Entry(entries, segment.as_str())
        }
    })
}

fn element<'a>(items: Array, index: usize, path: &str) -> Result<Target<'a>, NodeError> {
    let len = items.len();
    if index.saturating_sub(len) > MAX_ARRAY_GAP {
        debug!(path, index, len, "array index too far past the end");
        return Err(NodeError::IndexOutOfRange {
            path: path.to_string(),
            index,
            len,
        });
    }
    Ok(Target::Element(items, index))
}
