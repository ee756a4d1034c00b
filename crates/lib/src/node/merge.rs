//! Recursive deep merge.
//!
//! Rules, applied top-down:
//!
//! 1. If either side is null or undefined, the result is the other side.
//! 2. Two arrays concatenate, `current` first. No deduplication.
//! 3. Two objects merge key by key in `other`'s order. Null or undefined
//!    incoming values are skipped; a key holding a container on both sides
//!    is merged recursively; anything else is overwritten verbatim.
//! 4. Otherwise `other` wins.
//!
//! Inputs are never mutated: every merged level is a fresh container, and
//! values taken over verbatim (including opaque values) keep their identity.
//!
//! Each pair of object handles is merged at most once. A pair met again
//! after it finished reuses the earlier result, so shared subtrees stay
//! shared and cost nothing extra. A pair met again while it is still being
//! merged is a cycle and falls back to rule 4.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::value::{Array, Object, Value};

/// Default bound on nested object merges.
pub const DEFAULT_MAX_MERGE_DEPTH: usize = 128;

/// Options controlling [`Node::merge_with`](super::Node::merge_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOptions {
    /// Nesting level past which objects are no longer merged and the
    /// incoming value replaces the current one.
    pub max_depth: usize,
}

impl MergeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_MERGE_DEPTH,
        }
    }
}

pub(super) fn deep_merge(current: &Value, other: &Value, options: &MergeOptions) -> Value {
    Merger::new(options).merge(current, other, 0)
}

/// Storage addresses of a `(current, other)` object pair.
type Pair = (*const (), *const ());

struct Merger<'a> {
    options: &'a MergeOptions,
    active: HashSet<Pair>,
    finished: HashMap<Pair, Value>,
}

impl<'a> Merger<'a> {
    fn new(options: &'a MergeOptions) -> Self {
        Merger {
            options,
            active: HashSet::new(),
            finished: HashMap::new(),
        }
    }

    fn merge(&mut self, current: &Value, other: &Value, depth: usize) -> Value {
        if other.is_nullish() {
            return current.clone();
        }
        if current.is_nullish() {
            return other.clone();
        }

        match (current, other) {
            (Value::Array(left), Value::Array(right)) => {
                let mut items = left.to_vec();
                items.extend(right.to_vec());
                Value::Array(Array::from_vec(items))
            }
            (Value::Object(left), Value::Object(right)) => {
                if depth >= self.options.max_depth {
                    warn!(
                        depth,
                        max_depth = self.options.max_depth,
                        "merge depth limit reached, keeping incoming value"
                    );
                    return other.clone();
                }
                self.merge_pair(left, right, other, depth)
            }
            _ => other.clone(),
        }
    }

    fn merge_pair(&mut self, left: &Object, right: &Object, other: &Value, depth: usize) -> Value {
        let pair = (left.as_ptr(), right.as_ptr());
        if let Some(merged) = self.finished.get(&pair) {
            return merged.clone();
        }
        if !self.active.insert(pair) {
            debug!(depth, "cyclic merge, keeping incoming value");
            return other.clone();
        }

        let merged = self.merge_objects(left, right, depth);
        self.active.remove(&pair);
        self.finished.insert(pair, merged.clone());
        merged
    }

    fn merge_objects(&mut self, left: &Object, right: &Object, depth: usize) -> Value {
        let mut merged = left.to_map();
        for (key, incoming) in right.entries() {
            if incoming.is_nullish() {
                continue;
            }
            match merged.get_mut(&key) {
                Some(existing) if existing.is_container() && incoming.is_container() => {
                    *existing = self.merge(existing, &incoming, depth + 1);
                }
                Some(existing) => *existing = incoming,
                None => {
                    merged.insert(key, incoming);
                }
            }
        }
        Value::Object(Object::from_entries(merged))
    }
}
