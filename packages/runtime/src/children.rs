//! # Children Normalization
//!
//! Every component observes its `children` property in one of three shapes:
//!
//! - **absent**: no `children` key at all
//! - **single**: the one child, never wrapped in a list
//! - **multiple**: a list of two or more children, in source order
//!
//! Fragments are expanded in place, at any depth, before the shape is chosen.
//! Plain arrays passed as children are left alone: only fragments splice.
//!
//! ```rust,ignore
//! // <>{1}<>{2}</>{3}</>   ==>   [1, 2, 3]
//! let children = flatten_list(&[one, fragment_of_two, three], NullChildPolicy::Preserve)?;
//! assert_eq!(children.len(), 3);
//! ```

use crate::error::{RuntimeError, RuntimeResult};
use crate::value::Value;
use std::slice;
use tracing::trace;
use xyfy_common::NullChildPolicy;

/// Canonical children value
#[derive(Debug, Clone, PartialEq)]
pub enum Children {
    Empty,
    Single(Value),
    Multiple(Vec<Value>),
}

impl Children {
    /// Pick the shape for an already expanded list
    pub fn collapse(mut items: Vec<Value>) -> Self {
        match items.len() {
            0 => Children::Empty,
            1 => Children::Single(items.remove(0)),
            _ => Children::Multiple(items),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Children::Empty => 0,
            Children::Single(_) => 1,
            Children::Multiple(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Children::Empty)
    }

    /// The value stored under `children`, or `None` when the key must be omitted
    pub fn into_value(self) -> Option<Value> {
        match self {
            Children::Empty => None,
            Children::Single(value) => Some(value),
            Children::Multiple(items) => Some(Value::Array(items)),
        }
    }
}

impl From<Children> for Option<Value> {
    fn from(children: Children) -> Self {
        children.into_value()
    }
}

/// Normalize a single raw child. Arrays are treated as a list of children.
pub fn flatten(child: &Value, policy: NullChildPolicy) -> RuntimeResult<Children> {
    match child {
        Value::Array(items) => flatten_list(items, policy),
        Value::Fragment(fragment) => match fragment.contents() {
            Some(contents) => extract(contents, policy),
            None => Ok(Children::Empty),
        },
        Value::Null if policy == NullChildPolicy::Reject => {
            Err(RuntimeError::NullChild { position: 0 })
        }
        other => Ok(Children::Single(other.clone())),
    }
}

/// Shape of a lone fragment's contents. They are canonical already, so they are
/// taken as they are and never collapsed again; only fragments nested inside
/// hand-built contents are expanded.
fn extract(contents: &Value, policy: NullChildPolicy) -> RuntimeResult<Children> {
    match contents {
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            splice_into(&mut out, items, policy)?;
            Ok(if out.len() >= 2 {
                Children::Multiple(out)
            } else {
                Children::Single(Value::Array(out))
            })
        }
        Value::Fragment(_) => flatten(contents, policy),
        Value::Null if policy == NullChildPolicy::Reject => {
            Err(RuntimeError::NullChild { position: 0 })
        }
        other => Ok(Children::Single(other.clone())),
    }
}

/// Normalize an ordered list of raw children
pub fn flatten_list(items: &[Value], policy: NullChildPolicy) -> RuntimeResult<Children> {
    let mut out = Vec::with_capacity(items.len());
    splice_into(&mut out, items, policy)?;
    Ok(Children::collapse(out))
}

fn splice_into(out: &mut Vec<Value>, items: &[Value], policy: NullChildPolicy) -> RuntimeResult<()> {
    for item in items {
        match item {
            // Contents of a fragment are canonical already, so this only recurses
            // further for hand-built fragments.
            Value::Fragment(fragment) => match fragment.contents() {
                Some(Value::Array(inner)) => {
                    trace!(count = inner.len(), at = out.len(), "Splicing fragment");
                    splice_into(out, inner, policy)?;
                }
                Some(single) => splice_into(out, slice::from_ref(single), policy)?,
                None => trace!(at = out.len(), "Dropping empty fragment"),
            },
            Value::Null if policy == NullChildPolicy::Reject => {
                return Err(RuntimeError::NullChild {
                    position: out.len(),
                });
            }
            other => out.push(other.clone()),
        }
    }
    Ok(())
}
