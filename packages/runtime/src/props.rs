use crate::children::{flatten, flatten_list};
use crate::error::RuntimeResult;
use crate::value::{Props, Value, CHILDREN_KEY};
use xyfy_common::NullChildPolicy;

/// Merge a properties object with a list of raw children into a fresh object.
///
/// - `None` properties behave like an empty object.
/// - With no children, an existing `children` entry passes through untouched.
/// - Otherwise `children` is replaced by the normalized children; when they
///   normalize to nothing the key is removed.
///
/// Neither input is modified.
pub fn with_children(
    props: Option<&Props>,
    children: &[Value],
    policy: NullChildPolicy,
) -> RuntimeResult<Props> {
    let mut merged = props.cloned().unwrap_or_default();

    let normalized = match children {
        [] => return Ok(merged),
        [only] => flatten(only, policy)?,
        many => flatten_list(many, policy)?,
    };

    match normalized.into_value() {
        Some(value) => {
            merged.insert(CHILDREN_KEY, value);
        }
        None => {
            merged.remove(CHILDREN_KEY);
        }
    }

    Ok(merged)
}
