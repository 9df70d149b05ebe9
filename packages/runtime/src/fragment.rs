//! Fragments group sibling children without adding a wrapper node.
//!
//! A fragment is produced by invoking [`fragment()`] through the factory like any
//! other component. When it later appears among another component's children, the
//! flattener replaces it in place with its contents.

use crate::component::Component;
use crate::value::{Props, Value, CHILDREN_KEY};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Brand carried by every fragment. Private, so fragments can only be built here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Brand;

/// Fragment marker holding already-normalized children
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    _brand: Brand,
    children: Option<Box<Value>>,
}

impl Fragment {
    /// Wrap a children value as-is. `None` is an empty fragment.
    pub fn new(children: Option<Value>) -> Self {
        Self {
            _brand: Brand,
            children: children.map(Box::new),
        }
    }

    /// Build a fragment from a merged properties object. Only `children` is kept.
    pub fn from_props(mut props: Props) -> Self {
        Self::new(props.remove(CHILDREN_KEY))
    }

    pub fn contents(&self) -> Option<&Value> {
        self.children.as_deref()
    }

    pub fn into_contents(self) -> Option<Value> {
        self.children.map(|children| *children)
    }
}

impl Serialize for Fragment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(usize::from(self.children.is_some())))?;
        if let Some(children) = &self.children {
            map.serialize_entry(CHILDREN_KEY, children)?;
        }
        map.end()
    }
}

/// The fragment component, used as `jsx(&fragment(), None, children)`.
pub fn fragment() -> Component {
    Component::named("Fragment", |props| Value::Fragment(Fragment::from_props(props)))
}

pub fn is_fragment(value: &Value) -> bool {
    matches!(value, Value::Fragment(_))
}

pub fn extract_contents(fragment: &Fragment) -> Option<&Value> {
    fragment.contents()
}
