pub mod children;
pub mod component;
pub mod error;
pub mod factory;
pub mod fragment;
pub mod props;
pub mod value;


#[cfg(test)]
mod tests_factory;

pub use children::{flatten, flatten_list, Children};
pub use component::{Component, ComponentRef};
pub use error::{RuntimeError, RuntimeResult};
pub use factory::{jsx, xyfy, Factory};
pub use fragment::{extract_contents, fragment, is_fragment, Fragment};
pub use props::with_children;
pub use value::{Props, Value, CHILDREN_KEY};

// Re-export configuration so callers don't need xyfy-common directly
pub use xyfy_common::{FactoryConfig, NullChildPolicy};
