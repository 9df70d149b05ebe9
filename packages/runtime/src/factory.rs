//! # Factory
//!
//! Entry points for markup that has been compiled into factory calls:
//!
//! ```rust,ignore
//! // <list kind="people">you</list>
//! let x = xyfy([("list", list_component)]);
//! let node = x.create("list", Some(&props), &[Value::from("you")])?;
//!
//! // <Greeting /> with a component value instead of an intrinsic name
//! let node = jsx(&greeting, None, &[])?;
//! ```
//!
//! Intrinsic and functional components see identical properties for identical
//! input. Name resolution never fails on its own: an unknown name only becomes
//! an error when the factory tries to call it.

use crate::component::{Component, ComponentRef};
use crate::error::{RuntimeError, RuntimeResult};
use crate::props::with_children;
use crate::value::{Props, Value};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use xyfy_common::{FactoryConfig, FileSystem};

/// Merge `props` and `children`, then call `component` with the result.
///
/// Uses the default configuration; see [`Factory::invoke`] for a configured call.
pub fn jsx(component: &Component, props: Option<&Props>, children: &[Value]) -> RuntimeResult<Value> {
    invoke_with(component, props, children, &FactoryConfig::default())
}

/// Build a factory over a table of intrinsic elements
pub fn xyfy<K: Into<String>>(intrinsics: impl IntoIterator<Item = (K, Component)>) -> Factory {
    Factory::new(intrinsics)
}

fn invoke_with(
    component: &Component,
    props: Option<&Props>,
    children: &[Value],
    config: &FactoryConfig,
) -> RuntimeResult<Value> {
    let merged = with_children(props, children, config.null_children)?;
    Ok(component.call(merged))
}

/// Component factory with a fixed intrinsic table.
///
/// Cloning is cheap and clones share the table. The table is never modified
/// after construction, so a factory can be used from many threads at once.
#[derive(Debug, Clone)]
pub struct Factory {
    intrinsics: Arc<HashMap<String, Component>>,
    config: FactoryConfig,
}

impl Factory {
    pub fn new<K: Into<String>>(intrinsics: impl IntoIterator<Item = (K, Component)>) -> Self {
        Self::with_config(intrinsics, FactoryConfig::default())
    }

    pub fn with_config<K: Into<String>>(
        intrinsics: impl IntoIterator<Item = (K, Component)>,
        config: FactoryConfig,
    ) -> Self {
        let intrinsics: HashMap<String, Component> = intrinsics
            .into_iter()
            .map(|(name, component)| (name.into(), component))
            .collect();
        debug!(intrinsics = intrinsics.len(), ?config, "Building factory");

        Self {
            intrinsics: Arc::new(intrinsics),
            config,
        }
    }

    /// Build a factory configured from the `xyfy.config.json` in `dir`, if any
    pub fn from_config_dir<K: Into<String>>(
        intrinsics: impl IntoIterator<Item = (K, Component)>,
        fs: &impl FileSystem,
        dir: &Path,
    ) -> RuntimeResult<Self> {
        let config = FactoryConfig::load(fs, dir)?;
        Ok(Self::with_config(intrinsics, config))
    }

    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    pub fn has_intrinsic(&self, name: &str) -> bool {
        self.intrinsics.contains_key(name)
    }

    pub fn intrinsic_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.intrinsics.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Resolve a component reference. Unknown names resolve to `None`.
    pub fn resolve(&self, component: &ComponentRef) -> Option<Component> {
        match component {
            ComponentRef::Callable(component) => Some(component.clone()),
            ComponentRef::Named(name) => {
                let resolved = self.intrinsics.get(name).cloned();
                debug!(name = %name, found = resolved.is_some(), "Resolving intrinsic");
                resolved
            }
        }
    }

    /// Create a node from a component or an intrinsic element name
    pub fn create(
        &self,
        component: impl Into<ComponentRef>,
        props: Option<&Props>,
        children: &[Value],
    ) -> RuntimeResult<Value> {
        self.dispatch(&component.into(), props, children)
    }

    /// Merge and call a component directly, honouring this factory's configuration
    pub fn invoke(
        &self,
        component: &Component,
        props: Option<&Props>,
        children: &[Value],
    ) -> RuntimeResult<Value> {
        invoke_with(component, props, children, &self.config)
    }

    #[instrument(
        level = "debug",
        skip_all,
        fields(component = %component.display_name(), child_count = children.len())
    )]
    fn dispatch(
        &self,
        component: &ComponentRef,
        props: Option<&Props>,
        children: &[Value],
    ) -> RuntimeResult<Value> {
        let resolved = self.resolve(component);
        let merged = with_children(props, children, self.config.null_children)?;

        match resolved {
            Some(callable) => Ok(callable.call(merged)),
            None => {
                warn!(name = %component.display_name(), "Component is not callable");
                Err(RuntimeError::UnresolvedComponent {
                    name: component.display_name().to_string(),
                })
            }
        }
    }
}
