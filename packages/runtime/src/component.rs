use crate::value::{Props, Value};
use std::fmt;
use std::sync::Arc;

/// A unary component callable: properties in, node out
#[derive(Clone)]
pub struct Component {
    name: Option<Arc<str>>,
    render: Arc<dyn Fn(Props) -> Value + Send + Sync>,
}

impl Component {
    pub fn new(render: impl Fn(Props) -> Value + Send + Sync + 'static) -> Self {
        Self {
            name: None,
            render: Arc::new(render),
        }
    }

    /// Same as [`Component::new`], with a display name used in logs
    pub fn named(
        name: impl Into<Arc<str>>,
        render: impl Fn(Props) -> Value + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: Some(name.into()),
            render: Arc::new(render),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn call(&self, props: Props) -> Value {
        (self.render)(props)
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("name", &self.name().unwrap_or("<anonymous>"))
            .finish_non_exhaustive()
    }
}

/// The first argument of a factory call
#[derive(Debug, Clone)]
pub enum ComponentRef {
    Callable(Component),
    /// An intrinsic element, looked up by name
    Named(String),
}

impl ComponentRef {
    pub fn display_name(&self) -> &str {
        match self {
            ComponentRef::Callable(component) => component.name().unwrap_or("<anonymous>"),
            ComponentRef::Named(name) => name,
        }
    }
}

impl From<Component> for ComponentRef {
    fn from(component: Component) -> Self {
        ComponentRef::Callable(component)
    }
}

impl From<&Component> for ComponentRef {
    fn from(component: &Component) -> Self {
        ComponentRef::Callable(component.clone())
    }
}

impl From<&str> for ComponentRef {
    fn from(name: &str) -> Self {
        ComponentRef::Named(name.to_string())
    }
}

impl From<String> for ComponentRef {
    fn from(name: String) -> Self {
        ComponentRef::Named(name)
    }
}
