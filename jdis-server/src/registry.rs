//! Method registry: the frozen mapping from method names to handlers
//!
//! A [`MethodRegistry`] is built once from one or more method tables and is
//! read-only afterwards. Registration order is preserved inside and across
//! tables, and lookup is a linear scan that returns the first match, so a
//! duplicate name never shadows an earlier entry.

use crate::handler::Handler;
use jdis_core::{Error, Result};

/// One registered RPC method: a name and the handler implementing it.
/// Immutable once registered.
pub struct Method {
    name: String,
    handler: Box<dyn Handler>,
}

impl Method {
    /// Bind a handler to a method name.
    pub fn new(name: impl Into<String>, handler: Box<dyn Handler>) -> Self {
        Self {
            name: name.into(),
            handler,
        }
    }

    /// The method name, matched exactly during lookup.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The handler implementing this method.
    pub fn handler(&self) -> &dyn Handler {
        self.handler.as_ref()
    }
}

impl std::fmt::Debug for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Method").field("name", &self.name).finish()
    }
}

/// Frozen, ordered collection of methods
///
/// Invariant: never empty. Construction fails with [`Error::EmptyRegistry`]
/// rather than producing a registry that can answer nothing.
///
/// # Examples
///
/// ```rust
/// use jdis_server::{from_fn, Method, MethodRegistry};
/// use serde_json::Value;
///
/// let registry = MethodRegistry::from_table(vec![
///     Method::new("ping", from_fn(|_: Option<&Value>| Ok(serde_json::json!("pong")))),
/// ]).unwrap();
/// assert!(registry.lookup("ping").is_some());
/// assert!(registry.lookup("PING").is_none());
/// ```
pub struct MethodRegistry {
    methods: Vec<Method>,
}

impl MethodRegistry {
    /// Build a registry from a single method table.
    pub fn from_table(table: Vec<Method>) -> Result<Self> {
        RegistryBuilder::new().table(table).build()
    }

    /// Start building a registry from several tables.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Find a method by exact name.
    ///
    /// Scans in registration order and returns the first match, so when two
    /// entries share a name the earlier registration wins.
    pub fn lookup(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Number of registered methods, duplicates included.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Always false: an empty registry cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Registered method names in registration order.
    pub fn method_names(&self) -> Vec<&str> {
        self.methods.iter().map(|m| m.name.as_str()).collect()
    }
}

impl std::fmt::Debug for MethodRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodRegistry")
            .field("methods", &self.method_names())
            .finish()
    }
}

/// Builder accumulating method tables before the registry is frozen
///
/// Tables are concatenated in the order the builder methods are called.
/// Freezing an empty builder fails; a builder dropped on the error path
/// releases everything it accumulated.
///
/// # Examples
///
/// ```rust
/// use jdis_server::{from_fn, Method, MethodRegistry};
/// use serde_json::Value;
///
/// let foo = vec![Method::new("foo.1", from_fn(|_: Option<&Value>| Ok(serde_json::json!("foo1"))))];
/// let bar = vec![Method::new("bar.1", from_fn(|_: Option<&Value>| Ok(serde_json::json!("bar1"))))];
///
/// let registry = MethodRegistry::builder().table(foo).table(bar).build().unwrap();
/// assert_eq!(registry.method_names(), ["foo.1", "bar.1"]);
/// ```
#[derive(Default)]
pub struct RegistryBuilder {
    methods: Vec<Method>,
}

impl RegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a whole table of methods.
    pub fn table(mut self, table: Vec<Method>) -> Self {
        self.methods.extend(table);
        self
    }

    /// Append a single method.
    pub fn handler(mut self, name: impl Into<String>, handler: Box<dyn Handler>) -> Self {
        self.methods.push(Method::new(name, handler));
        self
    }

    /// Freeze the registry.
    ///
    /// Fails with [`Error::EmptyRegistry`] when no methods were registered,
    /// whether because no table was added or every table was empty.
    pub fn build(self) -> Result<MethodRegistry> {
        if self.methods.is_empty() {
            return Err(Error::EmptyRegistry);
        }
        Ok(MethodRegistry {
            methods: self.methods,
        })
    }
}
