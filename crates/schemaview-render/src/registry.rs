use crate::{Presenter, RenderFn};
use schemaview_types::{Item, Node};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Mutable registration phase of the type registry
///
/// Registration is last-wins: registering a type name again replaces the
/// earlier render function, which becomes unreachable.
#[derive(Default)]
pub struct RegistryBuilder {
    entries: HashMap<String, RenderFn>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `type_name` to `render_fn`, returning the function it displaced
    pub fn register(
        &mut self,
        type_name: impl Into<String>,
        render_fn: RenderFn,
    ) -> Option<RenderFn> {
        let type_name = type_name.into();
        let previous = self.entries.insert(type_name.clone(), render_fn);
        if previous.is_some() {
            tracing::debug!(type_name = %type_name, "replaced existing type renderer");
        }
        previous
    }

    /// Register a closure as the render function for `type_name`
    pub fn register_fn<F>(&mut self, type_name: impl Into<String>, render_fn: F) -> Option<RenderFn>
    where
        F: Fn(&dyn Presenter, &Item) -> Node + Send + Sync + 'static,
    {
        self.register(type_name, Arc::new(render_fn))
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    /// Freeze the registrations into a read-only registry
    pub fn build(self) -> Registry {
        Registry {
            entries: self.entries,
        }
    }
}

impl fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("types", &sorted_keys(&self.entries))
            .finish()
    }
}

/// Read-only type name -> render function mapping
///
/// Built once through [`RegistryBuilder`]; exposes no way to add or remove
/// entries, so a shared registry is a stable snapshot.
#[derive(Clone, Default)]
pub struct Registry {
    entries: HashMap<String, RenderFn>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub fn lookup(&self, type_name: &str) -> Option<&RenderFn> {
        self.entries.get(type_name)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered type names in sorted order
    pub fn type_names(&self) -> Vec<&str> {
        sorted_keys(&self.entries)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("types", &self.type_names())
            .finish()
    }
}

fn sorted_keys(entries: &HashMap<String, RenderFn>) -> Vec<&str> {
    let mut keys: Vec<&str> = entries.keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys
}
