use crate::{Presenter, RenderConfig, Registry, RegistryBuilder, register_all};
use schemaview_types::{Item, Node};

/// Renders items through the registry, falling back to the presenter's default container
///
/// Owns the presenter and a frozen [`Registry`]. Rendering never mutates
/// either, so a dispatcher can be shared by reference across threads.
#[derive(Debug)]
pub struct Dispatcher<P: Presenter> {
    presenter: P,
    registry: Registry,
}

impl<P: Presenter> Dispatcher<P> {
    pub fn new(presenter: P, registry: Registry) -> Self {
        Self {
            presenter,
            registry,
        }
    }

    pub fn builder(presenter: P) -> DispatcherBuilder<P> {
        DispatcherBuilder::new(presenter)
    }

    /// Dispatcher with every built-in renderer registered
    pub fn with_builtin_renderers(presenter: P, config: &RenderConfig) -> Self {
        Self::builder(presenter).register_builtin(config).build()
    }

    pub fn render(&self, item: &Item) -> Node {
        match self.registry.lookup(&item.item_type) {
            Some(render) => {
                tracing::trace!(item_type = %item.item_type, "dispatching to type renderer");
                let presenter: &dyn Presenter = &self.presenter;
                render(presenter, item)
            }
            None => {
                tracing::debug!(
                    item_type = %item.item_type,
                    "no type renderer; using default item"
                );
                self.presenter.create_default_item(item)
            }
        }
    }

    pub fn render_all<'a, I>(&self, items: I) -> Vec<Node>
    where
        I: IntoIterator<Item = &'a Item>,
    {
        items.into_iter().map(|item| self.render(item)).collect()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

/// Startup-time registration in front of a [`Dispatcher`]
#[derive(Debug)]
pub struct DispatcherBuilder<P: Presenter> {
    presenter: P,
    registry: RegistryBuilder,
}

impl<P: Presenter> DispatcherBuilder<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            registry: RegistryBuilder::new(),
        }
    }

    pub fn register_builtin(mut self, config: &RenderConfig) -> Self {
        register_all(&mut self.registry, config);
        self
    }

    /// Register a render function for `type_name`, replacing any earlier one
    pub fn register_type_renderer<F>(mut self, type_name: impl Into<String>, render_fn: F) -> Self
    where
        F: Fn(&dyn Presenter, &Item) -> Node + Send + Sync + 'static,
    {
        self.registry.register_fn(type_name, render_fn);
        self
    }

    pub fn registry_mut(&mut self) -> &mut RegistryBuilder {
        &mut self.registry
    }

    pub fn build(self) -> Dispatcher<P> {
        Dispatcher::new(self.presenter, self.registry.build())
    }
}
