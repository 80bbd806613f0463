// Error types
pub mod error;

// Presenter and renderer contracts
pub mod traits;

// Default HTML presenter
pub mod presenter;

// Concrete renderers
pub mod renderers;

// Render function registry
pub mod registry;

// Renderer table and bulk registration
pub mod factory;

// Registry-backed dispatch
pub mod dispatch;

// Number and price formatting
pub mod format;

// Render configuration
pub mod config;

// Traits
pub use traits::{Presenter, RenderFn, TypeRenderer};

// Presenter
pub use presenter::{HtmlPresenter, classes};

// Renderers
pub use renderers::{PodcastEpisodeRenderer, RealEstateRenderer, StatuteRenderer};

// Registry
pub use registry::{Registry, RegistryBuilder};

// Factory
pub use factory::{
    RendererKind, RendererMetadata, create_renderer, get_all_renderers, get_renderer_for_type,
    register_all, register_renderer,
};

// Dispatch
pub use dispatch::{Dispatcher, DispatcherBuilder};

// Formatting
pub use format::{PriceFormat, group_thousands};

// Config
pub use config::{RenderConfig, resolve_config_path};

// Error types
pub use error::{Error, Result};
