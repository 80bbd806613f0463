use schemaview_types::{Item, Node};
use std::sync::Arc;

/// Generic item presentation supplied by the host
///
/// Responsibilities:
/// - Build the generic container every item starts from
/// - Wrap literal text in inline nodes
/// - Decide whether an explanation region is attached to an item
pub trait Presenter: Send + Sync {
    /// Build the generic container: a title row with a title link, inside a content region
    fn create_default_item(&self, item: &Item) -> Node;

    /// Wrap literal text in an inline text node
    fn make_span(&self, text: &str) -> Node;

    /// Attach an explanation region to `content` and return it
    ///
    /// Returns None when no explanation applies. `force_show` overrides the
    /// presenter's own visibility policy.
    fn possibly_add_explanation<'a>(
        &self,
        item: &Item,
        content: &'a mut Node,
        force_show: bool,
    ) -> Option<&'a mut Node>;
}

/// Type-specific presentation transform
///
/// Implementations start from the presenter's generic container and overlay
/// their own content. They must always return a node: missing fields and
/// missing container pieces degrade to partial output, never to a panic.
pub trait TypeRenderer: Send + Sync {
    fn render(&self, presenter: &dyn Presenter, item: &Item) -> Node;
}

/// Render function stored in the registry
pub type RenderFn = Arc<dyn Fn(&dyn Presenter, &Item) -> Node + Send + Sync>;
