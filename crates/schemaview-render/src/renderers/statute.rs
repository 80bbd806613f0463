use crate::{Presenter, RenderConfig, TypeRenderer, classes};
use schemaview_types::{Item, Node, field_text};

pub const METADATA_CLASS: &str = "item-statute-metadata";
pub const SEPARATOR_CLASS: &str = "item-statute-separator";
pub const SEPARATOR: &str = " • ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Emphasis {
    Plain,
    Bold,
    Italic,
}

/// Metadata fields in display order
const METADATA_FIELDS: &[(&str, Emphasis)] = &[
    ("state", Emphasis::Bold),
    ("year", Emphasis::Plain),
    ("citation", Emphasis::Italic),
];

/// Statute titles with a state / year / citation line beneath them
#[derive(Debug, Clone)]
pub struct StatuteRenderer {
    untitled: String,
}

impl Default for StatuteRenderer {
    fn default() -> Self {
        Self::from_config(&RenderConfig::default())
    }
}

impl StatuteRenderer {
    pub fn new(untitled: impl Into<String>) -> Self {
        Self {
            untitled: untitled.into(),
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.untitled_statute.clone())
    }

    fn overlay_title(&self, presenter: &dyn Presenter, item: &Item, container: &mut Node) {
        if container.find_by_class(classes::TITLE_ROW).is_none() {
            return;
        }
        let Some(link) = container.find_by_class_mut(classes::TITLE_LINK) else {
            return;
        };

        let title = item
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.untitled);
        link.set_text(title);

        let Some(metadata) = metadata_line(presenter, item) else {
            return;
        };
        if container
            .insert_after_class(classes::TITLE_ROW, metadata)
            .is_err()
        {
            tracing::debug!("statute title row has no parent; metadata line dropped");
        }
    }
}

impl TypeRenderer for StatuteRenderer {
    fn render(&self, presenter: &dyn Presenter, item: &Item) -> Node {
        let mut container = presenter.create_default_item(item);
        self.overlay_title(presenter, item, &mut container);
        container
    }
}

/// Build the metadata line, or None when no metadata field is present
///
/// Separators only ever sit between two present fields.
fn metadata_line(presenter: &dyn Presenter, item: &Item) -> Option<Node> {
    let schema = item.schema()?;

    let mut line = Node::element("div")
        .with_class(METADATA_CLASS)
        .with_style("font-size", "0.85em")
        .with_style("color", "#666")
        .with_style("margin-top", "4px");
    let mut has_fields = false;

    for (key, emphasis) in METADATA_FIELDS {
        let Some(text) = field_text(schema, key) else {
            continue;
        };
        if has_fields {
            line.push(
                presenter
                    .make_span(SEPARATOR)
                    .with_class(SEPARATOR_CLASS)
                    .with_style("color", "#ccc"),
            );
        }

        let mut span = presenter.make_span(&text);
        match emphasis {
            Emphasis::Bold => span.set_style("font-weight", "500"),
            Emphasis::Italic => span.set_style("font-style", "italic"),
            Emphasis::Plain => {}
        }
        line.push(span);
        has_fields = true;
    }

    has_fields.then_some(line)
}
