use crate::{Presenter, RenderConfig};
use schemaview_types::{Item, Node};

/// Class names of the generic container pieces renderers look up
pub mod classes {
    pub const CONTAINER: &str = "item-container";
    pub const CONTENT: &str = "item-content";
    pub const TITLE_ROW: &str = "item-title-row";
    pub const TITLE_LINK: &str = "item-title-link";
    pub const SITE: &str = "item-site";
    pub const DESCRIPTION: &str = "item-description";
    pub const EXPLANATION: &str = "item-explanation";
}

const UNTITLED: &str = "Untitled";

/// Presenter producing HTML-shaped node trees
///
/// ```text
/// div.item-container
///   div.item-content
///     div.item-title-row
///       a.item-title-link
///     div.item-site
///     div.item-description
/// ```
#[derive(Debug, Clone, Default)]
pub struct HtmlPresenter {
    show_explanations: bool,
}

impl HtmlPresenter {
    pub fn new(show_explanations: bool) -> Self {
        Self { show_explanations }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.show_explanations)
    }
}

impl Presenter for HtmlPresenter {
    fn create_default_item(&self, item: &Item) -> Node {
        let title = item
            .name
            .as_deref()
            .or(item.url.as_deref())
            .unwrap_or(UNTITLED);

        let mut link = Node::element("a")
            .with_class(classes::TITLE_LINK)
            .with_text(title);
        if let Some(url) = &item.url {
            link.set_attr("href", url);
        }

        let mut content = Node::element("div").with_class(classes::CONTENT).with_child(
            Node::element("div")
                .with_class(classes::TITLE_ROW)
                .with_child(link),
        );
        if let Some(site) = &item.site {
            content.push(Node::element("div").with_class(classes::SITE).with_text(site));
        }
        if let Some(description) = &item.description {
            content.push(
                Node::element("div")
                    .with_class(classes::DESCRIPTION)
                    .with_text(description),
            );
        }

        Node::element("div")
            .with_class(classes::CONTAINER)
            .with_attr("data-type", &item.item_type)
            .with_child(content)
    }

    fn make_span(&self, text: &str) -> Node {
        Node::span(text)
    }

    fn possibly_add_explanation<'a>(
        &self,
        item: &Item,
        content: &'a mut Node,
        force_show: bool,
    ) -> Option<&'a mut Node> {
        let explanation = item.explanation.as_deref();
        if !force_show && !(self.show_explanations && explanation.is_some()) {
            return None;
        }

        let mut region = Node::element("div").with_class(classes::EXPLANATION);
        if let Some(text) = explanation {
            region.push(self.make_span(text));
        }
        Some(content.push(region))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_item() -> Item {
        Item::from_value(json!({
            "@type": "Recipe",
            "name": "Tomato soup",
            "url": "https://example.com/soup",
            "site": "example.com",
            "description": "A quick soup",
            "explanation": "Matches your query for soup"
        }))
        .unwrap()
    }

    #[test]
    fn test_default_item_structure() {
        let node = HtmlPresenter::default().create_default_item(&sample_item());

        assert!(node.has_class(classes::CONTAINER));
        assert_eq!(node.attrs.get("data-type").map(String::as_str), Some("Recipe"));

        let link = node.find_by_class(classes::TITLE_LINK).unwrap();
        assert_eq!(link.text.as_deref(), Some("Tomato soup"));
        assert_eq!(
            link.attrs.get("href").map(String::as_str),
            Some("https://example.com/soup")
        );

        let content = node.find_by_class(classes::CONTENT).unwrap();
        assert!(content.children[0].has_class(classes::TITLE_ROW));
        assert!(node.find_by_class(classes::SITE).is_some());
        assert!(node.find_by_class(classes::DESCRIPTION).is_some());
        assert!(node.find_by_class(classes::EXPLANATION).is_none());
    }

    #[test]
    fn test_title_falls_back_to_url_then_placeholder() {
        let presenter = HtmlPresenter::default();

        let by_url = presenter.create_default_item(&Item::new("Thing").with_url("https://a.test"));
        assert_eq!(
            by_url.find_by_class(classes::TITLE_LINK).unwrap().text_content(),
            "https://a.test"
        );

        let bare = presenter.create_default_item(&Item::new("Thing"));
        let link = bare.find_by_class(classes::TITLE_LINK).unwrap();
        assert_eq!(link.text_content(), "Untitled");
        assert!(link.attrs.get("href").is_none());
    }

    #[test]
    fn test_explanation_hidden_by_default() {
        let presenter = HtmlPresenter::default();
        let mut content = Node::element("div");
        assert!(presenter.possibly_add_explanation(&sample_item(), &mut content, false).is_none());
        assert!(content.children.is_empty());
    }

    #[test]
    fn test_forced_explanation_created_without_text() {
        let presenter = HtmlPresenter::default();
        let mut content = Node::element("div");
        let region = presenter
            .possibly_add_explanation(&Item::new("PodcastEpisode"), &mut content, true)
            .unwrap();
        assert!(region.has_class(classes::EXPLANATION));
        assert!(region.children.is_empty());
        assert_eq!(content.children.len(), 1);
    }

    #[test]
    fn test_configured_explanations_need_content() {
        let presenter = HtmlPresenter::new(true);

        let mut content = Node::element("div");
        let region = presenter
            .possibly_add_explanation(&sample_item(), &mut content, false)
            .unwrap();
        assert_eq!(region.text_content(), "Matches your query for soup");

        let mut empty = Node::element("div");
        assert!(
            presenter
                .possibly_add_explanation(&Item::new("Recipe"), &mut empty, false)
                .is_none()
        );
    }
}
