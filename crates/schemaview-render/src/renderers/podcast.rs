use crate::{Presenter, TypeRenderer, classes};
use schemaview_types::{Item, Node};

/// Podcast episodes always show their explanation region
#[derive(Debug, Clone, Default)]
pub struct PodcastEpisodeRenderer;

impl TypeRenderer for PodcastEpisodeRenderer {
    fn render(&self, presenter: &dyn Presenter, item: &Item) -> Node {
        let mut element = presenter.create_default_item(item);

        if let Some(content) = element.find_by_class_mut(classes::CONTENT) {
            presenter.possibly_add_explanation(item, content, true);
        }

        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HtmlPresenter;

    #[test]
    fn test_explanation_forced_even_without_text() {
        let presenter = HtmlPresenter::default();
        let item = Item::new("PodcastEpisode").with_name("Ep 1");
        let node = PodcastEpisodeRenderer.render(&presenter, &item);

        let region = node.find_by_class(classes::EXPLANATION).unwrap();
        assert!(region.children.is_empty());
        assert_eq!(node.find_by_class(classes::TITLE_LINK).unwrap().text_content(), "Ep 1");
    }

    #[test]
    fn test_explanation_text_included() {
        let presenter = HtmlPresenter::default();
        let item = Item::new("PodcastEpisode").with_explanation("Covers Rust async");
        let node = PodcastEpisodeRenderer.render(&presenter, &item);

        assert_eq!(
            node.find_by_class(classes::EXPLANATION).unwrap().text_content(),
            "Covers Rust async"
        );
    }
}
