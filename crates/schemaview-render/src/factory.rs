use crate::{
    PodcastEpisodeRenderer, Presenter, RealEstateRenderer, RegistryBuilder, RenderConfig,
    StatuteRenderer, TypeRenderer,
};
use schemaview_types::Item;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RendererKind {
    RealEstate,
    PodcastEpisode,
    Statute,
}

impl fmt::Display for RendererKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RendererKind::RealEstate => "real_estate",
            RendererKind::PodcastEpisode => "podcast_episode",
            RendererKind::Statute => "statute",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RendererMetadata {
    pub kind: RendererKind,
    pub name: &'static str,
    pub supported_types: &'static [&'static str],
}

/// Built-in renderers in registration order
///
/// Later entries win when two renderers declare the same type name.
const RENDERERS: &[RendererMetadata] = &[
    RendererMetadata {
        kind: RendererKind::RealEstate,
        name: "RealEstateRenderer",
        supported_types: &[
            "SingleFamilyResidence",
            "Apartment",
            "Townhouse",
            "House",
            "Condominium",
            "RealEstateListing",
        ],
    },
    RendererMetadata {
        kind: RendererKind::PodcastEpisode,
        name: "PodcastEpisodeRenderer",
        supported_types: &["PodcastEpisode"],
    },
    RendererMetadata {
        kind: RendererKind::Statute,
        name: "StatuteRenderer",
        supported_types: &["Statute"],
    },
];

pub fn get_all_renderers() -> &'static [RendererMetadata] {
    RENDERERS
}

/// The built-in renderer that ends up handling `type_name` after [`register_all`]
pub fn get_renderer_for_type(type_name: &str) -> Option<&'static RendererMetadata> {
    RENDERERS
        .iter()
        .rev()
        .find(|r| r.supported_types.iter().any(|t| *t == type_name))
}

/// Create a built-in renderer by kind
pub fn create_renderer(kind: RendererKind, config: &RenderConfig) -> Arc<dyn TypeRenderer> {
    match kind {
        RendererKind::RealEstate => Arc::new(RealEstateRenderer::from_config(config)),
        RendererKind::PodcastEpisode => Arc::new(PodcastEpisodeRenderer),
        RendererKind::Statute => Arc::new(StatuteRenderer::from_config(config)),
    }
}

/// Register every built-in renderer for each of its supported types
pub fn register_all(builder: &mut RegistryBuilder, config: &RenderConfig) {
    for metadata in RENDERERS {
        let renderer = create_renderer(metadata.kind, config);
        register_renderer(builder, metadata.supported_types, renderer);
    }
}

/// Register one renderer instance under each of `type_names`
pub fn register_renderer(
    builder: &mut RegistryBuilder,
    type_names: &[&str],
    renderer: Arc<dyn TypeRenderer>,
) {
    for type_name in type_names {
        let renderer = Arc::clone(&renderer);
        builder.register_fn(*type_name, move |presenter: &dyn Presenter, item: &Item| {
            renderer.render(presenter, item)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HtmlPresenter, classes};
    use schemaview_types::Node;

    #[test]
    fn test_register_all_covers_every_declared_type() {
        let mut builder = RegistryBuilder::new();
        register_all(&mut builder, &RenderConfig::default());
        let registry = builder.build();

        let declared: usize = get_all_renderers()
            .iter()
            .map(|r| r.supported_types.len())
            .sum();
        assert_eq!(registry.len(), declared);
        for metadata in get_all_renderers() {
            for type_name in metadata.supported_types {
                assert!(registry.contains(type_name), "{} not registered", type_name);
            }
        }
    }

    #[test]
    fn test_registration_order() {
        let kinds: Vec<RendererKind> = get_all_renderers().iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RendererKind::RealEstate,
                RendererKind::PodcastEpisode,
                RendererKind::Statute
            ]
        );
    }

    #[test]
    fn test_get_renderer_for_type() {
        assert_eq!(
            get_renderer_for_type("Condominium").map(|r| r.kind),
            Some(RendererKind::RealEstate)
        );
        assert_eq!(
            get_renderer_for_type("Statute").map(|r| r.name),
            Some("StatuteRenderer")
        );
        assert!(get_renderer_for_type("Recipe").is_none());
    }

    #[test]
    fn test_later_registration_overrides_builtin() {
        struct Shout;
        impl TypeRenderer for Shout {
            fn render(&self, _presenter: &dyn Presenter, _item: &Item) -> Node {
                Node::span("custom")
            }
        }

        let mut builder = RegistryBuilder::new();
        register_all(&mut builder, &RenderConfig::default());
        register_renderer(&mut builder, &["Statute"], Arc::new(Shout));
        let registry = builder.build();

        let presenter: &dyn Presenter = &HtmlPresenter::default();
        let node = registry.lookup("Statute").unwrap()(presenter, &Item::new("Statute"));
        assert_eq!(node.text_content(), "custom");

        let house = registry.lookup("House").unwrap()(presenter, &Item::new("House"));
        assert!(house.find_by_class(classes::TITLE_LINK).is_some());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(RendererKind::PodcastEpisode.to_string(), "podcast_episode");
    }
}
