use crate::{PriceFormat, Presenter, RenderConfig, TypeRenderer, classes};
use schemaview_types::{Item, Node, field_text};

pub const DETAILS_CLASS: &str = "item-real-estate-details";

/// Address, size and listing price for residential listings
#[derive(Debug, Clone, Default)]
pub struct RealEstateRenderer {
    price_format: PriceFormat,
}

impl RealEstateRenderer {
    pub fn new(price_format: PriceFormat) -> Self {
        Self { price_format }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(PriceFormat::from_config(config))
    }

    fn overlay_details(&self, presenter: &dyn Presenter, item: &Item, element: &mut Node) {
        let Some(content) = element.find_by_class_mut(classes::CONTENT) else {
            return;
        };
        let Some(details) = presenter.possibly_add_explanation(item, content, true) else {
            return;
        };
        details.set_class(DETAILS_CLASS);

        let Some(schema) = item.schema() else {
            return;
        };

        let address = schema.get("address");
        let street = address
            .and_then(|a| field_text(a, "streetAddress"))
            .unwrap_or_default();
        let locality = address
            .and_then(|a| field_text(a, "addressLocality"))
            .unwrap_or_default();
        details.push(presenter.make_span(&format!("{}, {}", street, locality)));
        details.push(Node::line_break());

        let bedrooms = field_text(schema, "numberOfRooms").unwrap_or_else(|| "0".to_string());
        let bathrooms =
            field_text(schema, "numberOfBathroomsTotal").unwrap_or_else(|| "0".to_string());
        let sqft = schema
            .get("floorSize")
            .and_then(|size| field_text(size, "value"))
            .unwrap_or_else(|| "0".to_string());
        details.push(presenter.make_span(&format!(
            "{} bedrooms, {} bathrooms, {} sqft",
            bedrooms, bathrooms, sqft
        )));
        details.push(Node::line_break());

        if let Some(price) = schema
            .get("price")
            .and_then(|p| self.price_format.format_price(p))
        {
            details.push(presenter.make_span(&format!("Listed at {}", price)));
        }
    }
}

impl TypeRenderer for RealEstateRenderer {
    fn render(&self, presenter: &dyn Presenter, item: &Item) -> Node {
        let mut element = presenter.create_default_item(item);
        self.overlay_details(presenter, item, &mut element);
        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HtmlPresenter;
    use serde_json::{Value, json};

    fn render_schema(schema: Value) -> Node {
        let item = Item::new("Apartment").with_name("Loft").with_schema(schema);
        RealEstateRenderer::default().render(&HtmlPresenter::default(), &item)
    }

    fn detail_lines(node: &Node) -> Vec<String> {
        node.find_by_class(DETAILS_CLASS)
            .map(|details| {
                details
                    .children
                    .iter()
                    .filter(|c| c.tag == "span")
                    .map(Node::text_content)
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn test_full_listing() {
        let node = render_schema(json!({
            "price": 450000,
            "address": {"streetAddress": "12 Oak St", "addressLocality": "Springfield"},
            "numberOfRooms": 3,
            "numberOfBathroomsTotal": 2,
            "floorSize": {"value": 1400, "unitCode": "FTK"}
        }));

        assert_eq!(
            detail_lines(&node),
            vec![
                "12 Oak St, Springfield",
                "3 bedrooms, 2 bathrooms, 1400 sqft",
                "Listed at 500,000"
            ]
        );
    }

    #[test]
    fn test_missing_fields_use_defaults_and_omit_price() {
        let node = render_schema(json!({}));
        assert_eq!(
            detail_lines(&node),
            vec![", ", "0 bedrooms, 0 bathrooms, 0 sqft"]
        );
    }

    #[test]
    fn test_offer_price_object() {
        let node = render_schema(json!({"price": {"value": 450000}}));
        assert_eq!(detail_lines(&node).last().unwrap(), "Listed at 500,000");

        let node = render_schema(json!({"price": {"price": 420000}}));
        assert_eq!(detail_lines(&node).last().unwrap(), "Listed at 400,000");
    }

    #[test]
    fn test_string_address_treated_as_missing_parts() {
        let node = render_schema(json!({"address": "12 Oak St, Springfield"}));
        assert_eq!(detail_lines(&node)[0], ", ");
    }

    #[test]
    fn test_absent_schema_keeps_empty_details() {
        let item = Item::new("House").with_name("Cottage");
        let node = RealEstateRenderer::default().render(&HtmlPresenter::default(), &item);

        let details = node.find_by_class(DETAILS_CLASS).unwrap();
        assert!(details.children.is_empty());
        assert_eq!(node.find_by_class(classes::TITLE_LINK).unwrap().text_content(), "Cottage");
    }

    #[test]
    fn test_line_breaks_between_lines() {
        let node = render_schema(json!({"price": 420000}));
        let details = node.find_by_class(DETAILS_CLASS).unwrap();
        let tags: Vec<&str> = details.children.iter().map(|c| c.tag.as_str()).collect();
        assert_eq!(tags, vec!["span", "br", "span", "br", "span"]);
    }
}
