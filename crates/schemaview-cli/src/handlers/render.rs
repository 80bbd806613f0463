use super::emphasize;
use crate::input::load_items;
use crate::types::RenderFormat;
use anyhow::Result;
use schemaview_render::{Dispatcher, HtmlPresenter, RenderConfig};

pub fn handle(input: &str, format: RenderFormat, config: &RenderConfig) -> Result<()> {
    let loaded = load_items(input)?;
    if loaded.skipped > 0 {
        tracing::warn!(skipped = loaded.skipped, "some records could not be rendered");
    }

    let dispatcher = Dispatcher::with_builtin_renderers(HtmlPresenter::from_config(config), config);
    let nodes = dispatcher.render_all(&loaded.items);

    match format {
        RenderFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&nodes)?);
        }
        RenderFormat::Html => {
            for node in &nodes {
                println!("{}", node.to_html());
            }
        }
        RenderFormat::Text => {
            for (index, node) in nodes.iter().enumerate() {
                if index > 0 {
                    println!();
                }
                let text = node.to_text();
                let mut lines = text.lines();
                if let Some(title) = lines.next() {
                    println!("{}", emphasize(title));
                }
                for line in lines {
                    println!("{}", line);
                }
            }
        }
    }

    Ok(())
}
