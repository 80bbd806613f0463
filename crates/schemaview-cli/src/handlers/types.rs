use super::emphasize;
use crate::types::OutputFormat;
use anyhow::Result;
use schemaview_render::get_all_renderers;

pub fn handle(format: OutputFormat) -> Result<()> {
    let renderers = get_all_renderers();

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(renderers)?);
        return Ok(());
    }

    println!("{:<24} {:<16} TYPES", "RENDERER", "KIND");
    println!("{}", "-".repeat(80));

    for metadata in renderers {
        println!(
            "{} {:<16} {}",
            emphasize(&format!("{:<24}", metadata.name)),
            metadata.kind.to_string(),
            metadata.supported_types.join(", ")
        );
    }

    Ok(())
}
