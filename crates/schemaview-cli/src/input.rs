use anyhow::{Context, Result};
use schemaview_ingest::parse_jsonl;
use schemaview_types::Item;
use serde_json::Value;
use std::io::Read;

/// Items decoded from a render input plus how many records were dropped
#[derive(Debug, Default)]
pub struct LoadedItems {
    pub items: Vec<Item>,
    pub skipped: usize,
}

/// Read `path` (or stdin for `-`) and decode its items
pub fn load_items(path: &str) -> Result<LoadedItems> {
    let content = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?
    };

    Ok(parse_items(&content, path))
}

/// Decode a JSON array, a single JSON object, or JSONL
///
/// Whole-document JSON is tried first so pretty-printed files work; anything
/// else is read line by line.
pub fn parse_items(content: &str, source: &str) -> LoadedItems {
    let (records, mut skipped) = match serde_json::from_str::<Value>(content) {
        Ok(Value::Array(records)) => (records, 0),
        Ok(record @ Value::Object(_)) => (vec![record], 0),
        _ => {
            let parsed = parse_jsonl(content, source);
            (parsed.records, parsed.skipped)
        }
    };

    let mut items = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        match Item::from_value(record) {
            Ok(item) => items.push(item),
            Err(err) => {
                tracing::warn!(source, record = index + 1, error = %err, "skipping invalid item");
                skipped += 1;
            }
        }
    }

    LoadedItems { items, skipped }
}
