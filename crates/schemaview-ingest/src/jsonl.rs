use anyhow::{Context, Result};
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Records decoded from a JSONL source plus the count of lines that failed to decode
#[derive(Debug, Default)]
pub struct JsonlRecords {
    pub records: Vec<Value>,
    pub skipped: usize,
}

/// Decode JSONL content, skipping blank lines and warning on malformed ones
pub fn parse_jsonl(content: &str, source: &str) -> JsonlRecords {
    let mut parsed = JsonlRecords::default();

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<Value>(line) {
            Ok(record) => parsed.records.push(record),
            Err(err) => {
                tracing::warn!(
                    source,
                    line = index + 1,
                    error = %err,
                    "skipping invalid JSON line"
                );
                parsed.skipped += 1;
            }
        }
    }

    parsed
}

pub fn read_jsonl(path: &Path) -> Result<JsonlRecords> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(parse_jsonl(&content, &path.display().to_string()))
}

/// Write one compact JSON document per line; returns the file size in bytes
pub fn write_jsonl(path: &Path, records: &[Value]) -> Result<u64> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    Ok(std::fs::metadata(path)?.len())
}
