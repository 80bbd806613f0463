use crate::jsonl::{read_jsonl, write_jsonl};
use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const JUSTIA_BASE_URL: &str = "https://law.justia.com";

/// Directories under the input root that never hold state data
const IGNORED_DIRS: &[&str] = &["plots"];

/// Tag a raw statute record as a schema.org `Statute` and absolutize its URL
///
/// Relative URLs are rooted at [`JUSTIA_BASE_URL`]; absolute ones are left alone.
/// Returns `None` for anything that is not a JSON object.
pub fn process_statute(statute: Value) -> Option<Value> {
    let Value::Object(mut record) = statute else {
        return None;
    };
    record.insert("@type".to_string(), Value::String("Statute".to_string()));

    if let Some(Value::String(url)) = record.get_mut("url")
        && !url.is_empty()
        && !url.starts_with("http")
    {
        *url = format!("{}{}", JUSTIA_BASE_URL, url);
    }
    Some(Value::Object(record))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportMode {
    /// One `statutes_<year>.jsonl` with every state
    Combined,
    /// One `<state>_<year>.jsonl` per state plus a `manifest_<year>.txt`
    ByState,
}

#[derive(Debug, Clone)]
pub struct ImportOptions {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub year: String,
    pub mode: ImportMode,
    pub limit_states: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StateSummary {
    pub name: String,
    pub statutes: usize,
    pub skipped_lines: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    pub year: String,
    pub mode: ImportMode,
    /// State directories considered (after `limit_states`)
    pub states_total: usize,
    pub with_data: Vec<StateSummary>,
    pub without_data: Vec<String>,
    pub unreadable: Vec<String>,
    pub output: Option<PathBuf>,
    pub output_bytes: Option<u64>,
    pub manifest: Option<PathBuf>,
}

impl ImportReport {
    fn new(options: &ImportOptions, states_total: usize) -> Self {
        Self {
            year: options.year.clone(),
            mode: options.mode,
            states_total,
            with_data: Vec::new(),
            without_data: Vec::new(),
            unreadable: Vec::new(),
            output: None,
            output_bytes: None,
            manifest: None,
        }
    }

    pub fn total_statutes(&self) -> usize {
        self.with_data.iter().map(|s| s.statutes).sum()
    }

    pub fn skipped_lines(&self) -> usize {
        self.with_data.iter().map(|s| s.skipped_lines).sum()
    }

    /// Bytes written across the combined file or every per-state file
    pub fn total_bytes(&self) -> u64 {
        match self.output_bytes {
            Some(bytes) => bytes,
            None => self.with_data.iter().filter_map(|s| s.bytes).sum(),
        }
    }

    /// States with data, largest output first (ties keep name order)
    pub fn states_by_size(&self) -> Vec<&StateSummary> {
        let mut states: Vec<&StateSummary> = self.with_data.iter().collect();
        states.sort_by(|a, b| b.bytes.cmp(&a.bytes));
        states
    }
}

/// Copy every state's `<year>.jsonl` into loadable statute JSONL
///
/// Input layout is `<input_dir>/<state>/<year>.jsonl`. States are processed in
/// name order; a state missing the year file, or whose file holds no valid
/// records, is reported under `without_data`.
pub fn import_statutes(options: &ImportOptions) -> Result<ImportReport> {
    validate_year(&options.year)?;

    let mut state_dirs = discover_state_dirs(&options.input_dir)?;
    tracing::info!(
        states = state_dirs.len(),
        year = %options.year,
        "found state directories"
    );
    // Zero means no limit
    if let Some(limit) = options.limit_states.filter(|&limit| limit > 0) {
        state_dirs.truncate(limit);
    }

    let mut report = ImportReport::new(options, state_dirs.len());
    let mut combined = Vec::new();

    for state_dir in &state_dirs {
        let state = state_name(state_dir);
        let data_file = state_dir.join(format!("{}.jsonl", options.year));

        if !data_file.is_file() {
            tracing::info!(state = %state, "no data for year");
            report.without_data.push(state);
            continue;
        }

        let parsed = match read_jsonl(&data_file) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::warn!(state = %state, error = %err, "failed to read state file");
                report.unreadable.push(state);
                continue;
            }
        };

        let mut skipped_lines = parsed.skipped;
        let mut statutes = Vec::with_capacity(parsed.records.len());
        for record in parsed.records {
            match process_statute(record) {
                Some(statute) => statutes.push(statute),
                None => {
                    tracing::warn!(state = %state, "skipping statute that is not a JSON object");
                    skipped_lines += 1;
                }
            }
        }
        if statutes.is_empty() {
            tracing::info!(state = %state, "no valid statutes");
            report.without_data.push(state);
            continue;
        }

        let mut summary = StateSummary {
            name: state.clone(),
            statutes: statutes.len(),
            skipped_lines,
            output: None,
            bytes: None,
        };

        match options.mode {
            ImportMode::ByState => {
                let output = options
                    .output_dir
                    .join(format!("{}_{}.jsonl", state, options.year));
                summary.bytes = Some(write_jsonl(&output, &statutes)?);
                summary.output = Some(output);
            }
            ImportMode::Combined => combined.extend(statutes),
        }

        tracing::debug!(state = %state, statutes = summary.statutes, "processed state");
        report.with_data.push(summary);
    }

    match options.mode {
        ImportMode::Combined => {
            if !combined.is_empty() {
                let output = options
                    .output_dir
                    .join(format!("statutes_{}.jsonl", options.year));
                report.output_bytes = Some(write_jsonl(&output, &combined)?);
                report.output = Some(output);
            }
        }
        ImportMode::ByState => {
            report.manifest = Some(write_manifest(options, &report.with_data)?);
        }
    }

    Ok(report)
}

fn validate_year(year: &str) -> Result<()> {
    if year.is_empty() || year.contains(['/', '\\']) || year.contains("..") {
        bail!("Invalid year: '{}'", year);
    }
    Ok(())
}

fn discover_state_dirs(input_dir: &Path) -> Result<Vec<PathBuf>> {
    if !input_dir.is_dir() {
        bail!("Input directory does not exist: {}", input_dir.display());
    }

    let mut dirs = Vec::new();
    for entry in WalkDir::new(input_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("Failed to scan {}", input_dir.display()))?;
        if !entry.file_type().is_dir() {
            continue;
        }
        if IGNORED_DIRS.iter().any(|ignored| entry.file_name() == *ignored) {
            continue;
        }
        dirs.push(entry.into_path());
    }
    Ok(dirs)
}

fn state_name(state_dir: &Path) -> String {
    state_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn write_manifest(options: &ImportOptions, with_data: &[StateSummary]) -> Result<PathBuf> {
    std::fs::create_dir_all(&options.output_dir)?;

    let mut states: Vec<&str> = with_data.iter().map(|s| s.name.as_str()).collect();
    states.sort_unstable();

    let manifest = options
        .output_dir
        .join(format!("manifest_{}.txt", options.year));
    let content: String = states.iter().map(|s| format!("{}\n", s)).collect();
    std::fs::write(&manifest, content)
        .with_context(|| format!("Failed to write {}", manifest.display()))?;
    Ok(manifest)
}
