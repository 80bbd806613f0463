pub mod jsonl;
pub mod statutes;

pub use jsonl::{JsonlRecords, parse_jsonl, read_jsonl, write_jsonl};
pub use statutes::{
    ImportMode, ImportOptions, ImportReport, JUSTIA_BASE_URL, StateSummary, import_statutes,
    process_statute,
};
