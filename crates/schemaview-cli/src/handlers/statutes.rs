use super::emphasize;
use anyhow::Result;
use schemaview_ingest::{ImportMode, ImportOptions, import_statutes};

pub fn import(options: &ImportOptions) -> Result<()> {
    let report = import_statutes(options)?;

    println!(
        "{}",
        emphasize(&format!(
            "Imported {} statutes for {} from {} state(s)",
            report.total_statutes(),
            report.year,
            report.with_data.len()
        ))
    );

    if options.mode == ImportMode::ByState && !report.with_data.is_empty() {
        println!("File sizes by state:");
        for state in report.states_by_size() {
            if let (Some(output), Some(bytes)) = (&state.output, state.bytes) {
                println!(
                    "  {:<20} {:>10} bytes {:>6} statutes  {}",
                    state.name,
                    bytes,
                    state.statutes,
                    output.display()
                );
            }
        }
        println!("Total size: {} bytes", report.total_bytes());
    }

    if !report.without_data.is_empty() {
        println!(
            "States without {} data ({}): {}",
            report.year,
            report.without_data.len(),
            report.without_data.join(", ")
        );
    }
    if !report.unreadable.is_empty() {
        println!("Unreadable states: {}", report.unreadable.join(", "));
    }
    if report.skipped_lines() > 0 {
        println!("Skipped {} invalid line(s)", report.skipped_lines());
    }

    if let (Some(output), Some(bytes)) = (&report.output, report.output_bytes) {
        println!("Wrote {} ({} bytes)", output.display(), bytes);
    }
    if let Some(manifest) = &report.manifest {
        println!("Wrote manifest {}", manifest.display());
    }
    if report.with_data.is_empty() {
        println!("No statutes found for {}", report.year);
    }

    Ok(())
}
