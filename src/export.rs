// src/export.rs
//! Reading job lists from disk and writing them back out as JSON or CSV

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::types::JobRecord;

/// Optional pass-through columns written after title and company
const CSV_EXTRA_COLUMNS: &[&str] = &["id", "url", "location", "description"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

/// A job file holds a JSON array of job records
pub fn read_jobs(path: &Path) -> Result<Vec<JobRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read job file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse job file: {}", path.display()))
}

pub fn write_jobs<W: Write>(writer: W, jobs: &[JobRecord], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(writer, jobs),
        OutputFormat::Csv => write_csv(writer, jobs),
    }
}

pub fn write_json<W: Write>(mut writer: W, jobs: &[JobRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, jobs).context("Failed to serialize jobs")?;
    writeln!(writer).context("Failed to write jobs")?;
    Ok(())
}

/// Columns: title, company, then each of `id`, `url`, `location`,
/// `description` that at least one record carries
pub fn write_csv<W: Write>(writer: W, jobs: &[JobRecord]) -> Result<()> {
    let extra: Vec<&str> = CSV_EXTRA_COLUMNS
        .iter()
        .copied()
        .filter(|col| jobs.iter().any(|job| job.field_text(col).is_some()))
        .collect();

    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["title", "company"];
    header.extend(extra.iter().copied());
    wtr.write_record(&header).context("Failed to write CSV header")?;

    for job in jobs {
        let mut row = vec![job.title().to_string(), job.company().to_string()];
        row.extend(extra.iter().map(|col| job.field_text(col).unwrap_or_default()));
        wtr.write_record(&row).context("Failed to write CSV row")?;
    }

    wtr.flush().context("Failed to flush CSV output")?;
    Ok(())
}
