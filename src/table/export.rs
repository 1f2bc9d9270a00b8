// src/table/export.rs
use std::fs::{self, File};
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use tracing::info;

use super::Table;

/// Write `table` as a delimited file: reconciled header row first (with a blank
/// slot for the row-label column), then one row per retained data row. Missing
/// cells are written as `missing_marker`. Returns the number of bytes written.
pub fn write_table(
    table: &Table,
    path: &Path,
    delimiter: u8,
    missing_marker: &str,
) -> Result<u64> {
    let file = File::create(path)
        .with_context(|| format!("creating output file {}", path.display()))?;
    let mut writer = WriterBuilder::new().delimiter(delimiter).from_writer(file);

    let mut header = Vec::with_capacity(table.columns.len() + 1);
    header.push("");
    header.extend(table.columns.iter().map(String::as_str));
    writer.write_record(&header).context("writing header row")?;

    for (label, row) in table.row_labels.iter().zip(&table.values) {
        let mut record = Vec::with_capacity(row.len() + 1);
        record.push(label.clone());
        record.extend(row.iter().map(|cell| match cell {
            Some(v) => v.to_string(),
            None => missing_marker.to_string(),
        }));
        writer.write_record(&record).context("writing data row")?;
    }

    writer.flush().context("flushing output file")?;
    drop(writer);

    let bytes = fs::metadata(path).context("reading output metadata")?.len();
    info!(
        path = %path.display(),
        rows = table.row_labels.len(),
        columns = table.columns.len(),
        bytes,
        "wrote table"
    );
    Ok(bytes)
}
