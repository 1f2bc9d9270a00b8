// src/table/merge.rs
use tracing::warn;

use super::Table;
use crate::extract::SubTable;

/// Policy for how many leading rows of a sub-table are header.
///
/// `Infer` reproduces the sparse-banner heuristic of the workflows this tool
/// feeds: when row 1 has markedly fewer non-blank cells than row 2 (a group
/// banner above the real header), both rows are header. The threshold is the
/// caller's to set, never hard-coded here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeaderRows {
    Fixed(usize),
    Infer { sparse_ratio: f64 },
}

impl HeaderRows {
    /// Resolve the policy to a concrete header-row count for one sub-table.
    pub fn resolve(self, sub: &SubTable) -> usize {
        match self {
            HeaderRows::Fixed(n) => n,
            HeaderRows::Infer { sparse_ratio } => {
                if sub.height() < 2 {
                    return sub.height().min(1);
                }
                let first = non_blank_count(&sub.cells[0]);
                let second = non_blank_count(&sub.cells[1]);
                if (first as f64) <= sparse_ratio * second as f64 {
                    2
                } else {
                    1
                }
            }
        }
    }
}

fn non_blank_count(row: &[String]) -> usize {
    row.iter().filter(|c| !c.trim().is_empty()).count()
}

/// Best-effort numeric coercion: malformed numeric text becomes missing, never
/// an error.
fn coerce_numeric(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Reconcile the first `header_row_count` rows of `sub` into single column
/// labels, take the first data column as row labels, coerce the remaining data
/// region to numeric-or-missing, then prune all-missing columns and rows.
///
/// Per column, the label is the newline-join of its non-blank header cells in
/// row order; a column whose header cells are all blank yields an empty label,
/// which is logged but left for the caller to reject or relabel. With
/// `header_row_count == 0` every row is data and all labels come back empty.
pub fn merge_header_rows(sub: &SubTable, header_row_count: usize) -> Table {
    let width = sub.width();
    if width == 0 {
        return Table {
            name: sub.name.clone(),
            columns: Vec::new(),
            row_labels: Vec::new(),
            values: Vec::new(),
        };
    }

    let header_rows = header_row_count.min(sub.height());
    let (header, data) = sub.cells.split_at(header_rows);

    // Column 0 of the data region carries row labels; its header cells are
    // discarded (the export writes a blank in that slot).
    let columns: Vec<String> = (1..width)
        .map(|c| {
            header
                .iter()
                .map(|row| row[c].trim())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect();

    if header_rows > 0 {
        let blank = columns.iter().filter(|l| l.is_empty()).count();
        if blank > 0 {
            warn!(
                table = %sub.name,
                blank_labels = blank,
                "columns with no header label after merge"
            );
        }
    }

    let mut row_labels = Vec::with_capacity(data.len());
    let mut values = Vec::with_capacity(data.len());
    for row in data {
        row_labels.push(row[0].trim().to_string());
        values.push(row[1..].iter().map(|cell| coerce_numeric(cell)).collect());
    }

    Table {
        name: sub.name.clone(),
        columns,
        row_labels,
        values,
    }
    .prune()
}
