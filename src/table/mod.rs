// src/table/mod.rs
pub mod export;
pub mod merge;

use serde::Serialize;

pub use merge::{merge_header_rows, HeaderRows};

/// A finalized sub-table: reconciled column labels, row labels taken from the
/// first data column, and a numeric-or-missing grid. Immutable after
/// construction.
#[derive(Debug, Clone, Serialize)]
pub struct Table {
    pub name: String,
    /// Ordered column labels. Multi-row headers are newline-joined; empty
    /// labels are possible when header cells were blank (the caller flags
    /// those) or when no header rows were requested.
    pub columns: Vec<String>,
    /// Ordered row identifiers, one per data row.
    pub row_labels: Vec<String>,
    /// `values[r][c]` is the cell for `row_labels[r]` / `columns[c]`; `None`
    /// marks missing or non-numeric source data.
    pub values: Vec<Vec<Option<f64>>>,
}

impl Table {
    /// Drop columns that are entirely missing, then rows that are entirely
    /// missing. Idempotent: pruning an already-pruned table is a no-op.
    pub fn prune(self) -> Table {
        // With no data rows there is nothing to judge emptiness by.
        if self.values.is_empty() {
            return self;
        }

        let keep_col: Vec<bool> = (0..self.columns.len())
            .map(|c| self.values.iter().any(|row| row[c].is_some()))
            .collect();

        let columns: Vec<String> = self
            .columns
            .into_iter()
            .zip(&keep_col)
            .filter_map(|(label, keep)| keep.then_some(label))
            .collect();

        let mut row_labels = Vec::with_capacity(self.row_labels.len());
        let mut values = Vec::with_capacity(self.values.len());
        for (label, row) in self.row_labels.into_iter().zip(self.values) {
            let kept: Vec<Option<f64>> = row
                .into_iter()
                .zip(&keep_col)
                .filter_map(|(cell, keep)| keep.then_some(cell))
                .collect();
            if kept.iter().any(Option::is_some) {
                row_labels.push(label);
                values.push(kept);
            }
        }

        Table {
            name: self.name,
            columns,
            row_labels,
            values,
        }
    }

    /// Replace empty column labels with positional `V1..Vn` names. Used when no
    /// header rows were available to label columns from.
    pub fn with_positional_labels(mut self) -> Table {
        for (i, label) in self.columns.iter_mut().enumerate() {
            if label.is_empty() {
                *label = format!("V{}", i + 1);
            }
        }
        self
    }
}
