// src/extract/mod.rs
pub mod blocks;
pub mod columns;
mod grid;

use serde::Serialize;
use tracing::debug;

pub use blocks::{split_into_blocks, Block};
pub use columns::{split_block_into_subtables, SubTable, UNNAMED_TABLE};

/// One-line description of a detected sub-table, for listings and the JSON
/// output of `--list`.
#[derive(Debug, Clone, Serialize)]
pub struct TableSummary {
    /// 1-based position in document order, as presented to the user.
    pub index: usize,
    pub name: String,
    /// First and last original line numbers (1-based, inclusive).
    pub first_line: usize,
    pub last_line: usize,
    pub rows: usize,
    pub columns: usize,
}

/// Split `text` into every independent sub-table it contains: vertically across
/// separator lines, then horizontally across fully-blank column gaps. Sub-tables
/// come back in document order (top to bottom, then left to right within a
/// block). An empty or separator-only document yields an empty `Vec`.
#[tracing::instrument(level = "debug", skip(text))]
pub fn extract_subtables(text: &str, delimiter: u8) -> Vec<SubTable> {
    let blocks = split_into_blocks(text, delimiter);
    debug!(blocks = blocks.len(), "vertical split done");

    let mut tables = Vec::new();
    for block in &blocks {
        tables.extend(split_block_into_subtables(block, delimiter));
    }
    debug!(tables = tables.len(), "horizontal split done");
    tables
}

/// Build the user-facing listing for a set of detected sub-tables.
pub fn summarize(tables: &[SubTable]) -> Vec<TableSummary> {
    tables
        .iter()
        .enumerate()
        .map(|(i, t)| TableSummary {
            index: i + 1,
            name: t.name.clone(),
            first_line: t.line_span.start,
            last_line: t.line_span.end - 1,
            rows: t.height(),
            columns: t.width(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_stacked_and_side_by_side_tables() {
        // Two stacked blocks; the first holds a single table, the second holds
        // two tables separated by a blank column.
        let text = "Group1,,\n\
                    Model,Val1,Val2\n\
                    X,10,20\n\
                    Y,,30\n\
                    ,,\n\
                    Left,A,,Right,B\n\
                    r1,1,,r1,2\n";

        let tables = extract_subtables(text, b',');
        assert_eq!(tables.len(), 3);
        assert_eq!(tables[0].name, "Group1");
        assert_eq!(tables[1].name, "Left");
        assert_eq!(tables[2].name, "Right");

        // Block two starts after the separator on line 5.
        assert_eq!(tables[1].line_span, 6..8);
        assert_eq!(tables[1].col_span, 0..2);
        assert_eq!(tables[2].col_span, 3..5);
    }

    #[test]
    fn empty_document_yields_no_tables() {
        assert!(extract_subtables("", b',').is_empty());
        assert!(extract_subtables(",,,\n\n,,\n", b',').is_empty());
    }

    #[test]
    fn summaries_use_one_based_inclusive_lines() {
        let text = "\nName,V\na,1\n";
        let tables = extract_subtables(text, b',');
        let summary = summarize(&tables);
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].index, 1);
        assert_eq!(summary[0].first_line, 2);
        assert_eq!(summary[0].last_line, 3);
        assert_eq!(summary[0].rows, 2);
        assert_eq!(summary[0].columns, 2);
    }
}
