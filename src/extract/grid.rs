// src/extract/grid.rs
use std::io::Cursor;

use csv::ReaderBuilder;
use tracing::warn;

use super::blocks::Block;

/// Parse a block's lines into a rectangular grid of cells. Ragged rows are
/// padded with empty cells up to the block's maximum width, so emptiness checks
/// downstream never index out of bounds and padding never reads as content.
pub fn parse_grid(block: &Block, delimiter: u8) -> Vec<Vec<String>> {
    let joined = block.lines.join("\n");
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(Cursor::new(joined));

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(block.lines.len());
    for (idx, result) in rdr.records().enumerate() {
        match result {
            Ok(record) => rows.push(record.iter().map(|s| s.to_string()).collect()),
            Err(err) => {
                // Content-level anomaly: skip the record rather than abort.
                warn!(
                    line = block.line_span.start + idx,
                    %err,
                    "unreadable record in block, skipping"
                );
                rows.push(Vec::new());
            }
        }
    }

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(width, String::new());
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(lines: &[&str]) -> Block {
        Block {
            line_span: 1..lines.len() + 1,
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn ragged_rows_are_padded_to_block_width() {
        let grid = parse_grid(&block(&["a,b,c", "d", "e,f"]), b',');
        assert_eq!(grid.len(), 3);
        assert!(grid.iter().all(|r| r.len() == 3));
        assert_eq!(grid[1], vec!["d", "", ""]);
        assert_eq!(grid[2], vec!["e", "f", ""]);
    }

    #[test]
    fn quoted_fields_keep_embedded_delimiters() {
        let grid = parse_grid(&block(&["\"a,b\",c"]), b',');
        assert_eq!(grid[0], vec!["a,b", "c"]);
    }

    #[test]
    fn empty_block_yields_empty_grid() {
        let grid = parse_grid(&block(&[]), b',');
        assert!(grid.is_empty());
    }
}
