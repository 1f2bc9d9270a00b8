// src/extract/columns.rs
use std::ops::Range;

use tracing::trace;

use super::blocks::Block;
use super::grid::parse_grid;

/// Display name given to a sub-table whose top-left cell is blank.
pub const UNNAMED_TABLE: &str = "Unnamed Table";

/// A rectangular sub-region of a block, isolated by blank-column detection.
/// Identity is the pair of spans; `name` is display metadata only and may
/// collide with other sub-tables in the same document.
#[derive(Debug, Clone)]
pub struct SubTable {
    pub name: String,
    /// Half-open span of original line numbers, 1-based, inherited from the
    /// enclosing block.
    pub line_span: Range<usize>,
    /// Half-open span of column indices within the block, 0-based.
    pub col_span: Range<usize>,
    /// Rectangular cell grid, header rows included. `cells[r].len()` equals
    /// `col_span.len()` for every row.
    pub cells: Vec<Vec<String>>,
}

impl SubTable {
    pub fn width(&self) -> usize {
        self.col_span.len()
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }
}

/// Group the block's columns into maximal runs of constant emptiness; each run
/// of non-empty columns yields one sub-table, runs of empty columns are gaps.
/// A column is empty iff every cell in it is blank after trimming.
pub fn split_block_into_subtables(block: &Block, delimiter: u8) -> Vec<SubTable> {
    let grid = parse_grid(block, delimiter);
    let width = grid.first().map_or(0, Vec::len);
    if width == 0 {
        return Vec::new();
    }

    let col_nonempty: Vec<bool> = (0..width)
        .map(|c| grid.iter().any(|row| !row[c].trim().is_empty()))
        .collect();

    let mut tables = Vec::new();
    let mut run_start: Option<usize> = None;
    for c in 0..=width {
        let nonempty = c < width && col_nonempty[c];
        match (run_start, nonempty) {
            (None, true) => run_start = Some(c),
            (Some(start), false) => {
                tables.push(carve(block, &grid, start..c));
                run_start = None;
            }
            _ => {}
        }
    }

    trace!(
        block = ?block.line_span,
        tables = tables.len(),
        "split block into sub-tables"
    );
    tables
}

fn carve(block: &Block, grid: &[Vec<String>], col_span: Range<usize>) -> SubTable {
    let cells: Vec<Vec<String>> = grid
        .iter()
        .map(|row| row[col_span.clone()].to_vec())
        .collect();

    let name = cells
        .first()
        .map(|row| row[0].trim())
        .filter(|s| !s.is_empty())
        .map_or_else(|| UNNAMED_TABLE.to_string(), str::to_string);

    SubTable {
        name,
        line_span: block.line_span.clone(),
        col_span,
        cells,
    }
}
