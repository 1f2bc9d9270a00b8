// src/extract/blocks.rs
use std::ops::Range;

use tracing::trace;

/// A contiguous run of non-separator lines in the source document.
#[derive(Debug, Clone)]
pub struct Block {
    /// Half-open span of original line numbers, 1-based.
    pub line_span: Range<usize>,
    /// The raw lines of the block, separators never included.
    pub lines: Vec<String>,
}

/// A line is a separator iff, after trimming, it is empty or consists solely of
/// delimiter characters and whitespace.
pub fn is_separator_line(line: &str, delimiter: u8) -> bool {
    line.chars()
        .all(|c| c == delimiter as char || c.is_whitespace())
}

/// Single left-to-right pass: consecutive non-separator lines form one block,
/// flushed when a separator is hit. A document ending mid-block still closes the
/// final block at the last line; a document of only separators yields zero
/// blocks.
pub fn split_into_blocks(text: &str, delimiter: u8) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current: Option<Block> = None;

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        if is_separator_line(line, delimiter) {
            if let Some(block) = current.take() {
                trace!(span = ?block.line_span, "closing block at separator");
                blocks.push(block);
            }
            continue;
        }

        match current.as_mut() {
            Some(block) => {
                block.line_span.end = line_no + 1;
                block.lines.push(line.to_string());
            }
            None => {
                current = Some(Block {
                    line_span: line_no..line_no + 1,
                    lines: vec![line.to_string()],
                });
            }
        }
    }

    if let Some(block) = current {
        trace!(span = ?block.line_span, "closing final block at EOF");
        blocks.push(block);
    }

    blocks
}
