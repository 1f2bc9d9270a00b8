// src/select.rs
use thiserror::Error;

use crate::extract::SubTable;

/// Errors from picking one table out of a detected set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The supplied 1-based index does not address a detected table.
    #[error("table {index} is out of range: {available} table(s) detected")]
    OutOfRange { index: usize, available: usize },
}

/// Pick a detected sub-table by its 1-based position, as shown in listings.
/// Pure: the caller owns any prompting or retry behavior.
pub fn select_table(tables: &[SubTable], index: usize) -> Result<&SubTable, SelectionError> {
    if index == 0 || index > tables.len() {
        return Err(SelectionError::OutOfRange {
            index,
            available: tables.len(),
        });
    }
    Ok(&tables[index - 1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_subtables;

    #[test]
    fn valid_index_returns_table_in_document_order() {
        let tables = extract_subtables("A,1\na,2\n\nB,1\nb,2\n", b',');
        assert_eq!(select_table(&tables, 1).unwrap().name, "A");
        assert_eq!(select_table(&tables, 2).unwrap().name, "B");
    }

    #[test]
    fn zero_and_past_end_are_out_of_range() {
        let tables = extract_subtables("A,1\na,2\n", b',');
        assert_eq!(
            select_table(&tables, 0).unwrap_err(),
            SelectionError::OutOfRange {
                index: 0,
                available: 1
            }
        );
        assert_eq!(
            select_table(&tables, 2).unwrap_err(),
            SelectionError::OutOfRange {
                index: 2,
                available: 1
            }
        );
    }
}
