//! Locate and extract the independent sub-tables embedded in a single
//! delimited file: stacked across blank-line separators, side-by-side across
//! blank-column gaps.

pub mod extract;
pub mod select;
pub mod table;
