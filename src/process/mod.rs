// src/process/mod.rs
pub mod cells;
pub mod filter;

pub use cells::{clean_cells, extract_records, normalize_row, split_row, Record};
pub use filter::filter_tables_by_keyword;
