// src/write/mod.rs
pub mod delimited;
pub mod listing;

pub use delimited::{write_tables, EXTRA_HEADER_COLUMN};
pub use listing::{generate_listing, try_generate_listing, ARRAY_NAME};
