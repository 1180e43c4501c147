// src/lib.rs
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod pipeline;
pub mod process;
pub mod write;

#[cfg(test)]
pub(crate) mod test_util;
