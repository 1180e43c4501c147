// src/error.rs

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Failure to retrieve the source page.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("failed to make GET request to {url}: {source}")]
    Request {
        url: String,
        source: reqwest::Error,
    },
    #[error("unexpected status code {status} from {url}")]
    Status { url: String, status: StatusCode },
    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        source: reqwest::Error,
    },
}

/// Low-level tokenizer failure. Clean end of stream is not an error.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("markup is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// Failure to produce the delimited output file.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("no records to write; no table matched the filter")]
    NoRecords,
    #[error("failed to create {}: {source}", path.display())]
    Create { path: PathBuf, source: csv::Error },
    #[error("failed to write record {index} to {}: {source}", path.display())]
    Record {
        path: PathBuf,
        index: usize,
        source: csv::Error,
    },
    #[error("failed to flush {}: {source}", path.display())]
    Flush {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Failure inside the best-effort listing stage. Logged, never propagated
/// out of the pipeline.
#[derive(Debug, Error)]
pub enum ReadbackError {
    #[error("error opening file {}: {source}", path.display())]
    Open { path: PathBuf, source: csv::Error },
    #[error("error reading delimited file {}: {source}", path.display())]
    Read { path: PathBuf, source: csv::Error },
    #[error("error creating file {}: {source}", path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("error writing file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
