// src/write/listing.rs

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use csv::{ReaderBuilder, StringRecord};
use tracing::{error, info, instrument};

use crate::config::Delimiter;
use crate::error::ReadbackError;

pub const ARRAY_NAME: &str = "VALID_TIMEZONES";

/// Best-effort wrapper around [`try_generate_listing`]: failures are logged
/// and swallowed so they never affect the run.
pub fn generate_listing<P: AsRef<Path>, Q: AsRef<Path>>(
    csv_path: P,
    delimiter: Delimiter,
    out_path: Q,
    source_url: &str,
) {
    let out_path = out_path.as_ref();
    match try_generate_listing(csv_path, delimiter, out_path, source_url) {
        Ok(lines) => info!(lines, path = %out_path.display(), "wrote listing"),
        Err(e) => error!(error = %e, "listing not generated"),
    }
}

/// Read the delimited file back and write one `VALID_TIMEZONES[i] = "..."`
/// line per data record, preceded by a `// <source_url>` comment.
///
/// `i` is the record's position in the file, so the first data record is 1.
/// The value is the record's first field, written verbatim.
#[instrument(level = "info", skip_all, fields(csv = %csv_path.as_ref().display()))]
pub fn try_generate_listing<P: AsRef<Path>, Q: AsRef<Path>>(
    csv_path: P,
    delimiter: Delimiter,
    out_path: Q,
    source_url: &str,
) -> Result<usize, ReadbackError> {
    let csv_path = csv_path.as_ref();
    let out_path = out_path.as_ref();

    // 1) Read every record up front; header is just record 0
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .has_headers(false)
        .flexible(true)
        .from_path(csv_path)
        .map_err(|source| ReadbackError::Open {
            path: csv_path.to_path_buf(),
            source,
        })?;
    let records: Vec<StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .map_err(|source| ReadbackError::Read {
            path: csv_path.to_path_buf(),
            source,
        })?;

    // 2) Only now create the output
    let file = File::create(out_path).map_err(|source| ReadbackError::Create {
        path: out_path.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(file);
    let write_err = |source| ReadbackError::Write {
        path: out_path.to_path_buf(),
        source,
    };

    // 3) Comment line, then one assignment per data record
    writeln!(out, "// {source_url}").map_err(write_err)?;
    let mut lines = 0;
    for (index, record) in records.iter().enumerate().skip(1) {
        let value = record.get(0).unwrap_or_default();
        writeln!(out, "{ARRAY_NAME}[{index}] = \"{value}\"").map_err(write_err)?;
        lines += 1;
    }
    out.flush().map_err(write_err)?;

    Ok(lines)
}
