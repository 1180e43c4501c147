// src/write/delimited.rs

use std::path::Path;

use csv::WriterBuilder;
use tracing::{debug, info, instrument};

use crate::config::Delimiter;
use crate::error::WriteError;
use crate::extract::Table;
use crate::process::extract_records;

/// Label appended to the header record.
pub const EXTRA_HEADER_COLUMN: &str = "Additional Notes";

/// Normalize every row of `tables` and write them as one delimited file.
///
/// The first record is the header and gets [`EXTRA_HEADER_COLUMN`] appended.
/// Records keep their own widths. Returns the number of data records
/// written, header excluded.
#[instrument(level = "info", skip(tables, path), fields(path = %path.as_ref().display()))]
pub fn write_tables<P: AsRef<Path>>(
    tables: &[Table],
    path: P,
    delimiter: Delimiter,
) -> Result<usize, WriteError> {
    let path = path.as_ref();

    // 1) Normalize; nothing to write means nothing to create
    let mut records = extract_records(tables, delimiter);
    let Some(header) = records.first_mut() else {
        return Err(WriteError::NoRecords);
    };
    header.push(EXTRA_HEADER_COLUMN.to_owned());
    debug!(header = ?header, "header record");

    // 2) Create the file
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter.as_byte())
        .flexible(true)
        .from_path(path)
        .map_err(|source| WriteError::Create {
            path: path.to_path_buf(),
            source,
        })?;

    // 3) Header then data records
    for (index, record) in records.iter().enumerate() {
        writer
            .write_record(record)
            .map_err(|source| WriteError::Record {
                path: path.to_path_buf(),
                index,
                source,
            })?;
    }
    writer.flush().map_err(|source| WriteError::Flush {
        path: path.to_path_buf(),
        source,
    })?;

    let data_records = records.len() - 1;
    info!(records = data_records, "wrote delimited file");
    Ok(data_records)
}
