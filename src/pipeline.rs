// src/pipeline.rs

use anyhow::{Context, Result};
use tracing::{info, instrument, warn};

use crate::{
    config::Config,
    extract::extract_tables,
    fetch::{build_client, download_html},
    process::filter_tables_by_keyword,
    write::{generate_listing, write_tables},
};

/// Run every stage in order. Download, extraction and the delimited write
/// are fatal; the listing stage only logs its failures.
#[instrument(level = "info", skip_all, fields(url = %config.url))]
pub fn run(config: &Config) -> Result<()> {
    // ─── 1) fetch ─────────────────────────────────────────────────────
    let client = build_client().context("building HTTP client")?;
    let body = download_html(&client, &config.url).context("Error downloading HTML")?;

    // ─── 2) extract + filter ──────────────────────────────────────────
    let tables = extract_tables(config.delimiter, &body).context("Error extracting tables")?;
    let found = tables.len();
    let tables = filter_tables_by_keyword(tables, &config.filter);
    if tables.is_empty() {
        warn!(keyword = %config.filter, found, "no table contains the keyword");
    } else {
        info!(keyword = %config.filter, found, kept = tables.len(), "selected tables");
    }

    // ─── 3) delimited file ────────────────────────────────────────────
    let records = write_tables(&tables, &config.csv, config.delimiter).with_context(|| {
        format!(
            "Error writing tables to delimited file {}",
            config.csv.display()
        )
    })?;
    info!(records, path = %config.csv.display(), "delimited file ready");

    // ─── 4) listing (best effort) ─────────────────────────────────────
    generate_listing(
        &config.csv,
        config.delimiter,
        &config.txt,
        config.url.as_str(),
    );

    Ok(())
}
