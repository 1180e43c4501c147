// src/extract/mod.rs

mod sink;

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::{BufferQueue, Tokenizer, TokenizerOpts, TokenizerResult};
use tracing::{debug, info, instrument, trace};

use crate::config::Delimiter;
use crate::error::ParseError;
use sink::TableSink;

/// One `<table>`: each row is the trimmed text tokens of one `<tr>`, joined
/// by the delimiter ("flattened row").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<String>,
}

impl Table {
    pub fn new(rows: Vec<String>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True if any flattened row contains `keyword` (case-sensitive).
    pub fn contains(&self, keyword: &str) -> bool {
        self.rows.iter().any(|row| row.contains(keyword))
    }
}

/// Tokenize `body` and collect every table in document order.
///
/// Nested tables and rowspan/colspan are not handled. Reaching the end of
/// the input inside a row or table commits what was collected so far.
#[instrument(level = "info", skip(body), fields(bytes = body.len()))]
pub fn extract_tables(delimiter: Delimiter, body: &[u8]) -> Result<Vec<Table>, ParseError> {
    let markup = std::str::from_utf8(body)?;

    let mut input = BufferQueue::new();
    input.push_back(StrTendril::from_slice(markup));

    let mut tokenizer = Tokenizer::new(TableSink::new(delimiter), TokenizerOpts::default());
    // the sink never hands back a script, but keep feeding until the queue is drained
    while let TokenizerResult::Script(()) = tokenizer.feed(&mut input) {
        trace!("tokenizer paused on script; resuming");
    }
    tokenizer.end();

    let (tables, diagnostics) = tokenizer.sink.take_results();
    if diagnostics > 0 {
        debug!(diagnostics, "tokenizer reported recoverable markup errors");
    }
    info!(tables = tables.len(), "extracted tables");
    Ok(tables)
}
