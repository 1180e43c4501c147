// src/extract/sink.rs

use std::mem;

use html5ever::tokenizer::{
    states::RawKind, Tag, TagKind, Token, TokenSink, TokenSinkResult,
};
use tracing::{debug, trace};

use super::Table;
use crate::config::Delimiter;

/// Where the scan currently is. Rows and text collected so far travel with
/// the state so a transition can never leave them behind.
#[derive(Debug)]
enum State {
    Outside,
    InTable { rows: Vec<String> },
    InRow { rows: Vec<String>, texts: Vec<String> },
}

/// Push-based table scanner fed by the html5ever tokenizer.
///
/// Character tokens are buffered until the next non-character token so that
/// one text token is one maximal run of text between markup, however the
/// tokenizer chunks it.
pub(super) struct TableSink {
    delimiter: String,
    state: State,
    text: String,
    tables: Vec<Table>,
    diagnostics: usize,
}

impl TableSink {
    pub(super) fn new(delimiter: Delimiter) -> Self {
        Self {
            delimiter: delimiter.to_string(),
            state: State::Outside,
            text: String::new(),
            tables: Vec::new(),
            diagnostics: 0,
        }
    }

    /// Hand over the collected tables and the number of recoverable
    /// tokenizer diagnostics seen.
    pub(super) fn take_results(&mut self) -> (Vec<Table>, usize) {
        (mem::take(&mut self.tables), self.diagnostics)
    }

    fn flush_text(&mut self) {
        if self.text.is_empty() {
            return;
        }
        let text = mem::take(&mut self.text);
        if let State::InRow { texts, .. } = &mut self.state {
            // whitespace-only runs stay as empty placeholders
            texts.push(text.trim().to_owned());
        }
    }

    fn on_tag(&mut self, tag: &Tag) {
        if tag.kind == TagKind::StartTag && tag.self_closing {
            return;
        }
        let name: &str = &tag.name;

        self.state = match (mem::replace(&mut self.state, State::Outside), tag.kind) {
            (State::Outside, TagKind::StartTag) if name == "table" => {
                trace!("table start");
                State::InTable { rows: Vec::new() }
            }
            (State::InTable { rows }, TagKind::StartTag) if name == "tr" => State::InRow {
                rows,
                texts: Vec::new(),
            },
            (State::InTable { rows }, TagKind::EndTag) if name == "table" => {
                trace!(rows = rows.len(), "table end");
                self.tables.push(Table::new(rows));
                State::Outside
            }
            (State::InRow { mut rows, texts }, TagKind::EndTag) if name == "tr" => {
                rows.push(texts.join(&self.delimiter));
                State::InTable { rows }
            }
            (state, _) => state,
        };
    }

    /// End of stream: commit whatever row and table are still open.
    fn finish(&mut self) {
        match mem::replace(&mut self.state, State::Outside) {
            State::Outside => {}
            State::InTable { rows } => {
                debug!(rows = rows.len(), "end of stream inside table");
                self.tables.push(Table::new(rows));
            }
            State::InRow { mut rows, texts } => {
                debug!(rows = rows.len() + 1, "end of stream inside row");
                rows.push(texts.join(&self.delimiter));
                self.tables.push(Table::new(rows));
            }
        }
    }
}

/// Elements whose content must not be tokenized as markup. `plaintext`
/// never ends: everything after it is text.
fn raw_switch(tag: &Tag) -> Option<TokenSinkResult<()>> {
    if tag.kind != TagKind::StartTag || tag.self_closing {
        return None;
    }
    let kind = match &*tag.name {
        "plaintext" => return Some(TokenSinkResult::Plaintext),
        "script" => RawKind::ScriptData,
        "style" | "xmp" | "iframe" | "noembed" | "noframes" | "noscript" => RawKind::Rawtext,
        "textarea" | "title" => RawKind::Rcdata,
        _ => return None,
    };
    Some(TokenSinkResult::RawData(kind))
}

impl TokenSink for TableSink {
    type Handle = ();

    fn process_token(&mut self, token: Token, line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::CharacterTokens(chunk) => self.text.push_str(&chunk),
            Token::NullCharacterToken => self.text.push('\u{FFFD}'),
            Token::ParseError(msg) => {
                self.diagnostics += 1;
                trace!(line = line_number, %msg, "tokenizer diagnostic");
            }
            Token::TagToken(tag) => {
                self.flush_text();
                self.on_tag(&tag);
                if let Some(switch) = raw_switch(&tag) {
                    return switch;
                }
            }
            Token::CommentToken(_) | Token::DoctypeToken(_) => self.flush_text(),
            Token::EOFToken => {
                self.flush_text();
                self.finish();
            }
        }
        TokenSinkResult::Continue
    }
}
