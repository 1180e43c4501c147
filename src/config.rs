// src/config.rs

use std::{fmt, path::PathBuf, str::FromStr};

use clap::Parser;
use thiserror::Error;
use url::Url;

pub const DEFAULT_URL: &str =
    "https://help.nice-incontact.com/content/studio/actions/timezone/timezone.htm";
pub const DEFAULT_CSV: &str = "cxone_timezones.csv";
pub const DEFAULT_TXT: &str = "cxone_timezones_array.txt";
pub const DEFAULT_FILTER: &str = "DST";

/// Command-line options. Every option has a default and an env override.
#[derive(Parser, Debug, Clone)]
#[command(name = "tzscrape")]
#[command(about = "Scrape the CXone Studio timezone table into a delimited file and a VALID_TIMEZONES listing")]
#[command(version)]
pub struct Config {
    /// CXone Studio Timezone documentation webpage
    #[arg(long, env = "TZSCRAPE_URL", default_value = DEFAULT_URL, value_parser = Url::parse)]
    pub url: Url,

    /// Output delimited file of all CXone Studio timezones
    #[arg(long, env = "TZSCRAPE_CSV", default_value = DEFAULT_CSV)]
    pub csv: PathBuf,

    /// Output file delimiter: one ASCII character, `\t` or `tab`
    #[arg(long, env = "TZSCRAPE_DELIMITER", default_value = "\\t")]
    pub delimiter: Delimiter,

    /// Output text file array of all CXone Studio timezones
    #[arg(long, env = "TZSCRAPE_TXT", default_value = DEFAULT_TXT)]
    pub txt: PathBuf,

    /// Select appropriate webpage table by filtered keyword
    #[arg(long, env = "TZSCRAPE_FILTER", default_value = DEFAULT_FILTER)]
    pub filter: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("delimiter must not be empty")]
    EmptyDelimiter,
    #[error("delimiter must be a single ASCII character, got {0:?}")]
    BadDelimiter(String),
    #[error("{0:?} cannot be used as a delimiter")]
    ReservedDelimiter(char),
}

/// Single ASCII field separator.
///
/// Used three ways: joining the text tokens of a flattened row, separating
/// fields in the delimited file, and (doubled) marking a cell boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter(u8);

impl Delimiter {
    pub const TAB: Delimiter = Delimiter(b'\t');

    pub fn as_byte(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(self.0)
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Delimiter {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let c = match s {
            "" => return Err(ConfigError::EmptyDelimiter),
            "\\t" | "tab" => '\t',
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii() => c,
                    _ => return Err(ConfigError::BadDelimiter(s.to_string())),
                }
            }
        };
        // quote and line breaks would be ambiguous in the delimited file
        if matches!(c, '"' | '\r' | '\n') {
            return Err(ConfigError::ReservedDelimiter(c));
        }
        Ok(Delimiter(c as u8))
    }
}
