// src/fetch/mod.rs

use reqwest::blocking::Client;
use tracing::{debug, instrument};
use url::Url;

use crate::error::DownloadError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Blocking client shared by the run. Transport defaults, no retries.
pub fn build_client() -> reqwest::Result<Client> {
    Client::builder().user_agent(USER_AGENT).gzip(true).build()
}

/// GET `url` and return the raw body bytes. Any non-2xx status is an error.
#[instrument(level = "info", skip_all, fields(url = %url))]
pub fn download_html(client: &Client, url: &Url) -> Result<Vec<u8>, DownloadError> {
    debug!("sending GET");
    let resp = client
        .get(url.clone())
        .send()
        .map_err(|source| DownloadError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = resp.status();
    debug!(%status, "response received");
    if !status.is_success() {
        return Err(DownloadError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = resp.bytes().map_err(|source| DownloadError::Body {
        url: url.to_string(),
        source,
    })?;
    debug!(bytes = body.len(), "body read");
    Ok(body.to_vec())
}
