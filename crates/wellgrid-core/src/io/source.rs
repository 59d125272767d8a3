use std::path::Path;
use std::time::Duration;

use tracing::debug;

use crate::error::{Result, WellgridError};

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Read the raw bytes behind `source`: an `http(s)://` URL or a local path.
///
/// Remote fetches are bounded by `timeout` and a non-success status is an
/// error.
pub fn fetch_bytes(source: &str, timeout: Duration) -> Result<Vec<u8>> {
    if !is_remote(source) {
        debug!(path = source, "Reading local source");
        return Ok(std::fs::read(Path::new(source))?);
    }

    debug!(url = source, timeout_secs = timeout.as_secs(), "Fetching remote source");
    let fetch_err = |e: reqwest::Error| WellgridError::Fetch {
        source_ref: source.to_string(),
        reason: e.to_string(),
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(fetch_err)?;
    let bytes = client
        .get(source)
        .send()
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.bytes())
        .map_err(fetch_err)?;

    Ok(bytes.to_vec())
}
