use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{Result, WordFreqError};


// READ
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    log::debug!("read {} bytes from {}", text.len(), path.display());
    return Ok(text);
}

// FETCH
pub fn fetch_text(url: &str, timeout: Duration) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;
    let response = client.get(url).send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(WordFreqError::HttpStatus(format!("{} returned {}", url, status)));
    }

    let text = response.text()?;
    log::debug!("fetched {} bytes from {}", text.len(), url);
    return Ok(text);
}

/// Like `fetch_text`, but a failed fetch is logged and turned into empty text,
/// which the pipeline counts as an empty document.
pub fn get_text(url: &str, timeout: Duration) -> String {
    match fetch_text(url, timeout) {
        Ok(text) => text,
        Err(e) => {
            log::error!("Error fetching data: {}", e);
            String::new()
        }
    }
}
