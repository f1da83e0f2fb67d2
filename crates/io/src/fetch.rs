//! HTTP acquisition of the timetable workbook and its listing page.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use tracing::info;

use crate::error::IoError;

/// Downloads `url` and returns the response body.
///
/// `timeout` bounds the whole request, connection included. There is no
/// retry.
///
/// # Errors
///
/// Returns [`IoError::Fetch`] on transport failure and
/// [`IoError::HttpStatus`] on a non-success status.
pub fn fetch_bytes(url: &str, timeout: Duration) -> Result<Vec<u8>, IoError> {
    let bytes = get(url, timeout)?
        .bytes()
        .map_err(|e| fetch_err(url, e))?;
    info!(url, n_bytes = bytes.len(), "workbook downloaded");
    Ok(bytes.to_vec())
}

/// Downloads `url` and decodes the body as text, honoring the declared
/// charset.
///
/// # Errors
///
/// Same as [`fetch_bytes`].
pub fn fetch_text(url: &str, timeout: Duration) -> Result<String, IoError> {
    let text = get(url, timeout)?.text().map_err(|e| fetch_err(url, e))?;
    info!(url, n_bytes = text.len(), "page downloaded");
    Ok(text)
}

fn get(url: &str, timeout: Duration) -> Result<Response, IoError> {
    let client = Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .build()
        .map_err(|e| fetch_err(url, e))?;

    info!(url, timeout_secs = timeout.as_secs(), "fetching");
    let response = client.get(url).send().map_err(|e| fetch_err(url, e))?;
    let status = response.status();
    if !status.is_success() {
        return Err(IoError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(response)
}

fn fetch_err(url: &str, e: reqwest::Error) -> IoError {
    IoError::Fetch {
        url: url.to_string(),
        reason: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_url_is_a_fetch_error() {
        let err = fetch_bytes("not a url", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, IoError::Fetch { ref url, .. } if url == "not a url"));
    }

    #[test]
    fn refused_connection_is_a_fetch_error() {
        // Port 9 (discard) is closed on test hosts.
        let err = fetch_bytes("http://127.0.0.1:9/t.xlsx", Duration::from_secs(2)).unwrap_err();
        assert!(matches!(err, IoError::Fetch { .. }));
    }

    #[test]
    fn page_fetch_shares_error_mapping() {
        let err = fetch_text("not a url", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, IoError::Fetch { ref url, .. } if url == "not a url"));
    }
}
