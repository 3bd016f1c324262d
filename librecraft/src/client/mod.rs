//! Shared HTTP plumbing for the host and image-API clients.
//!
//! Both clients are thin wrappers over reqwest; this module holds the pieces
//! they have in common: client construction, reqwest error translation, and
//! response status checking.

use crate::error::{RecraftError, Result};
use reqwest::{Client, Response, StatusCode};

#[cfg(test)]
mod tests;

/// Builds a reqwest client with default settings.
///
/// No request timeout is configured on purpose: the image API is called with
/// `Prefer: wait` and may legitimately block until generation completes.
pub(crate) fn build_http_client() -> Result<Client> {
    Client::builder()
        .build()
        .map_err(|e| RecraftError::network_with_source("Failed to create HTTP client", e))
}

/// Translates a reqwest error into a RecraftError.
pub(crate) fn translate_reqwest_error(error: reqwest::Error, url: &str) -> RecraftError {
    if error.is_timeout() {
        RecraftError::network(format!("Request to {} timed out", url))
    } else if error.is_connect() {
        RecraftError::network_with_source(format!("Failed to connect to {}", url), error)
    } else if error.is_request() {
        RecraftError::network_with_source(format!("Failed to send request to {}", url), error)
    } else {
        RecraftError::network_with_source(format!("Network error communicating with {}", url), error)
    }
}

/// Checks the HTTP response status and translates failures to RecraftError.
pub(crate) async fn check_response_status(response: Response) -> Result<Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    // Try to extract an error message from the response body
    let url = response.url().to_string();
    let error_body = response
        .text()
        .await
        .unwrap_or_else(|_| String::from("(unable to read response body)"));

    match status {
        StatusCode::UNAUTHORIZED => Err(RecraftError::authentication(
            format!("Authentication required for {}: {}", url, error_body),
            Some(401),
        )),
        StatusCode::FORBIDDEN => Err(RecraftError::authentication(
            format!("Access forbidden for {}: {}", url, error_body),
            Some(403),
        )),
        _ => Err(RecraftError::server(
            format!("HTTP {} from {}: {}", status.as_u16(), url, error_body),
            status.as_u16(),
        )),
    }
}
