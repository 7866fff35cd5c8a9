//! HTTP GET with error classification

use reqwest::Client;
use tracing::{debug, error, instrument};

use super::urls::redact_api_key;
use crate::data_fetcher::models::MatchRecord;
use crate::data_fetcher::processors::parse_matches;
use crate::error::AppError;

/// Performs a GET and returns the body of a 2xx response.
///
/// Transport failures, non-success statuses and empty bodies are mapped to
/// specific [`AppError`] variants. No retries happen here: the next
/// scheduled refresh is the retry.
#[instrument(skip(client, url), fields(url = %redact_api_key(url)))]
pub async fn fetch_text(client: &Client, url: &str) -> Result<String, AppError> {
    let log_url = redact_api_key(url);

    let response = client.get(url).send().await.map_err(|e| {
        error!("Request failed for URL {}: {}", log_url, e);
        if e.is_timeout() {
            AppError::network_timeout(&log_url)
        } else if e.is_connect() {
            AppError::network_connection(&log_url, e.to_string())
        } else {
            AppError::ApiFetch(e)
        }
    })?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let reason = status.canonical_reason().unwrap_or("Unknown error");
        error!("HTTP {} - {} (URL: {})", status.as_u16(), reason, log_url);
        return Err(AppError::from_status(status.as_u16(), reason, &log_url));
    }

    let text = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", log_url, e);
        if e.is_timeout() {
            AppError::network_timeout(&log_url)
        } else {
            AppError::ApiFetch(e)
        }
    })?;

    if text.trim().is_empty() {
        return Err(AppError::api_no_data("Response body is empty", log_url));
    }

    debug!("Response length: {} bytes", text.len());
    Ok(text)
}

/// Fetches and normalizes a match list from `url`.
///
/// A body that is not JSON at all is reported as malformed; a JSON body
/// with unexpected content normalizes to an empty list.
pub async fn fetch_matches(client: &Client, url: &str) -> Result<Vec<MatchRecord>, AppError> {
    let text = fetch_text(client, url).await?;

    let trimmed = text.trim_start();
    if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
        let preview: String = text.chars().take(200).collect();
        error!("Response is not JSON (first 200 chars): {preview}");
        return Err(AppError::api_malformed_json(
            "Response is not valid JSON",
            redact_api_key(url),
        ));
    }

    Ok(parse_matches(&text))
}
