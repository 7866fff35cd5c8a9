//! HTTP client creation and configuration utilities

use reqwest::Client;
use std::time::Duration;

use crate::constants::{HTTP_POOL_MAX_IDLE_PER_HOST, USER_AGENT};

/// Creates the HTTP client used for every score request.
///
/// `timeout_seconds` bounds connecting and each read separately, so a
/// stalled server cannot hold a fetch open indefinitely.
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    let timeout = Duration::from_secs(timeout_seconds);
    Client::builder()
        .connect_timeout(timeout)
        .read_timeout(timeout)
        .user_agent(USER_AGENT)
        .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
}

/// Creates an HTTP client for testing with default timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client_with_timeout(crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS)
        .expect("Failed to create test HTTP client")
}
